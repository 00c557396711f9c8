//! Showcase topics: named, categorized sets of guessable images.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::ImageItem;

/// A named set of images an admin has prepared for play.
///
/// ## Example
///
/// ```
/// use showcase_duel::core::ImageItem;
/// use showcase_duel::showcase::ShowcaseTopic;
///
/// let topic = ShowcaseTopic::new("Fruit", "Food", "Common fruit")
///     .with_image(ImageItem::new("a", "apple", "ref://a"));
///
/// assert!(topic.is_playable());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowcaseTopic {
    /// Unique topic identifier.
    pub id: Uuid,

    /// Topic name shown in menus and stamped onto game records.
    pub name: String,

    /// Free-form category label.
    pub category: String,

    /// Free-form description.
    pub description: String,

    /// The guessable images, in authoring order. Sessions shuffle their
    /// own copy; the topic itself is never reordered.
    pub images: Vec<ImageItem>,
}

impl ShowcaseTopic {
    /// Create an empty topic with a fresh id.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category: category.into(),
            description: description.into(),
            images: Vec::new(),
        }
    }

    /// Add an image (builder pattern).
    #[must_use]
    pub fn with_image(mut self, image: ImageItem) -> Self {
        self.images.push(image);
        self
    }

    /// Add an image in place.
    pub fn add_image(&mut self, image: ImageItem) {
        self.images.push(image);
    }

    /// A topic can host a session only if it has at least one image.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        !self.images.is_empty()
    }
}
