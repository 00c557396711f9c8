//! Image items: the guessable cards of a showcase.
//!
//! The engine never touches pixels. An `ImageItem` carries the answer
//! word plus an opaque reference the presentation layer resolves to an
//! actual picture (a data URL, a file path, a cache key — the engine
//! doesn't care).

use serde::{Deserialize, Serialize};

/// Opaque identifier for an image item.
///
/// Supplied by the acquisition layer (upload or web search); the engine
/// only compares it for equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageId(String);

impl ImageId {
    /// Create a new image ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One guessable image: the answer word plus a display reference.
///
/// Immutable once a session starts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageItem {
    /// Unique identifier within a topic.
    pub id: ImageId,

    /// The answer word players must guess.
    pub name: String,

    /// Opaque display reference resolved by the presentation layer.
    pub image_ref: String,
}

impl ImageItem {
    /// Create a new image item.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            id: ImageId::new(id),
            name: name.into(),
            image_ref: image_ref.into(),
        }
    }
}
