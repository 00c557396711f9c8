//! Topic registry for lookup and admin CRUD.
//!
//! In-memory storage of showcase topics keyed by id. A persistent
//! backend is a collaborator concern; embedding callers can load topics
//! from wherever they live and mirror them here.

use rustc_hash::FxHashMap;
use uuid::Uuid;

use super::topic::ShowcaseTopic;

/// Registry of showcase topics.
///
/// ## Example
///
/// ```
/// use showcase_duel::core::ImageItem;
/// use showcase_duel::showcase::{ShowcaseRegistry, ShowcaseTopic};
///
/// let mut registry = ShowcaseRegistry::new();
/// let topic = ShowcaseTopic::new("Fruit", "Food", "")
///     .with_image(ImageItem::new("a", "apple", "ref://a"));
/// let id = topic.id;
///
/// registry.insert(topic);
/// assert_eq!(registry.get(id).unwrap().name, "Fruit");
/// ```
#[derive(Clone, Debug, Default)]
pub struct ShowcaseRegistry {
    topics: FxHashMap<Uuid, ShowcaseTopic>,
}

impl ShowcaseRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a topic, keyed by its id.
    ///
    /// Returns the previous topic under that id, if any.
    pub fn insert(&mut self, topic: ShowcaseTopic) -> Option<ShowcaseTopic> {
        self.topics.insert(topic.id, topic)
    }

    /// Get a topic by id.
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&ShowcaseTopic> {
        self.topics.get(&id)
    }

    /// Get a mutable topic by id.
    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut ShowcaseTopic> {
        self.topics.get_mut(&id)
    }

    /// Remove a topic by id, returning it if present.
    pub fn remove(&mut self, id: Uuid) -> Option<ShowcaseTopic> {
        self.topics.remove(&id)
    }

    /// Check whether a topic id is registered.
    #[must_use]
    pub fn contains(&self, id: Uuid) -> bool {
        self.topics.contains_key(&id)
    }

    /// Number of registered topics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// Is the registry empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Iterate over all topics (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &ShowcaseTopic> {
        self.topics.values()
    }

    /// Iterate over topics in a category.
    pub fn find_by_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a ShowcaseTopic> {
        self.topics.values().filter(move |t| t.category == category)
    }

    /// Topics with at least one image, i.e. those a session can be
    /// started from.
    pub fn playable(&self) -> impl Iterator<Item = &ShowcaseTopic> {
        self.topics.values().filter(|t| t.is_playable())
    }
}
