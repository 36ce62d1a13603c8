use std::collections::HashSet;

/// Grow-only set of posted review ids.
///
/// Membership checks go through a `HashSet`; the `Vec` keeps insertion order
/// so the persisted file is written deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostedIds {
    order: Vec<String>,
    index: HashSet<String>,
}

impl PostedIds {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains(id)
    }

    /// Adds `id` to the set. Returns `false` if it was already present.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.index.contains(&id) {
            return false;
        }
        self.index.insert(id.clone());
        self.order.push(id);
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Ids in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.order
    }
}

impl<S: Into<String>> FromIterator<S> for PostedIds {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut ids = Self::new();
        for id in iter {
            ids.insert(id);
        }
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_idempotent() {
        let mut ids = PostedIds::new();
        assert!(ids.insert("a"));
        assert!(!ids.insert("a"));
        assert_eq!(ids.len(), 1);
    }

    #[test]
    fn preserves_insertion_order() {
        let ids: PostedIds = ["c", "a", "b", "a"].into_iter().collect();
        assert_eq!(ids.iter().collect::<Vec<_>>(), vec!["c", "a", "b"]);
    }

    #[test]
    fn contains_reflects_inserts() {
        let mut ids = PostedIds::new();
        assert!(!ids.contains("r1"));
        ids.insert("r1");
        assert!(ids.contains("r1"));
        assert!(!ids.is_empty());
    }
}
