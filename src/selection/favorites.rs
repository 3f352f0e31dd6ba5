use tracing::debug;

/// Listing ids the user has marked as favorites
///
/// Ids are not checked against the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: Vec<String>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` if absent, remove it if present. Returns the new membership.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|fav| fav == id) {
            self.ids.remove(pos);
            debug!("Removed {} from favorites", id);
            false
        } else {
            self.ids.push(id.to_string());
            debug!("Added {} to favorites", id);
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|fav| fav == id)
    }

    /// Favorited ids in the order they were added
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_membership() {
        let mut favorites = Favorites::new();
        assert!(favorites.toggle("1"));
        assert!(favorites.contains("1"));
        assert!(!favorites.toggle("1"));
        assert!(!favorites.contains("1"));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_toggle_leaves_other_ids_alone() {
        let mut favorites = Favorites::new();
        favorites.toggle("1");
        favorites.toggle("2");
        favorites.toggle("3");
        favorites.toggle("2");

        assert_eq!(favorites.iter().collect::<Vec<_>>(), vec!["1", "3"]);
        assert_eq!(favorites.len(), 2);
    }

    #[test]
    fn test_unknown_ids_are_tolerated() {
        let mut favorites = Favorites::new();
        assert!(favorites.toggle("not-in-any-catalog"));
        assert!(favorites.contains("not-in-any-catalog"));
    }
}
