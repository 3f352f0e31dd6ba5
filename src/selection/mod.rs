pub mod comparison;
pub mod favorites;

pub use comparison::{AmenityRow, ComparisonSet, COMPARISON_CAPACITY};
pub use favorites::Favorites;

use crate::models::Listing;

/// Favorites and comparison queue for one browsing session
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    favorites: Favorites,
    comparison: ComparisonSet,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        self.favorites.toggle(id)
    }

    pub fn is_favorited(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn add_to_comparison(&mut self, listing: Listing) -> Option<Listing> {
        self.comparison.add(listing)
    }

    pub fn remove_from_comparison(&mut self, id: &str) -> bool {
        self.comparison.remove(id)
    }

    pub fn clear_comparison(&mut self) {
        self.comparison.clear();
    }

    pub fn is_in_comparison(&self, id: &str) -> bool {
        self.comparison.contains(id)
    }

    /// Number of listings queued for comparison
    pub fn count(&self) -> usize {
        self.comparison.count()
    }

    pub fn comparison(&self) -> &ComparisonSet {
        &self.comparison
    }

    pub fn open_comparison(&mut self) {
        self.comparison.open();
    }

    pub fn close_comparison(&mut self) {
        self.comparison.close();
    }
}
