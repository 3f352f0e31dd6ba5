use crate::models::Listing;
use std::collections::{BTreeSet, VecDeque};
use tracing::debug;

/// Most listings that can be compared side by side
pub const COMPARISON_CAPACITY: usize = 3;

/// Listings queued for side-by-side comparison
///
/// Holds full snapshots in insertion order. Adding past capacity evicts the
/// oldest entry.
#[derive(Debug, Clone, Default)]
pub struct ComparisonSet {
    entries: VecDeque<Listing>,
    open: bool,
}

/// One row of the comparison table: an amenity and, per held listing, whether it has it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmenityRow {
    pub amenity: String,
    pub present: Vec<bool>,
}

impl ComparisonSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a listing. Returns the evicted listing, if any.
    ///
    /// A listing already present is left where it is.
    pub fn add(&mut self, listing: Listing) -> Option<Listing> {
        if self.contains(&listing.id) {
            debug!("Listing {} already in comparison", listing.id);
            return None;
        }

        let evicted = if self.entries.len() >= COMPARISON_CAPACITY {
            self.entries.pop_front()
        } else {
            None
        };
        if let Some(old) = &evicted {
            debug!("Comparison full, evicting oldest listing {}", old.id);
        }

        debug!("Added {} to comparison", listing.id);
        self.entries.push_back(listing);
        evicted
    }

    /// Returns whether a listing was removed
    pub fn remove(&mut self, id: &str) -> bool {
        match self.entries.iter().position(|listing| listing.id == id) {
            Some(pos) => {
                self.entries.remove(pos);
                debug!("Removed {} from comparison", id);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        debug!("Comparison cleared");
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|listing| listing.id == id)
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Held listings, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Listing> {
        self.entries.iter()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|listing| listing.id.as_str()).collect()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Sorted union of amenities across every held listing
    pub fn all_amenities(&self) -> BTreeSet<&str> {
        self.entries
            .iter()
            .flat_map(|listing| listing.amenities.iter().map(String::as_str))
            .collect()
    }

    pub fn amenity_matrix(&self) -> Vec<AmenityRow> {
        self.all_amenities()
            .into_iter()
            .map(|amenity| AmenityRow {
                amenity: amenity.to_string(),
                present: self
                    .entries
                    .iter()
                    .map(|listing| listing.has_amenity(amenity))
                    .collect(),
            })
            .collect()
    }
}
