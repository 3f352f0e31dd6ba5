//! Browsing session handed to rendering code.
//!
//! A [`Session`] owns the filter state and selections for one user and shares
//! the read-only catalog. Every method runs to completion synchronously; views
//! re-read state after each call.

use crate::catalog::{Catalog, CatalogStore, CriteriaPatch, FilterCriteria};
use crate::models::Listing;
use crate::selection::{ComparisonSet, SelectionManager};
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct Session {
    store: CatalogStore,
    selection: SelectionManager,
}

impl Session {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        debug!("Starting session over {} listings", catalog.len());
        Self {
            store: CatalogStore::new(catalog),
            selection: SelectionManager::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        self.store.catalog()
    }

    // Search and filters

    pub fn set_free_text_query(&mut self, text: impl Into<String>) {
        self.store.set_free_text_query(text);
    }

    pub fn set_criteria(&mut self, patch: CriteriaPatch) {
        self.store.set_criteria(patch);
    }

    pub fn clear_criteria(&mut self) {
        self.store.clear_criteria();
    }

    pub fn criteria(&self) -> &FilterCriteria {
        self.store.criteria()
    }

    pub fn filtered_listings(&self) -> Vec<&Listing> {
        self.store.filtered_listings()
    }

    // Favorites

    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        self.selection.toggle_favorite(id)
    }

    pub fn is_favorited(&self, id: &str) -> bool {
        self.selection.is_favorited(id)
    }

    /// Favorited listings that exist in the catalog, in catalog order
    pub fn favorite_listings(&self) -> Vec<&Listing> {
        self.store
            .catalog()
            .iter()
            .filter(|listing| self.selection.is_favorited(&listing.id))
            .collect()
    }

    // Comparison

    pub fn add_to_comparison(&mut self, listing: Listing) -> Option<Listing> {
        self.selection.add_to_comparison(listing)
    }

    /// Queue the catalog snapshot for `id`. Returns false for unknown ids.
    pub fn add_to_comparison_by_id(&mut self, id: &str) -> bool {
        match self.store.catalog().get(id) {
            Some(listing) => {
                let listing = listing.clone();
                self.selection.add_to_comparison(listing);
                true
            }
            None => {
                warn!("Cannot compare unknown listing {}", id);
                false
            }
        }
    }

    pub fn remove_from_comparison(&mut self, id: &str) -> bool {
        self.selection.remove_from_comparison(id)
    }

    pub fn clear_comparison(&mut self) {
        self.selection.clear_comparison();
    }

    pub fn is_in_comparison(&self, id: &str) -> bool {
        self.selection.is_in_comparison(id)
    }

    pub fn comparison_count(&self) -> usize {
        self.selection.count()
    }

    pub fn comparison(&self) -> &ComparisonSet {
        self.selection.comparison()
    }

    pub fn open_comparison(&mut self) {
        self.selection.open_comparison();
    }

    pub fn close_comparison(&mut self) {
        self.selection.close_comparison();
    }

    pub fn is_comparison_open(&self) -> bool {
        self.selection.comparison().is_open()
    }
}
