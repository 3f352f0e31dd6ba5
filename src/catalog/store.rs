use crate::catalog::criteria::{CriteriaPatch, FilterCriteria};
use crate::models::Listing;
use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Read-only set of listings available for a session
#[derive(Debug, Clone)]
pub struct Catalog {
    listings: Vec<Listing>,
    loaded_at: DateTime<Utc>,
}

impl Catalog {
    /// Build a catalog, rejecting malformed listings
    pub fn new(listings: Vec<Listing>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(listings.len());

        for listing in &listings {
            if listing.id.trim().is_empty() {
                bail!("Listing {:?} has an empty id", listing.title);
            }
            if !seen.insert(listing.id.as_str()) {
                bail!("Duplicate listing id: {}", listing.id);
            }
            if listing.images.is_empty() {
                bail!("Listing {} has no images", listing.id);
            }
            if !(0.0..=5.0).contains(&listing.rating) {
                bail!(
                    "Listing {} has rating {} outside 0-5",
                    listing.id,
                    listing.rating
                );
            }
        }

        Ok(Self {
            listings,
            loaded_at: Utc::now(),
        })
    }

    pub fn get(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|listing| listing.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Listing> {
        self.listings.iter()
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Distinct institutions in first-seen order
    pub fn institutions(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for listing in &self.listings {
            if !names.contains(&listing.institution.as_str()) {
                names.push(&listing.institution);
            }
        }
        names
    }
}

/// Listings matching `criteria`, in catalog order
pub fn filter_listings<'a>(listings: &'a [Listing], criteria: &FilterCriteria) -> Vec<&'a Listing> {
    listings
        .iter()
        .filter(|listing| criteria.matches(listing))
        .collect()
}

/// Holds the catalog plus the current criteria and derives the visible result set
#[derive(Debug, Clone)]
pub struct CatalogStore {
    catalog: Arc<Catalog>,
    criteria: FilterCriteria,
    /// Catalog indices of the current results, recomputed on every mutation
    matches: Vec<usize>,
}

impl CatalogStore {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let matches = (0..catalog.len()).collect();
        Self {
            catalog,
            criteria: FilterCriteria::default(),
            matches,
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_free_text_query(&mut self, text: impl Into<String>) {
        self.criteria.query = text.into();
        debug!("Search query set to {:?}", self.criteria.query);
        self.recompute();
    }

    pub fn set_criteria(&mut self, patch: CriteriaPatch) {
        debug!("Applying criteria patch: {:?}", patch);
        patch.apply(&mut self.criteria);
        self.recompute();
    }

    /// Reset every constraint, including the free-text query
    pub fn clear_criteria(&mut self) {
        self.criteria = FilterCriteria::default();
        debug!("Criteria cleared");
        self.recompute();
    }

    pub fn filtered_listings(&self) -> Vec<&Listing> {
        let listings = self.catalog.listings();
        self.matches.iter().map(|&idx| &listings[idx]).collect()
    }

    pub fn result_count(&self) -> usize {
        self.matches.len()
    }

    fn recompute(&mut self) {
        self.matches = self
            .catalog
            .iter()
            .enumerate()
            .filter(|(_, listing)| self.criteria.matches(listing))
            .map(|(idx, _)| idx)
            .collect();

        debug!(
            "{} of {} listings match current criteria",
            self.matches.len(),
            self.catalog.len()
        );
    }
}
