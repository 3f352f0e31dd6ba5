use crate::models::{Listing, RoomType};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Search and filter constraints applied to the catalog
///
/// Unset fields impose no constraint, so `FilterCriteria::default()` matches
/// every listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Matched case-insensitively against title, location and institution
    pub query: String,
    /// Exact institution name
    pub institution: Option<String>,
    pub room_type: Option<RoomType>,
    /// Inclusive lower bound on monthly price
    pub price_min: Option<u32>,
    /// Inclusive upper bound on monthly price
    pub price_max: Option<u32>,
    /// Every tag must be present on the listing
    pub required_amenities: BTreeSet<String>,
    /// Case-insensitive substring of the listing location
    pub location: Option<String>,
    /// Recorded for display only; listings carry no availability date
    pub move_in_date: Option<NaiveDate>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Whether a listing satisfies every active constraint
    pub fn matches(&self, listing: &Listing) -> bool {
        if !self.query.is_empty() {
            let needle = self.query.to_lowercase();
            let hit = [&listing.title, &listing.location, &listing.institution]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        if let Some(institution) = &self.institution {
            if listing.institution != *institution {
                return false;
            }
        }

        if let Some(room_type) = self.room_type {
            if listing.room_type != room_type {
                return false;
            }
        }

        if let Some(min) = self.price_min {
            if listing.monthly_price < min {
                return false;
            }
        }
        if let Some(max) = self.price_max {
            if listing.monthly_price > max {
                return false;
            }
        }

        if !self
            .required_amenities
            .iter()
            .all(|tag| listing.has_amenity(tag))
        {
            return false;
        }

        if let Some(location) = &self.location {
            if !listing
                .location
                .to_lowercase()
                .contains(&location.to_lowercase())
            {
                return false;
            }
        }

        true
    }

    /// Labels for every active constraint, in the order the filter bar shows them
    pub fn active_filters(&self) -> Vec<String> {
        let mut labels = Vec::new();

        if !self.query.is_empty() {
            labels.push(format!("\"{}\"", self.query));
        }
        if let Some(institution) = &self.institution {
            labels.push(institution.clone());
        }
        if let Some(room_type) = self.room_type {
            labels.push(room_type.label().to_string());
        }
        match (self.price_min, self.price_max) {
            (Some(min), Some(max)) => labels.push(format!("${} - ${}", min, max)),
            (Some(min), None) => labels.push(format!("From ${}", min)),
            (None, Some(max)) => labels.push(format!("Up to ${}", max)),
            (None, None) => {}
        }
        if !self.required_amenities.is_empty() {
            let tags: Vec<&str> = self.required_amenities.iter().map(String::as_str).collect();
            labels.push(tags.join(" + "));
        }
        if let Some(location) = &self.location {
            labels.push(format!("Near {}", location));
        }
        if let Some(date) = self.move_in_date {
            labels.push(format!("Move in {}", date.format("%Y-%m-%d")));
        }

        labels
    }
}

/// Partial update to [`FilterCriteria`]
///
/// Each field is `None` to leave the current value alone. Optional criteria
/// use `Some(None)` to clear the constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CriteriaPatch {
    pub institution: Option<Option<String>>,
    pub room_type: Option<Option<RoomType>>,
    pub price_min: Option<Option<u32>>,
    pub price_max: Option<Option<u32>>,
    pub required_amenities: Option<BTreeSet<String>>,
    pub location: Option<Option<String>>,
    pub move_in_date: Option<Option<NaiveDate>>,
}

impl CriteriaPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn institution(mut self, institution: impl Into<String>) -> Self {
        self.institution = Some(non_blank(institution.into()));
        self
    }

    pub fn any_institution(mut self) -> Self {
        self.institution = Some(None);
        self
    }

    pub fn room_type(mut self, room_type: RoomType) -> Self {
        self.room_type = Some(Some(room_type));
        self
    }

    pub fn any_room_type(mut self) -> Self {
        self.room_type = Some(None);
        self
    }

    pub fn price_min(mut self, min: u32) -> Self {
        self.price_min = Some(Some(min));
        self
    }

    pub fn price_max(mut self, max: u32) -> Self {
        self.price_max = Some(Some(max));
        self
    }

    /// Set both bounds from already-parsed UI input; `None` clears a bound
    pub fn price_range(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.price_min = Some(min);
        self.price_max = Some(max);
        self
    }

    pub fn amenities<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_amenities = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(non_blank(location.into()));
        self
    }

    pub fn any_location(mut self) -> Self {
        self.location = Some(None);
        self
    }

    pub fn move_in_date(mut self, date: NaiveDate) -> Self {
        self.move_in_date = Some(Some(date));
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge into `criteria`, overwriting only the fields this patch carries
    pub fn apply(self, criteria: &mut FilterCriteria) {
        if let Some(institution) = self.institution {
            criteria.institution = institution;
        }
        if let Some(room_type) = self.room_type {
            criteria.room_type = room_type;
        }
        if let Some(min) = self.price_min {
            criteria.price_min = min;
        }
        if let Some(max) = self.price_max {
            criteria.price_max = max;
        }
        if let Some(tags) = self.required_amenities {
            criteria.required_amenities = tags;
        }
        if let Some(location) = self.location {
            criteria.location = location;
        }
        if let Some(date) = self.move_in_date {
            criteria.move_in_date = date;
        }
    }
}

// Blank text inputs mean "no constraint"
fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Parse a price bound typed into a filter box
///
/// Empty input clears the bound. Anything else must be a whole, non-negative
/// number of dollars.
pub fn parse_price_bound(text: &str) -> Result<Option<u32>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value = trimmed
        .parse::<u32>()
        .with_context(|| format!("Invalid price bound: {:?}", text))?;

    Ok(Some(value))
}
