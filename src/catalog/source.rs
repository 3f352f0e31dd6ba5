use crate::models::{Listing, RoomType};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Common trait for everything that can supply the listing catalog
///
/// Loading happens once, before a session starts. Validation of the loaded
/// listings is left to [`crate::catalog::Catalog::new`].
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load every listing from the source
    async fn load(&self) -> Result<Vec<Listing>>;

    /// Get the name of the catalog source
    fn source_name(&self) -> &'static str;
}

/// Built-in catalog of student accommodation around Harare
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleCatalog;

#[async_trait]
impl CatalogSource for SampleCatalog {
    async fn load(&self) -> Result<Vec<Listing>> {
        let listings = sample_listings();
        info!("📋 Loaded {} sample listings", listings.len());
        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "Sample"
    }
}

/// Catalog stored as a JSON array of listings
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for JsonFileCatalog {
    async fn load(&self) -> Result<Vec<Listing>> {
        debug!("Reading catalog from {}", self.path.display());

        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read catalog file {}", self.path.display()))?;

        let listings: Vec<Listing> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse catalog file {}", self.path.display()))?;

        if listings.is_empty() {
            warn!("Catalog file {} contains no listings", self.path.display());
        } else {
            info!(
                "Loaded {} listings from {}",
                listings.len(),
                self.path.display()
            );
        }

        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "JSON file"
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The six listings shipped with the app
pub fn sample_listings() -> Vec<Listing> {
    const UZ: &str = "University of Zimbabwe";

    vec![
        Listing {
            id: "1".to_string(),
            title: "Modern Single Room in Mount Pleasant".to_string(),
            location: "Mount Pleasant, Harare".to_string(),
            institution: UZ.to_string(),
            monthly_price: 250,
            rating: 4.8,
            review_count: 24,
            images: strings(&[
                "/assets/property-1-main.jpg",
                "/assets/property-1-bath.jpg",
                "/assets/sample-room-1.jpg",
            ]),
            amenities: strings(&["WiFi", "Kitchen", "Security", "Parking"])
                .into_iter()
                .collect(),
            room_type: RoomType::Single,
            available_spots: 2,
            is_trusted_host: true,
            is_verified: true,
        },
        Listing {
            id: "2".to_string(),
            title: "Shared Kitchen & Living Space".to_string(),
            location: "Avondale, Harare".to_string(),
            institution: UZ.to_string(),
            monthly_price: 180,
            rating: 4.6,
            review_count: 18,
            images: strings(&[
                "/assets/property-2-main.jpg",
                "/assets/property-2-living.jpg",
                "/assets/sample-room-2.jpg",
            ]),
            amenities: strings(&["WiFi", "Kitchen", "Laundry", "Garden"])
                .into_iter()
                .collect(),
            room_type: RoomType::SharedHouse,
            available_spots: 1,
            is_trusted_host: false,
            is_verified: true,
        },
        Listing {
            id: "3".to_string(),
            title: "Clean Private Bathroom".to_string(),
            location: "Newlands, Harare".to_string(),
            institution: UZ.to_string(),
            monthly_price: 300,
            rating: 4.9,
            review_count: 31,
            images: strings(&[
                "/assets/property-3-main.jpg",
                "/assets/property-3-bedroom.jpg",
                "/assets/sample-room-3.jpg",
            ]),
            amenities: strings(&["WiFi", "Private Bathroom", "Security", "Parking"])
                .into_iter()
                .collect(),
            room_type: RoomType::Studio,
            available_spots: 1,
            is_trusted_host: true,
            is_verified: true,
        },
        Listing {
            id: "4".to_string(),
            title: "Budget-Friendly Shared Room".to_string(),
            location: "Marlborough, Harare".to_string(),
            institution: UZ.to_string(),
            monthly_price: 120,
            rating: 4.3,
            review_count: 12,
            images: strings(&[
                "/assets/property-4-main.jpg",
                "/assets/property-4-study.jpg",
                "/assets/sample-room-1.jpg",
            ]),
            amenities: strings(&["WiFi", "Kitchen", "Bus Route"]).into_iter().collect(),
            room_type: RoomType::SharedRoom,
            available_spots: 3,
            is_trusted_host: false,
            is_verified: true,
        },
        Listing {
            id: "5".to_string(),
            title: "Luxury Student Apartment".to_string(),
            location: "Borrowdale, Harare".to_string(),
            institution: UZ.to_string(),
            monthly_price: 450,
            rating: 4.9,
            review_count: 41,
            images: strings(&[
                "/assets/property-5-main.jpg",
                "/assets/property-5-kitchen.jpg",
                "/assets/sample-room-2.jpg",
            ]),
            amenities: strings(&["WiFi", "Gym", "Pool", "Security", "Parking"])
                .into_iter()
                .collect(),
            room_type: RoomType::Studio,
            available_spots: 1,
            is_trusted_host: true,
            is_verified: true,
        },
        Listing {
            id: "6".to_string(),
            title: "Cozy Room Near Campus".to_string(),
            location: "Eastlea, Harare".to_string(),
            institution: UZ.to_string(),
            monthly_price: 200,
            rating: 4.5,
            review_count: 16,
            images: strings(&[
                "/assets/property-6-main.jpg",
                "/assets/property-6-study.jpg",
                "/assets/sample-room-3.jpg",
            ]),
            amenities: strings(&["WiFi", "Kitchen", "Study Area"]).into_iter().collect(),
            room_type: RoomType::Single,
            available_spots: 2,
            is_trusted_host: false,
            is_verified: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_sample_catalog_loads_six_listings() {
        let listings = SampleCatalog.load().await.unwrap();
        let prices: Vec<u32> = listings.iter().map(|l| l.monthly_price).collect();
        assert_eq!(prices, vec![250, 180, 300, 120, 450, 200]);
        assert!(listings.iter().all(|l| l.location.contains("Harare")));
    }

    #[tokio::test]
    async fn test_json_file_catalog_round_trips_sample_data() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string_pretty(&sample_listings()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let source = JsonFileCatalog::new(file.path());
        let listings = source.load().await.unwrap();
        assert_eq!(listings, sample_listings());
        assert_eq!(source.source_name(), "JSON file");
    }

    #[tokio::test]
    async fn test_json_file_catalog_reports_missing_and_malformed_files() {
        let missing = JsonFileCatalog::new("/definitely/not/here.json");
        assert!(missing.load().await.is_err());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        let err = JsonFileCatalog::new(file.path()).load().await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse catalog file"));
    }
}
