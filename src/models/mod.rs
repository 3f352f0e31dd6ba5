use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Kind of room offered by a listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RoomType {
    #[serde(rename = "Single Room")]
    Single,
    #[serde(rename = "Shared Room")]
    SharedRoom,
    Studio,
    #[serde(rename = "Shared House")]
    SharedHouse,
}

impl RoomType {
    /// Every room type, in the order filter pickers show them
    pub const ALL: [RoomType; 4] = [
        RoomType::Single,
        RoomType::SharedRoom,
        RoomType::Studio,
        RoomType::SharedHouse,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RoomType::Single => "Single Room",
            RoomType::SharedRoom => "Shared Room",
            RoomType::Studio => "Studio",
            RoomType::SharedHouse => "Shared House",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RoomType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoomType::ALL
            .into_iter()
            .find(|room_type| room_type.label() == s.trim())
            .ok_or_else(|| anyhow::anyhow!("Unknown room type: {:?}", s))
    }
}

/// Icon shown next to an amenity tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmenityIcon {
    Wifi,
    Parking,
    Kitchen,
    Security,
    Generic,
}

impl AmenityIcon {
    /// Total mapping from a free-form amenity tag; unknown tags get `Generic`
    pub fn for_tag(tag: &str) -> Self {
        match tag {
            "WiFi" => AmenityIcon::Wifi,
            "Parking" => AmenityIcon::Parking,
            "Kitchen" => AmenityIcon::Kitchen,
            "Security" => AmenityIcon::Security,
            _ => AmenityIcon::Generic,
        }
    }
}

/// A rental listing as loaded into the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub location: String,
    pub institution: String,
    /// Monthly rent in USD
    pub monthly_price: u32,
    pub rating: f32,
    pub review_count: u32,
    pub images: Vec<String>,
    pub amenities: BTreeSet<String>,
    pub room_type: RoomType,
    pub available_spots: u32,
    pub is_trusted_host: bool,
    pub is_verified: bool,
}

impl Listing {
    pub fn has_amenity(&self, tag: &str) -> bool {
        self.amenities.contains(tag)
    }

    /// First image, used as the card thumbnail
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_type_labels_round_trip_through_from_str() {
        for room_type in RoomType::ALL {
            assert_eq!(room_type.label().parse::<RoomType>().unwrap(), room_type);
        }
        assert!("Penthouse".parse::<RoomType>().is_err());
    }

    #[test]
    fn test_room_type_serializes_as_display_label() {
        let json = serde_json::to_string(&RoomType::SharedHouse).unwrap();
        assert_eq!(json, "\"Shared House\"");
        let parsed: RoomType = serde_json::from_str("\"Single Room\"").unwrap();
        assert_eq!(parsed, RoomType::Single);
    }

    #[test]
    fn test_amenity_icon_mapping_is_total() {
        assert_eq!(AmenityIcon::for_tag("WiFi"), AmenityIcon::Wifi);
        assert_eq!(AmenityIcon::for_tag("Parking"), AmenityIcon::Parking);
        assert_eq!(AmenityIcon::for_tag("Pool"), AmenityIcon::Generic);
        assert_eq!(AmenityIcon::for_tag(""), AmenityIcon::Generic);
    }

    #[test]
    fn test_listing_deserializes_from_camel_case_json() {
        let json = r#"{
            "id": "7",
            "title": "Garden Flat",
            "location": "Hatfield, Harare",
            "institution": "University of Zimbabwe",
            "monthlyPrice": 210,
            "rating": 4.2,
            "reviewCount": 9,
            "images": ["/img/7.jpg"],
            "amenities": ["WiFi", "Garden"],
            "roomType": "Studio",
            "availableSpots": 1,
            "isTrustedHost": false,
            "isVerified": true
        }"#;

        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.monthly_price, 210);
        assert_eq!(listing.room_type, RoomType::Studio);
        assert!(listing.has_amenity("Garden"));
        assert_eq!(listing.cover_image(), Some("/img/7.jpg"));
    }
}
