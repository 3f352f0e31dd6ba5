use std::env;
use std::path::PathBuf;

/// Environment variable naming a JSON catalog file
pub const CATALOG_ENV: &str = "RENTAL_SCOUT_CATALOG";

/// Runtime settings for the demo binary
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// JSON catalog to load; the built-in sample catalog when unset
    pub catalog_path: Option<PathBuf>,
    /// `tracing` filter directive
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            catalog_path: lookup(CATALOG_ENV)
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from),
            log_filter: lookup("RUST_LOG")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(defaults.log_filter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_set() {
        let settings = Settings::from_lookup(|_| None);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_reads_catalog_path_and_filter() {
        let settings = Settings::from_lookup(|key| match key {
            CATALOG_ENV => Some("/data/listings.json".to_string()),
            "RUST_LOG" => Some("rental_scout=debug".to_string()),
            _ => None,
        });
        assert_eq!(settings.catalog_path, Some(PathBuf::from("/data/listings.json")));
        assert_eq!(settings.log_filter, "rental_scout=debug");
    }

    #[test]
    fn test_blank_values_fall_back() {
        let settings = Settings::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(settings, Settings::default());
    }
}
