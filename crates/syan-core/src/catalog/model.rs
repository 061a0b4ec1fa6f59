//! Dataset catalog domain models.

use serde::Serialize;
use strum::{AsRefStr, Display, EnumString};

/// Scientific domain a dataset belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DomainCategory {
    Weather,
    Ocean,
    Biology,
    /// Harmful algal bloom / red tide observations
    Hab,
    WaterQuality,
}

impl DomainCategory {
    /// Human readable label shown next to dataset names.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Weather => "Weather",
            Self::Ocean => "Ocean",
            Self::Biology => "Biology",
            Self::Hab => "HAB/Red Tide",
            Self::WaterQuality => "Water Quality",
        }
    }

    /// Presentation colour for domain badges.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Weather => "#457b9d",
            Self::Ocean => "#e9c46a",
            Self::Biology => "#52b788",
            Self::Hab => "#ef4444",
            Self::WaterQuality => "#8b5cf6",
        }
    }
}

/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Static metadata describing one selectable data source.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetDescriptor {
    /// Unique within its catalog.
    pub id: &'static str,
    pub display_name: &'static str,
    pub domain: DomainCategory,
    /// Free-form year range, e.g. "1953-2025".
    pub coverage: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<GeoPoint>,
    pub color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<&'static str>,
}

impl DatasetDescriptor {
    /// Creates a descriptor without map coordinates or extended metadata.
    pub const fn new(
        id: &'static str,
        display_name: &'static str,
        domain: DomainCategory,
        coverage: &'static str,
        color: &'static str,
    ) -> Self {
        Self {
            id,
            display_name,
            domain,
            coverage,
            coordinates: None,
            color,
            short_name: None,
            description: None,
            records: None,
        }
    }

    /// Places the dataset on the map.
    pub const fn at(mut self, lat: f64, lng: f64) -> Self {
        self.coordinates = Some(GeoPoint { lat, lng });
        self
    }

    /// Adds the short name, description and record count shown on map cards.
    pub const fn with_details(
        mut self,
        short_name: &'static str,
        description: &'static str,
        records: &'static str,
    ) -> Self {
        self.short_name = Some(short_name);
        self.description = Some(description);
        self.records = Some(records);
        self
    }

    /// Line used in the composed context block: `- name (domain, coverage)`.
    pub fn context_line(&self) -> String {
        format!("- {} ({}, {})", self.display_name, self.domain, self.coverage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_domain_round_trips_through_strum() {
        assert_eq!(DomainCategory::WaterQuality.to_string(), "water_quality");
        assert_eq!(
            DomainCategory::from_str("hab").unwrap(),
            DomainCategory::Hab
        );
        assert!(DomainCategory::from_str("geology").is_err());
    }

    #[test]
    fn test_context_line() {
        let dataset = DatasetDescriptor::new(
            "hadcet",
            "HadCET",
            DomainCategory::Weather,
            "1659-2024",
            "#6a4c93",
        );
        assert_eq!(dataset.context_line(), "- HadCET (weather, 1659-2024)");
    }

    #[test]
    fn test_builder_sets_coordinates_and_details() {
        let dataset = DatasetDescriptor::new("x", "X", DomainCategory::Ocean, "2000-2001", "#000")
            .at(27.5, -82.5)
            .with_details("X1", "desc", "10K+");
        assert_eq!(dataset.coordinates, Some(GeoPoint { lat: 27.5, lng: -82.5 }));
        assert_eq!(dataset.short_name, Some("X1"));
        assert_eq!(dataset.records, Some("10K+"));
    }
}
