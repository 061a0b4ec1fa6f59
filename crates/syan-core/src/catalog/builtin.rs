//! Builtin dataset catalogs.
//!
//! These catalogs are compiled into the binary and never change at runtime.

use super::model::{DatasetDescriptor, DomainCategory};

/// UK / North Atlantic sources used by the global correlation engine.
pub static GLOBAL_DATASETS: &[DatasetDescriptor] = &[
    DatasetDescriptor::new(
        "weather-rescue",
        "Weather Rescue 1861",
        DomainCategory::Weather,
        "1861-1875",
        "#e63946",
    ),
    DatasetDescriptor::new(
        "met-office",
        "Met Office Historic",
        DomainCategory::Weather,
        "1853-2024",
        "#457b9d",
    ),
    DatasetDescriptor::new(
        "hadcet",
        "HadCET",
        DomainCategory::Weather,
        "1659-2024",
        "#6a4c93",
    ),
    DatasetDescriptor::new(
        "ceda",
        "CEDA MIDAS",
        DomainCategory::Weather,
        "1853-2024",
        "#1d3557",
    ),
    DatasetDescriptor::new(
        "met-eireann",
        "Met Éireann",
        DomainCategory::Weather,
        "1881-2024",
        "#2a9d8f",
    ),
    DatasetDescriptor::new(
        "copernicus",
        "Copernicus Marine",
        DomainCategory::Ocean,
        "1993-2024",
        "#e9c46a",
    ),
    DatasetDescriptor::new(
        "bioargo",
        "Bio-Argo",
        DomainCategory::Biology,
        "2012-2024",
        "#52b788",
    ),
    DatasetDescriptor::new(
        "noaa-sst",
        "NOAA SST",
        DomainCategory::Ocean,
        "1981-2024",
        "#f4a261",
    ),
];

/// Georeferenced Tampa Bay sources used by the regional HAB engine.
pub static TAMPA_BAY_DATASETS: &[DatasetDescriptor] = &[
    DatasetDescriptor::new(
        "fwc_hab",
        "FWC HAB Database",
        DomainCategory::Hab,
        "1953-2025",
        "#ef4444",
    )
    .at(27.7617, -82.6867)
    .with_details("FWC", "Red tide records since 1953", "200K+"),
    DatasetDescriptor::new(
        "tbep_wq",
        "Tampa Bay Estuary Program",
        DomainCategory::WaterQuality,
        "1972-2025",
        "#8b5cf6",
    )
    .at(27.7676, -82.6343)
    .with_details("TBEP", "50+ years water quality", "26K+"),
    DatasetDescriptor::new(
        "noaa_42098",
        "Egmont Channel Buoy",
        DomainCategory::Ocean,
        "2015-2025",
        "#3b82f6",
    )
    .at(27.590, -82.931)
    .with_details("Buoy 42098", "Waves, SST at bay entrance", "Real-time"),
    DatasetDescriptor::new(
        "macdill_afb",
        "MacDill AFB Weather",
        DomainCategory::Weather,
        "1941-2025",
        "#6b7280",
    )
    .at(27.8494, -82.5214)
    .with_details("MacDill", "80+ years weather data", "30K+"),
    DatasetDescriptor::new(
        "fwri_otb",
        "Old Tampa Bay Program",
        DomainCategory::Hab,
        "2011-2025",
        "#22c55e",
    )
    .at(27.9264, -82.5917)
    .with_details("FWRI OTB", "Pyrodinium monitoring", "5K+"),
    DatasetDescriptor::new(
        "usf_atlas",
        "USF Water Atlas",
        DomainCategory::WaterQuality,
        "1990-2025",
        "#ec4899",
    )
    .at(27.8006, -82.6673)
    .with_details("USF", "Multi-agency composite", "Composite"),
    DatasetDescriptor::new(
        "pinellas_rt",
        "Pinellas Red Tide Counts",
        DomainCategory::Hab,
        "2000-2025",
        "#f97316",
    )
    .at(27.6233, -82.7394)
    .with_details("Pinellas", "Fort De Soto area", "Weekly"),
    DatasetDescriptor::new(
        "egkf1",
        "Egmont Key C-MAN",
        DomainCategory::Ocean,
        "1990-2025",
        "#a16207",
    )
    .at(27.6000, -82.7600)
    .with_details("EGKF1", "Bay gateway station", "Continuous"),
];
