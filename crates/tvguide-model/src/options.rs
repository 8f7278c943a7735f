//! Query-time options for presenting a guide.

use serde::{Deserialize, Serialize};

use crate::timezone::Timezone;

/// The active (region, timezone) pair a grid is built for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub region: String,
    pub timezone: Timezone,
}

impl Selection {
    pub fn new(region: impl Into<String>, timezone: Timezone) -> Self {
        Self {
            region: region.into(),
            timezone,
        }
    }
}

/// Options controlling which regions are offered, the initial selection and
/// today-highlighting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuideOptions {
    /// Regions offered as tabs. Empty means every dataset region.
    pub regions_enabled: Vec<String>,

    /// Region to start on instead of the dataset's first region.
    pub default_region: Option<String>,

    /// Timezone to start on instead of the region's first timezone.
    pub default_timezone: Option<Timezone>,

    /// Mark the column whose day label equals today.
    pub today_highlight: bool,

    /// Day label to treat as today instead of the local clock.
    pub today_override: Option<String>,
}

impl Default for GuideOptions {
    fn default() -> Self {
        Self {
            regions_enabled: Vec::new(),
            default_region: None,
            default_timezone: None,
            today_highlight: true,
            today_override: None,
        }
    }
}

impl GuideOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_regions_enabled(mut self, regions: Vec<String>) -> Self {
        self.regions_enabled = regions;
        self
    }

    #[must_use]
    pub fn with_default_region(mut self, region: Option<String>) -> Self {
        self.default_region = region;
        self
    }

    #[must_use]
    pub fn with_default_timezone(mut self, timezone: Option<Timezone>) -> Self {
        self.default_timezone = timezone;
        self
    }

    #[must_use]
    pub fn with_today_highlight(mut self, enable: bool) -> Self {
        self.today_highlight = enable;
        self
    }

    #[must_use]
    pub fn with_today_override(mut self, label: Option<String>) -> Self {
        self.today_override = label;
        self
    }
}
