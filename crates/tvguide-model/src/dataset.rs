//! The persisted channel dataset.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::error::{ModelError, Result};
use crate::row::ScheduleRow;
use crate::timezone::Timezone;

/// Region name to its ordered timezone codes.
pub type TimezoneMap = BTreeMap<String, Vec<Timezone>>;

/// A validated, immutable channel schedule.
///
/// `regions` keeps declaration order (it is the tab order and the source of
/// the default region). `rows` keeps source order and may mention regions that
/// were never declared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub channel_id: String,
    pub regions: Vec<String>,
    pub timezones_by_region: TimezoneMap,
    pub rows: Vec<ScheduleRow>,
}

impl Dataset {
    /// Timezones declared for `region`, without any policy applied.
    pub fn timezones_for(&self, region: &str) -> Option<&[Timezone]> {
        self.timezones_by_region.get(region).map(Vec::as_slice)
    }

    pub fn has_region(&self, region: &str) -> bool {
        self.regions.iter().any(|declared| declared == region)
    }

    /// Distinct row regions in order of first appearance.
    pub fn row_regions(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.rows
            .iter()
            .map(|row| row.region.as_str())
            .filter(|region| seen.insert(*region))
            .collect()
    }

    /// Number of rows referencing `region`.
    pub fn row_count_for(&self, region: &str) -> usize {
        self.rows.iter().filter(|row| row.region == region).count()
    }

    /// Checks the dataset invariants: declared regions are distinct, each one
    /// has a timezone mapping, and no mapping is empty.
    pub fn validate(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for region in &self.regions {
            if !seen.insert(region.as_str()) {
                return Err(ModelError::DuplicateRegion {
                    region: region.clone(),
                });
            }
            if !self.timezones_by_region.contains_key(region) {
                return Err(ModelError::MissingTimezoneMapping {
                    region: region.clone(),
                });
            }
        }
        if let Some((region, _)) = self
            .timezones_by_region
            .iter()
            .find(|(_, timezones)| timezones.is_empty())
        {
            return Err(ModelError::EmptyTimezoneList {
                region: region.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset {
            channel_id: "zee-world".to_string(),
            regions: vec!["South Africa".to_string(), "Rest Of Africa".to_string()],
            timezones_by_region: BTreeMap::from([
                ("South Africa".to_string(), vec![Timezone::Cat]),
                (
                    "Rest Of Africa".to_string(),
                    vec![Timezone::Wat, Timezone::Cat, Timezone::Est],
                ),
            ]),
            rows: vec![
                ScheduleRow::new("Rest Of Africa", "d", "5:00", "6:00", "X", Timezone::Wat),
                ScheduleRow::new("South Africa", "d", "5:00", "6:00", "Y", Timezone::Cat),
                ScheduleRow::new("Rest Of Africa", "d", "6:00", "7:00", "Z", Timezone::Wat),
            ],
        }
    }

    #[test]
    fn valid_dataset_passes() {
        assert_eq!(dataset().validate(), Ok(()));
    }

    #[test]
    fn missing_mapping_is_reported() {
        let mut data = dataset();
        data.timezones_by_region.remove("South Africa");
        assert_eq!(
            data.validate(),
            Err(ModelError::MissingTimezoneMapping {
                region: "South Africa".to_string()
            })
        );
    }

    #[test]
    fn empty_mapping_is_reported() {
        let mut data = dataset();
        data.timezones_by_region
            .insert("Rest Of Africa".to_string(), Vec::new());
        assert!(matches!(
            data.validate(),
            Err(ModelError::EmptyTimezoneList { .. })
        ));
    }

    #[test]
    fn duplicate_region_is_reported() {
        let mut data = dataset();
        data.regions.push("South Africa".to_string());
        assert!(matches!(
            data.validate(),
            Err(ModelError::DuplicateRegion { .. })
        ));
    }

    #[test]
    fn row_regions_in_first_seen_order() {
        let data = dataset();
        assert_eq!(data.row_regions(), vec!["Rest Of Africa", "South Africa"]);
        assert_eq!(data.row_count_for("Rest Of Africa"), 2);
        assert_eq!(data.row_count_for("Nowhere"), 0);
    }
}
