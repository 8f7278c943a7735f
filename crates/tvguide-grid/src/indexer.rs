//! Day-by-time grid construction for one selection.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::debug;
use tvguide_model::{Dataset, ScheduleRow, Selection};

use crate::time_order::{TimeParseError, sort_times};

/// Rows grouped by day label, then by start time.
pub type GridCells<'a> = BTreeMap<&'a str, BTreeMap<&'a str, Vec<&'a ScheduleRow>>>;

/// The renderable view of one (region, timezone) selection.
///
/// `days` is in lexical label order and `times` in chronological order; use
/// them to walk `cells`, whose own key order is lexical. Every day × time
/// combination has a cell, possibly empty. Rows sharing a cell keep their
/// dataset order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleGrid<'a> {
    pub days: Vec<&'a str>,
    pub times: Vec<&'a str>,
    pub cells: GridCells<'a>,
}

impl<'a> ScheduleGrid<'a> {
    /// Rows in the (day, time) cell; empty for unknown keys.
    pub fn cell(&self, day: &str, time: &str) -> &[&'a ScheduleRow] {
        self.cells
            .get(day)
            .and_then(|slots| slots.get(time))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// True when nothing is scheduled for the selection.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Total number of rows placed in the grid.
    pub fn row_count(&self) -> usize {
        self.cells
            .values()
            .flat_map(BTreeMap::values)
            .map(Vec::len)
            .sum()
    }
}

/// Builds the grid for `selection`.
///
/// Only rows whose region and timezone both equal the selection take part;
/// rows of undeclared regions are treated like any other non-matching row.
/// No matching rows yields an empty grid, not an error. A start time that
/// cannot be ordered is reported instead of being placed arbitrarily.
pub fn build_grid<'a>(
    dataset: &'a Dataset,
    selection: &Selection,
) -> Result<ScheduleGrid<'a>, TimeParseError> {
    let matching: Vec<&'a ScheduleRow> = dataset
        .rows
        .iter()
        .filter(|row| row.matches(&selection.region, selection.timezone))
        .collect();

    let days: Vec<&'a str> = matching
        .iter()
        .map(|row| row.date.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut seen = BTreeSet::new();
    let distinct_times = matching
        .iter()
        .map(|row| row.start_time.as_str())
        .filter(|time| seen.insert(*time));
    let times = sort_times(distinct_times)?;

    let mut cells: GridCells<'a> = days
        .iter()
        .map(|day| {
            let slots = times.iter().map(|time| (*time, Vec::new())).collect();
            (*day, slots)
        })
        .collect();
    for row in &matching {
        if let Some(cell) = cells
            .get_mut(row.date.as_str())
            .and_then(|slots| slots.get_mut(row.start_time.as_str()))
        {
            cell.push(*row);
        }
    }

    debug!(
        region = %selection.region,
        timezone = %selection.timezone,
        day_count = days.len(),
        time_count = times.len(),
        row_count = matching.len(),
        "grid built"
    );
    Ok(ScheduleGrid { days, times, cells })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tvguide_model::Timezone;

    const MONDAY: &str = "Monday, October 6, 2025";
    const TUESDAY: &str = "Tuesday, October 7, 2025";

    fn dataset(rows: Vec<ScheduleRow>) -> Dataset {
        Dataset {
            channel_id: "c".to_string(),
            regions: vec!["A".to_string()],
            timezones_by_region: BTreeMap::from([("A".to_string(), vec![Timezone::Cat])]),
            rows,
        }
    }

    #[test]
    fn shared_slot_keeps_every_row_in_order() {
        let data = dataset(vec![
            ScheduleRow::new("A", MONDAY, "5:00", "5:30", "First", Timezone::Cat),
            ScheduleRow::new("A", MONDAY, "5:00", "5:30", "Second", Timezone::Cat),
        ]);
        let grid = build_grid(&data, &Selection::new("A", Timezone::Cat)).unwrap();
        let titles: Vec<&str> = grid
            .cell(MONDAY, "5:00")
            .iter()
            .map(|row| row.title.as_str())
            .collect();
        assert_eq!(titles, vec!["First", "Second"]);
        assert_eq!(grid.row_count(), 2);
    }

    #[test]
    fn every_combination_has_a_cell() {
        let data = dataset(vec![
            ScheduleRow::new("A", TUESDAY, "12:00", "13:00", "Late", Timezone::Cat),
            ScheduleRow::new("A", MONDAY, "5:00", "6:00", "Early", Timezone::Cat),
        ]);
        let grid = build_grid(&data, &Selection::new("A", Timezone::Cat)).unwrap();
        assert_eq!(grid.days, vec![MONDAY, TUESDAY]);
        assert_eq!(grid.times, vec!["5:00", "12:00"]);
        assert!(grid.cell(MONDAY, "12:00").is_empty());
        assert!(grid.cell(TUESDAY, "5:00").is_empty());
        assert_eq!(grid.cells[MONDAY].len(), 2);
        assert_eq!(grid.cell(TUESDAY, "12:00")[0].title, "Late");
    }

    #[test]
    fn no_match_is_an_empty_grid() {
        let data = dataset(vec![ScheduleRow::new("A", MONDAY, "5:00", "6:00", "X", Timezone::Cat)]);
        let grid = build_grid(&data, &Selection::new("A", Timezone::Wat)).unwrap();
        assert!(grid.is_empty());
        assert!(grid.times.is_empty());
        assert!(grid.cells.is_empty());
    }

    #[test]
    fn malformed_start_time_is_reported() {
        let data = dataset(vec![
            ScheduleRow::new("A", MONDAY, "5:00", "6:00", "X", Timezone::Cat),
            ScheduleRow::new("A", MONDAY, "late", "6:00", "Y", Timezone::Cat),
        ]);
        let err = build_grid(&data, &Selection::new("A", Timezone::Cat)).unwrap_err();
        assert!(matches!(err, TimeParseError::MissingSeparator { .. }));
    }

    #[test]
    fn malformed_time_outside_selection_is_ignored() {
        let data = dataset(vec![
            ScheduleRow::new("A", MONDAY, "5:00", "6:00", "X", Timezone::Cat),
            ScheduleRow::new("B", MONDAY, "late", "6:00", "Y", Timezone::Cat),
        ]);
        assert!(build_grid(&data, &Selection::new("A", Timezone::Cat)).is_ok());
    }
}
