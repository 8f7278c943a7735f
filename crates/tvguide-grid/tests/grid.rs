//! End-to-end tests for grid construction and selection.

use std::collections::BTreeMap;

use proptest::prelude::*;
use tvguide_grid::{available_timezones, build_grid, resolve_selection, sort_times};
use tvguide_model::{Dataset, GuideOptions, ScheduleRow, Selection, Timezone};

const MONDAY: &str = "Monday, October 6, 2025";

fn scenario() -> Dataset {
    Dataset {
        channel_id: "zee-world".to_string(),
        regions: vec!["A".to_string(), "B".to_string()],
        timezones_by_region: BTreeMap::from([
            ("A".to_string(), vec![Timezone::Cat]),
            ("B".to_string(), vec![Timezone::Wat, Timezone::Est]),
        ]),
        rows: vec![
            ScheduleRow::new("A", MONDAY, "6:00", "6:30", "News", Timezone::Cat),
            ScheduleRow::new("A", MONDAY, "5:30", "6:00", "Cartoons", Timezone::Cat),
            ScheduleRow::new("B", MONDAY, "5:30", "6:00", "Drama", Timezone::Wat),
        ],
    }
}

#[test]
fn scenario_grid_for_region_a() {
    let dataset = scenario();
    let grid = build_grid(&dataset, &Selection::new("A", Timezone::Cat)).expect("grid");
    assert_eq!(grid.days, vec![MONDAY]);
    assert_eq!(grid.times, vec!["5:30", "6:00"]);
    let cell = grid.cell(MONDAY, "5:30");
    assert_eq!(cell.len(), 1);
    assert!(std::ptr::eq(cell[0], &dataset.rows[1]));
    assert!(grid
        .cells
        .values()
        .flat_map(|slots| slots.values())
        .flatten()
        .all(|row| row.title != "Drama"));
}

#[test]
fn scenario_grid_shape() {
    let dataset = scenario();
    let grid = build_grid(&dataset, &Selection::new("A", Timezone::Cat)).expect("grid");
    insta::assert_json_snapshot!(grid, @r#"
    {
      "days": [
        "Monday, October 6, 2025"
      ],
      "times": [
        "5:30",
        "6:00"
      ],
      "cells": {
        "Monday, October 6, 2025": {
          "5:30": [
            {
              "Region": "A",
              "Date": "Monday, October 6, 2025",
              "Start Time": "5:30",
              "End Time": "6:00",
              "Title": "Cartoons",
              "Timezone": "CAT"
            }
          ],
          "6:00": [
            {
              "Region": "A",
              "Date": "Monday, October 6, 2025",
              "Start Time": "6:00",
              "End Time": "6:30",
              "Title": "News",
              "Timezone": "CAT"
            }
          ]
        }
      }
    }
    "#);
}

#[test]
fn default_selection_then_grid() {
    let dataset = scenario();
    let selection = resolve_selection(&dataset, &GuideOptions::default()).expect("selection");
    assert_eq!(selection, Selection::new("A", Timezone::Cat));
    let grid = build_grid(&dataset, &selection).expect("grid");
    assert_eq!(grid.row_count(), 2);

    assert_eq!(
        available_timezones(&dataset, "B"),
        vec![Timezone::Wat, Timezone::Est]
    );
    let grid = build_grid(&dataset, &Selection::new("B", Timezone::Est)).expect("grid");
    assert!(grid.is_empty());
}

fn row_strategy() -> impl Strategy<Value = ScheduleRow> {
    (
        prop::sample::select(vec!["A", "B", "Z"]),
        prop::sample::select(vec![
            "Monday, October 6, 2025",
            "Tuesday, October 7, 2025",
            "Wednesday, October 8, 2025",
        ]),
        0u32..24,
        prop::sample::select(vec![0u32, 15, 30, 45]),
        prop::sample::select(Timezone::ALL.to_vec()),
        0usize..1000,
    )
        .prop_map(|(region, date, hour, minute, timezone, id)| {
            ScheduleRow::new(
                region,
                date,
                format!("{hour}:{minute:02}"),
                "23:59",
                format!("Program {id}"),
                timezone,
            )
        })
}

fn dataset_strategy() -> impl Strategy<Value = Dataset> {
    prop::collection::vec(row_strategy(), 0..40).prop_map(|rows| Dataset {
        channel_id: "c".to_string(),
        regions: vec!["A".to_string(), "B".to_string()],
        timezones_by_region: BTreeMap::from([
            ("A".to_string(), Timezone::ALL.to_vec()),
            ("B".to_string(), Timezone::ALL.to_vec()),
        ]),
        rows,
    })
}

proptest! {
    #[test]
    fn every_matching_row_lands_in_exactly_its_own_cell(
        dataset in dataset_strategy(),
        region in prop::sample::select(vec!["A", "B", "Z"]),
        timezone in prop::sample::select(Timezone::ALL.to_vec()),
    ) {
        let selection = Selection::new(region, timezone);
        let grid = build_grid(&dataset, &selection).unwrap();
        let matching: Vec<&ScheduleRow> = dataset
            .rows
            .iter()
            .filter(|row| row.matches(region, timezone))
            .collect();
        prop_assert_eq!(grid.row_count(), matching.len());
        for row in &matching {
            let cell = grid.cell(&row.date, &row.start_time);
            let hits = cell.iter().filter(|placed| std::ptr::eq(**placed, *row)).count();
            prop_assert_eq!(hits, 1);
        }
        for day in &grid.days {
            prop_assert_eq!(grid.cells[day].len(), grid.times.len());
        }
    }

    #[test]
    fn grid_is_idempotent(
        dataset in dataset_strategy(),
        timezone in prop::sample::select(Timezone::ALL.to_vec()),
    ) {
        let selection = Selection::new("A", timezone);
        let first = build_grid(&dataset, &selection).unwrap();
        let second = build_grid(&dataset, &selection).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn sorted_times_are_chronological(
        times in prop::collection::vec((0u32..30, 0u32..60), 0..30),
    ) {
        let labels: Vec<String> = times.iter().map(|(h, m)| format!("{h}:{m:02}")).collect();
        let sorted = sort_times(labels.iter().map(String::as_str)).unwrap();
        prop_assert_eq!(sorted.len(), labels.len());
        let keys: Vec<(u32, u32)> = sorted
            .iter()
            .map(|label| {
                let (h, m) = label.split_once(':').unwrap();
                (h.parse().unwrap(), m.parse().unwrap())
            })
            .collect();
        prop_assert!(keys.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}
