//! Terminal tables for grids, regions and conversion summaries.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tvguide_grid::{ScheduleGrid, available_timezones, is_today};
use tvguide_model::{Dataset, ScheduleRow, Timezone};

use crate::convert::ConvertSummary;

/// Report lines printed after a successful conversion.
pub fn convert_summary_lines(summary: &ConvertSummary) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Successfully converted {} to {}",
            summary.source.display(),
            summary.output.display()
        ),
        format!("Processed {} rows", summary.row_count),
        format!("Regions: {}", summary.regions.join(", ")),
    ];
    let mut assignments = Vec::new();
    for region in &summary.regions {
        if let Some(timezones) = summary.timezones_by_region.get(region) {
            assignments.push(format!("{region}: {}", join_timezones(timezones)));
        }
    }
    for (region, timezones) in &summary.timezones_by_region {
        if !summary.regions.contains(region) {
            assignments.push(format!("{region}: {}", join_timezones(timezones)));
        }
    }
    lines.push(format!("Timezones: {}", assignments.join("; ")));
    for warning in &summary.warnings {
        lines.push(format!("warning: {warning}"));
    }
    lines
}

/// Text shown for one program inside a grid cell.
pub fn program_label(row: &ScheduleRow) -> String {
    let mut lines = vec![row.title.clone()];
    match (&row.season, &row.episode) {
        (Some(season), Some(episode)) => lines.push(format!("S{season} EP {episode}")),
        (Some(season), None) => lines.push(format!("S{season}")),
        (None, Some(episode)) => lines.push(format!("EP {episode}")),
        (None, None) => {}
    }
    if let Some(subtitle) = &row.subtitle {
        lines.push(subtitle.clone());
    }
    lines.join("\n")
}

/// Days as columns, start times as rows. `today` marks the matching column.
pub fn grid_table(grid: &ScheduleGrid<'_>, today: Option<&str>) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("Time")];
    for day in &grid.days {
        if today.is_some_and(|label| is_today(day, label)) {
            header.push(
                Cell::new(format!("{day} (today)"))
                    .fg(Color::Yellow)
                    .add_attribute(Attribute::Bold),
            );
        } else {
            header.push(header_cell(day));
        }
    }
    table.set_header(header);
    apply_table_style(&mut table);
    for time in &grid.times {
        let mut row = vec![Cell::new(time).fg(Color::Blue).add_attribute(Attribute::Bold)];
        for day in &grid.days {
            let programs = grid.cell(day, time);
            if programs.is_empty() {
                row.push(dim_cell("-"));
            } else {
                let text = programs
                    .iter()
                    .map(|program| program_label(program))
                    .collect::<Vec<_>>()
                    .join("\n\n");
                row.push(Cell::new(text));
            }
        }
        table.add_row(row);
    }
    table
}

/// Regions with their offered timezones and row counts.
///
/// Declared regions come first in declaration order, then any region that
/// only appears in the rows.
pub fn regions_table(dataset: &Dataset) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Region"),
        header_cell("Timezones"),
        header_cell("Rows"),
        header_cell("Declared"),
    ]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for region in &dataset.regions {
        table.add_row(vec![
            Cell::new(region).add_attribute(Attribute::Bold),
            Cell::new(join_timezones(&available_timezones(dataset, region))),
            Cell::new(dataset.row_count_for(region)),
            Cell::new("yes").fg(Color::Green),
        ]);
    }
    for region in dataset.row_regions() {
        if dataset.has_region(region) {
            continue;
        }
        table.add_row(vec![
            dim_cell(region),
            dim_cell(join_timezones(&available_timezones(dataset, region))),
            Cell::new(dataset.row_count_for(region)),
            Cell::new("no").fg(Color::Yellow),
        ]);
    }
    table
}

pub fn join_timezones(timezones: &[Timezone]) -> String {
    if timezones.is_empty() {
        return "-".to_string();
    }
    timezones
        .iter()
        .map(Timezone::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
