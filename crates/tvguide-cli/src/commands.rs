use anyhow::{Context, Result, bail};
use serde_json::json;
use tracing::{debug, info_span};

use tvguide_build::read_dataset;
use tvguide_cli::convert::{ConvertRequest, ConvertSummary, run_convert};
use tvguide_cli::render::{grid_table, join_timezones, regions_table};
use tvguide_grid::{available_timezones, build_grid, resolve_selection, resolve_today};
use tvguide_model::GuideOptions;

use crate::cli::{ConvertArgs, GridArgs, GridFormatArg, RegionsArgs};

pub fn run_convert_command(args: &ConvertArgs) -> Result<ConvertSummary> {
    run_convert(&ConvertRequest {
        source: args.excel.clone(),
        channel_id: args.channel_id.clone(),
        regions: args.regions.clone(),
        timezone_map: args.tz_map.clone(),
        output: args.out.clone(),
    })
}

pub fn run_grid(args: &GridArgs) -> Result<()> {
    let dataset = read_dataset(&args.data)
        .with_context(|| format!("load dataset {}", args.data.display()))?;
    let options = GuideOptions::new()
        .with_regions_enabled(args.enabled_regions.clone())
        .with_default_region(args.region.clone())
        .with_default_timezone(args.timezone)
        .with_today_highlight(!args.no_today_highlight)
        .with_today_override(args.today.clone());

    let Some(selection) = resolve_selection(&dataset, &options) else {
        bail!(
            "no region or timezone to show in {}; pass --region and --timezone",
            args.data.display()
        );
    };
    let span = info_span!(
        "grid",
        region = %selection.region,
        timezone = %selection.timezone
    );
    let _guard = span.enter();

    let grid = build_grid(&dataset, &selection).context("build grid")?;
    debug!(
        days = grid.days.len(),
        times = grid.times.len(),
        rows = grid.row_count(),
        "grid built"
    );
    let today = options
        .today_highlight
        .then(|| resolve_today(options.today_override.as_deref()));

    match args.format {
        GridFormatArg::Json => {
            let document = json!({
                "channelId": dataset.channel_id,
                "region": selection.region,
                "timezone": selection.timezone,
                "today": today,
                "grid": grid,
            });
            let text = serde_json::to_string_pretty(&document).context("serialize grid")?;
            println!("{text}");
        }
        GridFormatArg::Table => {
            println!(
                "Channel: {}  Region: {}  Timezone: {}",
                dataset.channel_id, selection.region, selection.timezone
            );
            println!(
                "Available timezones: {}",
                join_timezones(&available_timezones(&dataset, &selection.region))
            );
            if grid.is_empty() {
                println!(
                    "No programs scheduled for {} ({}).",
                    selection.region, selection.timezone
                );
            } else {
                println!("{}", grid_table(&grid, today.as_deref()));
            }
        }
    }
    Ok(())
}

pub fn run_regions(args: &RegionsArgs) -> Result<()> {
    let dataset = read_dataset(&args.data)
        .with_context(|| format!("load dataset {}", args.data.display()))?;
    println!("Channel: {}", dataset.channel_id);
    println!("{}", regions_table(&dataset));
    Ok(())
}
