//! Query-time guide derivations.
//!
//! Everything here is a pure function of a loaded [`tvguide_model::Dataset`]
//! and the active selection. Nothing is cached or remembered between calls,
//! so results can be thrown away and recomputed on every region or timezone
//! change.

pub mod indexer;
pub mod selection;
pub mod time_order;
pub mod today;

pub use indexer::{GridCells, ScheduleGrid, build_grid};
pub use selection::{
    SINGLE_TIMEZONE, SINGLE_TIMEZONE_REGION, available_timezones, default_region,
    default_timezone, resolve_selection, switch_region, visible_regions,
};
pub use time_order::{TimeOfDay, TimeParseError, compare_times, sort_times};
pub use today::{DAY_LABEL_FORMAT, is_today, local_today_label, resolve_today, today_label};
