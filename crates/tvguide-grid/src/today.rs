//! Day labels for "today".
//!
//! Day labels are never parsed. Today is recognised by formatting the local
//! date in the sheet's label format and comparing the strings exactly.

use chrono::{Local, NaiveDate};
pub use tvguide_model::DAY_LABEL_FORMAT;

/// Formats `date` as a schedule day label.
pub fn today_label(date: NaiveDate) -> String {
    date.format(DAY_LABEL_FORMAT).to_string()
}

/// Today's label from the local clock.
pub fn local_today_label() -> String {
    today_label(Local::now().date_naive())
}

/// The label to treat as today: the override when given, else the clock.
pub fn resolve_today(override_label: Option<&str>) -> String {
    match override_label {
        Some(label) => label.to_string(),
        None => local_today_label(),
    }
}

pub fn is_today(label: &str, today: &str) -> bool {
    label == today
}
