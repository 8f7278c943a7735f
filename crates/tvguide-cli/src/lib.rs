//! CLI library components for the TV guide tools.

pub mod convert;
pub mod logging;
pub mod render;
