//! The closed set of broadcast timezone codes.
//!
//! Every timezone that appears in a schedule row or in a region's timezone
//! list must be one of these codes. The set is fixed at build time; adding a
//! market means adding a variant here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Broadcast timezone code.
///
/// Codes are kept as display labels only. No wall-clock conversion happens
/// between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Timezone {
    /// West Africa Time.
    #[serde(rename = "WAT")]
    Wat,
    /// Central Africa Time.
    #[serde(rename = "CAT")]
    Cat,
    /// Eastern Standard Time.
    #[serde(rename = "EST")]
    Est,
}

impl Timezone {
    /// All valid codes, in canonical order.
    pub const ALL: [Timezone; 3] = [Timezone::Wat, Timezone::Cat, Timezone::Est];

    /// Returns the code as it appears in source sheets and persisted datasets.
    pub fn as_str(&self) -> &'static str {
        match self {
            Timezone::Wat => "WAT",
            Timezone::Cat => "CAT",
            Timezone::Est => "EST",
        }
    }

    /// Comma-separated list of valid codes, for error messages.
    pub fn valid_codes() -> String {
        Self::ALL
            .iter()
            .map(Timezone::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timezone {
    type Err = ModelError;

    /// Codes are matched exactly after trimming; `cat` is not `CAT`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "WAT" => Ok(Timezone::Wat),
            "CAT" => Ok(Timezone::Cat),
            "EST" => Ok(Timezone::Est),
            _ => Err(ModelError::UnknownTimezone {
                code: s.to_string(),
                valid: Self::valid_codes(),
            }),
        }
    }
}
