#![deny(unsafe_code)]

use std::path::PathBuf;

use tvguide_model::ModelError;

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("invalid timezone map JSON: {source}")]
    TimezoneMapJson {
        #[source]
        source: serde_json::Error,
    },

    #[error("timezone map must be a JSON object keyed by region")]
    TimezoneMapNotObject,

    #[error("timezone map for {region} must be an array")]
    MalformedTimezoneMap { region: String },

    #[error("invalid timezone: {code}. Must be one of: {valid}")]
    InvalidTimezone { code: String, valid: String },

    #[error("timezone map for {region} must list at least one timezone")]
    EmptyTimezoneList { region: String },

    #[error("missing timezone mapping for region: {region}")]
    MissingTimezoneMapping { region: String },

    #[error("region \"{region}\" is listed more than once")]
    DuplicateRegion { region: String },
}

impl From<ModelError> for BuildError {
    fn from(error: ModelError) -> Self {
        match error {
            ModelError::UnknownTimezone { code, valid } => Self::InvalidTimezone { code, valid },
            ModelError::DuplicateRegion { region } => Self::DuplicateRegion { region },
            ModelError::MissingTimezoneMapping { region } => {
                Self::MissingTimezoneMapping { region }
            }
            ModelError::EmptyTimezoneList { region } => Self::EmptyTimezoneList { region },
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid dataset {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: ModelError,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
