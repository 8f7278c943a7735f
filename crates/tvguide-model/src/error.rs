use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid timezone: {code}. Must be one of: {valid}")]
    UnknownTimezone { code: String, valid: String },

    #[error("region \"{region}\" is listed more than once")]
    DuplicateRegion { region: String },

    #[error("missing timezone mapping for region: {region}")]
    MissingTimezoneMapping { region: String },

    #[error("timezone list for region \"{region}\" is empty")]
    EmptyTimezoneList { region: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
