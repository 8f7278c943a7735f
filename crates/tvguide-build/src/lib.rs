//! Build step: turns validated schedule rows and the caller's region and
//! timezone declarations into a persisted channel dataset.

pub mod builder;
pub mod declarations;
pub mod error;
pub mod store;

pub use builder::{BuildOutcome, BuildRequest, BuildWarning, assemble_dataset, build_dataset};
pub use declarations::{parse_region_list, parse_timezone_map};
pub use error::{BuildError, StoreError};
pub use store::{parse_dataset, read_dataset, write_dataset};
