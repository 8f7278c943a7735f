pub mod dataset;
pub mod error;
pub mod options;
pub mod row;
pub mod timezone;

pub use dataset::{Dataset, TimezoneMap};
pub use error::{ModelError, Result};
pub use options::{GuideOptions, Selection};
pub use row::{CellValue, DAY_LABEL_FORMAT, REQUIRED_COLUMNS, ScheduleRow, columns};
pub use timezone::Timezone;
