//! Domain model for task records.
//!
//! Classification fields (`label`, `env`, `status`) are open enumerations:
//! the known values are modelled as variants, and anything else the caller
//! stores is preserved verbatim rather than rejected.

mod classification;
mod error;
mod ids;
mod task;

pub use classification::{TaskEnv, TaskLabel, TaskStatus};
pub use error::{ParseTaskFieldError, ParseTaskIdError};
pub use ids::TaskId;
pub use task::{TaskField, TaskRecord};
