pub mod enums;
pub mod date;
pub mod patient;
pub mod ratings;
pub mod findings;
pub mod trend;

pub use enums::*;
pub use date::*;
pub use patient::*;
pub use ratings::*;
pub use findings::*;
pub use trend::*;

use thiserror::Error;

/// A value fell outside the range its type allows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Rating out of range (0-10): {0}")]
    RatingOutOfRange(i64),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid name component: {0:?}")]
    InvalidName(String),

    #[error("Invalid spinal level: {0:?}")]
    InvalidSpinalLevel(String),

    #[error("Invalid {field} value: {value:?}")]
    InvalidEnum { field: String, value: String },
}
