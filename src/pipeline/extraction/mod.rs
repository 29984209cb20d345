pub mod types;
pub mod identity;
pub mod address;
pub mod ratings;
pub mod tenderness;
pub mod treatment;
pub mod orchestrator;

pub use types::*;
pub use identity::*;
pub use address::*;
pub use ratings::*;
pub use tenderness::*;
pub use treatment::*;
pub use orchestrator::*;

use thiserror::Error;

use crate::models::DomainError;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("extraction: ratings not found")]
    RatingsNotFound,

    #[error("extraction: pain/health ratings not found (needed 6 numbers after the complaint heading, found {found})")]
    PainHealthNotFound { found: usize },

    #[error("extraction: patient title not found")]
    TitleNotFound,

    #[error("extraction: name/date of birth block not found")]
    IdentityNotFound,

    #[error("extraction: unsupported name arity ({parts} parts in {name:?})")]
    UnsupportedNameArity { name: String, parts: usize },

    #[error("extraction: invalid date of birth {0:?}")]
    InvalidBirthDate(String),

    #[error("extraction: street/address not found")]
    AddressNotFound,

    #[error("extraction: invalid house-format pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("extraction: {0}")]
    Domain(#[from] DomainError),
}
