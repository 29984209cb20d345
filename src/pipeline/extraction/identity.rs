use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::ExtractionError;
use crate::models::{Date, Title};
use crate::pipeline_config::HouseFormat;

/// Patient titles in the closed set, dotted forms required except "Miss".
static TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:(Mrs|Mr|Ms|Dr)\.|(Miss)\b)").expect("Invalid title regex")
});

/// Name and birth date read from the identity block at the top of a note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityBlock {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Date,
    /// Byte offset in the plain text just past the birth date.
    pub end: usize,
}

/// Match the clinic preamble, a two-token patient name, the street and
/// address runs, then `Date of Birth: m/d/yyyy`.
pub fn extract_identity(plain: &str, format: &HouseFormat) -> Result<IdentityBlock, ExtractionError> {
    let pattern = Regex::new(&format!(
        r"(?:{preamble})\s+(?P<name>[^\d]+?)\s+(?P<street>\d+\b.*?)\s+(?P<address>\S.*?)\s+Date of Birth:\s*(?P<dob>\d{{1,2}}/\d{{1,2}}/\d{{4}})\b",
        preamble = format.preamble
    ))?;

    let caps = pattern
        .captures(plain)
        .ok_or(ExtractionError::IdentityNotFound)?;
    let name = caps.name("name").map(|m| m.as_str().trim()).unwrap_or_default();
    let dob = caps.name("dob").ok_or(ExtractionError::IdentityNotFound)?;
    let end = dob.end();

    let parts: Vec<&str> = name.split_whitespace().collect();
    let [first, last] = parts.as_slice() else {
        return Err(ExtractionError::UnsupportedNameArity {
            name: name.to_string(),
            parts: parts.len(),
        });
    };

    let date_of_birth: Date = dob
        .as_str()
        .parse()
        .map_err(|_| ExtractionError::InvalidBirthDate(dob.as_str().to_string()))?;

    debug!(name_parts = parts.len(), end, "identity block matched");

    Ok(IdentityBlock {
        first_name: first.to_string(),
        last_name: last.to_string(),
        date_of_birth,
        end,
    })
}

/// First title occurring at or after `from`.
///
/// Searching past the identity block keeps the clinician's "Dr." in the
/// preamble from being taken as the patient's title.
pub fn extract_title(plain: &str, from: usize) -> Result<Title, ExtractionError> {
    let haystack = plain.get(from..).unwrap_or_default();
    let caps = TITLE
        .captures(haystack)
        .ok_or(ExtractionError::TitleNotFound)?;

    let token = match (caps.get(1), caps.get(2)) {
        (Some(dotted), _) => format!("{}.", dotted.as_str()),
        (None, Some(miss)) => miss.as_str().to_string(),
        (None, None) => return Err(ExtractionError::TitleNotFound),
    };
    token
        .parse::<Title>()
        .map_err(|_| ExtractionError::TitleNotFound)
}
