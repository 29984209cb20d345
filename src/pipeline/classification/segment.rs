use std::sync::LazyLock;

use regex::Regex;

use super::ClassificationError;
use crate::pipeline::normalize::split_sentences;

const OBJECTIVE_HEADING: &str = "Objective";
const ASSESSMENT_HEADING: &str = "Assessment";

/// An uppercase letter followed by digits, e.g. "C5" or "L4".
static BOUNDARY_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]\d+\b").expect("Invalid boundary token regex"));

/// Text strictly between the first "Objective" heading and the next "Assessment".
pub fn objective_section(plain: &str) -> Result<&str, ClassificationError> {
    let start = plain
        .find(OBJECTIVE_HEADING)
        .ok_or(ClassificationError::ObjectiveNotFound)?
        + OBJECTIVE_HEADING.len();
    let len = plain[start..]
        .find(ASSESSMENT_HEADING)
        .ok_or(ClassificationError::ObjectiveNotFound)?;
    Ok(&plain[start..start + len])
}

/// Objective section split into sentences.
pub fn objective_sentences(plain: &str) -> Result<Vec<String>, ClassificationError> {
    Ok(split_sentences(objective_section(plain)?))
}

/// Indices of sentences carrying a level token; these open a new region.
pub fn boundary_indices(sentences: &[String]) -> Vec<usize> {
    sentences
        .iter()
        .enumerate()
        .filter(|(_, s)| BOUNDARY_TOKEN.is_match(s))
        .map(|(i, _)| i)
        .collect()
}
