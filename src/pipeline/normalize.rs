use serde::{Deserialize, Serialize};

/// The two parallel views of one prior note that every pattern runs against.
///
/// `plain` is the converted plain text, `markup` the raw rich-text source.
/// Both are collapsed to single-spaced tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedNote {
    pub plain: String,
    pub markup: String,
}

impl NormalizedNote {
    pub fn new(plain: &str, markup: &str) -> Self {
        Self {
            plain: normalize_whitespace(plain),
            markup: normalize_whitespace(markup),
        }
    }
}

/// Collapse every whitespace run (spaces, tabs, line breaks) into one space.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split on sentence-terminating periods, dropping empty fragments.
/// The period itself is not kept.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
