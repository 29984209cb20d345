use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use super::ExtractionError;
use crate::models::{Rating, RatingMap, HEALTH_KEY, PAIN_KEY};

/// Heading word the pain/health numbers are counted from.
pub const COMPLAINT_HEADING: &str = "Complaint";

/// Lead-in sentence carrying every complaint rating.
pub const RATINGS_LEAD_IN: &str = "On a scale of 0 to 10 with 10 being the worst,";

static RATINGS_SENTENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)On a scale of 0 to 10 with 10 being the worst,\s*(?:he|she|they)\s+rated\s+(?:his|her|their)\s+(?P<body>[^.]*)\.",
    )
    .expect("Invalid ratings sentence regex")
});

static COMPLAINT_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?P<phrase>[^,]+?)\s+as\s+an?\s+(?P<value>\d+)")
        .expect("Invalid complaint pair regex")
});

static NUMERIC_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("Invalid numeric token regex"));

/// Words that can precede a complaint name inside the ratings sentence.
const NOISE_WORDS: &[&str] = &["and", "he", "she", "they", "his", "her", "their", "rated"];

/// Complaint -> rating pairs from the ratings sentence, in document order.
pub fn extract_complaint_ratings(plain: &str) -> Result<Vec<(String, Rating)>, ExtractionError> {
    let body = RATINGS_SENTENCE
        .captures(plain)
        .and_then(|c| c.name("body"))
        .ok_or(ExtractionError::RatingsNotFound)?
        .as_str();

    let mut pairs = Vec::new();
    for caps in COMPLAINT_PAIR.captures_iter(body) {
        let key = clean_complaint_key(&caps["phrase"]);
        if key.is_empty() {
            debug!(phrase = &caps["phrase"], "skipping empty complaint phrase");
            continue;
        }
        pairs.push((key, parse_rating(&caps["value"])?));
    }

    if pairs.is_empty() {
        return Err(ExtractionError::RatingsNotFound);
    }
    debug!(count = pairs.len(), "complaint ratings extracted");
    Ok(pairs)
}

/// Overall pain and health: the 3rd and 6th numbers after the complaint heading.
///
/// Depends on the subjective wording: two scale bounds precede each of the
/// two values. The sentence banks keep to that shape.
pub fn extract_pain_health(plain: &str) -> Result<(Rating, Rating), ExtractionError> {
    let start = plain
        .find(COMPLAINT_HEADING)
        .ok_or(ExtractionError::PainHealthNotFound { found: 0 })?;

    let numbers: Vec<&str> = NUMERIC_TOKEN
        .find_iter(&plain[start..])
        .take(6)
        .map(|m| m.as_str())
        .collect();
    if numbers.len() < 6 {
        return Err(ExtractionError::PainHealthNotFound {
            found: numbers.len(),
        });
    }

    Ok((parse_rating(numbers[2])?, parse_rating(numbers[5])?))
}

/// Full rating map: complaint pairs plus the derived pain/health values.
///
/// Complaints named like a reserved key are skipped; pain and health only
/// come from the Complaint heading.
pub fn extract_ratings(plain: &str) -> Result<RatingMap, ExtractionError> {
    let pairs = extract_complaint_ratings(plain)?;
    let (pain, health) = extract_pain_health(plain)?;
    let mut map = RatingMap::new(pain, health);
    for (key, rating) in pairs {
        if key.eq_ignore_ascii_case(PAIN_KEY) || key.eq_ignore_ascii_case(HEALTH_KEY) {
            warn!(complaint = %key, "complaint uses a reserved rating name, skipped");
            continue;
        }
        map.insert(&key, rating);
    }
    Ok(map)
}

/// Digit runs too long for an i64 are out of range as well.
fn parse_rating(token: &str) -> Result<Rating, ExtractionError> {
    let value = token.parse::<i64>().unwrap_or(i64::MAX);
    Ok(Rating::new(value)?)
}

/// Strip surrounding punctuation and any leading pronoun/conjunction words.
fn clean_complaint_key(phrase: &str) -> String {
    let trim = |s: &str| {
        s.trim_matches(|c: char| c.is_whitespace() || c.is_ascii_punctuation())
            .to_string()
    };

    let mut key = trim(phrase);
    loop {
        let Some((first, rest)) = key.split_once(char::is_whitespace) else {
            break;
        };
        let word = first.trim_matches(|c: char| c.is_ascii_punctuation());
        if !NOISE_WORDS.iter().any(|w| w.eq_ignore_ascii_case(word)) {
            break;
        }
        key = trim(rest);
    }
    key
}
