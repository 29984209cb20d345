use std::sync::LazyLock;

use regex::Regex;

use crate::models::{FindingCategory, RegionFindings};

/// A compiled keyword group for one finding category.
struct CategoryPattern {
    regex: Regex,
    category: FindingCategory,
}

static CATEGORY_PATTERNS: LazyLock<Vec<CategoryPattern>> = LazyLock::new(|| {
    vec![
        pattern(
            r"(?i)hypertonicity|increased tonus|muscle tone",
            FindingCategory::Tone,
        ),
        pattern(r"(?i)trigger points?", FindingCategory::Trigger),
        pattern(
            r"\bROM\b|(?i:ranges? of motion)",
            FindingCategory::RangeOfMotion,
        ),
        pattern(
            r"(?i)pain during (?:testing|the performance|the execution)|discomfort and pain during|discomfort during the execution|pain was elicited",
            FindingCategory::TestPain,
        ),
    ]
});

fn pattern(re: &str, category: FindingCategory) -> CategoryPattern {
    CategoryPattern {
        regex: Regex::new(re).expect("Invalid category regex"),
        category,
    }
}

/// Every category a sentence matches; groups are tested independently.
pub fn categories_of(sentence: &str) -> Vec<FindingCategory> {
    CATEGORY_PATTERNS
        .iter()
        .filter(|p| p.regex.is_match(sentence))
        .map(|p| p.category)
        .collect()
}

/// File each sentence under the categories it matches. Later sentences
/// overwrite earlier ones in the same category.
pub fn categorize(sentences: &[String], findings: &mut RegionFindings) {
    for sentence in sentences {
        for category in categories_of(sentence) {
            findings.set(category, sentence.clone());
        }
    }
}
