use std::sync::LazyLock;

use regex::Regex;

static TREATMENT_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Today['\u{2019}]s Treatment:?").expect("Invalid treatment heading regex")
});

/// Everything after the "Today's Treatment" heading, verbatim.
/// `None` when the heading is missing or nothing follows it.
pub fn extract_treatment(plain: &str) -> Option<String> {
    let heading = TREATMENT_HEADING.find(plain)?;
    let body = plain[heading.end()..].trim();
    if body.is_empty() {
        None
    } else {
        Some(body.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_section_body() {
        let text = "Plan Continue care. Today's Treatment: Spinal manipulation C5-C7, L4-L5. Hot pack 10 min.";
        assert_eq!(
            extract_treatment(text).as_deref(),
            Some("Spinal manipulation C5-C7, L4-L5. Hot pack 10 min.")
        );
    }

    #[test]
    fn accepts_typographic_apostrophe() {
        let text = "Today\u{2019}s Treatment Ultrasound.";
        assert_eq!(extract_treatment(text).as_deref(), Some("Ultrasound."));
    }

    #[test]
    fn missing_or_empty_section_is_none() {
        assert_eq!(extract_treatment("Plan Continue care."), None);
        assert_eq!(extract_treatment("Today's Treatment:   "), None);
    }
}
