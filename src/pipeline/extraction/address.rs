use regex::Regex;
use tracing::{debug, warn};

use super::ExtractionError;

/// Rich-text dialects the street/locality lines have been written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupDialect {
    /// Lines separated by paragraph breaks (`\par`).
    Current,
    /// Older notes separate the address lines with manual line breaks (`\line`).
    Legacy,
}

impl MarkupDialect {
    /// Tried in this order.
    pub const ALL: [MarkupDialect; 2] = [MarkupDialect::Current, MarkupDialect::Legacy];

    fn break_token(&self) -> &'static str {
        match self {
            Self::Current => r"\\par\b",
            Self::Legacy => r"\\line\b",
        }
    }
}

/// Street line and locality line of the patient's address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressLines {
    pub street: String,
    pub locality: String,
    pub dialect: MarkupDialect,
}

/// Find `<last name><break><street><break><locality><break>` in the raw markup.
pub fn extract_address(markup: &str, last_name: &str) -> Result<AddressLines, ExtractionError> {
    for dialect in MarkupDialect::ALL {
        if let Some((street, locality)) = match_dialect(markup, last_name, dialect)? {
            if dialect == MarkupDialect::Legacy {
                warn!("address block matched the legacy markup dialect");
            }
            debug!(?dialect, "address block matched");
            return Ok(AddressLines {
                street,
                locality,
                dialect,
            });
        }
    }
    Err(ExtractionError::AddressNotFound)
}

fn match_dialect(
    markup: &str,
    last_name: &str,
    dialect: MarkupDialect,
) -> Result<Option<(String, String)>, ExtractionError> {
    let brk = dialect.break_token();
    let pattern = Regex::new(&format!(
        r"{last}\s*{brk}\s*(?P<street>[^\\{{}}]+?)\s*{brk}\s*(?P<locality>[^\\{{}}]+?)\s*{brk}",
        last = regex::escape(last_name),
    ))?;

    Ok(pattern.captures(markup).and_then(|caps| {
        let street = caps.name("street")?.as_str().trim().to_string();
        let locality = caps.name("locality")?.as_str().trim().to_string();
        Some((street, locality))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_dialect() {
        let markup = r"{\f0 John Smith\par 123 Main Street\par Springfield, IL 62701\par Date of Birth: 1/2/1980\par}";
        let lines = extract_address(markup, "Smith").unwrap();
        assert_eq!(lines.street, "123 Main Street");
        assert_eq!(lines.locality, "Springfield, IL 62701");
        assert_eq!(lines.dialect, MarkupDialect::Current);
    }

    #[test]
    fn legacy_dialect_fallback() {
        let markup = r"{\f0 John Smith\line 123 Main Street\line Springfield, IL 62701\line Date of Birth: 1/2/1980}";
        let lines = extract_address(markup, "Smith").unwrap();
        assert_eq!(lines.street, "123 Main Street");
        assert_eq!(lines.locality, "Springfield, IL 62701");
        assert_eq!(lines.dialect, MarkupDialect::Legacy);
    }

    #[test]
    fn paragraph_formatting_word_is_not_a_break() {
        let markup = r"John Smith\pard 123 Main Street\pard Springfield\pard";
        assert!(matches!(
            extract_address(markup, "Smith"),
            Err(ExtractionError::AddressNotFound)
        ));
    }

    #[test]
    fn last_name_is_matched_literally() {
        let markup = r"Ann StxJohn\par 9 Elm Rd\par Dayton, OH\par";
        assert!(matches!(
            extract_address(markup, "St.John"),
            Err(ExtractionError::AddressNotFound)
        ));
        let markup = r"Ann St.John\par 9 Elm Rd\par Dayton, OH\par";
        assert_eq!(extract_address(markup, "St.John").unwrap().street, "9 Elm Rd");
    }

    #[test]
    fn missing_block_is_not_found() {
        assert!(matches!(
            extract_address("no address here", "Smith"),
            Err(ExtractionError::AddressNotFound)
        ));
    }
}
