use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "AutoSOAP";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prefix every SOAP note file name starts with ("SD John Smith 12.rtf").
pub const NOTE_PREFIX: &str = "SD";

/// Extension of note documents produced by the document writer.
pub const NOTE_EXTENSION: &str = ".rtf";

/// Environment variable overriding where prior notes are looked up.
pub const NOTES_DIR_ENV: &str = "AUTOSOAP_NOTES_DIR";

/// Notes live next to the folder the tool is run from unless overridden.
const DEFAULT_NOTES_DIR: &str = "../";

/// Directory searched for the most recent prior note.
pub fn notes_dir() -> PathBuf {
    std::env::var_os(NOTES_DIR_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_NOTES_DIR))
}

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "autosoap_lib=info"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_autosoap() {
        assert_eq!(APP_NAME, "AutoSOAP");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn note_extension_has_leading_dot() {
        assert!(NOTE_EXTENSION.starts_with('.'));
    }

    #[test]
    fn default_filter_targets_this_crate() {
        assert!(default_log_filter().starts_with("autosoap_lib"));
    }
}
