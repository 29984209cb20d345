use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::models::{Region, SpinalLevel, TendernessMarkers};
use crate::pipeline::normalize::split_sentences;

/// Phrases that introduce a list of tender vertebra levels.
pub const TENDERNESS_CUES: &[&str] = &["spinous process", "spinous levels", "following levels"];

static LEVEL_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b([CTL])(\d{1,2})\b").expect("Invalid spinal level regex")
});

/// Collect C/T/L level codes from every sentence that carries a tenderness cue.
pub fn extract_tenderness(plain: &str) -> TendernessMarkers {
    let mut markers = TendernessMarkers::default();

    for sentence in split_sentences(plain) {
        if !has_tenderness_cue(&sentence) {
            continue;
        }
        for caps in LEVEL_TOKEN.captures_iter(&sentence) {
            let Some(region) = caps[1].chars().next().and_then(Region::from_letter) else {
                continue;
            };
            let Ok(number) = caps[2].parse::<u8>() else {
                continue;
            };
            markers.insert(SpinalLevel::new(region, number));
        }
    }

    debug!(
        cervical = markers.cervical.len(),
        thoracic = markers.thoracic.len(),
        lumbar = markers.lumbar.len(),
        "tenderness markers extracted"
    );
    markers
}

fn has_tenderness_cue(sentence: &str) -> bool {
    let lower = sentence.to_lowercase();
    TENDERNESS_CUES.iter().any(|cue| lower.contains(cue))
}
