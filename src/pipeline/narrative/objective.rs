use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;

use super::banks::{OBJECTIVE_ROM, OBJECTIVE_TENDER, OBJECTIVE_TEST_PAIN, OBJECTIVE_TONE, OBJECTIVE_TRIGGER};
use super::{capitalize, natural_join, NarrativeSynthesizer, Slots};
use crate::models::{ExamFindings, RegionFindings};

static BODY_PART_ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:in|of) the\s+").expect("Invalid body part regex"));

/// The affected body part of a finding: whatever follows the last
/// "in the" / "of the" in the sentence.
pub fn body_part(sentence: &str) -> Option<&str> {
    let anchor = BODY_PART_ANCHOR.find_iter(sentence).last()?;
    let part = sentence[anchor.end()..].trim().trim_end_matches('.').trim_end();
    (!part.is_empty()).then_some(part)
}

impl<R: Rng> NarrativeSynthesizer<R> {
    /// One block per region with findings, cervical first.
    pub fn objective(&mut self, findings: &ExamFindings) -> String {
        findings
            .iter()
            .filter(|region| region.has_findings())
            .map(|region| self.region_block(region))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn region_block(&mut self, findings: &RegionFindings) -> String {
        let name = findings.region.as_str();
        let slots = Slots::default()
            .with("{region}", name.to_string())
            .with("{Region}", capitalize(name));
        let mut sentences = Vec::new();

        if !findings.tenderness.is_empty() {
            let levels: Vec<String> = findings.tenderness.iter().map(|l| l.to_string()).collect();
            let lead = slots.fill(self.pick(OBJECTIVE_TENDER));
            sentences.push(format!("{lead} {}.", natural_join(&levels)));
        }
        if let Some(source) = findings.tone.as_deref() {
            let lead = slots.fill(self.pick(OBJECTIVE_TONE));
            sentences.push(reuse_body_part(&lead, source));
        }
        if let Some(source) = findings.trigger.as_deref() {
            let lead = slots.fill(self.pick(OBJECTIVE_TRIGGER));
            sentences.push(reuse_body_part(&lead, source));
        }
        if findings.rom.is_some() {
            sentences.push(slots.fill(self.pick(OBJECTIVE_ROM)));
        }
        if findings.pain.is_some() {
            sentences.push(self.pick(OBJECTIVE_TEST_PAIN).to_string());
        }

        sentences.join(" ")
    }
}

/// Bank lead plus the source's body part; the source sentence as written
/// when it names no body part.
fn reuse_body_part(lead: &str, source: &str) -> String {
    match body_part(source) {
        Some(part) => format!("{lead} {part}."),
        None => format!("{}.", source.trim().trim_end_matches('.')),
    }
}
