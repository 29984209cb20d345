pub mod banks;
pub mod subjective;
pub mod objective;
pub mod assessment;
pub mod plan;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::{ComplaintTrendSets, ExamFindings, PatientRecord, RatingMap};

/// The four paragraphs of a generated note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoapSections {
    pub subjective: String,
    pub objective: String,
    pub assessment: String,
    pub plan: String,
}

/// Facts one visit's paragraphs are written from.
#[derive(Debug, Clone, Copy)]
pub struct NarrativeInput<'a> {
    pub patient: &'a PatientRecord,
    /// Ratings of the visit being written.
    pub current: &'a RatingMap,
    /// Ratings of the visit before it.
    pub previous: &'a RatingMap,
    pub findings: &'a ExamFindings,
    pub trends: &'a ComplaintTrendSets,
}

/// Composes SOAP paragraphs by picking from the sentence banks.
///
/// Owns its random source so a seeded synthesizer reproduces the same text.
pub struct NarrativeSynthesizer<R: Rng> {
    rng: R,
}

impl NarrativeSynthesizer<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> NarrativeSynthesizer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Access to the random source, shared with the rating path walk.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Uniform pick from a bank.
    pub fn pick(&mut self, bank: &[&'static str]) -> &'static str {
        if bank.is_empty() {
            return "";
        }
        bank[self.rng.gen_range(0..bank.len())]
    }

    pub fn synthesize(&mut self, input: &NarrativeInput<'_>) -> SoapSections {
        let _span = tracing::debug_span!(
            "synthesize",
            complaints = input.current.len(),
            pain = %input.current.pain(),
            health = %input.current.health()
        )
        .entered();

        SoapSections {
            subjective: self.subjective(input),
            objective: self.objective(input.findings),
            assessment: self.assessment(input),
            plan: self.plan(input.patient),
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Template helpers
// ═══════════════════════════════════════════════════════════

/// Placeholder values for one bank entry.
#[derive(Debug, Clone, Default)]
pub(crate) struct Slots {
    values: Vec<(&'static str, String)>,
}

impl Slots {
    /// Patient voice: name and pronoun placeholders.
    pub(crate) fn for_patient(patient: &PatientRecord) -> Self {
        Self::default()
            .with("{formal}", patient.formal_name())
            .with("{first}", patient.first_name().to_string())
            .with("{pronoun}", patient.pronoun().to_string())
            .with("{possessive}", patient.possessive().to_string())
            .with("{Possessive}", capitalize(patient.possessive()))
    }

    pub(crate) fn with(mut self, key: &'static str, value: String) -> Self {
        self.values.push((key, value));
        self
    }

    pub(crate) fn fill(&self, template: &str) -> String {
        self.values
            .iter()
            .fold(template.to_string(), |text, (key, value)| text.replace(key, value))
    }
}

/// "a", "b and c" style list: commas between items, "and" before the last.
pub fn natural_join<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [head @ .., last] => {
            let head: Vec<&str> = head.iter().map(AsRef::as_ref).collect();
            format!("{} and {}", head.join(", "), last.as_ref())
        }
    }
}

/// "a 6", "an 8".
pub fn with_article(value: impl std::fmt::Display) -> String {
    let text = value.to_string();
    let article = if text.starts_with('8') { "an" } else { "a" };
    format!("{article} {text}")
}

pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Date, Title};
    use rand::rngs::mock::StepRng;

    #[test]
    fn natural_join_shapes() {
        let empty: [&str; 0] = [];
        assert_eq!(natural_join(&empty), "");
        assert_eq!(natural_join(&["neck"]), "neck");
        assert_eq!(natural_join(&["neck", "back"]), "neck and back");
        assert_eq!(natural_join(&["a", "b", "c"]), "a, b and c");
    }

    #[test]
    fn articles() {
        assert_eq!(with_article(6), "a 6");
        assert_eq!(with_article(8), "an 8");
        assert_eq!(with_article(10), "a 10");
        assert_eq!(with_article(0), "a 0");
    }

    #[test]
    fn capitalizes_first_letter_only() {
        assert_eq!(capitalize("their"), "Their");
        assert_eq!(capitalize("lower back"), "Lower back");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn slots_fill_patient_voice() {
        let patient =
            PatientRecord::new("Ann", "Lee", Title::Ms, "9 Elm Rd", "Dayton, OH", Date::new(3, 4, 1970))
                .unwrap();
        let slots = Slots::for_patient(&patient);
        assert_eq!(
            slots.fill("{formal} said {pronoun} felt {possessive} back ease. {Possessive} gait, {first}."),
            "Ms. Lee said she felt her back ease. Her gait, Ann."
        );
    }

    #[test]
    fn zero_rng_picks_first_entry() {
        let mut synth = NarrativeSynthesizer::new(StepRng::new(0, 0));
        assert_eq!(synth.pick(&["first", "second", "third"]), "first");
        assert_eq!(synth.pick(&[]), "");
    }

    #[test]
    fn seeded_synthesizers_agree() {
        let bank = ["a", "b", "c", "d", "e", "f", "g"];
        let mut left = NarrativeSynthesizer::seeded(11);
        let mut right = NarrativeSynthesizer::seeded(11);
        let picks_left: Vec<_> = (0..20).map(|_| left.pick(&bank)).collect();
        let picks_right: Vec<_> = (0..20).map(|_| right.pick(&bank)).collect();
        assert_eq!(picks_left, picks_right);
    }
}
