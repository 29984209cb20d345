use rand::Rng;

use super::banks::{
    SUBJECTIVE_HEALTH, SUBJECTIVE_IMPROVING, SUBJECTIVE_INTRO, SUBJECTIVE_OVERALL_PAIN,
    SUBJECTIVE_PAIN_INTRO, SUBJECTIVE_RATINGS, SUBJECTIVE_UNCHANGED, SUBJECTIVE_WORSENING,
};
use super::{natural_join, with_article, NarrativeInput, NarrativeSynthesizer, Slots};
use crate::models::{RatingMap, Trend};

fn trend_bank(trend: Trend) -> &'static [&'static str] {
    match trend {
        Trend::Improving => SUBJECTIVE_IMPROVING,
        Trend::Unchanged => SUBJECTIVE_UNCHANGED,
        Trend::Worsening => SUBJECTIVE_WORSENING,
    }
}

/// `neck as a 6, shoulder as a 3 and back as a 2`
pub fn complaint_ratings_phrase(ratings: &RatingMap) -> String {
    let pairs: Vec<String> = ratings
        .complaints()
        .map(|(name, rating)| format!("{name} as {}", with_article(rating)))
        .collect();
    natural_join(&pairs)
}

impl<R: Rng> NarrativeSynthesizer<R> {
    /// Intro, pain and health statements, one sentence per trend set, then
    /// the closing complaint ratings sentence.
    pub fn subjective(&mut self, input: &NarrativeInput<'_>) -> String {
        let voice = Slots::for_patient(input.patient);
        let mut sentences = Vec::new();

        sentences.push(voice.fill(self.pick(SUBJECTIVE_INTRO)));
        sentences.push(voice.fill(self.pick(SUBJECTIVE_PAIN_INTRO)));

        let pain = voice
            .clone()
            .with("{a_rating}", with_article(input.current.pain()));
        sentences.push(pain.fill(self.pick(SUBJECTIVE_OVERALL_PAIN)));

        let health = voice
            .clone()
            .with("{a_rating}", with_article(input.current.health()));
        sentences.push(health.fill(self.pick(SUBJECTIVE_HEALTH)));

        for (trend, names) in input.trends.non_empty() {
            let lead = voice.fill(self.pick(trend_bank(trend)));
            sentences.push(format!("{lead} {}.", natural_join(names)));
        }

        if !input.current.is_empty() {
            sentences.push(format!(
                "{} {}.",
                voice.fill(SUBJECTIVE_RATINGS),
                complaint_ratings_phrase(input.current)
            ));
        }

        sentences.join(" ")
    }
}
