use std::cmp::Ordering;

use rand::Rng;

use super::banks::ASSESSMENT_STATUS;
use super::{capitalize, natural_join, NarrativeInput, NarrativeSynthesizer, Slots};
use crate::models::{Rating, Trend};

/// "has moderately improved", "has mildly worsened", "is unchanged".
///
/// Driven by the overall health rating; a higher rating is better.
pub fn status_phrase(previous_health: Rating, current_health: Rating) -> String {
    let diff = i64::from(current_health) - i64::from(previous_health);
    let degree = if diff.abs() > 1 { "moderately" } else { "mildly" };
    match diff.cmp(&0) {
        Ordering::Greater => format!("has {degree} improved"),
        Ordering::Less => format!("has {degree} worsened"),
        Ordering::Equal => "is unchanged".to_string(),
    }
}

/// "Neck and back are determined to have improved."
pub fn trend_sentence(trend: Trend, names: &[String]) -> String {
    let verb = if names.len() == 1 { "is" } else { "are" };
    let outcome = match trend {
        Trend::Improving => "to have improved",
        Trend::Unchanged => "to be unchanged",
        Trend::Worsening => "to have worsened",
    };
    format!("{} {verb} determined {outcome}.", capitalize(&natural_join(names)))
}

impl<R: Rng> NarrativeSynthesizer<R> {
    pub fn assessment(&mut self, input: &NarrativeInput<'_>) -> String {
        let status = status_phrase(input.previous.health(), input.current.health());
        let slots = Slots::for_patient(input.patient).with("{status}", status);

        let mut sentences = vec![slots.fill(self.pick(ASSESSMENT_STATUS))];
        sentences.extend(
            input
                .trends
                .non_empty()
                .map(|(trend, names)| trend_sentence(trend, names)),
        );
        sentences.join(" ")
    }
}
