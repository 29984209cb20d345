use rand::Rng;

use super::banks::PLAN;
use super::{NarrativeSynthesizer, Slots};
use crate::models::PatientRecord;

impl<R: Rng> NarrativeSynthesizer<R> {
    pub fn plan(&mut self, patient: &PatientRecord) -> String {
        Slots::for_patient(patient).fill(self.pick(PLAN))
    }
}
