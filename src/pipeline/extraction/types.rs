use serde::{Deserialize, Serialize};

use crate::models::{PatientRecord, RatingMap, TendernessMarkers};

/// Everything recovered from one prior note.
///
/// Built fresh for each document and passed by reference to the classifier
/// and synthesizer; nothing about a note outlives this value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub patient: PatientRecord,
    pub ratings: RatingMap,
    pub tenderness: TendernessMarkers,
    /// Body of the "Today's Treatment" section, copied unchanged.
    pub treatment: Option<String>,
}
