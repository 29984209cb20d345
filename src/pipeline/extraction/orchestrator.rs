use tracing::{debug, warn};

use super::address::extract_address;
use super::identity::{extract_identity, extract_title};
use super::ratings::extract_ratings;
use super::tenderness::extract_tenderness;
use super::treatment::extract_treatment;
use super::types::ExtractionResult;
use super::ExtractionError;
use crate::models::PatientRecord;
use crate::pipeline::normalize::NormalizedNote;
use crate::pipeline_config::HouseFormat;

/// Runs every field extractor over one prior note:
/// identity → title → address → ratings → tenderness → treatment
///
/// Any required field that cannot be recovered aborts the whole note; there
/// is no partial result.
pub fn extract_note(
    note: &NormalizedNote,
    format: &HouseFormat,
) -> Result<ExtractionResult, ExtractionError> {
    let _span = tracing::info_span!("extract_note", plain_len = note.plain.len()).entered();

    let identity = extract_identity(&note.plain, format)?;
    let title = extract_title(&note.plain, identity.end)?;
    let address = extract_address(&note.markup, &identity.last_name)?;

    let patient = PatientRecord::new(
        &identity.first_name,
        &identity.last_name,
        title,
        &address.street,
        &address.locality,
        identity.date_of_birth,
    )?;

    let ratings = extract_ratings(&note.plain)?;
    let tenderness = extract_tenderness(&note.plain);

    let treatment = extract_treatment(&note.plain);
    if treatment.is_none() {
        warn!("no treatment section found; generated notes will omit it");
    }

    debug!(
        complaints = ratings.len(),
        regions = ?tenderness.regions_present(),
        "note extracted"
    );

    Ok(ExtractionResult {
        patient,
        ratings,
        tenderness,
        treatment,
    })
}
