pub mod segment;
pub mod regions;
pub mod categorize;

pub use segment::*;
pub use regions::*;
pub use categorize::*;

use thiserror::Error;
use tracing::debug;

use crate::models::{ExamFindings, Region, TendernessMarkers};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassificationError {
    #[error("classification: objective section not found")]
    ObjectiveNotFound,

    #[error("classification: no spinal region found in tenderness markers")]
    NoRegionsFound,

    #[error("classification: {regions} regions need {regions} boundary sentences, found {found}")]
    MissingBoundary { regions: usize, found: usize },
}

/// Build per-region findings from the objective section of a note.
///
/// Pure in its inputs: the same text and markers always give the same result.
pub fn classify_findings(
    plain: &str,
    tenderness: &TendernessMarkers,
) -> Result<ExamFindings, ClassificationError> {
    let present = tenderness
        .regions_present()
        .ok_or(ClassificationError::NoRegionsFound)?;

    let sentences = objective_sentences(plain)?;
    let boundaries = boundary_indices(&sentences);
    let segments = partition(present, sentences.len(), &boundaries)?;

    let mut findings = ExamFindings::default();
    for region in Region::ALL.iter().copied() {
        findings.get_mut(region).tenderness = tenderness.for_region(region).clone();
    }
    for (region, range) in segments {
        let group = sentences.get(range.clone()).unwrap_or_default();
        categorize(group, findings.get_mut(region));
        debug!(%region, sentences = group.len(), "region segment categorized");
    }

    Ok(findings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SpinalLevel, RegionsPresent};
    use crate::pipeline::extraction::extract_tenderness;
    use crate::pipeline::fixtures;

    fn markers(levels: &[&str]) -> TendernessMarkers {
        let mut markers = TendernessMarkers::default();
        for level in levels {
            markers.insert(level.parse::<SpinalLevel>().unwrap());
        }
        markers
    }

    #[test]
    fn cervical_and_lumbar_with_two_boundaries() {
        let plain = "Subjective Complaint ok. Objective \
                     Palpation of the cervical spine revealed tenderness at the following levels: C5. \
                     Hypertonicity is found in the upper trapezius. \
                     There was tenderness on the spinous process at: L4. \
                     Lumbar spine ROM has decreased. \
                     Assessment Improving.";
        let tender = markers(&["C5", "L4"]);
        assert_eq!(tender.regions_present(), Some(RegionsPresent::CervicalLumbar));

        let findings = classify_findings(plain, &tender).unwrap();
        assert_eq!(
            findings.cervical.tone.as_deref(),
            Some("Hypertonicity is found in the upper trapezius")
        );
        assert_eq!(findings.cervical.rom, None);
        assert!(!findings.thoracic.has_findings());
        assert_eq!(findings.lumbar.rom.as_deref(), Some("Lumbar spine ROM has decreased"));
        assert_eq!(findings.lumbar.tone, None);
        assert_eq!(findings.lumbar.tenderness, tender.lumbar);
    }

    #[test]
    fn all_three_regions_each_get_their_sentences() {
        let plain = "Subjective Complaint ok. Objective \
                     Palpation of the cervical spine revealed tenderness at the following levels: C5. \
                     Hypertonicity is found in the upper trapezius. \
                     Thoracic spine tenderness was noted in the spinous process region at: T4. \
                     Myofascial trigger points are present in the rhomboids. \
                     There was tenderness on the spinous process at: L4. \
                     Lumbar spine ROM has decreased. \
                     The patient complained of pain during testing. \
                     Assessment Improving.";
        let tender = markers(&["C5", "T4", "L4"]);
        assert_eq!(tender.regions_present(), Some(RegionsPresent::AllThree));

        let findings = classify_findings(plain, &tender).unwrap();
        assert_eq!(
            findings.cervical.tone.as_deref(),
            Some("Hypertonicity is found in the upper trapezius")
        );
        assert_eq!(findings.cervical.trigger, None);
        assert_eq!(
            findings.thoracic.trigger.as_deref(),
            Some("Myofascial trigger points are present in the rhomboids")
        );
        assert_eq!(findings.thoracic.tone, None);
        assert_eq!(findings.thoracic.tenderness, tender.thoracic);
        assert_eq!(findings.lumbar.rom.as_deref(), Some("Lumbar spine ROM has decreased"));
        assert_eq!(
            findings.lumbar.pain.as_deref(),
            Some("The patient complained of pain during testing")
        );
        assert_eq!(findings.lumbar.trigger, None);
    }

    #[test]
    fn thoracic_and_lumbar_without_cervical() {
        let plain = "Objective \
                     There is tenderness of the following thoracic spinous levels: T6. \
                     Hypertonicity is palpable in the rhomboids. \
                     Palpation of the lumbar spine revealed tenderness at the following levels: L5. \
                     Lumbar range of motion has declined. \
                     Assessment Unchanged.";
        let tender = markers(&["T6", "L5"]);
        assert_eq!(tender.regions_present(), Some(RegionsPresent::ThoracicLumbar));

        let findings = classify_findings(plain, &tender).unwrap();
        assert!(!findings.cervical.has_findings());
        assert_eq!(
            findings.thoracic.tone.as_deref(),
            Some("Hypertonicity is palpable in the rhomboids")
        );
        assert_eq!(findings.thoracic.rom, None);
        assert_eq!(findings.lumbar.rom.as_deref(), Some("Lumbar range of motion has declined"));
        assert_eq!(findings.lumbar.tone, None);
    }

    #[test]
    fn sample_note_is_split_by_region() {
        let plain = fixtures::note().plain;
        let findings = classify_findings(&plain, &extract_tenderness(&plain)).unwrap();

        assert_eq!(
            findings.cervical.tone.as_deref(),
            Some("Hypertonicity was noted in the upper trapezius")
        );
        assert_eq!(
            findings.cervical.rom.as_deref(),
            Some("Cervical ROM was reduced in rotation")
        );
        assert_eq!(findings.cervical.trigger, None);
        assert_eq!(
            findings.lumbar.trigger.as_deref(),
            Some("Trigger points were found in the quadratus lumborum")
        );
        assert_eq!(
            findings.lumbar.pain.as_deref(),
            Some("Pain was elicited during Kemp's test")
        );
        assert_eq!(findings.lumbar.tone, None);
    }

    #[test]
    fn classification_is_idempotent() {
        let plain = fixtures::note().plain;
        let tender = extract_tenderness(&plain);
        let first = classify_findings(&plain, &tender).unwrap();
        let second = classify_findings(&plain, &tender).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn no_markers_means_no_regions() {
        assert_eq!(
            classify_findings("Objective nothing. Assessment", &TendernessMarkers::default()),
            Err(ClassificationError::NoRegionsFound)
        );
    }

    #[test]
    fn single_boundary_for_two_regions_fails() {
        let plain = "Objective Tenderness at the following levels: C5 and L4. Tight muscles. Assessment";
        assert_eq!(
            classify_findings(plain, &markers(&["C5", "L4"])),
            Err(ClassificationError::MissingBoundary { regions: 2, found: 1 })
        );
    }

    #[test]
    fn single_region_without_boundary_uses_all_sentences() {
        let plain = "Objective Tender spinous process. Hypertonicity is palpable in the rhomboids. Assessment";
        let findings = classify_findings(plain, &markers(&["T4"])).unwrap();
        assert_eq!(
            findings.thoracic.tone.as_deref(),
            Some("Hypertonicity is palpable in the rhomboids")
        );
    }
}
