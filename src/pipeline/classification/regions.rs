use super::ClassificationError;
use crate::models::{Region, RegionsPresent};

/// Assign sentence ranges to the regions a note discusses.
///
/// A single region takes every sentence. With several, segment `j` runs from
/// boundary `j` (sentence 0 for the first segment) up to boundary `j + 1`, and
/// the last present region takes the remainder.
pub fn partition(
    present: RegionsPresent,
    sentence_count: usize,
    boundaries: &[usize],
) -> Result<Vec<(Region, std::ops::Range<usize>)>, ClassificationError> {
    let regions = present.regions();
    if let [only] = regions {
        return Ok(vec![(*only, 0..sentence_count)]);
    }

    if boundaries.len() < regions.len() {
        return Err(ClassificationError::MissingBoundary {
            regions: regions.len(),
            found: boundaries.len(),
        });
    }

    let last = regions.len() - 1;
    Ok(regions
        .iter()
        .enumerate()
        .map(|(j, region)| {
            let start = if j == 0 { 0 } else { boundaries[j] };
            let end = if j == last {
                sentence_count
            } else {
                boundaries[j + 1]
            };
            (*region, start..end.max(start))
        })
        .collect())
}
