use serde::{Deserialize, Serialize};

use super::{RatingMap, Trend};

/// Complaints partitioned by how their severity moved between two visits.
///
/// Lower severity counts as improving. Each complaint lands in exactly one
/// set; pain and health are never included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplaintTrendSets {
    pub improving: Vec<String>,
    pub unchanged: Vec<String>,
    pub worsening: Vec<String>,
}

impl ComplaintTrendSets {
    /// Compare each complaint of `current` against its rating in `previous`.
    /// A complaint with no previous rating counts as unchanged.
    pub fn compare(previous: &RatingMap, current: &RatingMap) -> Self {
        let mut sets = Self::default();
        for (name, rating) in current.complaints() {
            let bucket = match previous.get(name) {
                Some(before) if rating < before => &mut sets.improving,
                Some(before) if rating > before => &mut sets.worsening,
                _ => &mut sets.unchanged,
            };
            bucket.push(name.to_string());
        }
        sets
    }

    pub fn get(&self, trend: Trend) -> &[String] {
        match trend {
            Trend::Improving => &self.improving,
            Trend::Unchanged => &self.unchanged,
            Trend::Worsening => &self.worsening,
        }
    }

    /// Non-empty sets in the fixed improving, unchanged, worsening order.
    pub fn non_empty(&self) -> impl Iterator<Item = (Trend, &[String])> {
        Trend::ALL
            .iter()
            .map(move |t| (*t, self.get(*t)))
            .filter(|(_, names)| !names.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rating;

    fn map(entries: &[(&str, i64)]) -> RatingMap {
        let mut m = RatingMap::new(Rating::new(5).unwrap(), Rating::new(5).unwrap());
        for (k, v) in entries {
            m.insert(k, Rating::new(*v).unwrap());
        }
        m
    }

    #[test]
    fn partitions_by_direction() {
        let previous = map(&[("neck", 6), ("shoulder", 3), ("back", 2)]);
        let current = map(&[("neck", 4), ("shoulder", 3), ("back", 5)]);
        let sets = ComplaintTrendSets::compare(&previous, &current);
        assert_eq!(sets.improving, vec!["neck"]);
        assert_eq!(sets.unchanged, vec!["shoulder"]);
        assert_eq!(sets.worsening, vec!["back"]);
    }

    #[test]
    fn missing_previous_counts_as_unchanged() {
        let previous = map(&[]);
        let current = map(&[("hip", 4)]);
        let sets = ComplaintTrendSets::compare(&previous, &current);
        assert_eq!(sets.unchanged, vec!["hip"]);
    }

    #[test]
    fn sets_are_disjoint_and_cover_every_complaint() {
        let previous = map(&[("a", 1), ("b", 5), ("c", 9), ("d", 0)]);
        let current = map(&[("a", 2), ("b", 5), ("c", 3), ("d", 0)]);
        let sets = ComplaintTrendSets::compare(&previous, &current);
        let mut all: Vec<&String> = sets
            .improving
            .iter()
            .chain(&sets.unchanged)
            .chain(&sets.worsening)
            .collect();
        all.sort();
        assert_eq!(all, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn non_empty_skips_empty_sets() {
        let previous = map(&[("neck", 6)]);
        let current = map(&[("neck", 2)]);
        let sets = ComplaintTrendSets::compare(&previous, &current);
        let trends: Vec<Trend> = sets.non_empty().map(|(t, _)| t).collect();
        assert_eq!(trends, vec![Trend::Improving]);
    }
}
