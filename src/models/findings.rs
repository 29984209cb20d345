use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{DomainError, FindingCategory, Region};

/// A vertebra code such as `C5`, `T8` or `L3`.
///
/// Orders by region then vertebra number, so `C2` sorts before `C10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpinalLevel {
    region: Region,
    number: u8,
}

impl SpinalLevel {
    pub fn new(region: Region, number: u8) -> Self {
        Self { region, number }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn number(&self) -> u8 {
        self.number
    }
}

impl fmt::Display for SpinalLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.region.letter(), self.number)
    }
}

impl FromStr for SpinalLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidSpinalLevel(s.to_string());
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let region = chars.next().and_then(Region::from_letter).ok_or_else(invalid)?;
        let digits = chars.as_str();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let number = digits.parse().map_err(|_| invalid())?;
        Ok(Self::new(region, number))
    }
}

/// Tenderness levels found in a note, bucketed by region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TendernessMarkers {
    pub cervical: BTreeSet<SpinalLevel>,
    pub thoracic: BTreeSet<SpinalLevel>,
    pub lumbar: BTreeSet<SpinalLevel>,
}

impl TendernessMarkers {
    pub fn insert(&mut self, level: SpinalLevel) -> bool {
        self.for_region_mut(level.region()).insert(level)
    }

    pub fn for_region(&self, region: Region) -> &BTreeSet<SpinalLevel> {
        match region {
            Region::Cervical => &self.cervical,
            Region::Thoracic => &self.thoracic,
            Region::Lumbar => &self.lumbar,
        }
    }

    fn for_region_mut(&mut self, region: Region) -> &mut BTreeSet<SpinalLevel> {
        match region {
            Region::Cervical => &mut self.cervical,
            Region::Thoracic => &mut self.thoracic,
            Region::Lumbar => &mut self.lumbar,
        }
    }

    /// Which regions this note discusses; `None` when every set is empty.
    pub fn regions_present(&self) -> Option<RegionsPresent> {
        RegionsPresent::from_flags(
            !self.cervical.is_empty(),
            !self.thoracic.is_empty(),
            !self.lumbar.is_empty(),
        )
    }
}

/// The seven non-empty combinations of regions a note can discuss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionsPresent {
    CervicalOnly,
    ThoracicOnly,
    LumbarOnly,
    CervicalThoracic,
    CervicalLumbar,
    ThoracicLumbar,
    AllThree,
}

impl RegionsPresent {
    pub fn from_flags(cervical: bool, thoracic: bool, lumbar: bool) -> Option<Self> {
        match (cervical, thoracic, lumbar) {
            (true, false, false) => Some(Self::CervicalOnly),
            (false, true, false) => Some(Self::ThoracicOnly),
            (false, false, true) => Some(Self::LumbarOnly),
            (true, true, false) => Some(Self::CervicalThoracic),
            (true, false, true) => Some(Self::CervicalLumbar),
            (false, true, true) => Some(Self::ThoracicLumbar),
            (true, true, true) => Some(Self::AllThree),
            (false, false, false) => None,
        }
    }

    /// Present regions in document order (cervical, thoracic, lumbar).
    pub fn regions(&self) -> &'static [Region] {
        match self {
            Self::CervicalOnly => &[Region::Cervical],
            Self::ThoracicOnly => &[Region::Thoracic],
            Self::LumbarOnly => &[Region::Lumbar],
            Self::CervicalThoracic => &[Region::Cervical, Region::Thoracic],
            Self::CervicalLumbar => &[Region::Cervical, Region::Lumbar],
            Self::ThoracicLumbar => &[Region::Thoracic, Region::Lumbar],
            Self::AllThree => &[Region::Cervical, Region::Thoracic, Region::Lumbar],
        }
    }
}

/// Exam findings for one spinal region.
///
/// A category left as `None` was not in the source note and must not be
/// written into a generated one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionFindings {
    pub region: Region,
    pub tenderness: BTreeSet<SpinalLevel>,
    pub tone: Option<String>,
    pub trigger: Option<String>,
    pub rom: Option<String>,
    pub pain: Option<String>,
}

impl RegionFindings {
    pub fn new(region: Region) -> Self {
        Self {
            region,
            tenderness: BTreeSet::new(),
            tone: None,
            trigger: None,
            rom: None,
            pain: None,
        }
    }

    pub fn get(&self, category: FindingCategory) -> Option<&str> {
        match category {
            FindingCategory::Tone => self.tone.as_deref(),
            FindingCategory::Trigger => self.trigger.as_deref(),
            FindingCategory::RangeOfMotion => self.rom.as_deref(),
            FindingCategory::TestPain => self.pain.as_deref(),
        }
    }

    pub fn set(&mut self, category: FindingCategory, sentence: String) {
        let slot = match category {
            FindingCategory::Tone => &mut self.tone,
            FindingCategory::Trigger => &mut self.trigger,
            FindingCategory::RangeOfMotion => &mut self.rom,
            FindingCategory::TestPain => &mut self.pain,
        };
        *slot = Some(sentence);
    }

    pub fn has_findings(&self) -> bool {
        !self.tenderness.is_empty()
            || FindingCategory::ALL.iter().any(|c| self.get(*c).is_some())
    }
}

/// Findings for all three regions of one note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamFindings {
    pub cervical: RegionFindings,
    pub thoracic: RegionFindings,
    pub lumbar: RegionFindings,
}

impl ExamFindings {
    pub fn get(&self, region: Region) -> &RegionFindings {
        match region {
            Region::Cervical => &self.cervical,
            Region::Thoracic => &self.thoracic,
            Region::Lumbar => &self.lumbar,
        }
    }

    pub fn get_mut(&mut self, region: Region) -> &mut RegionFindings {
        match region {
            Region::Cervical => &mut self.cervical,
            Region::Thoracic => &mut self.thoracic,
            Region::Lumbar => &mut self.lumbar,
        }
    }

    /// Regions in document order.
    pub fn iter(&self) -> impl Iterator<Item = &RegionFindings> {
        [&self.cervical, &self.thoracic, &self.lumbar].into_iter()
    }
}

impl Default for ExamFindings {
    fn default() -> Self {
        Self {
            cervical: RegionFindings::new(Region::Cervical),
            thoracic: RegionFindings::new(Region::Thoracic),
            lumbar: RegionFindings::new(Region::Lumbar),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinal_level_parses_case_insensitively() {
        let level: SpinalLevel = "c5".parse().unwrap();
        assert_eq!(level, SpinalLevel::new(Region::Cervical, 5));
        assert_eq!(level.to_string(), "C5");
        assert!("X5".parse::<SpinalLevel>().is_err());
        assert!("L".parse::<SpinalLevel>().is_err());
        assert!("T5a".parse::<SpinalLevel>().is_err());
    }

    #[test]
    fn spinal_levels_sort_numerically() {
        let mut set = BTreeSet::new();
        for code in ["C10", "C2", "C7"] {
            set.insert(code.parse::<SpinalLevel>().unwrap());
        }
        let ordered: Vec<String> = set.iter().map(|l| l.to_string()).collect();
        assert_eq!(ordered, vec!["C2", "C7", "C10"]);
    }

    #[test]
    fn markers_bucket_by_region() {
        let mut markers = TendernessMarkers::default();
        markers.insert("C5".parse().unwrap());
        markers.insert("L4".parse().unwrap());
        assert!(!markers.insert("c5".parse().unwrap()));
        assert_eq!(markers.cervical.len(), 1);
        assert!(markers.thoracic.is_empty());
        assert_eq!(markers.for_region(Region::Lumbar).len(), 1);
        assert_eq!(markers.regions_present(), Some(RegionsPresent::CervicalLumbar));
    }

    #[test]
    fn every_flag_combination_maps_to_a_variant() {
        let mut seen = Vec::new();
        for c in [false, true] {
            for t in [false, true] {
                for l in [false, true] {
                    match RegionsPresent::from_flags(c, t, l) {
                        None => assert!(!c && !t && !l),
                        Some(present) => {
                            let regions = present.regions();
                            assert_eq!(regions.contains(&Region::Cervical), c);
                            assert_eq!(regions.contains(&Region::Thoracic), t);
                            assert_eq!(regions.contains(&Region::Lumbar), l);
                            assert!(regions.windows(2).all(|w| w[0] < w[1]));
                            seen.push(present);
                        }
                    }
                }
            }
        }
        assert_eq!(seen.len(), 7);
    }

    #[test]
    fn region_findings_set_and_get() {
        let mut findings = RegionFindings::new(Region::Thoracic);
        assert!(!findings.has_findings());
        findings.set(FindingCategory::RangeOfMotion, "ROM is reduced".into());
        assert_eq!(findings.get(FindingCategory::RangeOfMotion), Some("ROM is reduced"));
        assert_eq!(findings.get(FindingCategory::Tone), None);
        assert!(findings.has_findings());
    }

    #[test]
    fn exam_findings_iterate_in_spine_order() {
        let exam = ExamFindings::default();
        let regions: Vec<Region> = exam.iter().map(|f| f.region).collect();
        assert_eq!(regions, vec![Region::Cervical, Region::Thoracic, Region::Lumbar]);
    }
}
