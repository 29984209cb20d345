use std::fmt;

use serde::{Deserialize, Serialize};

use super::DomainError;

/// Reserved key for the overall pain rating.
pub const PAIN_KEY: &str = "pain";
/// Reserved key for the overall health rating.
pub const HEALTH_KEY: &str = "health";

/// Patient-reported severity, 0 (none) to 10 (worst).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 10;

    pub fn new(value: i64) -> Result<Self, DomainError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(DomainError::RatingOutOfRange(value))
        }
    }

    /// Saturating constructor; out-of-range input lands on the nearest bound.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl From<Rating> for i64 {
    fn from(rating: Rating) -> Self {
        i64::from(rating.0)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Complaint name -> severity, plus the derived `pain` and `health` entries.
///
/// Complaints keep document order so generated prose lists them the way the
/// source note did; equality ignores that order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingMap {
    complaints: Vec<(String, Rating)>,
    pain: Rating,
    health: Rating,
}

impl RatingMap {
    pub fn new(pain: Rating, health: Rating) -> Self {
        Self {
            complaints: Vec::new(),
            pain,
            health,
        }
    }

    /// Insert or replace a rating. The reserved keys update the derived
    /// pain/health values. Returns the previous rating for the key.
    pub fn insert(&mut self, key: &str, rating: Rating) -> Option<Rating> {
        match key {
            PAIN_KEY => Some(std::mem::replace(&mut self.pain, rating)),
            HEALTH_KEY => Some(std::mem::replace(&mut self.health, rating)),
            _ => {
                if let Some(slot) = self.complaints.iter_mut().find(|(k, _)| k == key) {
                    return Some(std::mem::replace(&mut slot.1, rating));
                }
                self.complaints.push((key.to_string(), rating));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<Rating> {
        match key {
            PAIN_KEY => Some(self.pain),
            HEALTH_KEY => Some(self.health),
            _ => self
                .complaints
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, r)| *r),
        }
    }

    pub fn pain(&self) -> Rating {
        self.pain
    }

    pub fn health(&self) -> Rating {
        self.health
    }

    /// Complaints other than pain/health, in document order.
    pub fn complaints(&self) -> impl Iterator<Item = (&str, Rating)> + '_ {
        self.complaints.iter().map(|(k, r)| (k.as_str(), *r))
    }

    pub fn complaint_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.complaints.iter().map(|(k, _)| k.as_str())
    }

    pub fn contains_complaint(&self, key: &str) -> bool {
        self.complaints.iter().any(|(k, _)| k == key)
    }

    /// Number of complaints, not counting pain/health.
    pub fn len(&self) -> usize {
        self.complaints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.complaints.is_empty()
    }
}

impl PartialEq for RatingMap {
    fn eq(&self, other: &Self) -> bool {
        self.pain == other.pain
            && self.health == other.health
            && self.complaints.len() == other.complaints.len()
            && self
                .complaints
                .iter()
                .all(|(k, r)| other.get(k) == Some(*r))
    }
}

impl Eq for RatingMap {}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(v: i64) -> Rating {
        Rating::new(v).unwrap()
    }

    #[test]
    fn rating_bounds() {
        assert!(Rating::new(0).is_ok());
        assert!(Rating::new(10).is_ok());
        assert_eq!(Rating::new(11), Err(DomainError::RatingOutOfRange(11)));
        assert_eq!(Rating::new(-1), Err(DomainError::RatingOutOfRange(-1)));
    }

    #[test]
    fn clamped_saturates() {
        assert_eq!(Rating::clamped(14).value(), 10);
        assert_eq!(Rating::clamped(-3).value(), 0);
        assert_eq!(Rating::clamped(7).value(), 7);
    }

    #[test]
    fn rating_serde_rejects_out_of_range() {
        assert_eq!(serde_json::to_string(&r(4)).unwrap(), "4");
        assert_eq!(serde_json::from_str::<Rating>("9").unwrap(), r(9));
        assert!(serde_json::from_str::<Rating>("12").is_err());
    }

    #[test]
    fn reserved_keys_always_present() {
        let map = RatingMap::new(r(6), r(7));
        assert_eq!(map.get(PAIN_KEY), Some(r(6)));
        assert_eq!(map.get(HEALTH_KEY), Some(r(7)));
        assert!(map.is_empty());
    }

    #[test]
    fn insert_replaces_and_keeps_order() {
        let mut map = RatingMap::new(r(5), r(5));
        assert_eq!(map.insert("neck", r(6)), None);
        assert_eq!(map.insert("back", r(2)), None);
        assert_eq!(map.insert("neck", r(4)), Some(r(6)));
        let names: Vec<&str> = map.complaint_names().collect();
        assert_eq!(names, vec!["neck", "back"]);
        assert_eq!(map.get("neck"), Some(r(4)));
        assert_eq!(map.get("Neck"), None);
    }

    #[test]
    fn insert_reserved_key_updates_derived_value() {
        let mut map = RatingMap::new(r(5), r(5));
        assert_eq!(map.insert(PAIN_KEY, r(3)), Some(r(5)));
        assert_eq!(map.pain(), r(3));
        assert!(map.is_empty());
    }

    #[test]
    fn equality_ignores_order() {
        let mut a = RatingMap::new(r(1), r(2));
        a.insert("neck", r(6));
        a.insert("back", r(2));
        let mut b = RatingMap::new(r(1), r(2));
        b.insert("back", r(2));
        b.insert("neck", r(6));
        assert_eq!(a, b);

        b.insert("neck", r(5));
        assert_ne!(a, b);
    }
}
