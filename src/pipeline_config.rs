//! Tunables for note generation.
//!
//! `StaircaseConfig` holds the constants of the rating path walk and
//! `HouseFormat` the anchors of the clinic's note layout. Defaults match the
//! notes the clinic produces today.

use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════
// Types
// ═══════════════════════════════════════════════════════════

/// Constants of the bounded random walk between two ratings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaircaseConfig {
    /// Chance per step of an upward bump.
    pub up_chance: f64,
    /// Smallest upward bump.
    pub up_noise_min: i64,
    /// Largest upward bump.
    pub up_noise_max: i64,
    /// Down-chance at step zero; multiplied by `down_chance_decay^i`.
    pub down_chance_base: f64,
    pub down_chance_decay: f64,
    /// Largest downward nudge (drawn from `0..=down_noise_max`).
    pub down_noise_max: i64,
    /// Share of the straight-line increment applied each step.
    pub damping: f64,
}

impl Default for StaircaseConfig {
    fn default() -> Self {
        Self {
            up_chance: 0.1,
            up_noise_min: 1,
            up_noise_max: 3,
            down_chance_base: 0.9,
            down_chance_decay: 0.9,
            down_noise_max: 1,
            damping: 0.75,
        }
    }
}

impl StaircaseConfig {
    /// Probability of a downward nudge at step `i` (1-based).
    pub fn down_chance(&self, step: usize) -> f64 {
        let exponent = i32::try_from(step).unwrap_or(i32::MAX);
        (self.down_chance_base * self.down_chance_decay.powi(exponent)).clamp(0.0, 1.0)
    }
}

/// Anchors of the clinic's note layout that are allowed to vary per clinic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseFormat {
    /// Regex matching the clinic/doctor header that precedes the patient name.
    pub preamble: String,
}

impl Default for HouseFormat {
    fn default() -> Self {
        Self {
            preamble: r"Chiropractic\b.*?\bD\.C\.".to_string(),
        }
    }
}

/// Everything a generation run can be tuned with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub staircase: StaircaseConfig,
    pub house_format: HouseFormat,
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staircase_defaults() {
        let cfg = StaircaseConfig::default();
        assert_eq!(cfg.up_chance, 0.1);
        assert_eq!((cfg.up_noise_min, cfg.up_noise_max), (1, 3));
        assert_eq!(cfg.down_noise_max, 1);
        assert_eq!(cfg.damping, 0.75);
    }

    #[test]
    fn down_chance_decays_each_step() {
        let cfg = StaircaseConfig::default();
        assert!((cfg.down_chance(1) - 0.81).abs() < 1e-9);
        assert!((cfg.down_chance(2) - 0.729).abs() < 1e-9);
        assert!(cfg.down_chance(10) < cfg.down_chance(9));
    }

    #[test]
    fn down_chance_stays_a_probability() {
        let cfg = StaircaseConfig {
            down_chance_base: 3.0,
            down_chance_decay: 1.0,
            ..Default::default()
        };
        assert_eq!(cfg.down_chance(4), 1.0);
    }

    #[test]
    fn config_round_trips_through_json() {
        let cfg = GenerationConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: GenerationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn default_preamble_compiles() {
        assert!(regex::Regex::new(&HouseFormat::default().preamble).is_ok());
    }
}
