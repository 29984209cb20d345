//! Bounded random walk of severity ratings across visits.
//!
//! Walks from a known starting rating toward a target over a fixed number
//! of visits. Each intermediate step moves a damped share of the
//! straight-line increment still required, plus occasional noise, and is
//! clamped into the valid band. The final step is forced onto the target.

use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::models::Rating;
use crate::pipeline_config::StaircaseConfig;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StaircaseError {
    #[error("Rating path needs at least one step")]
    NoSteps,
}

/// Ratings for visit 0 (the known start) through visit `steps` (the target).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingPath(Vec<Rating>);

impl RatingPath {
    pub fn start(&self) -> Rating {
        self.0[0]
    }

    pub fn target(&self) -> Rating {
        self.0[self.0.len() - 1]
    }

    /// Number of steps (one less than the number of ratings).
    pub fn steps(&self) -> usize {
        self.0.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<Rating> {
        self.0.get(index).copied()
    }

    pub fn as_slice(&self) -> &[Rating] {
        &self.0
    }

    pub fn values(&self) -> Vec<u8> {
        self.0.iter().map(|r| r.value()).collect()
    }
}

/// Generate a path of `steps + 1` ratings from `start` ending exactly on `target`.
///
/// Intermediate values stay in `[start, 10]` when the walk trends upward and
/// in `[target, 10]` otherwise.
pub fn generate_path<R: Rng + ?Sized>(
    start: Rating,
    target: Rating,
    steps: usize,
    config: &StaircaseConfig,
    rng: &mut R,
) -> Result<RatingPath, StaircaseError> {
    if steps == 0 {
        return Err(StaircaseError::NoSteps);
    }

    let start_value = i64::from(start);
    let target_value = i64::from(target);
    let floor = if target_value > start_value {
        start_value
    } else {
        target_value
    };
    let ceiling = i64::from(Rating::MAX);

    let mut path = Vec::with_capacity(steps + 1);
    path.push(start);
    let mut current = start_value;

    for step in 1..=steps {
        if step == steps {
            path.push(target);
            break;
        }

        let remaining = (steps - step) as f64;
        let ideal_step = (target_value - current) as f64 / remaining;
        let noise = draw_noise(step, current, target_value, config, rng);

        // Halves round to even.
        let increment = (config.damping * ideal_step).round_ties_even();
        let moved = (current as f64 + noise as f64 + increment).round_ties_even();
        current = (moved as i64).clamp(floor, ceiling);
        path.push(Rating::clamped(current));
    }

    debug!(
        start = start_value,
        target = target_value,
        steps,
        path = ?path.iter().map(|r| r.value()).collect::<Vec<_>>(),
        "generated rating path"
    );

    Ok(RatingPath(path))
}

/// Upward bumps happen with a fixed chance; downward nudges only while the
/// walk is still above the target, with a chance that decays each step.
fn draw_noise<R: Rng + ?Sized>(
    step: usize,
    current: i64,
    target: i64,
    config: &StaircaseConfig,
    rng: &mut R,
) -> i64 {
    if rng.gen_bool(config.up_chance.clamp(0.0, 1.0)) {
        return rng.gen_range(config.up_noise_min..=config.up_noise_max.max(config.up_noise_min));
    }
    if target < current && rng.gen_bool(config.down_chance(step)) {
        return -rng.gen_range(0..=config.down_noise_max.max(0));
    }
    0
}
