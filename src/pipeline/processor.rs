//! Visit runner.
//!
//! Single entry point that turns one prior note into the notes for a run of
//! later visits: extract → classify → rating paths → synthesize per visit.
//!
//! The prior note is read once. Every visit gets freshly built rating maps
//! and trend sets from the immutable extraction result, so nothing written
//! for one visit leaks into the next.

use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config;
use crate::models::{ComplaintTrendSets, Date, DomainError, FillMode, Rating, RatingMap};
use crate::naming::{latest_note, NamingError, NoteName};
use crate::pipeline::classification::{classify_findings, ClassificationError};
use crate::pipeline::extraction::{extract_note, ExtractionError};
use crate::pipeline::narrative::{NarrativeInput, NarrativeSynthesizer, SoapSections};
use crate::pipeline::normalize::NormalizedNote;
use crate::pipeline::staircase::{generate_path, RatingPath, StaircaseError};
use crate::pipeline_config::GenerationConfig;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur while generating a run of notes.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Classification failed: {0}")]
    Classification(#[from] ClassificationError),

    #[error("Rating path failed: {0}")]
    Staircase(#[from] StaircaseError),

    #[error("Note naming failed: {0}")]
    Naming(#[from] NamingError),

    #[error("Invalid value: {0}")]
    Domain(#[from] DomainError),

    #[error("Visit plan has no visit dates")]
    EmptyVisitPlan,

    #[error("Single fill takes exactly one visit date, got {0}")]
    SingleFillDateCount(usize),

    #[error("Invalid visit date: {0}")]
    InvalidVisitDate(String),

    #[error("Visit dates out of order: {previous} is not before {next}")]
    VisitDatesOutOfOrder { previous: String, next: String },

    #[error("No target rating for complaint {0:?}")]
    MissingTarget(String),

    #[error("Target given for unknown complaint {0:?}")]
    UnknownComplaint(String),
}

// ---------------------------------------------------------------------------
// Plan and result types
// ---------------------------------------------------------------------------

/// What the caller wants generated: which visits and where ratings should land.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitPlan {
    pub fill_mode: FillMode,
    /// One per note to generate, strictly ascending.
    pub visit_dates: Vec<Date>,
    /// Ratings the last generated visit must reach, pain and health included.
    pub targets: RatingMap,
}

impl VisitPlan {
    pub fn new(fill_mode: FillMode, visit_dates: Vec<Date>, targets: RatingMap) -> Self {
        Self {
            fill_mode,
            visit_dates,
            targets,
        }
    }

    /// Check the dates and that targets cover exactly the prior note's complaints.
    pub fn validate(&self, prior: &RatingMap) -> Result<(), RunError> {
        let count = self.visit_dates.len();
        if count == 0 {
            return Err(RunError::EmptyVisitPlan);
        }
        if self.fill_mode == FillMode::Single && count != 1 {
            return Err(RunError::SingleFillDateCount(count));
        }

        for date in &self.visit_dates {
            if date.to_naive_date().is_none() {
                return Err(RunError::InvalidVisitDate(date.standard()));
            }
        }
        for pair in self.visit_dates.windows(2) {
            if pair[0] >= pair[1] {
                return Err(RunError::VisitDatesOutOfOrder {
                    previous: pair[0].standard(),
                    next: pair[1].standard(),
                });
            }
        }

        if let Some(name) = prior
            .complaint_names()
            .find(|name| !self.targets.contains_complaint(name))
        {
            return Err(RunError::MissingTarget(name.to_string()));
        }
        if let Some(name) = self
            .targets
            .complaint_names()
            .find(|name| !prior.contains_complaint(name))
        {
            return Err(RunError::UnknownComplaint(name.to_string()));
        }
        Ok(())
    }
}

/// One generated note, ready for the document writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedNote {
    pub name: NoteName,
    pub visit_date: Date,
    pub ratings: RatingMap,
    pub sections: SoapSections,
    /// Copied unchanged from the prior note.
    pub treatment: Option<String>,
}

impl GeneratedNote {
    pub fn file_name(&self) -> String {
        self.name.file_name()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Rating paths for pain, health and every complaint of the prior note.
#[derive(Debug, Clone)]
struct RatingPaths {
    pain: RatingPath,
    health: RatingPath,
    complaints: Vec<(String, RatingPath)>,
}

impl RatingPaths {
    /// Ratings of visit `k` (0 is the prior note). `k` must not exceed the step count.
    fn at(&self, k: usize) -> RatingMap {
        let value = |path: &RatingPath| path.as_slice()[k];
        let mut map = RatingMap::new(value(&self.pain), value(&self.health));
        for (name, path) in &self.complaints {
            map.insert(name, value(path));
        }
        map
    }
}

// ---------------------------------------------------------------------------
// Runner
// ---------------------------------------------------------------------------

/// Drives note generation for one patient.
///
/// Randomness comes from the owned synthesizer; seed it for reproducible runs.
pub struct NoteProcessor<R: Rng> {
    config: GenerationConfig,
    synthesizer: NarrativeSynthesizer<R>,
}

impl NoteProcessor<StdRng> {
    pub fn seeded(config: GenerationConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> NoteProcessor<R> {
    pub fn new(config: GenerationConfig, rng: R) -> Self {
        Self {
            config,
            synthesizer: NarrativeSynthesizer::new(rng),
        }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Generate one note per planned visit, named after `previous`.
    pub fn run(
        &mut self,
        note: &NormalizedNote,
        previous: &NoteName,
        plan: &VisitPlan,
    ) -> Result<Vec<GeneratedNote>, RunError> {
        let _span = tracing::info_span!(
            "generate_visits",
            fill_mode = %plan.fill_mode,
            visits = plan.visit_dates.len(),
            previous = %previous
        )
        .entered();

        let extraction = extract_note(note, &self.config.house_format)?;
        let findings = classify_findings(&note.plain, &extraction.tenderness)?;
        plan.validate(&extraction.ratings)?;

        let steps = plan.visit_dates.len();
        let paths = self.rating_paths(&extraction.ratings, &plan.targets, steps)?;

        let mut name = previous.clone();
        let mut notes = Vec::with_capacity(steps);
        for (k, visit_date) in (1..=steps).zip(plan.visit_dates.iter().copied()) {
            let prior_ratings = paths.at(k - 1);
            let ratings = paths.at(k);
            let trends = ComplaintTrendSets::compare(&prior_ratings, &ratings);

            let sections = self.synthesizer.synthesize(&NarrativeInput {
                patient: &extraction.patient,
                current: &ratings,
                previous: &prior_ratings,
                findings: &findings,
                trends: &trends,
            });

            name = name.next();
            info!(visit = k, name = %name, date = %visit_date, "note generated");
            notes.push(GeneratedNote {
                name: name.clone(),
                visit_date,
                ratings,
                sections,
                treatment: extraction.treatment.clone(),
            });
        }

        Ok(notes)
    }

    fn rating_paths(
        &mut self,
        start: &RatingMap,
        targets: &RatingMap,
        steps: usize,
    ) -> Result<RatingPaths, RunError> {
        let config = &self.config.staircase;
        let rng = self.synthesizer.rng_mut();

        let pain = generate_path(start.pain(), targets.pain(), steps, config, rng)?;
        let health = generate_path(start.health(), targets.health(), steps, config, rng)?;

        let mut complaints = Vec::with_capacity(start.len());
        for (name, rating) in start.complaints() {
            let target = targets
                .get(name)
                .ok_or_else(|| RunError::MissingTarget(name.to_string()))?;
            let path = generate_path(rating, target, steps, config, rng)?;
            debug!(complaint = name, path = ?path.values(), "rating path");
            complaints.push((name.to_string(), path));
        }

        Ok(RatingPaths {
            pain,
            health,
            complaints,
        })
    }
}

/// Locate the most recent prior note in `dir` and parse its name.
pub fn locate_prior_note(dir: &Path) -> Result<(PathBuf, NoteName), RunError> {
    let path = latest_note(dir)?;
    let name = NoteName::from_path(&path)?;
    Ok((path, name))
}

/// Same as [`locate_prior_note`], searching `config::notes_dir()`.
pub fn locate_prior_note_default() -> Result<(PathBuf, NoteName), RunError> {
    locate_prior_note(&config::notes_dir())
}

/// Targets built from plain integers, as collected from the user.
pub fn targets_from_values(
    pain: i64,
    health: i64,
    complaints: &[(&str, i64)],
) -> Result<RatingMap, RunError> {
    let mut targets = RatingMap::new(Rating::new(pain)?, Rating::new(health)?);
    for (name, value) in complaints {
        targets.insert(name, Rating::new(*value)?);
    }
    Ok(targets)
}
