//! Note identifiers of the form `SD <First> <Last> <n>.rtf`.
//!
//! Each generated note is named as the successor of the note before it, and
//! the most recent prior note is the greatest name in natural order.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::{NOTE_EXTENSION, NOTE_PREFIX};
use crate::models::PatientRecord;

#[derive(Error, Debug)]
pub enum NamingError {
    #[error("Malformed note name: {0:?}")]
    Malformed(String),

    #[error("No prior note found in {}", .0.display())]
    NoPriorNote(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// `SD John Smith 4`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteName {
    first_name: String,
    last_name: String,
    number: u32,
}

impl NoteName {
    pub fn new(first_name: &str, last_name: &str, number: u32) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            number,
        }
    }

    pub fn for_patient(patient: &PatientRecord, number: u32) -> Self {
        Self::new(patient.first_name(), patient.last_name(), number)
    }

    /// Accepts the name with or without the note extension.
    pub fn parse(text: &str) -> Result<Self, NamingError> {
        let malformed = || NamingError::Malformed(text.to_string());
        let trimmed = text.trim();
        let stem = strip_extension(trimmed).unwrap_or(trimmed);

        let tokens: Vec<&str> = stem.split_whitespace().collect();
        let [prefix, first, last, number] = tokens.as_slice() else {
            return Err(malformed());
        };
        if *prefix != NOTE_PREFIX {
            return Err(malformed());
        }
        let number = number.parse().map_err(|_| malformed())?;
        Ok(Self::new(first, last, number))
    }

    pub fn from_path(path: &Path) -> Result<Self, NamingError> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| NamingError::Malformed(path.display().to_string()))?;
        Self::parse(name)
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    /// The name of the note that follows this one.
    pub fn next(&self) -> Self {
        Self {
            number: self.number.saturating_add(1),
            ..self.clone()
        }
    }

    pub fn file_name(&self) -> String {
        format!("{self}{NOTE_EXTENSION}")
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{NOTE_PREFIX} {} {} {}",
            self.first_name, self.last_name, self.number
        )
    }
}

impl FromStr for NoteName {
    type Err = NamingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn strip_extension(name: &str) -> Option<&str> {
    let split = name.len().checked_sub(NOTE_EXTENSION.len())?;
    let (stem, ext) = (name.get(..split)?, name.get(split..)?);
    ext.eq_ignore_ascii_case(NOTE_EXTENSION).then_some(stem)
}

// ═══════════════════════════════════════════════════════════
// Natural ordering
// ═══════════════════════════════════════════════════════════

/// One run of a file name: digits compare by value, text case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortChunk {
    /// Significant digit count, then the digits with leading zeros removed.
    Number(usize, String),
    Text(String),
}

/// Split digit runs out so `SD ... 10` sorts after `SD ... 9`.
pub fn natural_sort_key(name: &str) -> Vec<SortChunk> {
    let mut chunks = Vec::new();
    let mut rest = name;
    while let Some(first) = rest.chars().next() {
        let is_digit = first.is_ascii_digit();
        let end = rest
            .find(|c: char| c.is_ascii_digit() != is_digit)
            .unwrap_or(rest.len());
        let (run, tail) = rest.split_at(end);
        chunks.push(if is_digit {
            let digits = run.trim_start_matches('0');
            SortChunk::Number(digits.len(), digits.to_string())
        } else {
            SortChunk::Text(run.to_lowercase())
        });
        rest = tail;
    }
    chunks
}

/// Most recent prior note in `dir`: regular files ending in the note
/// extension whose name contains the note prefix, greatest in natural order.
pub fn latest_note(dir: &Path) -> Result<PathBuf, NamingError> {
    let mut best: Option<(Vec<SortChunk>, PathBuf)> = None;

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if !name.ends_with(NOTE_EXTENSION) || !name.contains(NOTE_PREFIX) {
            continue;
        }

        let key = natural_sort_key(name);
        if best.as_ref().map_or(true, |(top, _)| key > *top) {
            best = Some((key, entry.path()));
        }
    }

    let (_, path) = best.ok_or_else(|| NamingError::NoPriorNote(dir.to_path_buf()))?;
    debug!(path = %path.display(), "latest prior note");
    Ok(path)
}
