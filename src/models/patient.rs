use serde::{Deserialize, Serialize};

use super::{Date, DomainError, Title};

/// Identifying information recovered from a prior note.
///
/// Fields are private; setters re-validate before committing so a record
/// never holds an empty name or an unset birth date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRecord {
    first_name: String,
    last_name: String,
    title: Title,
    street: String,
    locality: String,
    date_of_birth: Date,
}

impl PatientRecord {
    pub fn new(
        first_name: &str,
        last_name: &str,
        title: Title,
        street: &str,
        locality: &str,
        date_of_birth: Date,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            first_name: validate_name(first_name)?,
            last_name: validate_name(last_name)?,
            title,
            street: street.trim().to_string(),
            locality: locality.trim().to_string(),
            date_of_birth: validate_birth_date(date_of_birth)?,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn title(&self) -> Title {
        self.title
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn locality(&self) -> &str {
        &self.locality
    }

    pub fn date_of_birth(&self) -> Date {
        self.date_of_birth
    }

    /// "John Smith"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// "Mr. Smith"
    pub fn formal_name(&self) -> String {
        format!("{} {}", self.title, self.last_name)
    }

    pub fn pronoun(&self) -> &'static str {
        self.title.pronoun()
    }

    pub fn possessive(&self) -> &'static str {
        self.title.possessive()
    }

    pub fn set_first_name(&mut self, name: &str) -> Result<(), DomainError> {
        self.first_name = validate_name(name)?;
        Ok(())
    }

    pub fn set_last_name(&mut self, name: &str) -> Result<(), DomainError> {
        self.last_name = validate_name(name)?;
        Ok(())
    }

    pub fn set_title(&mut self, title: Title) {
        self.title = title;
    }

    pub fn set_address(&mut self, street: &str, locality: &str) {
        self.street = street.trim().to_string();
        self.locality = locality.trim().to_string();
    }

    pub fn set_date_of_birth(&mut self, date: Date) -> Result<(), DomainError> {
        self.date_of_birth = validate_birth_date(date)?;
        Ok(())
    }
}

/// Names are single whitespace-free tokens.
fn validate_name(name: &str) -> Result<String, DomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed.contains(char::is_whitespace) {
        return Err(DomainError::InvalidName(name.to_string()));
    }
    Ok(trimmed.to_string())
}

fn validate_birth_date(date: Date) -> Result<Date, DomainError> {
    if date.is_set() {
        Ok(date)
    } else {
        Err(DomainError::InvalidDate(date.standard()))
    }
}
