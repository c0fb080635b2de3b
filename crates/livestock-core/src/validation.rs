//! Checks run before a record is handed to the API for creation or update.

use thiserror::Error;

use crate::models::{AnimalRecord, Caravan, HealthRecord};

/// Validation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("animal name is required")]
    MissingName,

    #[error("caravan number is required")]
    MissingCaravan,

    #[error("an animal must be selected")]
    MissingAnimal,

    #[error("record date is required")]
    MissingDate,
}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validate an animal before create/update.
pub fn validate_animal(animal: &AnimalRecord) -> ValidationResult<()> {
    if animal.name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    // Tag 0 is what an empty numeric input turns into.
    match animal.caravan {
        None | Some(Caravan::Number(0)) => Err(ValidationError::MissingCaravan),
        Some(_) => Ok(()),
    }
}

/// Validate a health record before create/update.
pub fn validate_health_record(record: &HealthRecord) -> ValidationResult<()> {
    if record.animal_id.trim().is_empty() {
        return Err(ValidationError::MissingAnimal);
    }
    if record.date.is_none() {
        return Err(ValidationError::MissingDate);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_valid_animal() {
        let animal = AnimalRecord::new("Lola".into(), 12);
        assert_eq!(validate_animal(&animal), Ok(()));
    }

    #[test]
    fn test_animal_requires_name() {
        let animal = AnimalRecord::new("   ".into(), 12);
        assert_eq!(validate_animal(&animal), Err(ValidationError::MissingName));
    }

    #[test]
    fn test_animal_requires_caravan() {
        let mut animal = AnimalRecord::new("Lola".into(), 0);
        assert_eq!(validate_animal(&animal), Err(ValidationError::MissingCaravan));

        animal.caravan = None;
        assert_eq!(validate_animal(&animal), Err(ValidationError::MissingCaravan));

        animal.caravan = Some(Caravan::Tag("A-12".into()));
        assert_eq!(validate_animal(&animal), Ok(()));
    }

    #[test]
    fn test_health_record_requirements() {
        let date = Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap();
        let mut record = HealthRecord::new("7".into(), date);
        assert_eq!(validate_health_record(&record), Ok(()));

        record.date = None;
        assert_eq!(validate_health_record(&record), Err(ValidationError::MissingDate));

        record.animal_id = String::new();
        assert_eq!(validate_health_record(&record), Err(ValidationError::MissingAnimal));
    }
}
