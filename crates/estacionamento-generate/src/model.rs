use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::GenerationError;

/// Options for the seed generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedOptions {
    /// Vehicles to insert.
    pub vehicles: u64,
    /// Parking lots to insert.
    pub lots: u64,
    /// Plate draws allowed per vehicle before giving up.
    pub max_plate_attempts: u32,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            vehicles: 10_000,
            lots: 50,
            max_plate_attempts: 64,
        }
    }
}

impl SeedOptions {
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.max_plate_attempts == 0 {
            return Err(GenerationError::InvalidOptions(
                "max_plate_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Options for the fact script generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactOptions {
    /// Ticket facts to generate.
    pub count: u64,
    /// Tuples per INSERT statement.
    pub batch_size: usize,
    /// Earliest ticket timestamp.
    pub start: NaiveDateTime,
    /// Upper bound of the timestamp range; the current local time when unset.
    pub end: Option<NaiveDateTime>,
    /// Where [`crate::generate_fact_script`] writes the script.
    pub out_path: PathBuf,
}

impl Default for FactOptions {
    fn default() -> Self {
        Self {
            count: 1_000,
            batch_size: 1_000,
            start: default_fact_start(),
            end: None,
            out_path: PathBuf::from("dados_falsos.sql"),
        }
    }
}

impl FactOptions {
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.batch_size == 0 {
            return Err(GenerationError::InvalidOptions(
                "batch_size must be at least 1".to_string(),
            ));
        }
        if let Some(end) = self.end
            && end < self.start
        {
            return Err(GenerationError::InvalidOptions(format!(
                "fact range ends ({end}) before it starts ({})",
                self.start
            )));
        }
        Ok(())
    }
}

/// 2020-01-01 00:00:00.
pub fn default_fact_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2020, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Summary of a seed run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedReport {
    pub colors: u64,
    pub ticket_types: u64,
    pub manufacturers: u64,
    pub models: u64,
    pub vehicles: u64,
    pub plate_retries: u64,
    pub lots: u64,
    pub duration_ms: u64,
}

/// Summary of a fact script generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FactReport {
    pub facts: u64,
    pub batches: u64,
    pub bytes_written: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_path: Option<String>,
    pub duration_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_batch_job() {
        let seed = SeedOptions::default();
        assert_eq!(seed.vehicles, 10_000);
        assert_eq!(seed.lots, 50);

        let facts = FactOptions::default();
        assert_eq!(facts.count, 1_000);
        assert_eq!(facts.batch_size, 1_000);
        assert_eq!(facts.start.to_string(), "2020-01-01 00:00:00");
        assert_eq!(facts.out_path, PathBuf::from("dados_falsos.sql"));
    }

    #[test]
    fn rejects_zero_batch_and_inverted_range() {
        let mut options = FactOptions::default();
        options.batch_size = 0;
        assert!(matches!(
            options.validate(),
            Err(GenerationError::InvalidOptions(_))
        ));

        let mut options = FactOptions::default();
        options.end = NaiveDate::from_ymd_opt(2019, 12, 31).and_then(|d| d.and_hms_opt(0, 0, 0));
        assert!(options.validate().is_err());
    }

    #[test]
    fn rejects_zero_plate_attempts() {
        let options = SeedOptions {
            max_plate_attempts: 0,
            ..SeedOptions::default()
        };
        assert!(options.validate().is_err());
    }
}
