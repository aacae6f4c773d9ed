use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use estacionamento_generate::model::default_fact_start;
use estacionamento_generate::{FactOptions, SeedOptions};
use estacionamento_store::DEFAULT_DATABASE_URL;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Resolved configuration of a run.
///
/// Every field has a default, so a settings file only lists what it changes.
/// `fact_start` is a quoted string such as `"2020-01-01T00:00:00"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub database_url: String,
    pub estado_script: PathBuf,
    pub cidades_script: PathBuf,
    pub facts_script: PathBuf,
    pub seed: Option<u64>,
    pub vehicles: u64,
    pub lots: u64,
    pub max_plate_attempts: u32,
    pub fact_count: u64,
    pub batch_size: usize,
    pub fact_start: NaiveDateTime,
}

impl Default for Settings {
    fn default() -> Self {
        let seed = SeedOptions::default();
        let facts = FactOptions::default();
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            estado_script: PathBuf::from("estado.sql"),
            cidades_script: PathBuf::from("cidades.sql"),
            facts_script: facts.out_path,
            seed: None,
            vehicles: seed.vehicles,
            lots: seed.lots,
            max_plate_attempts: seed.max_plate_attempts,
            fact_count: facts.count,
            batch_size: facts.batch_size,
            fact_start: default_fact_start(),
        }
    }
}

impl Settings {
    pub fn seed_options(&self) -> SeedOptions {
        SeedOptions {
            vehicles: self.vehicles,
            lots: self.lots,
            max_plate_attempts: self.max_plate_attempts,
        }
    }

    pub fn fact_options(&self) -> FactOptions {
        FactOptions {
            count: self.fact_count,
            batch_size: self.batch_size,
            start: self.fact_start,
            end: None,
            out_path: self.facts_script.clone(),
        }
    }
}

/// Defaults, overlaid with the TOML file at `path` when given.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, SettingsError> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: Settings = toml::from_str(&content)?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            database_url = "sqlite://teste.db"
            vehicles = 500
            fact_start = "2022-05-01T08:30:00"
            "#,
        )
        .expect("parse settings");

        assert_eq!(settings.database_url, "sqlite://teste.db");
        assert_eq!(settings.vehicles, 500);
        assert_eq!(settings.lots, 50);
        assert_eq!(settings.fact_count, 1_000);
        assert_eq!(settings.fact_start.to_string(), "2022-05-01 08:30:00");
        assert_eq!(settings.seed_options().vehicles, 500);
        assert_eq!(settings.fact_options().out_path, PathBuf::from("dados_falsos.sql"));
    }

    #[test]
    fn missing_file_is_reported() {
        let path = std::env::temp_dir()
            .join(format!("estacionamento_{}.toml", uuid::Uuid::new_v4()));
        assert!(matches!(
            load_settings(Some(&path)),
            Err(SettingsError::Io { .. })
        ));
        assert_eq!(load_settings(None).expect("defaults").lots, 50);
    }

    #[test]
    fn rejects_unknown_types() {
        assert!(toml::from_str::<Settings>("vehicles = \"many\"").is_err());
    }
}
