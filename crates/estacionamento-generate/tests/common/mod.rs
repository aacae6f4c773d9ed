#![allow(dead_code)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use estacionamento_generate::{SeedOptions, seed_reference_data};
use estacionamento_store::{SqliteConnection, connect, init_schema, load_script};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../fixtures/sql")
        .join(name)
}

/// In-memory store with the schema and the geography fixtures loaded.
pub async fn reference_store() -> Result<SqliteConnection> {
    let mut conn = connect("sqlite::memory:")
        .await
        .context("opening in-memory sqlite")?;
    init_schema(&mut conn).await?;
    load_script(&mut conn, &fixture("estado.sql")).await?;
    load_script(&mut conn, &fixture("cidades.sql")).await?;
    Ok(conn)
}

pub async fn seeded_store(seed: u64, options: &SeedOptions) -> Result<SqliteConnection> {
    let mut conn = reference_store().await?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    seed_reference_data(&mut conn, &mut rng, options).await?;
    Ok(conn)
}

pub fn small_seed() -> SeedOptions {
    SeedOptions {
        vehicles: 200,
        lots: 8,
        ..SeedOptions::default()
    }
}

pub fn temp_path(label: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("estacionamento_{label}_{}.sql", uuid::Uuid::new_v4()));
    path
}
