//! Synthetic data generation for the parking schema.
//!
//! `seed` fills the reference tables inside one transaction; `facts` samples
//! the seeded IDs into a batched ticket script on disk. Every generator takes
//! the random source explicitly so a seeded generator reproduces a run.

pub mod errors;
pub mod facts;
pub mod model;
pub mod output;
pub mod seed;

pub use errors::GenerationError;
pub use facts::{generate_fact_script, write_fact_script};
pub use model::{FactOptions, FactReport, SeedOptions, SeedReport};
pub use seed::seed_reference_data;
