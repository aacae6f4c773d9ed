use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::Instant;

use chrono::{Local, NaiveDateTime, TimeDelta};
use rand::{Rng, RngCore};
use sqlx::SqliteConnection;
use tracing::{debug, info};

use estacionamento_core::{Error as CoreError, TicketFact};
use estacionamento_store::queries::{list_ids, ticket_type_price};

use crate::errors::GenerationError;
use crate::model::{FactOptions, FactReport};
use crate::output::sql::{SqlBatchWriter, TICKET_INSERT_HEADER};
use crate::seed::pick_id;

/// Generate the ticket fact script at `options.out_path`.
///
/// The script is only written, never executed; replay it with
/// `estacionamento_store::load_script`.
pub async fn generate_fact_script(
    conn: &mut SqliteConnection,
    rng: &mut dyn RngCore,
    options: &FactOptions,
) -> Result<FactReport, GenerationError> {
    options.validate()?;
    let path = &options.out_path;
    let file = File::create(path).map_err(|source| CoreError::Io {
        path: path.clone(),
        source,
    })?;

    let mut report = write_fact_script(conn, rng, options, BufWriter::new(file)).await?;
    report.out_path = Some(path.display().to_string());
    info!(event = "fact_script_written", path = %path.display(), bytes = report.bytes_written);
    Ok(report)
}

/// Generate `options.count` ticket facts into `out` as batched INSERTs.
///
/// Vehicle, type and lot IDs are sampled from the rows present when the call
/// starts; each price is the chosen type's price at the time it is drawn.
pub async fn write_fact_script<W: Write>(
    conn: &mut SqliteConnection,
    rng: &mut dyn RngCore,
    options: &FactOptions,
    out: W,
) -> Result<FactReport, GenerationError> {
    options.validate()?;
    let start = Instant::now();

    let lot_ids = list_ids(conn, "praca").await?;
    let type_ids = list_ids(conn, "tipo").await?;
    let vehicle_ids = list_ids(conn, "veiculo").await?;

    let end = options
        .end
        .unwrap_or_else(|| Local::now().naive_local());
    let span_days = (end - options.start).num_days();

    info!(
        event = "facts_started",
        count = options.count,
        batch_size = options.batch_size,
        vehicles = vehicle_ids.len(),
        types = type_ids.len(),
        lots = lot_ids.len(),
        span_days
    );

    let mut writer = SqlBatchWriter::new(out);
    let capacity = options.batch_size.min(options.count as usize);
    let mut batch: Vec<String> = Vec::with_capacity(capacity);

    for index in 0..options.count {
        let vehicle_id = pick_id(&vehicle_ids, "veiculo", rng)?;
        let type_id = pick_id(&type_ids, "tipo", rng)?;
        let lot_id = pick_id(&lot_ids, "praca", rng)?;
        let price = ticket_type_price(conn, type_id)
            .await?
            .ok_or(GenerationError::NoParentRows("tipo"))?;

        let fact = TicketFact {
            vehicle_id,
            type_id,
            lot_id,
            price,
            issued_at: random_timestamp(rng, options.start, span_days),
        };
        batch.push(fact.to_sql_tuple());

        if batch.len() >= options.batch_size || index + 1 == options.count {
            writer.write_batch(TICKET_INSERT_HEADER, &batch)?;
            debug!(event = "fact_batch_written", rows = batch.len(), generated = index + 1);
            batch.clear();
        }
    }
    writer.flush()?;

    let report = FactReport {
        facts: options.count,
        batches: writer.batches(),
        bytes_written: writer.bytes_written(),
        out_path: None,
        duration_ms: start.elapsed().as_millis() as u64,
    };
    info!(
        event = "facts_finished",
        facts = report.facts,
        batches = report.batches,
        duration_ms = report.duration_ms
    );
    Ok(report)
}

/// `start` plus a uniform whole-day offset in `[0, span_days)` and a uniform
/// time of day. A non-positive span keeps the start day.
pub fn random_timestamp(
    rng: &mut dyn RngCore,
    start: NaiveDateTime,
    span_days: i64,
) -> NaiveDateTime {
    let days = if span_days > 0 {
        rng.random_range(0..span_days)
    } else {
        0
    };
    start
        + TimeDelta::days(days)
        + TimeDelta::hours(rng.random_range(0..24))
        + TimeDelta::minutes(rng.random_range(0..60))
        + TimeDelta::seconds(rng.random_range(0..60))
}
