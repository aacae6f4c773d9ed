use std::time::Instant;

use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};
use sqlx::{Connection, SqliteConnection};
use tracing::{debug, error, info, warn};

use estacionamento_core::catalog::{COLORS, MANUFACTURERS, MODEL_PREFIXES, TICKET_TYPES};
use estacionamento_core::plate::random_letter;
use estacionamento_core::{NewLot, NewModel, NewTicketType, NewVehicle, Plate};
use estacionamento_store::VehicleInsert;
use estacionamento_store::queries::{
    insert_color, insert_lot, insert_manufacturer, insert_model, insert_ticket_type,
    insert_vehicle, list_ids, manufacturer_id_by_name,
};

use crate::errors::GenerationError;
use crate::model::{SeedOptions, SeedReport};

/// Ticket type prices are drawn from `[PRICE_MIN, PRICE_MAX)`.
pub const PRICE_MIN: f64 = 20.0;
pub const PRICE_MAX: f64 = 300.0;

/// Vehicles inserted between progress logs.
const PROGRESS_EVERY: u64 = 1_000;

/// Vehicle insert counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VehicleBatch {
    pub inserted: u64,
    pub plate_retries: u64,
}

/// Fill the reference tables and the random vehicles and lots.
///
/// Runs in a single transaction: either every step lands or none does.
/// Expects `cidade` to be loaded already.
pub async fn seed_reference_data(
    conn: &mut SqliteConnection,
    rng: &mut dyn RngCore,
    options: &SeedOptions,
) -> Result<SeedReport, GenerationError> {
    options.validate()?;
    let start = Instant::now();
    info!(
        event = "seed_started",
        vehicles = options.vehicles,
        lots = options.lots
    );

    let mut tx = conn.begin().await?;
    match seed_steps(&mut *tx, rng, options).await {
        Ok(mut report) => {
            tx.commit().await?;
            report.duration_ms = start.elapsed().as_millis() as u64;
            info!(
                event = "seed_committed",
                models = report.models,
                vehicles = report.vehicles,
                plate_retries = report.plate_retries,
                lots = report.lots,
                duration_ms = report.duration_ms
            );
            Ok(report)
        }
        Err(err) => {
            warn!(event = "seed_rolled_back", error = %err);
            if let Err(rollback_err) = tx.rollback().await {
                error!(event = "seed_rollback_failed", error = %rollback_err);
            }
            Err(err)
        }
    }
}

async fn seed_steps(
    conn: &mut SqliteConnection,
    rng: &mut dyn RngCore,
    options: &SeedOptions,
) -> Result<SeedReport, GenerationError> {
    let mut report = SeedReport {
        colors: insert_colors(conn, COLORS).await?,
        ticket_types: insert_ticket_types(conn, rng, TICKET_TYPES).await?,
        manufacturers: insert_manufacturers(conn, MANUFACTURERS).await?,
        ..SeedReport::default()
    };
    report.models = insert_models(conn, rng, MANUFACTURERS).await?;

    let color_ids = list_ids(conn, "cor").await?;
    let model_ids = list_ids(conn, "modelo").await?;
    let city_ids = list_ids(conn, "cidade").await?;
    debug!(
        event = "parent_ids_loaded",
        colors = color_ids.len(),
        models = model_ids.len(),
        cities = city_ids.len()
    );

    let vehicles = insert_vehicles(
        conn,
        rng,
        options.vehicles,
        &model_ids,
        &color_ids,
        options.max_plate_attempts,
    )
    .await?;
    report.vehicles = vehicles.inserted;
    report.plate_retries = vehicles.plate_retries;

    report.lots = insert_lots(conn, rng, options.lots, &city_ids).await?;
    Ok(report)
}

pub async fn insert_colors(
    conn: &mut SqliteConnection,
    names: &[&str],
) -> Result<u64, GenerationError> {
    for name in names {
        insert_color(conn, name).await?;
    }
    info!(event = "colors_inserted", rows = names.len());
    Ok(names.len() as u64)
}

/// Insert one ticket type per label with a uniform price in `[20, 300)`.
pub async fn insert_ticket_types(
    conn: &mut SqliteConnection,
    rng: &mut dyn RngCore,
    labels: &[&str],
) -> Result<u64, GenerationError> {
    for label in labels {
        let ticket_type = NewTicketType {
            label: (*label).to_string(),
            price: rng.random_range(PRICE_MIN..PRICE_MAX),
        };
        insert_ticket_type(conn, &ticket_type).await?;
    }
    info!(event = "ticket_types_inserted", rows = labels.len());
    Ok(labels.len() as u64)
}

pub async fn insert_manufacturers(
    conn: &mut SqliteConnection,
    names: &[&str],
) -> Result<u64, GenerationError> {
    for name in names {
        insert_manufacturer(conn, name).await?;
    }
    info!(event = "manufacturers_inserted", rows = names.len());
    Ok(names.len() as u64)
}

/// Insert 2 to 5 models for each named manufacturer.
///
/// The manufacturer must already exist; its ID is looked up by name.
pub async fn insert_models(
    conn: &mut SqliteConnection,
    rng: &mut dyn RngCore,
    manufacturers: &[&str],
) -> Result<u64, GenerationError> {
    let mut inserted = 0;
    for manufacturer in manufacturers {
        let manufacturer_id = manufacturer_id_by_name(conn, manufacturer)
            .await?
            .ok_or(GenerationError::NoParentRows("fabricante"))?;

        let models = rng.random_range(2..=5);
        for _ in 0..models {
            let model = NewModel {
                manufacturer_id,
                name: random_model_name(rng),
            };
            insert_model(conn, &model).await?;
            inserted += 1;
        }
    }
    info!(event = "models_inserted", rows = inserted);
    Ok(inserted)
}

/// `<prefix> <100..=999>`.
pub fn random_model_name(rng: &mut dyn RngCore) -> String {
    let prefix = MODEL_PREFIXES.choose(rng).copied().unwrap_or("Sport");
    let number = rng.random_range(100..=999);
    format!("{prefix} {number}")
}

/// Insert `count` vehicles with random model, color and plate.
///
/// A plate collision redraws the plate for the same slot, up to
/// `max_plate_attempts` draws; collisions never count towards `count`.
pub async fn insert_vehicles(
    conn: &mut SqliteConnection,
    rng: &mut dyn RngCore,
    count: u64,
    model_ids: &[i64],
    color_ids: &[i64],
    max_plate_attempts: u32,
) -> Result<VehicleBatch, GenerationError> {
    let mut batch = VehicleBatch::default();

    for slot in 0..count {
        let mut plate = Plate::random(rng);
        let color_id = pick_id(color_ids, "cor", rng)?;
        let model_id = pick_id(model_ids, "modelo", rng)?;

        let mut attempts = 1;
        loop {
            let vehicle = NewVehicle {
                plate,
                model_id,
                color_id,
            };
            match insert_vehicle(conn, &vehicle).await? {
                VehicleInsert::Inserted(_) => break,
                VehicleInsert::DuplicatePlate => {
                    batch.plate_retries += 1;
                    debug!(event = "plate_collision", slot, plate = %vehicle.plate, attempts);
                    if attempts >= max_plate_attempts {
                        return Err(GenerationError::PlateRetriesExhausted { slot, attempts });
                    }
                    attempts += 1;
                    plate = Plate::random(rng);
                }
            }
        }

        batch.inserted += 1;
        if batch.inserted % PROGRESS_EVERY == 0 {
            debug!(event = "vehicles_progress", inserted = batch.inserted, total = count);
        }
    }

    info!(
        event = "vehicles_inserted",
        rows = batch.inserted,
        plate_retries = batch.plate_retries
    );
    Ok(batch)
}

/// Insert `count` lots in random cities, labelled `Bairro <A-Z><1..=100>`.
pub async fn insert_lots(
    conn: &mut SqliteConnection,
    rng: &mut dyn RngCore,
    count: u64,
    city_ids: &[i64],
) -> Result<u64, GenerationError> {
    for _ in 0..count {
        let city_id = pick_id(city_ids, "cidade", rng)?;
        let letter = random_letter(rng);
        let number = rng.random_range(1..=100);
        let lot = NewLot {
            city_id,
            neighborhood: NewLot::neighborhood_label(letter, number),
        };
        insert_lot(conn, &lot).await?;
    }
    info!(event = "lots_inserted", rows = count);
    Ok(count)
}

pub(crate) fn pick_id(
    ids: &[i64],
    table: &'static str,
    rng: &mut dyn RngCore,
) -> Result<i64, GenerationError> {
    ids.choose(rng)
        .copied()
        .ok_or(GenerationError::NoParentRows(table))
}
