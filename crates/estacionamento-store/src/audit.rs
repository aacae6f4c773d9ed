use std::collections::BTreeMap;

use serde::Serialize;
use sqlx::SqliteConnection;
use tracing::{info, warn};

use estacionamento_core::plate::is_valid_plate;
use estacionamento_core::{Result, TABLES};

use crate::queries::{count_rows, list_plates};
use crate::schema::table_exists;
use crate::utils::db_error;

/// Foreign-key checks run by [`audit_store`]: label and counting query.
const ORPHAN_CHECKS: &[(&str, &str)] = &[
    (
        "modelo.id_fabricante",
        "select count(*) from modelo m left join fabricante f on f.id = m.id_fabricante where f.id is null",
    ),
    (
        "veiculo.id_modelo",
        "select count(*) from veiculo v left join modelo m on m.id = v.id_modelo where m.id is null",
    ),
    (
        "veiculo.id_cor",
        "select count(*) from veiculo v left join cor c on c.id = v.id_cor where c.id is null",
    ),
    (
        "ticket.id_veiculo",
        "select count(*) from ticket t left join veiculo v on v.id = t.id_veiculo where v.id is null",
    ),
    (
        "ticket.id_tipo",
        "select count(*) from ticket t left join tipo p on p.id = t.id_tipo where p.id is null",
    ),
    (
        "ticket.id_praca",
        "select count(*) from ticket t left join praca p on p.id = t.id_praca where p.id is null",
    ),
];

const LOT_CITY_CHECK: &str =
    "select count(*) from praca p left join cidade c on c.id = p.id_cidade where c.id is null";

/// Consistency snapshot of a seeded store.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StoreAudit {
    pub row_counts: BTreeMap<String, i64>,
    pub duplicate_plates: i64,
    pub invalid_plates: Vec<String>,
    pub orphans: BTreeMap<String, i64>,
}

impl StoreAudit {
    pub fn is_consistent(&self) -> bool {
        self.duplicate_plates == 0
            && self.invalid_plates.is_empty()
            && self.orphans.values().all(|count| *count == 0)
    }

    pub fn rows(&self, table: &str) -> i64 {
        self.row_counts.get(table).copied().unwrap_or(0)
    }
}

/// Count rows, plate defects and dangling references across the schema.
///
/// Expects the schema to exist. Without a `cidade` table every lot counts
/// as an orphan.
pub async fn audit_store(conn: &mut SqliteConnection) -> Result<StoreAudit> {
    let mut audit = StoreAudit::default();

    for table in TABLES {
        let rows = count_rows(conn, table).await?;
        audit.row_counts.insert((*table).to_string(), rows);
    }

    audit.duplicate_plates = sqlx::query_scalar::<_, i64>(
        "select count(*) from (select placa from veiculo group by placa having count(*) > 1)",
    )
    .fetch_one(&mut *conn)
    .await
    .map_err(db_error)?;

    audit.invalid_plates = list_plates(conn)
        .await?
        .into_iter()
        .filter(|plate| !is_valid_plate(plate))
        .collect();

    for (label, sql) in ORPHAN_CHECKS {
        let count = sqlx::query_scalar::<_, i64>(*sql)
            .fetch_one(&mut *conn)
            .await
            .map_err(db_error)?;
        audit.orphans.insert((*label).to_string(), count);
    }

    let lot_orphans = if table_exists(conn, "cidade").await? {
        sqlx::query_scalar::<_, i64>(LOT_CITY_CHECK)
            .fetch_one(&mut *conn)
            .await
            .map_err(db_error)?
    } else {
        audit.rows("praca")
    };
    audit.orphans.insert("praca.id_cidade".to_string(), lot_orphans);

    if audit.is_consistent() {
        info!(
            event = "audit_passed",
            vehicles = audit.rows("veiculo"),
            tickets = audit.rows("ticket")
        );
    } else {
        warn!(
            event = "audit_failed",
            duplicate_plates = audit.duplicate_plates,
            invalid_plates = audit.invalid_plates.len(),
            "store has inconsistent rows"
        );
    }

    Ok(audit)
}
