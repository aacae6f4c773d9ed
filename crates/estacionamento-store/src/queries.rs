use sqlx::SqliteConnection;

use estacionamento_core::{NewLot, NewModel, NewTicketType, NewVehicle, Result};

use crate::utils::db_error;

/// Outcome of a vehicle insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleInsert {
    Inserted(i64),
    /// The plate already exists; nothing was written.
    DuplicatePlate,
}

/// All primary keys of `table`, ascending.
///
/// `table` must be a trusted identifier; it is interpolated into the query.
pub async fn list_ids(conn: &mut SqliteConnection, table: &str) -> Result<Vec<i64>> {
    sqlx::query_scalar::<_, i64>(&format!("select id from {table} order by id"))
        .fetch_all(&mut *conn)
        .await
        .map_err(db_error)
}

pub async fn count_rows(conn: &mut SqliteConnection, table: &str) -> Result<i64> {
    sqlx::query_scalar::<_, i64>(&format!("select count(*) from {table}"))
        .fetch_one(&mut *conn)
        .await
        .map_err(db_error)
}

pub async fn insert_color(conn: &mut SqliteConnection, name: &str) -> Result<i64> {
    let result = sqlx::query("insert into cor (cor) values (?)")
        .bind(name)
        .execute(&mut *conn)
        .await
        .map_err(db_error)?;
    Ok(result.last_insert_rowid())
}

pub async fn insert_ticket_type(
    conn: &mut SqliteConnection,
    ticket_type: &NewTicketType,
) -> Result<i64> {
    let result = sqlx::query("insert into tipo (tipo, valor) values (?, ?)")
        .bind(&ticket_type.label)
        .bind(ticket_type.price)
        .execute(&mut *conn)
        .await
        .map_err(db_error)?;
    Ok(result.last_insert_rowid())
}

pub async fn insert_manufacturer(conn: &mut SqliteConnection, name: &str) -> Result<i64> {
    let result = sqlx::query("insert into fabricante (nome) values (?)")
        .bind(name)
        .execute(&mut *conn)
        .await
        .map_err(db_error)?;
    Ok(result.last_insert_rowid())
}

pub async fn manufacturer_id_by_name(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<Option<i64>> {
    sqlx::query_scalar::<_, i64>("select id from fabricante where nome = ? order by id limit 1")
        .bind(name)
        .fetch_optional(&mut *conn)
        .await
        .map_err(db_error)
}

pub async fn insert_model(conn: &mut SqliteConnection, model: &NewModel) -> Result<i64> {
    let result = sqlx::query("insert into modelo (id_fabricante, modelo) values (?, ?)")
        .bind(model.manufacturer_id)
        .bind(&model.name)
        .execute(&mut *conn)
        .await
        .map_err(db_error)?;
    Ok(result.last_insert_rowid())
}

/// Insert a vehicle, reporting a plate collision instead of failing.
pub async fn insert_vehicle(
    conn: &mut SqliteConnection,
    vehicle: &NewVehicle,
) -> Result<VehicleInsert> {
    let result = sqlx::query("insert into veiculo (placa, id_modelo, id_cor) values (?, ?, ?)")
        .bind(vehicle.plate.as_str())
        .bind(vehicle.model_id)
        .bind(vehicle.color_id)
        .execute(&mut *conn)
        .await;

    match result {
        Ok(done) => Ok(VehicleInsert::Inserted(done.last_insert_rowid())),
        Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
            Ok(VehicleInsert::DuplicatePlate)
        }
        Err(err) => Err(db_error(err)),
    }
}

pub async fn insert_lot(conn: &mut SqliteConnection, lot: &NewLot) -> Result<i64> {
    let result = sqlx::query("insert into praca (id_cidade, bairro) values (?, ?)")
        .bind(lot.city_id)
        .bind(&lot.neighborhood)
        .execute(&mut *conn)
        .await
        .map_err(db_error)?;
    Ok(result.last_insert_rowid())
}

/// Current base price of a ticket type.
pub async fn ticket_type_price(
    conn: &mut SqliteConnection,
    type_id: i64,
) -> Result<Option<f64>> {
    sqlx::query_scalar::<_, f64>("select valor from tipo where id = ?")
        .bind(type_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(db_error)
}

/// All vehicle plates, in insertion order.
pub async fn list_plates(conn: &mut SqliteConnection) -> Result<Vec<String>> {
    sqlx::query_scalar::<_, String>("select placa from veiculo order by id")
        .fetch_all(&mut *conn)
        .await
        .map_err(db_error)
}
