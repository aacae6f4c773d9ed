use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::TIMESTAMP_FORMAT;
use crate::plate::Plate;

/// Row for `modelo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewModel {
    pub manufacturer_id: i64,
    pub name: String,
}

/// Row for `tipo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTicketType {
    pub label: String,
    pub price: f64,
}

/// Row for `veiculo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewVehicle {
    pub plate: Plate,
    pub model_id: i64,
    pub color_id: i64,
}

/// Row for `praca`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLot {
    pub city_id: i64,
    pub neighborhood: String,
}

impl NewLot {
    /// Neighborhood label in the `Bairro <letter><number>` shape.
    pub fn neighborhood_label(letter: char, number: u32) -> String {
        format!("Bairro {letter}{number}")
    }
}

/// One ticket destined for the fact script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketFact {
    pub vehicle_id: i64,
    pub type_id: i64,
    pub lot_id: i64,
    pub price: f64,
    pub issued_at: NaiveDateTime,
}

impl TicketFact {
    /// Render the fact as a SQL value tuple.
    ///
    /// The price always carries two decimals with a `.` separator.
    pub fn to_sql_tuple(&self) -> String {
        format!(
            "({}, {}, {}, {:.2}, '{}')",
            self.vehicle_id,
            self.type_id,
            self.lot_id,
            self.price,
            self.issued_at.format(TIMESTAMP_FORMAT)
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn fact(price: f64) -> TicketFact {
        let issued_at = NaiveDate::from_ymd_opt(2021, 3, 4)
            .and_then(|date| date.and_hms_opt(5, 6, 7))
            .expect("valid timestamp");
        TicketFact {
            vehicle_id: 12,
            type_id: 3,
            lot_id: 45,
            price,
            issued_at,
        }
    }

    #[test]
    fn tuple_layout() {
        assert_eq!(
            fact(123.456).to_sql_tuple(),
            "(12, 3, 45, 123.46, '2021-03-04 05:06:07')"
        );
    }

    #[test]
    fn price_always_has_two_decimals() {
        assert!(fact(20.0).to_sql_tuple().contains(", 20.00, "));
        assert!(fact(299.999).to_sql_tuple().contains(", 300.00, "));
        assert!(fact(55.5).to_sql_tuple().contains(", 55.50, "));
    }

    #[test]
    fn neighborhood_label_shape() {
        assert_eq!(NewLot::neighborhood_label('K', 100), "Bairro K100");
        assert_eq!(NewLot::neighborhood_label('A', 1), "Bairro A1");
    }
}
