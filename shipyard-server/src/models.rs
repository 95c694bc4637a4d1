//! Database models for Shipyard server.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use shipyard_core::{NewShip, Ship, ShipType, ShipyardError};

use crate::schema::ship;

#[derive(Debug, Clone, Queryable, Identifiable, Selectable, AsChangeset)]
#[diesel(table_name = ship)]
/// Ship database record.
pub struct ShipRow {
    /// Ship identifier.
    pub id: i64,
    /// Ship name.
    pub name: String,
    /// Home planet.
    pub planet: String,
    /// Category label.
    pub ship_type: String,
    /// Production timestamp (UTC).
    pub prod_date: NaiveDateTime,
    /// Used flag.
    pub is_used: bool,
    /// Speed.
    pub speed: f64,
    /// Crew size.
    pub crew_size: i32,
    /// Derived rating.
    pub rating: f64,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = ship)]
/// Insertable ship record.
pub struct NewShipRow {
    /// Ship name.
    pub name: String,
    /// Home planet.
    pub planet: String,
    /// Category label.
    pub ship_type: String,
    /// Production timestamp (UTC).
    pub prod_date: NaiveDateTime,
    /// Used flag.
    pub is_used: bool,
    /// Speed.
    pub speed: f64,
    /// Crew size.
    pub crew_size: i32,
    /// Derived rating.
    pub rating: f64,
}

impl TryFrom<ShipRow> for Ship {
    type Error = ShipyardError;

    fn try_from(row: ShipRow) -> Result<Self, Self::Error> {
        let ship_type = row.ship_type.parse::<ShipType>().map_err(|_| {
            ShipyardError::Storage(format!(
                "ship {} has unknown type {:?}",
                row.id, row.ship_type
            ))
        })?;
        Ok(Ship {
            id: row.id,
            name: row.name,
            planet: row.planet,
            ship_type,
            prod_date: row.prod_date,
            is_used: row.is_used,
            speed: row.speed,
            crew_size: row.crew_size,
            rating: row.rating,
        })
    }
}

impl From<&Ship> for ShipRow {
    fn from(ship: &Ship) -> Self {
        Self {
            id: ship.id,
            name: ship.name.clone(),
            planet: ship.planet.clone(),
            ship_type: ship.ship_type.as_str().to_string(),
            prod_date: ship.prod_date,
            is_used: ship.is_used,
            speed: ship.speed,
            crew_size: ship.crew_size,
            rating: ship.rating,
        }
    }
}

impl From<NewShip> for NewShipRow {
    fn from(ship: NewShip) -> Self {
        Self {
            name: ship.name,
            planet: ship.planet,
            ship_type: ship.ship_type.as_str().to_string(),
            prod_date: ship.prod_date,
            is_used: ship.is_used,
            speed: ship.speed,
            crew_size: ship.crew_size,
            rating: ship.rating,
        }
    }
}
