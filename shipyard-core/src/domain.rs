//! Domain entities for Shipyard.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ShipyardError;

/// Closed set of ship categories.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum ShipType {
    /// Cargo and passenger transport.
    Transport,
    /// Armed vessel.
    Military,
    /// Trading vessel.
    Merchant,
}

impl ShipType {
    /// Every member of the category set.
    pub const ALL: [ShipType; 3] = [ShipType::Transport, ShipType::Military, ShipType::Merchant];

    /// Stored and serialized label.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShipType::Transport => "TRANSPORT",
            ShipType::Military => "MILITARY",
            ShipType::Merchant => "MERCHANT",
        }
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShipType {
    type Err = ShipyardError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ShipType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or(ShipyardError::InvalidField("shipType"))
    }
}

/// Sort keys accepted by ship listings.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ShipOrder {
    /// Order by identifier.
    Id,
    /// Order by speed.
    Speed,
    /// Order by production date.
    Date,
    /// Order by rating.
    Rating,
}

/// A persisted ship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Ship {
    /// Storage-assigned identifier.
    pub id: i64,
    /// Ship name.
    pub name: String,
    /// Home planet.
    pub planet: String,
    /// Ship category.
    pub ship_type: ShipType,
    /// Production timestamp (epoch milliseconds on the wire).
    #[serde(with = "chrono::naive::serde::ts_milliseconds")]
    #[schema(value_type = i64)]
    pub prod_date: NaiveDateTime,
    /// Whether the ship has had previous owners.
    pub is_used: bool,
    /// Speed, in [0.01, 0.99].
    pub speed: f64,
    /// Crew size, in [1, 9999].
    pub crew_size: i32,
    /// Derived rating.
    pub rating: f64,
}

/// A validated ship awaiting an identifier from storage.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShip {
    /// Ship name.
    pub name: String,
    /// Home planet.
    pub planet: String,
    /// Ship category.
    pub ship_type: ShipType,
    /// Production timestamp.
    pub prod_date: NaiveDateTime,
    /// Whether the ship is used.
    pub is_used: bool,
    /// Speed.
    pub speed: f64,
    /// Crew size.
    pub crew_size: i32,
    /// Derived rating.
    pub rating: f64,
}

impl NewShip {
    /// Attach a storage-assigned identifier.
    pub fn with_id(self, id: i64) -> Ship {
        Ship {
            id,
            name: self.name,
            planet: self.planet,
            ship_type: self.ship_type,
            prod_date: self.prod_date,
            is_used: self.is_used,
            speed: self.speed,
            crew_size: self.crew_size,
            rating: self.rating,
        }
    }
}

/// Request body for creating a ship.
///
/// Every field is optional on the wire so that a missing field is reported
/// by name. Caller-supplied `id` and `rating` are not part of the shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShipDraft {
    /// Ship name.
    pub name: Option<String>,
    /// Home planet.
    pub planet: Option<String>,
    /// Ship category.
    pub ship_type: Option<ShipType>,
    /// Production timestamp (epoch milliseconds).
    #[serde(
        default,
        with = "chrono::naive::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<i64>)]
    pub prod_date: Option<NaiveDateTime>,
    /// Whether the ship is used; defaults to `false`.
    pub is_used: Option<bool>,
    /// Speed.
    pub speed: Option<f64>,
    /// Crew size.
    pub crew_size: Option<i32>,
}

/// Request body for a partial update. Absent fields stay unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShipPatch {
    /// New name.
    pub name: Option<String>,
    /// New planet.
    pub planet: Option<String>,
    /// New category.
    pub ship_type: Option<ShipType>,
    /// New production timestamp (epoch milliseconds).
    #[serde(
        default,
        with = "chrono::naive::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<i64>)]
    pub prod_date: Option<NaiveDateTime>,
    /// New used flag.
    pub is_used: Option<bool>,
    /// New speed.
    pub speed: Option<f64>,
    /// New crew size.
    pub crew_size: Option<i32>,
}

impl ShipPatch {
    /// Whether the patch touches speed, used flag or production date.
    pub fn affects_rating(&self) -> bool {
        self.prod_date.is_some() || self.is_used.is_some() || self.speed.is_some()
    }
}
