//! Listing filters.
//!
//! Each constraint is an independent predicate over a [`Ship`]; a ship is
//! kept when every present constraint holds. Bounds are inclusive.

use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use crate::domain::{Ship, ShipType};

/// Optional constraints applied to a ship listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ShipCriteria {
    /// Case-sensitive substring of the name.
    pub name: Option<String>,
    /// Case-sensitive substring of the planet.
    pub planet: Option<String>,
    /// Exact category.
    pub ship_type: Option<ShipType>,
    /// Produced at or after this instant (epoch milliseconds).
    pub after: Option<i64>,
    /// Produced at or before this instant (epoch milliseconds).
    pub before: Option<i64>,
    /// Exact used flag.
    pub is_used: Option<bool>,
    /// Minimum speed.
    pub min_speed: Option<f64>,
    /// Maximum speed.
    pub max_speed: Option<f64>,
    /// Minimum crew size.
    pub min_crew_size: Option<i32>,
    /// Maximum crew size.
    pub max_crew_size: Option<i32>,
    /// Minimum rating.
    pub min_rating: Option<f64>,
    /// Maximum rating.
    pub max_rating: Option<f64>,
}

impl ShipCriteria {
    /// Whether the ship satisfies every present constraint.
    pub fn matches(&self, ship: &Ship) -> bool {
        let produced = ship.prod_date.and_utc().timestamp_millis();
        contains(&ship.name, self.name.as_deref())
            && contains(&ship.planet, self.planet.as_deref())
            && equals(ship.ship_type, self.ship_type)
            && at_least(produced, self.after)
            && at_most(produced, self.before)
            && equals(ship.is_used, self.is_used)
            && at_least(ship.speed, self.min_speed)
            && at_most(ship.speed, self.max_speed)
            && at_least(ship.crew_size, self.min_crew_size)
            && at_most(ship.crew_size, self.max_crew_size)
            && at_least(ship.rating, self.min_rating)
            && at_most(ship.rating, self.max_rating)
    }
}

/// Keep the ships matching `criteria`, preserving input order.
pub fn filter_ships(ships: Vec<Ship>, criteria: &ShipCriteria) -> Vec<Ship> {
    ships
        .into_iter()
        .filter(|ship| criteria.matches(ship))
        .collect()
}

fn contains(value: &str, needle: Option<&str>) -> bool {
    needle.is_none_or(|needle| value.contains(needle))
}

fn equals<T: PartialEq>(value: T, expected: Option<T>) -> bool {
    expected.is_none_or(|expected| value == expected)
}

fn at_least<T: PartialOrd>(value: T, min: Option<T>) -> bool {
    min.is_none_or(|min| value >= min)
}

fn at_most<T: PartialOrd>(value: T, max: Option<T>) -> bool {
    max.is_none_or(|max| value <= max)
}
