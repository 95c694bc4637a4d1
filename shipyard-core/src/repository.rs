//! Storage provider abstraction.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::domain::{NewShip, Ship};
use crate::error::{Result, ShipyardError};

/// Persistent store of ships.
#[cfg_attr(test, mockall::automock)]
pub trait ShipRepository {
    /// Look up a ship by identifier.
    fn find_by_id(&self, id: i64) -> Result<Option<Ship>>;
    /// Return every stored ship, in an implementation-defined order.
    fn find_all(&self) -> Result<Vec<Ship>>;
    /// Store a new ship and return it with its assigned identifier.
    fn insert(&self, ship: NewShip) -> Result<Ship>;
    /// Overwrite a stored ship and return what was persisted.
    fn save(&self, ship: &Ship) -> Result<Ship>;
    /// Remove a ship if present; absent identifiers are ignored.
    fn delete_by_id(&self, id: i64) -> Result<()>;
}

#[derive(Debug, Default)]
struct Hold {
    last_id: i64,
    ships: BTreeMap<i64, Ship>,
}

/// Process-local store. Identifiers start at 1; listings come back in
/// identifier order.
#[derive(Debug, Default)]
pub struct InMemoryShipRepository {
    hold: RwLock<Hold>,
}

impl InMemoryShipRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn unavailable() -> ShipyardError {
        ShipyardError::Storage("ship store unavailable".to_string())
    }
}

impl ShipRepository for InMemoryShipRepository {
    fn find_by_id(&self, id: i64) -> Result<Option<Ship>> {
        let hold = self.hold.read().map_err(|_| Self::unavailable())?;
        Ok(hold.ships.get(&id).cloned())
    }

    fn find_all(&self) -> Result<Vec<Ship>> {
        let hold = self.hold.read().map_err(|_| Self::unavailable())?;
        Ok(hold.ships.values().cloned().collect())
    }

    fn insert(&self, ship: NewShip) -> Result<Ship> {
        let mut hold = self.hold.write().map_err(|_| Self::unavailable())?;
        hold.last_id += 1;
        let ship = ship.with_id(hold.last_id);
        hold.ships.insert(ship.id, ship.clone());
        Ok(ship)
    }

    fn save(&self, ship: &Ship) -> Result<Ship> {
        let mut hold = self.hold.write().map_err(|_| Self::unavailable())?;
        hold.last_id = hold.last_id.max(ship.id);
        hold.ships.insert(ship.id, ship.clone());
        Ok(ship.clone())
    }

    fn delete_by_id(&self, id: i64) -> Result<()> {
        let mut hold = self.hold.write().map_err(|_| Self::unavailable())?;
        hold.ships.remove(&id);
        Ok(())
    }
}
