//! PostgreSQL-backed ship repository.

use std::fmt::Display;

use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use shipyard_core::{NewShip, Result, Ship, ShipRepository, ShipyardError};

use crate::db::DbPool;
use crate::models::{NewShipRow, ShipRow};
use crate::schema::ship;

type PgPooled = PooledConnection<ConnectionManager<PgConnection>>;

/// Ship repository over a Diesel connection pool.
#[derive(Clone)]
pub struct PgShipRepository {
    pool: DbPool,
}

impl PgShipRepository {
    /// Wrap an existing pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<PgPooled> {
        self.pool.get().map_err(storage)
    }
}

fn storage(err: impl Display) -> ShipyardError {
    ShipyardError::Storage(err.to_string())
}

impl ShipRepository for PgShipRepository {
    fn find_by_id(&self, id: i64) -> Result<Option<Ship>> {
        let mut conn = self.conn()?;
        ship::table
            .find(id)
            .select(ShipRow::as_select())
            .first::<ShipRow>(&mut conn)
            .optional()
            .map_err(storage)?
            .map(Ship::try_from)
            .transpose()
    }

    fn find_all(&self) -> Result<Vec<Ship>> {
        let mut conn = self.conn()?;
        ship::table
            .order(ship::id.asc())
            .select(ShipRow::as_select())
            .load::<ShipRow>(&mut conn)
            .map_err(storage)?
            .into_iter()
            .map(Ship::try_from)
            .collect()
    }

    fn insert(&self, new_ship: NewShip) -> Result<Ship> {
        let mut conn = self.conn()?;
        let row = diesel::insert_into(ship::table)
            .values(NewShipRow::from(new_ship))
            .returning(ShipRow::as_returning())
            .get_result::<ShipRow>(&mut conn)
            .map_err(storage)?;
        Ship::try_from(row)
    }

    fn save(&self, updated: &Ship) -> Result<Ship> {
        let mut conn = self.conn()?;
        let row = ShipRow::from(updated);
        let row = diesel::update(ship::table.find(updated.id))
            .set(&row)
            .returning(ShipRow::as_returning())
            .get_result::<ShipRow>(&mut conn)
            .map_err(storage)?;
        Ship::try_from(row)
    }

    fn delete_by_id(&self, id: i64) -> Result<()> {
        let mut conn = self.conn()?;
        diesel::delete(ship::table.find(id))
            .execute(&mut conn)
            .map_err(storage)?;
        Ok(())
    }
}
