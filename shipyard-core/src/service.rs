//! Ship record orchestration.

use std::sync::Arc;

use log::debug;

use crate::domain::{NewShip, Ship, ShipDraft, ShipOrder, ShipPatch};
use crate::error::{Result, ShipyardError};
use crate::filter::{ShipCriteria, filter_ships};
use crate::page::paginate;
use crate::rating::compute_rating;
use crate::repository::ShipRepository;
use crate::sort::sort_ships;
use crate::update::merge_patch;
use crate::validator::validate_draft;

/// Shared handle to a storage provider.
pub type SharedRepository = Arc<dyn ShipRepository + Send + Sync>;

/// Ordering and paging applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Sort key; `None` keeps storage order.
    pub order: Option<ShipOrder>,
    /// Zero-indexed page number.
    pub page_number: Option<usize>,
    /// Items per page.
    pub page_size: Option<usize>,
}

/// Parse a path identifier into a positive ship id.
pub fn parse_id(raw: &str) -> Result<i64> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ShipyardError::InvalidIdentifier(raw.to_string())),
    }
}

/// Create, read, update, delete and list ships on top of a repository.
#[derive(Clone)]
pub struct ShipService {
    repo: SharedRepository,
}

impl ShipService {
    /// Build a service over the given storage provider.
    pub fn new(repo: SharedRepository) -> Self {
        Self { repo }
    }

    /// Fetch a ship by id.
    pub fn get(&self, id: i64) -> Result<Ship> {
        if id <= 0 {
            return Err(ShipyardError::InvalidIdentifier(id.to_string()));
        }
        self.repo
            .find_by_id(id)?
            .ok_or(ShipyardError::NotFound(id))
    }

    /// Validate a draft, derive its rating and store it.
    pub fn create(&self, draft: ShipDraft) -> Result<Ship> {
        validate_draft(&draft)?;
        let ShipDraft {
            name: Some(name),
            planet: Some(planet),
            ship_type: Some(ship_type),
            prod_date: Some(prod_date),
            is_used,
            speed: Some(speed),
            crew_size: Some(crew_size),
        } = draft
        else {
            return Err(ShipyardError::MalformedRequest(
                "ship draft is missing required fields".to_string(),
            ));
        };
        let is_used = is_used.unwrap_or(false);
        let ship = NewShip {
            name,
            planet,
            ship_type,
            prod_date,
            is_used,
            speed,
            crew_size,
            rating: compute_rating(speed, is_used, prod_date),
        };
        let created = self.repo.insert(ship)?;
        debug!("created ship {} with rating {}", created.id, created.rating);
        Ok(created)
    }

    /// Apply a partial update and persist the result once.
    pub fn update(&self, id: i64, patch: &ShipPatch) -> Result<Ship> {
        let existing = self.get(id)?;
        let merged = merge_patch(&existing, patch)?;
        let saved = self.repo.save(&merged)?;
        debug!(
            "updated ship {} (rating recomputed: {})",
            saved.id,
            patch.affects_rating()
        );
        Ok(saved)
    }

    /// Delete an existing ship.
    pub fn delete(&self, id: i64) -> Result<()> {
        let existing = self.get(id)?;
        self.repo.delete_by_id(existing.id)?;
        debug!("deleted ship {id}");
        Ok(())
    }

    /// Filter, sort and page the stored ships.
    pub fn list(&self, criteria: &ShipCriteria, options: ListOptions) -> Result<Vec<Ship>> {
        let matching = filter_ships(self.repo.find_all()?, criteria);
        debug!("{} ships match listing criteria", matching.len());
        let ordered = sort_ships(matching, options.order);
        Ok(paginate(ordered, options.page_number, options.page_size))
    }

    /// Count every ship matching the criteria, ignoring paging.
    pub fn count(&self, criteria: &ShipCriteria) -> Result<usize> {
        Ok(filter_ships(self.repo.find_all()?, criteria).len())
    }
}
