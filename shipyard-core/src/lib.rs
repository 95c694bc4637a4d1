#![deny(missing_docs)]
//! Shipyard core library.
//!
//! This crate contains the ship domain types and the query, validation and
//! update pipeline behind the Shipyard registry service.

pub mod domain;
pub mod error;
pub mod filter;
pub mod page;
pub mod rating;
pub mod repository;
pub mod service;
pub mod sort;
pub mod update;
pub mod validator;

pub use domain::{NewShip, Ship, ShipDraft, ShipOrder, ShipPatch, ShipType};
pub use error::{Result, ShipyardError};
pub use filter::{ShipCriteria, filter_ships};
pub use page::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, paginate};
pub use rating::compute_rating;
pub use repository::{InMemoryShipRepository, ShipRepository};
pub use service::{ListOptions, SharedRepository, ShipService, parse_id};
pub use sort::sort_ships;
pub use update::merge_patch;
pub use validator::{
    is_valid_crew_size, is_valid_production_year, is_valid_record, is_valid_speed, is_valid_text,
    is_valid_type, validate_draft,
};
