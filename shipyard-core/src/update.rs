//! Partial-update merging.

use crate::domain::{Ship, ShipPatch};
use crate::error::{Result, ShipyardError};
use crate::rating::compute_rating;
use crate::validator::{
    is_valid_crew_size, is_valid_production_year, is_valid_speed, is_valid_text, is_valid_type,
};

/// Apply `patch` onto a copy of `existing`.
///
/// Every present field is validated before it is assigned; the first invalid
/// field aborts the merge and `existing` is never touched. The rating is
/// recomputed when speed, used flag or production date were supplied. The
/// identifier is carried over unchanged.
pub fn merge_patch(existing: &Ship, patch: &ShipPatch) -> Result<Ship> {
    let mut working = existing.clone();

    if let Some(name) = &patch.name {
        ensure(is_valid_text(Some(name)), "name")?;
        working.name = name.clone();
    }
    if let Some(planet) = &patch.planet {
        ensure(is_valid_text(Some(planet)), "planet")?;
        working.planet = planet.clone();
    }
    if let Some(ship_type) = patch.ship_type {
        ensure(is_valid_type(Some(ship_type)), "shipType")?;
        working.ship_type = ship_type;
    }
    if let Some(prod_date) = patch.prod_date {
        ensure(is_valid_production_year(Some(prod_date)), "prodDate")?;
        working.prod_date = prod_date;
    }
    if let Some(is_used) = patch.is_used {
        working.is_used = is_used;
    }
    if let Some(speed) = patch.speed {
        ensure(is_valid_speed(Some(speed)), "speed")?;
        working.speed = speed;
    }
    if let Some(crew_size) = patch.crew_size {
        ensure(is_valid_crew_size(Some(crew_size)), "crewSize")?;
        working.crew_size = crew_size;
    }

    if patch.affects_rating() {
        working.rating = compute_rating(working.speed, working.is_used, working.prod_date);
    }
    Ok(working)
}

fn ensure(valid: bool, field: &'static str) -> Result<()> {
    if valid {
        Ok(())
    } else {
        Err(ShipyardError::InvalidField(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ShipType;
    use chrono::{NaiveDate, NaiveDateTime};

    fn produced(year: i32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .expect("valid date")
    }

    fn eagle() -> Ship {
        Ship {
            id: 11,
            name: "Eagle".to_string(),
            planet: "Mars".to_string(),
            ship_type: ShipType::Transport,
            prod_date: produced(3000),
            is_used: false,
            speed: 0.5,
            crew_size: 10,
            rating: 2.0,
        }
    }

    #[test]
    fn invalid_speed_fails_and_leaves_existing_untouched() {
        let existing = eagle();
        let patch = ShipPatch {
            name: Some("Falcon".to_string()),
            speed: Some(1.5),
            ..ShipPatch::default()
        };

        assert_eq!(
            merge_patch(&existing, &patch),
            Err(ShipyardError::InvalidField("speed"))
        );
        assert_eq!(existing, eagle());
    }

    #[test]
    fn used_flag_change_recomputes_rating() {
        let patch = ShipPatch {
            is_used: Some(true),
            ..ShipPatch::default()
        };
        let updated = merge_patch(&eagle(), &patch).expect("merge");
        assert!(updated.is_used);
        assert_eq!(updated.rating, 1.0);
    }

    #[test]
    fn name_change_keeps_rating() {
        let mut existing = eagle();
        existing.rating = 9.99;
        let patch = ShipPatch {
            name: Some("Falcon".to_string()),
            ..ShipPatch::default()
        };
        let updated = merge_patch(&existing, &patch).expect("merge");
        assert_eq!(updated.name, "Falcon");
        assert_eq!(updated.rating, 9.99);
    }

    #[test]
    fn rating_uses_final_values_of_all_inputs() {
        let patch = ShipPatch {
            prod_date: Some(produced(3015)),
            is_used: Some(true),
            speed: Some(0.8),
            ..ShipPatch::default()
        };
        let updated = merge_patch(&eagle(), &patch).expect("merge");
        // 80 * 0.8 * 0.5 / 5
        assert_eq!(updated.rating, 6.4);
        assert_eq!(updated.id, 11);
    }

    #[test]
    fn each_field_reports_its_own_name() {
        let cases = [
            (
                ShipPatch {
                    name: Some(String::new()),
                    ..ShipPatch::default()
                },
                "name",
            ),
            (
                ShipPatch {
                    planet: Some("p".repeat(51)),
                    ..ShipPatch::default()
                },
                "planet",
            ),
            (
                ShipPatch {
                    prod_date: Some(produced(3020)),
                    ..ShipPatch::default()
                },
                "prodDate",
            ),
            (
                ShipPatch {
                    crew_size: Some(0),
                    ..ShipPatch::default()
                },
                "crewSize",
            ),
        ];
        for (patch, field) in cases {
            assert_eq!(
                merge_patch(&eagle(), &patch),
                Err(ShipyardError::InvalidField(field))
            );
        }
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        assert_eq!(merge_patch(&eagle(), &ShipPatch::default()), Ok(eagle()));
    }
}
