//! Field-level validation rules that gate every write.

use chrono::{Datelike, NaiveDateTime};

use crate::domain::{ShipDraft, ShipType};
use crate::error::{Result, ShipyardError};

/// Maximum length of `name` and `planet`, in characters.
pub const MAX_TEXT_LEN: usize = 50;
/// Earliest accepted production year.
pub const MIN_PRODUCTION_YEAR: i32 = 2800;
/// Latest accepted production year.
pub const MAX_PRODUCTION_YEAR: i32 = 3019;
/// Smallest accepted crew.
pub const MIN_CREW_SIZE: i32 = 1;
/// Largest accepted crew.
pub const MAX_CREW_SIZE: i32 = 9999;
/// Slowest accepted speed.
pub const MIN_SPEED: f64 = 0.01;
/// Fastest accepted speed.
pub const MAX_SPEED: f64 = 0.99;

/// Non-empty text of at most [`MAX_TEXT_LEN`] characters.
pub fn is_valid_text(value: Option<&str>) -> bool {
    value.is_some_and(|text| !text.is_empty() && text.chars().count() <= MAX_TEXT_LEN)
}

/// Production timestamp whose calendar year lies in the accepted range.
pub fn is_valid_production_year(value: Option<NaiveDateTime>) -> bool {
    value.is_some_and(|date| (MIN_PRODUCTION_YEAR..=MAX_PRODUCTION_YEAR).contains(&date.year()))
}

/// Crew size within [`MIN_CREW_SIZE`, `MAX_CREW_SIZE`].
pub fn is_valid_crew_size(value: Option<i32>) -> bool {
    value.is_some_and(|crew| (MIN_CREW_SIZE..=MAX_CREW_SIZE).contains(&crew))
}

/// Speed within [`MIN_SPEED`, `MAX_SPEED`]. NaN is rejected.
pub fn is_valid_speed(value: Option<f64>) -> bool {
    value.is_some_and(|speed| (MIN_SPEED..=MAX_SPEED).contains(&speed))
}

/// Present and a member of the closed category set.
pub fn is_valid_type(value: Option<ShipType>) -> bool {
    value.is_some_and(|kind| ShipType::ALL.contains(&kind))
}

/// Name, planet, speed, crew size and production date all pass.
pub fn is_valid_record(draft: &ShipDraft) -> bool {
    is_valid_text(draft.name.as_deref())
        && is_valid_text(draft.planet.as_deref())
        && is_valid_speed(draft.speed)
        && is_valid_crew_size(draft.crew_size)
        && is_valid_production_year(draft.prod_date)
}

/// Validate a create request, naming the first failing field.
///
/// Unlike [`is_valid_record`], the category is required here as well.
pub fn validate_draft(draft: &ShipDraft) -> Result<()> {
    let checks = [
        ("name", is_valid_text(draft.name.as_deref())),
        ("planet", is_valid_text(draft.planet.as_deref())),
        ("shipType", is_valid_type(draft.ship_type)),
        ("prodDate", is_valid_production_year(draft.prod_date)),
        ("speed", is_valid_speed(draft.speed)),
        ("crewSize", is_valid_crew_size(draft.crew_size)),
    ];
    match checks.into_iter().find(|(_, valid)| !valid) {
        Some((field, _)) => Err(ShipyardError::InvalidField(field)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn year(year: i32) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(year, 6, 15).and_then(|date| date.and_hms_opt(12, 0, 0))
    }

    fn draft() -> ShipDraft {
        ShipDraft {
            name: Some("Eagle".to_string()),
            planet: Some("Mars".to_string()),
            ship_type: Some(ShipType::Transport),
            prod_date: year(3000),
            is_used: None,
            speed: Some(0.5),
            crew_size: Some(10),
        }
    }

    #[test]
    fn text_rejects_missing_empty_and_long_values() {
        assert!(is_valid_text(Some("Eagle")));
        assert!(is_valid_text(Some(&"x".repeat(50))));
        assert!(!is_valid_text(Some(&"x".repeat(51))));
        assert!(!is_valid_text(Some("")));
        assert!(!is_valid_text(None));
    }

    #[test]
    fn production_year_bounds_are_inclusive() {
        assert!(is_valid_production_year(year(2800)));
        assert!(is_valid_production_year(year(3019)));
        assert!(!is_valid_production_year(year(2799)));
        assert!(!is_valid_production_year(year(3020)));
        assert!(!is_valid_production_year(None));
    }

    #[test]
    fn crew_size_bounds_are_inclusive() {
        assert!(is_valid_crew_size(Some(1)));
        assert!(is_valid_crew_size(Some(9999)));
        assert!(!is_valid_crew_size(Some(0)));
        assert!(!is_valid_crew_size(Some(10_000)));
        assert!(!is_valid_crew_size(None));
    }

    #[test]
    fn speed_bounds_are_inclusive() {
        assert!(is_valid_speed(Some(0.01)));
        assert!(is_valid_speed(Some(0.99)));
        assert!(!is_valid_speed(Some(0.009)));
        assert!(!is_valid_speed(Some(1.5)));
        assert!(!is_valid_speed(Some(f64::NAN)));
        assert!(!is_valid_speed(None));
    }

    #[test]
    fn type_requires_a_value() {
        assert!(is_valid_type(Some(ShipType::Merchant)));
        assert!(!is_valid_type(None));
    }

    #[test]
    fn record_check_ignores_type() {
        let mut candidate = draft();
        candidate.ship_type = None;
        assert!(is_valid_record(&candidate));
        assert_eq!(
            validate_draft(&candidate),
            Err(ShipyardError::InvalidField("shipType"))
        );
    }

    #[test]
    fn validate_draft_reports_first_failing_field() {
        assert_eq!(validate_draft(&draft()), Ok(()));

        let mut candidate = draft();
        candidate.speed = Some(1.5);
        candidate.crew_size = Some(0);
        assert_eq!(
            validate_draft(&candidate),
            Err(ShipyardError::InvalidField("speed"))
        );

        let mut candidate = draft();
        candidate.name = None;
        assert!(!is_valid_record(&candidate));
        assert_eq!(
            validate_draft(&candidate),
            Err(ShipyardError::InvalidField("name"))
        );
    }
}
