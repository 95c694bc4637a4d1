//! Listing order.

use std::cmp::Ordering;

use crate::domain::{Ship, ShipOrder};

/// Sort ships ascending by `order`; `None` keeps the input order.
///
/// The sort is stable, so ties keep their relative input order.
pub fn sort_ships(mut ships: Vec<Ship>, order: Option<ShipOrder>) -> Vec<Ship> {
    if let Some(order) = order {
        ships.sort_by(|left, right| compare(left, right, order));
    }
    ships
}

fn compare(left: &Ship, right: &Ship, order: ShipOrder) -> Ordering {
    match order {
        ShipOrder::Id => left.id.cmp(&right.id),
        ShipOrder::Speed => left.speed.total_cmp(&right.speed),
        ShipOrder::Date => left.prod_date.cmp(&right.prod_date),
        ShipOrder::Rating => left.rating.total_cmp(&right.rating),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ShipType;
    use chrono::NaiveDate;

    fn ship(id: i64, speed: f64, year: i32, rating: f64) -> Ship {
        Ship {
            id,
            name: format!("ship-{id}"),
            planet: "Mars".to_string(),
            ship_type: ShipType::Transport,
            prod_date: NaiveDate::from_ymd_opt(year, 1, 1)
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .expect("valid date"),
            is_used: false,
            speed,
            crew_size: 10,
            rating,
        }
    }

    fn ids(ships: &[Ship]) -> Vec<i64> {
        ships.iter().map(|ship| ship.id).collect()
    }

    fn fleet() -> Vec<Ship> {
        vec![
            ship(3, 0.5, 3001, 1.5),
            ship(1, 0.2, 3010, 0.7),
            ship(4, 0.5, 2900, 0.7),
            ship(2, 0.9, 3001, 3.1),
        ]
    }

    #[test]
    fn no_order_keeps_input() {
        assert_eq!(ids(&sort_ships(fleet(), None)), vec![3, 1, 4, 2]);
    }

    #[test]
    fn orders_by_each_key() {
        assert_eq!(ids(&sort_ships(fleet(), Some(ShipOrder::Id))), vec![1, 2, 3, 4]);
        assert_eq!(ids(&sort_ships(fleet(), Some(ShipOrder::Speed))), vec![1, 3, 4, 2]);
        assert_eq!(ids(&sort_ships(fleet(), Some(ShipOrder::Date))), vec![4, 3, 2, 1]);
        assert_eq!(ids(&sort_ships(fleet(), Some(ShipOrder::Rating))), vec![1, 4, 3, 2]);
    }

    #[test]
    fn ties_keep_input_order() {
        let mut reversed = fleet();
        reversed.reverse();
        // 3 and 4 share a speed, 3 and 2 share a date, 1 and 4 share a rating.
        assert_eq!(ids(&sort_ships(reversed.clone(), Some(ShipOrder::Speed))), vec![1, 4, 3, 2]);
        assert_eq!(ids(&sort_ships(reversed.clone(), Some(ShipOrder::Date))), vec![4, 2, 3, 1]);
        assert_eq!(ids(&sort_ships(reversed, Some(ShipOrder::Rating))), vec![4, 1, 3, 2]);
    }
}
