//! Basket state and mutation rules.
//!
//! The basket is the in-session list of provisional purchases. It is
//! the only owner of its line items for the lifetime of the page
//! session and exposes the only mutation entry points; checkout is an
//! external side effect that ends with [`Basket::clear`].

use serde::{Deserialize, Serialize};

use crate::pricing;
use crate::seats::SeatClass;

/// A provisional purchase intent: one seat on one flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketLineItem {
    pub flight_id: i64,
    /// References a seat that was available at selection time.
    pub seat_number: String,
    /// Base fare captured at selection time; add-on surcharges are
    /// carried as flags, never folded in here.
    pub price: f64,
    #[serde(rename = "type")]
    pub class: SeatClass,
    #[serde(default)]
    pub has_extra_baggage: bool,
    #[serde(default)]
    pub has_meal_service: bool,
}

impl BasketLineItem {
    /// Total price of this line item including selected add-ons.
    #[must_use]
    pub fn total(&self) -> f64 {
        pricing::item_total(self)
    }
}

/// The ordered collection of line items for the active session.
///
/// Invariant: no two items share a `(flight_id, seat_number)` pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Basket {
    items: Vec<BasketLineItem>,
}

impl Basket {
    /// Create a new empty basket.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn items(&self) -> &[BasketLineItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the basket already holds this physical seat.
    #[must_use]
    pub fn contains(&self, flight_id: i64, seat_number: &str) -> bool {
        self.items
            .iter()
            .any(|item| item.flight_id == flight_id && item.seat_number == seat_number)
    }

    /// Append a line item unless its seat is already in the basket.
    ///
    /// Returns `false` without mutating state when the
    /// `(flight_id, seat_number)` pair is already present or the item
    /// does not identify a seat; the caller owns the user messaging.
    pub fn add(&mut self, item: BasketLineItem) -> bool {
        if item.flight_id <= 0 || item.seat_number.is_empty() {
            return false;
        }
        if self.contains(item.flight_id, &item.seat_number) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove the matching line item. Removing an absent pair is a no-op.
    pub fn remove(&mut self, flight_id: i64, seat_number: &str) {
        self.items
            .retain(|item| !(item.flight_id == flight_id && item.seat_number == seat_number));
    }

    /// Empty the basket unconditionally. Also the completion step of a
    /// checkout attempt, successful or seat-conflicted alike.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Basket total, recomputed on every read so item-level add-on
    /// edits are always reflected.
    #[must_use]
    pub fn total(&self) -> f64 {
        pricing::basket_total(&self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(flight_id: i64, seat: &str, price: f64) -> BasketLineItem {
        BasketLineItem {
            flight_id,
            seat_number: seat.to_string(),
            price,
            class: SeatClass::Economy,
            has_extra_baggage: false,
            has_meal_service: false,
        }
    }

    #[test]
    fn add_rejects_duplicate_seat_without_mutation() {
        let mut basket = Basket::new();
        assert!(basket.add(item(7, "12A", 500.0)));
        assert!(!basket.add(item(7, "12A", 999.0)));
        assert_eq!(basket.len(), 1);
        assert_eq!(basket.items()[0].price, 500.0);
    }

    #[test]
    fn same_seat_number_on_other_flight_is_distinct() {
        let mut basket = Basket::new();
        assert!(basket.add(item(7, "12A", 500.0)));
        assert!(basket.add(item(8, "12A", 650.0)));
        assert_eq!(basket.len(), 2);
    }

    #[test]
    fn add_rejects_items_without_a_seat_identity() {
        let mut basket = Basket::new();
        assert!(!basket.add(item(0, "12A", 500.0)));
        assert!(!basket.add(item(7, "", 500.0)));
        assert!(basket.is_empty());
    }

    #[test]
    fn remove_is_exact_and_safe() {
        let mut basket = Basket::new();
        basket.add(item(7, "12A", 500.0));
        basket.remove(9, "99Z");
        assert_eq!(basket.len(), 1);
        basket.remove(7, "12A");
        assert!(basket.is_empty());
    }

    #[test]
    fn clear_is_idempotent() {
        let mut basket = Basket::new();
        basket.clear();
        assert!(basket.is_empty());
        basket.add(item(7, "12A", 500.0));
        basket.clear();
        basket.clear();
        assert!(basket.is_empty());
        assert_eq!(basket.total(), 0.0);
    }

    #[test]
    fn total_reflects_addon_edits() {
        let mut basket = Basket::new();
        let mut line = item(42, "1A", 2000.0);
        line.has_extra_baggage = true;
        basket.add(line);
        assert_eq!(basket.total(), 2150.0);

        basket.remove(42, "1A");
        let mut line = item(42, "1A", 2000.0);
        line.has_meal_service = true;
        basket.add(line);
        assert_eq!(basket.total(), 2075.0);
    }

    #[test]
    fn line_item_parses_session_snapshot() {
        let json = r#"{
            "flightId": 42,
            "seatNumber": "1A",
            "price": 2000.0,
            "type": "business",
            "hasExtraBaggage": true
        }"#;
        let line: BasketLineItem = serde_json::from_str(json).unwrap();
        assert!(line.has_extra_baggage);
        assert!(!line.has_meal_service);
        assert_eq!(line.total(), 2150.0);
    }
}
