//! Fixed add-on surcharges and the pure pricing math.
//!
//! Surcharges are configuration-level constants, kept in one place so
//! every surface prices a line item identically. The base fare on a
//! line item never includes add-ons; they are applied here at
//! display/checkout time and therefore cannot be double-counted.

use crate::basket::BasketLineItem;

/// Surcharge for the extra-baggage add-on, in the displayed currency unit.
pub const EXTRA_BAGGAGE_PRICE: f64 = 150.0;
/// Surcharge for the meal-service add-on, in the displayed currency unit.
pub const MEAL_SERVICE_PRICE: f64 = 75.0;

/// Total price of one line item: base fare plus selected add-ons.
///
/// Pure and idempotent; the currency unit is opaque (the surrounding
/// UI labels it "TL" or "Miles").
#[must_use]
pub fn item_total(item: &BasketLineItem) -> f64 {
    let mut total = item.price;
    if item.has_extra_baggage {
        total += EXTRA_BAGGAGE_PRICE;
    }
    if item.has_meal_service {
        total += MEAL_SERVICE_PRICE;
    }
    total
}

/// Sum of [`item_total`] over a set of line items.
#[must_use]
pub fn basket_total<'a, I>(items: I) -> f64
where
    I: IntoIterator<Item = &'a BasketLineItem>,
{
    items.into_iter().map(item_total).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seats::SeatClass;

    fn line(price: f64, baggage: bool, meal: bool) -> BasketLineItem {
        BasketLineItem {
            flight_id: 7,
            seat_number: "12A".to_string(),
            price,
            class: SeatClass::Economy,
            has_extra_baggage: baggage,
            has_meal_service: meal,
        }
    }

    #[test]
    fn base_fare_only_when_no_addons() {
        assert_eq!(item_total(&line(1000.0, false, false)), 1000.0);
    }

    #[test]
    fn addons_are_additive() {
        assert_eq!(item_total(&line(1000.0, true, false)), 1150.0);
        assert_eq!(item_total(&line(1000.0, false, true)), 1075.0);
        assert_eq!(item_total(&line(1000.0, true, true)), 1225.0);
    }

    #[test]
    fn item_total_is_idempotent() {
        let item = line(499.5, true, true);
        assert_eq!(item_total(&item), item_total(&item));
    }

    #[test]
    fn basket_total_is_order_independent() {
        let a = line(1000.0, true, false);
        let b = line(750.0, false, true);
        let forward = basket_total(vec![a.clone(), b.clone()].iter());
        let reverse = basket_total(vec![b, a].iter());
        assert_eq!(forward, reverse);
        assert_eq!(forward, 1150.0 + 825.0);
    }

    #[test]
    fn empty_set_totals_zero() {
        assert_eq!(basket_total(std::iter::empty()), 0.0);
    }
}
