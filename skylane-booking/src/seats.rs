//! Seat inventory wire models.
//!
//! A [`SeatOffer`] is one seat of one flight as reported by the flight
//! service. The list is fetched fresh per flight on entering seat
//! selection and never cached across flights; the server stays
//! authoritative for availability.

use serde::{Deserialize, Serialize};

/// Cabin category of a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatClass {
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl SeatClass {
    /// Display label for the cabin category.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Economy => "Economy",
            Self::PremiumEconomy => "Premium Economy",
            Self::Business => "Business",
            Self::First => "First",
        }
    }
}

/// Booking state of a seat on a specific flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatAvailability {
    Available,
    Reserved,
    Sold,
}

/// One seat as presented by the flight service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatOffer {
    /// Unique within a flight, e.g. "12A".
    pub seat_number: String,
    #[serde(rename = "type")]
    pub class: SeatClass,
    /// Base fare for this seat in the displayed currency unit.
    pub price: f64,
    pub availability: SeatAvailability,
}

impl SeatOffer {
    /// Only available seats are selectable.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.availability == SeatAvailability::Available
    }
}
