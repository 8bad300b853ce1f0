//! Per-flight seat selection state machine.
//!
//! One [`SeatSelection`] instance backs one visit to the seat map. It
//! tracks the inventory load lifecycle, at most one selected seat, and
//! the pending add-on flags, and assembles the basket line item on
//! confirmation. Loads are asynchronous; everything else is a
//! synchronous state transition on the UI thread.

use serde::{Deserialize, Serialize};

use crate::basket::BasketLineItem;
use crate::pricing;
use crate::seats::SeatOffer;

/// Lifecycle of the seat inventory for the current flight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum SeatLoad {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<SeatOffer>),
    /// Recoverable: re-invoking the load retries from scratch.
    Failed(String),
}

/// Identifies one load request. A response carrying a token older than
/// the newest [`SeatSelection::begin_load`] is stale and gets dropped,
/// so the last request initiated always wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadToken(u64);

/// Selection state for a single flight's seat map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatSelection {
    flight_id: i64,
    load: SeatLoad,
    generation: u64,
    selected: Option<SeatOffer>,
    extra_baggage: bool,
    meal_service: bool,
}

impl SeatSelection {
    #[must_use]
    pub fn new(flight_id: i64) -> Self {
        Self {
            flight_id,
            load: SeatLoad::Idle,
            generation: 0,
            selected: None,
            extra_baggage: false,
            meal_service: false,
        }
    }

    #[must_use]
    pub const fn flight_id(&self) -> i64 {
        self.flight_id
    }

    #[must_use]
    pub const fn load(&self) -> &SeatLoad {
        &self.load
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.load, SeatLoad::Loading)
    }

    /// The loaded inventory, empty while idle, loading or failed.
    #[must_use]
    pub fn seats(&self) -> &[SeatOffer] {
        match &self.load {
            SeatLoad::Loaded(seats) => seats,
            _ => &[],
        }
    }

    /// Point the machine at a different flight, dropping the previous
    /// inventory, selection and add-on flags. The load generation is
    /// preserved so responses still in flight for the previous flight
    /// stay stale.
    pub fn reset(&mut self, flight_id: i64) {
        self.flight_id = flight_id;
        self.load = SeatLoad::Idle;
        self.selected = None;
        self.extra_baggage = false;
        self.meal_service = false;
    }

    /// Start a fresh inventory load, discarding any previous list and
    /// selection so a stale map is never selectable.
    pub fn begin_load(&mut self) -> LoadToken {
        self.generation += 1;
        self.load = SeatLoad::Loading;
        self.selected = None;
        LoadToken(self.generation)
    }

    /// Resolve a load started by [`Self::begin_load`].
    ///
    /// Returns `false` and changes nothing when the token is stale,
    /// i.e. a newer load has started since this one.
    pub fn finish_load(
        &mut self,
        token: LoadToken,
        result: Result<Vec<SeatOffer>, String>,
    ) -> bool {
        if token.0 != self.generation {
            return false;
        }
        self.load = match result {
            Ok(seats) => SeatLoad::Loaded(seats),
            Err(message) => SeatLoad::Failed(message),
        };
        true
    }

    /// Make `seat` the single current selection, replacing any prior
    /// one. Silently ignored unless the inventory is loaded and the
    /// seat is available; that is a constraint, not a failure.
    pub fn select(&mut self, seat: &SeatOffer) {
        if !matches!(self.load, SeatLoad::Loaded(_)) || !seat.is_available() {
            return;
        }
        self.selected = Some(seat.clone());
    }

    #[must_use]
    pub const fn selected(&self) -> Option<&SeatOffer> {
        self.selected.as_ref()
    }

    pub fn set_extra_baggage(&mut self, enabled: bool) {
        self.extra_baggage = enabled;
    }

    pub fn set_meal_service(&mut self, enabled: bool) {
        self.meal_service = enabled;
    }

    #[must_use]
    pub const fn extra_baggage(&self) -> bool {
        self.extra_baggage
    }

    #[must_use]
    pub const fn meal_service(&self) -> bool {
        self.meal_service
    }

    /// Running total for the pending selection, `None` while nothing
    /// is selected.
    #[must_use]
    pub fn pending_total(&self) -> Option<f64> {
        self.confirm().map(|item| pricing::item_total(&item))
    }

    /// Assemble the basket line item for the current selection.
    ///
    /// The price is the seat's base fare; add-ons travel as flags and
    /// are priced at display/checkout time. Returns `None` while no
    /// seat is selected.
    #[must_use]
    pub fn confirm(&self) -> Option<BasketLineItem> {
        let seat = self.selected.as_ref()?;
        Some(BasketLineItem {
            flight_id: self.flight_id,
            seat_number: seat.seat_number.clone(),
            price: seat.price,
            class: seat.class,
            has_extra_baggage: self.extra_baggage,
            has_meal_service: self.meal_service,
        })
    }
}
