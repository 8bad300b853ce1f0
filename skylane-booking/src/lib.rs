//! Skylane Booking Core
//!
//! Platform-agnostic booking logic for the Skylane ticketing front end.
//! This crate provides the basket, seat selection and pricing rules plus
//! the typed wire models for the remote flight API, without UI or
//! network dependencies.

pub mod basket;
pub mod flights;
pub mod payment;
pub mod pricing;
pub mod seats;
pub mod selection;
pub mod tickets;

// Re-export commonly used types
pub use basket::{Basket, BasketLineItem};
pub use flights::{FlightQuery, FlightSearchResult, split_datetime};
pub use payment::{
    CardInfo, PaymentMethod, PaymentReceipt, PaymentRequest, SavedCard, TicketRequest,
    is_seat_conflict, miles_shortfall,
};
pub use pricing::{EXTRA_BAGGAGE_PRICE, MEAL_SERVICE_PRICE, basket_total, item_total};
pub use seats::{SeatAvailability, SeatClass, SeatOffer};
pub use selection::{LoadToken, SeatLoad, SeatSelection};
pub use tickets::{Ticket, TicketStatus};
