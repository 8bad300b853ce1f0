pub mod basket;
pub mod my_flights;
pub mod not_found;
pub mod payment;
pub mod search;
pub mod seats;
