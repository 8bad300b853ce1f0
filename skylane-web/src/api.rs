//! HTTP client for the remote flight service.
//!
//! Every response is parsed into the typed wire models from
//! `skylane-booking` at this boundary; a missing field or a non-2xx
//! status becomes a typed [`ApiError`] instead of leaking into the
//! booking logic.

use gloo_net::http::{Request, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use skylane_booking::{
    FlightQuery, FlightSearchResult, PaymentReceipt, PaymentRequest, SavedCard, SeatOffer, Ticket,
};
use thiserror::Error;

const API_BASE: &str = "http://localhost:8080/api";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport-level failure; recoverable by retrying the action.
    #[error("network error: {0}")]
    Network(String),
    /// The service answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The body did not match the documented wire shape.
    #[error("unexpected response shape: {0}")]
    Decode(String),
}

impl ApiError {
    /// Checkout-time seat conflict: the basket contents are provably
    /// invalid and the caller must clear them.
    #[must_use]
    pub fn is_seat_conflict(&self) -> bool {
        matches!(self, Self::Status { message, .. } if skylane_booking::is_seat_conflict(message))
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// Turn a non-2xx response into a message-carrying error, preferring
/// the body's JSON `message` field, then plain text, then the status.
async fn status_error(response: Response) -> ApiError {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .ok()
        .and_then(|body| body.message)
        .or_else(|| {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .unwrap_or_else(|| format!("Request failed with status {status}"));
    ApiError::Status { status, message }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(status_error(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn expect_ok(response: Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(status_error(response).await)
    }
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&url(path))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

async fn post_json<T, B>(path: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: serde::Serialize,
{
    let response = Request::post(&url(path))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

/// `POST /flights/search`
pub async fn search_flights(query: &FlightQuery) -> Result<Vec<FlightSearchResult>, ApiError> {
    post_json("/flights/search", query).await
}

/// `GET /flights/{flightId}/seats`
pub async fn seats_for_flight(flight_id: i64) -> Result<Vec<SeatOffer>, ApiError> {
    get_json(&format!("/flights/{flight_id}/seats")).await
}

/// `GET /flights/{flightId}/seats/{seatNumber}`
pub async fn seat_status(flight_id: i64, seat_number: &str) -> Result<SeatOffer, ApiError> {
    get_json(&format!("/flights/{flight_id}/seats/{seat_number}")).await
}

/// `POST /payments`. The service answers with the user's payment
/// history including the new confirmation.
pub async fn create_payment(request: &PaymentRequest) -> Result<Vec<PaymentReceipt>, ApiError> {
    post_json("/payments", request).await
}

/// `GET /tickets/user/{userId}`
pub async fn user_tickets(user_id: i64) -> Result<Vec<Ticket>, ApiError> {
    get_json(&format!("/tickets/user/{user_id}")).await
}

/// `POST /tickets/{ticketId}/cancel`
pub async fn cancel_ticket(ticket_id: i64) -> Result<(), ApiError> {
    let response = Request::post(&url(&format!("/tickets/{ticket_id}/cancel")))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    expect_ok(response).await
}

/// `POST /tickets/{ticketId}/checkin`
pub async fn check_in_ticket(ticket_id: i64) -> Result<(), ApiError> {
    let response = Request::post(&url(&format!("/tickets/{ticket_id}/checkin")))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    expect_ok(response).await
}

/// `GET /users/{userId}/credit-cards`
pub async fn saved_cards(user_id: i64) -> Result<Vec<SavedCard>, ApiError> {
    get_json(&format!("/users/{user_id}/credit-cards")).await
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct UserProfile {
    #[serde(default)]
    mile: f64,
}

/// Miles balance from `GET /users/{emailOrPhone}`.
pub async fn user_miles(email_or_phone: &str) -> Result<f64, ApiError> {
    let profile: UserProfile = get_json(&format!("/users/{email_or_phone}")).await?;
    Ok(profile.mile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seat_conflict_is_detected_on_status_errors_only() {
        let conflict = ApiError::Status {
            status: 409,
            message: "Seat 12A already booked".to_string(),
        };
        assert!(conflict.is_seat_conflict());

        let declined = ApiError::Status {
            status: 402,
            message: "Payment declined".to_string(),
        };
        assert!(!declined.is_seat_conflict());

        let network = ApiError::Network("connection reset".to_string());
        assert!(!network.is_seat_conflict());
    }

    #[test]
    fn error_display_carries_the_service_message() {
        let error = ApiError::Status {
            status: 404,
            message: "Flight not found: 42".to_string(),
        };
        assert_eq!(error.to_string(), "Flight not found: 42");
    }

    #[test]
    fn urls_are_rooted_at_the_api_base() {
        assert_eq!(
            url("/flights/42/seats"),
            "http://localhost:8080/api/flights/42/seats"
        );
    }
}
