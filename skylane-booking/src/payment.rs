//! Checkout request assembly and payment wire models.
//!
//! The payment service owns the authoritative pricing and seat
//! allocation; this module only shapes the request and classifies the
//! one failure the basket must react to, the seat conflict.

use serde::{Deserialize, Serialize};

use crate::basket::BasketLineItem;
use crate::tickets::Ticket;

/// How the user pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Cash,
    Mile,
}

impl PaymentMethod {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Card => "Credit/Debit Card",
            Self::Cash => "Cash",
            Self::Mile => "Miles",
        }
    }

    /// Currency label shown next to totals for this method.
    #[must_use]
    pub const fn currency_label(self) -> &'static str {
        match self {
            Self::Mile => "Miles",
            _ => "TL",
        }
    }
}

/// One basket line item as the payment endpoint expects it. Only the
/// seat identity and the add-on flags travel; the server re-prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketRequest {
    pub flight_id: i64,
    pub seat_number: String,
    pub has_extra_baggage: bool,
    pub has_meal_service: bool,
}

impl From<&BasketLineItem> for TicketRequest {
    fn from(item: &BasketLineItem) -> Self {
        Self {
            flight_id: item.flight_id,
            seat_number: item.seat_number.clone(),
            has_extra_baggage: item.has_extra_baggage,
            has_meal_service: item.has_meal_service,
        }
    }
}

/// Card details for a card payment: either a saved card reference or
/// full new-card entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CardInfo {
    #[serde(rename_all = "camelCase")]
    Saved { card_id: i64 },
    #[serde(rename_all = "camelCase")]
    New {
        card_num: String,
        holder_name: String,
        /// "MM/YY"
        expiry_time: String,
        cvv: String,
    },
}

impl CardInfo {
    /// Mirrors the form-level input masking: 16-digit number, 3-digit
    /// CVV, MM/YY expiry, non-empty holder.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        match self {
            Self::Saved { card_id } => *card_id > 0,
            Self::New {
                card_num,
                holder_name,
                expiry_time,
                cvv,
            } => {
                card_num.len() == 16
                    && card_num.chars().all(|c| c.is_ascii_digit())
                    && !holder_name.trim().is_empty()
                    && expiry_time.len() == 5
                    && expiry_time.as_bytes()[2] == b'/'
                    && cvv.len() == 3
                    && cvv.chars().all(|c| c.is_ascii_digit())
            }
        }
    }
}

/// Body of `POST /payments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub user_id: i64,
    pub tickets: Vec<TicketRequest>,
    pub method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_info: Option<CardInfo>,
}

impl PaymentRequest {
    /// Assemble the checkout request from the current basket contents.
    #[must_use]
    pub fn from_basket(
        user_id: i64,
        items: &[BasketLineItem],
        method: PaymentMethod,
        card_info: Option<CardInfo>,
    ) -> Self {
        Self {
            user_id,
            tickets: items.iter().map(TicketRequest::from).collect(),
            method,
            card_info,
        }
    }
}

/// A saved credit card as listed for the payment form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedCard {
    pub card_id: i64,
    pub card_num_last4digit: String,
    pub holder_name: String,
    #[serde(default)]
    pub expiry_time: Option<String>,
}

impl SavedCard {
    /// "**** **** **** 1234 - JANE DOE"
    #[must_use]
    pub fn masked_label(&self) -> String {
        format!("**** **** **** {} - {}", self.card_num_last4digit, self.holder_name)
    }
}

/// Confirmation returned by a successful payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    pub user_id: i64,
    #[serde(default)]
    pub tickets: Vec<Ticket>,
    pub method: PaymentMethod,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Whether a checkout error message signals that a selected seat was
/// sold to another party between selection and payment. That failure
/// invalidates the whole basket: the caller must clear it and send the
/// user back to flight search.
///
/// The backend reports it in prose ("Seat 12A already booked"), so the
/// match is on the phrase rather than a code.
#[must_use]
pub fn is_seat_conflict(message: &str) -> bool {
    message.to_ascii_lowercase().contains("already booked")
}

/// How many more miles are needed to cover `total`, zero when the
/// balance suffices.
#[must_use]
pub fn miles_shortfall(balance: f64, total: f64) -> f64 {
    (total - balance).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seats::SeatClass;

    fn line(flight_id: i64, seat: &str) -> BasketLineItem {
        BasketLineItem {
            flight_id,
            seat_number: seat.to_string(),
            price: 1200.0,
            class: SeatClass::Economy,
            has_extra_baggage: true,
            has_meal_service: false,
        }
    }

    #[test]
    fn request_serializes_backend_shape() {
        let request = PaymentRequest::from_basket(
            3,
            &[line(7, "12A")],
            PaymentMethod::Card,
            Some(CardInfo::Saved { card_id: 11 }),
        );
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["userId"], 3);
        assert_eq!(json["method"], "card");
        assert_eq!(json["tickets"][0]["flightId"], 7);
        assert_eq!(json["tickets"][0]["seatNumber"], "12A");
        assert_eq!(json["tickets"][0]["hasExtraBaggage"], true);
        assert_eq!(json["cardInfo"]["cardId"], 11);
    }

    #[test]
    fn card_info_is_omitted_for_cash() {
        let request =
            PaymentRequest::from_basket(3, &[line(7, "12A")], PaymentMethod::Cash, None);
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("cardInfo").is_none());
    }

    #[test]
    fn new_card_serializes_full_details() {
        let card = CardInfo::New {
            card_num: "4111111111111111".to_string(),
            holder_name: "JANE DOE".to_string(),
            expiry_time: "12/27".to_string(),
            cvv: "123".to_string(),
        };
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["cardNum"], "4111111111111111");
        assert_eq!(json["expiryTime"], "12/27");
    }

    #[test]
    fn card_completeness_mirrors_input_masking() {
        let complete = CardInfo::New {
            card_num: "4111111111111111".to_string(),
            holder_name: "JANE DOE".to_string(),
            expiry_time: "12/27".to_string(),
            cvv: "123".to_string(),
        };
        assert!(complete.is_complete());

        let short_num = CardInfo::New {
            card_num: "4111".to_string(),
            holder_name: "JANE DOE".to_string(),
            expiry_time: "12/27".to_string(),
            cvv: "123".to_string(),
        };
        assert!(!short_num.is_complete());

        assert!(CardInfo::Saved { card_id: 11 }.is_complete());
        assert!(!CardInfo::Saved { card_id: 0 }.is_complete());
    }

    #[test]
    fn seat_conflict_matches_backend_phrase_only() {
        assert!(is_seat_conflict("Seat 12A already booked"));
        assert!(is_seat_conflict("seat 3C ALREADY BOOKED for flight 9"));
        assert!(!is_seat_conflict("Seat map unavailable"));
        assert!(!is_seat_conflict("Payment declined"));
    }

    #[test]
    fn miles_shortfall_is_clamped_at_zero() {
        assert_eq!(miles_shortfall(500.0, 1200.0), 700.0);
        assert_eq!(miles_shortfall(1500.0, 1200.0), 0.0);
    }

    #[test]
    fn saved_card_masked_label() {
        let card = SavedCard {
            card_id: 11,
            card_num_last4digit: "4242".to_string(),
            holder_name: "JANE DOE".to_string(),
            expiry_time: None,
        };
        assert_eq!(card.masked_label(), "**** **** **** 4242 - JANE DOE");
    }
}
