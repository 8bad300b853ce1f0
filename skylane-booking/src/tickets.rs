//! Purchased ticket wire models for history and check-in.

use serde::{Deserialize, Serialize};

/// Server-side lifecycle of a purchased ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Booked,
    Cancelled,
    CheckedIn,
    Completed,
}

impl TicketStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Booked => "Booked",
            Self::Cancelled => "Cancelled",
            Self::CheckedIn => "Checked in",
            Self::Completed => "Completed",
        }
    }

    /// Only booked tickets can still be cancelled.
    #[must_use]
    pub const fn can_cancel(self) -> bool {
        matches!(self, Self::Booked)
    }

    /// Only booked tickets can check in.
    #[must_use]
    pub const fn can_check_in(self) -> bool {
        matches!(self, Self::Booked)
    }
}

/// One purchased ticket as summarized by the ticket service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub ticket_id: i64,
    pub flight_id: i64,
    pub seat_number: String,
    pub status: TicketStatus,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub departure_time: Option<String>,
    #[serde(default)]
    pub arrival_time: Option<String>,
    #[serde(default)]
    pub has_extra_baggage: bool,
    #[serde(default)]
    pub has_meal_service: bool,
    /// Base seat price; add-ons are flagged, not folded in.
    #[serde(default)]
    pub price: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_parses_summary_shape() {
        let json = r#"{
            "ticketId": 91,
            "flightId": 42,
            "origin": "IST",
            "destination": "ESB",
            "seatNumber": "1A",
            "status": "checked_in",
            "hasExtraBaggage": true
        }"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.status, TicketStatus::CheckedIn);
        assert!(ticket.has_extra_baggage);
        assert!(!ticket.has_meal_service);
    }

    #[test]
    fn only_booked_tickets_allow_actions() {
        assert!(TicketStatus::Booked.can_cancel());
        assert!(TicketStatus::Booked.can_check_in());
        assert!(!TicketStatus::Cancelled.can_cancel());
        assert!(!TicketStatus::CheckedIn.can_check_in());
        assert!(!TicketStatus::Completed.can_cancel());
    }
}
