//! Flight search wire models.

use serde::{Deserialize, Serialize};

/// Search form input: origin/destination IATA codes plus a date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightQuery {
    pub origin: String,
    pub destination: String,
    /// ISO date, e.g. "2026-03-14".
    pub date: String,
}

impl FlightQuery {
    /// The search button stays disabled until all three fields are set.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.origin.is_empty() && !self.destination.is_empty() && !self.date.is_empty()
    }
}

/// One flight as returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightSearchResult {
    pub flight_id: i64,
    /// Short codes, e.g. "IST" / "ESB".
    pub origin: String,
    pub destination: String,
    #[serde(default)]
    pub origin_airport_name: Option<String>,
    #[serde(default)]
    pub destination_airport_name: Option<String>,
    #[serde(default)]
    pub departure_time: Option<String>,
    #[serde(default)]
    pub arrival_time: Option<String>,
    #[serde(default)]
    pub plane_model: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl FlightSearchResult {
    /// "IST → ESB"
    #[must_use]
    pub fn route_label(&self) -> String {
        format!("{} → {}", self.origin, self.destination)
    }

    /// Date and time parts of the departure timestamp for display.
    #[must_use]
    pub fn departure_parts(&self) -> (String, String) {
        self.departure_time
            .as_deref()
            .map_or_else(|| (String::new(), String::new()), split_datetime)
    }
}

/// Split an ISO-ish timestamp ("2026-03-14T09:30:00" or with a space)
/// into a date part and an HH:MM time part.
#[must_use]
pub fn split_datetime(value: &str) -> (String, String) {
    let mut parts = if value.contains('T') {
        value.splitn(2, 'T')
    } else {
        value.splitn(2, ' ')
    };
    let date = parts.next().unwrap_or_default().to_string();
    let time: String = parts.next().unwrap_or_default().chars().take(5).collect();
    (date, time)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_completeness_gates_search() {
        let mut query = FlightQuery::default();
        assert!(!query.is_complete());
        query.origin = "IST".to_string();
        query.destination = "ESB".to_string();
        assert!(!query.is_complete());
        query.date = "2026-03-14".to_string();
        assert!(query.is_complete());
    }

    #[test]
    fn split_datetime_handles_both_separators() {
        assert_eq!(
            split_datetime("2026-03-14T09:30:00"),
            ("2026-03-14".to_string(), "09:30".to_string())
        );
        assert_eq!(
            split_datetime("2026-03-14 09:30:00"),
            ("2026-03-14".to_string(), "09:30".to_string())
        );
        assert_eq!(split_datetime("2026-03-14"), ("2026-03-14".to_string(), String::new()));
    }

    #[test]
    fn search_result_parses_with_missing_optionals() {
        let json = r#"{
            "flightId": 42,
            "origin": "IST",
            "destination": "ESB",
            "departureTime": "2026-03-14T09:30:00"
        }"#;
        let flight: FlightSearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(flight.route_label(), "IST → ESB");
        assert_eq!(
            flight.departure_parts(),
            ("2026-03-14".to_string(), "09:30".to_string())
        );
        assert!(flight.price.is_none());
    }
}
