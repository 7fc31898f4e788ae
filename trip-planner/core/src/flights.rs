/// Flight offer normalization
/// Turns the loosely-typed search provider payload into ranked `FlightOffer`s.
/// Every field has a documented fallback, so nothing in here can fail.

use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::Value;

/// Number of offers kept when the caller does not ask for a specific limit
pub const DEFAULT_OFFER_LIMIT: usize = 3;

pub const UNKNOWN_AIRLINE: &str = "Unknown Airline";

/// Display sentinel for timestamps that cannot be parsed and prices that are missing
pub const NOT_AVAILABLE: &str = "N/A";

/// Format the provider uses for leg departure/arrival times
pub const PROVIDER_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// e.g. "Mar-14, 2025 | 09:30 AM"
pub const DISPLAY_TIME_FORMAT: &str = "%b-%d, %Y | %I:%M %p";

/// A single priced itinerary, normalized from one `best_flights` entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightOffer {
    pub airline: String,
    /// Non-negative when present. `None` ranks after every priced offer.
    pub price: Option<f64>,
    /// First leg's departure
    pub departure: Option<NaiveDateTime>,
    /// Last leg's arrival
    pub arrival: Option<NaiveDateTime>,
    pub logo_url: String,
    pub stops: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_duration_minutes: Option<u64>,
}

impl FlightOffer {
    /// Normalize one raw offer record
    pub fn from_raw(raw: &Value) -> Self {
        let legs: &[Value] = raw
            .get("flights")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        let first_leg = legs.first();
        let last_leg = legs.last();

        let airline = first_leg
            .and_then(|leg| leg.get("airline"))
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_AIRLINE)
            .to_string();

        // Negative or non-numeric prices are treated the same as a missing price
        let price = raw
            .get("price")
            .and_then(Value::as_f64)
            .filter(|price| price.is_finite() && *price >= 0.0);

        let logo_url = raw
            .get("airline_logo")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        Self {
            airline,
            price,
            departure: first_leg.and_then(|leg| leg_time(leg, "departure_airport")),
            arrival: last_leg.and_then(|leg| leg_time(leg, "arrival_airport")),
            logo_url,
            stops: legs.len().saturating_sub(1),
            total_duration_minutes: raw.get("total_duration").and_then(Value::as_u64),
        }
    }

    /// Sort key: missing prices compare as +infinity
    pub fn ranking_price(&self) -> f64 {
        self.price.unwrap_or(f64::INFINITY)
    }

    /// Price for display. Never renders infinity.
    pub fn price_display(&self) -> String {
        match self.price {
            Some(price) if price.fract() == 0.0 => format!("{:.0}", price),
            Some(price) => format!("{:.2}", price),
            None => NOT_AVAILABLE.to_string(),
        }
    }

    pub fn departure_display(&self) -> String {
        format_datetime(self.departure)
    }

    pub fn arrival_display(&self) -> String {
        format_datetime(self.arrival)
    }
}

fn leg_time(leg: &Value, airport_key: &str) -> Option<NaiveDateTime> {
    let time = leg.get(airport_key)?.get("time")?;
    let parsed = parse_timestamp(time.as_str());
    if parsed.is_none() {
        tracing::debug!("[FLIGHTS] Ignoring malformed {} time: {}", airport_key, time);
    }
    parsed
}

/// Pick the `limit` cheapest offers from a raw search response.
///
/// A missing or non-array `best_flights` yields an empty list. The sort is stable,
/// so offers with equal prices keep the provider's order.
pub fn select_cheapest_offers(raw_response: &Value, limit: usize) -> Vec<FlightOffer> {
    let Some(candidates) = raw_response.get("best_flights").and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut offers: Vec<FlightOffer> = candidates.iter().map(FlightOffer::from_raw).collect();
    offers.sort_by(|a, b| a.ranking_price().total_cmp(&b.ranking_price()));
    offers.truncate(limit);
    offers
}

/// Parse a provider timestamp ("YYYY-MM-DD HH:MM")
pub fn parse_timestamp(raw: Option<&str>) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw?, PROVIDER_TIME_FORMAT).ok()
}

/// Reformat a provider timestamp for display, or "N/A" if it cannot be parsed
pub fn format_timestamp(raw: Option<&str>) -> String {
    format_datetime(parse_timestamp(raw))
}

pub fn format_datetime(value: Option<NaiveDateTime>) -> String {
    value
        .map(|dt| dt.format(DISPLAY_TIME_FORMAT).to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
