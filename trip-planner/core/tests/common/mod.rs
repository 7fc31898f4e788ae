/// Shared fixtures for normalizer tests

use serde_json::{json, Value};

/// One raw `best_flights` entry with a single leg
pub fn raw_offer(airline: &str, price: Option<f64>, departs: &str, arrives: &str) -> Value {
    let mut offer = json!({
        "airline_logo": format!("https://logos.example.com/{}.png", airline.replace(' ', "_")),
        "flights": [{
            "airline": airline,
            "departure_airport": {"time": departs},
            "arrival_airport": {"time": arrives}
        }]
    });
    if let Some(price) = price {
        offer["price"] = json!(price);
    }
    offer
}

pub fn search_response(offers: Vec<Value>) -> Value {
    json!({
        "search_metadata": {"status": "Success"},
        "best_flights": offers
    })
}
