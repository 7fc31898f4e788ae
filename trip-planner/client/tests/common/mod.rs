/// In-memory providers and fixtures for client tests

use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::{json, Value};
use trip_client::{FlightSearch, FlightSearchQuery, Planner, TextGenerator};
use trip_core::{BudgetTier, FlightClass, HotelRating, PromptStage, TravelTheme, TripRequest};

pub struct FakeSearch {
    response: Result<Value, String>,
    pub queries: Mutex<Vec<FlightSearchQuery>>,
}

impl FakeSearch {
    pub fn returning(response: Value) -> Self {
        Self {
            response: Ok(response),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            queries: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl FlightSearch for FakeSearch {
    async fn search(&self, query: &FlightSearchQuery) -> Result<Value> {
        self.queries.lock().unwrap().push(query.clone());
        self.response.clone().map_err(|message| anyhow!(message))
    }
}

/// Answers each stage with a canned reply and records every call
pub struct FakeGenerator {
    failing_stage: Option<PromptStage>,
    pub calls: Mutex<Vec<(PromptStage, String)>>,
}

impl FakeGenerator {
    pub fn new() -> Self {
        Self {
            failing_stage: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_at(stage: PromptStage) -> Self {
        Self {
            failing_stage: Some(stage),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn prompt_for(&self, stage: PromptStage) -> Option<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .find(|(called, _)| *called == stage)
            .map(|(_, prompt)| prompt.clone())
    }
}

pub fn canned_reply(stage: PromptStage) -> &'static str {
    match stage {
        PromptStage::Research => "Sunny, safe, great beaches.",
        PromptStage::Lodging => "Stay at Galle Face Hotel, eat at Ministry of Crab.",
        PromptStage::Itinerary => "Day 1: Arrive and relax.",
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, instructions: &str, prompt: &str) -> Result<String> {
        let stage = [PromptStage::Research, PromptStage::Lodging, PromptStage::Itinerary]
            .into_iter()
            .find(|stage| stage.instructions() == instructions)
            .ok_or_else(|| anyhow!("unexpected instructions"))?;

        self.calls.lock().unwrap().push((stage, prompt.to_string()));
        if self.failing_stage == Some(stage) {
            return Err(anyhow!("quota exceeded"));
        }
        Ok(canned_reply(stage).to_string())
    }
}

pub fn planner(search: Arc<FakeSearch>, generator: Arc<FakeGenerator>) -> Planner {
    Planner::new(search, generator)
}

pub fn trip() -> TripRequest {
    TripRequest {
        origin: "LHR".to_string(),
        destination: "CMB".to_string(),
        trip_days: 5,
        theme: TravelTheme::CoupleGetaway,
        activities: "Relaxing on the beach, exploring historical sites".to_string(),
        budget: BudgetTier::Standard,
        flight_class: FlightClass::Economy,
        hotel_rating: HotelRating::FourStar,
        departure_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        return_date: NaiveDate::from_ymd_opt(2025, 6, 6).unwrap(),
    }
}

pub fn search_payload() -> Value {
    json!({
        "search_metadata": {"status": "Success"},
        "best_flights": [
            {"price": 500, "airline_logo": "https://logos.example.com/a.png",
             "flights": [{"airline": "Air A", "departure_airport": {"time": "2025-06-01 10:00"}, "arrival_airport": {"time": "2025-06-01 22:10"}}]},
            {"price": 300, "airline_logo": "https://logos.example.com/b.png",
             "flights": [{"airline": "Air B", "departure_airport": {"time": "2025-06-01 08:00"}, "arrival_airport": {"time": "2025-06-01 20:40"}}]},
            {"flights": [{"airline": "Air C"}]},
            {"price": 420, "flights": [{"airline": "Air D"}]}
        ]
    })
}
