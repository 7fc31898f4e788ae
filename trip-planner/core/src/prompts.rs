/// Prompt assembly for the three text-generation stages
/// Research and lodging run first and independently; the itinerary prompt
/// folds their output together with the selected flights.

use crate::flights::FlightOffer;
use crate::request::TripRequest;

pub const RESEARCH_INSTRUCTIONS: &str = "You are an expert Travel Researcher.
Gather information on:
- climate
- culture
- safety
- top attractions
- ideal activities
Provide structured insights.";

pub const LODGING_INSTRUCTIONS: &str = "You specialize in finding:
- best hotels
- best restaurants
Consider budget, rating, style.
Provide clear recommendations.";

pub const ITINERARY_INSTRUCTIONS: &str = "You are a travel itinerary creator.
Generate a detailed, day-wise plan including timings, food, transport, and costs.";

const NO_PREFERENCE: &str = "no particular preference";

/// One generation call and its fixed instruction preamble
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStage {
    Research,
    Lodging,
    Itinerary,
}

impl PromptStage {
    pub fn instructions(&self) -> &'static str {
        match self {
            PromptStage::Research => RESEARCH_INSTRUCTIONS,
            PromptStage::Lodging => LODGING_INSTRUCTIONS,
            PromptStage::Itinerary => ITINERARY_INSTRUCTIONS,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PromptStage::Research => "research",
            PromptStage::Lodging => "lodging",
            PromptStage::Itinerary => "itinerary",
        }
    }
}

fn activities(request: &TripRequest) -> &str {
    let trimmed = request.activities.trim();
    if trimmed.is_empty() {
        NO_PREFERENCE
    } else {
        trimmed
    }
}

pub fn build_research_prompt(request: &TripRequest) -> String {
    format!(
        "Research {} for a {}-day {} trip. Activities: {}. Budget: {}. Hotel Rating: {}.",
        request.destination_name(),
        request.trip_days,
        request.theme,
        activities(request),
        request.budget,
        request.hotel_rating,
    )
}

pub fn build_hotel_prompt(request: &TripRequest) -> String {
    format!(
        "Find top hotels and restaurants in {}. Budget: {}. Rating: {}. Activities: {}.",
        request.destination_name(),
        request.budget,
        request.hotel_rating,
        activities(request),
    )
}

/// Final planning prompt. Flights are embedded as JSON so the model sees exact
/// prices and times; the output depends only on the arguments.
pub fn build_itinerary_prompt(
    request: &TripRequest,
    offers: &[FlightOffer],
    hotel_text: &str,
    research_text: &str,
) -> String {
    let flights = serde_json::to_string(offers).unwrap_or_else(|_| "[]".to_string());

    format!(
        "Create a {}-day itinerary for a {}. Destination: {}. Activities: {}. \
         Budget: {}. Flight Class: {}. Flights: {}. \
         HotelSuggestions: {}. Research: {}.",
        request.trip_days,
        request.theme,
        request.destination_name(),
        activities(request),
        request.budget,
        request.flight_class,
        flights,
        hotel_text.trim(),
        research_text.trim(),
    )
}
