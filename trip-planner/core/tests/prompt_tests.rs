/// Itinerary prompt assembly against normalized offers

mod common;

use chrono::NaiveDate;
use common::{raw_offer, search_response};
use trip_core::{
    build_itinerary_prompt, select_cheapest_offers, BudgetTier, FlightClass, HotelRating,
    TravelTheme, TripRequest,
};

fn trip() -> TripRequest {
    TripRequest {
        origin: "JFK".to_string(),
        destination: "LHR".to_string(),
        trip_days: 6,
        theme: TravelTheme::SoloExploration,
        activities: "Museums, pubs".to_string(),
        budget: BudgetTier::Standard,
        flight_class: FlightClass::Economy,
        hotel_rating: HotelRating::ThreeStar,
        departure_date: NaiveDate::from_ymd_opt(2025, 10, 3).unwrap(),
        return_date: NaiveDate::from_ymd_opt(2025, 10, 9).unwrap(),
    }
}

#[test]
fn test_itinerary_prompt_is_deterministic() {
    let raw = search_response(vec![
        raw_offer("British Airways", Some(640.0), "2025-10-03 18:30", "2025-10-04 06:40"),
        raw_offer("Virgin Atlantic", Some(598.0), "2025-10-03 19:10", "2025-10-04 07:20"),
    ]);
    let offers = select_cheapest_offers(&raw, 3);

    let first = build_itinerary_prompt(&trip(), &offers, "Hotels text", "Research text");
    let second = build_itinerary_prompt(&trip(), &offers, "Hotels text", "Research text");
    assert_eq!(first, second);
}

#[test]
fn test_itinerary_prompt_lists_offers_in_ranked_order() {
    let raw = search_response(vec![
        raw_offer("British Airways", Some(640.0), "2025-10-03 18:30", "2025-10-04 06:40"),
        raw_offer("Virgin Atlantic", Some(598.0), "2025-10-03 19:10", "2025-10-04 07:20"),
    ]);
    let offers = select_cheapest_offers(&raw, 3);
    let prompt = build_itinerary_prompt(&trip(), &offers, "", "");

    let virgin = prompt.find("Virgin Atlantic").unwrap();
    let british = prompt.find("British Airways").unwrap();
    assert!(virgin < british);
    assert!(prompt.contains("Destination: London, UK (LHR)."));
    assert!(prompt.contains("Budget: Standard. Flight Class: Economy."));
}

#[test]
fn test_unpriced_offer_serializes_as_null() {
    let raw = search_response(vec![raw_offer("Mystery Air", None, "bad", "bad")]);
    let offers = select_cheapest_offers(&raw, 3);
    let prompt = build_itinerary_prompt(&trip(), &offers, "", "");

    assert!(prompt.contains("\"price\":null"));
    assert!(prompt.contains("\"departure\":null"));
}
