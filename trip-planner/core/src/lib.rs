/// Trip planning core
/// Flight offer normalization, trip request model and prompt assembly.
/// Everything here is pure: provider calls live in trip-client.

pub mod airports;
pub mod flights;
pub mod prompts;
pub mod request;

pub use airports::{find_airport, is_valid_iata, Airport, AIRPORTS};
pub use flights::{
    format_datetime, format_timestamp, parse_timestamp, select_cheapest_offers, FlightOffer,
    DEFAULT_OFFER_LIMIT, NOT_AVAILABLE, UNKNOWN_AIRLINE,
};
pub use prompts::{build_hotel_prompt, build_itinerary_prompt, build_research_prompt, PromptStage};
pub use request::{
    BudgetTier, FlightClass, HotelRating, ParseOptionError, TravelTheme, TripRequest,
    TripRequestError, DEFAULT_ACTIVITIES, DEFAULT_TRIP_DAYS,
};
