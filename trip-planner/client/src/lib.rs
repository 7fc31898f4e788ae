/// Trip planner client library
/// Provider clients, the plan pipeline and the presentation surfaces built on trip-core

pub mod api;
pub mod logging;
pub mod orchestration;
pub mod render;
pub mod shared;

pub use orchestration::{Planner, PlannerConfig, TravelPlan};
pub use render::{FlightCard, PlanView};
pub use shared::{FlightSearch, FlightSearchQuery, GeminiClient, SerpApiClient, TextGenerator};
