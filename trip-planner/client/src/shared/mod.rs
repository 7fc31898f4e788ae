/// External provider integrations
/// Flight search (SerpApi) and text generation (Gemini) behind small traits

pub mod gemini;
pub mod serpapi;
pub mod traits;

pub use gemini::GeminiClient;
pub use serpapi::{FlightSearchQuery, SerpApiClient};
pub use traits::{FlightSearch, TextGenerator};
