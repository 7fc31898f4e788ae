/// Plan orchestration
/// Runs one trip request through the providers:
/// - flight search and offer selection
/// - destination research and lodging suggestions (concurrently)
/// - itinerary generation from everything gathered so far

use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use trip_core::{
    build_hotel_prompt, build_itinerary_prompt, build_research_prompt, select_cheapest_offers,
    FlightOffer, PromptStage, TripRequest, DEFAULT_OFFER_LIMIT,
};

use crate::shared::{FlightSearch, FlightSearchQuery, GeminiClient, SerpApiClient, TextGenerator};

pub const DEFAULT_SERPAPI_URL: &str = "https://serpapi.com/search.json";
pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_SEARCH_LOCALE: &str = "en";
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_HTTP_PORT: u16 = 3001;

/// Planner configuration
pub struct PlannerConfig {
    pub serpapi_key: String,
    pub google_api_key: String,
    pub serpapi_url: String,
    pub gemini_api_url: String,
    pub gemini_model: String,
    pub search_locale: String,
    pub provider_timeout: Duration,
    pub http_port: u16,
}

impl PlannerConfig {
    /// Read configuration from the process environment.
    /// Call `dotenv::dotenv()` first to pick up a local `.env` file.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup (the environment in production)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| anyhow!("{} environment variable not set", key))
        };
        let or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let serpapi_key = required("SERPAPI_KEY")?;
        let google_api_key = required("GOOGLE_API_KEY")?;

        let provider_timeout = parse_or_default(
            "PROVIDER_TIMEOUT_SECS",
            lookup("PROVIDER_TIMEOUT_SECS"),
            DEFAULT_PROVIDER_TIMEOUT_SECS,
        );
        let http_port = parse_or_default("PLANNER_HTTP_PORT", lookup("PLANNER_HTTP_PORT"), DEFAULT_HTTP_PORT);

        Ok(Self {
            serpapi_key,
            google_api_key,
            serpapi_url: or_default("SERPAPI_URL", DEFAULT_SERPAPI_URL),
            gemini_api_url: or_default("GEMINI_API_URL", DEFAULT_GEMINI_API_URL),
            gemini_model: or_default("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            search_locale: or_default("SEARCH_LOCALE", DEFAULT_SEARCH_LOCALE),
            provider_timeout: Duration::from_secs(provider_timeout),
            http_port,
        })
    }
}

fn parse_or_default<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!("[CONFIG] Ignoring invalid {}='{}', using {}", key, raw, default);
            default
        }
    }
}

/// Everything produced for one trip request
#[derive(Debug, Clone, Serialize)]
pub struct TravelPlan {
    pub headline: String,
    pub flights: Vec<FlightOffer>,
    pub research: String,
    pub lodging: String,
    pub itinerary: String,
}

/// Plan pipeline over a flight search provider and a text generator
#[derive(Clone)]
pub struct Planner {
    search: Arc<dyn FlightSearch>,
    generator: Arc<dyn TextGenerator>,
    locale: String,
    offer_limit: usize,
}

impl Planner {
    pub fn new(search: Arc<dyn FlightSearch>, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            search,
            generator,
            locale: DEFAULT_SEARCH_LOCALE.to_string(),
            offer_limit: DEFAULT_OFFER_LIMIT,
        }
    }

    /// Build a planner backed by SerpApi and Gemini
    pub fn from_config(config: &PlannerConfig) -> Result<Self> {
        let search = SerpApiClient::new(
            config.serpapi_key.clone(),
            config.serpapi_url.clone(),
            config.provider_timeout,
        )?;
        let generator = GeminiClient::new(
            config.google_api_key.clone(),
            config.gemini_api_url.clone(),
            config.gemini_model.clone(),
            config.provider_timeout,
        )?;

        Ok(Self::new(Arc::new(search), Arc::new(generator)).with_locale(&config.search_locale))
    }

    pub fn with_locale(mut self, locale: &str) -> Self {
        self.locale = locale.to_string();
        self
    }

    pub fn with_offer_limit(mut self, limit: usize) -> Self {
        self.offer_limit = limit;
        self
    }

    /// Run the full pipeline for one request.
    /// Provider failures are returned as errors; malformed provider data is not.
    pub async fn generate_plan(&self, request: &TripRequest) -> Result<TravelPlan> {
        request.validate()?;

        tracing::info!(
            "[FLIGHTS] Searching {} -> {} ({} to {})",
            request.origin,
            request.destination,
            request.departure_date,
            request.return_date
        );
        let query = FlightSearchQuery::for_trip(request, &self.locale);
        let raw_response = self
            .search
            .search(&query)
            .await
            .context("Flight search failed")?;
        let flights = select_cheapest_offers(&raw_response, self.offer_limit);
        tracing::info!("[FLIGHTS] Selected {} offer(s)", flights.len());

        let research_prompt = build_research_prompt(request);
        let hotel_prompt = build_hotel_prompt(request);
        let (research, lodging) = tokio::try_join!(
            self.run_stage(PromptStage::Research, &research_prompt),
            self.run_stage(PromptStage::Lodging, &hotel_prompt),
        )?;

        let itinerary_prompt = build_itinerary_prompt(request, &flights, &lodging, &research);
        let itinerary = self
            .run_stage(PromptStage::Itinerary, &itinerary_prompt)
            .await?;

        Ok(TravelPlan {
            headline: request.headline(),
            flights,
            research,
            lodging,
            itinerary,
        })
    }

    async fn run_stage(&self, stage: PromptStage, prompt: &str) -> Result<String> {
        tracing::info!(
            "[{}] Generating (prompt length: {})",
            stage.name().to_uppercase(),
            prompt.len()
        );
        let text = self
            .generator
            .generate(stage.instructions(), prompt)
            .await
            .with_context(|| format!("{} generation failed", stage.name()))?;
        tracing::debug!("[{}] Received {} chars", stage.name().to_uppercase(), text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<PlannerConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        PlannerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn missing_serpapi_key_is_named() {
        let err = config_from(&[("GOOGLE_API_KEY", "g")]).err().unwrap();
        assert!(err.to_string().contains("SERPAPI_KEY"));
    }

    #[test]
    fn missing_google_key_is_named() {
        let err = config_from(&[("SERPAPI_KEY", "s")]).err().unwrap();
        assert!(err.to_string().contains("GOOGLE_API_KEY"));
    }

    #[test]
    fn defaults_apply_when_only_keys_are_set() {
        let config = config_from(&[("SERPAPI_KEY", "s"), ("GOOGLE_API_KEY", "g")]).unwrap();
        assert_eq!(config.serpapi_key, "s");
        assert_eq!(config.google_api_key, "g");
        assert_eq!(config.serpapi_url, DEFAULT_SERPAPI_URL);
        assert_eq!(config.gemini_api_url, DEFAULT_GEMINI_API_URL);
        assert_eq!(config.gemini_model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.search_locale, DEFAULT_SEARCH_LOCALE);
        assert_eq!(config.provider_timeout, Duration::from_secs(DEFAULT_PROVIDER_TIMEOUT_SECS));
        assert_eq!(config.http_port, DEFAULT_HTTP_PORT);
    }

    #[test]
    fn overrides_are_read() {
        let config = config_from(&[
            ("SERPAPI_KEY", "s"),
            ("GOOGLE_API_KEY", "g"),
            ("GEMINI_MODEL", "gemini-2.5-pro"),
            ("SEARCH_LOCALE", "de"),
            ("PROVIDER_TIMEOUT_SECS", "15"),
            ("PLANNER_HTTP_PORT", "8080"),
        ])
        .unwrap();
        assert_eq!(config.gemini_model, "gemini-2.5-pro");
        assert_eq!(config.search_locale, "de");
        assert_eq!(config.provider_timeout, Duration::from_secs(15));
        assert_eq!(config.http_port, 8080);
    }

    #[test]
    fn unparsable_numbers_fall_back_to_defaults() {
        let config = config_from(&[
            ("SERPAPI_KEY", "s"),
            ("GOOGLE_API_KEY", "g"),
            ("PROVIDER_TIMEOUT_SECS", "sixty"),
            ("PLANNER_HTTP_PORT", "99999"),
        ])
        .unwrap();
        assert_eq!(config.provider_timeout, Duration::from_secs(DEFAULT_PROVIDER_TIMEOUT_SECS));
        assert_eq!(config.http_port, DEFAULT_HTTP_PORT);
    }
}
