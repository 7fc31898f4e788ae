/// SerpApi Google Flights client

use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;
use trip_core::TripRequest;

use super::traits::FlightSearch;

/// Round-trip search parameters sent to the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightSearchQuery {
    pub origin: String,
    pub destination: String,
    pub outbound_date: NaiveDate,
    pub return_date: NaiveDate,
    pub locale: String,
}

impl FlightSearchQuery {
    pub fn for_trip(request: &TripRequest, locale: &str) -> Self {
        Self {
            origin: request.origin.clone(),
            destination: request.destination.clone(),
            outbound_date: request.departure_date,
            return_date: request.return_date,
            locale: locale.to_string(),
        }
    }

    /// Query string pairs, excluding the API key
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("engine", "google_flights".to_string()),
            ("departure_id", self.origin.clone()),
            ("arrival_id", self.destination.clone()),
            ("outbound_date", self.outbound_date.to_string()),
            ("return_date", self.return_date.to_string()),
            ("hl", self.locale.clone()),
        ]
    }
}

pub struct SerpApiClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl SerpApiClient {
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            api_key,
            base_url,
            client,
        })
    }
}

#[async_trait]
impl FlightSearch for SerpApiClient {
    async fn search(&self, query: &FlightSearchQuery) -> Result<Value> {
        let mut params = query.params();
        params.push(("api_key", self.api_key.clone()));

        let response = self
            .client
            .get(&self.base_url)
            .query(&params)
            .send()
            .await
            .context("Failed to send flight search request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            bail!("Flight search API error {}: {}", status, body);
        }

        let payload: Value = response
            .json()
            .await
            .context("Failed to parse flight search response")?;

        // The provider reports "no results" this way too, so it is not a failure
        if let Some(message) = payload.get("error").and_then(Value::as_str) {
            tracing::warn!("[FLIGHTS] Provider returned an error payload: {}", message);
        }

        Ok(payload)
    }
}
