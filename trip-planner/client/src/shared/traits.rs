// Provider traits
//
// Infrastructure only: the pipeline in orchestration.rs depends on these,
// tests swap in in-memory implementations.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use super::serpapi::FlightSearchQuery;

#[async_trait]
pub trait FlightSearch: Send + Sync {
    /// Run one search and return the provider payload untouched
    async fn search(&self, query: &FlightSearchQuery) -> Result<Value>;
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for `prompt` under a fixed instruction preamble
    async fn generate(&self, instructions: &str, prompt: &str) -> Result<String>;
}
