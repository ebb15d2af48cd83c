//! Urban Dictionary lookup client

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::application::errors::{BotError, LookupError};
use crate::domain::entities::{CommandType, LookupFailure, LookupResult};
use crate::domain::traits::TermLookup;

/// Body of a `define` response
#[derive(Debug, Deserialize)]
struct DefineResponse {
    list: Option<Vec<DefinitionEntry>>,
}

/// One entry of the results list
#[derive(Debug, Clone, Deserialize)]
pub struct DefinitionEntry {
    pub word: String,
    #[serde(default)]
    pub definition: String,
    #[serde(default)]
    pub example: String,
}

impl DefinitionEntry {
    fn field(self, kind: CommandType) -> String {
        match kind {
            CommandType::Definition => self.definition,
            CommandType::Example => self.example,
        }
    }
}

fn parse_body(body: &str) -> Result<DefineResponse, LookupError> {
    serde_json::from_str(body).map_err(|e| LookupError::Malformed(e.to_string()))
}

/// Classify a raw response body.
///
/// A body without the `list` field, or one that does not parse, is
/// reported as [`LookupFailure::ServiceUnavailable`]; upstream rate limiting
/// shows up the same way. An empty list means there is no definition.
pub fn classify_body(body: &str, kind: CommandType) -> LookupResult {
    let response = match parse_body(body) {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!("{}, payload: {}", e, body);
            return LookupResult::Failure(LookupFailure::ServiceUnavailable);
        }
    };

    let Some(list) = response.list else {
        tracing::warn!("Lookup response without results, likely rate limited: {}", body);
        return LookupResult::Failure(LookupFailure::ServiceUnavailable);
    };

    // First entry is the best rated one
    match list.into_iter().next() {
        Some(best) => {
            let word = best.word.clone();
            LookupResult::Success {
                text: best.field(kind),
                word,
            }
        }
        None => LookupResult::Failure(LookupFailure::NoDefinition),
    }
}

/// HTTP client for the `define` endpoint
pub struct UrbanDictionaryClient {
    client: Client,
    endpoint: String,
}

impl UrbanDictionaryClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, BotError> {
        let client = Client::builder()
            .user_agent(concat!("urban-bot/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| BotError::Network(e.to_string()))?;

        Ok(Self::with_client(client, endpoint))
    }

    /// Use a preconfigured HTTP client
    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    async fn request(&self, term: &str) -> Result<String, LookupError> {
        let response = self.client
            .get(&self.endpoint)
            .query(&[("term", term)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Lookup for '{}' returned HTTP {}", term, status);
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl TermLookup for UrbanDictionaryClient {
    async fn fetch(&self, term: &str, kind: CommandType) -> LookupResult {
        match self.request(term).await {
            Ok(body) => classify_body(&body, kind),
            Err(e) => {
                tracing::warn!("Lookup for '{}' failed: {}", term, e);
                LookupResult::Failure(LookupFailure::ServiceUnavailable)
            }
        }
    }
}
