//! OMDb HTTP implementation of `MetadataClient`.
//!
//! One GET per question, query-string keyed (`s=` for search, `t=`/`y=` for
//! exact lookup). The upstream signals misses in-band with
//! `"Response": "False"`, and "no poster" with the literal string `"N/A"`.

use std::env;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{info, warn};

use super::{MetadataClient, MovieSummary};

const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com";

// ============================================================================
// Config
// ============================================================================

#[derive(Debug, Clone)]
pub struct MetadataConfig {
    pub api_key: String,
    pub base_url: String,
}

impl MetadataConfig {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Read configuration from the environment, logging defaults.
    pub fn from_env() -> Self {
        let api_key = env::var("OMDB_API_KEY").unwrap_or_else(|_| {
            warn!("OMDB_API_KEY not set, metadata lookups will come back not-found");
            String::new()
        });
        let base_url = env::var("OMDB_BASE_URL").unwrap_or_else(|_| {
            info!("OMDB_BASE_URL not set, using default: {DEFAULT_BASE_URL}");
            DEFAULT_BASE_URL.to_string()
        });
        Self { api_key, base_url }
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Search", default)]
    search: Vec<MovieHit>,
}

#[derive(Debug, Deserialize)]
struct MovieHit {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Year", default)]
    year: String,
    #[serde(rename = "Poster", default)]
    poster: String,
}

#[derive(Debug, Deserialize)]
struct TitleResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Title", default)]
    title: String,
    #[serde(rename = "Year", default)]
    year: String,
    #[serde(rename = "Poster", default)]
    poster: String,
}

fn poster_or_none(poster: String) -> Option<String> {
    if poster.is_empty() || poster == "N/A" {
        None
    } else {
        Some(poster)
    }
}

// ============================================================================
// OmdbClient
// ============================================================================

pub struct OmdbClient {
    http: reqwest::Client,
    config: MetadataConfig,
}

impl OmdbClient {
    pub fn new(config: MetadataConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(MetadataConfig::from_env())
    }

    async fn search_request(&self, query: &str) -> Result<SearchResponse, reqwest::Error> {
        self.http
            .get(format!("{}/", self.config.base_url))
            .query(&[("apikey", self.config.api_key.as_str()), ("s", query)])
            .send()
            .await?
            .json()
            .await
    }

    async fn title_request(
        &self,
        title: &str,
        year: Option<&str>,
    ) -> Result<TitleResponse, reqwest::Error> {
        let mut params = vec![("apikey", self.config.api_key.as_str()), ("t", title)];
        if let Some(year) = year {
            params.push(("y", year));
        }
        self.http
            .get(format!("{}/", self.config.base_url))
            .query(&params)
            .send()
            .await?
            .json()
            .await
    }
}

#[async_trait]
impl MetadataClient for OmdbClient {
    async fn search(&self, query: &str) -> Option<Vec<MovieSummary>> {
        let body = match self.search_request(query).await {
            Ok(body) => body,
            Err(e) => {
                warn!(query, error = %e, "metadata search failed");
                return None;
            }
        };
        if body.response != "True" {
            return None;
        }
        Some(
            body.search
                .into_iter()
                .map(|hit| MovieSummary {
                    title: hit.title,
                    year: hit.year,
                    poster: poster_or_none(hit.poster),
                })
                .collect(),
        )
    }

    async fn find(&self, title: &str, year: Option<&str>) -> Option<MovieSummary> {
        let body = match self.title_request(title, year).await {
            Ok(body) => body,
            Err(e) => {
                warn!(title, error = %e, "metadata lookup failed");
                return None;
            }
        };
        if body.response != "True" {
            return None;
        }
        Some(MovieSummary {
            title: body.title,
            year: body.year,
            poster: poster_or_none(body.poster),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
