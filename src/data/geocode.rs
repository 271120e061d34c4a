//! Nominatim geocoding client
//!
//! Resolves free-text search queries into named coordinates using the
//! OpenStreetMap Nominatim API. Results are cached on disk (the API is
//! rate-limited and requires a User-Agent header), cache-first with graceful
//! degradation to expired entries when the network is unavailable.

use crate::cache::{slugify_key, CacheManager};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Time-to-live for geocode cache entries in hours
const CACHE_TTL_HOURS: u64 = 24;

/// Maximum number of results requested per query
const RESULT_LIMIT: u32 = 10;

/// User-Agent sent with every request (required by Nominatim's usage policy)
const USER_AGENT: &str = "envsafe-cli";

/// Errors that can occur when geocoding a query
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Failed to parse API response
    #[error("Failed to parse API response: {0}")]
    ParseError(String),
}

/// A single geocoding hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Full display name of the place
    pub name: String,
    /// Latitude coordinate
    pub lat: f64,
    /// Longitude coordinate
    pub lng: f64,
    /// Place type reported by the API (e.g. "city", "village")
    pub kind: String,
    /// Relative importance ranking (0-1), if provided
    pub importance: Option<f64>,
}

/// A raw place entry as returned by Nominatim
///
/// Nominatim returns coordinates as strings, not numbers.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    display_name: Option<String>,
    lat: Option<String>,
    lon: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    importance: Option<f64>,
}

/// Client for resolving search queries via the Nominatim API
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Cache manager for persisting responses
    cache_manager: Option<CacheManager>,
    /// Base URL for the API (allows override for testing)
    base_url: String,
}

impl Default for GeocodeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GeocodeClient {
    /// Creates a new GeocodeClient with default configuration
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
            cache_manager: CacheManager::new(),
            base_url: "https://nominatim.openstreetmap.org/search".to_string(),
        }
    }

    /// Creates a new GeocodeClient with a custom cache manager
    pub fn with_cache(cache_manager: CacheManager) -> Self {
        Self {
            cache_manager: Some(cache_manager),
            ..Self::new()
        }
    }

    /// Overrides the API base URL (for testing)
    #[cfg(test)]
    fn base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Generates a cache key for a search query
    fn cache_key(query: &str) -> String {
        format!("search_{}", slugify_key(query))
    }

    /// Resolves a free-text query into a list of named coordinates
    ///
    /// # Arguments
    /// * `query` - The search text, e.g. "bangalore" or "rue de rivoli, paris"
    ///
    /// # Returns
    /// * `Ok(Vec<SearchResult>)` - Matching places, best match first
    /// * `Err(GeocodeError)` - If the request fails and no cached data exists
    ///
    /// # Behavior
    /// - First checks cache for fresh data
    /// - If cache is fresh, returns cached data
    /// - If cache is expired or missing, fetches from the API
    /// - On API failure, returns expired cache data if available
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, GeocodeError> {
        let cache_key = Self::cache_key(query);

        if let Some(ref cache_manager) = self.cache_manager {
            if let Some(cached) = cache_manager.read::<Vec<SearchResult>>(&cache_key) {
                if !cached.is_expired {
                    return Ok(cached.data);
                }
            }
        }

        match self.fetch_from_api(query).await {
            Ok(results) => {
                if let Some(ref cache_manager) = self.cache_manager {
                    let _ = cache_manager.write(&cache_key, &results, CACHE_TTL_HOURS);
                }
                Ok(results)
            }
            Err(api_error) => {
                if let Some(ref cache_manager) = self.cache_manager {
                    if let Some(cached) = cache_manager.read::<Vec<SearchResult>>(&cache_key) {
                        return Ok(cached.data);
                    }
                }
                Err(api_error)
            }
        }
    }

    /// Fetches search results directly from the API
    async fn fetch_from_api(&self, query: &str) -> Result<Vec<SearchResult>, GeocodeError> {
        let response = self
            .http_client
            .get(&self.base_url)
            .query(&[
                ("q", query),
                ("format", "json"),
                ("limit", &RESULT_LIMIT.to_string()),
                ("addressdetails", "1"),
            ])
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await?;

        let text = response.text().await?;
        parse_results(&text)
    }
}

/// Parses the raw Nominatim JSON array into search results
///
/// Entries without coordinates are skipped; entries with malformed
/// coordinates are an error.
fn parse_results(body: &str) -> Result<Vec<SearchResult>, GeocodeError> {
    let places: Vec<NominatimPlace> = serde_json::from_str(body)
        .map_err(|e| GeocodeError::ParseError(format!("Invalid response body: {}", e)))?;

    let mut results = Vec::with_capacity(places.len());
    for place in places {
        let (Some(lat_str), Some(lon_str)) = (place.lat, place.lon) else {
            continue;
        };
        let lat: f64 = lat_str
            .parse()
            .map_err(|_| GeocodeError::ParseError(format!("Invalid latitude: {}", lat_str)))?;
        let lng: f64 = lon_str
            .parse()
            .map_err(|_| GeocodeError::ParseError(format!("Invalid longitude: {}", lon_str)))?;

        results.push(SearchResult {
            name: place.display_name.unwrap_or_default(),
            lat,
            lng,
            kind: place.kind.unwrap_or_default(),
            importance: place.importance,
        });
    }

    Ok(results)
}
