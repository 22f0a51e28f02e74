// ABOUTME: Data contract for the conditional-GET cache layer that serves stored forecasts
// ABOUTME: Cache status, response envelope, endpoint keys, and strong ETag computation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Transport Contract
//!
//! The engine does not fetch anything itself. Consumers that load previously
//! generated forecasts from a server go through a [`ConditionalFetch`]
//! implementation, which must hand engine types back unchanged. Every engine
//! output type is plain JSON, so it round-trips through such a layer.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use rtf_core::errors::EngineResult;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Default freshness window for cached forecasts
pub const DEFAULT_FORECAST_MAX_AGE_SECS: u64 = 300;

/// How a conditional GET was satisfied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheStatus {
    /// Served from cache within max-age
    Hit,
    /// Not cached, fetched from origin
    Miss,
    /// Cached entry past max-age, served without revalidation
    Stale,
    /// Cached entry revalidated against origin (304)
    Fresh,
}

impl CacheStatus {
    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Miss => "miss",
            Self::Stale => "stale",
            Self::Fresh => "fresh",
        }
    }
}

impl fmt::Display for CacheStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response envelope of a conditional GET
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalResponse<T> {
    /// Decoded payload
    pub data: T,
    /// Entity tag of the payload, when the origin sent one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// How the request was satisfied
    pub cache_status: CacheStatus,
}

/// Cache key for an endpoint
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ForecastCacheKey {
    endpoint: String,
}

impl ForecastCacheKey {
    /// Key for an arbitrary endpoint
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Key for a stored routine's forecast
    #[must_use]
    pub fn forecast(routine_id: Uuid, with_deloads: bool) -> Self {
        let variant = if with_deloads { "deloads" } else { "nodeloads" };
        Self::new(format!("forecast:{routine_id}:{variant}"))
    }

    /// Endpoint string
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl fmt::Display for ForecastCacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.endpoint)
    }
}

/// Conditional GET with ETag revalidation
///
/// Entries are keyed by endpoint and expire after the caller-supplied
/// `max_age`. Implementations live in the application shell.
#[async_trait]
pub trait ConditionalFetch: Send + Sync {
    /// Transport failure type
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch and decode `key`, consulting the cache first
    ///
    /// # Errors
    ///
    /// Returns the implementation's error if the origin is unreachable or the
    /// payload cannot be decoded as `T`.
    async fn conditional_get<T>(
        &self,
        key: &ForecastCacheKey,
        max_age: Duration,
    ) -> Result<ConditionalResponse<T>, Self::Error>
    where
        T: DeserializeOwned + Send + 'static;
}

/// Strong ETag of a value's JSON encoding
///
/// Identical engine output always yields the same tag.
///
/// # Errors
///
/// Returns `EngineError::Serialization` if `value` cannot be encoded.
pub fn compute_etag<T: Serialize + ?Sized>(value: &T) -> EngineResult<String> {
    let json = serde_json::to_vec(value)?;
    let mut hasher = Sha256::new();
    hasher.update(&json);
    let hash = hasher.finalize();
    Ok(format!(r#""{}""#, hex::encode(hash)))
}
