use serde::{Deserialize, Deserializer, Serialize};
use tracing::{info, warn};
use url::Url;

use crate::error::{ClientError, Result};
use crate::protocol::Endpoint;
use crate::time::Duration;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3000/";

/// Query-string key that overrides the backend address (`?backend=...`).
pub const BACKEND_QUERY_KEY: &str = "backend";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(
        default = "default_backend_url",
        deserialize_with = "deserialize_backend_url"
    )]
    pub backend_url: Url,
    #[serde(default = "default_fast_poll_ms")]
    pub fast_poll_ms: u32,
    #[serde(default = "default_slow_cycle_ms")]
    pub slow_cycle_ms: u32,
    #[serde(default = "default_removal_delay_ms")]
    pub removal_delay_ms: u32,
}

fn default_backend_url() -> Url {
    Url::parse(DEFAULT_BACKEND_URL).expect("default backend url is valid")
}

fn deserialize_backend_url<'de, D: Deserializer<'de>>(d: D) -> Result<Url, D::Error> {
    let raw = String::deserialize(d)?;
    parse_backend_url(&raw).map_err(serde::de::Error::custom)
}

fn default_fast_poll_ms() -> u32 {
    100
}

fn default_slow_cycle_ms() -> u32 {
    5000
}

fn default_removal_delay_ms() -> u32 {
    300
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            fast_poll_ms: default_fast_poll_ms(),
            slow_cycle_ms: default_slow_cycle_ms(),
            removal_delay_ms: default_removal_delay_ms(),
        }
    }
}

/// Where the effective backend address came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Query,
    Stored,
    BuildTime,
    Default,
}

impl ConfigSource {
    pub fn label(self) -> &'static str {
        match self {
            ConfigSource::Query => "query string",
            ConfigSource::Stored => "saved settings",
            ConfigSource::BuildTime => "build environment",
            ConfigSource::Default => "default",
        }
    }
}

/// Raw backend addresses in priority order. Missing or invalid entries fall through.
#[derive(Debug, Clone, Copy, Default)]
pub struct BackendCandidates<'a> {
    pub query: Option<&'a str>,
    pub stored: Option<&'a str>,
    pub build_time: Option<&'a str>,
}

impl ClientConfig {
    pub fn fast_poll(&self) -> Duration {
        Duration::from_millis(u64::from(self.fast_poll_ms))
    }

    pub fn slow_cycle(&self) -> Duration {
        Duration::from_millis(u64::from(self.slow_cycle_ms))
    }

    pub fn removal_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.removal_delay_ms))
    }

    pub fn validate(&self) -> Result<()> {
        check_backend_url(&self.backend_url)?;
        if self.fast_poll_ms == 0 || self.slow_cycle_ms == 0 || self.removal_delay_ms == 0 {
            return Err(ClientError::InvalidTiming(
                "intervals must be greater than zero".to_string(),
            ));
        }
        if self.fast_poll_ms >= self.slow_cycle_ms {
            return Err(ClientError::InvalidTiming(format!(
                "fast poll ({}ms) must be shorter than the slow cycle ({}ms)",
                self.fast_poll_ms, self.slow_cycle_ms
            )));
        }
        if self.removal_delay_ms >= self.slow_cycle_ms {
            return Err(ClientError::InvalidTiming(format!(
                "removal delay ({}ms) must be shorter than the slow cycle ({}ms)",
                self.removal_delay_ms, self.slow_cycle_ms
            )));
        }
        Ok(())
    }

    /// Absolute URL for a backend route. The base path prefix is kept even
    /// when `backend_url` was built without a trailing `/`.
    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        let base = with_trailing_slash(self.backend_url.clone());
        match base.join(endpoint.path()) {
            Ok(url) => url.into(),
            Err(_) => format!("{base}{}", endpoint.path()),
        }
    }

    /// Picks the first valid backend address from `candidates`.
    pub fn with_backend_from(mut self, candidates: BackendCandidates<'_>) -> (Self, ConfigSource) {
        let ordered = [
            (ConfigSource::Query, candidates.query),
            (ConfigSource::Stored, candidates.stored),
            (ConfigSource::BuildTime, candidates.build_time),
        ];

        for (source, raw) in ordered {
            let Some(raw) = raw else {
                continue;
            };
            match parse_backend_url(raw) {
                Ok(url) => {
                    info!(backend = %url, source = source.label(), "backend address resolved");
                    self.backend_url = url;
                    return (self, source);
                }
                Err(e) => warn!(source = source.label(), "ignoring backend address: {e}"),
            }
        }

        info!(backend = %self.backend_url, "using default backend address");
        (self, ConfigSource::Default)
    }
}

/// Parses a user-supplied backend address.
///
/// Only http(s) is accepted. The path is normalized to end with `/` so route
/// names join underneath it instead of replacing its last segment.
pub fn parse_backend_url(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ClientError::InvalidBackendUrl {
            url: String::new(),
            reason: "empty".to_string(),
        });
    }

    let mut url = Url::parse(raw).map_err(|e| ClientError::InvalidBackendUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    check_backend_url(&url)?;

    url.set_query(None);
    url.set_fragment(None);
    Ok(with_trailing_slash(url))
}

/// Route names join underneath a path ending in `/`; otherwise `Url::join`
/// replaces the last segment.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

fn check_backend_url(url: &Url) -> Result<()> {
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ClientError::InvalidBackendUrl {
                url: url.to_string(),
                reason: format!("unsupported scheme '{other}'"),
            })
        }
    }
    if url.host_str().is_none() {
        return Err(ClientError::InvalidBackendUrl {
            url: url.to_string(),
            reason: "missing host".to_string(),
        });
    }
    Ok(())
}

/// Extracts `?backend=` from a `location.search` string.
pub fn backend_from_query(search: &str) -> Option<String> {
    let search = search.strip_prefix('?').unwrap_or(search);
    url::form_urlencoded::parse(search.as_bytes())
        .find(|(k, _)| k == BACKEND_QUERY_KEY)
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.trim().is_empty())
}
