use physio::config::{backend_from_query, BackendCandidates, ConfigSource};
use physio::ClientConfig;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::LOCALSTORAGE_SETTINGS_KEY;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub(super) fn local_storage_get_string(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

pub(super) fn local_storage_set_string(key: &str, value: &str) {
    if let Some(s) = local_storage() {
        let _ = s.set_item(key, value);
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct PersistedSettings {
    #[serde(default)]
    pub(super) backend_url: Option<String>,
}

pub(super) fn load_persisted_settings() -> Option<PersistedSettings> {
    let raw = local_storage_get_string(LOCALSTORAGE_SETTINGS_KEY)?;
    serde_json::from_str(&raw).ok()
}

pub(super) fn save_persisted_settings(settings: &PersistedSettings) {
    if let Ok(raw) = serde_json::to_string(settings) {
        local_storage_set_string(LOCALSTORAGE_SETTINGS_KEY, &raw);
    }
}

fn location_search() -> Option<String> {
    web_sys::window().and_then(|w| w.location().search().ok())
}

/// Effective client configuration for this page load.
///
/// A `?backend=` override is remembered so later visits keep using it.
pub(super) fn resolve_client_config() -> ClientConfig {
    let query = location_search().and_then(|s| backend_from_query(&s));
    let mut settings = load_persisted_settings().unwrap_or_default();

    let (cfg, source) = ClientConfig::default().with_backend_from(BackendCandidates {
        query: query.as_deref(),
        stored: settings.backend_url.as_deref(),
        build_time: option_env!("PHYSIO_BACKEND_URL"),
    });

    if source == ConfigSource::Query {
        settings.backend_url = Some(cfg.backend_url.to_string());
        save_persisted_settings(&settings);
    }

    match cfg.validate() {
        Ok(()) => cfg,
        Err(e) => {
            warn!("falling back to default client config: {e}");
            ClientConfig::default()
        }
    }
}
