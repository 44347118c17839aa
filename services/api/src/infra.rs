use chrono::{DateTime, Local};
use civic_eligibility::checker::{
    AccessibilityPreferences, DpocStatus, PreferenceError, PreferenceStore,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Accessibility preferences with their store: loaded once at startup,
/// cached, and written back after each change. Persistence failures are
/// logged and swallowed so the checker never stalls on them.
#[derive(Clone)]
pub(crate) struct PreferenceHandle {
    store: Arc<dyn PreferenceStore>,
    current: Arc<Mutex<AccessibilityPreferences>>,
}

impl PreferenceHandle {
    pub(crate) fn bootstrap(store: Arc<dyn PreferenceStore>) -> Self {
        let current = match store.load() {
            Ok(preferences) => preferences,
            Err(err) => {
                warn!(%err, "accessibility preferences unreadable, using defaults");
                AccessibilityPreferences::default()
            }
        };

        Self {
            store,
            current: Arc::new(Mutex::new(current)),
        }
    }

    pub(crate) fn current(&self) -> AccessibilityPreferences {
        *self.current.lock().expect("preference mutex poisoned")
    }

    /// Update the cached preferences and persist fire-and-forget.
    pub(crate) fn update(&self, preferences: AccessibilityPreferences) -> AccessibilityPreferences {
        *self.current.lock().expect("preference mutex poisoned") = preferences;
        if let Err(err) = self.store.save(&preferences) {
            warn!(%err, "failed to persist accessibility preferences");
        }
        preferences
    }
}

/// On-disk payload for the preference file.
#[derive(Debug, Serialize, Deserialize)]
struct StoredPreferences {
    #[serde(flatten)]
    preferences: AccessibilityPreferences,
    #[serde(default)]
    updated_at: Option<DateTime<Local>>,
}

/// JSON-file-backed preference store. A missing file reads as defaults.
pub(crate) struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Result<AccessibilityPreferences, PreferenceError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(AccessibilityPreferences::default())
            }
            Err(err) => return Err(PreferenceError::Unavailable(err.to_string())),
        };

        let stored: StoredPreferences =
            serde_json::from_str(&raw).map_err(|err| PreferenceError::Malformed(err.to_string()))?;
        Ok(stored.preferences)
    }

    fn save(&self, preferences: &AccessibilityPreferences) -> Result<(), PreferenceError> {
        let stored = StoredPreferences {
            preferences: *preferences,
            updated_at: Some(Local::now()),
        };
        let payload = serde_json::to_string_pretty(&stored)
            .map_err(|err| PreferenceError::Malformed(err.to_string()))?;
        std::fs::write(&self.path, payload)
            .map_err(|err| PreferenceError::Unavailable(err.to_string()))
    }
}

/// In-memory preference store for tests and ephemeral runs.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct InMemoryPreferenceStore {
    current: Mutex<AccessibilityPreferences>,
}

#[cfg(test)]
impl PreferenceStore for InMemoryPreferenceStore {
    fn load(&self) -> Result<AccessibilityPreferences, PreferenceError> {
        Ok(*self.current.lock().expect("preference mutex poisoned"))
    }

    fn save(&self, preferences: &AccessibilityPreferences) -> Result<(), PreferenceError> {
        *self.current.lock().expect("preference mutex poisoned") = *preferences;
        Ok(())
    }
}

pub(crate) const DEFAULT_PREFERENCES_FILE: &str = "civic_preferences.json";

pub(crate) fn parse_dpoc(raw: &str) -> Result<DpocStatus, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "ready" => Ok(DpocStatus::Ready),
        "available" => Ok(DpocStatus::Available),
        "none" => Ok(DpocStatus::Missing),
        other => Err(format!(
            "'{other}' is not a documentary-proof status (expected ready, available, or none)"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_dpoc_accepts_the_three_declared_states() {
        assert_eq!(parse_dpoc("ready"), Ok(DpocStatus::Ready));
        assert_eq!(parse_dpoc(" Available "), Ok(DpocStatus::Available));
        assert_eq!(parse_dpoc("none"), Ok(DpocStatus::Missing));
        assert!(parse_dpoc("maybe").is_err());
    }

    #[test]
    fn file_store_reads_defaults_when_the_file_is_missing() {
        let store = FilePreferenceStore::new(
            std::env::temp_dir().join("civic-preferences-missing-test.json"),
        );
        let preferences = store.load().expect("missing file reads as defaults");
        assert_eq!(preferences, AccessibilityPreferences::default());
    }

    #[test]
    fn file_store_round_trips_preferences() {
        let path = std::env::temp_dir().join("civic-preferences-roundtrip-test.json");
        let store = FilePreferenceStore::new(&path);

        let saved = AccessibilityPreferences {
            dark_mode: true,
            high_contrast: true,
            large_text: false,
        };
        store.save(&saved).expect("save succeeds");
        assert_eq!(store.load().expect("load succeeds"), saved);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn bootstrap_survives_an_unreadable_store() {
        struct BrokenStore;
        impl PreferenceStore for BrokenStore {
            fn load(&self) -> Result<AccessibilityPreferences, PreferenceError> {
                Err(PreferenceError::Unavailable("offline".to_string()))
            }
            fn save(&self, _: &AccessibilityPreferences) -> Result<(), PreferenceError> {
                Err(PreferenceError::Unavailable("offline".to_string()))
            }
        }

        let handle = PreferenceHandle::bootstrap(Arc::new(BrokenStore));
        assert_eq!(handle.current(), AccessibilityPreferences::default());

        // The update sticks in the cache even though persistence fails.
        let updated = AccessibilityPreferences {
            dark_mode: true,
            ..AccessibilityPreferences::default()
        };
        assert_eq!(handle.update(updated), updated);
        assert_eq!(handle.current(), updated);
    }
}
