use serde::{Deserialize, Serialize};

/// Display preferences persisted outside the decision engine. The engine
/// never reads these; they are loaded once at startup and written after each
/// toggle by whatever presentation layer hosts the checker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessibilityPreferences {
    pub dark_mode: bool,
    pub high_contrast: bool,
    pub large_text: bool,
}

/// Storage capability for accessibility preferences, injected at the
/// boundary. Persistence failures must never block or fail the checker.
pub trait PreferenceStore: Send + Sync {
    fn load(&self) -> Result<AccessibilityPreferences, PreferenceError>;
    fn save(&self, preferences: &AccessibilityPreferences) -> Result<(), PreferenceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("preference storage unavailable: {0}")]
    Unavailable(String),
    #[error("preference payload malformed: {0}")]
    Malformed(String),
}
