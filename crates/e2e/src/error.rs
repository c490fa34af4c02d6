//! Error types for the action-row checker

use thiserror::Error;

#[derive(Error, Debug)]
pub enum E2eError {
    #[error("Playwright not found. Install with: npx playwright install")]
    PlaywrightNotFound,

    #[error("Playwright error: {0}")]
    Playwright(String),

    #[error("Step failed: {step} - {reason}")]
    StepFailed { step: String, reason: String },

    #[error("Translation resource {path}: {source}")]
    TranslationResource {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Translation key not found: {0}")]
    TranslationKey(String),

    #[error("Target at {url} not ready after {attempts} attempts")]
    TargetNotReady { url: String, attempts: usize },

    #[error("Scenario not found: {0}")]
    ScenarioNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type E2eResult<T> = Result<T, E2eError>;
