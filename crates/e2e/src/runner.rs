//! Checker orchestration: expand scenarios over viewport modes and report
//!
//! Every scenario/mode pair is an independent run with a fresh navigation
//! and browser context. A failed run is recorded and the suite moves on;
//! nothing is fatal to the suite and no run retries.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::error::{E2eError, E2eResult};
use crate::playwright::{PlaywrightConfig, PlaywrightHandle, StepResult};
use crate::scenario::{scenarios, Scenario, ViewportMode};
use crate::target;
use crate::translations::Translations;

/// Outcome of one scenario in one viewport mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    pub scenario: String,
    pub mode: ViewportMode,
    pub success: bool,
    pub skipped: bool,
    pub duration_ms: u64,
    pub steps: Vec<StepResult>,
    pub error: Option<String>,
}

impl RunResult {
    fn skipped(scenario: &Scenario, mode: ViewportMode) -> Self {
        Self {
            scenario: scenario.name.clone(),
            mode,
            success: true,
            skipped: true,
            duration_ms: 0,
            steps: vec![],
            error: None,
        }
    }
}

/// Aggregate outcome of a whole run of the checker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteResult {
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub duration_ms: u64,
    pub results: Vec<RunResult>,
}

/// The action-row behavior checker.
pub struct Checker {
    config: CheckerConfig,
    translations: Translations,
}

impl Checker {
    pub fn new(config: CheckerConfig, translations: Translations) -> Self {
        Self {
            config,
            translations,
        }
    }

    /// Run the full fixed scenario set.
    pub async fn run_all(&self) -> E2eResult<SuiteResult> {
        let all = scenarios(&self.translations)?;
        self.run_scenarios(&all).await
    }

    /// Run a single scenario by name.
    pub async fn run_named(&self, name: &str) -> E2eResult<SuiteResult> {
        let all = scenarios(&self.translations)?;
        let picked: Vec<Scenario> = all.into_iter().filter(|s| s.name == name).collect();
        if picked.is_empty() {
            return Err(E2eError::ScenarioNotFound(name.to_string()));
        }
        self.run_scenarios(&picked).await
    }

    /// Run a list of scenarios across the configured viewport modes.
    pub async fn run_scenarios(&self, scenarios: &[Scenario]) -> E2eResult<SuiteResult> {
        let started_at = chrono::Utc::now();
        let start = Instant::now();

        target::wait_for_ready(&self.config.playwright.base_url, self.config.ready_timeout)
            .await?;

        let playwright = PlaywrightHandle::new(self.config.playwright.clone())?;

        let mut results = Vec::new();
        let mut passed = 0;
        let mut failed = 0;
        let mut skipped = 0;

        info!(
            "Running {} scenario(s) across {} viewport mode(s)...",
            scenarios.len(),
            self.config.modes.len()
        );

        for scenario in scenarios {
            for &mode in &self.config.modes {
                if scenario.steps_for(mode).is_empty() {
                    debug!("- {} [{}] (not applicable)", scenario.name, mode.as_str());
                    skipped += 1;
                    results.push(RunResult::skipped(scenario, mode));
                    continue;
                }

                let result = self.run_one(&playwright, scenario, mode).await;
                if result.success {
                    passed += 1;
                    info!(
                        "✓ {} [{}] ({} ms)",
                        result.scenario,
                        mode.as_str(),
                        result.duration_ms
                    );
                } else {
                    failed += 1;
                    error!(
                        "✗ {} [{}] - {}",
                        result.scenario,
                        mode.as_str(),
                        result.error.as_deref().unwrap_or("unknown error")
                    );
                }
                results.push(result);
            }
        }

        let duration_ms = start.elapsed().as_millis() as u64;

        info!("");
        info!(
            "Results: {} passed, {} failed, {} skipped ({} ms)",
            passed, failed, skipped, duration_ms
        );

        Ok(SuiteResult {
            started_at,
            total: results.len(),
            passed,
            failed,
            skipped,
            duration_ms,
            results,
        })
    }

    async fn run_one(
        &self,
        playwright: &PlaywrightHandle,
        scenario: &Scenario,
        mode: ViewportMode,
    ) -> RunResult {
        let start = Instant::now();
        debug!("Running {} [{}]", scenario.name, mode.as_str());

        let (steps, error) = match playwright.run_scenario(scenario, mode).await {
            Ok(steps) => {
                let error = steps.iter().find(|s| !s.success).map(|s| {
                    E2eError::StepFailed {
                        step: s.step.clone(),
                        reason: s.error.clone().unwrap_or_else(|| "failed".to_string()),
                    }
                    .to_string()
                });
                (steps, error)
            }
            Err(e) => (vec![], Some(e.to_string())),
        };

        RunResult {
            scenario: scenario.name.clone(),
            mode,
            success: error.is_none(),
            skipped: false,
            duration_ms: start.elapsed().as_millis() as u64,
            steps,
            error,
        }
    }

    /// Write the suite results to `<output_dir>/test-results.json`.
    pub fn write_results(&self, results: &SuiteResult) -> E2eResult<PathBuf> {
        std::fs::create_dir_all(&self.config.output_dir)?;

        let path = self.config.output_dir.join("test-results.json");
        let json = serde_json::to_string_pretty(results)?;
        std::fs::write(&path, json)?;

        info!("Results written to: {}", path.display());
        Ok(path)
    }
}

/// Configuration for the checker.
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    pub playwright: PlaywrightConfig,

    /// Viewport modes to expand each scenario over.
    pub modes: Vec<ViewportMode>,

    /// How long to wait for the target app to answer HTTP.
    pub ready_timeout: Duration,

    pub output_dir: PathBuf,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            playwright: PlaywrightConfig::default(),
            modes: ViewportMode::ALL.to_vec(),
            ready_timeout: Duration::from_secs(30),
            output_dir: PathBuf::from("test-results"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_translations() -> Translations {
        Translations::from_json(
            r#"{"aria": {"move-preview-to-new-window": "Move preview to new window"}}"#,
        )
        .unwrap()
    }

    #[test]
    fn default_config_covers_both_modes() {
        let config = CheckerConfig::default();
        assert_eq!(config.modes, vec![ViewportMode::Desktop, ViewportMode::Mobile]);
    }

    #[test]
    fn skipped_run_counts_as_success_but_is_marked() {
        let scenario = Scenario::split("only-desktop", vec![], vec![]);
        let result = RunResult::skipped(&scenario, ViewportMode::Mobile);
        assert!(result.success);
        assert!(result.skipped);
        assert!(result.steps.is_empty());
    }

    #[test]
    fn suite_result_serializes_round() {
        let suite = SuiteResult {
            started_at: chrono::Utc::now(),
            total: 2,
            passed: 1,
            failed: 1,
            skipped: 0,
            duration_ms: 1234,
            results: vec![],
        };
        let json = serde_json::to_string(&suite).unwrap();
        let back: SuiteResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.total, 2);
        assert_eq!(back.failed, 1);
    }

    #[tokio::test]
    async fn run_named_rejects_unknown_scenario() {
        let checker = Checker::new(CheckerConfig::default(), fixture_translations());
        let err = checker.run_named("no-such-check").await.unwrap_err();
        assert!(matches!(err, E2eError::ScenarioNotFound(_)));
    }
}
