//! Command-line surface of the harness binary
//!
//! The entry point in `tests/e2e.rs` is a `harness = false` target, so
//! argument parsing lives here in the library where it can be unit tested.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::playwright::{Browser, PlaywrightConfig};
use crate::runner::CheckerConfig;
use crate::scenario::ViewportMode;

#[derive(Parser, Debug)]
#[command(name = "challenge-e2e")]
#[command(about = "Action-row acceptance checks for the challenge editor")]
pub struct Args {
    /// Base URL of the running challenge editor
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    pub base_url: String,

    /// Path to the translation resource (localized control labels)
    #[arg(long, default_value = "resources/translations.json")]
    pub translations: PathBuf,

    /// Run only a specific scenario by name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Viewport modes to run (desktop, mobile, both)
    #[arg(long, default_value = "both")]
    pub mode: String,

    /// Browser to use (chromium, firefox, webkit)
    #[arg(long, default_value = "chromium")]
    pub browser: String,

    /// Run in headless mode (pass `--headless false` for a headed browser)
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub headless: bool,

    /// Per-assertion timeout in milliseconds
    #[arg(long, default_value = "5000")]
    pub timeout_ms: u64,

    /// How long to wait for the target to answer HTTP, in seconds
    #[arg(long, default_value = "30")]
    pub ready_timeout_secs: u64,

    /// Directory for failure screenshots
    #[arg(long, default_value = "test-results/screenshots")]
    pub screenshot_dir: PathBuf,

    /// Output directory for results
    #[arg(short, long, default_value = "test-results")]
    pub output: PathBuf,
}

impl Args {
    /// Build the checker configuration these arguments describe.
    pub fn checker_config(&self) -> CheckerConfig {
        CheckerConfig {
            playwright: PlaywrightConfig {
                base_url: self.base_url.clone(),
                screenshot_dir: self.screenshot_dir.clone(),
                assert_timeout_ms: self.timeout_ms,
                browser: parse_browser(&self.browser),
                headless: self.headless,
            },
            modes: parse_modes(&self.mode),
            ready_timeout: Duration::from_secs(self.ready_timeout_secs),
            output_dir: self.output.clone(),
        }
    }
}

pub fn parse_browser(name: &str) -> Browser {
    match name {
        "firefox" => Browser::Firefox,
        "webkit" => Browser::Webkit,
        _ => Browser::Chromium,
    }
}

pub fn parse_modes(mode: &str) -> Vec<ViewportMode> {
    match mode {
        "desktop" => vec![ViewportMode::Desktop],
        "mobile" => vec![ViewportMode::Mobile],
        _ => ViewportMode::ALL.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_args_cover_both_modes() {
        let args = Args::try_parse_from(["challenge-e2e"]).unwrap();
        assert_eq!(args.base_url, "http://127.0.0.1:8000");
        assert!(args.headless);

        let config = args.checker_config();
        assert_eq!(config.modes, vec![ViewportMode::Desktop, ViewportMode::Mobile]);
        assert_eq!(config.playwright.assert_timeout_ms, 5000);
    }

    #[test]
    fn mode_filter_narrows_to_one_viewport() {
        assert_eq!(parse_modes("mobile"), vec![ViewportMode::Mobile]);
        assert_eq!(parse_modes("desktop"), vec![ViewportMode::Desktop]);
        assert_eq!(parse_modes("both").len(), 2);
    }

    #[test]
    fn browser_names_map_to_flavors() {
        assert_eq!(parse_browser("firefox"), Browser::Firefox);
        assert_eq!(parse_browser("webkit"), Browser::Webkit);
        assert_eq!(parse_browser("chromium"), Browser::Chromium);
        assert_eq!(parse_browser("anything-else"), Browser::Chromium);
    }

    #[test]
    fn headless_can_be_turned_off() {
        let args = Args::try_parse_from(["challenge-e2e", "--headless", "false"]).unwrap();
        assert!(!args.headless);
        assert!(!args.checker_config().playwright.headless);
    }

    #[test]
    fn named_run_and_overrides_parse() {
        let args = Args::try_parse_from([
            "challenge-e2e",
            "--name",
            "console-button-shows-console",
            "--base-url",
            "http://127.0.0.1:3000",
            "--timeout-ms",
            "8000",
        ])
        .unwrap();
        assert_eq!(args.name.as_deref(), Some("console-button-shows-console"));
        let config = args.checker_config();
        assert_eq!(config.playwright.base_url, "http://127.0.0.1:3000");
        assert_eq!(config.playwright.assert_timeout_ms, 8000);
    }
}
