//! Playwright browser automation
//!
//! A scenario runs as one generated node script sharing a single page
//! session: a click and the assertion depending on it must observe the same
//! page, and the portal check has to await the context's `page` event
//! concurrently with the click. The script emits one JSON line per step on
//! stdout, which the Rust side parses back into [`StepResult`]s.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use serde::{Deserialize, Serialize};
use tokio::process::Command as TokioCommand;
use tracing::debug;

use crate::error::{E2eError, E2eResult};
use crate::locator::js_quote;
use crate::scenario::{Scenario, Step, ViewportMode};

/// Playwright browser handle
pub struct PlaywrightHandle {
    base_url: String,
    screenshot_dir: PathBuf,
    assert_timeout_ms: u64,
    browser: Browser,
    headless: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Browser {
    #[default]
    Chromium,
    Firefox,
    Webkit,
}

impl Browser {
    fn as_str(&self) -> &'static str {
        match self {
            Browser::Chromium => "chromium",
            Browser::Firefox => "firefox",
            Browser::Webkit => "webkit",
        }
    }
}

/// Outcome of one step, as reported by the generated script.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepResult {
    pub step: String,
    pub success: bool,
    pub duration_ms: u64,
    #[serde(default)]
    pub error: Option<String>,
}

impl PlaywrightHandle {
    pub fn new(config: PlaywrightConfig) -> E2eResult<Self> {
        Self::check_playwright_installed()?;

        std::fs::create_dir_all(&config.screenshot_dir)?;

        Ok(Self {
            base_url: config.base_url,
            screenshot_dir: config.screenshot_dir,
            assert_timeout_ms: config.assert_timeout_ms,
            browser: config.browser,
            headless: config.headless,
        })
    }

    /// Check if Playwright is installed
    fn check_playwright_installed() -> E2eResult<()> {
        let output = Command::new("npx")
            .args(["playwright", "--version"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match output {
            Ok(status) if status.success() => Ok(()),
            _ => Err(E2eError::PlaywrightNotFound),
        }
    }

    /// Run one scenario in the given viewport mode and return the per-step
    /// outcomes. The browser context is created fresh and torn down inside
    /// the script; nothing carries over between runs.
    pub async fn run_scenario(
        &self,
        scenario: &Scenario,
        mode: ViewportMode,
    ) -> E2eResult<Vec<StepResult>> {
        let script = self.build_script(scenario, mode);

        let temp_dir = tempfile::tempdir()?;
        let script_path = temp_dir.path().join("scenario.js");
        std::fs::write(&script_path, &script)?;

        debug!(
            "Running {} [{}] via {}",
            scenario.name,
            mode.as_str(),
            script_path.display()
        );

        let output = TokioCommand::new("node")
            .arg(&script_path)
            .current_dir(temp_dir.path())
            .output()
            .await?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let results = parse_step_lines(&stdout);

        // A nonzero exit with a parsed failing step is a scenario failure the
        // caller reports; anything else is a harness-level Playwright error.
        if !output.status.success() && !results.iter().any(|r| !r.success) {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(E2eError::Playwright(format!(
                "Script failed without a step report:\nstdout: {}\nstderr: {}",
                stdout, stderr
            )));
        }

        Ok(results)
    }

    /// Build the node script for one scenario run.
    pub fn build_script(&self, scenario: &Scenario, mode: ViewportMode) -> String {
        let (width, height) = mode.dimensions();

        // Firefox rejects the isMobile context option.
        let is_mobile = mode.is_mobile() && self.browser != Browser::Firefox;

        let failure_shot = self
            .screenshot_dir
            .join(format!("{}-{}-failure.png", scenario.name, mode.as_str()));

        let mut script = format!(
            r#"const {{ chromium, firefox, webkit }} = require('playwright');

(async () => {{
  const browser = await {browser}.launch({{ headless: {headless} }});
  const context = await browser.newContext({{
    viewport: {{ width: {width}, height: {height} }},
    isMobile: {is_mobile},
    hasTouch: {is_mobile}
  }});
  const page = await context.newPage();
  const baseUrl = '{base_url}';
  const emit = (result) => console.log(JSON.stringify(result));
  const step = async (name, fn) => {{
    const start = Date.now();
    try {{
      await fn();
      emit({{ step: name, success: true, duration_ms: Date.now() - start }});
    }} catch (error) {{
      emit({{ step: name, success: false, duration_ms: Date.now() - start, error: error.message }});
      await page.screenshot({{ path: '{failure_shot}', fullPage: true }}).catch(() => {{}});
      await browser.close();
      process.exit(1);
    }}
  }};
"#,
            browser = self.browser.as_str(),
            headless = self.headless,
            width = width,
            height = height,
            is_mobile = is_mobile,
            base_url = js_quote(&self.base_url),
            failure_shot = js_quote(&failure_shot.to_string_lossy()),
        );

        for step in scenario.steps_for(mode) {
            script.push_str(&format!(
                "\n  await step('{}', async () => {{\n{}\n  }});\n",
                js_quote(&step.label()),
                self.step_to_js(step)
            ));
        }

        script.push_str("\n  await browser.close();\n})();\n");
        script
    }

    /// Convert a step to the JS statements inside its `step` wrapper.
    fn step_to_js(&self, step: &Step) -> String {
        let timeout = self.assert_timeout_ms;
        match step {
            Step::Navigate { path } => {
                format!("    await page.goto(baseUrl + '{}');", js_quote(path))
            }
            Step::Click { locator } => format!(
                "    await {}.click({{ timeout: {} }});",
                locator.to_playwright(),
                timeout
            ),
            Step::ExpectVisible { locator } => format!(
                "    await {}.waitFor({{ state: 'visible', timeout: {} }});",
                locator.to_playwright(),
                timeout
            ),
            Step::ExpectHidden { locator } => format!(
                "    await {}.waitFor({{ state: 'hidden', timeout: {} }});",
                locator.to_playwright(),
                timeout
            ),
            Step::ExpectCount { locator, count } => format!(
                r#"    await page.waitForLoadState();
    const deadline = Date.now() + {timeout};
    let found = await {locator}.count();
    while (found !== {count} && Date.now() < deadline) {{
      await page.waitForTimeout(50);
      found = await {locator}.count();
    }}
    if (found !== {count}) {{
      throw new Error(`expected {count} matching elements, found ${{found}}`);
    }}"#,
                timeout = timeout,
                locator = locator.to_playwright(),
                count = count
            ),
            Step::ClickExpectingPage {
                locator,
                expected_url,
            } => format!(
                r#"    const [popup] = await Promise.all([
      context.waitForEvent('page'),
      {locator}.click({{ timeout: {timeout} }})
    ]);
    await popup.waitForLoadState();
    const url = popup.url();
    if (url !== '{expected}') {{
      throw new Error(`expected {expected}, got ${{url}}`);
    }}
    await popup.close();"#,
                locator = locator.to_playwright(),
                timeout = timeout,
                expected = js_quote(expected_url)
            ),
        }
    }
}

/// Parse the JSON step lines a scenario script writes to stdout. Lines that
/// are not step reports (browser noise, console output) are ignored.
pub fn parse_step_lines(stdout: &str) -> Vec<StepResult> {
    stdout
        .lines()
        .filter_map(|line| serde_json::from_str::<StepResult>(line.trim()).ok())
        .collect()
}

/// Configuration for Playwright
#[derive(Debug, Clone)]
pub struct PlaywrightConfig {
    pub base_url: String,
    pub screenshot_dir: PathBuf,
    pub assert_timeout_ms: u64,
    pub browser: Browser,
    pub headless: bool,
}

impl Default for PlaywrightConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            screenshot_dir: PathBuf::from("test-results/screenshots"),
            assert_timeout_ms: 5000,
            browser: Browser::Chromium,
            headless: true,
        }
    }
}
