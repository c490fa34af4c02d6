//! Action-row behavior checker
//!
//! Browser-driven acceptance checks for the challenge editor's action row
//! (the tab bar switching between instructions, files, console, and preview).
//! The checker navigates a real browser to challenge pages, clicks action-row
//! controls, and asserts the resulting visibility of dependent UI regions,
//! across desktop and mobile viewports.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Action-Row Checker (Rust)                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Checker                                                    │
//! │    ├── scenarios(translations) -> [Scenario]                │
//! │    ├── run_scenarios() -> SuiteResult                       │
//! │    └── write_results() -> test-results.json                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Scenario (fixed literal set)                               │
//! │    ├── name, entry path                                     │
//! │    ├── desktop steps / mobile steps                         │
//! │    └── steps: navigate | click | expect_visible |           │
//! │               expect_hidden | expect_count |                │
//! │               click_expecting_page                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  PlaywrightHandle: one generated node script per run,       │
//! │  JSON step lines parsed back into StepResults               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The application under test is external; the harness only needs its base
//! URL and the translation resource supplying localized control labels.

pub mod cli;
pub mod error;
pub mod locator;
pub mod playwright;
pub mod runner;
pub mod scenario;
pub mod target;
pub mod translations;

pub use error::{E2eError, E2eResult};
pub use locator::Locator;
pub use runner::{Checker, CheckerConfig, SuiteResult};
pub use scenario::{scenarios, Scenario, Step, ViewportMode};
pub use translations::Translations;
