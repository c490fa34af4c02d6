//! The fixed set of action-row checks
//!
//! Each scenario is an independent behavioral check: navigate to a challenge
//! page, optionally click something in the action row, then assert the
//! resulting visibility of dependent UI regions. A scenario carries one step
//! list per viewport mode; the action row does not render on mobile, so most
//! mobile branches reduce to asserting the row is hidden.

use serde::{Deserialize, Serialize};

use crate::error::E2eResult;
use crate::locator::Locator;
use crate::translations::Translations;

/// Buttons the action row shows for a full challenge page.
pub const CHALLENGE_BUTTONS: [&str; 4] = ["Instructions", "index.html", "styles.css", "Console"];

/// File-tab buttons that stay up when the instructions panel is toggled away.
pub const EDITOR_BUTTONS: [&str; 2] = ["index.html", "styles.css"];

pub const SURVEY_FORM_PATH: &str =
    "/learn/2022/responsive-web-design/build-a-survey-form-project/build-a-survey-form";

/// A step-based challenge with the preview pane disabled.
pub const PYRAMID_STEP_ONE_PATH: &str =
    "/learn/javascript-algorithms-and-data-structures-v8/learn-introductory-javascript-by-building-a-pyramid-generator/step-1";

/// Translation key for the preview-portal button's accessible name.
pub const PORTAL_LABEL_KEY: &str = "aria.move-preview-to-new-window";

pub const SURVEY_FORM_HEADING: &str = "Build a Survey Form";
pub const PREVIEW_FRAME_TITLE: &str = "challenge preview";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewportMode {
    Desktop,
    Mobile,
}

impl ViewportMode {
    pub const ALL: [ViewportMode; 2] = [ViewportMode::Desktop, ViewportMode::Mobile];

    /// Viewport dimensions in CSS pixels.
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            ViewportMode::Desktop => (1280, 720),
            ViewportMode::Mobile => (375, 667),
        }
    }

    pub fn is_mobile(self) -> bool {
        matches!(self, ViewportMode::Mobile)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ViewportMode::Desktop => "desktop",
            ViewportMode::Mobile => "mobile",
        }
    }
}

/// One interaction or expectation within a scenario. Steps run strictly in
/// order; every expectation waits on the browser's condition polling, never
/// on a fixed delay.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Navigate { path: String },

    Click { locator: Locator },

    ExpectVisible { locator: Locator },

    ExpectHidden { locator: Locator },

    /// The locator must resolve to exactly `count` elements.
    ExpectCount { locator: Locator, count: usize },

    /// Click while awaiting a new page opened by the browser context; the new
    /// page must settle on `expected_url` and is closed afterwards.
    ClickExpectingPage {
        locator: Locator,
        expected_url: String,
    },
}

impl Step {
    /// Short label used in logs and step results.
    pub fn label(&self) -> String {
        match self {
            Step::Navigate { path } => format!("navigate:{}", path),
            Step::Click { locator } => format!("click:{}", locator),
            Step::ExpectVisible { locator } => format!("visible:{}", locator),
            Step::ExpectHidden { locator } => format!("hidden:{}", locator),
            Step::ExpectCount { locator, count } => format!("count[{}]:{}", count, locator),
            Step::ClickExpectingPage { locator, .. } => format!("popup:{}", locator),
        }
    }
}

/// A named behavioral check with one step list per viewport mode. An empty
/// list means the scenario does not apply in that mode and is skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub desktop: Vec<Step>,
    pub mobile: Vec<Step>,
}

impl Scenario {
    /// Split behavior: different steps on desktop and mobile.
    pub fn split(name: &str, desktop: Vec<Step>, mobile: Vec<Step>) -> Self {
        Self {
            name: name.to_string(),
            desktop,
            mobile,
        }
    }

    /// Same steps regardless of viewport mode.
    pub fn uniform(name: &str, steps: Vec<Step>) -> Self {
        Self {
            name: name.to_string(),
            desktop: steps.clone(),
            mobile: steps,
        }
    }

    pub fn steps_for(&self, mode: ViewportMode) -> &[Step] {
        match mode {
            ViewportMode::Desktop => &self.desktop,
            ViewportMode::Mobile => &self.mobile,
        }
    }
}

fn action_row() -> Locator {
    Locator::test_id("action-row")
}

fn preview_pane_button() -> Locator {
    Locator::test_id("preview-pane-button")
}

fn instructions_button() -> Locator {
    Locator::test_id("instructions-button")
}

/// A named button inside the action row.
fn row_button(label: &str) -> Locator {
    Locator::button(label).within(action_row())
}

fn navigate(path: &str) -> Step {
    Step::Navigate {
        path: path.to_string(),
    }
}

fn click(locator: Locator) -> Step {
    Step::Click { locator }
}

fn visible(locator: Locator) -> Step {
    Step::ExpectVisible { locator }
}

fn hidden(locator: Locator) -> Step {
    Step::ExpectHidden { locator }
}

/// The mobile branch shared by every row-touching scenario: the action row
/// component does not render at mobile widths.
fn mobile_row_hidden(path: &str) -> Vec<Step> {
    vec![navigate(path), hidden(action_row())]
}

/// Build the fixed scenario set. The preview-portal button's accessible name
/// comes from the translation resource.
pub fn scenarios(translations: &Translations) -> E2eResult<Vec<Scenario>> {
    let portal_button = Locator::button(translations.resolve(PORTAL_LABEL_KEY)?);

    let mut all = Vec::new();

    // On load, every challenge button plus both preview controls is up.
    let mut on_load = vec![navigate(SURVEY_FORM_PATH)];
    on_load.extend(CHALLENGE_BUTTONS.iter().map(|label| visible(row_button(label))));
    on_load.push(visible(preview_pane_button()));
    on_load.push(visible(portal_button.clone()));
    all.push(Scenario::split(
        "action-row-buttons-visible",
        on_load,
        mobile_row_hidden(SURVEY_FORM_PATH),
    ));

    // Toggling instructions hides the panel but leaves the file tabs alone.
    let mut instructions = vec![navigate(SURVEY_FORM_PATH), click(instructions_button())];
    instructions.extend(EDITOR_BUTTONS.iter().map(|label| visible(row_button(label))));
    instructions.push(hidden(Locator::heading(SURVEY_FORM_HEADING)));
    all.push(Scenario::split(
        "instructions-toggle-keeps-editor-buttons",
        instructions,
        mobile_row_hidden(SURVEY_FORM_PATH),
    ));

    all.push(Scenario::split(
        "console-button-shows-console",
        vec![
            navigate(SURVEY_FORM_PATH),
            click(row_button("Console")),
            visible(Locator::label("Console")),
        ],
        mobile_row_hidden(SURVEY_FORM_PATH),
    ));

    all.push(Scenario::split(
        "preview-pane-button-hides-preview",
        vec![
            navigate(SURVEY_FORM_PATH),
            click(preview_pane_button()),
            hidden(Locator::title(PREVIEW_FRAME_TITLE)),
        ],
        mobile_row_hidden(SURVEY_FORM_PATH),
    ));

    // The portal opens the preview in a fresh tab that starts at about:blank.
    all.push(Scenario::uniform(
        "preview-portal-opens-new-tab",
        vec![
            navigate(SURVEY_FORM_PATH),
            Step::ClickExpectingPage {
                locator: portal_button,
                expected_url: "about:blank".to_string(),
            },
        ],
    ));

    // Step-based challenges disable the preview; the control must be absent,
    // not merely hidden.
    all.push(Scenario::uniform(
        "preview-buttons-absent-when-disabled",
        vec![
            navigate(PYRAMID_STEP_ONE_PATH),
            Step::ExpectCount {
                locator: preview_pane_button(),
                count: 0,
            },
        ],
    ));

    Ok(all)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn fixture() -> Translations {
        Translations::from_json(
            r#"{"aria": {"move-preview-to-new-window": "Move preview to new window"}}"#,
        )
        .unwrap()
    }

    #[test]
    fn six_scenarios_are_defined() {
        let all = scenarios(&fixture()).unwrap();
        assert_eq!(all.len(), 6);
    }

    #[test]
    fn every_scenario_starts_with_navigation_in_both_modes() {
        for scenario in scenarios(&fixture()).unwrap() {
            for mode in ViewportMode::ALL {
                let steps = scenario.steps_for(mode);
                assert!(
                    matches!(steps.first(), Some(Step::Navigate { .. })),
                    "{} [{}] must navigate first",
                    scenario.name,
                    mode.as_str()
                );
            }
        }
    }

    #[test_case("Instructions")]
    #[test_case("index.html")]
    #[test_case("styles.css")]
    #[test_case("Console")]
    fn on_load_check_covers_challenge_button(label: &str) {
        let all = scenarios(&fixture()).unwrap();
        let on_load = all
            .iter()
            .find(|s| s.name == "action-row-buttons-visible")
            .unwrap();
        let expected = row_button(label);
        assert!(on_load
            .desktop
            .iter()
            .any(|s| matches!(s, Step::ExpectVisible { locator } if *locator == expected)));
    }

    #[test]
    fn row_touching_scenarios_expect_hidden_row_on_mobile() {
        let all = scenarios(&fixture()).unwrap();
        for name in [
            "action-row-buttons-visible",
            "instructions-toggle-keeps-editor-buttons",
            "console-button-shows-console",
            "preview-pane-button-hides-preview",
        ] {
            let scenario = all.iter().find(|s| s.name == name).unwrap();
            let expected = action_row();
            assert!(
                scenario
                    .mobile
                    .iter()
                    .any(|s| matches!(s, Step::ExpectHidden { locator } if *locator == expected)),
                "{} must assert the action row is hidden on mobile",
                name
            );
        }
    }

    #[test]
    fn portal_check_is_uniform_across_modes() {
        let all = scenarios(&fixture()).unwrap();
        let portal = all
            .iter()
            .find(|s| s.name == "preview-portal-opens-new-tab")
            .unwrap();
        assert_eq!(portal.desktop.len(), portal.mobile.len());
        assert!(portal.desktop.iter().any(|s| matches!(
            s,
            Step::ClickExpectingPage { expected_url, .. } if expected_url == "about:blank"
        )));
    }

    #[test]
    fn portal_button_label_comes_from_translations() {
        let t = Translations::from_json(
            r#"{"aria": {"move-preview-to-new-window": "Vorschau in neues Fenster"}}"#,
        )
        .unwrap();
        let all = scenarios(&t).unwrap();
        let portal = all
            .iter()
            .find(|s| s.name == "preview-portal-opens-new-tab")
            .unwrap();
        let uses_translated = portal.desktop.iter().any(|s| matches!(
            s,
            Step::ClickExpectingPage { locator: Locator::Role { name, .. }, .. }
                if name == "Vorschau in neues Fenster"
        ));
        assert!(uses_translated);
    }

    #[test]
    fn missing_portal_translation_fails_scenario_build() {
        let t = Translations::from_json("{}").unwrap();
        assert!(scenarios(&t).is_err());
    }

    #[test]
    fn disabled_preview_expects_zero_elements() {
        let all = scenarios(&fixture()).unwrap();
        let disabled = all
            .iter()
            .find(|s| s.name == "preview-buttons-absent-when-disabled")
            .unwrap();
        for mode in ViewportMode::ALL {
            assert!(disabled.steps_for(mode).iter().any(|s| matches!(
                s,
                Step::ExpectCount { count: 0, .. }
            )));
        }
    }

    #[test]
    fn instructions_toggle_keeps_editor_buttons_after_click() {
        let all = scenarios(&fixture()).unwrap();
        let toggle = all
            .iter()
            .find(|s| s.name == "instructions-toggle-keeps-editor-buttons")
            .unwrap();
        let click_at = toggle
            .desktop
            .iter()
            .position(|s| matches!(s, Step::Click { .. }))
            .unwrap();
        for label in EDITOR_BUTTONS {
            let expected = row_button(label);
            let visible_at = toggle
                .desktop
                .iter()
                .position(|s| matches!(s, Step::ExpectVisible { locator } if *locator == expected))
                .unwrap();
            assert!(visible_at > click_at, "{} asserted after the click", label);
        }
    }

    #[test]
    fn viewport_dimensions_differ_per_mode() {
        assert_eq!(ViewportMode::Desktop.dimensions(), (1280, 720));
        assert_eq!(ViewportMode::Mobile.dimensions(), (375, 667));
        assert!(ViewportMode::Mobile.is_mobile());
        assert!(!ViewportMode::Desktop.is_mobile());
    }
}
