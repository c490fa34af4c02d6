//! Element locators, rendered to Playwright expressions
//!
//! A locator is a value describing how to resolve one element: by test id,
//! ARIA role + accessible name, accessible label, title attribute, or heading
//! text, optionally scoped to another locator. Nothing is held onto between
//! assertions; each render recomputes the full expression.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "by", rename_all = "snake_case")]
pub enum Locator {
    /// `data-testid` attribute
    TestId { id: String },

    /// ARIA role with accessible name
    Role { role: String, name: String },

    /// Accessible label (aria-label or associated label element)
    Label { text: String },

    /// `title` attribute
    Title { text: String },

    /// Heading element with the given accessible name
    Heading { text: String },

    /// `target` resolved within the subtree matched by `scope`
    Within {
        scope: Box<Locator>,
        target: Box<Locator>,
    },
}

impl Locator {
    pub fn test_id(id: impl Into<String>) -> Self {
        Self::TestId { id: id.into() }
    }

    /// A `button` role with the given accessible name.
    pub fn button(name: impl Into<String>) -> Self {
        Self::Role {
            role: "button".to_string(),
            name: name.into(),
        }
    }

    pub fn label(text: impl Into<String>) -> Self {
        Self::Label { text: text.into() }
    }

    pub fn title(text: impl Into<String>) -> Self {
        Self::Title { text: text.into() }
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self::Heading { text: text.into() }
    }

    /// Scope this locator to the subtree matched by `scope`.
    pub fn within(self, scope: Locator) -> Self {
        Self::Within {
            scope: Box::new(scope),
            target: Box::new(self),
        }
    }

    /// Render the full Playwright expression, e.g.
    /// `page.getByTestId('action-row').getByRole('button', { name: 'Console' })`.
    pub fn to_playwright(&self) -> String {
        format!("page.{}", self.chain())
    }

    fn chain(&self) -> String {
        match self {
            Locator::TestId { id } => format!("getByTestId('{}')", js_quote(id)),
            Locator::Role { role, name } => format!(
                "getByRole('{}', {{ name: '{}' }})",
                js_quote(role),
                js_quote(name)
            ),
            Locator::Label { text } => format!("getByLabel('{}')", js_quote(text)),
            Locator::Title { text } => format!("getByTitle('{}')", js_quote(text)),
            Locator::Heading { text } => {
                format!("getByRole('heading', {{ name: '{}' }})", js_quote(text))
            }
            Locator::Within { scope, target } => {
                format!("{}.{}", scope.chain(), target.chain())
            }
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::TestId { id } => write!(f, "testid:{}", id),
            Locator::Role { role, name } => write!(f, "{}:{}", role, name),
            Locator::Label { text } => write!(f, "label:{}", text),
            Locator::Title { text } => write!(f, "title:{}", text),
            Locator::Heading { text } => write!(f, "heading:{}", text),
            Locator::Within { scope, target } => write!(f, "{}>{}", scope, target),
        }
    }
}

/// Escape a string for embedding in a single-quoted JS literal.
pub(crate) fn js_quote(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}
