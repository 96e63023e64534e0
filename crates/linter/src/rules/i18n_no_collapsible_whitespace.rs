//! calypso/i18n-no-collapsible-whitespace
//!
//! Disallow collapsible whitespace in translatable strings.
//!
//! Tabs, newlines, carriage returns and consecutive spaces collapse when
//! rendered as HTML, so a translation containing them either renders wrong
//! or forces translators to reproduce invisible formatting.

use oxc_ast::ast::CallExpression;
use oxc_span::GetSpan;
use serde::{Deserialize, Serialize};

use crate::diagnostic::Diagnostic;
use crate::utils::{get_callee_name, text_content};
use crate::{RuleCategory, RuleMeta};

/// Default translation function names
const DEFAULT_FUNCTIONS: &[&str] = &["translate"];

/// Configuration for i18n-no-collapsible-whitespace
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct I18nNoCollapsibleWhitespaceConfig {
    /// Callee names treated as translation functions
    #[serde(default = "default_functions")]
    pub functions: Vec<String>,
}

fn default_functions() -> Vec<String> {
    DEFAULT_FUNCTIONS.iter().map(|s| s.to_string()).collect()
}

impl Default for I18nNoCollapsibleWhitespaceConfig {
    fn default() -> Self {
        Self {
            functions: default_functions(),
        }
    }
}

/// i18n-no-collapsible-whitespace rule
#[derive(Debug, Clone, Default)]
pub struct I18nNoCollapsibleWhitespace {
    pub config: I18nNoCollapsibleWhitespaceConfig,
}

impl RuleMeta for I18nNoCollapsibleWhitespace {
    const NAME: &'static str = "i18n-no-collapsible-whitespace";
    const CATEGORY: RuleCategory = RuleCategory::I18n;
}

impl I18nNoCollapsibleWhitespace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: I18nNoCollapsibleWhitespaceConfig) -> Self {
        Self { config }
    }

    /// Check a call expression for translation arguments with collapsible
    /// whitespace. Reports at most one diagnostic per argument.
    pub fn check<'a>(&self, call: &CallExpression<'a>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        let Some(callee_name) = get_callee_name(call) else {
            return diagnostics;
        };
        if !self.config.functions.iter().any(|f| f == callee_name) {
            return diagnostics;
        }

        for arg in &call.arguments {
            let Some(expr) = arg.as_expression() else {
                continue;
            };
            let Some(text) = text_content(expr) else {
                continue;
            };
            if let Some(problem) = find_collapsible_whitespace(&text) {
                diagnostics.push(Diagnostic::warning(
                    Self::NAME,
                    expr.span(),
                    format!(
                        "Translations should not contain collapsible whitespace ({})",
                        problem
                    ),
                ));
            }
        }

        diagnostics
    }
}

/// Find the leftmost collapsible whitespace occurrence and name its category.
fn find_collapsible_whitespace(text: &str) -> Option<&'static str> {
    let bytes = text.as_bytes();
    for (i, &byte) in bytes.iter().enumerate() {
        match byte {
            b'\t' => return Some("\\t"),
            b'\n' => return Some("\\n"),
            b'\r' => return Some("\\r"),
            b' ' if bytes.get(i + 1) == Some(&b' ') => return Some("consecutive spaces"),
            _ => {}
        }
    }
    None
}
