//! Calypso lint rules
//!
//! This crate provides the wp-calypso custom lint rules ported from
//! eslint-plugin-wpcalypso, operating on the oxc AST. Rules can be used:
//! 1. Standalone with oxc AST for custom tooling
//! 2. Integrated with oxlint as a plugin (future)

pub mod rules;
pub mod utils;
pub mod visitor;
mod context;
mod diagnostic;

pub use context::LintContext;
pub use diagnostic::{Diagnostic, DiagnosticSeverity};
pub use rules::*;
pub use visitor::{lint, lint_with_config, LintResult, LintRunner, RulesConfig};

/// Rule category for Calypso rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    /// Rules that detect code that is likely to be incorrect
    Correctness,
    /// Rules that encourage best practices
    Style,
    /// Rules for translatable strings
    I18n,
}

/// Rule metadata
pub trait RuleMeta {
    const NAME: &'static str;
    const CATEGORY: RuleCategory;
    /// URL to documentation
    fn docs_url() -> String {
        format!(
            "https://github.com/Automattic/eslint-plugin-wpcalypso/blob/master/docs/rules/{}.md",
            Self::NAME
        )
    }
}
