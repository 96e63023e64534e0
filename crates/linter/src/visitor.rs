//! Unified visitor pattern for running all lint rules in a single AST pass
//!
//! This module provides a `LintRunner` that traverses the AST once and runs
//! all enabled rules during the traversal, collecting diagnostics. The
//! jsx-classname-namespace rule is whole-program (root positions depend on
//! the module's exports) and runs before the traversal.

use std::path::Path;

use oxc_ast::ast::{CallExpression, Program};
use oxc_ast_visit::{walk, Visit};
use oxc_span::SourceType;

use crate::context::LintContext;
use crate::diagnostic::Diagnostic;
use crate::rules::{I18nNoCollapsibleWhitespace, JsxClassnameNamespace};

/// Configuration for which rules are enabled
#[derive(Debug, Clone)]
pub struct RulesConfig {
    pub i18n_no_collapsible_whitespace: Option<I18nNoCollapsibleWhitespace>,
    pub jsx_classname_namespace: Option<JsxClassnameNamespace>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            i18n_no_collapsible_whitespace: Some(I18nNoCollapsibleWhitespace::new()),
            jsx_classname_namespace: Some(JsxClassnameNamespace::new()),
        }
    }
}

impl RulesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn none() -> Self {
        Self {
            i18n_no_collapsible_whitespace: None,
            jsx_classname_namespace: None,
        }
    }

    pub fn with_i18n_no_collapsible_whitespace(mut self, rule: I18nNoCollapsibleWhitespace) -> Self {
        self.i18n_no_collapsible_whitespace = Some(rule);
        self
    }

    pub fn with_jsx_classname_namespace(mut self, rule: JsxClassnameNamespace) -> Self {
        self.jsx_classname_namespace = Some(rule);
        self
    }
}

/// Unified runner that executes all enabled rules over a program
pub struct LintRunner<'a> {
    ctx: LintContext<'a>,
    config: RulesConfig,
}

impl<'a> LintRunner<'a> {
    pub fn new(ctx: LintContext<'a>, config: RulesConfig) -> Self {
        Self { ctx, config }
    }

    /// Run all enabled rules on the given program
    pub fn run(mut self, program: &Program<'a>) -> LintResult {
        if let Some(rule) = &self.config.jsx_classname_namespace {
            if let Some(path) = self.ctx.file_path() {
                let diagnostics = rule.check_program(program, path);
                self.ctx.report_all(diagnostics);
            }
        }

        self.visit_program(program);

        LintResult {
            diagnostics: self.ctx.into_diagnostics(),
        }
    }
}

impl<'a> Visit<'a> for LintRunner<'a> {
    fn visit_call_expression(&mut self, call: &CallExpression<'a>) {
        if let Some(rule) = &self.config.i18n_no_collapsible_whitespace {
            self.ctx.report_all(rule.check(call));
        }
        walk::walk_call_expression(self, call);
    }
}

/// Result of running the linter
#[derive(Debug)]
pub struct LintResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl LintResult {
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d.severity, crate::DiagnosticSeverity::Error))
    }

    pub fn has_warnings(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, crate::DiagnosticSeverity::Error))
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, crate::DiagnosticSeverity::Warning))
            .count()
    }
}

/// Convenience function to lint a program with default configuration
pub fn lint<'a>(source_text: &'a str, file_path: &'a Path, program: &Program<'a>) -> LintResult {
    let ctx = LintContext::new(source_text, SourceType::jsx()).with_file_path(file_path);
    LintRunner::new(ctx, RulesConfig::default()).run(program)
}

/// Convenience function to lint a program with custom configuration
pub fn lint_with_config<'a>(
    source_text: &'a str,
    source_type: SourceType,
    file_path: Option<&'a Path>,
    program: &Program<'a>,
    config: RulesConfig,
) -> LintResult {
    let mut ctx = LintContext::new(source_text, source_type);
    if let Some(path) = file_path {
        ctx = ctx.with_file_path(path);
    }
    LintRunner::new(ctx, config).run(program)
}
