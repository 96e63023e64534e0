//! calypso/jsx-classname-namespace
//!
//! Ensure JSX className adheres to CSS namespace guidelines.
//!
//! The namespace token is the base name of the directory containing the
//! linted file. The element rendered at the root of an exported component
//! must carry a class equal to the namespace, and only root files (by
//! default `index.js`/`index.jsx`) may contain such root elements; every
//! other element must carry a `namespace__element` class. JSX handed
//! directly to a `render(...)` call is mounted outside any component and is
//! exempt, together with its subtree.

use std::path::Path;

use oxc_ast::ast::{
    ArrowFunctionExpression, AssignmentTarget, CallExpression, Class, ClassElement, Expression,
    ExportDefaultDeclarationKind, FunctionBody, JSXElement, ObjectExpression, ObjectPropertyKind,
    BindingPattern, Program, PropertyKey, Statement,
};
use oxc_ast_visit::{walk, Visit};
use oxc_span::Span;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::diagnostic::Diagnostic;
use crate::utils::{get_attribute, get_callee_name, string_attribute_value};
use crate::{RuleCategory, RuleMeta};

/// Files whose root elements may carry the bare namespace class
pub const DEFAULT_ROOT_FILES: &[&str] = &["index.js", "index.jsx"];

/// Configuration for jsx-classname-namespace
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsxClassnameNamespaceConfig {
    /// File names allowed to contain root rendered elements
    #[serde(default = "default_root_files")]
    pub root_files: Vec<String>,
}

fn default_root_files() -> Vec<String> {
    DEFAULT_ROOT_FILES.iter().map(|s| s.to_string()).collect()
}

impl Default for JsxClassnameNamespaceConfig {
    fn default() -> Self {
        Self {
            root_files: default_root_files(),
        }
    }
}

/// jsx-classname-namespace rule
#[derive(Debug, Clone, Default)]
pub struct JsxClassnameNamespace {
    pub config: JsxClassnameNamespaceConfig,
}

impl RuleMeta for JsxClassnameNamespace {
    const NAME: &'static str = "jsx-classname-namespace";
    const CATEGORY: RuleCategory = RuleCategory::Style;
}

impl JsxClassnameNamespace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: JsxClassnameNamespaceConfig) -> Self {
        Self { config }
    }

    /// Check every className attribute in the program against the namespace
    /// derived from `file_path`. Whole-program because root positions depend
    /// on the module's exports.
    pub fn check_program<'a>(&self, program: &Program<'a>, file_path: &Path) -> Vec<Diagnostic> {
        let Some(namespace) = file_path
            .parent()
            .and_then(Path::file_name)
            .and_then(|n| n.to_str())
        else {
            return Vec::new();
        };
        let Some(file_name) = file_path.file_name().and_then(|n| n.to_str()) else {
            return Vec::new();
        };
        if namespace.is_empty() {
            return Vec::new();
        }

        let mut checker = ClassNameChecker {
            rule: self,
            namespace,
            is_root_file: self.config.root_files.iter().any(|f| f == file_name),
            root_spans: collect_root_spans(program),
            exempt_spans: Vec::new(),
            diagnostics: Vec::new(),
        };
        checker.visit_program(program);
        checker.diagnostics
    }
}

/// A class token in prefix position must be `namespace__element`, with a
/// non-empty element part containing no further `__`.
fn is_valid_prefixed_token(token: &str, namespace: &str) -> bool {
    let Some(rest) = token.strip_prefix(namespace) else {
        return false;
    };
    let Some(element) = rest.strip_prefix("__") else {
        return false;
    };
    !element.is_empty() && !element.contains("__")
}

fn format_root_files(root_files: &[String]) -> String {
    if root_files.len() == 1 {
        root_files[0].clone()
    } else {
        format!("one of {}", root_files.join(", "))
    }
}

// ==================== Root position collection ====================

/// Collect the spans of JSX elements rendered at the root of an exported
/// component: the return value of an exported function or arrow (directly,
/// through parentheses, or via a returned local), or of the `render` method
/// of an exported class or `createClass` object. Exports may wrap the
/// component in arbitrarily nested higher-order-component calls.
fn collect_root_spans<'a>(program: &Program<'a>) -> FxHashSet<Span> {
    let mut exported_names: FxHashSet<&'a str> = FxHashSet::default();
    let mut roots = FxHashSet::default();

    // First pass: exports, both inline components and exported names
    for stmt in &program.body {
        match stmt {
            Statement::ExportDefaultDeclaration(export) => match &export.declaration {
                ExportDefaultDeclarationKind::FunctionDeclaration(func) => {
                    mark_function_roots(func.body.as_deref(), &mut roots);
                }
                ExportDefaultDeclarationKind::ClassDeclaration(class) => {
                    mark_class_roots(class, &mut roots);
                }
                kind => {
                    if let Some(expr) = kind.as_expression() {
                        mark_exported_expression(expr, &mut exported_names, &mut roots);
                    }
                }
            },
            Statement::ExpressionStatement(expr_stmt) => {
                if let Expression::AssignmentExpression(assign) = &expr_stmt.expression {
                    if is_module_exports_target(&assign.left) {
                        mark_exported_expression(&assign.right, &mut exported_names, &mut roots);
                    }
                }
            }
            _ => {}
        }
    }

    // Second pass: top-level declarations whose name is exported
    for stmt in &program.body {
        match stmt {
            Statement::FunctionDeclaration(func) => {
                let named_export = func
                    .id
                    .as_ref()
                    .is_some_and(|id| exported_names.contains(id.name.as_str()));
                if named_export {
                    mark_function_roots(func.body.as_deref(), &mut roots);
                }
            }
            Statement::ClassDeclaration(class) => {
                let named_export = class
                    .id
                    .as_ref()
                    .is_some_and(|id| exported_names.contains(id.name.as_str()));
                if named_export {
                    mark_class_roots(class, &mut roots);
                }
            }
            Statement::VariableDeclaration(decl) => {
                for declarator in &decl.declarations {
                    let BindingPattern::BindingIdentifier(id) = &declarator.id else {
                        continue;
                    };
                    if !exported_names.contains(id.name.as_str()) {
                        continue;
                    }
                    if let Some(init) = &declarator.init {
                        mark_component_expression(init, &mut roots);
                    }
                }
            }
            _ => {}
        }
    }

    roots
}

/// Resolve an exported expression: identifiers are remembered as exported
/// names, inline functions/classes are marked directly, and call wrappers
/// (`localize(localize(Foo))`, `connect()(Foo)`) are searched argument by
/// argument. A `createClass` call exports the object's `render` method.
fn mark_exported_expression<'a>(
    expr: &Expression<'a>,
    exported_names: &mut FxHashSet<&'a str>,
    roots: &mut FxHashSet<Span>,
) {
    match expr {
        Expression::ParenthesizedExpression(paren) => {
            mark_exported_expression(&paren.expression, exported_names, roots);
        }
        Expression::Identifier(ident) => {
            exported_names.insert(ident.name.as_str());
        }
        Expression::CallExpression(call) => {
            if let Some(object) = createclass_argument(call) {
                mark_object_render_roots(object, roots);
                return;
            }
            for arg in &call.arguments {
                if let Some(arg_expr) = arg.as_expression() {
                    mark_exported_expression(arg_expr, exported_names, roots);
                }
            }
        }
        _ => mark_component_expression(expr, roots),
    }
}

/// Mark the root elements of a component-valued expression
fn mark_component_expression<'a>(expr: &Expression<'a>, roots: &mut FxHashSet<Span>) {
    match expr {
        Expression::ParenthesizedExpression(paren) => {
            mark_component_expression(&paren.expression, roots);
        }
        Expression::FunctionExpression(func) => {
            mark_function_roots(func.body.as_deref(), roots);
        }
        Expression::ArrowFunctionExpression(arrow) => {
            mark_arrow_roots(arrow, roots);
        }
        Expression::ClassExpression(class) => {
            mark_class_roots(class, roots);
        }
        Expression::CallExpression(call) => {
            if let Some(object) = createclass_argument(call) {
                mark_object_render_roots(object, roots);
            }
        }
        _ => {}
    }
}

fn mark_arrow_roots<'a>(arrow: &ArrowFunctionExpression<'a>, roots: &mut FxHashSet<Span>) {
    if arrow.expression {
        if let Some(Statement::ExpressionStatement(expr_stmt)) = arrow.body.statements.first() {
            mark_return_expression(&expr_stmt.expression, &FxHashMap::default(), roots);
        }
    } else {
        mark_function_roots(Some(&arrow.body), roots);
    }
}

fn mark_function_roots<'a>(body: Option<&FunctionBody<'a>>, roots: &mut FxHashSet<Span>) {
    let Some(body) = body else {
        return;
    };

    // JSX assigned to a local and then returned by name also counts as root
    let mut jsx_locals: FxHashMap<&'a str, Span> = FxHashMap::default();
    for stmt in &body.statements {
        if let Statement::VariableDeclaration(decl) = stmt {
            for declarator in &decl.declarations {
                let BindingPattern::BindingIdentifier(id) = &declarator.id else {
                    continue;
                };
                if let Some(span) = declarator.init.as_ref().and_then(jsx_element_span) {
                    jsx_locals.insert(id.name.as_str(), span);
                }
            }
        }
    }

    for stmt in &body.statements {
        if let Statement::ReturnStatement(ret) = stmt {
            if let Some(arg) = &ret.argument {
                mark_return_expression(arg, &jsx_locals, roots);
            }
        }
    }
}

fn mark_return_expression<'a>(
    expr: &Expression<'a>,
    jsx_locals: &FxHashMap<&'a str, Span>,
    roots: &mut FxHashSet<Span>,
) {
    match expr {
        Expression::ParenthesizedExpression(paren) => {
            mark_return_expression(&paren.expression, jsx_locals, roots);
        }
        Expression::JSXElement(element) => {
            roots.insert(element.span);
        }
        Expression::Identifier(ident) => {
            if let Some(span) = jsx_locals.get(ident.name.as_str()) {
                roots.insert(*span);
            }
        }
        _ => {}
    }
}

fn mark_class_roots<'a>(class: &Class<'a>, roots: &mut FxHashSet<Span>) {
    for element in &class.body.body {
        if let ClassElement::MethodDefinition(method) = element {
            if property_key_is(&method.key, "render") {
                mark_function_roots(method.value.body.as_deref(), roots);
            }
        }
    }
}

fn mark_object_render_roots<'a>(object: &ObjectExpression<'a>, roots: &mut FxHashSet<Span>) {
    for prop in &object.properties {
        let ObjectPropertyKind::ObjectProperty(prop) = prop else {
            continue;
        };
        if !property_key_is(&prop.key, "render") {
            continue;
        }
        match &prop.value {
            Expression::FunctionExpression(func) => {
                mark_function_roots(func.body.as_deref(), roots);
            }
            Expression::ArrowFunctionExpression(arrow) => mark_arrow_roots(arrow, roots),
            _ => {}
        }
    }
}

fn property_key_is(key: &PropertyKey<'_>, name: &str) -> bool {
    match key {
        PropertyKey::StaticIdentifier(ident) => ident.name == name,
        PropertyKey::StringLiteral(lit) => lit.value == name,
        _ => false,
    }
}

fn createclass_argument<'a, 'b>(
    call: &'b CallExpression<'a>,
) -> Option<&'b ObjectExpression<'a>> {
    if get_callee_name(call) != Some("createClass") {
        return None;
    }
    match call.arguments.first()?.as_expression()? {
        Expression::ObjectExpression(object) => Some(object),
        _ => None,
    }
}

fn is_module_exports_target(target: &AssignmentTarget<'_>) -> bool {
    let AssignmentTarget::StaticMemberExpression(member) = target else {
        return false;
    };
    let Expression::Identifier(object) = &member.object else {
        return false;
    };
    object.name == "module" && member.property.name == "exports"
}

fn jsx_element_span(expr: &Expression<'_>) -> Option<Span> {
    match expr {
        Expression::ParenthesizedExpression(paren) => jsx_element_span(&paren.expression),
        Expression::JSXElement(element) => Some(element.span),
        _ => None,
    }
}

// ==================== Checking pass ====================

struct ClassNameChecker<'n, 'r> {
    rule: &'r JsxClassnameNamespace,
    namespace: &'n str,
    is_root_file: bool,
    root_spans: FxHashSet<Span>,
    /// Subtrees handed to a `render(...)` call, visited parent-first so the
    /// span is always recorded before its elements are checked
    exempt_spans: Vec<Span>,
    diagnostics: Vec<Diagnostic>,
}

impl ClassNameChecker<'_, '_> {
    fn is_exempt(&self, span: Span) -> bool {
        self.exempt_spans
            .iter()
            .any(|e| e.start <= span.start && span.end <= e.end)
    }

    fn check_element(&mut self, element: &JSXElement<'_>) {
        if self.is_exempt(element.span) {
            return;
        }
        let Some(attr) = get_attribute(&element.opening_element, "className") else {
            return;
        };
        let Some(value) = string_attribute_value(attr) else {
            return;
        };

        let namespace = self.namespace;
        let is_root = self.root_spans.contains(&element.span);
        let prefix_ok = value
            .split_whitespace()
            .any(|token| is_valid_prefixed_token(token, namespace));

        let (is_ok, expected) = if is_root && self.is_root_file {
            let exact = value.split_whitespace().any(|token| token == namespace);
            (exact, namespace.to_string())
        } else if is_root {
            (
                prefix_ok,
                format!(
                    "{}__ prefix or to be in {}",
                    namespace,
                    format_root_files(&self.rule.config.root_files)
                ),
            )
        } else {
            (prefix_ok, format!("{}__ prefix", namespace))
        };

        if !is_ok {
            self.diagnostics.push(Diagnostic::warning(
                JsxClassnameNamespace::NAME,
                attr.span,
                format!(
                    "className should follow CSS namespace guidelines (expected {})",
                    expected
                ),
            ));
        }
    }
}

impl<'a> Visit<'a> for ClassNameChecker<'_, '_> {
    fn visit_call_expression(&mut self, call: &CallExpression<'a>) {
        if get_callee_name(call) == Some("render") {
            for arg in &call.arguments {
                if let Some(span) = arg.as_expression().and_then(jsx_element_span) {
                    self.exempt_spans.push(span);
                }
            }
        }
        walk::walk_call_expression(self, call);
    }

    fn visit_jsx_element(&mut self, element: &JSXElement<'a>) {
        self.check_element(element);
        walk::walk_jsx_element(self, element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_name() {
        assert_eq!(JsxClassnameNamespace::NAME, "jsx-classname-namespace");
    }

    #[test]
    fn test_config_defaults() {
        let config = JsxClassnameNamespaceConfig::default();
        assert_eq!(config.root_files, vec!["index.js", "index.jsx"]);
    }

    #[test]
    fn test_config_deserialize() {
        let json = r#"{"rootFiles": ["main.js"]}"#;
        let config: JsxClassnameNamespaceConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.root_files, vec!["main.js"]);
    }

    #[test]
    fn test_valid_prefixed_token() {
        assert!(is_valid_prefixed_token("foo__child", "foo"));
        assert!(is_valid_prefixed_token("foo__child-example2", "foo"));
        assert!(!is_valid_prefixed_token("foo", "foo"));
        assert!(!is_valid_prefixed_token("foo__", "foo"));
        assert!(!is_valid_prefixed_token("foo__child__example", "foo"));
        assert!(!is_valid_prefixed_token("foobar__child", "foo"));
    }

    #[test]
    fn test_format_root_files() {
        assert_eq!(format_root_files(&["one.js".to_string()]), "one.js");
        assert_eq!(
            format_root_files(&["index.js".to_string(), "index.jsx".to_string()]),
            "one of index.js, index.jsx"
        );
    }
}
