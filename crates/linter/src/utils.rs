//! Utility functions for Calypso linting rules

use oxc_ast::ast::{
    CallExpression, Expression, JSXAttribute, JSXAttributeItem, JSXAttributeName,
    JSXAttributeValue, JSXOpeningElement,
};
use oxc_syntax::operator::BinaryOperator;

/// Get the effective callee name of a call expression.
///
/// For member expressions the property name is used, so `translate(...)`,
/// `this.translate(...)` and `i18n.translate(...)` all resolve to "translate".
pub fn get_callee_name<'a>(call: &CallExpression<'a>) -> Option<&'a str> {
    match &call.callee {
        Expression::Identifier(ident) => Some(ident.name.as_str()),
        Expression::StaticMemberExpression(member) => Some(member.property.name.as_str()),
        Expression::ParenthesizedExpression(paren) => match &paren.expression {
            Expression::Identifier(ident) => Some(ident.name.as_str()),
            Expression::StaticMemberExpression(member) => Some(member.property.name.as_str()),
            _ => None,
        },
        _ => None,
    }
}

/// Extract the static text content of an expression, if any.
///
/// Covers string literals, template literals (substitutions contribute
/// nothing), and `+` concatenations where both sides resolve to text.
pub fn text_content<'a>(expr: &Expression<'a>) -> Option<String> {
    match expr {
        Expression::StringLiteral(lit) => Some(lit.value.to_string()),
        Expression::TemplateLiteral(tpl) => {
            let mut text = String::new();
            for quasi in &tpl.quasis {
                text.push_str(quasi.value.cooked.as_ref()?.as_str());
            }
            Some(text)
        }
        Expression::BinaryExpression(bin) if bin.operator == BinaryOperator::Addition => {
            let left = text_content(&bin.left)?;
            let right = text_content(&bin.right)?;
            Some(left + &right)
        }
        Expression::ParenthesizedExpression(paren) => text_content(&paren.expression),
        _ => None,
    }
}

/// Get an attribute by name from a JSX opening element
pub fn get_attribute<'a, 'b>(
    element: &'b JSXOpeningElement<'a>,
    name: &str,
) -> Option<&'b JSXAttribute<'a>> {
    for attr in &element.attributes {
        if let JSXAttributeItem::Attribute(jsx_attr) = attr {
            if let JSXAttributeName::Identifier(ident) = &jsx_attr.name {
                if ident.name == name {
                    return Some(jsx_attr);
                }
            }
        }
    }
    None
}

/// Get the string literal value of a JSX attribute, directly or through an
/// expression container (`className="foo"` or `className={ "foo" }`).
pub fn string_attribute_value<'a>(attr: &JSXAttribute<'a>) -> Option<&'a str> {
    match attr.value.as_ref()? {
        JSXAttributeValue::StringLiteral(lit) => Some(lit.value.as_str()),
        JSXAttributeValue::ExpressionContainer(container) => {
            match container.expression.as_expression()? {
                Expression::StringLiteral(lit) => Some(lit.value.as_str()),
                _ => None,
            }
        }
        _ => None,
    }
}
