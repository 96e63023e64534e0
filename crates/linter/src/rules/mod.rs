//! Calypso lint rules
//!
//! Rules ported from eslint-plugin-wpcalypso

pub mod i18n_no_collapsible_whitespace;
pub mod jsx_classname_namespace;

// Re-export rule structs and their configs
pub use i18n_no_collapsible_whitespace::{
    I18nNoCollapsibleWhitespace, I18nNoCollapsibleWhitespaceConfig,
};
pub use jsx_classname_namespace::{
    JsxClassnameNamespace, JsxClassnameNamespaceConfig, DEFAULT_ROOT_FILES,
};
