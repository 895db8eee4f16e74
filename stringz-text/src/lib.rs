//! Stringz Text Functions
//!
//! Small string primitives: prefix/suffix tests, case-insensitive
//! containment, literal replace-all, regex escaping and `%{...}` template
//! formatting. Each is available three ways:
//! - as a free function (`replace_all(value, old, new)`)
//! - as a method through [`TextExt`] (`value.replace_all(old, new)`)
//! - as a registry plugin, called by name with `Value` arguments
//!
//! All functions are pure and safe to call from any thread. Plugins never
//! panic and return `Value::Error` on failure.

mod helpers;
mod escape;
mod search;
mod replace;
mod template;
mod ext;

use stringz_plugin::PluginRegistry;

pub use escape::{escape_regex, is_regex_special};
pub use search::{starts_with, ends_with, contains_ignore_case};
pub use replace::{replace_all, replace_all_ignore_case};
pub use template::{fmt, fmt_with, FmtError};
pub use ext::TextExt;

/// Plugin types, for registering individual functions
pub mod plugins {
    pub use crate::escape::EscapeRegex;
    pub use crate::search::{StartsWith, EndsWith, ContainsIgnoreCase};
    pub use crate::replace::{ReplaceAll, ReplaceAllIgnoreCase};
    pub use crate::template::Fmt;
}

/// Load text functions into registry
pub fn load_text_library(registry: PluginRegistry) -> PluginRegistry {
    registry
        // Escape
        .with_function(escape::EscapeRegex)

        // Search
        .with_function(search::StartsWith)
        .with_function(search::EndsWith)
        .with_function(search::ContainsIgnoreCase)

        // Replace
        .with_function(replace::ReplaceAll)
        .with_function(replace::ReplaceAllIgnoreCase)

        // Format
        .with_function(template::Fmt)
}
