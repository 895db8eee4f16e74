//! Stringz Plugin System
//!
//! Lets string operations be described, looked up and called by name
//! with runtime `Value` arguments.

mod traits;
mod registry;
mod context;

pub use traits::{FunctionPlugin, FunctionMeta, ArgMeta};
pub use registry::PluginRegistry;
pub use context::EvalContext;

/// Re-export core types for plugin authors
pub mod prelude {
    pub use crate::{
        FunctionPlugin, FunctionMeta, ArgMeta,
        PluginRegistry, EvalContext,
    };
    pub use stringz_core::prelude::*;
}
