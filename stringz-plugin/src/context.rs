//! Evaluation Context

use crate::PluginRegistry;
use stringz_core::FmtOptions;
use std::sync::Arc;

/// Evaluation context passed to plugins
pub struct EvalContext {
    pub registry: Arc<PluginRegistry>,
    pub fmt_options: FmtOptions,
}

impl EvalContext {
    pub fn new(registry: Arc<PluginRegistry>) -> Self {
        Self {
            registry,
            fmt_options: FmtOptions::default(),
        }
    }

    pub fn with_fmt_options(mut self, options: FmtOptions) -> Self {
        self.fmt_options = options;
        self
    }
}
