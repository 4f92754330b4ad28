//! Application state shared across all handlers.

use std::sync::Arc;
use std::time::Instant;

use bp_core::BytePressConfig;
use bp_pipelines::PipelineRegistry;
use bp_router::{default_rules, RoutingRule};
use bp_validator::ValidationPolicy;

/// Shared application state.
///
/// The registry and routing rules are built once at startup and shared
/// behind `Arc`s, so cloning the state per request stays cheap and no
/// handler ever reaches into global statics.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<PipelineRegistry>,
    pub rules: Arc<Vec<RoutingRule>>,
    pub policy: ValidationPolicy,
    pub max_payload_bytes: usize,
    pub start_time: Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self::from_config(&BytePressConfig::default())
    }

    pub fn from_config(config: &BytePressConfig) -> Self {
        Self {
            registry: Arc::new(PipelineRegistry::with_config(&config.codec)),
            rules: Arc::new(default_rules()),
            policy: ValidationPolicy::from_config(&config.validation),
            max_payload_bytes: config.limits.max_payload_bytes,
            start_time: Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
