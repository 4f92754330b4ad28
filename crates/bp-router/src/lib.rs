//! BytePress Router — ordered first-match routing from payload features to a pipeline.

pub mod rules;

pub use rules::{default_rules, RoutingRule};

use bp_core::{PayloadFeatures, PipelineKind};

/// Select a pipeline using the built-in rule set.
pub fn select(features: &PayloadFeatures) -> PipelineKind {
    select_with_rules(features, &default_rules())
}

/// Select a pipeline by scanning `rules` in order and taking the first match.
///
/// Total over all feature values: when nothing matches, the generic pipeline
/// is the answer. Rule order is priority order, so a media type that would
/// satisfy several rules resolves to the earliest one.
pub fn select_with_rules(features: &PayloadFeatures, rules: &[RoutingRule]) -> PipelineKind {
    for rule in rules {
        if rule.matches(features) {
            tracing::debug!("routing {} -> {}", features.media_type, rule.pipeline);
            return rule.pipeline;
        }
    }
    tracing::debug!("routing {} -> {} (no rule matched)", features.media_type, PipelineKind::Generic);
    PipelineKind::Generic
}
