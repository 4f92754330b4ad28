//! Routing rule model.

use bp_core::{PayloadFeatures, PipelineKind};

/// One routing rule: a set of optional conditions and a target pipeline.
///
/// Every condition that is present must hold for the rule to match; absent
/// conditions are ignored. A rule with no conditions matches everything,
/// which makes explicit catch-all rules possible. The entropy and size
/// bounds are unused by [`default_rules`] but keep the rule shape open for
/// feature-based routing without touching the matching logic.
#[derive(Debug, Clone)]
pub struct RoutingRule {
    /// Case-sensitive substring to look for in the media type.
    pub media_contains: Option<String>,
    pub min_entropy_bits: Option<f64>,
    pub max_entropy_bits: Option<f64>,
    pub min_size_bytes: Option<usize>,
    pub pipeline: PipelineKind,
}

impl RoutingRule {
    /// Rule matching any media type that contains `substring`.
    pub fn media(substring: impl Into<String>, pipeline: PipelineKind) -> Self {
        Self {
            media_contains: Some(substring.into()),
            min_entropy_bits: None,
            max_entropy_bits: None,
            min_size_bytes: None,
            pipeline,
        }
    }

    pub fn matches(&self, features: &PayloadFeatures) -> bool {
        if let Some(substring) = &self.media_contains {
            if !features.media_type.contains(substring.as_str()) {
                return false;
            }
        }
        if let Some(min) = self.min_entropy_bits {
            if features.entropy_bits < min {
                return false;
            }
        }
        if let Some(max) = self.max_entropy_bits {
            if features.entropy_bits > max {
                return false;
            }
        }
        if let Some(min) = self.min_size_bytes {
            if features.size_bytes < min {
                return false;
            }
        }
        true
    }
}

/// The built-in rule set.
///
/// Substring matching tolerates subtype variants ("image/png", "image/jpeg")
/// without enumerating them. The order is deliberate: pdf outranks image
/// outranks audio when a media type could satisfy more than one rule.
pub fn default_rules() -> Vec<RoutingRule> {
    vec![
        RoutingRule::media("pdf", PipelineKind::Pdf),
        RoutingRule::media("image", PipelineKind::Image),
        RoutingRule::media("audio", PipelineKind::Audio),
    ]
}
