//! BytePress Validator — size-budget checks on compression artifacts.

use bp_core::config::ValidationConfig;
use bp_core::Verdict;

/// Validation policy for compressed artifacts.
///
/// An artifact is valid when it is non-empty and no larger than the original
/// scaled by `max_ratio`. The default ratio of 1.0 flags any transform that
/// grew its input, which is the usual sign of feeding pre-compressed data to
/// a second codec. The verdict always carries the compressed size, so even a
/// failed check reports what the transform produced.
#[derive(Debug, Clone, Copy)]
pub struct ValidationPolicy {
    max_ratio: f64,
}

impl ValidationPolicy {
    pub fn new(max_ratio: f64) -> Self {
        Self { max_ratio }
    }

    pub fn from_config(config: &ValidationConfig) -> Self {
        Self::new(config.max_ratio)
    }

    pub fn max_ratio(&self) -> f64 {
        self.max_ratio
    }

    /// Judge a compression artifact against the original payload.
    ///
    /// An empty original can never validate: every real codec emits header
    /// bytes, so the artifact exceeds any scaled size budget of zero.
    pub fn validate(&self, original: &[u8], compressed: &[u8]) -> Verdict {
        let compressed_size = compressed.len();
        let budget = original.len() as f64 * self.max_ratio;
        let valid = !compressed.is_empty() && compressed_size as f64 <= budget;
        if !valid {
            tracing::debug!(
                "artifact failed validation: {} bytes against budget {:.0}",
                compressed_size,
                budget
            );
        }
        Verdict { valid, compressed_size }
    }
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Validate with the default policy.
pub fn validate(original: &[u8], compressed: &[u8]) -> Verdict {
    ValidationPolicy::default().validate(original, compressed)
}
