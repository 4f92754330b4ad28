//! BytePress payload analysis — media sniffing and entropy measurement.
//!
//! Every payload that enters the system passes through [`analyze`] exactly
//! once. The resulting [`PayloadFeatures`] drive pipeline selection and are
//! echoed back on the compression response, so the analyzer never rejects
//! input: unrecognizable bytes simply come out as `application/octet-stream`.

pub mod entropy;
pub mod sniff;

use bp_core::PayloadFeatures;

pub use entropy::shannon_entropy;
pub use sniff::{classify, OCTET_STREAM};

/// Extract the routing features of a raw payload.
///
/// Total-function contract: any byte slice, including the empty one, yields
/// a feature set. Empty payloads report zero entropy and the octet-stream
/// media type.
pub fn analyze(payload: &[u8]) -> PayloadFeatures {
    let media_type = classify(payload).to_string();
    let entropy_bits = shannon_entropy(payload);
    let features = PayloadFeatures {
        media_type,
        size_bytes: payload.len(),
        entropy_bits,
    };
    tracing::debug!(
        "analyzed payload: media={} size={} entropy={:.3}",
        features.media_type,
        features.size_bytes,
        features.entropy_bits
    );
    features
}
