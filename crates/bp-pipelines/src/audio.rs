//! Audio transform: LZ4 with a length prefix.
//!
//! Audio payloads are either already perceptually coded (MP3, OGG) or raw
//! PCM where throughput matters more than ratio, so the fastest codec wins.

use bp_core::{BpError, PipelineKind, Result};

/// Compress an audio payload. Rejects payloads without a known audio signature.
pub fn compress(payload: &[u8]) -> Result<Vec<u8>> {
    if !bp_analyzer::sniff::is_audio(payload) {
        return Err(BpError::Malformed {
            pipeline: PipelineKind::Audio.as_str(),
            reason: "no recognized audio signature".to_string(),
        });
    }
    Ok(lz4_flex::compress_prepend_size(payload))
}
