//! Image transform: zstd at a fast level.
//!
//! Raster formats are usually pre-compressed, so a heavy setting would burn
//! CPU for nothing. Level 3 still wins on uncompressed BMP/TIFF data and on
//! format metadata.

use bp_core::{BpError, PipelineKind, Result};

const LEVEL: i32 = 3;

/// Compress an image payload. Rejects payloads without a known image signature.
pub fn compress(payload: &[u8]) -> Result<Vec<u8>> {
    compress_with_level(payload, LEVEL)
}

pub fn compress_with_level(payload: &[u8], level: i32) -> Result<Vec<u8>> {
    if !bp_analyzer::sniff::is_image(payload) {
        return Err(BpError::Malformed {
            pipeline: PipelineKind::Image.as_str(),
            reason: "no recognized image signature".to_string(),
        });
    }
    zstd::encode_all(payload, level).map_err(|e| BpError::Codec(format!("zstd: {e}")))
}
