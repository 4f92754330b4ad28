//! PDF transform: zlib at maximum level.
//!
//! PDF bodies hold a mix of text objects and already-compressed streams;
//! zlib at level 9 squeezes the text without touching the framing.

use std::io::Write;

use bp_core::{BpError, PipelineKind, Result};
use flate2::write::ZlibEncoder;
use flate2::Compression;

const LEVEL: u32 = 9;

/// Compress a PDF payload. Rejects anything without the `%PDF-` header.
pub fn compress(payload: &[u8]) -> Result<Vec<u8>> {
    compress_with_level(payload, LEVEL)
}

pub fn compress_with_level(payload: &[u8], level: u32) -> Result<Vec<u8>> {
    if !payload.starts_with(b"%PDF-") {
        return Err(BpError::Malformed {
            pipeline: PipelineKind::Pdf.as_str(),
            reason: "missing %PDF- header".to_string(),
        });
    }
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::new(level));
    encoder
        .write_all(payload)
        .map_err(|e| BpError::Codec(format!("zlib write: {e}")))?;
    encoder
        .finish()
        .map_err(|e| BpError::Codec(format!("zlib finish: {e}")))
}
