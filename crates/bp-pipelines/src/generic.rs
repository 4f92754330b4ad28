//! Catch-all transform: gzip at the default level.

use std::io::Write;

use bp_core::{BpError, Result};
use flate2::write::GzEncoder;
use flate2::Compression;

const LEVEL: u32 = 6;

/// Compress any payload with gzip. Never rejects input.
pub fn compress(payload: &[u8]) -> Result<Vec<u8>> {
    compress_with_level(payload, LEVEL)
}

pub fn compress_with_level(payload: &[u8], level: u32) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::new(level));
    encoder
        .write_all(payload)
        .map_err(|e| BpError::Codec(format!("gzip write: {e}")))?;
    encoder
        .finish()
        .map_err(|e| BpError::Codec(format!("gzip finish: {e}")))
}
