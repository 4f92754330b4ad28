//! Content-based media type detection.
//!
//! Classification looks only at the payload bytes. Declared content types
//! and filenames are ignored on purpose: clients lie, magic bytes do not.

/// Media type reported when no signature matches, including for empty input.
pub const OCTET_STREAM: &str = "application/octet-stream";

struct Signature {
    magic: &'static [u8],
    mime: &'static str,
}

/// Fixed-prefix signatures, checked in order.
const SIGNATURES: &[Signature] = &[
    Signature { magic: b"%PDF-", mime: "application/pdf" },
    Signature { magic: &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A], mime: "image/png" },
    Signature { magic: &[0xFF, 0xD8, 0xFF], mime: "image/jpeg" },
    Signature { magic: b"GIF87a", mime: "image/gif" },
    Signature { magic: b"GIF89a", mime: "image/gif" },
    Signature { magic: &[0x49, 0x49, 0x2A, 0x00], mime: "image/tiff" },
    Signature { magic: &[0x4D, 0x4D, 0x00, 0x2A], mime: "image/tiff" },
    Signature { magic: b"BM", mime: "image/bmp" },
    Signature { magic: b"ID3", mime: "audio/mpeg" },
    Signature { magic: b"fLaC", mime: "audio/flac" },
    Signature { magic: b"OggS", mime: "audio/ogg" },
    Signature { magic: &[0x1F, 0x8B], mime: "application/gzip" },
    Signature { magic: &[0x50, 0x4B, 0x03, 0x04], mime: "application/zip" },
    Signature { magic: &[0x28, 0xB5, 0x2F, 0xFD], mime: "application/zstd" },
    Signature { magic: &[0xFD, 0x37, 0x7A, 0x58, 0x5A, 0x00], mime: "application/x-xz" },
    Signature { magic: b"BZh", mime: "application/x-bzip2" },
];

/// Classify a payload by signature inspection.
///
/// Returns [`OCTET_STREAM`] when nothing matches. Container formats whose
/// magic alone is ambiguous (RIFF, ISO-BMFF, raw MPEG streams) get a second
/// look at their inner form type.
pub fn classify(payload: &[u8]) -> &'static str {
    for sig in SIGNATURES {
        if payload.starts_with(sig.magic) {
            return sig.mime;
        }
    }
    if let Some(mime) = classify_riff(payload) {
        return mime;
    }
    if let Some(mime) = classify_isobmff(payload) {
        return mime;
    }
    // Weakest heuristic last: a bare MPEG audio frame has no file header.
    if has_mpeg_frame_sync(payload) {
        return "audio/mpeg";
    }
    OCTET_STREAM
}

/// RIFF containers carry the form type at offset 8.
fn classify_riff(payload: &[u8]) -> Option<&'static str> {
    if payload.len() < 12 || &payload[0..4] != b"RIFF" {
        return None;
    }
    match &payload[8..12] {
        b"WAVE" => Some("audio/wav"),
        b"WEBP" => Some("image/webp"),
        _ => None,
    }
}

/// ISO base media files start with an `ftyp` box; the major brand at
/// offset 8 distinguishes audio-only M4A from general MP4.
fn classify_isobmff(payload: &[u8]) -> Option<&'static str> {
    if payload.len() < 12 || &payload[4..8] != b"ftyp" {
        return None;
    }
    if payload[8..12].starts_with(b"M4A") {
        Some("audio/mp4")
    } else {
        Some("video/mp4")
    }
}

/// MPEG audio frame sync: 11 set bits, then non-reserved version and layer
/// fields. Intentionally strict enough to not trip on arbitrary 0xFF runs.
fn has_mpeg_frame_sync(payload: &[u8]) -> bool {
    if payload.len() < 4 || payload[0] != 0xFF {
        return false;
    }
    let b1 = payload[1];
    (b1 & 0xE0) == 0xE0 && (b1 >> 3) & 0x03 != 0x01 && (b1 >> 1) & 0x03 != 0x00
}

/// Whether the payload carries one of the recognized image signatures.
pub fn is_image(payload: &[u8]) -> bool {
    classify(payload).starts_with("image/")
}

/// Whether the payload carries one of the recognized audio signatures.
pub fn is_audio(payload: &[u8]) -> bool {
    classify(payload).starts_with("audio/")
}
