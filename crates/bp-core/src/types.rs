use std::fmt;

/// Measured content features of a payload. Computed once per request by the
/// analyzer, consumed by the router; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PayloadFeatures {
    /// MIME-like classification from magic-byte sniffing;
    /// `application/octet-stream` when nothing matches.
    pub media_type: String,
    /// Exact payload length, including 0.
    pub size_bytes: usize,
    /// Shannon entropy over the byte histogram, in bits per byte, in [0, 8].
    pub entropy_bits: f64,
}

/// Closed set of compression pipelines. Acts as a registry key, not an
/// identity; unknown wire names resolve to `Generic` at the boundaries
/// instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineKind {
    Pdf,
    Image,
    Audio,
    Generic,
}

impl PipelineKind {
    pub const ALL: [PipelineKind; 4] = [Self::Pdf, Self::Image, Self::Audio, Self::Generic];

    /// Wire name used in API responses and pipeline overrides.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf_pipeline",
            Self::Image => "image_pipeline",
            Self::Audio => "audio_pipeline",
            Self::Generic => "generic_pipeline",
        }
    }

    /// Resolve a wire name. Callers that must never fail map `None` to
    /// `Generic`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pdf_pipeline" => Some(Self::Pdf),
            "image_pipeline" => Some(Self::Image),
            "audio_pipeline" => Some(Self::Audio),
            "generic_pipeline" => Some(Self::Generic),
            _ => None,
        }
    }
}

impl fmt::Display for PipelineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of validating a compressed artifact against its original.
/// `compressed_size` is reported whether or not the artifact is acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub valid: bool,
    pub compressed_size: usize,
}
