//! Pipeline registry and dispatch.

use std::collections::HashMap;
use std::sync::Arc;

use bp_core::config::CodecConfig;
use bp_core::{PipelineKind, Result};

use crate::{audio, generic, image, pdf};

/// A compression transform. Shared so a registry clone is cheap and a
/// registry can be handed to concurrent request handlers behind an `Arc`.
pub type Transform = Arc<dyn Fn(&[u8]) -> Result<Vec<u8>> + Send + Sync>;

/// Maps pipeline kinds to transforms.
///
/// Construction is explicit: callers build a registry once (usually
/// [`PipelineRegistry::with_defaults`]) and share it, rather than reaching
/// into process-global state. Lookups that miss fall back to whatever is
/// registered for `Generic`, or to the built-in generic transform when that
/// slot is empty too, so [`dispatch`](Self::dispatch) is total over
/// `PipelineKind` even for a partially populated registry. Transform errors
/// are the one thing dispatch does not absorb: a failing transform
/// propagates to the caller untouched.
#[derive(Clone)]
pub struct PipelineRegistry {
    transforms: HashMap<PipelineKind, Transform>,
    /// Last resort for registries with no `Generic` entry.
    fallback: Transform,
}

fn default_transform(kind: PipelineKind) -> Transform {
    match kind {
        PipelineKind::Pdf => Arc::new(pdf::compress),
        PipelineKind::Image => Arc::new(image::compress),
        PipelineKind::Audio => Arc::new(audio::compress),
        PipelineKind::Generic => Arc::new(generic::compress),
    }
}

impl PipelineRegistry {
    /// Registry with no registered transforms. Every dispatch falls back
    /// to the generic transform.
    pub fn empty() -> Self {
        Self {
            transforms: HashMap::new(),
            fallback: Arc::new(generic::compress),
        }
    }

    /// Registry with all built-in pipelines registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        for kind in PipelineKind::ALL {
            registry.register(kind, default_transform(kind));
        }
        registry
    }

    /// Registry with all built-in pipelines at configured codec levels.
    /// The fallback uses the configured gzip level too.
    pub fn with_config(codec: &CodecConfig) -> Self {
        let gzip = codec.gzip_level;
        let zlib = codec.zlib_level;
        let zstd = codec.zstd_level;
        let fallback: Transform = Arc::new(move |p: &[u8]| generic::compress_with_level(p, gzip));
        let mut registry = Self {
            transforms: HashMap::new(),
            fallback: Arc::clone(&fallback),
        };
        registry.register(PipelineKind::Pdf, Arc::new(move |p: &[u8]| pdf::compress_with_level(p, zlib)));
        registry.register(PipelineKind::Image, Arc::new(move |p: &[u8]| image::compress_with_level(p, zstd)));
        registry.register(PipelineKind::Audio, Arc::new(audio::compress));
        registry.register(PipelineKind::Generic, fallback);
        registry
    }

    /// Install or replace the transform for `kind`.
    pub fn register(&mut self, kind: PipelineKind, transform: Transform) {
        self.transforms.insert(kind, transform);
    }

    pub fn lookup(&self, kind: PipelineKind) -> Option<&Transform> {
        self.transforms.get(&kind)
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Run the transform registered for `kind` on `payload`. A miss resolves
    /// through the `Generic` slot first, so replacing the generic transform
    /// retargets the fallback path as well.
    pub fn dispatch(&self, kind: PipelineKind, payload: &[u8]) -> Result<Vec<u8>> {
        match self.transforms.get(&kind) {
            Some(transform) => transform(payload),
            None => {
                tracing::warn!("pipeline {kind} not registered, using generic fallback");
                let fallback = self
                    .transforms
                    .get(&PipelineKind::Generic)
                    .unwrap_or(&self.fallback);
                fallback(payload)
            }
        }
    }

    /// Dispatch by wire name. Names that resolve to no known pipeline go
    /// to the generic pipeline instead of erroring.
    pub fn dispatch_named(&self, name: &str, payload: &[u8]) -> Result<Vec<u8>> {
        match PipelineKind::from_name(name) {
            Some(kind) => self.dispatch(kind, payload),
            None => {
                tracing::warn!("unknown pipeline name {name:?}, using generic fallback");
                self.dispatch(PipelineKind::Generic, payload)
            }
        }
    }
}

impl Default for PipelineRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
