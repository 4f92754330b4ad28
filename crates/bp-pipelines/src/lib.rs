//! BytePress Pipelines — per-media compression transforms and their registry.
//!
//! Each pipeline module exposes a single `compress` function with the shared
//! transform signature. The media-specific pipelines reject payloads outside
//! their family; the generic pipeline accepts anything. [`PipelineRegistry`]
//! maps [`PipelineKind`](bp_core::PipelineKind) to transforms and falls back
//! to the generic transform whenever a lookup misses, so dispatch itself
//! never fails on an unknown or unregistered pipeline.

pub mod audio;
pub mod generic;
pub mod image;
pub mod pdf;
pub mod registry;

pub use registry::{PipelineRegistry, Transform};
