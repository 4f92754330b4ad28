pub mod config;
pub mod error;
pub mod types;

pub use config::BytePressConfig;
pub use error::{BpError, Result};
pub use types::{PayloadFeatures, PipelineKind, Verdict};
