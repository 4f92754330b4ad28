use serde::{Deserialize, Serialize};

use crate::error::{BpError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BytePressConfig {
    pub server: ServerConfig,
    pub limits: LimitsConfig,
    pub validation: ValidationConfig,
    pub codec: CodecConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Largest accepted request payload, in bytes.
    pub max_payload_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// A compressed artifact may be at most `max_ratio` times the original
    /// size and still count as valid.
    pub max_ratio: f64,
}

/// Compression levels for the level-capable codecs. LZ4 has no level knob.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodecConfig {
    pub gzip_level: u32,
    pub zlib_level: u32,
    pub zstd_level: i32,
}

impl Default for BytePressConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".into(),
                port: 8080,
            },
            limits: LimitsConfig {
                max_payload_bytes: 64 * 1024 * 1024,
            },
            validation: ValidationConfig { max_ratio: 1.0 },
            codec: CodecConfig {
                gzip_level: 6,
                zlib_level: 9,
                zstd_level: 3,
            },
        }
    }
}

impl BytePressConfig {
    /// Load and validate a config from a JSON file.
    pub fn from_json_file(path: &str) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.validation.max_ratio <= 0.0 {
            return Err(BpError::InvalidConfig(format!(
                "validation.max_ratio must be positive, got {}",
                self.validation.max_ratio
            )));
        }
        if self.limits.max_payload_bytes == 0 {
            return Err(BpError::InvalidConfig(
                "limits.max_payload_bytes must be nonzero".into(),
            ));
        }
        if self.codec.gzip_level > 9 || self.codec.zlib_level > 9 {
            return Err(BpError::InvalidConfig(format!(
                "deflate levels must be 0-9, got gzip={} zlib={}",
                self.codec.gzip_level, self.codec.zlib_level
            )));
        }
        if !(1..=21).contains(&self.codec.zstd_level) {
            return Err(BpError::InvalidConfig(format!(
                "codec.zstd_level must be 1-21, got {}",
                self.codec.zstd_level
            )));
        }
        Ok(())
    }
}
