// Engine policy configuration loading and parsing (engine.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Top-level assembled config
// ---------------------------------------------------------------------------

/// Tunable blend ratios used by the ranking engine.
///
/// Classification and trait thresholds are not part of this struct; they
/// live in [`crate::analysis::thresholds`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EngineConfig {
    pub ranking: RankingPolicy,
    pub profile: ProfilePolicy,
    pub confidence: ConfidenceWeights,
    pub strategic_value: StrategicWeights,
    pub compatibility: CompatibilityPolicy,
}

// ---------------------------------------------------------------------------
// engine.toml structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for the entire engine.toml file.
/// Every section is optional and falls back to its defaults.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct EngineFile {
    ranking: RankingPolicy,
    profile: ProfilePolicy,
    confidence: ConfidenceWeights,
    strategic_value: StrategicWeights,
    compatibility: CompatibilityPolicy,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RankingPolicy {
    /// Maximum number of suggestions returned by a roster analysis.
    pub top_n: usize,
}

impl Default for RankingPolicy {
    fn default() -> Self {
        RankingPolicy { top_n: 10 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProfilePolicy {
    /// Match count at which the sample-size factor saturates at 1.0.
    pub match_saturation: u32,
    /// Weight of the sample-size factor in the reliability blend.
    pub sample_weight: f64,
    /// Weight of the externally supplied consistency metric in the reliability blend.
    pub volatility_weight: f64,
}

impl Default for ProfilePolicy {
    fn default() -> Self {
        ProfilePolicy {
            match_saturation: 10,
            sample_weight: 0.6,
            volatility_weight: 0.4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfidenceWeights {
    pub reliability: f64,
    pub sample_size: f64,
    pub compatibility: f64,
}

impl Default for ConfidenceWeights {
    fn default() -> Self {
        ConfidenceWeights {
            reliability: 0.4,
            sample_size: 0.3,
            compatibility: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StrategicWeights {
    pub overall: f64,
    pub specialization: f64,
    pub compatibility: f64,
}

impl Default for StrategicWeights {
    fn default() -> Self {
        StrategicWeights {
            overall: 0.4,
            specialization: 0.3,
            compatibility: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CompatibilityPolicy {
    /// Starting score against a non-empty selection.
    pub base: f64,
    /// Bonus weight for candidate strengths that cover a selection weakness.
    pub gap_fill_weight: f64,
    /// Penalty weight for candidate strengths the selection already has.
    pub redundancy_weight: f64,
    /// Divisor applied to gap and redundancy counts before weighting.
    pub trait_normalizer: f64,
}

impl Default for CompatibilityPolicy {
    fn default() -> Self {
        CompatibilityPolicy {
            base: 0.5,
            gap_fill_weight: 0.3,
            redundancy_weight: 0.2,
            trait_normalizer: 5.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

impl EngineConfig {
    /// Parse and validate an engine.toml document.
    ///
    /// `path` is only used to label parse errors.
    pub fn from_toml_str(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let file: EngineFile = toml::from_str(text).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config = EngineConfig {
            ranking: file.ranking,
            profile: file.profile,
            confidence: file.confidence,
            strategic_value: file.strategic_value,
            compatibility: file.compatibility,
        };

        validate(&config)?;

        Ok(config)
    }
}

/// Load and validate `config/engine.toml` relative to `base_dir`.
///
/// The file is optional: when it does not exist the built-in defaults are
/// returned.
pub fn load_config_from(base_dir: &Path) -> Result<EngineConfig, ConfigError> {
    let engine_path = base_dir.join("config").join("engine.toml");
    if !engine_path.exists() {
        return Ok(EngineConfig::default());
    }

    let text = read_file(&engine_path)?;
    EngineConfig::from_toml_str(&text, &engine_path)
}

/// Convenience wrapper: loads config relative to the current working directory.
pub fn load_config() -> Result<EngineConfig, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &EngineConfig) -> Result<(), ConfigError> {
    if config.ranking.top_n == 0 {
        return Err(ConfigError::ValidationError {
            field: "ranking.top_n".into(),
            message: "must be greater than 0".into(),
        });
    }

    if config.profile.match_saturation == 0 {
        return Err(ConfigError::ValidationError {
            field: "profile.match_saturation".into(),
            message: "must be greater than 0".into(),
        });
    }

    let normalizer = config.compatibility.trait_normalizer;
    if !normalizer.is_finite() || normalizer <= 0.0 {
        return Err(ConfigError::ValidationError {
            field: "compatibility.trait_normalizer".into(),
            message: format!("must be > 0, got {normalizer}"),
        });
    }

    // Blend weights must all be unit-interval fractions
    let p = &config.profile;
    let c = &config.confidence;
    let s = &config.strategic_value;
    let k = &config.compatibility;
    let weight_fields: &[(&str, f64)] = &[
        ("profile.sample_weight", p.sample_weight),
        ("profile.volatility_weight", p.volatility_weight),
        ("confidence.reliability", c.reliability),
        ("confidence.sample_size", c.sample_size),
        ("confidence.compatibility", c.compatibility),
        ("strategic_value.overall", s.overall),
        ("strategic_value.specialization", s.specialization),
        ("strategic_value.compatibility", s.compatibility),
        ("compatibility.base", k.base),
        ("compatibility.gap_fill_weight", k.gap_fill_weight),
        ("compatibility.redundancy_weight", k.redundancy_weight),
    ];
    for (name, val) in weight_fields {
        if !val.is_finite() || !(0.0..=1.0).contains(val) {
            return Err(ConfigError::ValidationError {
                field: name.to_string(),
                message: format!("must be between 0.0 and 1.0 inclusive, got {val}"),
            });
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
