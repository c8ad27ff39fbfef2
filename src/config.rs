use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::core::compatibility::{DEFAULT_MATCH_LIMIT, DEFAULT_PARALLEL_THRESHOLD};
use crate::core::pipeline::DEFAULT_REQUIRED_LOGS;
use crate::models::ScoreWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

fn default_limit() -> usize { DEFAULT_MATCH_LIMIT }
fn default_max_limit() -> usize { 100 }
fn default_parallel_threshold() -> usize { DEFAULT_PARALLEL_THRESHOLD }

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default = "default_required_logs")]
    pub required_logs: u32,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            weights: WeightsConfig::default(),
            required_logs: default_required_logs(),
        }
    }
}

fn default_required_logs() -> u32 { DEFAULT_REQUIRED_LOGS }

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_synergy_weight")]
    pub synergy: f64,
    #[serde(default = "default_consistency_weight")]
    pub consistency: f64,
    #[serde(default = "default_technical_weight")]
    pub technical: f64,
    #[serde(default = "default_social_weight")]
    pub social: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            synergy: default_synergy_weight(),
            consistency: default_consistency_weight(),
            technical: default_technical_weight(),
            social: default_social_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoreWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            synergy: config.synergy,
            consistency: config.consistency,
            technical: config.technical,
            social: config.social,
        }
    }
}

fn default_synergy_weight() -> f64 { 0.25 }
fn default_consistency_weight() -> f64 { 0.20 }
fn default_technical_weight() -> f64 { 0.35 }
fn default_social_weight() -> f64 { 0.20 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
    Compact,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SKILLMATCH_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SKILLMATCH__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        settings.try_deserialize()
    }

    pub fn score_weights(&self) -> ScoreWeights {
        ScoreWeights::from(&self.scoring.weights)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("SKILLMATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
