use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
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
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    pub acquire_timeout_secs: Option<u64>,
    pub idle_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_matches_per_attendee")]
    pub default_matches_per_attendee: usize,
    #[serde(default = "default_max_matches_per_attendee")]
    pub max_matches_per_attendee: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_matches_per_attendee: default_matches_per_attendee(),
            max_matches_per_attendee: default_max_matches_per_attendee(),
        }
    }
}

fn default_matches_per_attendee() -> usize { crate::core::DEFAULT_MATCHES_PER_ATTENDEE }
fn default_max_matches_per_attendee() -> usize { 50 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_seeking_offering_weight")]
    pub seeking_offering: f64,
    #[serde(default = "default_expertise_weight")]
    pub expertise: f64,
    #[serde(default = "default_experience_weight")]
    pub experience: f64,
    #[serde(default = "default_topics_weight")]
    pub topics: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            seeking_offering: default_seeking_offering_weight(),
            expertise: default_expertise_weight(),
            experience: default_experience_weight(),
            topics: default_topics_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(value: &WeightsConfig) -> Self {
        ScoringWeights {
            seeking_offering: value.seeking_offering,
            expertise: value.expertise,
            experience: value.experience,
            topics: value.topics,
        }
    }
}

fn default_seeking_offering_weight() -> f64 { 0.40 }
fn default_expertise_weight() -> f64 { 0.25 }
fn default_experience_weight() -> f64 { 0.20 }
fn default_topics_weight() -> f64 { 0.15 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Multi-line human readable output
    Pretty,
    /// Single-line text, used for anything unrecognised
    Compact,
}

impl LogFormat {
    pub fn parse(format: &str) -> Self {
        match format.trim().to_lowercase().as_str() {
            "json" => LogFormat::Json,
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Compact,
        }
    }
}

impl LoggingSettings {
    pub fn log_format(&self) -> LogFormat {
        LogFormat::parse(&self.format)
    }
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with MIXER_)
    /// 5. DATABASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., MIXER__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("MIXER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = apply_database_url(settings)?;

        settings.try_deserialize::<Settings>()?.validated()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("MIXER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize::<Settings>()?.validated()
    }

    /// Scoring weights as used by the matcher
    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }

    fn validated(self) -> Result<Self, ConfigError> {
        let weights = self.scoring_weights();
        if !weights.is_valid() {
            return Err(ConfigError::Message(format!(
                "scoring weights must be non-negative and sum to 1.0, got {:?} (sum {})",
                weights,
                weights.sum()
            )));
        }

        let matching = &self.matching;
        if matching.default_matches_per_attendee == 0
            || matching.default_matches_per_attendee > matching.max_matches_per_attendee
        {
            return Err(ConfigError::Message(format!(
                "matching.default_matches_per_attendee must be in 1..={}, got {}",
                matching.max_matches_per_attendee, matching.default_matches_per_attendee
            )));
        }

        Ok(self)
    }
}

/// DATABASE_URL takes precedence over the configured database URL
fn apply_database_url(settings: Config) -> Result<Config, ConfigError> {
    match std::env::var("DATABASE_URL") {
        Ok(url) => Config::builder()
            .add_source(settings)
            .set_override("database.url", url)?
            .build(),
        Err(_) => Ok(settings),
    }
}
