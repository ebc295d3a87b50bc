use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::matching::ranking::DEFAULT_TOP_K;
use crate::matching::weights::{
    BonusPolicy, PenaltyUnit, RefusalPolicy, WeightConfig, WeightConfigError,
};

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub matching: MatchingConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("MATCH_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let top_k = match env::var("MATCH_TOP_K") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|value| *value > 0)
                .ok_or(ConfigError::InvalidTopK { value: raw })?,
            Err(_) => DEFAULT_TOP_K,
        };

        let weights_file = env::var("MATCH_WEIGHTS_FILE")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let refusal_policy = policy_var("MATCH_REFUSAL_POLICY", RefusalPolicy::from_token)?;
        let bonus_policy = policy_var("MATCH_BONUS_POLICY", BonusPolicy::from_token)?;
        let penalty_unit = policy_var("MATCH_PENALTY_UNIT", PenaltyUnit::from_token)?;

        let log_level = env::var("MATCH_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            matching: MatchingConfig {
                top_k,
                weights_file,
                refusal_policy,
                bonus_policy,
                penalty_unit,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn policy_var<T>(
    name: &'static str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => parse(&raw)
            .map(Some)
            .ok_or(ConfigError::InvalidPolicy { name, value: raw }),
        Err(_) => Ok(None),
    }
}

/// Scoring knobs: shortlist size, optional weights file and policy overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchingConfig {
    pub top_k: usize,
    pub weights_file: Option<PathBuf>,
    pub refusal_policy: Option<RefusalPolicy>,
    pub bonus_policy: Option<BonusPolicy>,
    pub penalty_unit: Option<PenaltyUnit>,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            weights_file: None,
            refusal_policy: None,
            bonus_policy: None,
            penalty_unit: None,
        }
    }
}

impl MatchingConfig {
    /// Effective weights: `path` (or the configured file, or the standard table) plus
    /// any policy overrides, validated.
    pub fn weights(&self, path: Option<&Path>) -> Result<WeightConfig, ConfigError> {
        let mut weights = match path.or(self.weights_file.as_deref()) {
            Some(path) => load_weights_file(path)?,
            None => WeightConfig::standard(),
        };

        if let Some(policy) = self.refusal_policy {
            weights = weights.with_refusal_policy(policy);
        }
        if let Some(policy) = self.bonus_policy {
            weights = weights.with_bonus_policy(policy);
        }
        if let Some(unit) = self.penalty_unit {
            weights = weights.with_penalty_unit(unit);
        }

        weights.validate()?;
        Ok(weights)
    }
}

pub fn load_weights_file(path: &Path) -> Result<WeightConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::WeightsFile {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::WeightsFormat {
        path: path.to_path_buf(),
        source,
    })
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidTopK {
        value: String,
    },
    InvalidPolicy {
        name: &'static str,
        value: String,
    },
    WeightsFile {
        path: PathBuf,
        source: std::io::Error,
    },
    WeightsFormat {
        path: PathBuf,
        source: serde_json::Error,
    },
    Weights(WeightConfigError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTopK { value } => {
                write!(f, "MATCH_TOP_K must be a positive integer (found '{}')", value)
            }
            ConfigError::InvalidPolicy { name, value } => {
                write!(f, "{} has unrecognised value '{}'", name, value)
            }
            ConfigError::WeightsFile { path, .. } => {
                write!(f, "unable to read weights file {}", path.display())
            }
            ConfigError::WeightsFormat { path, .. } => {
                write!(f, "weights file {} is not valid weight JSON", path.display())
            }
            ConfigError::Weights(err) => write!(f, "invalid weights: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidTopK { .. } | ConfigError::InvalidPolicy { .. } => None,
            ConfigError::WeightsFile { source, .. } => Some(source),
            ConfigError::WeightsFormat { source, .. } => Some(source),
            ConfigError::Weights(err) => Some(err),
        }
    }
}

impl From<WeightConfigError> for ConfigError {
    fn from(value: WeightConfigError) -> Self {
        Self::Weights(value)
    }
}
