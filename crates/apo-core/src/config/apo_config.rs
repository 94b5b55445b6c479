//! `ApoConfig` and its sections. Every section falls back to defaults when
//! omitted, so an empty file is a valid configuration.

use std::fs;
use std::path::Path;

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{
    CONFIDENCE_DECAY_PER_YEAR, CONFIG_FILE_NAME, DEFAULT_HORIZONS, DEFAULT_LEARNING_RATE,
    KEY_DRIVER_WEIGHT_THRESHOLD, MAX_HORIZON_YEARS, MAX_KEY_DRIVERS, MAX_SCORE_MULTIPLIER,
};
use crate::errors::ConfigError;
use crate::types::factors::{FactorScores, FactorWeights};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApoConfig {
    pub weights: WeightsConfig,
    pub projection: ProjectionConfig,
    pub scenario: ScenarioConfig,
    pub skills: SkillsConfig,
}

impl ApoConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `apo.toml` from `root`. A missing file yields the defaults.
    pub fn load(root: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = root.as_ref().join(CONFIG_FILE_NAME);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights
            .base
            .validate()
            .map_err(|e| ConfigError::invalid("weights.base", e.to_string()))?;
        if !(self.weights.learning_rate > 0.0 && self.weights.learning_rate < 1.0) {
            return Err(ConfigError::invalid(
                "weights.learning_rate",
                "must be in (0, 1)",
            ));
        }

        let p = &self.projection;
        if p.horizons.is_empty() {
            return Err(ConfigError::invalid("projection.horizons", "must not be empty"));
        }
        if p.horizons.contains(&0) {
            return Err(ConfigError::invalid(
                "projection.horizons",
                "horizons are years ahead and must be positive",
            ));
        }
        if !(1..=MAX_HORIZON_YEARS).contains(&p.max_horizon_years) {
            return Err(ConfigError::invalid(
                "projection.max_horizon_years",
                format!("must be in [1, {MAX_HORIZON_YEARS}]"),
            ));
        }
        if let Some(&years) = p.horizons.iter().find(|&&h| h > p.max_horizon_years) {
            return Err(ConfigError::invalid(
                "projection.horizons",
                format!("horizon {years} exceeds max_horizon_years ({})", p.max_horizon_years),
            ));
        }
        for (field, value) in [
            ("projection.confidence_decay_per_year", p.confidence_decay_per_year),
            ("projection.missing_curve_penalty", p.missing_curve_penalty),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::invalid(field, "must be in [0, 1]"));
            }
        }
        if !(p.max_score_multiplier.is_finite() && p.max_score_multiplier >= 1.0) {
            return Err(ConfigError::invalid(
                "projection.max_score_multiplier",
                "must be finite and >= 1",
            ));
        }
        if !(p.s_curve_steepness.is_finite() && p.s_curve_steepness > 0.0) {
            return Err(ConfigError::invalid(
                "projection.s_curve_steepness",
                "must be finite and positive",
            ));
        }

        self.scenario
            .baseline_weights
            .validate()
            .map_err(|e| ConfigError::invalid("scenario.baseline_weights", e.to_string()))?;
        for (factor, c) in self.scenario.coefficients.iter() {
            if !(c.is_finite() && c > 0.0) {
                return Err(ConfigError::invalid(
                    format!("scenario.coefficients.{factor}"),
                    "must be finite and positive",
                ));
            }
        }

        let s = &self.skills;
        if !(0.0..=0.5).contains(&s.jitter_amplitude) {
            return Err(ConfigError::invalid("skills.jitter_amplitude", "must be in [0, 0.5]"));
        }
        if !(0.0 < s.moderate_risk_threshold
            && s.moderate_risk_threshold < s.high_risk_threshold
            && s.high_risk_threshold <= 1.0)
        {
            return Err(ConfigError::invalid(
                "skills",
                "require 0 < moderate_risk_threshold < high_risk_threshold <= 1",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightsConfig {
    /// Fallback weights used when every factor importance is zero.
    pub base: FactorWeights,
    pub learning_rate: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            base: FactorWeights::BASELINE,
            learning_rate: DEFAULT_LEARNING_RATE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    pub horizons: Vec<u32>,
    pub confidence_decay_per_year: f64,
    pub max_score_multiplier: f64,
    pub driver_weight_threshold: f64,
    pub max_key_drivers: usize,
    /// Confidence removed when the adoption curve for a bucket is empty.
    pub missing_curve_penalty: f64,
    /// Pin the projection base year. `None` uses the system clock.
    pub current_year: Option<i32>,
    pub s_curve_steepness: f64,
    /// Furthest horizon accepted from config, scenarios, or requests.
    pub max_horizon_years: u32,
}

impl ProjectionConfig {
    /// The pinned base year, or the system clock's year.
    pub fn current_year(&self) -> i32 {
        self.current_year.unwrap_or_else(|| Utc::now().year())
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            horizons: DEFAULT_HORIZONS.to_vec(),
            confidence_decay_per_year: CONFIDENCE_DECAY_PER_YEAR,
            max_score_multiplier: MAX_SCORE_MULTIPLIER,
            driver_weight_threshold: KEY_DRIVER_WEIGHT_THRESHOLD,
            max_key_drivers: MAX_KEY_DRIVERS,
            missing_curve_penalty: CONFIDENCE_DECAY_PER_YEAR,
            current_year: None,
            s_curve_steepness: 12.0,
            max_horizon_years: MAX_HORIZON_YEARS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub baseline_weights: FactorWeights,
    /// Per-factor blend coefficients `cᵢ`.
    pub coefficients: FactorScores,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            baseline_weights: FactorWeights::BASELINE,
            coefficients: FactorScores {
                task_complexity: 1.1,
                collaboration_requirements: 0.9,
                industry_adoption: 1.2,
                emerging_tech_impact: 1.3,
                regional_factors: 1.0,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsConfig {
    pub jitter_seed: u64,
    pub jitter_amplitude: f64,
    pub high_risk_threshold: f64,
    pub moderate_risk_threshold: f64,
}

impl Default for SkillsConfig {
    fn default() -> Self {
        Self {
            jitter_seed: 0,
            jitter_amplitude: 0.2,
            high_risk_threshold: 0.7,
            moderate_risk_threshold: 0.4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = ApoConfig::from_toml("").unwrap();
        assert_eq!(config, ApoConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = ApoConfig::from_toml(
            r#"
[projection]
horizons = [1, 3]
current_year = 2030

[skills]
jitter_seed = 42
"#,
        )
        .unwrap();
        assert_eq!(config.projection.horizons, vec![1, 3]);
        assert_eq!(config.projection.current_year, Some(2030));
        assert!((config.projection.confidence_decay_per_year - 0.05).abs() < 1e-12);
        assert_eq!(config.skills.jitter_seed, 42);
        assert!((config.skills.jitter_amplitude - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_unnormalized_base_weights_rejected() {
        let err = ApoConfig::from_toml(
            r#"
[weights.base]
task_complexity = 0.5
collaboration_requirements = 0.5
industry_adoption = 0.5
emerging_tech_impact = 0.5
regional_factors = 0.5
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref field, .. } if field == "weights.base"));
    }

    #[test]
    fn test_inverted_risk_thresholds_rejected() {
        let err = ApoConfig::from_toml(
            "[skills]\nhigh_risk_threshold = 0.3\nmoderate_risk_threshold = 0.5\n",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_horizon_beyond_maximum_rejected() {
        let err = ApoConfig::from_toml("[projection]\nhorizons = [2, 4294967295]\n").unwrap_err();
        assert!(
            matches!(err, ConfigError::Invalid { ref field, .. } if field == "projection.horizons")
        );

        let err = ApoConfig::from_toml("[projection]\nmax_horizon_years = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));

        let config = ApoConfig::from_toml(
            "[projection]\nhorizons = [30]\nmax_horizon_years = 30\n",
        )
        .unwrap();
        assert_eq!(config.projection.horizons, vec![30]);
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = ApoConfig::from_toml("[projection\nhorizons = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ApoConfig::load(dir.path()).unwrap();
        assert_eq!(config, ApoConfig::default());
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[weights]\nlearning_rate = 0.1\n",
        )
        .unwrap();
        let config = ApoConfig::load(dir.path()).unwrap();
        assert!((config.weights.learning_rate - 0.1).abs() < 1e-12);
    }
}
