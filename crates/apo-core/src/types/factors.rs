//! The five automation factors, their weights, and cached weight adjustments.
//!
//! Baseline weights: task_complexity=0.25, collaboration=0.20,
//! industry_adoption=0.25, emerging_tech=0.20, regional=0.10.
//! Every `FactorWeights` produced by this module sums to 1.0 (±1e-6).

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::WEIGHT_SUM_TOLERANCE;
use crate::errors::WeightError;

/// One of the five named contributors to automation potential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Factor {
    TaskComplexity,
    CollaborationRequirements,
    IndustryAdoption,
    EmergingTechImpact,
    RegionalFactors,
}

impl Factor {
    pub const ALL: [Factor; 5] = [
        Self::TaskComplexity,
        Self::CollaborationRequirements,
        Self::IndustryAdoption,
        Self::EmergingTechImpact,
        Self::RegionalFactors,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::TaskComplexity => "task_complexity",
            Self::CollaborationRequirements => "collaboration_requirements",
            Self::IndustryAdoption => "industry_adoption",
            Self::EmergingTechImpact => "emerging_tech_impact",
            Self::RegionalFactors => "regional_factors",
        }
    }

    /// Human-readable label used as a projection key driver.
    pub fn driver_label(&self) -> &'static str {
        match self {
            Self::TaskComplexity => "Task complexity level",
            Self::CollaborationRequirements => "Human collaboration requirements",
            Self::IndustryAdoption => "Industry automation adoption rate",
            Self::EmergingTechImpact => "Emerging technology impact",
            Self::RegionalFactors => "Regional economic factors",
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An unconstrained value per factor (importances, confidences, coefficients).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorScores {
    #[serde(alias = "task_complexity")]
    pub task_complexity: f64,
    #[serde(alias = "collaboration_requirements")]
    pub collaboration_requirements: f64,
    #[serde(alias = "industry_adoption")]
    pub industry_adoption: f64,
    #[serde(alias = "emerging_tech_impact")]
    pub emerging_tech_impact: f64,
    #[serde(alias = "regional_factors")]
    pub regional_factors: f64,
}

impl FactorScores {
    pub fn from_fn(mut f: impl FnMut(Factor) -> f64) -> Self {
        Self {
            task_complexity: f(Factor::TaskComplexity),
            collaboration_requirements: f(Factor::CollaborationRequirements),
            industry_adoption: f(Factor::IndustryAdoption),
            emerging_tech_impact: f(Factor::EmergingTechImpact),
            regional_factors: f(Factor::RegionalFactors),
        }
    }

    pub fn uniform(value: f64) -> Self {
        Self::from_fn(|_| value)
    }

    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::TaskComplexity => self.task_complexity,
            Factor::CollaborationRequirements => self.collaboration_requirements,
            Factor::IndustryAdoption => self.industry_adoption,
            Factor::EmergingTechImpact => self.emerging_tech_impact,
            Factor::RegionalFactors => self.regional_factors,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Factor, f64)> + '_ {
        Factor::ALL.into_iter().map(move |f| (f, self.get(f)))
    }

    pub fn sum(&self) -> f64 {
        self.iter().map(|(_, v)| v).sum()
    }

    /// Σ value × weight.
    pub fn weighted_sum(&self, weights: &FactorWeights) -> f64 {
        self.iter().map(|(f, v)| v * weights.get(f)).sum()
    }
}

/// Normalized factor weights. Sum to 1.0 within `WEIGHT_SUM_TOLERANCE`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorWeights {
    #[serde(alias = "task_complexity")]
    pub task_complexity: f64,
    #[serde(alias = "collaboration_requirements")]
    pub collaboration_requirements: f64,
    #[serde(alias = "industry_adoption")]
    pub industry_adoption: f64,
    #[serde(alias = "emerging_tech_impact")]
    pub emerging_tech_impact: f64,
    #[serde(alias = "regional_factors")]
    pub regional_factors: f64,
}

impl FactorWeights {
    /// Fixed baseline weights.
    pub const BASELINE: FactorWeights = FactorWeights {
        task_complexity: 0.25,
        collaboration_requirements: 0.20,
        industry_adoption: 0.25,
        emerging_tech_impact: 0.20,
        regional_factors: 0.10,
    };

    /// Normalize raw non-negative values into weights.
    ///
    /// Fails with `Degenerate` when every value is zero; callers recover by
    /// falling back to their base weights.
    pub fn normalize(raw: &FactorScores) -> Result<Self, WeightError> {
        for (factor, value) in raw.iter() {
            if !value.is_finite() {
                return Err(WeightError::NonFinite { factor });
            }
            if value < 0.0 {
                return Err(WeightError::Negative { factor, value });
            }
        }
        let total = raw.sum();
        if total <= f64::EPSILON {
            return Err(WeightError::Degenerate);
        }
        Ok(Self::from_scores_unchecked(&FactorScores::from_fn(|f| raw.get(f) / total)))
    }

    fn from_scores_unchecked(s: &FactorScores) -> Self {
        Self {
            task_complexity: s.task_complexity,
            collaboration_requirements: s.collaboration_requirements,
            industry_adoption: s.industry_adoption,
            emerging_tech_impact: s.emerging_tech_impact,
            regional_factors: s.regional_factors,
        }
    }

    /// Check the invariants: finite, non-negative, sum to one.
    pub fn validate(&self) -> Result<(), WeightError> {
        for (factor, value) in self.iter() {
            if !value.is_finite() {
                return Err(WeightError::NonFinite { factor });
            }
            if value < 0.0 {
                return Err(WeightError::Negative { factor, value });
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(WeightError::NotNormalized { sum });
        }
        Ok(())
    }

    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::TaskComplexity => self.task_complexity,
            Factor::CollaborationRequirements => self.collaboration_requirements,
            Factor::IndustryAdoption => self.industry_adoption,
            Factor::EmergingTechImpact => self.emerging_tech_impact,
            Factor::RegionalFactors => self.regional_factors,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Factor, f64)> + '_ {
        Factor::ALL.into_iter().map(move |f| (f, self.get(f)))
    }

    pub fn sum(&self) -> f64 {
        self.iter().map(|(_, v)| v).sum()
    }

    pub fn as_scores(&self) -> FactorScores {
        FactorScores::from_fn(|f| self.get(f))
    }
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self::BASELINE
    }
}

/// Occupation-specific weight adjustment, cached in a `WeightStore`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorAdjustment {
    pub occupation_id: String,
    pub base_weights: FactorWeights,
    pub adjusted_weights: FactorWeights,
    /// Per-factor confidence, `1 − sqrt(variance)` of the feature array.
    pub confidence_scores: FactorScores,
    /// Per-factor feature means the adjusted weights were derived from.
    pub factor_importances: FactorScores,
    pub last_updated: DateTime<Utc>,
}
