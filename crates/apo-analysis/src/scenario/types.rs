//! Scenario inputs and outputs, and the per-factor score breakdown.

use apo_core::{Factor, FactorWeights};
use serde::{Deserialize, Serialize};

use crate::projection::TimeProjection;

/// Optional per-factor weight multipliers. Absent means 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FactorMultipliers {
    pub task_complexity: Option<f64>,
    pub collaboration_requirements: Option<f64>,
    pub industry_adoption: Option<f64>,
    pub emerging_tech_impact: Option<f64>,
    pub regional_factors: Option<f64>,
}

impl FactorMultipliers {
    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::TaskComplexity => self.task_complexity,
            Factor::CollaborationRequirements => self.collaboration_requirements,
            Factor::IndustryAdoption => self.industry_adoption,
            Factor::EmergingTechImpact => self.emerging_tech_impact,
            Factor::RegionalFactors => self.regional_factors,
        }
        .unwrap_or(1.0)
    }

    pub fn with(mut self, factor: Factor, multiplier: f64) -> Self {
        let slot = match factor {
            Factor::TaskComplexity => &mut self.task_complexity,
            Factor::CollaborationRequirements => &mut self.collaboration_requirements,
            Factor::IndustryAdoption => &mut self.industry_adoption,
            Factor::EmergingTechImpact => &mut self.emerging_tech_impact,
            Factor::RegionalFactors => &mut self.regional_factors,
        };
        *slot = Some(multiplier);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioParams {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub factor_adjustments: FactorMultipliers,
    /// Years ahead to project. Empty uses the configured horizons.
    #[serde(default)]
    pub time_horizon_years: Vec<u32>,
}

impl ScenarioParams {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            factor_adjustments: FactorMultipliers::default(),
            time_horizon_years: Vec::new(),
        }
    }

    pub fn with_multiplier(mut self, factor: Factor, multiplier: f64) -> Self {
        self.factor_adjustments = self.factor_adjustments.with(factor, multiplier);
        self
    }

    pub fn with_horizons(mut self, horizons: impl Into<Vec<u32>>) -> Self {
        self.time_horizon_years = horizons.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalBreakdown {
    pub high_income: f64,
    pub middle_income: f64,
    pub low_income: f64,
}

/// Contribution of each factor to a score: `weight × score`, with the
/// regional share tiered ×1.0 / ×0.8 / ×0.6 by income level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorBreakdown {
    pub task_complexity: f64,
    pub collaboration_requirements: f64,
    pub industry_adoption: f64,
    pub emerging_tech_impact: f64,
    pub regional_factors: RegionalBreakdown,
}

impl FactorBreakdown {
    pub fn from_weights(weights: &FactorWeights, score: f64) -> Self {
        let regional = weights.regional_factors * score;
        Self {
            task_complexity: weights.task_complexity * score,
            collaboration_requirements: weights.collaboration_requirements * score,
            industry_adoption: weights.industry_adoption * score,
            emerging_tech_impact: weights.emerging_tech_impact * score,
            regional_factors: RegionalBreakdown {
                high_income: regional,
                middle_income: regional * 0.8,
                low_income: regional * 0.6,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub scenario_description: String,
    pub baseline_score: f64,
    pub adjusted_score: f64,
    pub adjusted_weights: FactorWeights,
    pub time_projections: Vec<TimeProjection>,
    pub factor_breakdown: FactorBreakdown,
    pub confidence_score: f64,
}
