//! Feature vector types.

use apo_core::constants::NEUTRAL_SCORE;
use apo_core::errors::FeatureError;
use apo_core::Factor;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One factor's feature values. Inline for the usual five entries.
pub type FeatureArray = SmallVec<[f64; 5]>;

/// Five named feature arrays, one per factor. Every value is an automation
/// propensity in `[0, 1]` (higher = more automatable).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupationFeatureVector {
    pub task_complexity: FeatureArray,
    pub collaboration: FeatureArray,
    pub industry_adoption: FeatureArray,
    pub emerging_tech: FeatureArray,
    pub regional: FeatureArray,
}

impl OccupationFeatureVector {
    /// A vector with every value at the neutral score.
    pub fn neutral(len: usize) -> Self {
        let array: FeatureArray = std::iter::repeat(NEUTRAL_SCORE).take(len).collect();
        Self {
            task_complexity: array.clone(),
            collaboration: array.clone(),
            industry_adoption: array.clone(),
            emerging_tech: array.clone(),
            regional: array,
        }
    }

    pub fn array(&self, factor: Factor) -> &[f64] {
        match factor {
            Factor::TaskComplexity => &self.task_complexity,
            Factor::CollaborationRequirements => &self.collaboration,
            Factor::IndustryAdoption => &self.industry_adoption,
            Factor::EmergingTechImpact => &self.emerging_tech,
            Factor::RegionalFactors => &self.regional,
        }
    }

    /// Reject vectors that would make per-factor means undefined or
    /// out of range.
    pub fn validate(&self) -> Result<(), FeatureError> {
        for factor in Factor::ALL {
            let values = self.array(factor);
            if values.is_empty() {
                return Err(FeatureError::EmptyArray { factor });
            }
            for (index, &value) in values.iter().enumerate() {
                if !value.is_finite() {
                    return Err(FeatureError::NonFinite { factor, index });
                }
                if !(0.0..=1.0).contains(&value) {
                    return Err(FeatureError::OutOfRange {
                        factor,
                        index,
                        value,
                    });
                }
            }
        }
        Ok(())
    }
}
