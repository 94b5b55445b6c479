//! Key driver selection for a projection horizon.

use apo_core::types::collections::FxHashSet;
use apo_core::types::research::{AutomationResearchData, HorizonBucket};
use apo_core::FactorWeights;

/// Trend names whose timeframe matches `bucket`, then labels of factors
/// weighted above `threshold`. Deduplicated in first-seen order and capped
/// at `max`.
pub fn key_drivers(
    weights: &FactorWeights,
    research: &AutomationResearchData,
    bucket: HorizonBucket,
    threshold: f64,
    max: usize,
) -> Vec<String> {
    let timeframe = bucket.timeframe();
    let trend_names = research
        .trends
        .iter()
        .filter(|t| t.timeframe == timeframe)
        .map(|t| t.trend_name.as_str());
    let factor_labels = weights
        .iter()
        .filter(|(_, w)| *w > threshold)
        .map(|(f, _)| f.driver_label());

    let mut seen = FxHashSet::default();
    trend_names
        .chain(factor_labels)
        .filter(|name| !name.is_empty() && seen.insert(*name))
        .take(max)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use apo_core::types::research::{AutomationTrend, Timeframe};

    fn trend(name: &str, timeframe: Timeframe) -> AutomationTrend {
        AutomationTrend {
            trend_name: name.into(),
            timeframe,
            ..Default::default()
        }
    }

    #[test]
    fn test_trends_match_bucket_only() {
        let research = AutomationResearchData {
            trends: vec![
                trend("RPA", Timeframe::ShortTerm),
                trend("AGI", Timeframe::LongTerm),
            ],
            ..Default::default()
        };
        let d = key_drivers(&FactorWeights::BASELINE, &research, HorizonBucket::ShortTerm, 0.3, 5);
        assert_eq!(d, vec!["RPA".to_string()]);
        let d = key_drivers(&FactorWeights::BASELINE, &research, HorizonBucket::LongTerm, 0.3, 5);
        assert_eq!(d, vec!["AGI".to_string()]);
    }

    #[test]
    fn test_heavy_factors_and_cap() {
        let weights = FactorWeights {
            task_complexity: 0.45,
            collaboration_requirements: 0.05,
            industry_adoption: 0.35,
            emerging_tech_impact: 0.1,
            regional_factors: 0.05,
        };
        let research = AutomationResearchData {
            trends: (0..6)
                .map(|i| trend(&format!("T{i}"), Timeframe::MediumTerm))
                .chain(std::iter::once(trend("T0", Timeframe::MediumTerm)))
                .collect(),
            ..Default::default()
        };
        let d = key_drivers(&weights, &research, HorizonBucket::MediumTerm, 0.3, 5);
        assert_eq!(d.len(), 5);
        assert_eq!(d[0], "T0");

        let d = key_drivers(&weights, &AutomationResearchData::default(), HorizonBucket::MediumTerm, 0.3, 5);
        assert_eq!(
            d,
            vec![
                "Task complexity level".to_string(),
                "Industry automation adoption rate".to_string()
            ]
        );
    }
}
