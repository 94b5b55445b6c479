//! Per-task automation risk.

use apo_core::constants::NEUTRAL_SCORE;
use apo_core::types::occupation::OccupationTask;
use apo_core::types::research::Timeframe;
use apo_core::types::semantic::OccupationAnalysis;

use crate::features::keywords::task_potential;

use super::types::{TaskAnalysis, TaskRisk};

const HIGH_RISK_ABOVE: f64 = 0.7;
const LOW_RISK_BELOW: f64 = 0.3;

/// Semantic ranking score when one exists for the task, otherwise the
/// repetitive-keyword heuristic.
pub fn task_automation_potential(task: &OccupationTask, analysis: Option<&OccupationAnalysis>) -> f64 {
    analysis
        .and_then(|a| a.task_ranking(&task.id))
        .map(|r| r.automation_score)
        .filter(|s| s.is_finite())
        .map(|s| s.clamp(0.0, 1.0))
        .unwrap_or_else(|| task_potential(&task.description))
}

/// High above 0.7, low below 0.3, moderate otherwise. Overall is the mean
/// potential, 0.5 without tasks.
pub fn analyze_tasks(tasks: &[OccupationTask], analysis: Option<&OccupationAnalysis>) -> TaskAnalysis {
    let mut high = Vec::new();
    let mut moderate = Vec::new();
    let mut low = Vec::new();
    let mut total = 0.0;

    for task in tasks {
        let potential = task_automation_potential(task, analysis);
        total += potential;

        let (bucket, level, reason, timeframe) = if potential > HIGH_RISK_ABOVE {
            (&mut high, "High", "repetitive nature and standardized processes", Timeframe::ShortTerm)
        } else if potential < LOW_RISK_BELOW {
            (
                &mut low,
                "Low",
                "high cognitive requirements and human judgment needed",
                Timeframe::LongTerm,
            )
        } else {
            (&mut moderate, "Moderate", "mix of routine and complex elements", Timeframe::MediumTerm)
        };

        bucket.push(TaskRisk {
            id: task.id.clone(),
            description: task.description.clone(),
            automation_potential: potential,
            reason: format!("{level} automation potential due to {reason}"),
            timeframe,
        });
    }

    let overall_task_automation_score = if tasks.is_empty() {
        NEUTRAL_SCORE
    } else {
        total / tasks.len() as f64
    };

    TaskAnalysis {
        high_risk_tasks: high,
        moderate_risk_tasks: moderate,
        low_risk_tasks: low,
        overall_task_automation_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apo_core::types::semantic::TaskAutomationRanking;

    #[test]
    fn test_no_tasks_is_neutral() {
        let analysis = analyze_tasks(&[], None);
        assert_eq!(analysis.overall_task_automation_score, 0.5);
        assert!(analysis.high_risk_tasks.is_empty());
    }

    #[test]
    fn test_keyword_buckets() {
        let tasks = vec![
            OccupationTask::new("t1", "Perform routine, repetitive, standard checks"),
            OccupationTask::new("t2", "Analyze and evaluate complex, creative proposals"),
            OccupationTask::new("t3", "Attend meetings"),
        ];
        let analysis = analyze_tasks(&tasks, None);
        assert_eq!(analysis.high_risk_tasks[0].id, "t1");
        assert_eq!(analysis.high_risk_tasks[0].timeframe, Timeframe::ShortTerm);
        assert_eq!(analysis.low_risk_tasks[0].id, "t2");
        assert_eq!(analysis.moderate_risk_tasks[0].id, "t3");
        assert_eq!(
            analysis.moderate_risk_tasks[0].reason,
            "Moderate automation potential due to mix of routine and complex elements"
        );
    }

    #[test]
    fn test_boundaries_are_moderate() {
        let ranked = |id: &str, score: f64| TaskAutomationRanking {
            task_id: id.into(),
            automation_score: score,
            ..TaskAutomationRanking::default()
        };
        let semantic = OccupationAnalysis {
            task_rankings: vec![ranked("a", 0.7), ranked("b", 0.3)],
            ..OccupationAnalysis::default()
        };
        let tasks = vec![OccupationTask::new("a", "x"), OccupationTask::new("b", "y")];
        let analysis = analyze_tasks(&tasks, Some(&semantic));
        assert_eq!(analysis.moderate_risk_tasks.len(), 2);
        assert!((analysis.overall_task_automation_score - 0.5).abs() < 1e-12);
    }
}
