//! Occupation, research, and provider fixtures shared by tests and benches.

use std::sync::atomic::{AtomicUsize, Ordering};

use apo_core::errors::ProviderError;
use apo_core::traits::{
    OccupationData, OccupationDataProvider, ResearchDataProvider, SemanticAnalysisProvider,
};
use apo_core::types::occupation::{OccupationTask, Skill, SkillCategory};
use apo_core::types::research::{
    AdoptionCurves, AdoptionPoint, AutomationResearchData, AutomationTrend, IndustryReport,
    NewsArticle, ResearchPaper, Timeframe,
};
use apo_core::types::semantic::{OccupationAnalysis, SkillAutomationRanking, TaskAutomationRanking};

pub const DATA_SCIENTIST_ID: &str = "15-2051.00";
pub const DATA_ENTRY_ID: &str = "43-9021.00";

/// Base year the fixture research is dated against.
pub const FIXTURE_YEAR: i32 = 2026;

/// One statistical task and one technical skill.
pub fn data_scientist_tasks() -> Vec<OccupationTask> {
    vec![OccupationTask::new("t1", "Analyze data using statistical methods")]
}

pub fn data_scientist_skills() -> Vec<Skill> {
    vec![Skill::new("s1", "Machine Learning", SkillCategory::Technical)]
}

/// Research with an overall score of 0.65 and nothing else.
pub fn data_scientist_research() -> AutomationResearchData {
    AutomationResearchData {
        overall_score: 0.65,
        ..AutomationResearchData::neutral(DATA_SCIENTIST_ID)
    }
}

pub fn data_entry_tasks() -> Vec<OccupationTask> {
    let mut t1 = OccupationTask::new("t1", "Perform routine data entry into standard forms");
    t1.importance = Some(4.5);
    let mut t2 = OccupationTask::new("t2", "Verify records for repetitive sorting and filing errors");
    t2.importance = Some(0.8);
    let t3 = OccupationTask::new("t3", "Coordinate with supervisors on customer requests");
    vec![t1, t2, t3]
}

pub fn data_entry_skills() -> Vec<Skill> {
    vec![
        Skill::new("s1", "Data Entry", SkillCategory::Technical),
        Skill::new("s2", "Record Keeping", SkillCategory::DomainSpecific),
        Skill::new("s3", "Active Listening", SkillCategory::Soft),
        Skill::new("s4", "Critical Thinking", SkillCategory::Cognitive),
    ]
}

/// Fully populated research: papers, reports, articles, trends, curves.
pub fn rich_research(occupation: &str) -> AutomationResearchData {
    let mut research = AutomationResearchData::neutral(occupation);
    research.overall_score = 0.72;
    research.confidence_level.overall = 0.7;
    research.research_papers = vec![ResearchPaper {
        title: "Machine learning and clerical work".into(),
        authors: vec!["A. Author".into()],
        publication_year: FIXTURE_YEAR - 2,
        journal: Some("Journal of Labor Automation".into()),
        url: "https://example.org/paper".into(),
        abstract_text: None,
        citation_count: Some(40),
        automation_score: Some(0.8),
        relevance_score: 0.9,
        key_insights: vec!["Robotics and automation reduce manual data handling".into()],
    }];
    research.industry_reports = vec![IndustryReport {
        title: "Automation outlook".into(),
        publisher: "Consultancy".into(),
        year: FIXTURE_YEAR - 1,
        url: "https://example.org/report".into(),
        summary: Some("Generative AI adoption is accelerating".into()),
        automation_score: Some(0.7),
        relevance_score: 0.8,
        key_insights: vec!["Enterprise adoption of document automation doubled".into()],
    }];
    research.news_articles = vec![NewsArticle {
        title: "AI tools threaten back-office roles".into(),
        source: "News".into(),
        date: format!("{}-03-01", FIXTURE_YEAR - 1),
        url: "https://example.org/news".into(),
        summary: None,
        automation_score: None,
        relevance_score: 0.6,
        key_insights: vec!["Firms replace manual entry with OCR, raising risk for clerks".into()],
    }];
    research.trends = vec![
        AutomationTrend {
            trend_name: "Intelligent document processing".into(),
            description: "OCR and language models extract data entry fields".into(),
            impact_score: 0.8,
            timeframe: Timeframe::ShortTerm,
            relevant_technologies: vec!["OCR".into(), "LLM".into()],
            sources: vec![],
        },
        AutomationTrend {
            trend_name: "Workflow orchestration".into(),
            description: "End-to-end back-office automation".into(),
            impact_score: 0.6,
            timeframe: Timeframe::MediumTerm,
            relevant_technologies: vec!["RPA".into()],
            sources: vec![],
        },
    ];
    research.adoption_curves = AdoptionCurves {
        short_term: vec![point(FIXTURE_YEAR + 1, 0.3), point(FIXTURE_YEAR + 2, 0.4)],
        medium_term: vec![point(FIXTURE_YEAR + 5, 0.6)],
        long_term: vec![point(FIXTURE_YEAR + 10, 0.85)],
    };
    research.last_updated = format!("{FIXTURE_YEAR}-01-15T00:00:00Z");
    research
}

fn point(year: i32, adoption: f64) -> AdoptionPoint {
    AdoptionPoint { year, adoption }
}

pub fn data_entry_analysis() -> OccupationAnalysis {
    OccupationAnalysis {
        occupation_id: DATA_ENTRY_ID.into(),
        occupation_title: "Data Entry Keyers".into(),
        task_rankings: vec![
            ranked_task("t1", 0.9),
            ranked_task("t2", 0.75),
            ranked_task("t3", 0.35),
        ],
        skill_rankings: vec![ranked_skill("s1", "Data Entry", 0.85)],
        overall_automation_score: 0.8,
        confidence_score: Some(0.75),
        last_updated: format!("{FIXTURE_YEAR}-02-01T00:00:00Z"),
        ..OccupationAnalysis::default()
    }
}

fn ranked_task(id: &str, score: f64) -> TaskAutomationRanking {
    TaskAutomationRanking {
        task_id: id.into(),
        automation_score: score,
        confidence_score: 0.8,
        time_horizon: 3.0,
        ..TaskAutomationRanking::default()
    }
}

fn ranked_skill(id: &str, name: &str, score: f64) -> SkillAutomationRanking {
    SkillAutomationRanking {
        skill_id: id.into(),
        skill_name: name.into(),
        automation_score: score,
        confidence_score: 0.8,
        time_horizon: 4.0,
    }
}

/// Knows the two fixture occupations; anything else is unavailable.
#[derive(Debug, Default)]
pub struct FixtureOccupations;

impl OccupationDataProvider for FixtureOccupations {
    fn occupation(&self, occupation_id: &str) -> Result<OccupationData, ProviderError> {
        match occupation_id {
            DATA_SCIENTIST_ID => Ok(OccupationData {
                title: "Data Scientists".into(),
                tasks: data_scientist_tasks(),
                skills: data_scientist_skills(),
            }),
            DATA_ENTRY_ID => Ok(OccupationData {
                title: "Data Entry Keyers".into(),
                tasks: data_entry_tasks(),
                skills: data_entry_skills(),
            }),
            _ => Err(ProviderError::OccupationUnavailable {
                occupation_id: occupation_id.into(),
                reason: "unknown fixture occupation".into(),
            }),
        }
    }
}

/// Serves `rich_research` or always fails, counting calls either way.
#[derive(Debug, Default)]
pub struct FixtureResearch {
    pub fail: bool,
    calls: AtomicUsize,
}

impl FixtureResearch {
    pub fn failing() -> Self {
        Self {
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl ResearchDataProvider for FixtureResearch {
    fn research(
        &self,
        occupation_id: &str,
        _occupation_title: &str,
    ) -> Result<AutomationResearchData, ProviderError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if self.fail {
            return Err(ProviderError::ResearchUnavailable {
                occupation_id: occupation_id.into(),
                reason: "fixture configured to fail".into(),
            });
        }
        Ok(rich_research(occupation_id))
    }
}

/// Returns `data_entry_analysis` for the data entry occupation only.
#[derive(Debug, Default)]
pub struct FixtureSemantic;

impl SemanticAnalysisProvider for FixtureSemantic {
    fn analyze(
        &self,
        occupation_id: &str,
        _tasks: &[OccupationTask],
        _skills: &[Skill],
    ) -> Result<OccupationAnalysis, ProviderError> {
        if occupation_id == DATA_ENTRY_ID {
            Ok(data_entry_analysis())
        } else {
            Err(ProviderError::AnalysisUnavailable {
                occupation_id: occupation_id.into(),
                reason: "no fixture analysis".into(),
            })
        }
    }
}
