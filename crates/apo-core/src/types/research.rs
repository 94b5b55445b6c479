//! Third-party research signals aggregated per occupation.
//!
//! Every collection defaults to empty and every score to the neutral 0.5, so a
//! partially populated payload from the research provider still deserializes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::NEUTRAL_SCORE;

/// An academic paper discussing automation of the occupation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResearchPaper {
    pub title: String,
    pub authors: Vec<String>,
    pub publication_year: i32,
    pub journal: Option<String>,
    pub url: String,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub citation_count: Option<u32>,
    pub automation_score: Option<f64>,
    pub relevance_score: f64,
    pub key_insights: Vec<String>,
}

/// An industry report (analyst firm, consultancy, trade body).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndustryReport {
    pub title: String,
    pub publisher: String,
    pub year: i32,
    pub url: String,
    pub summary: Option<String>,
    pub automation_score: Option<f64>,
    pub relevance_score: f64,
    pub key_insights: Vec<String>,
}

/// A news article. `date` is an ISO-8601 date string.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewsArticle {
    pub title: String,
    pub source: String,
    pub date: String,
    pub url: String,
    pub summary: Option<String>,
    pub automation_score: Option<f64>,
    pub relevance_score: f64,
    pub key_insights: Vec<String>,
}

/// Trend timeframe labels as emitted by the research provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "Short-term")]
    ShortTerm,
    #[serde(rename = "Medium-term")]
    MediumTerm,
    #[serde(rename = "Long-term")]
    LongTerm,
    #[default]
    #[serde(other)]
    Unspecified,
}

impl Timeframe {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ShortTerm => "Short-term",
            Self::MediumTerm => "Medium-term",
            Self::LongTerm => "Long-term",
            Self::Unspecified => "Unspecified",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named automation trend.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AutomationTrend {
    pub trend_name: String,
    pub description: String,
    /// 0–1 impact on automation.
    pub impact_score: f64,
    pub timeframe: Timeframe,
    pub relevant_technologies: Vec<String>,
    pub sources: Vec<String>,
}

/// Confidence the research provider places in its aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResearchConfidence {
    pub overall: f64,
    pub source_count: u32,
    pub source_quality: f64,
    pub data_consistency: f64,
    pub recency: f64,
}

impl Default for ResearchConfidence {
    fn default() -> Self {
        Self {
            overall: NEUTRAL_SCORE,
            source_count: 0,
            source_quality: NEUTRAL_SCORE,
            data_consistency: NEUTRAL_SCORE,
            recency: NEUTRAL_SCORE,
        }
    }
}

/// Per-region automation impact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegionalScores {
    pub north_america: f64,
    pub europe: f64,
    pub asia: f64,
    pub other: f64,
}

impl Default for RegionalScores {
    fn default() -> Self {
        Self {
            north_america: NEUTRAL_SCORE,
            europe: NEUTRAL_SCORE,
            asia: NEUTRAL_SCORE,
            other: NEUTRAL_SCORE,
        }
    }
}

/// Free-text factors per region.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegionalFactorNotes {
    pub north_america: Vec<String>,
    pub europe: Vec<String>,
    pub asia: Vec<String>,
    pub other: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegionalImpact {
    pub global: f64,
    pub regional: RegionalScores,
    pub factors_by_region: RegionalFactorNotes,
}

impl Default for RegionalImpact {
    fn default() -> Self {
        Self {
            global: NEUTRAL_SCORE,
            regional: RegionalScores::default(),
            factors_by_region: RegionalFactorNotes::default(),
        }
    }
}

/// A point on an adoption curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdoptionPoint {
    pub year: i32,
    /// Adoption fraction in [0, 1].
    pub adoption: f64,
}

/// Horizon bucket selecting one of the three adoption curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HorizonBucket {
    ShortTerm,
    MediumTerm,
    LongTerm,
}

impl HorizonBucket {
    /// `≤2 → short`, `≤5 → medium`, otherwise long.
    pub fn for_years(years: u32) -> Self {
        if years <= 2 {
            Self::ShortTerm
        } else if years <= 5 {
            Self::MediumTerm
        } else {
            Self::LongTerm
        }
    }

    /// The trend timeframe label belonging to this bucket.
    pub fn timeframe(&self) -> Timeframe {
        match self {
            Self::ShortTerm => Timeframe::ShortTerm,
            Self::MediumTerm => Timeframe::MediumTerm,
            Self::LongTerm => Timeframe::LongTerm,
        }
    }
}

/// Adoption curves for the three named horizons, each sorted by year.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdoptionCurves {
    pub short_term: Vec<AdoptionPoint>,
    pub medium_term: Vec<AdoptionPoint>,
    pub long_term: Vec<AdoptionPoint>,
}

impl AdoptionCurves {
    pub fn curve(&self, bucket: HorizonBucket) -> &[AdoptionPoint] {
        match bucket {
            HorizonBucket::ShortTerm => &self.short_term,
            HorizonBucket::MediumTerm => &self.medium_term,
            HorizonBucket::LongTerm => &self.long_term,
        }
    }

    /// The point whose year is closest to `target_year`. Ties keep the earlier point.
    pub fn closest_point(&self, bucket: HorizonBucket, target_year: i32) -> Option<AdoptionPoint> {
        let distance = |p: &AdoptionPoint| (i64::from(p.year) - i64::from(target_year)).abs();
        let curve = self.curve(bucket);
        let mut best = *curve.first()?;
        for point in &curve[1..] {
            if distance(point) < distance(&best) {
                best = *point;
            }
        }
        Some(best)
    }
}

/// Aggregated research data for one occupation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AutomationResearchData {
    pub occupation: String,
    pub research_papers: Vec<ResearchPaper>,
    pub industry_reports: Vec<IndustryReport>,
    pub news_articles: Vec<NewsArticle>,
    pub trends: Vec<AutomationTrend>,
    pub overall_score: f64,
    pub confidence_level: ResearchConfidence,
    pub regional_impact: RegionalImpact,
    pub adoption_curves: AdoptionCurves,
    /// ISO-8601 timestamp of the last refresh, empty when unknown.
    pub last_updated: String,
}

impl Default for AutomationResearchData {
    fn default() -> Self {
        Self::neutral("")
    }
}

impl AutomationResearchData {
    /// Neutral research data used when the research provider has nothing.
    pub fn neutral(occupation: impl Into<String>) -> Self {
        Self {
            occupation: occupation.into(),
            research_papers: Vec::new(),
            industry_reports: Vec::new(),
            news_articles: Vec::new(),
            trends: Vec::new(),
            overall_score: NEUTRAL_SCORE,
            confidence_level: ResearchConfidence::default(),
            regional_impact: RegionalImpact::default(),
            adoption_curves: AdoptionCurves::default(),
            last_updated: String::new(),
        }
    }

    /// Total number of papers, reports, and articles.
    pub fn source_count(&self) -> usize {
        self.research_papers.len() + self.industry_reports.len() + self.news_articles.len()
    }

    /// True when there are no signals of any kind beyond the aggregate score.
    pub fn has_no_signals(&self) -> bool {
        self.source_count() == 0 && self.trends.is_empty()
    }
}
