//! Research signal aggregation: paper consensus, report adoption rates,
//! emerging-technology mentions, and news sentiment.

use apo_core::constants::{NEUTRAL_SCORE, RESEARCH_RECENCY_WINDOW_YEARS};
use apo_core::types::collections::FxHashMap;
use apo_core::types::research::{AutomationResearchData, Timeframe};
use serde::{Deserialize, Serialize};

use super::keywords::{
    count_matches, contains_any, ADOPTION_TERMS, EMERGING_TECH_KEYWORDS, NEGATIVE_TERMS,
    POSITIVE_TERMS,
};

/// Maximum number of technologies kept in `ResearchSignals::emerging_tech`.
const TOP_TECH_LIMIT: usize = 5;

/// Mentions at which the saturating density reaches 0.5.
const MENTION_HALF_SATURATION: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Classify by counting positive and negative term hits over insights.
    pub fn classify(insights: &[String]) -> Self {
        let (pos, neg) = insights.iter().fold((0, 0), |(p, n), insight| {
            (
                p + count_matches(insight, POSITIVE_TERMS),
                n + count_matches(insight, NEGATIVE_TERMS),
            )
        });
        match pos.cmp(&neg) {
            std::cmp::Ordering::Greater => Self::Positive,
            std::cmp::Ordering::Less => Self::Negative,
            std::cmp::Ordering::Equal => Self::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdoptionRate {
    pub year: i32,
    pub rate: f64,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechMention {
    pub tech: String,
    pub count: u32,
}

/// Aggregated view over an `AutomationResearchData` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchSignals {
    pub overall_score: f64,
    /// Mean of `score × relevance × recency` over papers; 0.5 with no papers.
    pub paper_consensus: f64,
    pub adoption_rates: Vec<AdoptionRate>,
    pub average_adoption: f64,
    /// Most-mentioned technologies, descending by count.
    pub emerging_tech: Vec<TechMention>,
    /// Sum of every technology hit across all sources.
    pub total_mentions: u32,
    pub mean_trend_impact: f64,
    pub short_term_trend_share: f64,
    pub positive_articles: usize,
    pub negative_articles: usize,
    pub article_count: usize,
}

impl ResearchSignals {
    pub fn aggregate(research: &AutomationResearchData, current_year: i32) -> Self {
        let paper_scores: Vec<f64> = research
            .research_papers
            .iter()
            .map(|paper| {
                let age = f64::from(current_year.saturating_sub(paper.publication_year));
                let recency = (1.0 - age / RESEARCH_RECENCY_WINDOW_YEARS).clamp(0.0, 1.0);
                sanitize(paper.automation_score.unwrap_or(NEUTRAL_SCORE))
                    * sanitize(paper.relevance_score)
                    * recency
            })
            .collect();
        let paper_consensus = mean_or_neutral(&paper_scores);

        let adoption_rates: Vec<AdoptionRate> = research
            .industry_reports
            .iter()
            .filter(|report| {
                report
                    .key_insights
                    .iter()
                    .any(|insight| contains_any(insight, ADOPTION_TERMS))
            })
            .map(|report| AdoptionRate {
                year: report.year,
                rate: sanitize(report.automation_score.unwrap_or(NEUTRAL_SCORE)),
                source: report.publisher.clone(),
            })
            .collect();
        let average_adoption =
            mean_or_neutral(&adoption_rates.iter().map(|r| r.rate).collect::<Vec<_>>());

        let (emerging_tech, total_mentions) = count_tech_mentions(research);

        let impacts: Vec<f64> = research
            .trends
            .iter()
            .map(|t| sanitize(t.impact_score))
            .collect();
        let mean_trend_impact = mean_or_neutral(&impacts);
        let short_term_trend_share = if research.trends.is_empty() {
            NEUTRAL_SCORE
        } else {
            let short = research
                .trends
                .iter()
                .filter(|t| t.timeframe == Timeframe::ShortTerm)
                .count();
            short as f64 / research.trends.len() as f64
        };

        let mut positive_articles = 0;
        let mut negative_articles = 0;
        for article in &research.news_articles {
            match Sentiment::classify(&article.key_insights) {
                Sentiment::Positive => positive_articles += 1,
                Sentiment::Negative => negative_articles += 1,
                Sentiment::Neutral => {}
            }
        }

        Self {
            overall_score: sanitize(research.overall_score),
            paper_consensus,
            adoption_rates,
            average_adoption,
            emerging_tech,
            total_mentions,
            mean_trend_impact,
            short_term_trend_share,
            positive_articles,
            negative_articles,
            article_count: research.news_articles.len(),
        }
    }

    /// `m / (m + 5)` over total technology mentions.
    pub fn mention_density(&self) -> f64 {
        let m = f64::from(self.total_mentions);
        m / (m + MENTION_HALF_SATURATION)
    }

    /// Displacement sentiment: `0.5 + 0.5 × (negative − positive) / n`.
    /// Negative coverage signals more automation pressure.
    pub fn displacement_sentiment(&self) -> f64 {
        if self.article_count == 0 {
            return NEUTRAL_SCORE;
        }
        let delta = self.negative_articles as f64 - self.positive_articles as f64;
        (NEUTRAL_SCORE + 0.5 * delta / self.article_count as f64).clamp(0.0, 1.0)
    }
}

fn count_tech_mentions(research: &AutomationResearchData) -> (Vec<TechMention>, u32) {
    let mut counts: FxHashMap<&'static str, u32> = FxHashMap::default();

    let paper_texts = research
        .research_papers
        .iter()
        .map(|p| source_text(&p.title, None, &p.key_insights));
    let report_texts = research
        .industry_reports
        .iter()
        .map(|r| source_text(&r.title, r.summary.as_deref(), &r.key_insights));
    let news_texts = research
        .news_articles
        .iter()
        .map(|a| source_text(&a.title, a.summary.as_deref(), &a.key_insights));

    for content in paper_texts.chain(report_texts).chain(news_texts) {
        let lower = content.to_lowercase();
        for tech in EMERGING_TECH_KEYWORDS {
            if lower.contains(tech) {
                *counts.entry(*tech).or_insert(0) += 1;
            }
        }
    }

    let total = counts.values().sum();
    let mut mentions: Vec<TechMention> = counts
        .into_iter()
        .map(|(tech, count)| TechMention {
            tech: tech.to_string(),
            count,
        })
        .collect();
    // Name breaks ties so output does not depend on hash order.
    mentions.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tech.cmp(&b.tech)));
    mentions.truncate(TOP_TECH_LIMIT);
    (mentions, total)
}

fn source_text(title: &str, summary: Option<&str>, insights: &[String]) -> String {
    let mut content = title.to_string();
    if let Some(summary) = summary {
        content.push(' ');
        content.push_str(summary);
    }
    for insight in insights {
        content.push(' ');
        content.push_str(insight);
    }
    content
}

pub(crate) fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        NEUTRAL_SCORE
    }
}

pub(crate) fn mean_or_neutral(values: &[f64]) -> f64 {
    if values.is_empty() {
        NEUTRAL_SCORE
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
