//! Occupation inputs: tasks and skills.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single occupation task description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupationTask {
    pub id: String,
    pub description: String,
    /// Either a 0–1 weight or an O*NET 1–5 rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl OccupationTask {
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            importance: None,
            frequency: None,
            category: None,
        }
    }

    /// Importance on a 0–1 scale. Ratings above 1 are treated as 1–5 ratings.
    pub fn normalized_importance(&self) -> Option<f64> {
        self.importance
            .filter(|v| v.is_finite() && *v >= 0.0)
            .map(|v| if v > 1.0 { (v / 5.0).min(1.0) } else { v })
    }
}

/// Skill categories. Each carries a heuristic automation resistance factor.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(from = "String", into = "String")]
pub enum SkillCategory {
    #[default]
    Technical,
    Soft,
    Cognitive,
    Physical,
    DomainSpecific,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 5] = [
        Self::Technical,
        Self::Soft,
        Self::Cognitive,
        Self::Physical,
        Self::DomainSpecific,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::Soft => "soft",
            Self::Cognitive => "cognitive",
            Self::Physical => "physical",
            Self::DomainSpecific => "domain-specific",
        }
    }

    /// Capitalized form used in cluster names.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Technical => "Technical",
            Self::Soft => "Soft",
            Self::Cognitive => "Cognitive",
            Self::Physical => "Physical",
            Self::DomainSpecific => "Domain-specific",
        }
    }

    /// Heuristic automation score a skill of this category centers on.
    pub fn resistance_factor(&self) -> f64 {
        match self {
            Self::Technical => 0.6,
            Self::Soft => 0.3,
            Self::Cognitive => 0.5,
            Self::Physical => 0.7,
            Self::DomainSpecific => 0.6,
        }
    }

    /// Lenient parse; unknown categories map to `Technical`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "soft" => Self::Soft,
            "cognitive" => Self::Cognitive,
            "physical" => Self::Physical,
            "domain-specific" | "domain_specific" | "domain" => Self::DomainSpecific,
            _ => Self::Technical,
        }
    }
}

impl From<String> for SkillCategory {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<SkillCategory> for String {
    fn from(c: SkillCategory) -> Self {
        c.name().to_string()
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A skill attached to an occupation (or held by a worker).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: SkillCategory,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_level: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_level: Option<f64>,
}

impl Skill {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: SkillCategory) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            description: String::new(),
            importance: None,
            level: None,
            required_level: None,
            current_level: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
