//! Keyword heuristics over task descriptions and skill names.
//!
//! All matching is case-insensitive substring matching on the lowercased text.

use apo_core::constants::NEUTRAL_SCORE;

/// Phrases that mark a task as routine. Each hit adds 0.05.
pub const ROUTINE_INDICATORS: &[&str] = &[
    "routine",
    "repetitive",
    "standard",
    "basic",
    "simple",
    "data entry",
    "data processing",
    "calculation",
    "sorting",
    "filing",
    "monitoring",
    "scanning",
    "tracking",
];

/// Phrases that mark a task as complex. Each hit subtracts 0.05.
pub const COMPLEXITY_INDICATORS: &[&str] = &[
    "complex",
    "creative",
    "innovative",
    "judgment",
    "decision",
    "negotiate",
    "persuade",
    "emotional",
    "interpersonal",
    "leadership",
    "strategic",
    "novel",
    "unpredictable",
    "adapt",
    "customize",
];

/// Task potential keywords, ±0.1 per hit.
pub const REPETITIVE_KEYWORDS: &[&str] = &[
    "routine",
    "repetitive",
    "standard",
    "regular",
    "consistent",
    "systematic",
];

pub const COMPLEX_KEYWORDS: &[&str] = &[
    "complex",
    "analyze",
    "evaluate",
    "interpret",
    "judgment",
    "creative",
];

/// Tasks mentioning any of these require working with people.
pub const INTERPERSONAL_KEYWORDS: &[&str] = &[
    "collaborat",
    "coordinat",
    "negotiat",
    "communicat",
    "consult",
    "supervis",
    "counsel",
    "mentor",
    "teach",
    "train",
    "team",
    "client",
    "customer",
    "patient",
    "interpersonal",
];

/// Task categories that imply collaboration.
pub const COLLABORATIVE_CATEGORIES: &[&str] = &[
    "interacting with others",
    "communicating",
    "coordinating",
    "interpersonal",
    "team",
    "customer",
    "management",
];

pub const HIGH_RESISTANCE_SKILLS: &[&str] = &[
    "critical thinking",
    "problem solving",
    "creativity",
    "innovation",
    "emotional intelligence",
    "leadership",
    "negotiation",
    "persuasion",
];

pub const MEDIUM_RESISTANCE_SKILLS: &[&str] = &[
    "communication",
    "teamwork",
    "collaboration",
    "adaptability",
    "project management",
    "decision making",
    "research",
    "analysis",
];

pub const LOW_RESISTANCE_SKILLS: &[&str] = &[
    "data entry",
    "calculation",
    "documentation",
    "record keeping",
    "monitoring",
    "basic",
    "routine",
    "standard",
];

/// Emerging technology terms counted across research sources.
pub const EMERGING_TECH_KEYWORDS: &[&str] = &[
    "artificial intelligence",
    "machine learning",
    "deep learning",
    "neural network",
    "natural language processing",
    "computer vision",
    "robotics",
    "automation",
    "autonomous",
    "generative ai",
    "large language model",
    "llm",
    "gpt",
    "transformer",
];

pub const POSITIVE_TERMS: &[&str] = &[
    "increase",
    "growth",
    "improve",
    "advance",
    "opportunity",
    "benefit",
    "enhance",
];

pub const NEGATIVE_TERMS: &[&str] = &[
    "decrease",
    "decline",
    "threat",
    "risk",
    "replace",
    "eliminate",
    "displace",
];

/// Report insights that talk about adoption.
pub const ADOPTION_TERMS: &[&str] = &["adoption", "implement", "deploy"];

pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    let lower = text.to_lowercase();
    keywords.iter().any(|k| lower.contains(k))
}

pub fn count_matches(text: &str, keywords: &[&str]) -> usize {
    let lower = text.to_lowercase();
    keywords.iter().filter(|k| lower.contains(*k)).count()
}

/// Keyword-based automation likelihood: 0.5, +0.05 per routine indicator,
/// −0.05 per complexity indicator.
pub fn routine_likelihood(description: &str) -> f64 {
    let up = count_matches(description, ROUTINE_INDICATORS) as f64;
    let down = count_matches(description, COMPLEXITY_INDICATORS) as f64;
    (NEUTRAL_SCORE + 0.05 * up - 0.05 * down).clamp(0.0, 1.0)
}

/// Repetitive-keyword task potential: 0.5, ±0.1 per hit.
pub fn task_potential(description: &str) -> f64 {
    let up = count_matches(description, REPETITIVE_KEYWORDS) as f64;
    let down = count_matches(description, COMPLEX_KEYWORDS) as f64;
    (NEUTRAL_SCORE + 0.1 * up - 0.1 * down).clamp(0.0, 1.0)
}

/// Resistance to automation implied by a skill's name.
pub fn skill_resistance(name: &str) -> f64 {
    if contains_any(name, HIGH_RESISTANCE_SKILLS) {
        0.8
    } else if contains_any(name, MEDIUM_RESISTANCE_SKILLS) {
        0.5
    } else if contains_any(name, LOW_RESISTANCE_SKILLS) {
        0.2
    } else {
        NEUTRAL_SCORE
    }
}
