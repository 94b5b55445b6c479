//! Decomposition of a skill into scored components.

use apo_core::types::occupation::{Skill, SkillCategory};

use super::jitter::JitterSource;
use super::types::SkillComponent;

const TOPIC: &str = "{topic}";

fn templates(category: SkillCategory) -> &'static [&'static str; 5] {
    match category {
        SkillCategory::Technical => &[
            "Technical knowledge of {topic}",
            "Application of {topic} in practical scenarios",
            "Problem-solving using {topic}",
            "Integration of {topic} with other systems",
            "Optimization of {topic} for performance",
        ],
        SkillCategory::Soft => &[
            "Communication of {topic} to diverse audiences",
            "Collaboration in {topic}-related projects",
            "Leadership in {topic} initiatives",
            "Adaptability to changes in {topic}",
            "Emotional intelligence in {topic} contexts",
        ],
        SkillCategory::Cognitive => &[
            "Critical thinking about {topic}",
            "Creative application of {topic}",
            "Analysis of {topic}-related problems",
            "Synthesis of {topic} with other knowledge",
            "Evaluation of {topic} effectiveness",
        ],
        SkillCategory::Physical => &[
            "Manual dexterity in {topic}",
            "Physical stamina for {topic}",
            "Spatial awareness in {topic}",
            "Hand-eye coordination for {topic}",
            "Fine motor skills in {topic}",
        ],
        SkillCategory::DomainSpecific => &[
            "Domain knowledge of {topic}",
            "Industry-specific application of {topic}",
            "Regulatory compliance in {topic}",
            "Best practices in {topic}",
            "Specialized tools for {topic}",
        ],
    }
}

// Salts keep the count, score and confidence draws independent.
const COUNT_SALT: u64 = 0;
const SCORE_SALT: u64 = 1 << 32;
const CONFIDENCE_SALT: u64 = 2 << 32;

/// Builds 3 to 5 components for `skill`, scored around `center`.
pub fn decompose(
    skill: &Skill,
    center: f64,
    amplitude: f64,
    jitter: &dyn JitterSource,
) -> Vec<SkillComponent> {
    let count = 3 + (jitter.bits(&skill.id, COUNT_SALT) % 3) as usize;

    templates(skill.category)
        .iter()
        .take(count)
        .enumerate()
        .map(|(i, template)| {
            let name = template.replace(TOPIC, &skill.name);
            let i = i as u64;
            let u = jitter.unit(&skill.id, SCORE_SALT + i);
            let automation_score = (center + (2.0 * u - 1.0) * amplitude).clamp(0.0, 1.0);
            let confidence_score = 0.6 + jitter.unit(&skill.id, CONFIDENCE_SALT + i) * 0.3;
            SkillComponent {
                description: format!("Ability to {} in professional contexts", name.to_lowercase()),
                name,
                automation_score,
                confidence_score,
                time_horizon_years: horizon_years(automation_score),
            }
        })
        .collect()
}

/// `round(20 - score * 15)`: high automation scores arrive sooner.
pub fn horizon_years(score: f64) -> u32 {
    (20.0 - score.clamp(0.0, 1.0) * 15.0).round() as u32
}
