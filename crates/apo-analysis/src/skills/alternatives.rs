//! Automation-resistant alternative skills per category.

use apo_core::types::occupation::{Skill, SkillCategory};

type Template = (&'static str, &'static str, &'static str);

fn templates(category: SkillCategory) -> &'static [Template; 3] {
    match category {
        SkillCategory::Technical => &[
            ("tech-alt-1", "AI System Design", "Designing and implementing AI systems that augment human capabilities"),
            ("tech-alt-2", "Human-Centered Technology Development", "Creating technology solutions that prioritize human needs and experiences"),
            ("tech-alt-3", "Responsible AI Implementation", "Implementing AI systems with ethical considerations and human oversight"),
        ],
        SkillCategory::Soft => &[
            ("soft-alt-1", "Creative Problem Solving", "Approaching complex problems with innovative and creative solutions"),
            ("soft-alt-2", "Emotional Intelligence", "Understanding and managing emotions in professional contexts"),
            ("soft-alt-3", "Cross-Cultural Communication", "Communicating effectively across diverse cultural contexts"),
        ],
        SkillCategory::Cognitive => &[
            ("cog-alt-1", "Systems Thinking", "Understanding complex systems and their interconnections"),
            ("cog-alt-2", "Critical Analysis", "Evaluating information and arguments with depth and nuance"),
            ("cog-alt-3", "Ethical Decision Making", "Making decisions that consider ethical implications and values"),
        ],
        SkillCategory::Physical => &[
            ("phys-alt-1", "Complex Physical Manipulation", "Performing intricate physical tasks requiring adaptability"),
            ("phys-alt-2", "Human-Machine Collaboration", "Working effectively alongside robotic and automated systems"),
            ("phys-alt-3", "Adaptive Physical Problem Solving", "Solving physical problems in unpredictable environments"),
        ],
        SkillCategory::DomainSpecific => &[
            ("domain-alt-1", "Interdisciplinary Knowledge Integration", "Combining knowledge from multiple domains to solve complex problems"),
            ("domain-alt-2", "Domain Innovation", "Developing new approaches and methodologies within a domain"),
            ("domain-alt-3", "Human-Centered Domain Expertise", "Applying domain expertise with a focus on human needs and experiences"),
        ],
    }
}

/// Three alternatives when `overall_score >= 0.5`, otherwise two.
pub fn alternatives_for(category: SkillCategory, overall_score: f64) -> Vec<Skill> {
    let take = if overall_score >= 0.5 { 3 } else { 2 };
    templates(category)
        .iter()
        .take(take)
        .map(|(id, name, description)| Skill::new(*id, *name, category).with_description(*description))
        .collect()
}
