//! Directed skill relationship graph on petgraph.
//!
//! Nodes are skill names, edges carry the influence of the primary skill on
//! the related one. Node order is first appearance: each primary skill, then
//! its related skills.

use std::collections::VecDeque;

use apo_core::constants::{CLUSTER_IMPACT_THRESHOLD, INDIRECT_IMPACT_DISCOUNT};
use apo_core::errors::SkillError;
use apo_core::types::collections::{FxHashMap, FxHashSet};
use petgraph::algo::{is_cyclic_directed, tarjan_scc};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use super::types::{RelationshipCluster, RelationshipValidation, SkillRelationship};

/// Known skill profiles: common occupations, growth rate, future relevance.
const SKILL_PROFILES: &[(&str, [&str; 2], f64, f64)] = &[
    ("javascript", ["Frontend Developer", "Full Stack Developer"], 0.8, 0.9),
    ("python", ["Data Scientist", "Backend Developer"], 0.9, 0.95),
    ("sql", ["Database Administrator", "Data Analyst"], 0.7, 0.8),
    ("react", ["Frontend Developer", "Mobile Developer"], 0.85, 0.9),
    ("node.js", ["Backend Developer", "Full Stack Developer"], 0.8, 0.85),
];
const DEFAULT_GROWTH: f64 = 0.5;
const DEFAULT_RELEVANCE: f64 = 0.6;

#[derive(Debug, Clone, Default)]
pub struct SkillGraph {
    pub graph: DiGraph<String, f64>,
    pub node_index: FxHashMap<String, NodeIndex>,
}

impl SkillGraph {
    /// Builds the graph, rejecting non-finite impacts or `|impact| > 1`.
    pub fn build(relationships: &[SkillRelationship]) -> Result<Self, SkillError> {
        let mut g = Self::default();
        for rel in relationships {
            let primary = g.ensure_node(&rel.primary_skill);
            for related in &rel.related_skills {
                if !related.impact.is_finite() || related.impact.abs() > 1.0 {
                    return Err(SkillError::ImpactOutOfRange {
                        primary: rel.primary_skill.clone(),
                        related: related.skill.clone(),
                        impact: related.impact,
                    });
                }
                let target = g.ensure_node(&related.skill);
                g.graph.add_edge(primary, target, related.impact);
            }
        }
        Ok(g)
    }

    fn ensure_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(name.to_string());
        self.node_index.insert(name.to_string(), idx);
        idx
    }

    pub fn skill_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn relationship_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn direct(&self, from: NodeIndex, to: NodeIndex) -> Option<f64> {
        self.graph
            .edges_directed(from, Direction::Outgoing)
            .find(|e| e.target() == to)
            .map(|e| *e.weight())
    }

    /// Direct impact of `source` on `target`; otherwise the strongest
    /// first-hop impact through a skill that itself relates to `target`,
    /// discounted by 0.7; otherwise 0.
    pub fn calculate_skill_impact(&self, source: &str, target: &str) -> f64 {
        let (Some(&from), Some(&to)) = (self.node_index.get(source), self.node_index.get(target))
        else {
            return 0.0;
        };
        if let Some(impact) = self.direct(from, to) {
            return impact;
        }

        self.graph
            .edges_directed(from, Direction::Outgoing)
            .filter(|e| self.direct(e.target(), to).is_some())
            .map(|e| e.weight() * INDIRECT_IMPACT_DISCOUNT)
            .reduce(f64::max)
            .unwrap_or(0.0)
    }

    /// Expands each unprocessed skill along strong outgoing edges
    /// (impact ≥ 0.6). Groups of two or more skills become clusters.
    pub fn identify_skill_clusters(&self) -> Vec<RelationshipCluster> {
        let mut processed: FxHashSet<NodeIndex> = FxHashSet::default();
        let mut clusters = Vec::new();

        for start in self.graph.node_indices() {
            if processed.contains(&start) {
                continue;
            }
            let members = self.strong_reach(start);
            if members.len() < 2 {
                continue;
            }
            processed.extend(members.iter().copied());

            let skills: Vec<String> = members.iter().map(|&n| self.graph[n].clone()).collect();
            clusters.push(RelationshipCluster {
                id: format!("cluster-{}", clusters.len() + 1),
                name: cluster_name(&skills),
                common_occupations: common_occupations(&skills),
                growth_trend: profile_mean(&skills, |(_, _, growth, _)| *growth, DEFAULT_GROWTH),
                future_relevance: profile_mean(&skills, |(_, _, _, rel)| *rel, DEFAULT_RELEVANCE),
                skills,
            });
        }

        clusters
    }

    /// BFS over edges at or above the clustering threshold, start included.
    fn strong_reach(&self, start: NodeIndex) -> Vec<NodeIndex> {
        let mut visited = FxHashSet::default();
        let mut queue = VecDeque::new();
        let mut result = Vec::new();

        visited.insert(start);
        queue.push_back(start);

        while let Some(node) = queue.pop_front() {
            result.push(node);
            for edge in self.graph.edges_directed(node, Direction::Outgoing) {
                if *edge.weight() >= CLUSTER_IMPACT_THRESHOLD && visited.insert(edge.target()) {
                    queue.push_back(edge.target());
                }
            }
        }

        result
    }

    /// Reports directed cycles. Impact ranges were already checked by `build`.
    pub fn validate(&self) -> RelationshipValidation {
        if !is_cyclic_directed(&self.graph) {
            return RelationshipValidation {
                has_cycle: false,
                cyclic_skills: Vec::new(),
            };
        }

        let mut cyclic_skills: Vec<String> = tarjan_scc(&self.graph)
            .into_iter()
            .filter(|scc| scc.len() > 1 || self.graph.contains_edge(scc[0], scc[0]))
            .flatten()
            .map(|n| self.graph[n].clone())
            .collect();
        cyclic_skills.sort();

        RelationshipValidation {
            has_cycle: true,
            cyclic_skills,
        }
    }
}

/// Builds and validates in one step. Out-of-range impacts are errors.
pub fn validate_skill_relationships(
    relationships: &[SkillRelationship],
) -> Result<RelationshipValidation, SkillError> {
    Ok(SkillGraph::build(relationships)?.validate())
}

/// Two most frequent words longer than three letters, ties in first-seen order.
fn cluster_name(skills: &[String]) -> String {
    let mut freq: Vec<(String, usize)> = Vec::new();
    for skill in skills {
        let lower = skill.to_lowercase();
        for word in lower.split(|c: char| !c.is_ascii_lowercase()).filter(|w| w.len() > 3) {
            match freq.iter_mut().find(|(w, _)| w == word) {
                Some((_, count)) => *count += 1,
                None => freq.push((word.to_string(), 1)),
            }
        }
    }
    freq.sort_by(|a, b| b.1.cmp(&a.1));

    if freq.is_empty() {
        let first = skills.first().map(String::as_str).unwrap_or_default();
        format!("Skill Cluster {first}")
    } else {
        let top: Vec<&str> = freq.iter().take(2).map(|(w, _)| w.as_str()).collect();
        format!("{} Skills", top.join("/"))
    }
}

fn profile(skill: &str) -> Option<&'static (&'static str, [&'static str; 2], f64, f64)> {
    let key = skill.to_lowercase();
    SKILL_PROFILES.iter().find(|(name, ..)| *name == key)
}

fn common_occupations(skills: &[String]) -> Vec<String> {
    let mut seen = FxHashSet::default();
    skills
        .iter()
        .filter_map(|s| profile(s))
        .flat_map(|(_, occupations, ..)| occupations.iter())
        .filter(|o| seen.insert(**o))
        .map(|o| o.to_string())
        .collect()
}

fn profile_mean(
    skills: &[String],
    pick: impl Fn(&(&'static str, [&'static str; 2], f64, f64)) -> f64,
    default: f64,
) -> f64 {
    if skills.is_empty() {
        return default;
    }
    skills
        .iter()
        .map(|s| profile(s).map_or(default, &pick))
        .sum::<f64>()
        / skills.len() as f64
}
