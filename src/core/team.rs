use std::cmp::Ordering;
use indexmap::IndexMap;
use crate::core::normalize::normalize_keyword;
use crate::models::{CombinedTeamKeyword, RawKeyword};

/// Weight assumed for a team member keyword that carries none
pub const TEAM_DEFAULT_WEIGHT: f64 = 0.5;

/// Boost applied to a specialised keyword only one member contributes
pub const UNIQUE_BOOST: f64 = 0.2;

/// Reduction applied to a broad tool every member lists
pub const SHARED_GENERIC_PENALTY: f64 = 0.1;

/// Floor for penalised generic keywords
pub const GENERIC_WEIGHT_FLOOR: f64 = 0.3;

/// Soft skills carry no signal for team composition and are dropped
pub const SOFT_SKILLS: &[&str] = &[
    "communication",
    "teamwork",
    "team player",
    "leadership",
    "problem solving",
    "problem-solving",
    "time management",
    "adaptability",
    "creativity",
    "collaboration",
    "interpersonal",
    "interpersonal skills",
    "public speaking",
    "work ethic",
    "multitasking",
    "organizational",
    "organizational skills",
    "negotiation",
    "conflict resolution",
    "empathy",
    "active listening",
    "decision making",
    "initiative",
    "motivation",
    "flexibility",
    "stress management",
    "networking",
    "patience",
    "positive attitude",
    "attention to detail",
    "self-motivated",
    "self motivated",
    "fast learner",
    "quick learner",
    "hardworking",
    "dedicated",
    "passionate",
    "detail oriented",
    "team management",
    "people skills",
    "verbal communication",
    "written communication",
    "presentation skills",
    "critical thinking",
    "analytical thinking",
    "creative thinking",
    "innovative",
    "proactive",
    "organized",
    "responsible",
    "reliable",
    "punctual",
];

/// Broad technologies that are kept but never boosted
pub const GENERIC_TECH: &[&str] = &[
    "python",
    "javascript",
    "sql",
    "api",
    "data",
    "analysis",
    "excel",
    "git",
    "html",
    "css",
    "react",
    "node",
    "java",
    "c++",
    "typescript",
    "linux",
];

#[inline]
pub fn is_soft_skill(keyword: &str) -> bool {
    SOFT_SKILLS.contains(&keyword)
}

#[inline]
pub fn is_generic_tech(keyword: &str) -> bool {
    GENERIC_TECH.contains(&keyword)
}

/// Combine every member's keywords into one team profile
///
/// # Pipeline Stages
/// 1. Flatten and normalize, tracking max weight, last category and occurrences
/// 2. Drop soft skills
/// 3. Boost keywords only one entry contributes, unless they are generic tech
/// 4. Penalise generic tech that every member lists
/// 5. Sort unique keywords first, then by descending weight
///
/// Occurrences count entries, not members: a member listing the same keyword
/// twice contributes two occurrences.
pub fn combine_team_keywords(members: &[Vec<RawKeyword>]) -> Vec<CombinedTeamKeyword> {
    let member_count = members.len();
    let mut combined: IndexMap<String, CombinedTeamKeyword> = IndexMap::new();

    // Stage 1: flatten
    for raw in members.iter().flatten() {
        let key = match raw.keyword.as_deref().map(normalize_keyword) {
            Some(key) if !key.is_empty() => key,
            _ => continue,
        };
        let weight = raw.weight.unwrap_or(TEAM_DEFAULT_WEIGHT);

        combined
            .entry(key)
            .and_modify(|entry| {
                entry.weight = entry.weight.max(weight);
                if raw.category.is_some() {
                    entry.category = raw.category.clone();
                }
                entry.occurrences += 1;
            })
            .or_insert_with_key(|key| CombinedTeamKeyword {
                keyword: key.clone(),
                weight,
                category: raw.category.clone(),
                occurrences: 1,
                is_unique: false,
            });
    }

    let flattened = combined.len();

    // Stages 2-4: filter and reweight
    let mut keywords: Vec<CombinedTeamKeyword> = combined
        .into_values()
        .filter(|entry| !is_soft_skill(&entry.keyword))
        .map(|mut entry| {
            let generic = is_generic_tech(&entry.keyword);
            entry.is_unique = entry.occurrences == 1;

            if entry.is_unique && !generic {
                entry.weight = (entry.weight + UNIQUE_BOOST).min(1.0);
                tracing::trace!("Boosted unique keyword {} to {}", entry.keyword, entry.weight);
            } else if generic && entry.occurrences as usize == member_count {
                entry.weight = (entry.weight - SHARED_GENERIC_PENALTY).max(GENERIC_WEIGHT_FLOOR);
                tracing::trace!("Penalised shared generic keyword {} to {}", entry.keyword, entry.weight);
            }

            entry
        })
        .collect();

    // Stage 5: rank
    keywords.sort_by(compare_team_keywords);

    tracing::debug!(
        "Combined team keywords: {} members, {} distinct, {} after soft-skill filter",
        member_count,
        flattened,
        keywords.len()
    );

    keywords
}

/// Unique tier first, then descending weight, then keyword for a total order
fn compare_team_keywords(a: &CombinedTeamKeyword, b: &CombinedTeamKeyword) -> Ordering {
    b.is_unique
        .cmp(&a.is_unique)
        .then_with(|| b.weight.total_cmp(&a.weight))
        .then_with(|| a.keyword.cmp(&b.keyword))
}
