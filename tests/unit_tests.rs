// Unit tests for Skill Match

use skill_match::core::{
    compatibility::calculate_compatibility,
    normalize::normalize_keyword,
    pipeline::{calculate_consistency_score, calculate_final_score},
    team::{combine_team_keywords, GENERIC_TECH, SOFT_SKILLS},
};
use skill_match::models::{KeywordInput, MatchQuality, RawKeyword, ScoreSet};

fn weighted(pairs: &[(&str, f64)]) -> Vec<KeywordInput> {
    pairs.iter().map(|&(k, w)| KeywordInput::from((k, w))).collect()
}

fn member(pairs: &[(&str, f64)]) -> Vec<RawKeyword> {
    pairs.iter().map(|&(k, w)| RawKeyword::weighted(k, w)).collect()
}

#[test]
fn test_normalize_is_case_and_whitespace_insensitive() {
    assert_eq!(normalize_keyword(" Python "), "python");
    assert_eq!(normalize_keyword(" Python "), normalize_keyword("python"));
    assert_eq!(normalize_keyword(&normalize_keyword("  ReAct ")), normalize_keyword("  ReAct "));
}

#[test]
fn test_compatibility_worked_example() {
    let a = weighted(&[("python", 0.8), ("sql", 0.6)]);
    let b = weighted(&[("python", 0.5), ("react", 0.9)]);

    let result = calculate_compatibility(&a, &b);

    assert_eq!(result.score, 30.23);
    assert_eq!(result.total_common, 1);
    assert_eq!(result.common_keywords[0].keyword, "python");
    assert!((result.common_keywords[0].weight - 0.65).abs() < 1e-9);
}

#[test]
fn test_compatibility_symmetric_and_bounded() {
    let profiles = vec![
        weighted(&[("rust", 0.9), ("sql", 0.4)]),
        weighted(&[("Rust", 0.2), ("Kafka", 0.8), ("go", 0.6)]),
        weighted(&[("sql", 1.0)]),
        weighted(&[("docker", 0.3), ("rust", 0.3), ("sql", 0.3), ("go", 0.3)]),
        vec![],
    ];

    for a in &profiles {
        for b in &profiles {
            let ab = calculate_compatibility(a, b).score;
            let ba = calculate_compatibility(b, a).score;
            assert_eq!(ab, ba, "Compatibility should be symmetric");
            assert!((0.0..=100.0).contains(&ab), "Score {} is out of range [0, 100]", ab);
        }
    }
}

#[test]
fn test_compatibility_self_match() {
    let a = weighted(&[("rust", 0.9), ("sql", 0.4), ("aws", 0.1)]);
    assert_eq!(calculate_compatibility(&a, &a).score, 100.0);

    let bare: Vec<KeywordInput> = vec!["Rust".into(), "SQL".into()];
    assert_eq!(calculate_compatibility(&bare, &bare).score, 100.0);
}

#[test]
fn test_match_quality_thresholds() {
    assert_eq!(MatchQuality::from_score(70.0).label(), "Excellent Match");
    assert_eq!(MatchQuality::from_score(69.9).label(), "Great Match");
    assert_eq!(MatchQuality::from_score(50.0).color(), "blue");
    assert_eq!(MatchQuality::from_score(30.0).label(), "Good Match");
    assert_eq!(MatchQuality::from_score(15.0).label(), "Moderate Match");
    assert_eq!(MatchQuality::from_score(14.99).label(), "Low Match");
    assert_eq!(MatchQuality::from_score(0.0).label(), "Low Match");
    assert_eq!(MatchQuality::from_score(0.0).color(), "gray");
}

#[test]
fn test_team_unique_and_generic_reweighting() {
    let members = vec![
        member(&[("python", 0.6), ("Computer Vision", 0.5)]),
        member(&[("python", 0.9), ("rust", 0.7)]),
        member(&[("python", 0.4), ("rust", 0.6)]),
    ];

    let combined = combine_team_keywords(&members);

    let cv = combined.iter().find(|k| k.keyword == "computer vision").unwrap();
    assert!(cv.is_unique);
    assert!((cv.weight - 0.7).abs() < 1e-9);

    let python = combined.iter().find(|k| k.keyword == "python").unwrap();
    assert!(!python.is_unique);
    assert!((python.weight - 0.8).abs() < 1e-9);

    let rust = combined.iter().find(|k| k.keyword == "rust").unwrap();
    assert_eq!(rust.weight, 0.7);

    assert_eq!(combined[0].keyword, "computer vision");
}

#[test]
fn test_team_soft_skills_always_removed() {
    let heavy: Vec<RawKeyword> = SOFT_SKILLS
        .iter()
        .map(|skill| RawKeyword::weighted(skill.to_uppercase(), 1.0))
        .collect();
    let members = vec![heavy.clone(), heavy, member(&[("elixir", 0.5)])];

    let combined = combine_team_keywords(&members);

    for skill in SOFT_SKILLS {
        assert!(
            combined.iter().all(|k| k.keyword != *skill),
            "Soft skill {} should be filtered",
            skill
        );
    }
    assert_eq!(combined.len(), 1);
}

#[test]
fn test_team_generic_tech_is_never_boosted() {
    let members: Vec<Vec<RawKeyword>> = GENERIC_TECH
        .iter()
        .map(|tech| vec![RawKeyword::weighted(*tech, 0.5)])
        .collect();

    let combined = combine_team_keywords(&members);

    assert_eq!(combined.len(), GENERIC_TECH.len());
    assert!(combined.iter().all(|k| k.is_unique && k.weight == 0.5));
}

#[test]
fn test_consistency_score() {
    assert_eq!(calculate_consistency_score(5, 5), 100.0);
    assert_eq!(calculate_consistency_score(3, 5), 60.0);
    assert_eq!(calculate_consistency_score(7, 5), 100.0);
}

#[test]
fn test_final_score_renormalizes() {
    let technical_only = ScoreSet {
        technical_score: Some(80.0),
        ..Default::default()
    };
    assert_eq!(calculate_final_score(&technical_only), 80.0);

    let full = ScoreSet {
        synergy_score: Some(100.0),
        consistency_score: Some(100.0),
        technical_score: Some(100.0),
        social_score: Some(100.0),
    };
    assert_eq!(calculate_final_score(&full), 100.0);

    assert_eq!(calculate_final_score(&ScoreSet::default()), 0.0);
}

#[test]
fn test_final_score_weighted_mean() {
    // 60*0.25 + 40*0.20 + 90*0.35 + 50*0.20 = 64.5
    let scores = ScoreSet {
        synergy_score: Some(60.0),
        consistency_score: Some(40.0),
        technical_score: Some(90.0),
        social_score: Some(50.0),
    };
    assert_eq!(calculate_final_score(&scores), 64.5);
}
