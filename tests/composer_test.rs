use std::collections::BTreeMap;

use resume_forge::composer::{compose, resolve_headline, DEFAULT_HEADLINE_FALLBACK};
use resume_forge::types::{
    BlocksBundle, ExperienceBlock, FilterRules, PersonalInfo, SkillCategory, SkillLevel,
    TemplateConfig, TemplateOptions,
};

const YEAR: i32 = 2026;

fn smap(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn sample_bundle() -> BlocksBundle {
    let mut skills = BTreeMap::new();
    skills.insert(
        "infrastructure".to_string(),
        SkillCategory {
            category: "Infrastructure".to_string(),
            levels: BTreeMap::from([
                (
                    SkillLevel::Expert,
                    strings(&["Terraform", "aws", "Kubernetes"]),
                ),
                (SkillLevel::Proficient, strings(&["Helm"])),
            ]),
        },
    );
    skills.insert(
        "niche".to_string(),
        SkillCategory {
            category: "Niche Tools".to_string(),
            levels: BTreeMap::from([(SkillLevel::Proficient, strings(&["Cosmos SDK"]))]),
        },
    );

    BlocksBundle {
        personal_info: PersonalInfo {
            name: "Alex Voronov".to_string(),
            title_variants: BTreeMap::new(),
            headline_variants: smap(&[
                ("senior", "Senior DevOps Engineer"),
                ("blockchain", "Blockchain Infrastructure Engineer"),
            ]),
            contacts: smap(&[("email", "alex@example.com")]),
            availability: BTreeMap::new(),
        },
        summaries: smap(&[
            ("devops", "Builds reliable platforms."),
            ("blockchain", "Runs validator infrastructure."),
        ]),
        skills,
        experience: vec![
            ExperienceBlock {
                id: "current_role".to_string(),
                title: "Senior DevOps Engineer".to_string(),
                company: "Nexus".to_string(),
                period: "2023 – Present".to_string(),
                tags: strings(&["devops"]),
                responsibilities: strings(&["Owns the platform"]),
                achievements: strings(&["Cut deploy time"]),
                hidden_for: vec![],
            },
            ExperienceBlock {
                id: "junior_role".to_string(),
                title: "Sysadmin".to_string(),
                company: "Agency".to_string(),
                period: "2015 – 2018".to_string(),
                tags: strings(&["sysadmin"]),
                responsibilities: strings(&["Kept the lights on"]),
                achievements: vec![],
                hidden_for: strings(&["senior"]),
            },
        ],
    }
}

fn sample_template(key: &str) -> TemplateConfig {
    TemplateConfig {
        template: key.to_string(),
        name: "Test Template".to_string(),
        headline_variant: "senior".to_string(),
        summary_key: "devops".to_string(),
        skill_categories: strings(&["infrastructure"]),
        skill_levels: vec![SkillLevel::Expert],
        filters: FilterRules::default(),
        options: TemplateOptions::default(),
        output: None,
    }
}

#[test]
fn compose_resolves_headline_summary_skills_and_experience() {
    let bundle = sample_bundle();
    let config = sample_template("generic");
    let resume = compose(&bundle, &config, YEAR).unwrap();

    assert_eq!(resume.personal.name, "Alex Voronov");
    assert_eq!(resume.personal.headline, "Senior DevOps Engineer");
    assert_eq!(resume.summary, "Builds reliable platforms.");
    assert_eq!(resume.meta.template, "generic");
    assert_eq!(resume.skills.len(), 1);
    assert_eq!(resume.experience.len(), 2);
}

#[test]
fn summary_lookup_failure_fails_the_whole_composition() {
    let bundle = sample_bundle();
    let mut config = sample_template("generic");
    config.summary_key = "missing".to_string();

    let err = compose(&bundle, &config, YEAR).unwrap_err();
    assert!(err.to_string().contains("summary 'missing' not found"));
}

#[test]
fn compose_is_deterministic() {
    let bundle = sample_bundle();
    let config = sample_template("generic");

    let first = compose(&bundle, &config, YEAR).unwrap();
    let second = compose(&bundle, &config, YEAR).unwrap();
    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

#[test]
fn compose_does_not_mutate_the_bundle() {
    let bundle = sample_bundle();
    let before = serde_json::to_value(&bundle).unwrap();
    let config = sample_template("senior_devops_standard");

    let _ = compose(&bundle, &config, YEAR).unwrap();
    assert_eq!(before, serde_json::to_value(&bundle).unwrap());
}

#[test]
fn skills_are_sorted_case_insensitively() {
    let bundle = sample_bundle();
    let config = sample_template("generic");
    let resume = compose(&bundle, &config, YEAR).unwrap();

    assert_eq!(
        resume.skills[0].skills,
        strings(&["aws", "Kubernetes", "Terraform"])
    );
}

#[test]
fn empty_level_selection_omits_the_category() {
    // "niche" only has proficient entries; requesting expert yields nothing.
    let bundle = sample_bundle();
    let mut config = sample_template("generic");
    config.skill_categories = strings(&["niche"]);
    config.skill_levels = vec![SkillLevel::Expert];

    let resume = compose(&bundle, &config, YEAR).unwrap();
    assert!(resume.skills.is_empty());
}

#[test]
fn unknown_categories_are_omitted_not_errors() {
    let bundle = sample_bundle();
    let mut config = sample_template("generic");
    config.skill_categories = strings(&["does_not_exist", "infrastructure"]);

    let resume = compose(&bundle, &config, YEAR).unwrap();
    assert_eq!(resume.skills.len(), 1);
    assert_eq!(resume.skills[0].category, "Infrastructure");
}

#[test]
fn skill_sections_follow_requested_category_order() {
    let bundle = sample_bundle();
    let mut config = sample_template("generic");
    config.skill_categories = strings(&["niche", "infrastructure"]);
    config.skill_levels = vec![];

    let resume = compose(&bundle, &config, YEAR).unwrap();
    let categories: Vec<&str> = resume.skills.iter().map(|s| s.category.as_str()).collect();
    assert_eq!(categories, vec!["Niche Tools", "Infrastructure"]);
}

#[test]
fn empty_skill_levels_mean_all_levels() {
    let bundle = sample_bundle();
    let mut config = sample_template("generic");
    config.skill_levels = vec![];

    let resume = compose(&bundle, &config, YEAR).unwrap();
    assert!(resume.skills[0]
        .skills
        .iter()
        .any(|s| s == "Helm"));
}

#[test]
fn hidden_blocks_are_excluded_per_template_identity() {
    let bundle = sample_bundle();

    let senior = compose(&bundle, &sample_template("senior_devops_standard"), YEAR).unwrap();
    let ids: Vec<&str> = senior.experience.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["current_role"]);

    let startup = compose(&bundle, &sample_template("blockchain_startup"), YEAR).unwrap();
    assert_eq!(startup.experience.len(), 2);
}

#[test]
fn max_experience_blocks_caps_the_list() {
    let bundle = sample_bundle();
    let mut config = sample_template("generic");
    config.options.max_experience_blocks = Some(1);

    let resume = compose(&bundle, &config, YEAR).unwrap();
    assert_eq!(resume.experience.len(), 1);
    assert_eq!(resume.experience[0].id, "current_role");
}

#[test]
fn headline_falls_back_to_default_key() {
    let bundle = sample_bundle();
    let mut config = sample_template("generic");
    config.headline_variant = "nonexistent".to_string();

    let resume = compose(&bundle, &config, YEAR).unwrap();
    assert_eq!(resume.personal.headline, "Senior DevOps Engineer");
}

#[test]
fn headline_falls_back_to_any_variant() {
    let variants = smap(&[("quirky", "Platform Tinkerer")]);
    let headline = resolve_headline(&variants, "missing", DEFAULT_HEADLINE_FALLBACK).unwrap();
    assert_eq!(headline, "Platform Tinkerer");
}

#[test]
fn zero_variants_is_an_error() {
    let variants = BTreeMap::new();
    let err = resolve_headline(&variants, "any", DEFAULT_HEADLINE_FALLBACK).unwrap_err();
    assert!(err.to_string().contains("headline variants"));
}

#[test]
fn legacy_title_variants_are_consulted() {
    let mut bundle = sample_bundle();
    bundle.personal_info.title_variants = smap(&[("senior", "Old-Style Headline")]);
    bundle.personal_info.headline_variants = BTreeMap::new();

    let resume = compose(&bundle, &sample_template("generic"), YEAR).unwrap();
    assert_eq!(resume.personal.headline, "Old-Style Headline");
}
