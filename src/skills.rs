use std::collections::BTreeMap;

use crate::types::{SkillCategory, SkillLevel, SkillSection, ALL_LEVELS};

/// Select skills per requested category and proficiency level.
///
/// An empty level filter means all three levels in priority order.
/// Categories absent from the bundle, or yielding no skills for the
/// requested levels, are omitted rather than rendered as empty sections.
pub fn select_skills(
    available: &BTreeMap<String, SkillCategory>,
    requested: &[String],
    levels: &[SkillLevel],
) -> Vec<SkillSection> {
    let levels: &[SkillLevel] = if levels.is_empty() { &ALL_LEVELS } else { levels };

    let mut sections = Vec::new();
    for key in requested {
        let category = match available.get(key) {
            Some(c) => c,
            None => continue,
        };
        let mut skills = category.collect(levels);
        if skills.is_empty() {
            continue;
        }
        skills.sort_by_key(|s| s.to_lowercase());
        sections.push(SkillSection {
            category: category.category.clone(),
            skills,
        });
    }
    sections
}
