use std::collections::BTreeMap;

use crate::error::ResumeForgeError;
use crate::filter;
use crate::skills;
use crate::types::{
    BlocksBundle, ComposedResume, ResolvedPersonal, ResumeMeta, TemplateConfig,
};

/// Headline variant tried when the template's own variant is absent.
pub const DEFAULT_HEADLINE_FALLBACK: &str = "senior";

/// Resolve a headline: exact key, then the fallback key, then whatever
/// variant comes first. Fails only when the bundle defines no variants.
pub fn resolve_headline(
    variants: &BTreeMap<String, String>,
    key: &str,
    fallback: &str,
) -> Result<String, ResumeForgeError> {
    if let Some(text) = variants.get(key) {
        return Ok(text.clone());
    }
    if let Some(text) = variants.get(fallback) {
        return Ok(text.clone());
    }
    variants.values().next().cloned().ok_or_else(|| {
        ResumeForgeError::Data("personal_info defines no headline variants".to_string())
    })
}

/// Bind one template to one bundle, producing one render-ready resume.
/// No field is ever partially populated: any resolution failure fails
/// the whole composition.
pub fn compose(
    bundle: &BlocksBundle,
    config: &TemplateConfig,
    current_year: i32,
) -> Result<ComposedResume, ResumeForgeError> {
    let info = &bundle.personal_info;

    let headline = resolve_headline(
        info.variants(),
        &config.headline_variant,
        DEFAULT_HEADLINE_FALLBACK,
    )?;

    let summary = bundle
        .summaries
        .get(&config.summary_key)
        .cloned()
        .ok_or_else(|| {
            ResumeForgeError::Config(format!(
                "summary '{}' not found in blocks",
                config.summary_key
            ))
        })?;

    let skills = skills::select_skills(
        &bundle.skills,
        &config.skill_categories,
        &config.skill_levels,
    );

    let experience = filter::apply_experience_filters(
        &bundle.experience,
        &config.filters,
        config.options.max_experience_blocks,
        Some(&config.template),
        current_year,
    );

    Ok(ComposedResume {
        meta: ResumeMeta {
            template: config.template.clone(),
            name: config.name.clone(),
            options: config.options.clone(),
        },
        personal: ResolvedPersonal {
            name: info.name.clone(),
            headline,
            contacts: info.contacts.clone(),
            availability: info.availability.clone(),
        },
        summary,
        skills,
        experience,
    })
}
