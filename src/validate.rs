use std::path::Path;

use crate::store;
use crate::templates;
use crate::types::{BlocksBundle, TemplateConfig};

/// Collect every detectable issue across the bundle and all templates.
/// Never fails: problems become human-readable lines, and checking
/// continues past each one.
pub fn collect_issues(blocks_path: &Path, templates_dir: &Path) -> Vec<String> {
    let mut issues = Vec::new();

    let bundle = match store::load_bundle(blocks_path) {
        Ok(b) => Some(b),
        Err(e) => {
            issues.push(format!("blocks validation failed: {}", e));
            None
        }
    };

    let keys = match templates::list_templates(templates_dir) {
        Ok(keys) => keys,
        Err(e) => {
            issues.push(format!("templates unavailable: {}", e));
            return issues;
        }
    };
    if keys.is_empty() {
        issues.push(format!(
            "no templates found in {}",
            templates_dir.display()
        ));
    }

    for key in keys {
        match templates::load_template(templates_dir, &key) {
            Ok(config) => match &bundle {
                Some(bundle) => issues.extend(check_template(bundle, &config)),
                None => {
                    if config.skill_categories.is_empty() {
                        issues.push(format!(
                            "template '{}' selects no skill categories",
                            config.template
                        ));
                    }
                }
            },
            Err(e) => issues.push(e.to_string()),
        }
    }

    issues
}

/// Cross-check one template against a loaded bundle.
pub fn check_template(bundle: &BlocksBundle, config: &TemplateConfig) -> Vec<String> {
    let mut issues = Vec::new();

    if config.skill_categories.is_empty() {
        issues.push(format!(
            "template '{}' selects no skill categories",
            config.template
        ));
    }
    if !bundle.summaries.contains_key(&config.summary_key) {
        issues.push(format!(
            "template '{}' references unknown summary '{}'",
            config.template, config.summary_key
        ));
    }
    for category in &config.skill_categories {
        if !bundle.skills.contains_key(category) {
            issues.push(format!(
                "template '{}' references unknown skill category '{}'",
                config.template, category
            ));
        }
    }

    let variants = bundle.personal_info.variants();
    if !variants.is_empty() && !variants.contains_key(&config.headline_variant) {
        issues.push(format!(
            "template '{}' headline variant '{}' is not defined, a fallback will be used",
            config.template, config.headline_variant
        ));
    }

    issues
}
