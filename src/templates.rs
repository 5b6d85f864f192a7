use std::path::Path;

use crate::error::ResumeForgeError;
use crate::types::TemplateConfig;

/// Sorted template keys: the stems of every *.toml file in the directory.
pub fn list_templates(dir: &Path) -> Result<Vec<String>, ResumeForgeError> {
    if !dir.is_dir() {
        return Err(ResumeForgeError::Config(format!(
            "templates directory not found at {}",
            dir.display()
        )));
    }

    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().map(|e| e == "toml").unwrap_or(false) {
            if let Some(stem) = path.file_stem() {
                names.push(stem.to_string_lossy().to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}

/// Load one template config by key.
pub fn load_template(dir: &Path, key: &str) -> Result<TemplateConfig, ResumeForgeError> {
    let path = dir.join(format!("{}.toml", key));
    if !path.exists() {
        return Err(ResumeForgeError::Config(format!(
            "template '{}' not found",
            key
        )));
    }
    let raw = std::fs::read_to_string(&path)?;
    toml::from_str(&raw)
        .map_err(|e| ResumeForgeError::Config(format!("template '{}': {}", key, e)))
}

/// Load every template in the directory, sorted by key.
pub fn load_all(dir: &Path) -> Result<Vec<TemplateConfig>, ResumeForgeError> {
    list_templates(dir)?
        .iter()
        .map(|key| load_template(dir, key))
        .collect()
}
