use std::collections::HashSet;
use std::path::Path;

use crate::error::ResumeForgeError;
use crate::types::BlocksBundle;

/// Load and validate the blocks bundle from a JSON file.
///
/// All-or-nothing: any schema or invariant violation fails the load with
/// the offending field named, and no partial bundle is ever returned.
/// Callers load once and pass the result around; nothing is cached.
pub fn load_bundle(path: &Path) -> Result<BlocksBundle, ResumeForgeError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ResumeForgeError::Data(format!("reading {}: {}", path.display(), e)))?;
    let bundle: BlocksBundle = serde_json::from_str(&raw)
        .map_err(|e| ResumeForgeError::Data(format!("{}: {}", path.display(), e)))?;
    validate_bundle(&bundle)?;
    Ok(bundle)
}

/// Invariants serde cannot express on its own.
pub fn validate_bundle(bundle: &BlocksBundle) -> Result<(), ResumeForgeError> {
    if bundle.personal_info.name.trim().is_empty() {
        return Err(ResumeForgeError::Data(
            "personal_info.name is empty".to_string(),
        ));
    }
    if bundle.personal_info.variants().is_empty() {
        return Err(ResumeForgeError::Data(
            "personal_info defines no headline variants".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for block in &bundle.experience {
        if block.id.trim().is_empty() {
            return Err(ResumeForgeError::Data(
                "experience block with empty id".to_string(),
            ));
        }
        if !seen.insert(block.id.as_str()) {
            return Err(ResumeForgeError::Data(format!(
                "duplicate experience id '{}'",
                block.id
            )));
        }
    }

    Ok(())
}
