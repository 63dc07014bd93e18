use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::FaqData;

/// Persist the mapping as pretty-printed UTF-8 JSON. Loading the file back
/// yields an equal mapping, section order included.
pub fn save(path: &Path, faq: &FaqData) -> Result<()> {
    let json = serde_json::to_string_pretty(faq)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

pub fn load(path: &Path) -> Result<FaqData> {
    let json =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("Invalid FAQ JSON in {}", path.display()))
}
