use std::collections::BTreeMap;

use latina_protocol::{Category, GrammaticalTag, Overrides, ParadigmTable};
use tracing::debug;

use crate::error::OverrideError;

/// Returns a copy of `table` with every override written over it. Tags the
/// rules did not produce are added.
pub fn apply_overrides(table: &ParadigmTable, overrides: &Overrides) -> ParadigmTable {
    let mut merged = table.clone();
    for (tag, form) in overrides.iter() {
        if merged.contains(tag) {
            debug!(%tag, %form, "override replaces generated form");
        }
        merged.insert(*tag, form.as_str());
    }
    merged
}

/// Parses the stored irregular-forms JSON of an entry of `category`.
///
/// Blank payloads mean "no overrides". Anything else must be an object of
/// strings whose keys are tags the category can carry.
pub fn parse_overrides(json: &str, category: Category) -> Result<Overrides, OverrideError> {
    if json.trim().is_empty() {
        return Ok(Overrides::new());
    }

    let raw: BTreeMap<String, String> = serde_json::from_str(json)?;
    let mut overrides = Overrides::new();
    for (key, form) in raw {
        let tag = key
            .parse::<GrammaticalTag>()
            .ok()
            .filter(|tag| tag.belongs_to(category))
            .ok_or_else(|| OverrideError::UnknownTag { tag: key.clone(), category })?;
        let form = form.trim();
        if form.is_empty() {
            return Err(OverrideError::EmptyForm { tag: key });
        }
        overrides.insert(tag, form);
    }
    Ok(overrides)
}
