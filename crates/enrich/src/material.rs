use std::collections::HashMap;

use takeoff_core::MaterialTables;

use crate::util::fold_key;

/// Resolves material keys ("SS", "CS", ...) from the several places a row
/// may carry material information, and maps keys to display names.
pub struct MaterialResolver {
    names: Vec<(String, String)>,
    codes: Vec<(String, Vec<String>)>,
    item_materials: HashMap<String, String>,
    scan_keys: Vec<(String, String)>,
}

impl MaterialResolver {
    pub fn new(tables: &MaterialTables) -> Self {
        Self {
            names: tables.names.clone(),
            codes: tables
                .codes
                .iter()
                .map(|(key, codes)| (key.clone(), codes.iter().map(|c| fold_key(c)).collect()))
                .collect(),
            item_materials: tables
                .item_materials
                .iter()
                .map(|(raw, key)| (fold_key(raw), key.clone()))
                .collect(),
            scan_keys: tables
                .scan_keys
                .iter()
                .filter(|k| !k.trim().is_empty())
                .map(|k| (k.clone(), fold_key(k)))
                .collect(),
        }
    }

    /// Material key for a row, trying each source in turn and stopping at the
    /// first hit:
    ///
    /// 1. `material_code` equal to one of a key's codes,
    /// 2. `item_material` found in the item-material table,
    /// 3. a scan key appearing inside `item_type`.
    ///
    /// All comparisons ignore case and surrounding whitespace. Returns an
    /// empty string when no source resolves.
    pub fn resolve_key(
        &self,
        material_code: Option<&str>,
        item_material: Option<&str>,
        item_type: Option<&str>,
    ) -> String {
        if let Some(code) = non_blank(material_code) {
            let needle = fold_key(code);
            if let Some((key, _)) = self
                .codes
                .iter()
                .find(|(_, codes)| codes.iter().any(|c| *c == needle))
            {
                return key.clone();
            }
        }

        if let Some(raw) = non_blank(item_material) {
            if let Some(key) = self.item_materials.get(&fold_key(raw)) {
                return key.clone();
            }
        }

        if let Some(text) = non_blank(item_type) {
            let haystack = text.to_uppercase();
            if let Some((key, _)) = self
                .scan_keys
                .iter()
                .find(|(_, folded)| haystack.contains(folded.as_str()))
            {
                return key.clone();
            }
        }

        String::new()
    }

    /// First material key (in name-table order) whose text occurs anywhere in
    /// the Civil3D description, ignoring case.
    pub fn from_civil3d(&self, info: Option<&str>) -> String {
        let Some(text) = non_blank(info) else {
            return String::new();
        };
        let haystack = text.to_uppercase();
        self.names
            .iter()
            .map(|(key, _)| key)
            .find(|key| {
                let key = key.trim().to_uppercase();
                !key.is_empty() && haystack.contains(&key)
            })
            .cloned()
            .unwrap_or_default()
    }

    /// Display name for a key. Unknown keys and blank names resolve to `None`.
    pub fn name(&self, key: &str) -> Option<&str> {
        let key = key.trim();
        self.names
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, name)| name.as_str())
            .filter(|name| !name.trim().is_empty())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
