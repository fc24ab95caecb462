//! Built-in lookup data. Everything here is read once into owned tables
//! ([`Tables`]) and never consulted directly by the engine.

mod keywords;
mod materials;
mod mpl;
mod piping;

use std::collections::HashMap;

pub use keywords::{DEFAULT_KEYWORD_RULES, DEFAULT_SKIP_LIST};
pub use materials::{ITEM_MATERIAL_KEYS, MATERIAL_CODES, MATERIAL_NAMES, MATERIAL_SCAN_KEYS};
pub use mpl::MPL_DESCRIPTIONS;
pub use piping::PIPING_ACCOUNTS;

/// The four material tables. Vectors keep the scan order that resolution
/// depends on.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialTables {
    pub names: Vec<(String, String)>,
    pub codes: Vec<(String, Vec<String>)>,
    pub item_materials: Vec<(String, String)>,
    pub scan_keys: Vec<String>,
}

impl Default for MaterialTables {
    fn default() -> Self {
        Self {
            names: pairs(MATERIAL_NAMES),
            codes: MATERIAL_CODES
                .iter()
                .map(|(key, codes)| {
                    (key.to_string(), codes.iter().map(|c| c.to_string()).collect())
                })
                .collect(),
            item_materials: pairs(ITEM_MATERIAL_KEYS),
            scan_keys: MATERIAL_SCAN_KEYS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Immutable lookup data shared by every row.
#[derive(Debug, Clone, PartialEq)]
pub struct Tables {
    pub mpl: HashMap<String, String>,
    pub piping: HashMap<String, String>,
    pub materials: MaterialTables,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            mpl: pairs(MPL_DESCRIPTIONS).into_iter().collect(),
            piping: pairs(PIPING_ACCOUNTS).into_iter().collect(),
            materials: MaterialTables::default(),
        }
    }
}

fn pairs(table: &[(&str, &str)]) -> Vec<(String, String)> {
    table
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_scan_key_has_a_name() {
        let t = MaterialTables::default();
        for key in &t.scan_keys {
            assert!(t.names.iter().any(|(k, _)| k == key), "{key} has no name");
        }
    }

    #[test]
    fn item_materials_point_at_known_keys() {
        let t = MaterialTables::default();
        for (_, key) in &t.item_materials {
            assert!(t.names.iter().any(|(k, _)| k == key));
        }
    }

    #[test]
    fn default_tables_load() {
        let t = Tables::default();
        assert_eq!(t.mpl.get("R31").map(String::as_str), Some("Cable and Raceway System"));
        assert_eq!(
            t.piping
                .get("Above Ground Large Bore Pipe (SS) (2.5\"-6\" Diameter)")
                .map(String::as_str),
            Some("72.46.04.04.005")
        );
    }
}
