// Material keys are the short codes written to PLANT_MATERIAL. Longer keys come
// before the keys they contain ("CPVC" before "PVC") because free-text scans
// take the first key found.

/// Material key to the name used inside account descriptions.
pub const MATERIAL_NAMES: &[(&str, &str)] = &[
    ("HDPE", "HDPE"),
    ("CPVC", "CPVC"),
    ("PVC", "PVC"),
    ("Alloy", "Alloy"),
    ("SS", "SS"),
    ("CS", "CS"),
];

/// Material key to the raw material codes (piping spec / ASTM designations)
/// that identify it.
pub const MATERIAL_CODES: &[(&str, &[&str])] = &[
    ("CS", &["A106", "A106-B", "A53", "A53-B", "API 5L", "A333", "CARBON STEEL"]),
    ("SS", &["A312", "A312-TP304L", "A312-TP316L", "304L", "316L", "STAINLESS STEEL"]),
    ("Alloy", &["A335", "A335-P11", "A335-P22", "A335-P91", "CHROME MOLY"]),
    ("PVC", &["D1785", "PVC SCH 40", "PVC SCH 80"]),
    ("CPVC", &["F441", "CPVC SCH 80"]),
    ("HDPE", &["F714", "PE4710", "DR11", "DR17"]),
];

/// ItemMaterial values mapped directly to a material key.
pub const ITEM_MATERIAL_KEYS: &[(&str, &str)] = &[
    ("Carbon Steel", "CS"),
    ("Galvanized Steel", "CS"),
    ("Stainless Steel", "SS"),
    ("Alloy Steel", "Alloy"),
    ("Chrome Moly", "Alloy"),
    ("Polyvinyl Chloride", "PVC"),
    ("PVC", "PVC"),
    ("CPVC", "CPVC"),
    ("Polyethylene", "HDPE"),
    ("HDPE", "HDPE"),
];

/// Keys looked for inside ItemType text, in scan order. Two-letter keys are
/// left out: "SS" and "CS" occur inside ordinary words such as "Pressure".
pub const MATERIAL_SCAN_KEYS: &[&str] = &["HDPE", "CPVC", "PVC", "Alloy"];
