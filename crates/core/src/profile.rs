use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::category::{default_keyword_rules, KeywordRule};
use crate::tables::DEFAULT_SKIP_LIST;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Unknown profile: '{0}'")]
    UnknownProfile(String),
}

/// Which classifier produces the account description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineKind {
    /// Free-text item type matched against keyword rules.
    Keyword,
    /// Elevation, size and material run through the pipe decision tree.
    Pipe,
}

impl std::str::FromStr for PipelineKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "keyword" | "columns" => Ok(PipelineKind::Keyword),
            "pipe" | "pipes" => Ok(PipelineKind::Pipe),
            other => Err(ConfigError::UnknownProfile(other.to_string())),
        }
    }
}

impl std::fmt::Display for PipelineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineKind::Keyword => write!(f, "keyword"),
            PipelineKind::Pipe => write!(f, "pipe"),
        }
    }
}

/// How a row proves it refers to a real model element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "convention", rename_all = "snake_case")]
pub enum IdentifierRule {
    /// The column must exist and hold a non-blank value.
    Single { column: String },
    /// At least one column must exist, and exactly one of the two values
    /// may be non-blank.
    Exclusive { primary: String, secondary: String },
}

/// Input column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Columns {
    pub item_type: String,
    pub source_file: String,
    pub elevation: String,
    pub size: String,
    pub plant_material: String,
    pub material_code: String,
    pub item_material: String,
    /// Item type text scanned for material keys. Usually the same column as
    /// `item_type`.
    pub material_item_type: String,
    pub civil3d_info: String,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            item_type: "ItemType".to_string(),
            source_file: "ItemSourceFile".to_string(),
            elevation: "COG_Z".to_string(),
            size: "SIZE".to_string(),
            plant_material: "PLANT_MATERIAL".to_string(),
            material_code: "MaterialCode".to_string(),
            item_material: "ItemMaterial".to_string(),
            material_item_type: "ItemType".to_string(),
            civil3d_info: "Civil3DInfo".to_string(),
        }
    }
}

/// Names of the columns the enricher writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputColumns {
    pub mpl: String,
    pub mpl_description: String,
    pub account_code: String,
    pub account_description: String,
    pub uom: String,
}

impl OutputColumns {
    /// In the order they are appended to a header.
    pub fn names(&self) -> [&str; 5] {
        [
            &self.mpl,
            &self.mpl_description,
            &self.account_code,
            &self.account_description,
            &self.uom,
        ]
    }
}

impl Default for OutputColumns {
    fn default() -> Self {
        Self {
            mpl: "MPL".to_string(),
            mpl_description: "MPL_DESCRIPTION".to_string(),
            account_code: "ACCOUNT_CODE".to_string(),
            account_description: "ACCOUNT_CODE_DESCRIPTION".to_string(),
            uom: "UOM".to_string(),
        }
    }
}

/// One configured pipeline: which classifier runs, which rows take part and
/// which columns are read and written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub kind: PipelineKind,
    pub identifiers: IdentifierRule,
    pub columns: Columns,
    pub outputs: OutputColumns,
    pub skip_list: Vec<String>,
    pub keyword_rules: Vec<KeywordRule>,
    /// Elevations strictly above this are above ground.
    pub ground_level_threshold: f64,
    /// Unit of measure written by the pipe pipeline.
    pub default_uom: String,
    /// Pass rows that already carry an account code through untouched.
    pub preserve_existing: bool,
    /// Item type that switches size and material to the Civil3D text.
    pub civil3d_item_type: String,
    /// MPL codes that switch size and material to the Civil3D text.
    pub civil3d_mpl_codes: Vec<String>,
}

impl Profile {
    /// Building elements classified by keyword.
    pub fn columns() -> Self {
        Profile {
            name: "columns".to_string(),
            kind: PipelineKind::Keyword,
            identifiers: IdentifierRule::Exclusive {
                primary: "EntityHandle".to_string(),
                secondary: "ElementIDValue".to_string(),
            },
            columns: Columns::default(),
            outputs: OutputColumns::default(),
            skip_list: DEFAULT_SKIP_LIST.iter().map(|s| s.to_string()).collect(),
            keyword_rules: default_keyword_rules(),
            ground_level_threshold: 0.0,
            default_uom: String::new(),
            preserve_existing: false,
            civil3d_item_type: String::new(),
            civil3d_mpl_codes: Vec::new(),
        }
    }

    /// Pipe runs classified by the elevation/size/material decision tree.
    pub fn pipes() -> Self {
        Profile {
            name: "pipes".to_string(),
            kind: PipelineKind::Pipe,
            identifiers: IdentifierRule::Single {
                column: "EntityHandle".to_string(),
            },
            columns: Columns::default(),
            outputs: OutputColumns::default(),
            skip_list: Vec::new(),
            keyword_rules: Vec::new(),
            ground_level_threshold: 0.0,
            default_uom: "LM".to_string(),
            preserve_existing: true,
            civil3d_item_type: "Pressure Pipe".to_string(),
            civil3d_mpl_codes: vec!["CUW".to_string()],
        }
    }

    pub fn builtin(kind: PipelineKind) -> Self {
        match kind {
            PipelineKind::Keyword => Self::columns(),
            PipelineKind::Pipe => Self::pipes(),
        }
    }

    /// Builds a profile from TOML overrides. The built-in profile for the
    /// file's `kind` (or `fallback` when the file names none) supplies every
    /// field the file leaves out.
    pub fn from_toml(toml_content: &str, fallback: PipelineKind) -> Result<Self, ConfigError> {
        let overrides: ProfileOverrides = toml::from_str(toml_content)?;
        let base = Self::builtin(overrides.kind.unwrap_or(fallback));
        Ok(overrides.apply(base))
    }

    pub fn load(path: &Path, fallback: PipelineKind) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, fallback)
    }
}

/// The shape of a profile TOML file. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileOverrides {
    pub name: Option<String>,
    pub kind: Option<PipelineKind>,
    pub identifiers: Option<IdentifierRule>,
    pub columns: Option<Columns>,
    pub outputs: Option<OutputColumns>,
    pub skip_list: Option<Vec<String>>,
    pub keyword_rules: Option<Vec<KeywordRule>>,
    pub ground_level_threshold: Option<f64>,
    pub default_uom: Option<String>,
    pub preserve_existing: Option<bool>,
    pub civil3d_item_type: Option<String>,
    pub civil3d_mpl_codes: Option<Vec<String>>,
}

impl ProfileOverrides {
    pub fn apply(self, mut base: Profile) -> Profile {
        if let Some(v) = self.name {
            base.name = v;
        }
        if let Some(v) = self.identifiers {
            base.identifiers = v;
        }
        if let Some(v) = self.columns {
            base.columns = v;
        }
        if let Some(v) = self.outputs {
            base.outputs = v;
        }
        if let Some(v) = self.skip_list {
            base.skip_list = v;
        }
        if let Some(v) = self.keyword_rules {
            base.keyword_rules = v;
        }
        if let Some(v) = self.ground_level_threshold {
            base.ground_level_threshold = v;
        }
        if let Some(v) = self.default_uom {
            base.default_uom = v;
        }
        if let Some(v) = self.preserve_existing {
            base.preserve_existing = v;
        }
        if let Some(v) = self.civil3d_item_type {
            base.civil3d_item_type = v;
        }
        if let Some(v) = self.civil3d_mpl_codes {
            base.civil3d_mpl_codes = v;
        }
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn kind_from_str_accepts_profile_names() {
        assert_eq!(PipelineKind::from_str("Pipes").unwrap(), PipelineKind::Pipe);
        assert_eq!(PipelineKind::from_str("columns").unwrap(), PipelineKind::Keyword);
        assert!(matches!(
            PipelineKind::from_str("ducts"),
            Err(ConfigError::UnknownProfile(_))
        ));
    }

    #[test]
    fn empty_toml_yields_fallback_builtin() {
        let p = Profile::from_toml("", PipelineKind::Pipe).unwrap();
        assert_eq!(p, Profile::pipes());
    }

    #[test]
    fn kind_in_file_selects_base() {
        let p = Profile::from_toml("kind = \"keyword\"", PipelineKind::Pipe).unwrap();
        assert_eq!(p.kind, PipelineKind::Keyword);
        assert!(!p.keyword_rules.is_empty());
    }

    #[test]
    fn partial_overrides_keep_other_fields() {
        let toml = r#"
ground_level_threshold = 100.5
default_uom = "M"

[columns]
elevation = "Z"

[identifiers]
convention = "single"
column = "Handle"

[[keyword_rules]]
description = "Anchor Bolts"
code = "61.30.02"
unit = "Ea"
keywords = ["Anchor Bolt"]
"#;
        let p = Profile::from_toml(toml, PipelineKind::Pipe).unwrap();
        assert_eq!(p.ground_level_threshold, 100.5);
        assert_eq!(p.default_uom, "M");
        assert_eq!(p.columns.elevation, "Z");
        assert_eq!(p.columns.size, "SIZE");
        assert_eq!(
            p.identifiers,
            IdentifierRule::Single {
                column: "Handle".to_string()
            }
        );
        assert_eq!(p.keyword_rules.len(), 1);
        assert!(p.preserve_existing);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            Profile::from_toml("threshold = 3", PipelineKind::Pipe),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Profile::load(Path::new("/nonexistent/profile.toml"), PipelineKind::Pipe)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn output_names_in_append_order() {
        assert_eq!(
            OutputColumns::default().names(),
            ["MPL", "MPL_DESCRIPTION", "ACCOUNT_CODE", "ACCOUNT_CODE_DESCRIPTION", "UOM"]
        );
    }
}
