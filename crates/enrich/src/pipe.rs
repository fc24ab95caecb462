use std::fmt;

use takeoff_core::{Columns, MaterialTables, Profile, Row};

use crate::material::MaterialResolver;
use crate::mpl::mpl_code;
use crate::size::{parse_size, size_from_civil3d, size_range};

/// Pipes at or below this nominal size (inches) are small bore.
pub const SMALL_BORE_MAX_INCHES: f64 = 2.0;

/// A value the decision tree needs but could not read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Material,
    Size,
    Elevation,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingField::Material => write!(f, "Material"),
            MissingField::Size => write!(f, "Size"),
            MissingField::Elevation => write!(f, "COG_Z"),
        }
    }
}

/// Result of running a row through the pipe decision tree. `Display` renders
/// the account description.
#[derive(Debug, Clone, PartialEq)]
pub enum PipeClass {
    /// Size or elevation is unreadable. Lists every missing field, material
    /// included, in the order Material, Size, COG_Z.
    Missing(Vec<MissingField>),
    Pipe {
        above_ground: bool,
        size: f64,
        material: Option<String>,
    },
}

impl PipeClass {
    pub fn is_small_bore(&self) -> bool {
        matches!(self, PipeClass::Pipe { size, .. } if *size <= SMALL_BORE_MAX_INCHES)
    }
}

impl fmt::Display for PipeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (above_ground, size, material) = match self {
            PipeClass::Missing(fields) => {
                write!(f, "Missing values: ")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{field}")?;
                }
                return Ok(());
            }
            PipeClass::Pipe {
                above_ground,
                size,
                material,
            } => (*above_ground, *size, material.as_deref()),
        };

        if size <= SMALL_BORE_MAX_INCHES {
            return match (above_ground, material) {
                (true, None) => write!(f, "Above Ground Small Bore Pipe (All-In) (0-2\")"),
                (true, Some(m)) => write!(f, "Above Ground Small Bore Pipe (All-In) ({m})"),
                (false, None) => write!(f, "Underground Small Bore Pipe"),
                (false, Some(m)) => write!(f, "Underground Small Bore Pipe - {m}"),
            };
        }

        let level = if above_ground { "Above Ground" } else { "Underground" };
        match (material, size_range(size)) {
            (Some(m), Some(range)) => {
                write!(f, "{level} Large Bore Pipe ({m}) ({range} Diameter)")
            }
            _ => write!(f, "{level} Large Bore Pipe"),
        }
    }
}

/// Classifies pipe rows from elevation, nominal size and material.
pub struct PipeClassifier {
    columns: Columns,
    ground_level_threshold: f64,
    civil3d_item_type: String,
    civil3d_mpl_codes: Vec<String>,
    materials: MaterialResolver,
}

impl PipeClassifier {
    pub fn new(profile: &Profile, materials: &MaterialTables) -> Self {
        Self {
            columns: profile.columns.clone(),
            ground_level_threshold: profile.ground_level_threshold,
            civil3d_item_type: profile.civil3d_item_type.clone(),
            civil3d_mpl_codes: profile.civil3d_mpl_codes.clone(),
            materials: MaterialResolver::new(materials),
        }
    }

    pub fn materials(&self) -> &MaterialResolver {
        &self.materials
    }

    /// The account description for `row`.
    pub fn classify(&self, row: &Row) -> String {
        self.evaluate(row).to_string()
    }

    pub fn evaluate(&self, row: &Row) -> PipeClass {
        let c = &self.columns;

        // Civil3D pressure pipes carry no usable elevation, size or plant
        // material; size and material come from the Civil3D text and the
        // elevation is pinned below any ground level.
        let (elevation, size_text, plant_material) = if self.reads_civil3d(row) {
            let info = row.get(&c.civil3d_info);
            (
                Some(f64::NEG_INFINITY),
                size_from_civil3d(info),
                self.materials.from_civil3d(info),
            )
        } else {
            (
                row.get(&c.elevation).and_then(parse_elevation),
                row.get(&c.size).unwrap_or_default().to_string(),
                row.get(&c.plant_material).unwrap_or_default().to_string(),
            )
        };

        let material_key = if plant_material.trim().is_empty() {
            self.materials.resolve_key(
                row.get(&c.material_code),
                row.get(&c.item_material),
                row.get(&c.material_item_type),
            )
        } else {
            plant_material
        };
        let material = self.materials.name(&material_key).map(str::to_string);
        let size = parse_size(&size_text);

        let mut missing = Vec::new();
        if material.is_none() {
            missing.push(MissingField::Material);
        }
        if size.is_none() {
            missing.push(MissingField::Size);
        }
        if elevation.is_none() {
            missing.push(MissingField::Elevation);
        }

        match (size, elevation) {
            (Some(size), Some(elevation)) => PipeClass::Pipe {
                above_ground: elevation > self.ground_level_threshold,
                size,
                material,
            },
            _ => PipeClass::Missing(missing),
        }
    }

    fn reads_civil3d(&self, row: &Row) -> bool {
        let c = &self.columns;
        if !self.civil3d_item_type.is_empty()
            && row.get(&c.item_type) == Some(self.civil3d_item_type.as_str())
        {
            return true;
        }
        let code = mpl_code(row.get(&c.source_file));
        self.civil3d_mpl_codes.iter().any(|m| *m == code)
    }
}

fn parse_elevation(raw: &str) -> Option<f64> {
    raw.trim().parse().ok()
}
