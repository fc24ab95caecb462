pub mod category;
pub mod profile;
pub mod row;
pub mod tables;

pub use category::{default_keyword_rules, Category, KeywordRule};
pub use profile::{
    Columns, ConfigError, IdentifierRule, OutputColumns, PipelineKind, Profile, ProfileOverrides,
};
pub use row::Row;
pub use tables::{MaterialTables, Tables};
