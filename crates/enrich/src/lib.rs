pub mod csv;
pub mod eligibility;
pub mod enricher;
pub mod keyword;
pub mod material;
pub mod mpl;
pub mod pipe;
pub mod size;
pub mod util;

pub use self::csv::{CsvError, Encoding, RunSummary, Table};
pub use eligibility::{Eligibility, SkipReason};
pub use enricher::{Classifier, Enricher, RowOutcome};
pub use keyword::KeywordMatcher;
pub use material::MaterialResolver;
pub use mpl::{mpl_code, MplResolver};
pub use pipe::{MissingField, PipeClass, PipeClassifier};
pub use util::normalize;

pub mod enrich {
    use std::path::Path;

    use takeoff_core::{Profile, Tables};

    use crate::*;

    /// An enricher for `profile` over the built-in reference tables.
    pub fn create_enricher(profile: &Profile) -> Enricher {
        Enricher::new(profile, &Tables::default())
    }

    /// Enriches `input` into `output` (or `<stem>_enriched.<ext>` beside it)
    /// and returns where the file was written.
    pub fn enrich_csv(
        input: &Path,
        output: Option<&Path>,
        enricher: &Enricher,
        workers: usize,
    ) -> Result<(std::path::PathBuf, RunSummary), CsvError> {
        let output = crate::csv::output_path(input, output);
        let summary = crate::csv::enrich_file(input, &output, enricher, workers)?;
        Ok((output, summary))
    }
}
