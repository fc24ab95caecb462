use std::collections::HashMap;

use takeoff_core::{Category, OutputColumns, PipelineKind, Profile, Row, Tables};
use tracing::debug;

use crate::eligibility::{Eligibility, SkipReason};
use crate::keyword::KeywordMatcher;
use crate::mpl::MplResolver;
use crate::pipe::PipeClassifier;

/// The classifier a profile runs.
pub enum Classifier {
    Keyword(KeywordMatcher),
    Pipe {
        classifier: PipeClassifier,
        /// Account description to account code.
        accounts: HashMap<String, String>,
        uom: String,
    },
}

/// What happened to one input row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    /// Left out of the output.
    Skipped(SkipReason),
    /// Already carried an account code; copied through unchanged.
    Preserved(Row),
    Enriched(Row),
}

impl RowOutcome {
    /// The row to write, if any.
    pub fn into_row(self) -> Option<Row> {
        match self {
            RowOutcome::Skipped(_) => None,
            RowOutcome::Preserved(row) | RowOutcome::Enriched(row) => Some(row),
        }
    }
}

/// Per-row orchestration for one profile. Built once, then shared read-only
/// by every row (and every worker thread).
pub struct Enricher {
    name: String,
    outputs: OutputColumns,
    item_type_column: String,
    source_file_column: String,
    preserve_existing: bool,
    eligibility: Eligibility,
    mpl: MplResolver,
    classifier: Classifier,
}

impl Enricher {
    pub fn new(profile: &Profile, tables: &Tables) -> Self {
        let classifier = match profile.kind {
            PipelineKind::Keyword => Classifier::Keyword(KeywordMatcher::new(&profile.keyword_rules)),
            PipelineKind::Pipe => Classifier::Pipe {
                classifier: PipeClassifier::new(profile, &tables.materials),
                accounts: tables.piping.clone(),
                uom: profile.default_uom.clone(),
            },
        };
        Self {
            name: profile.name.clone(),
            outputs: profile.outputs.clone(),
            item_type_column: profile.columns.item_type.clone(),
            source_file_column: profile.columns.source_file.clone(),
            preserve_existing: profile.preserve_existing,
            eligibility: Eligibility::new(profile),
            mpl: MplResolver::new(tables.mpl.clone()),
            classifier,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn outputs(&self) -> &OutputColumns {
        &self.outputs
    }

    pub fn eligibility(&self) -> &Eligibility {
        &self.eligibility
    }

    /// Account description, code and unit of measure for `row`.
    pub fn classify(&self, row: &Row) -> Category {
        match &self.classifier {
            Classifier::Keyword(matcher) => matcher.classify(row.get(&self.item_type_column)),
            Classifier::Pipe {
                classifier,
                accounts,
                uom,
            } => {
                let description = classifier.classify(row);
                let code = accounts.get(&description).cloned().unwrap_or_default();
                Category {
                    description,
                    code,
                    unit: uom.clone(),
                }
            }
        }
    }

    /// A copy of `row` with the five enrichment columns set. Existing
    /// enrichment columns are overwritten in place; every other column is
    /// left as it was.
    pub fn enrich(&self, row: &Row) -> Row {
        let (mpl, mpl_description) = self.mpl.resolve(row.get(&self.source_file_column));
        let category = self.classify(row);

        let mut enriched = row.clone();
        enriched.set(&self.outputs.mpl, mpl);
        enriched.set(&self.outputs.mpl_description, mpl_description);
        enriched.set(&self.outputs.account_code, category.code);
        enriched.set(&self.outputs.account_description, category.description);
        enriched.set(&self.outputs.uom, category.unit);
        enriched
    }

    /// Filters, then preserves or enriches one row. `fieldnames` is the input
    /// header.
    pub fn process<S: AsRef<str>>(&self, row: &Row, fieldnames: &[S]) -> RowOutcome {
        if let Some(reason) = self.eligibility.skip_reason(row, fieldnames) {
            debug!(profile = %self.name, %reason, "skipping row");
            return RowOutcome::Skipped(reason);
        }
        if self.preserve_existing && row.get_non_blank(&self.outputs.account_code).is_some() {
            debug!(profile = %self.name, "row already has an account code");
            return RowOutcome::Preserved(row.clone());
        }
        RowOutcome::Enriched(self.enrich(row))
    }

    /// Processes `rows` on up to `workers` threads. Each thread takes one
    /// contiguous chunk; outcomes come back in input order.
    pub fn process_all(&self, rows: &[Row], fieldnames: &[String], workers: usize) -> Vec<RowOutcome> {
        let workers = workers.clamp(1, rows.len().max(1));
        if workers == 1 {
            return rows.iter().map(|r| self.process(r, fieldnames)).collect();
        }

        let chunk_size = rows.len().div_ceil(workers);
        std::thread::scope(|s| {
            let handles: Vec<_> = rows
                .chunks(chunk_size)
                .map(|chunk| {
                    s.spawn(move || {
                        chunk
                            .iter()
                            .map(|r| self.process(r, fieldnames))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use takeoff_core::KeywordRule;

    fn make_row(pairs: &[(&str, &str)]) -> Row {
        pairs.iter().copied().collect()
    }

    fn headers(row: &Row) -> Vec<String> {
        row.iter().map(|(k, _)| k.to_string()).collect()
    }

    fn pipes() -> Enricher {
        Enricher::new(&Profile::pipes(), &Tables::default())
    }

    fn columns() -> Enricher {
        Enricher::new(&Profile::columns(), &Tables::default())
    }

    #[test]
    fn enricher_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Enricher>();
    }

    // ── pipe path ─────────────────────────────────────────────────────────────

    #[test]
    fn pipe_row_end_to_end() {
        let row = make_row(&[
            ("EntityHandle", "2F1"),
            ("ItemSourceFile", "PRJ-01-U71-0001.dwg"),
            ("COG_Z", "10"),
            ("SIZE", "4\""),
            ("MaterialCode", "A312"),
        ]);
        let out = pipes().enrich(&row);
        assert_eq!(out.get("MPL"), Some("U71"));
        assert_eq!(out.get("MPL_DESCRIPTION"), Some("REACTOR BUILDING STRUCTURE"));
        assert_eq!(
            out.get("ACCOUNT_CODE_DESCRIPTION"),
            Some("Above Ground Large Bore Pipe (SS) (2.5\"-6\" Diameter)")
        );
        assert_eq!(out.get("ACCOUNT_CODE"), Some("72.46.04.04.005"));
        assert_eq!(out.get("UOM"), Some("LM"));
        assert_eq!(out.get("EntityHandle"), Some("2F1"));
    }

    #[test]
    fn missing_values_sentinel_has_no_code() {
        let row = make_row(&[("EntityHandle", "2F1"), ("COG_Z", "10")]);
        let out = pipes().enrich(&row);
        assert_eq!(
            out.get("ACCOUNT_CODE_DESCRIPTION"),
            Some("Missing values: Material, Size")
        );
        assert_eq!(out.get("ACCOUNT_CODE"), Some(""));
        assert_eq!(out.get("MPL"), Some(""));
        assert_eq!(out.get("UOM"), Some("LM"));
    }

    #[test]
    fn pre_enriched_pipe_rows_pass_through() {
        let row = make_row(&[
            ("EntityHandle", "2F1"),
            ("COG_Z", "10"),
            ("ACCOUNT_CODE", "99.99"),
        ]);
        assert_eq!(
            pipes().process(&row, &headers(&row)),
            RowOutcome::Preserved(row.clone())
        );
    }

    // ── keyword path ──────────────────────────────────────────────────────────

    #[test]
    fn keyword_row_end_to_end() {
        let row = make_row(&[
            ("ElementIDValue", "1001"),
            ("ItemType", "Structural Framing: W12x26"),
            ("ItemSourceFile", "PRJ-01-U72-STR.rvt"),
        ]);
        let out = columns().enrich(&row);
        assert_eq!(out.get("ACCOUNT_CODE"), Some("62.03.02"));
        assert_eq!(
            out.get("ACCOUNT_CODE_DESCRIPTION"),
            Some("Structural Steel Industrial Structures")
        );
        assert_eq!(out.get("UOM"), Some("Ton"));
        assert_eq!(out.get("MPL"), Some("U72"));
    }

    #[test]
    fn keyword_row_without_match_gets_blanks() {
        let row = make_row(&[("ElementIDValue", "1001"), ("ItemType", "Roof Drain")]);
        let out = columns().enrich(&row);
        assert_eq!(out.get("ACCOUNT_CODE"), Some(""));
        assert_eq!(out.get("ACCOUNT_CODE_DESCRIPTION"), Some(""));
        assert_eq!(out.get("UOM"), Some(""));
    }

    #[test]
    fn keyword_profile_reenriches_existing_columns_in_place() {
        let row = make_row(&[
            ("ElementIDValue", "1001"),
            ("ItemType", "Anchor Bolt"),
            ("ACCOUNT_CODE", "stale"),
        ]);
        let outcome = columns().process(&row, &headers(&row));
        let RowOutcome::Enriched(out) = outcome else {
            panic!("expected enrichment, got {outcome:?}");
        };
        assert_eq!(out.get("ACCOUNT_CODE"), Some("61.30.02"));
        let keys: Vec<_> = out.iter().map(|(k, _)| k).collect();
        assert_eq!(keys[..3], ["ElementIDValue", "ItemType", "ACCOUNT_CODE"]);
        assert_eq!(out.len(), 7);
    }

    #[test]
    fn enrich_twice_is_stable() {
        let row = make_row(&[("ElementIDValue", "1001"), ("ItemType", "Railing")]);
        let e = columns();
        let once = e.enrich(&row);
        assert_eq!(e.enrich(&once), once);
    }

    #[test]
    fn skipped_rows_report_reason() {
        let row = make_row(&[("ElementIDValue", "1001"), ("ItemType", "Levels : Level 1")]);
        assert!(matches!(
            columns().process(&row, &headers(&row)),
            RowOutcome::Skipped(SkipReason::ExcludedItemType(_))
        ));
    }

    #[test]
    fn custom_rules_replace_the_default_table() {
        let mut profile = Profile::columns();
        profile.keyword_rules = vec![KeywordRule::new("Widgets", "1.2.3", "EA", &["widget"])];
        let e = Enricher::new(&profile, &Tables::default());
        let row = make_row(&[("EntityHandle", "A"), ("ItemType", "Big Widget")]);
        assert_eq!(e.classify(&row).code, "1.2.3");
    }

    // ── batches ───────────────────────────────────────────────────────────────

    #[test]
    fn process_all_keeps_input_order() {
        let e = columns();
        let rows: Vec<Row> = (0..50)
            .map(|i| {
                let id = i.to_string();
                let item = if i % 3 == 0 { "Grids: Grid" } else { "Railing" };
                make_row(&[("ElementIDValue", id.as_str()), ("ItemType", item)])
            })
            .collect();
        let header = headers(&rows[0]);

        let serial = e.process_all(&rows, &header, 1);
        let parallel = e.process_all(&rows, &header, 4);
        assert_eq!(serial, parallel);
        assert_eq!(parallel.len(), 50);
        assert!(matches!(parallel[0], RowOutcome::Skipped(_)));
        let RowOutcome::Enriched(row) = &parallel[1] else {
            panic!("row 1 should be enriched");
        };
        assert_eq!(row.get("ElementIDValue"), Some("1"));
    }

    #[test]
    fn process_all_handles_empty_input() {
        assert!(pipes().process_all(&[], &[], 8).is_empty());
    }
}
