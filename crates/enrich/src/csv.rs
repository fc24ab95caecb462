use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use takeoff_core::{OutputColumns, Row};
use thiserror::Error;
use tracing::{info, warn};

use crate::enricher::{Enricher, RowOutcome};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Error, Debug)]
pub enum CsvError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("Input CSV has no header row")]
    MissingHeader,
}

/// How the input bytes were decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Utf8Bom,
    /// Not valid UTF-8; every byte was read as one Latin-1 character.
    Latin1,
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Encoding::Utf8 => write!(f, "utf-8"),
            Encoding::Utf8Bom => write!(f, "utf-8-sig"),
            Encoding::Latin1 => write!(f, "latin1"),
        }
    }
}

/// A parsed input file.
#[derive(Debug, Clone)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
    pub encoding: Encoding,
}

/// Counts for one enriched file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub rows_read: usize,
    pub skipped: usize,
    pub preserved: usize,
    pub enriched: usize,
}

impl RunSummary {
    pub fn rows_written(&self) -> usize {
        self.preserved + self.enriched
    }
}

pub fn decode(bytes: &[u8]) -> (String, Encoding) {
    if let Some(rest) = bytes.strip_prefix(UTF8_BOM) {
        if let Ok(text) = std::str::from_utf8(rest) {
            return (text.to_string(), Encoding::Utf8Bom);
        }
    }
    match std::str::from_utf8(bytes) {
        Ok(text) => (text.to_string(), Encoding::Utf8),
        Err(_) => (bytes.iter().map(|&b| char::from(b)).collect(), Encoding::Latin1),
    }
}

pub fn read_table<R: Read>(mut data: R) -> Result<Table, CsvError> {
    let mut bytes = Vec::new();
    data.read_to_end(&mut bytes)?;
    let (text, encoding) = decode(&bytes);
    if encoding == Encoding::Latin1 {
        warn!("input is not valid UTF-8, decoding as Latin-1");
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    if headers.is_empty() {
        return Err(CsvError::MissingHeader);
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(Row::from_record(headers.iter().map(String::as_str), record.iter()));
    }

    Ok(Table {
        headers,
        rows,
        encoding,
    })
}

/// The input header followed by any enrichment column it does not already
/// contain.
pub fn output_fieldnames(headers: &[String], outputs: &OutputColumns) -> Vec<String> {
    let mut fieldnames = headers.to_vec();
    for name in outputs.names() {
        if !fieldnames.iter().any(|f| f == name) {
            fieldnames.push(name.to_string());
        }
    }
    fieldnames
}

/// Writes UTF-8 with a byte order mark so spreadsheet tools keep characters
/// such as `Ø`. Fields missing from a row are written empty; fields not in
/// `fieldnames` are dropped.
pub fn write_table<'a, W, I>(mut out: W, fieldnames: &[String], rows: I) -> Result<(), CsvError>
where
    W: Write,
    I: IntoIterator<Item = &'a Row>,
{
    out.write_all(UTF8_BOM)?;
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(fieldnames)?;
    for row in rows {
        writer.write_record(fieldnames.iter().map(|f| row.get(f).unwrap_or_default()))?;
    }
    writer.flush()?;
    Ok(())
}

/// `explicit` when given, otherwise `<stem>_enriched.<ext>` beside `input`.
pub fn output_path(input: &Path, explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match input.extension() {
        Some(ext) => format!("{stem}_enriched.{}", ext.to_string_lossy()),
        None => format!("{stem}_enriched"),
    };
    input.with_file_name(name)
}

/// Reads `input`, enriches it with `enricher` on `workers` threads and writes
/// the result to `output`. The input is fully read before the output is
/// opened, so both may name the same file.
pub fn enrich_file(
    input: &Path,
    output: &Path,
    enricher: &Enricher,
    workers: usize,
) -> Result<RunSummary, CsvError> {
    let table = read_table(File::open(input)?)?;
    info!(
        path = %input.display(),
        encoding = %table.encoding,
        rows = table.rows.len(),
        profile = enricher.name(),
        "read input"
    );

    let outcomes = enricher.process_all(&table.rows, &table.headers, workers);
    let mut summary = RunSummary {
        rows_read: table.rows.len(),
        ..RunSummary::default()
    };
    let mut rows = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        match outcome {
            RowOutcome::Skipped(_) => summary.skipped += 1,
            RowOutcome::Preserved(row) => {
                summary.preserved += 1;
                rows.push(row);
            }
            RowOutcome::Enriched(row) => {
                summary.enriched += 1;
                rows.push(row);
            }
        }
    }

    let fieldnames = output_fieldnames(&table.headers, enricher.outputs());
    write_table(BufWriter::new(File::create(output)?), &fieldnames, &rows)?;
    info!(
        path = %output.display(),
        enriched = summary.enriched,
        preserved = summary.preserved,
        skipped = summary.skipped,
        "wrote output"
    );
    Ok(summary)
}
