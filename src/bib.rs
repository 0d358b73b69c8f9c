//! Bibliography records and BibTeX I/O.
//!
//! Parsing is delegated to the `biblatex` crate; parsed entries are
//! flattened into plain string field maps so the cleaning pipeline can
//! treat a record as an open-ended mapping from field name to value.
//! Serialization writes standard `@type{key, field = {value}}` BibTeX text
//! with deterministic entry and field ordering.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use biblatex::{Bibliography, Chunk, Entry, Spanned};
use thiserror::Error;

/// Errors that can occur when loading a bibliography.
#[derive(Error, Debug)]
pub enum BibError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid BibTeX: {0}")]
    ParseError(String),
}

/// One bibliography record: a citation key, an entry-type tag, and an
/// open-ended field map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// The citation key (e.g., "smith2020")
    pub key: String,
    /// The entry-type tag, lowercased (e.g., "article", "inproceedings")
    pub entry_type: String,
    /// Field name to field value, both plain strings
    pub fields: BTreeMap<String, String>,
}

/// Loads a bibliography file into records.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the BibTeX fails to
/// parse. A file with zero entries parses successfully into an empty
/// vector; callers decide whether that is fatal.
pub fn load_bibliography(path: &Path) -> Result<Vec<Record>, BibError> {
    let content = fs::read_to_string(path)?;
    parse_bibliography(&content)
}

/// Parses BibTeX text into records.
pub fn parse_bibliography(src: &str) -> Result<Vec<Record>, BibError> {
    let bibliography =
        Bibliography::parse(src).map_err(|e| BibError::ParseError(e.to_string()))?;

    Ok(bibliography.into_iter().map(record_from_entry).collect())
}

fn record_from_entry(entry: Entry) -> Record {
    let fields = entry
        .fields
        .iter()
        .map(|(name, value)| (name.clone(), flatten_chunks(value)))
        .collect();

    Record {
        key: entry.key.clone(),
        entry_type: entry.entry_type.to_string(),
        fields,
    }
}

/// Flattens a parsed field value into a single plain string.
fn flatten_chunks(chunks: &[Spanned<Chunk>]) -> String {
    chunks
        .iter()
        .map(|spanned| match &spanned.v {
            Chunk::Normal(s) => s.as_str(),
            Chunk::Verbatim(s) => s.as_str(),
            Chunk::Math(s) => s.as_str(),
        })
        .collect()
}

/// Serializes records to BibTeX text.
///
/// Entries are ordered by (author, year, entry-type) ascending, with a
/// missing sort field treated as the empty string. Field names within an
/// entry are written in sorted order.
pub fn to_bibtex_string(records: &[Record]) -> String {
    let mut sorted: Vec<&Record> = records.iter().collect();
    sorted.sort_by_key(|r| {
        (
            r.fields.get("author").cloned().unwrap_or_default(),
            r.fields.get("year").cloned().unwrap_or_default(),
            r.entry_type.clone(),
        )
    });

    let rendered: Vec<String> = sorted.iter().map(|r| render_record(r)).collect();
    rendered.join("\n")
}

fn render_record(record: &Record) -> String {
    let mut out = format!("@{}{{{},\n", record.entry_type, record.key);

    let fields: Vec<String> = record
        .fields
        .iter()
        .map(|(name, value)| format!("  {} = {{{}}}", name, value))
        .collect();
    out.push_str(&fields.join(",\n"));

    out.push_str("\n}\n");
    out
}
