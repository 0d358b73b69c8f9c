//! The per-entry cleaning pipeline.
//!
//! Applied to every parsed record, in order: drop the record entirely when
//! its key is not in the Reference Set; strip the field blocklist;
//! abbreviate the journal name (and, for proceedings entries, the
//! booktitle); report missing required fields to the console without
//! dropping anything.

use std::path::{Path, PathBuf};

use crate::abbrev::{abbreviate, AbbrevTable};
use crate::bib::Record;
use crate::refset::RefSet;

/// Identifier/link/annotation-style metadata removed from every surviving
/// entry. Absence of a listed field is not an error.
pub const UNWANTED_FIELDS: &[&str] = &[
    "doi",
    "url",
    "abstract",
    "file",
    "gobbledegook",
    "isbn",
    "link",
    "keyword",
    "mendeley-tags",
    "annote",
    "pmid",
    "chapter",
    "institution",
    "issn",
    "eprint",
];

/// Fields a periodical article must carry.
pub const REQUIRED_ARTICLE: &[&str] = &[
    "author", "title", "journal", "volume", "number", "pages", "month", "year",
];

/// Fields a conference-proceedings entry must carry.
pub const REQUIRED_INPROCEEDINGS: &[&str] = &["author", "title", "booktitle", "pages", "year"];

/// Fields a book must carry. The address is the city and country.
pub const REQUIRED_BOOK: &[&str] = &["author", "title", "publisher", "address", "year"];

/// Cleans a single record.
///
/// Returns `None` when the record's key is not in the Reference Set; the
/// record is then discarded silently, by design. Otherwise returns the
/// record with blocklisted fields removed and journal/booktitle
/// abbreviated. Required-field violations are printed to stdout and never
/// affect the result.
pub fn clean_record(
    mut record: Record,
    refs: &RefSet,
    journal_table: &AbbrevTable,
    conference_table: &AbbrevTable,
) -> Option<Record> {
    if !refs.contains(&record.key) {
        return None;
    }

    for field in UNWANTED_FIELDS {
        record.fields.remove(*field);
    }

    if let Some(value) = record.fields.get("journal") {
        let abbreviated = abbreviate(value, journal_table);
        record.fields.insert("journal".to_string(), abbreviated);
    }

    if record.entry_type == "inproceedings" {
        if let Some(value) = record.fields.get("booktitle") {
            let abbreviated = abbreviate(value, conference_table);
            record.fields.insert("booktitle".to_string(), abbreviated);
        }
    }

    report_missing_fields(&record);

    Some(record)
}

/// Cleans a whole bibliography, dropping records whose keys are not in the
/// Reference Set and keeping the input order of the survivors.
pub fn clean_bibliography(
    records: Vec<Record>,
    refs: &RefSet,
    journal_table: &AbbrevTable,
    conference_table: &AbbrevTable,
) -> Vec<Record> {
    records
        .into_iter()
        .filter_map(|r| clean_record(r, refs, journal_table, conference_table))
        .collect()
}

/// Prints a diagnostic for any recognized entry type missing required
/// fields. Only true absence counts; a field present with an empty value
/// is not a violation.
fn report_missing_fields(record: &Record) {
    let (label, required) = match record.entry_type.as_str() {
        "article" => ("BROKEN PERIODICAL", REQUIRED_ARTICLE),
        "inproceedings" => ("BROKEN CONF", REQUIRED_INPROCEEDINGS),
        "book" => ("BROKEN BOOK", REQUIRED_BOOK),
        _ => return,
    };

    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|field| !record.fields.contains_key(*field))
        .collect();

    if !missing.is_empty() {
        println!("{}", label);
        println!("{:?}", record);
        println!("missing: {:?}", missing);
    }
}

/// Derives the cleaned-output path from the input path by inserting a
/// `_clean` suffix before the extension, in the same directory.
pub fn derive_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();

    let name = match input.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}_clean.{}", stem, ext),
        None => format!("{}_clean", stem),
    };

    input.with_file_name(name)
}
