//! bib-tools: CLI tools for maintaining a BibTeX bibliography database.
//!
//! This library provides functionality to:
//! - Collect citation keys referenced from TeX document sources
//! - Persist and reload the Reference Set as a flat YAML mapping
//! - Load abbreviation tables and normalize journal/conference names
//! - Filter, strip, and validate bibliography entries against the set

pub mod abbrev;
pub mod bib;
pub mod cleaner;
pub mod collector;
pub mod refset;

pub use abbrev::{abbreviate, load_table, AbbrevTable};
pub use bib::{load_bibliography, parse_bibliography, to_bibtex_string, Record};
pub use cleaner::{clean_bibliography, clean_record, derive_output_path};
pub use collector::{collect_keys, collect_references};
pub use refset::RefSet;
