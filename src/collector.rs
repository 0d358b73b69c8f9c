//! Citation key extraction from TeX sources.
//!
//! Scans `\cite{...}` macro invocations and collects the comma-separated
//! citation keys referenced anywhere in a set of source files.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use thiserror::Error;

/// Errors that can occur while collecting citation keys.
#[derive(Error, Debug)]
pub enum CollectError {
    #[error("'{}': {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Extracts all citation keys from the given TeX text.
///
/// Newlines are removed before matching, so a `\cite{...}` invocation may
/// span multiple physical lines. The macro argument is restricted to word
/// characters, commas, and whitespace; keys are comma-separated and trimmed.
///
/// # Returns
///
/// The keys in order of appearance, duplicates included.
///
/// # Examples
///
/// ```
/// use bib_tools::collect_keys;
///
/// let keys = collect_keys(r"As shown in \cite{smith2020, doe2019}.");
/// assert_eq!(keys, vec!["smith2020", "doe2019"]);
/// ```
pub fn collect_keys(text: &str) -> Vec<String> {
    // A cite argument may legally span lines in the source file.
    let flattened = text.replace('\n', "");

    let re = Regex::new(r"\\cite\{([\w,\s]*)\}").unwrap();

    let mut keys = Vec::new();
    for cap in re.captures_iter(&flattened) {
        let argument = cap.get(1).unwrap().as_str();
        for piece in argument.split(',') {
            let key = piece.trim();
            if !key.is_empty() {
                keys.push(key.to_string());
            }
        }
    }

    keys
}

/// Collects the deduplicated set of citation keys referenced in the given
/// source files.
///
/// # Errors
///
/// Returns an error naming the offending path if any file cannot be read;
/// a file with zero matches contributes nothing and is not an error.
pub fn collect_references(paths: &[PathBuf]) -> Result<BTreeSet<String>, CollectError> {
    let mut set = BTreeSet::new();

    for path in paths {
        let text = read_source(path)?;
        set.extend(collect_keys(&text));
    }

    Ok(set)
}

fn read_source(path: &Path) -> Result<String, CollectError> {
    fs::read_to_string(path).map_err(|e| CollectError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
