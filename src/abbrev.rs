//! Abbreviation tables and word-by-word substitution.
//!
//! Journal and conference names are normalized against static word-to-
//! abbreviation mappings loaded from YAML files. The substitution is
//! deliberately lossy: a token that matches only after its final character
//! is removed loses that character, and the filler words "on" and "and" are
//! dropped outright.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

/// A static word-to-abbreviation mapping, read-only for the lifetime of a
/// cleaner run.
pub type AbbrevTable = BTreeMap<String, String>;

/// Errors that can occur when loading an abbreviation table.
#[derive(Error, Debug)]
pub enum AbbrevError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Loads an abbreviation table from a flat YAML word-to-abbreviation file.
///
/// An empty file yields an empty table.
pub fn load_table(path: &Path) -> Result<AbbrevTable, AbbrevError> {
    let content = fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Ok(AbbrevTable::new());
    }

    let table: AbbrevTable = serde_yaml::from_str(&content)?;
    Ok(table)
}

/// Abbreviates a field value word by word against the given table.
///
/// For each whitespace-separated token:
/// - an exact table match is replaced with its abbreviation;
/// - otherwise, the token with its final character removed is looked up, to
///   tolerate a trailing comma or similar punctuation; on a match the
///   stripped character is dropped, not reattached;
/// - otherwise, a bare "on" or "and" is dropped entirely;
/// - otherwise, the token is kept unchanged.
///
/// Surviving tokens are rejoined with single spaces.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use bib_tools::abbreviate;
///
/// let table: BTreeMap<String, String> = [
///     ("Transactions", "Trans."),
///     ("Information", "Inf."),
///     ("Theory", "Theory."),
/// ]
/// .iter()
/// .map(|(k, v)| (k.to_string(), v.to_string()))
/// .collect();
///
/// let out = abbreviate("Transactions on Information Theory", &table);
/// assert_eq!(out, "Trans. Inf. Theory.");
/// ```
pub fn abbreviate(value: &str, table: &AbbrevTable) -> String {
    let mut parts: Vec<&str> = Vec::new();

    for token in value.split_whitespace() {
        if let Some(abbr) = table.get(token) {
            parts.push(abbr);
            continue;
        }

        // Account for a trailing comma or similar punctuation.
        let mut chars = token.chars();
        chars.next_back();
        let trimmed = chars.as_str();

        if let Some(abbr) = table.get(trimmed) {
            parts.push(abbr);
        } else if token == "on" || token == "and" {
            // Dropped from the output entirely.
        } else {
            parts.push(token);
        }
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn table(pairs: &[(&str, &str)]) -> AbbrevTable {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_load_table() {
        // Given: a YAML word-to-abbreviation file
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"Transactions: Trans.\nJournal: J.\n").unwrap();
        file.flush().unwrap();

        // When: we load the table
        let loaded = load_table(file.path()).unwrap();

        // Then: both mappings are available
        assert_eq!(loaded.get("Transactions").unwrap(), "Trans.");
        assert_eq!(loaded.get("Journal").unwrap(), "J.");
    }

    #[test]
    fn test_load_table_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let loaded = load_table(file.path()).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_load_table_missing_file() {
        let result = load_table(Path::new("/nonexistent/ieee_abrv.yml"));
        assert!(matches!(result, Err(AbbrevError::IoError(_))));
    }

    #[test]
    fn test_exact_match_replaced() {
        let t = table(&[("Journal", "J.")]);
        assert_eq!(abbreviate("Journal", &t), "J.");
    }

    #[test]
    fn test_unknown_token_kept() {
        let t = table(&[("Journal", "J.")]);
        assert_eq!(abbreviate("Journal Obscure", &t), "J. Obscure");
    }

    #[test]
    fn test_on_and_dropped() {
        // Given: a value with the filler words "on" and "and"
        let t = table(&[("Circuits", "Circuits"), ("Systems", "Syst.")]);

        // When: we abbreviate
        let out = abbreviate("Circuits and Systems on Silicon", &t);

        // Then: the fillers vanish
        assert_eq!(out, "Circuits Syst. Silicon");
    }

    #[test]
    fn test_trailing_character_stripped_on_match() {
        // Given: a token carrying a trailing comma
        let t = table(&[("Transactions", "Trans.")]);

        // When: we abbreviate
        let out = abbreviate("Transactions, 2020", &t);

        // Then: the match wins and the comma is dropped, not reattached
        assert_eq!(out, "Trans. 2020");
    }

    #[test]
    fn test_transactions_on_information_theory() {
        let t = table(&[
            ("Transactions", "Trans."),
            ("Information", "Inf."),
            ("Theory", "Theory."),
        ]);
        let out = abbreviate("Transactions on Information Theory", &t);
        assert_eq!(out, "Trans. Inf. Theory.");
    }

    #[test]
    fn test_idempotent_on_already_abbreviated_value() {
        // Given: a value whose tokens are all mapped values, none of which
        // are mapping keys
        let t = table(&[
            ("Transactions", "Trans."),
            ("Information", "Inf."),
            ("Theory", "Theory."),
        ]);
        let once = abbreviate("Transactions on Information Theory", &t);

        // When: we abbreviate again
        let twice = abbreviate(&once, &t);

        // Then: nothing changes
        assert_eq!(twice, once);
    }

    #[test]
    fn test_whitespace_collapsed() {
        let t = AbbrevTable::new();
        assert_eq!(abbreviate("Widely   Spaced\tName", &t), "Widely Spaced Name");
    }

    #[test]
    fn test_empty_value() {
        let t = table(&[("Journal", "J.")]);
        assert_eq!(abbreviate("", &t), "");
    }

    #[test]
    fn test_table_lookup_beats_filler_drop() {
        // "on" as a mapping key is replaced, not dropped; the table check
        // runs first.
        let t = table(&[("on", "On")]);
        assert_eq!(abbreviate("on", &t), "On");
    }

    #[test]
    fn test_multibyte_final_character_stripped() {
        let t = table(&[("Café", "Caf.")]);
        assert_eq!(abbreviate("Caféz", &t), "Caf.");
    }
}
