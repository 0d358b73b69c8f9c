//! Shared fixtures and helpers for integration tests.

use std::fs;
use std::path::Path;

/// A raw bibliography the way a reference manager exports it: unwanted
/// metadata present, one entry missing a required field, and one entry
/// (`unused2018`) that no document cites.
pub const SAMPLE_BIB: &str = r#"@article{smith2020,
  author = {Smith, Jane},
  title = {A Study of Things},
  journal = {Transactions on Information Theory},
  volume = {12},
  number = {3},
  pages = {1--10},
  month = {jan},
  year = {2020},
  doi = {10.1234/xyz},
  url = {https://example.com/smith2020},
  abstract = {A very long abstract that nobody wants in the output.},
  mendeley-tags = {to-read}
}

@inproceedings{doe2019,
  author = {Doe, John},
  title = {Proceedings Matter},
  booktitle = {International Conference on Learning Systems},
  year = {2019},
  keyword = {learning}
}

@article{unused2018,
  author = {Nobody, Ever},
  title = {Never Cited},
  journal = {Obscure Letters},
  year = {2018}
}
"#;

/// Journal abbreviation table matching SAMPLE_BIB's article entry.
pub const JOURNAL_TABLE_YAML: &str = "\
Transactions: Trans.
Information: Inf.
Theory: Theory.
";

/// Conference abbreviation table matching SAMPLE_BIB's proceedings entry.
pub const CONFERENCE_TABLE_YAML: &str = "\
International: Int.
Conference: Conf.
Learning: Learn.
Systems: Syst.
";

/// A TeX source citing the two used keys, with one cite macro split across
/// physical lines.
pub const SAMPLE_TEX: &str = "\\documentclass{article}
\\begin{document}
Earlier work \\cite{smith2020,
    doe2019} showed this; see also \\cite{smith2020}.
\\end{document}
";

/// Writes `content` to `name` inside `dir`; panics on failure (test setup).
pub fn write_file(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}
