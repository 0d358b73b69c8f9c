//! CLI for bib-tools - Collect citation keys and clean BibTeX bibliographies.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use bib_tools::{
    clean_bibliography, collect_references, derive_output_path, load_bibliography, load_table,
    to_bibtex_string, RefSet,
};

/// Reference Set file, written by `collect` and read by `clean`.
const REF_SET_FILE: &str = "data.yml";
/// Journal-word abbreviation table, read by `clean`.
const JOURNAL_TABLE_FILE: &str = "ieee_abrv.yml";
/// Conference-title abbreviation table, read by `clean`.
const CONFERENCE_TABLE_FILE: &str = "conf_title_abbrv.yml";

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

/// Collect citation keys and clean BibTeX bibliographies
#[derive(Parser)]
#[command(name = "bib-tools")]
#[command(version)]
#[command(after_help = "\
Examples:
  bib-tools collect intro.tex methods.tex results.tex
  bib-tools clean library.bib

'collect' writes data.yml in the current directory; 'clean' reads data.yml,
ieee_abrv.yml, and conf_title_abbrv.yml from the current directory.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Collect citation keys referenced from TeX sources into data.yml
    #[command(after_help = "\
Examples:
  bib-tools collect paper.tex
  bib-tools collect chapters/*.tex

Scans \\cite{...} macros; comma-separated keys are deduplicated across all
source files. The collected set overwrites data.yml.")]
    Collect {
        /// TeX source files to scan
        #[arg(required = true)]
        sources: Vec<PathBuf>,
    },

    /// Clean a bibliography file against the collected Reference Set
    #[command(after_help = "\
Examples:
  bib-tools clean library.bib

Writes the cleaned entries next to the input with a _clean suffix
(library.bib -> library_clean.bib). Entries whose keys are absent from
data.yml are discarded; unwanted fields are stripped; journal and
conference names are abbreviated; required-field violations are reported
to the console without blocking output.")]
    Clean {
        /// Input bibliography file
        input: PathBuf,
    },
}

// ---------------------------------------------------------------------------
// AppError — semantic exit codes
// ---------------------------------------------------------------------------

enum AppError {
    /// Exit 10 — source file not found / unreadable
    InputFile(String),
    /// Exit 11 — bibliography file not found / invalid
    BibFile(String),
    /// Exit 12 — configuration file (reference set / abbreviation table) not found / invalid
    ConfigFile(String),
    /// Exit 15 — cannot write output file
    OutputFile(String),
}

impl AppError {
    fn exit_code(&self) -> i32 {
        match self {
            AppError::InputFile(_) => 10,
            AppError::BibFile(_) => 11,
            AppError::ConfigFile(_) => 12,
            AppError::OutputFile(_) => 15,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InputFile(msg) => {
                write!(f, "{}\n  hint: verify the file path is correct", msg)
            }
            AppError::BibFile(msg) => {
                write!(
                    f,
                    "{}\n  hint: the file must be a BibTeX bibliography with @type{{key, ...}} entries",
                    msg
                )
            }
            AppError::ConfigFile(msg) => {
                write!(
                    f,
                    "{}\n  hint: 'clean' expects {}, {}, and {} in the current directory; run 'collect' first to produce {}",
                    msg, REF_SET_FILE, JOURNAL_TABLE_FILE, CONFERENCE_TABLE_FILE, REF_SET_FILE
                )
            }
            AppError::OutputFile(msg) => {
                write!(
                    f,
                    "{}\n  hint: check that the output directory exists and is writable",
                    msg
                )
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Collect { sources } => {
            collect_command(&sources)?;
        }
        Commands::Clean { input } => {
            clean_command(&input)?;
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// Collect citation keys from TeX sources and write the Reference Set.
fn collect_command(sources: &[PathBuf]) -> Result<(), AppError> {
    // 1. Scan every source file (a missing file is fatal)
    let keys = collect_references(sources).map_err(|e| AppError::InputFile(e.to_string()))?;

    // 2. Write the set as key -> 1, overwriting data.yml
    let set = RefSet::from_keys(keys);
    set.save(Path::new(REF_SET_FILE))
        .map_err(|e| AppError::OutputFile(format!("'{}': {}", REF_SET_FILE, e)))?;

    // 3. Report the collected set
    println!(
        "collected {} citation key(s) into {}",
        set.len(),
        REF_SET_FILE
    );
    for key in set.iter() {
        println!("  {}", key);
    }

    Ok(())
}

/// Clean a bibliography file against the Reference Set and the
/// abbreviation tables.
fn clean_command(input: &Path) -> Result<(), AppError> {
    // 1. Load the three fixed-name configuration files
    let refs = RefSet::load(Path::new(REF_SET_FILE))
        .map_err(|e| AppError::ConfigFile(format!("'{}': {}", REF_SET_FILE, e)))?;
    let journal_table = load_table(Path::new(JOURNAL_TABLE_FILE))
        .map_err(|e| AppError::ConfigFile(format!("'{}': {}", JOURNAL_TABLE_FILE, e)))?;
    let conference_table = load_table(Path::new(CONFERENCE_TABLE_FILE))
        .map_err(|e| AppError::ConfigFile(format!("'{}': {}", CONFERENCE_TABLE_FILE, e)))?;

    let output = derive_output_path(input);
    println!(
        "Cleaning bib records from {} into {}",
        input.display(),
        output.display()
    );

    // 2. Load and clean the bibliography
    let records = load_bibliography(input)
        .map_err(|e| AppError::BibFile(format!("'{}': {}", input.display(), e)))?;
    if records.is_empty() {
        return Err(AppError::BibFile(format!(
            "'{}': no entries found",
            input.display()
        )));
    }

    let cleaned = clean_bibliography(records, &refs, &journal_table, &conference_table);
    println!("Loaded {} found {} entries", input.display(), cleaned.len());

    // 3. Serialize and write; an empty result is fatal
    let bibtex = to_bibtex_string(&cleaned);
    if bibtex.is_empty() {
        return Err(AppError::OutputFile(format!(
            "'{}': cleaned bibliography is empty, nothing to write",
            output.display()
        )));
    }

    fs::write(&output, &bibtex)
        .map_err(|e| AppError::OutputFile(format!("'{}': {}", output.display(), e)))?;
    println!("Wrote {} with len {}", output.display(), bibtex.len());

    Ok(())
}
