use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use std::path::{Path, PathBuf};

/// pitchcat: contact and non-contact breakdowns of pitch data
///
/// pitchcat reads a JSON array of pitch records, sorts every pitch into
/// contact (foul, in play) and non-contact (whiff, called strike, ball, hit by
/// pitch, undefined) buckets and reports rates, exit velocity statistics and
/// plate-appearance counts.
#[derive(Debug, Parser, Clone)]
#[command(about, long_about, version)]
pub struct Cli {
    /// Path to configuration file.
    ///
    /// If not provided, the default locations are checked. They are
    /// `/etc/pitchcat/config.toml` and `/etc/pitchcat/config.d/*.toml`,
    /// where the latter being a glob pattern. If they don't exist, the default
    /// configuration is used.
    #[arg(short, long, global = true, value_parser = validate_file)]
    pub config: Option<PathBuf>,

    /// Width of the `=` rules in the text report. Overrides the config file.
    #[arg(long, global = true, value_parser = validate_width)]
    pub rule_width: Option<usize>,

    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print the human-readable categorization report.
    Report {
        /// JSON file with pitch records. `-` reads standard input.
        #[arg(default_value = "-", value_parser = validate_input)]
        input: PathBuf,
    },

    /// Emit contact, non-contact and totals summaries as JSON.
    Summary {
        /// JSON file with pitch records. `-` reads standard input.
        #[arg(default_value = "-", value_parser = validate_input)]
        input: PathBuf,

        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },

    /// Emit the categorized pitch buckets as JSON.
    Categorize {
        /// JSON file with pitch records. `-` reads standard input.
        #[arg(default_value = "-", value_parser = validate_input)]
        input: PathBuf,

        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },

    /// Emit plate-appearance contact counts and groups as JSON.
    PlateAppearances {
        /// JSON file with pitch records. `-` reads standard input.
        #[arg(default_value = "-", value_parser = validate_input)]
        input: PathBuf,

        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },
}

impl Command {
    pub fn input(&self) -> &Path {
        match self {
            Command::Report { input }
            | Command::Summary { input, .. }
            | Command::Categorize { input, .. }
            | Command::PlateAppearances { input, .. } => input,
        }
    }
}

/// Check if the file exists.
#[inline(always)]
fn validate_file(file: &str) -> Result<PathBuf, String> {
    let path = Path::new(file);
    if path.exists() {
        Ok(path.to_owned())
    } else {
        Err(format!("File not found: {:?}", path))
    }
}

/// Like [`validate_file`], but `-` stands for standard input.
#[inline(always)]
fn validate_input(file: &str) -> Result<PathBuf, String> {
    if file == "-" {
        Ok(PathBuf::from(file))
    } else {
        validate_file(file)
    }
}

/// Validate report rule width
#[inline(always)]
fn validate_width(width: &str) -> Result<usize, String> {
    let width: usize = width
        .parse()
        .map_err(|_| format!("`{width}` is not a valid width"))?;
    if (10..=200).contains(&width) {
        Ok(width)
    } else {
        Err("Rule width must be between 10 and 200".to_string())
    }
}
