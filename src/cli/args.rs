//! CLI argument definitions using clap.
//!
//! A single command with flags: the default run compares source strings with
//! the catalogs, `--export-base` writes the base catalog instead, and
//! `--init` writes a default configuration file.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Mode, OutputOptions};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Project root; the configuration file is searched from here upward
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Language directory (overrides config file)
    #[arg(long)]
    pub lang_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Print results as a single JSON document
    #[arg(long)]
    pub json: bool,

    /// Omit locations and languages from the missing list
    #[arg(long)]
    pub compact: bool,

    /// Write all used strings to the base catalog instead of checking
    #[arg(short = 'e', long)]
    pub export_base: bool,

    /// Create a default .transcheckrc.json in the project root
    #[arg(long, conflicts_with = "export_base")]
    pub init: bool,
}

impl Arguments {
    pub fn output_options(&self) -> OutputOptions {
        OutputOptions {
            verbose: self.verbose,
            json: self.json,
            compact: self.compact,
        }
    }

    pub fn mode(&self) -> Mode {
        if self.export_base {
            Mode::ExportBase
        } else {
            Mode::Check
        }
    }
}
