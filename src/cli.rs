// src/cli.rs
use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;

use crate::config::consts::DEFAULT_OUTPUT;
use crate::config::options::{ImportOptions, InputSource};
use crate::import::{self, Summary};
use crate::log::{self as logging, LogTarget};
use crate::Result;

/// Import a life-list CSV export into the profile page's JSON artifact.
#[derive(Parser, Debug)]
#[command(name = "lifelist", version, about)]
pub struct Args {
    /// CSV export to read; `-` reads stdin
    #[arg(short, long, default_value = "-")]
    pub input: String,

    /// JSON artifact to merge with and rewrite
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// TOML file overriding column positions / delimiter
    #[arg(long)]
    pub schema: Option<PathBuf>,

    /// Parse and report without writing the artifact
    #[arg(long)]
    pub dry_run: bool,

    /// Debug-level logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Log to stderr instead of .store/
    #[arg(long)]
    pub log_stderr: bool,
}

impl Args {
    pub fn to_options(&self) -> Result<ImportOptions> {
        let mut opts = ImportOptions {
            input: InputSource::from_arg(&self.input),
            output: self.output.clone(),
            dry_run: self.dry_run,
            ..ImportOptions::default()
        };
        if let Some(path) = &self.schema {
            opts.apply_schema_file(path)?;
        }
        Ok(opts)
    }
}

/// Human-readable result lines for stdout.
pub fn format_summary(summary: &Summary) -> Vec<String> {
    let mut lines = vec![format!(
        "Imported {} observations ({} species).",
        summary.count(),
        summary.species
    )];
    if let Some(o) = summary.most_recent() {
        lines.push(format!(
            "Most recent: {} {} ({}) at {}, {}",
            o.date, o.common, o.sci_name, o.location, o.region
        ));
    }
    let dropped = summary.report.dropped();
    if dropped > 0 {
        lines.push(format!("Skipped {dropped} malformed rows."));
    }
    match &summary.written {
        Some(p) => lines.push(format!("Wrote {}", p.display())),
        None => lines.push(s!("Dry run: nothing written.")),
    }
    lines
}

pub fn run(args: Args) -> Result<()> {
    let level = if args.verbose { "debug" } else { "info" };
    let target = if args.log_stderr { LogTarget::Stderr } else { LogTarget::File };
    if let Err(msg) = logging::init(level, target) {
        eprintln!("Warning: logging disabled: {msg}");
    }

    let opts = args.to_options()?;
    let summary = import::run(&opts, Utc::now()).inspect_err(|e| loge!("Import failed: {e}"))?;

    for line in format_summary(&summary) {
        println!("{line}");
    }
    Ok(())
}
