// src/import.rs
//
// The import pipeline:
//   text → csv::parse_rows → ColumnSchema::map_row → sequence → Export → store
//
// Bad rows (too short, unparseable date) are dropped without complaint. They
// are only counted, so a bit of junk in the export never sinks a whole run.

use std::collections::HashSet;
use std::io::Read;
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::config::options::{ImportOptions, InputSource};
use crate::config::schema::{Candidate, ColumnSchema};
use crate::core::date::normalize_date;
use crate::csv::{parse_rows, Delim};
use crate::model::{Export, Observation};
use crate::{store, Result};

/// Diagnostic counters. Purely informational.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Non-blank data rows after the header.
    pub rows_read: usize,
    /// Rows with fewer columns than the schema needs.
    pub dropped_short: usize,
    /// Rows whose date did not normalize.
    pub dropped_date: usize,
}

impl ImportReport {
    pub fn dropped(&self) -> usize { self.dropped_short + self.dropped_date }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Imported {
    pub observations: Vec<Observation>,
    pub report: ImportReport,
}

/// What a run produced.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub export: Export,
    pub report: ImportReport,
    /// Distinct scientific names, i.e. the life-list size.
    pub species: usize,
    /// `None` on a dry run.
    pub written: Option<PathBuf>,
}

impl Summary {
    pub fn count(&self) -> usize { self.export.observations.len() }
    pub fn first(&self) -> Option<&Observation> { self.export.observations.first() }
    pub fn most_recent(&self) -> Option<&Observation> { self.export.most_recent() }
}

/// Drop candidates whose date does not normalize, then stable-sort the rest
/// by ISO date. Returns the observations and how many were dropped.
pub fn sequence(candidates: Vec<Candidate>) -> (Vec<Observation>, usize) {
    let total = candidates.len();
    let mut out: Vec<Observation> = candidates
        .into_iter()
        .filter_map(|c| {
            let date = normalize_date(&c.date_text)?;
            Some(Observation {
                date,
                sci_name: c.scientific_name,
                common: c.common_name,
                location: c.location,
                region: c.region,
            })
        })
        .collect();
    let dropped = total - out.len();

    // Stable: equal dates keep input order. Plain string order is chronological
    // because normalize_date always emits zero-padded YYYY-MM-DD.
    out.sort_by(|a, b| a.date.cmp(&b.date));
    (out, dropped)
}

/// Parse raw export text into ordered observations.
pub fn import_text(text: &str, schema: &ColumnSchema, delim: Delim) -> Imported {
    let rows = parse_rows(text, delim.sep());
    let rows_read = rows.len();

    let candidates: Vec<Candidate> = rows.iter().filter_map(|r| schema.map_row(r)).collect();
    let dropped_short = rows_read - candidates.len();

    let (observations, dropped_date) = sequence(candidates);

    Imported {
        observations,
        report: ImportReport { rows_read, dropped_short, dropped_date },
    }
}

/// Count distinct species by scientific name.
pub fn species_count(observations: &[Observation]) -> usize {
    observations
        .iter()
        .map(|o| o.sci_name.as_str())
        .collect::<HashSet<_>>()
        .len()
}

pub fn read_input(input: &InputSource) -> Result<String> {
    match input {
        InputSource::File(p) => Ok(std::fs::read_to_string(p)?),
        InputSource::Stdin => {
            let mut buf = s!();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Full run: read input, import, merge with the prior profile, persist.
/// Any error aborts before the artifact is replaced.
pub fn run(opts: &ImportOptions, now: DateTime<Utc>) -> Result<Summary> {
    let text = read_input(&opts.input)?;
    logf!("Import: Begin input={} bytes={}", opts.input.describe(), text.len());
    run_text(opts, &text, now)
}

/// [`run`] with the input text already in hand.
pub fn run_text(opts: &ImportOptions, text: &str, now: DateTime<Utc>) -> Result<Summary> {
    let Imported { observations, report } = import_text(text, &opts.schema, opts.delim);
    logd!(
        "Import: rows={} kept={} dropped_short={} dropped_date={}",
        report.rows_read,
        observations.len(),
        report.dropped_short,
        report.dropped_date
    );

    let profile = store::load_profile(&opts.output);
    let species = species_count(&observations);
    let export = Export::build(profile, observations, now);

    let written = if opts.dry_run {
        logf!("Import: dry run, {} left untouched", opts.output.display());
        None
    } else {
        store::save_export(&opts.output, &export)?;
        logf!(
            "Import: OK count={} species={} out={}",
            export.observations.len(),
            species,
            opts.output.display()
        );
        Some(opts.output.clone())
    };

    Ok(Summary { export, report, species, written })
}
