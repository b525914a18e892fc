// src/config/schema.rs
//! Named column layout of the life-list export.
//!
//! The export is positional: common name, scientific name, location, region and
//! date sit at fixed indexes. Those indexes live here, behind names, so a change
//! in the upstream layout is a config edit (`--schema layout.toml`) rather than
//! a code edit.
//!
//! ```toml
//! delimiter = "csv"   # or "tsv"
//!
//! [columns]
//! common_name = 3
//! scientific_name = 4
//! location = 6
//! region = 7
//! date = 8
//! ```

use std::path::Path;

use serde::Deserialize;

use super::consts::*;
use crate::core::sanitize::strip_quotes;
use crate::csv::Delim;
use crate::{Error, Result};

/// A row that tokenized and mapped cleanly but whose date is not yet checked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub common_name: String,
    pub scientific_name: String,
    pub location: String,
    pub region: String,
    pub date_text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnSchema {
    pub common_name: usize,
    pub scientific_name: usize,
    pub location: usize,
    pub region: usize,
    pub date: usize,
}

impl Default for ColumnSchema {
    fn default() -> Self {
        Self {
            common_name: COL_COMMON_NAME,
            scientific_name: COL_SCIENTIFIC_NAME,
            location: COL_LOCATION,
            region: COL_REGION,
            date: COL_DATE,
        }
    }
}

impl ColumnSchema {
    /// Rows shorter than this cannot be mapped.
    pub fn min_columns(&self) -> usize {
        [self.common_name, self.scientific_name, self.location, self.region, self.date]
            .into_iter()
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Map one tokenized row to a candidate record. `None` for short rows.
    pub fn map_row(&self, row: &[String]) -> Option<Candidate> {
        if row.len() < self.min_columns() {
            return None;
        }
        Some(Candidate {
            common_name: row[self.common_name].clone(),
            scientific_name: row[self.scientific_name].clone(),
            location: strip_quotes(&row[self.location]),
            region: row[self.region].clone(),
            date_text: row[self.date].clone(),
        })
    }
}

/* ---------------- File form ---------------- */

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchemaFile {
    pub delimiter: Option<Delim>,
    pub columns: ColumnsToml,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnsToml {
    pub common_name: Option<usize>,
    pub scientific_name: Option<usize>,
    pub location: Option<usize>,
    pub region: Option<usize>,
    pub date: Option<usize>,
}

impl ColumnsToml {
    /// Fill unspecified columns from `base`.
    pub fn overlay(&self, base: &ColumnSchema) -> ColumnSchema {
        ColumnSchema {
            common_name: self.common_name.unwrap_or(base.common_name),
            scientific_name: self.scientific_name.unwrap_or(base.scientific_name),
            location: self.location.unwrap_or(base.location),
            region: self.region.unwrap_or(base.region),
            date: self.date.unwrap_or(base.date),
        }
    }
}

impl SchemaFile {
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(format!("invalid schema: {e}")))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("read {}: {e}", path.display())))?;
        Self::parse(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn default_layout_needs_nine_columns() {
        assert_eq!(ColumnSchema::default().min_columns(), 9);
    }

    #[test]
    fn maps_default_positions() {
        let r = row(&["1", "x", "y", "Mallard", "Anas platyrhynchos", "z", "Lake \"Park\"", "US-CA", "5 Jan 2024"]);
        let c = ColumnSchema::default().map_row(&r).unwrap();
        assert_eq!(c.common_name, "Mallard");
        assert_eq!(c.scientific_name, "Anas platyrhynchos");
        assert_eq!(c.location, "Lake Park");
        assert_eq!(c.region, "US-CA");
        assert_eq!(c.date_text, "5 Jan 2024");
    }

    #[test]
    fn short_row_is_none() {
        let r = row(&["1", "2", "3", "4", "5", "6", "7", "8"]);
        assert!(ColumnSchema::default().map_row(&r).is_none());
    }

    #[test]
    fn schema_file_overlays_defaults() {
        let file = SchemaFile::parse("delimiter = \"tsv\"\n[columns]\ndate = 0\ncommon_name = 10\n").unwrap();
        assert_eq!(file.delimiter, Some(Delim::Tsv));
        let s = file.columns.overlay(&ColumnSchema::default());
        assert_eq!(s.date, 0);
        assert_eq!(s.common_name, 10);
        assert_eq!(s.region, COL_REGION);
        assert_eq!(s.min_columns(), 11);
    }

    #[test]
    fn schema_file_rejects_unknown_keys() {
        assert!(SchemaFile::parse("[columns]\nspecies = 2\n").is_err());
    }
}
