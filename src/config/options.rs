// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::DEFAULT_OUTPUT;
use super::schema::{ColumnSchema, SchemaFile};
use crate::csv::Delim;
use crate::Result;

/// Where the raw export text comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `-` means stdin, anything else is a path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" { InputSource::Stdin } else { InputSource::File(PathBuf::from(arg)) }
    }

    pub fn describe(&self) -> String {
        match self {
            InputSource::Stdin => s!("<stdin>"),
            InputSource::File(p) => p.display().to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportOptions {
    pub input: InputSource,
    pub output: PathBuf,
    pub schema: ColumnSchema,
    pub delim: Delim,
    /// Parse and report, but leave the artifact alone.
    pub dry_run: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            input: InputSource::Stdin,
            output: PathBuf::from(DEFAULT_OUTPUT),
            schema: ColumnSchema::default(),
            delim: Delim::Csv,
            dry_run: false,
        }
    }
}

impl ImportOptions {
    /// Overlay a schema file onto these options. Keys the file omits keep
    /// their current values.
    pub fn apply_schema_file(&mut self, path: &Path) -> Result<()> {
        let file = SchemaFile::load(path)?;
        if let Some(delim) = file.delimiter {
            self.delim = delim;
        }
        self.schema = file.columns.overlay(&self.schema);
        logd!(
            "Config: schema {} -> {:?} delim={:?}",
            path.display(),
            self.schema,
            self.delim
        );
        Ok(())
    }
}
