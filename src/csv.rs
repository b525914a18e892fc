// src/csv.rs
use std::mem::take;

use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delim {
    #[default]
    Csv,
    Tsv,
}

impl Delim {
    pub fn sep(self) -> char {
        match self { Delim::Csv => ',', Delim::Tsv => '\t' }
    }
}

/* ---------------- Parsing ---------------- */

/// Split one line into trimmed fields.
///
/// A `"` flips "inside quotes"; while inside, `sep` is an ordinary character.
/// Quote characters are never copied into the field. A doubled quote is not
/// an escape: `""` simply flips twice.
pub fn parse_line(line: &str, sep: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = s!();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == sep && !in_quotes => {
                fields.push(take(&mut field).trim().to_string());
            }
            _ => field.push(ch),
        }
    }
    fields.push(field.trim().to_string());
    fields
}

/// Tokenize a whole export. The first line is the header and is always
/// discarded; lines that are blank after trimming are skipped.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    text.lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(|line| parse_line(line, sep))
        .collect()
}
