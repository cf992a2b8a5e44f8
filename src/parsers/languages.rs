//! `LANGUAGES.tsv`: `code<TAB>name[<TAB>variant]` per line.

use std::path::Path;

use tracing::debug;

use super::tsv;
use crate::error::Result;
use crate::model::language::{LanguageEntry, LanguageTable};

pub fn load(path: &Path) -> Result<LanguageTable> {
    let text = tsv::read_table(path)?;
    let table = parse(&text, path)?;
    debug!(file = %path.display(), languages = table.len(), "loaded language table");
    Ok(table)
}

/// `file` is only used to label parse errors.
pub fn parse(text: &str, file: &Path) -> Result<LanguageTable> {
    let mut table = LanguageTable::new();

    for (ln, line) in tsv::numbered_lines(text) {
        // The variant swallows any further tabs.
        let fields: Vec<&str> = line.splitn(3, '\t').collect();

        let entry = match fields.as_slice() {
            [code, name] => LanguageEntry {
                code: code.to_string(),
                name: name.to_string(),
                variant: String::new(),
            },
            [code, name, variant] => LanguageEntry {
                code: code.to_string(),
                name: name.to_string(),
                variant: variant.to_string(),
            },
            _ => {
                return Err(tsv::parse_error(
                    file,
                    ln,
                    format!("expected 2 or 3 tab-separated fields, found {}", fields.len()),
                ))
            }
        };

        table.insert(entry);
    }

    Ok(table)
}
