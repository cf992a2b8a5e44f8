//! Per-language data files: `word<TAB>transcription` per line.

use std::path::Path;

use tracing::debug;

use super::tsv;
use crate::error::Result;
use crate::model::transcription::TranscriptionMap;

pub fn load(path: &Path) -> Result<TranscriptionMap> {
    let text = tsv::read_table(path)?;
    let map = parse(&text, path)?;
    debug!(file = %path.display(), words = map.len(), "loaded transcriptions");
    Ok(map)
}

/// `file` is only used to label parse errors.
pub fn parse(text: &str, file: &Path) -> Result<TranscriptionMap> {
    let mut map = TranscriptionMap::new();

    for (ln, line) in tsv::numbered_lines(text) {
        let mut fields = line.split('\t');

        match (fields.next(), fields.next(), fields.next()) {
            (Some(word), Some(transcription), None) => {
                map.insert(word.to_string(), transcription.to_string());
            }
            _ => {
                let found = line.split('\t').count();
                return Err(tsv::parse_error(
                    file,
                    ln,
                    format!("expected 2 tab-separated fields, found {found}"),
                ));
            }
        }
    }

    Ok(map)
}
