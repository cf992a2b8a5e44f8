use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{DictError, Result};
use crate::services::{dsl, encoding::OutputEncoding};

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WriteOutcome {
    Written,
    Unchanged,
}

/// One file produced for one language.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub code: String,
    pub encoding: OutputEncoding,
    pub path: PathBuf,
    pub outcome: WriteOutcome,
}

/// Writes `document` once per output encoding under `output_root`.
pub fn write_document(output_root: &Path, code: &str, document: &str) -> Result<Vec<Artifact>> {
    let mut artifacts = Vec::with_capacity(OutputEncoding::ALL.len());

    for enc in OutputEncoding::ALL {
        let data = enc.encode(document);

        let dir = output_root.join(enc.dir_name());
        fs::create_dir_all(&dir).map_err(DictError::io(&dir))?;

        let path = dir.join(dsl::file_name(code));
        let outcome = overwrite_maybe(&path, &data)?;

        artifacts.push(Artifact {
            code: code.to_string(),
            encoding: enc,
            path,
            outcome,
        });
    }

    Ok(artifacts)
}

/// Replaces the file at `path` with `data` unless it already holds exactly
/// those bytes.
pub fn overwrite_maybe(path: &Path, data: &[u8]) -> Result<WriteOutcome> {
    if let Some(existing) = read_existing(path)? {
        if existing == data {
            debug!(path = %path.display(), "unchanged");
            return Ok(WriteOutcome::Unchanged);
        }
    }

    info!("writing {}", path.display());
    write_atomic(path, data)?;

    Ok(WriteOutcome::Written)
}

fn read_existing(path: &Path) -> Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(DictError::io(path)(e)),
    }
}

// The target is only ever replaced by a rename, so readers see either the
// old file or the complete new one.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp = tmp_path(path);

    fs::write(&tmp, bytes).map_err(DictError::io(&tmp))?;
    fs::rename(&tmp, path).map_err(DictError::io(path))?;

    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
