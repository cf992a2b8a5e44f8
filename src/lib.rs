//! Builds DSL pronunciation dictionaries from tab-separated IPA tables.
//!
//! `LANGUAGES.tsv` names the languages; `data/<code>.txt` holds each
//! language's `word<TAB>transcription` pairs. Every dictionary is written
//! twice, to `dsl_utf8/<code>_ipa.dsl` and `dsl_utf16/<code>_ipa.dsl`, and a
//! file is only rewritten when its bytes would change.

pub mod error;
pub mod logging;
pub mod model;
pub mod parsers;
pub mod services;

pub use error::{DictError, Result};
pub use model::config::BuildConfig;
pub use services::pipeline::{build, BuildReport, BuildRequest};
