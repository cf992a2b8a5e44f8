use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::model::config::BuildConfig;
use crate::model::language::LanguageTable;
use crate::parsers::{languages, transcriptions};
use crate::services::{
    dsl,
    target::Target,
    writer::{self, Artifact, WriteOutcome},
};

/// What to build. Empty lists mean "everything".
#[derive(Debug, Default, Clone)]
pub struct BuildRequest {
    pub targets: Vec<String>,
    pub codes: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct BuildReport {
    pub languages: usize,
    pub written: usize,
    pub unchanged: usize,
    pub artifacts: Vec<Artifact>,
}

impl BuildReport {
    fn new() -> Self {
        Self {
            languages: 0,
            written: 0,
            unchanged: 0,
            artifacts: Vec::new(),
        }
    }

    fn record(&mut self, artifacts: Vec<Artifact>) {
        for a in artifacts {
            match a.outcome {
                WriteOutcome::Written => self.written += 1,
                WriteOutcome::Unchanged => self.unchanged += 1,
            }
            self.artifacts.push(a);
        }
    }
}

/// Loads the language table named in `cfg` and builds the request.
pub fn build(cfg: &BuildConfig, req: &BuildRequest) -> Result<BuildReport> {
    let table = languages::load(&cfg.languages_file)?;
    run(cfg, &table, req)
}

pub fn run(cfg: &BuildConfig, table: &LanguageTable, req: &BuildRequest) -> Result<BuildReport> {
    // Every target name is checked before anything touches the disk.
    let targets = resolve_targets(&req.targets)?;

    let codes: Vec<&str> = if req.codes.is_empty() {
        table.codes().collect()
    } else {
        req.codes.iter().map(String::as_str).collect()
    };

    let mut report = BuildReport::new();

    for code in codes {
        let language = table.resolve(code)?;
        let ipa = transcriptions::load(&cfg.data_file(code))?;
        debug!(code, words = ipa.len(), "building");

        for target in &targets {
            debug!(code, target = target.name(), "running target");
            match target {
                Target::Dsl => {
                    let document =
                        dsl::render(code, &language.name, &language.description(), &ipa);
                    report.record(writer::write_document(&cfg.output_root, code, &document)?);
                }
            }
        }

        report.languages += 1;
    }

    debug!(
        languages = report.languages,
        written = report.written,
        unchanged = report.unchanged,
        "build finished"
    );

    Ok(report)
}

fn resolve_targets(names: &[String]) -> Result<Vec<Target>> {
    if names.is_empty() {
        return Ok(vec![Target::Dsl]);
    }
    names.iter().map(|n| n.parse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DictError;
    use std::fs;
    use std::path::Path;

    fn setup(languages: &str, data: &[(&str, &str)]) -> (tempfile::TempDir, BuildConfig) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("LANGUAGES.tsv"), languages).unwrap();
        fs::create_dir_all(dir.path().join("data")).unwrap();
        for (code, body) in data {
            fs::write(dir.path().join("data").join(format!("{code}.txt")), body).unwrap();
        }
        let cfg = BuildConfig::default().rooted(dir.path());
        (dir, cfg)
    }

    fn output(root: &Path, enc: &str, code: &str) -> std::path::PathBuf {
        root.join(format!("dsl_{enc}")).join(format!("{code}_ipa.dsl"))
    }

    #[test]
    fn builds_all_languages_by_default() {
        let (dir, cfg) = setup(
            "fr\tFrench\nzh\tChinese\tMandarin\n",
            &[("fr", "chat\t/ʃa/\n"), ("zh", "你好\t/ni˨˩ xɑʊ̯˨˩˦/\n")],
        );

        let report = build(&cfg, &BuildRequest::default()).unwrap();

        assert_eq!(report.languages, 2);
        assert_eq!(report.written, 4);
        let zh = fs::read_to_string(output(dir.path(), "utf8", "zh")).unwrap();
        assert!(zh.starts_with("#NAME \"IPA Dictionary - zh: Chinese (Mandarin)\"\n"));
        assert!(output(dir.path(), "utf16", "fr").exists());
    }

    #[test]
    fn only_requested_codes_are_built() {
        let (dir, cfg) = setup(
            "fr\tFrench\nde\tGerman\n",
            &[("fr", "chat\t/ʃa/\n"), ("de", "Hund\t/hʊnt/\n")],
        );
        let req = BuildRequest {
            targets: vec!["dsl".to_string()],
            codes: vec!["de".to_string()],
        };

        let report = build(&cfg, &req).unwrap();

        assert_eq!(report.languages, 1);
        assert!(output(dir.path(), "utf8", "de").exists());
        assert!(!output(dir.path(), "utf8", "fr").exists());
    }

    #[test]
    fn unknown_code_fails_lookup() {
        let (_dir, cfg) = setup("fr\tFrench\n", &[("fr", "chat\t/ʃa/\n")]);
        let req = BuildRequest {
            codes: vec!["xx".to_string()],
            ..Default::default()
        };

        match build(&cfg, &req) {
            Err(DictError::UnknownLanguage(code)) => assert_eq!(code, "xx"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn unknown_target_fails_before_writing() {
        let (dir, cfg) = setup("fr\tFrench\n", &[("fr", "chat\t/ʃa/\n")]);
        let req = BuildRequest {
            targets: vec!["dsl".to_string(), "stardict".to_string()],
            ..Default::default()
        };

        match build(&cfg, &req) {
            Err(DictError::UnsupportedTarget(name)) => assert_eq!(name, "stardict"),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(!dir.path().join("dsl_utf8").exists());
    }

    #[test]
    fn malformed_data_line_halts_before_output() {
        let (dir, cfg) = setup(
            "fr\tFrench\nde\tGerman\n",
            &[("fr", "chat\t/ʃa/\n"), ("de", "Hund\t/hʊnt/\textra\n")],
        );

        match build(&cfg, &BuildRequest::default()) {
            Err(DictError::Parse { file, line, .. }) => {
                assert_eq!(file, cfg.data_file("de"));
                assert_eq!(line, 1);
            }
            other => panic!("unexpected result: {other:?}"),
        }
        // Earlier languages stay written, the broken one never is.
        assert!(output(dir.path(), "utf8", "fr").exists());
        assert!(!output(dir.path(), "utf8", "de").exists());
        assert!(!output(dir.path(), "utf16", "de").exists());
    }

    #[test]
    fn repeated_target_is_a_no_op_the_second_time() {
        let (_dir, cfg) = setup("fr\tFrench\n", &[("fr", "chat\t/ʃa/\n")]);
        let req = BuildRequest {
            targets: vec!["dsl".to_string(), "dsl".to_string()],
            ..Default::default()
        };

        let report = build(&cfg, &req).unwrap();
        assert_eq!(report.written, 2);
        assert_eq!(report.unchanged, 2);
    }
}
