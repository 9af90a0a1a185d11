use abbrev_core::corpus::{load_corpus, CorpusScanner};
use abbrev_core::{
    AbbreviationIndex, Entry, ErrorPolicy, LookupConfig, LookupEngine, LookupError, ParseError,
};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, text: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create dir");
    }
    fs::write(path, text).expect("write corpus file");
}

fn corpus() -> TempDir {
    let temp = TempDir::new().expect("tempdir");
    write(
        temp.path(),
        "business.txt",
        "# business\nCEO: Chief Executive Officer\nCFO: Chief Financial Officer\n",
    );
    write(
        temp.path(),
        "medical.txt",
        "MO (medical officer): Doctor\nDoctor -> Dr, GP (general practitioner)\n",
    );
    write(temp.path(), "notes.md", "this is not a corpus file\n");
    write(temp.path(), "nested/extra.txt", "XO: Executive Officer\n");
    temp
}

#[test]
fn scanner_filters_by_extension_and_depth() {
    let temp = corpus();
    let config = LookupConfig::with_data_dir(temp.path());

    let names: Vec<String> = CorpusScanner::new(&config)
        .scan()
        .expect("scan")
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["business.txt", "medical.txt"]);

    let recursive = LookupConfig {
        recursive: true,
        ..config.clone()
    };
    assert_eq!(CorpusScanner::new(&recursive).scan().expect("scan").len(), 3);

    let markdown = LookupConfig {
        extension: ".md".to_string(),
        ..config
    };
    assert_eq!(CorpusScanner::new(&markdown).scan().expect("scan").len(), 1);
}

#[test]
fn engine_answers_both_directions() {
    let temp = corpus();
    let engine = LookupEngine::from_config(&LookupConfig::with_data_dir(temp.path()))
        .expect("load corpus");

    assert_eq!(engine.stats().files, 2);
    assert_eq!(engine.lookup_abbreviation("mo"), vec!["Doctor (medical officer)"]);
    assert_eq!(
        engine.lookup_definition_word("doctor"),
        vec![
            "Dr: Doctor",
            "GP: Doctor (general practitioner)",
            "MO: Doctor (medical officer)",
        ]
    );
    assert_eq!(
        engine.lookup_definition_word("CHIEF"),
        vec!["CEO: Chief Executive Officer", "CFO: Chief Financial Officer"]
    );
    assert!(engine.lookup("xo").is_empty());
}

#[test]
fn recursive_load_reaches_subdirectories() {
    let temp = corpus();
    let config = LookupConfig {
        recursive: true,
        ..LookupConfig::with_data_dir(temp.path())
    };
    let mut index = AbbreviationIndex::new();
    let stats = load_corpus(&config, &mut index).expect("load corpus");
    assert_eq!(stats.files, 3);

    let found = index.lookup_abbreviation("xo");
    assert!(found.contains(&Entry::new("XO", "Executive Officer", "")));
}

#[test]
fn fail_fast_names_file_and_line() {
    let temp = corpus();
    write(temp.path(), "zz_broken.txt", "A: B\nwhat is this\n");

    let err = LookupEngine::from_config(&LookupConfig::with_data_dir(temp.path()))
        .err()
        .expect("malformed corpus must fail");
    match err {
        LookupError::Parse {
            path,
            line_number,
            source,
        } => {
            assert!(path.ends_with("zz_broken.txt"));
            assert_eq!(line_number, 2);
            assert_eq!(source.line(), "what is this");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn collect_reports_every_malformed_line() {
    let temp = corpus();
    write(temp.path(), "a_broken.txt", "nope\nA: B)\n");
    write(temp.path(), "z_broken.txt", "\n\nstill nope\n");

    let config = LookupConfig {
        error_policy: ErrorPolicy::Collect,
        ..LookupConfig::with_data_dir(temp.path())
    };
    let mut index = AbbreviationIndex::new();
    let err = load_corpus(&config, &mut index).expect_err("malformed corpus must fail");
    let errors = match err {
        LookupError::MalformedCorpus(errors) => errors,
        other => panic!("expected MalformedCorpus, got {other}"),
    };

    let found: Vec<(String, usize, ParseError)> = errors
        .into_iter()
        .map(|e| {
            let name = e.path.file_name().unwrap().to_string_lossy().into_owned();
            (name, e.line_number, e.error)
        })
        .collect();
    assert_eq!(
        found,
        vec![
            (
                "a_broken.txt".to_string(),
                1,
                ParseError::MissingSeparator {
                    line: "nope".to_string()
                }
            ),
            (
                "a_broken.txt".to_string(),
                2,
                ParseError::MismatchedParentheses {
                    line: "A: B)".to_string()
                }
            ),
            (
                "z_broken.txt".to_string(),
                3,
                ParseError::MissingSeparator {
                    line: "still nope".to_string()
                }
            ),
        ]
    );
    // Well-formed files were still read.
    assert_eq!(index.lookup_abbreviation("ceo").len(), 1);
}

#[test]
fn missing_data_dir_is_source_unavailable() {
    let temp = TempDir::new().expect("tempdir");
    let config = LookupConfig::with_data_dir(temp.path().join("absent"));
    assert!(matches!(
        LookupEngine::from_config(&config),
        Err(LookupError::SourceUnavailable { .. })
    ));
}

#[test]
fn data_dir_pointing_at_a_file_is_source_unavailable() {
    let temp = corpus();
    let config = LookupConfig::with_data_dir(temp.path().join("business.txt"));
    assert!(matches!(
        CorpusScanner::new(&config).scan(),
        Err(LookupError::SourceUnavailable { .. })
    ));
}

#[cfg(unix)]
#[test]
fn dangling_symlink_is_skipped() {
    let temp = corpus();
    std::os::unix::fs::symlink(temp.path().join("gone.txt"), temp.path().join("link.txt"))
        .expect("symlink");

    let config = LookupConfig::with_data_dir(temp.path());
    let files = CorpusScanner::new(&config).scan().expect("scan");
    assert_eq!(files.len(), 2);
    assert!(LookupEngine::from_config(&config).is_ok());
}
