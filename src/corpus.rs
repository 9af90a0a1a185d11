// File: src/corpus.rs
use crate::config::{ErrorPolicy, LookupConfig};
use crate::core::index::AbbreviationIndex;
use crate::error::{LineError, LookupError, Result};
use serde::Serialize;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Counts gathered while ingesting a corpus.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CorpusStats {
    pub files: usize,
    /// Lines that held a record (blank and comment lines excluded).
    pub records: usize,
    /// Abbreviation/definition pairs handed to the index.
    pub pairs: usize,
}

/// Finds corpus files under a data directory.
pub struct CorpusScanner {
    root: PathBuf,
    extension: String,
    recursive: bool,
}

impl CorpusScanner {
    pub fn new(config: &LookupConfig) -> Self {
        Self {
            root: config.data_dir.clone(),
            extension: config.extension.trim_start_matches('.').to_string(),
            recursive: config.recursive,
        }
    }

    /// Lists matching files, ordered by name.
    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        let meta =
            fs::metadata(&self.root).map_err(|e| LookupError::source_unavailable(&self.root, e))?;
        if !meta.is_dir() {
            return Err(LookupError::source_unavailable(
                &self.root,
                io::Error::other("not a directory"),
            ));
        }

        let mut walker = WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(true)
            .sort_by_file_name();
        if !self.recursive {
            walker = walker.max_depth(1);
        }

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                // Dangling symlinks inside the data dir are skipped.
                Err(e) if e.depth() > 0 && is_not_found(&e) => {
                    let path = e.path().unwrap_or(self.root.as_path());
                    log::debug!("Skipping broken link {}", path.display());
                    continue;
                }
                Err(e) => {
                    let path = e.path().unwrap_or(self.root.as_path()).to_path_buf();
                    return Err(LookupError::source_unavailable(path, e.into()));
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(OsStr::to_str) != Some(self.extension.as_str()) {
                log::debug!("Skipping {}", path.display());
                continue;
            }
            files.push(path.to_path_buf());
        }

        log::debug!("Found {} corpus files in {}", files.len(), self.root.display());
        Ok(files)
    }
}

fn is_not_found(e: &walkdir::Error) -> bool {
    e.io_error()
        .is_some_and(|io| io.kind() == io::ErrorKind::NotFound)
}

struct Loader<'a> {
    index: &'a mut AbbreviationIndex,
    policy: ErrorPolicy,
    stats: CorpusStats,
    errors: Vec<LineError>,
}

impl<'a> Loader<'a> {
    fn new(index: &'a mut AbbreviationIndex, policy: ErrorPolicy) -> Self {
        Self {
            index,
            policy,
            stats: CorpusStats::default(),
            errors: Vec::new(),
        }
    }

    fn feed(&mut self, path: &Path, text: &str) -> Result<()> {
        self.stats.files += 1;
        for (i, line) in text.lines().enumerate() {
            match self.index.add_line(line) {
                Ok(0) => {}
                Ok(pairs) => {
                    self.stats.records += 1;
                    self.stats.pairs += pairs;
                }
                Err(error) => {
                    let error = LineError {
                        path: path.to_path_buf(),
                        line_number: i + 1,
                        error,
                    };
                    match self.policy {
                        ErrorPolicy::FailFast => return Err(error.into()),
                        ErrorPolicy::Collect => {
                            log::warn!("{}", error);
                            self.errors.push(error);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn feed_file(&mut self, path: &Path) -> Result<()> {
        log::debug!("Reading {}", path.display());
        let text =
            fs::read_to_string(path).map_err(|e| LookupError::source_unavailable(path, e))?;
        self.feed(path, &text)
    }

    fn finish(self) -> Result<CorpusStats> {
        if self.errors.is_empty() {
            Ok(self.stats)
        } else {
            Err(LookupError::MalformedCorpus(self.errors))
        }
    }
}

/// Ingests in-memory text as if it were the file at `path`.
pub fn load_str(
    path: &Path,
    text: &str,
    index: &mut AbbreviationIndex,
    policy: ErrorPolicy,
) -> Result<CorpusStats> {
    let mut loader = Loader::new(index, policy);
    loader.feed(path, text)?;
    loader.finish()
}

pub fn load_file(
    path: &Path,
    index: &mut AbbreviationIndex,
    policy: ErrorPolicy,
) -> Result<CorpusStats> {
    let mut loader = Loader::new(index, policy);
    loader.feed_file(path)?;
    loader.finish()
}

/// Reads every corpus file the config points at into `index`.
pub fn load_corpus(config: &LookupConfig, index: &mut AbbreviationIndex) -> Result<CorpusStats> {
    let files = CorpusScanner::new(config).scan()?;
    let mut loader = Loader::new(index, config.error_policy);
    for path in &files {
        loader.feed_file(path)?;
    }
    let stats = loader.finish()?;
    log::info!(
        "Loaded {} records ({} pairs) from {} files",
        stats.records,
        stats.pairs,
        stats.files
    );
    Ok(stats)
}
