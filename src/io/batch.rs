//! Batch conversion of many files
//!
//! Paths come either from a line-oriented reader (one path per line) or
//! from an explicit list. Files are converted one at a time and the run
//! stops at the first error; outputs already written are left in place.

use crate::core::Normalizer;
use crate::error::{MatterFmtError, Result};
use crate::io::reader::read_document;
use crate::io::writer::{destination_path, FrontMatterWriter, DEFAULT_SUFFIX};
use log::{debug, info};
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Where converted documents go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputTarget {
    /// Write `<source><suffix>` next to each source
    #[default]
    File,
    /// Print converted documents to stdout
    Stdout,
}

/// Configuration for a batch run
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub suffix: String,
    pub output: OutputTarget,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
            output: OutputTarget::File,
        }
    }
}

/// Outcome of converting a single file
#[derive(Debug, Clone)]
pub struct ConvertResult {
    pub source: PathBuf,
    /// Written file, `None` when printing to stdout
    pub destination: Option<PathBuf>,
    pub content: String,
}

/// Outcome of a whole batch
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub results: Vec<ConvertResult>,
}

impl BatchSummary {
    pub fn converted(&self) -> usize {
        self.results.len()
    }
}

pub struct BatchProcessor {
    config: BatchConfig,
    normalizer: Normalizer,
    writer: FrontMatterWriter,
}

impl BatchProcessor {
    pub fn new() -> Self {
        Self::with_config(BatchConfig::default())
    }

    pub fn with_config(config: BatchConfig) -> Self {
        Self {
            config,
            normalizer: Normalizer::new(),
            writer: FrontMatterWriter::new(),
        }
    }

    /// Replace the normalizer, e.g. to freeze the clock
    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn with_writer(mut self, writer: FrontMatterWriter) -> Self {
        self.writer = writer;
        self
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Convert one file and write or print the result
    pub fn convert_file<P: AsRef<Path>>(&self, path: P) -> Result<ConvertResult> {
        let path = path.as_ref();
        info!("==> File: {}", path.display());

        let document = read_document(path)?;
        debug!("front matter: {:?}", document.front_matter());
        debug!(
            "{} comment lines, {} body lines",
            document.comments().len(),
            document.body().len()
        );

        let content = document.render(&self.normalizer);

        let destination = match self.config.output {
            OutputTarget::File => {
                let dest = destination_path(path, &self.config.suffix);
                self.writer.write(&dest, &content)?;
                debug!("wrote {}", dest.display());
                Some(dest)
            }
            OutputTarget::Stdout => {
                println!("{}", content);
                None
            }
        };

        Ok(ConvertResult {
            source: path.to_path_buf(),
            destination,
            content,
        })
    }

    /// Convert every path read from `input`, one per line.
    ///
    /// Lines holding only whitespace are skipped; any other line is used
    /// as a path exactly as given. The first failure aborts the run.
    pub fn run<R: BufRead>(&self, input: R) -> Result<BatchSummary> {
        let mut summary = BatchSummary::default();
        for line in input.lines() {
            let line = line.map_err(MatterFmtError::Io)?;
            if line.trim().is_empty() {
                debug!("skipping blank input line");
                continue;
            }
            summary.results.push(self.convert_file(&line)?);
        }
        Ok(summary)
    }

    /// Convert an explicit list of files, stopping at the first failure
    pub fn run_paths<P: AsRef<Path>>(&self, paths: &[P]) -> Result<BatchSummary> {
        let mut summary = BatchSummary::default();
        for path in paths {
            summary.results.push(self.convert_file(path)?);
        }
        Ok(summary)
    }
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::new()
    }
}
