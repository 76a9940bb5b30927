//! Writing converted documents
//!
//! Output goes next to the source as `<source><suffix>`; the source file
//! itself is never touched.

use crate::error::{MatterFmtError, Result};
use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Suffix appended to the source path to form the output path
pub const DEFAULT_SUFFIX: &str = ".dst.md";

/// Configuration for the writer
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Use atomic writes (write to temp file first, then rename)
    pub atomic_writes: bool,
    /// Permission bits applied to written files (Unix only)
    pub file_mode: Option<u32>,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            atomic_writes: true,
            file_mode: Some(0o664),
        }
    }
}

/// Output path for `source`: the suffix is appended to the full file name
pub fn destination_path<P: AsRef<Path>>(source: P, suffix: &str) -> PathBuf {
    let mut dest = OsString::from(source.as_ref().as_os_str());
    dest.push(suffix);
    PathBuf::from(dest)
}

/// Writes converted documents to disk
#[derive(Debug, Clone, Default)]
pub struct FrontMatterWriter {
    config: WriterConfig,
}

impl FrontMatterWriter {
    /// Create a new writer with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new writer with custom configuration
    pub fn with_config(config: WriterConfig) -> Self {
        Self { config }
    }

    /// Write `content` to `path`, replacing any previous output
    pub fn write<P: AsRef<Path>>(&self, path: P, content: &str) -> Result<()> {
        let path = path.as_ref();

        if self.config.atomic_writes {
            self.write_atomic(path, content)?;
        } else {
            fs::write(path, content).map_err(|e| MatterFmtError::write(path, e))?;
        }

        self.apply_mode(path)
    }

    fn write_atomic(&self, path: &Path, content: &str) -> Result<()> {
        let parent_dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut temp_file =
            NamedTempFile::new_in(parent_dir).map_err(|e| MatterFmtError::write(path, e))?;
        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| MatterFmtError::write(path, e))?;
        temp_file
            .flush()
            .map_err(|e| MatterFmtError::write(path, e))?;

        temp_file
            .persist(path)
            .map_err(|e| MatterFmtError::write(path, e.error))?;

        Ok(())
    }

    #[cfg(unix)]
    fn apply_mode(&self, path: &Path) -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        if let Some(mode) = self.config.file_mode {
            fs::set_permissions(path, fs::Permissions::from_mode(mode))
                .map_err(|e| MatterFmtError::write(path, e))?;
        }
        Ok(())
    }

    #[cfg(not(unix))]
    fn apply_mode(&self, _path: &Path) -> Result<()> {
        Ok(())
    }

    /// Get writer configuration
    pub fn config(&self) -> &WriterConfig {
        &self.config
    }
}
