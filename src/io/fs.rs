use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub fn is_markdown(path: &Path) -> bool {
    path.extension()
        .map(|s| s == "md" || s == "markdown")
        .unwrap_or(false)
}

fn is_output(path: &Path, suffix: &str) -> bool {
    !suffix.is_empty() && path.to_string_lossy().ends_with(suffix)
}

/// Expand command-line paths into the files to convert.
///
/// Files are taken as given. Directories are walked for markdown files,
/// skipping earlier outputs (names ending with `suffix`).
pub fn resolve_paths(paths: &[PathBuf], suffix: &str) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut found: Vec<PathBuf> = WalkDir::new(path)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
                .map(|e| e.into_path())
                .filter(|p| is_markdown(p) && !is_output(p, suffix))
                .collect();
            found.sort();
            files.extend(found);
        } else {
            files.push(path.clone());
        }
    }
    files
}
