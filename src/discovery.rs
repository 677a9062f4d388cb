//! File system discovery for STL files.
//!
//! `check` accepts files and directories; directories are walked
//! recursively and filtered to `.stl` files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Expand files and directories into the list of STL files to process.
///
/// Files are taken as given (whatever their extension - an explicit
/// argument wins over the filter). Directories are walked recursively and
/// contribute their `.stl` files. The result is sorted and de-duplicated
/// so output order is stable.
pub fn discover_stl_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
            {
                if entry.path().is_dir() {
                    continue;
                }
                if is_stl_file(entry.path()) {
                    files.push(entry.path().to_path_buf());
                }
            }
        } else {
            files.push(path.clone());
        }
    }

    files.sort();
    files.dedup();
    files
}

/// Whether a path looks like an STL file (case-insensitive extension).
pub fn is_stl_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map_or(false, |e| e.eq_ignore_ascii_case("stl"))
}
