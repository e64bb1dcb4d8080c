//! Headless export of generated sheets.
//!
//! Used by `--export-variants` to inspect the remapper output without
//! opening a window.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::resources::sheetstore::SheetStore;

/// Write every sheet whose key starts with `prefix` to `dir/{key}.png`.
///
/// Creates `dir` if needed and returns the written paths in key order.
pub fn write_sheets(
    sheets: &SheetStore,
    prefix: &str,
    dir: impl AsRef<Path>,
) -> Result<Vec<PathBuf>, String> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)
        .map_err(|e| format!("Failed to create directory {}: {}", dir.display(), e))?;

    let mut written = Vec::new();
    for key in sheets.keys().into_iter().filter(|k| k.starts_with(prefix)) {
        let Some(sheet) = sheets.get(key) else {
            continue;
        };
        let path = dir.join(format!("{key}.png"));
        sheet
            .image
            .save(&path)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
        info!("Wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}
