//! Builds the new filename and performs the in-place rename.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Local};

use crate::automation::AutomationBridge;
use crate::classify::{split_name, Category};
use crate::config::Config;
use crate::counter;
use crate::error::{AppError, Result};

/// Everything needed to name one file, computed immediately before the
/// rename and discarded after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub base_name: String,
    /// Original extension including its leading dot, case preserved.
    pub extension: String,
    /// Local-time modification date, 8 digits.
    pub modified_date: String,
    pub page_count: u32,
}

impl FileRecord {
    pub fn new_filename(&self) -> String {
        format!(
            "{}-{}-{}{}",
            self.modified_date, self.base_name, self.page_count, self.extension
        )
    }
}

/// Last-modified date of a file as `YYYYMMDD` in local time.
pub fn modified_date(path: &Path) -> Result<String> {
    let mtime = fs::metadata(path)?.modified()?;
    let local: DateTime<Local> = mtime.into();
    Ok(local.format("%Y%m%d").to_string())
}

/// Renames one regular file within its directory to
/// `{date}-{base_name}-{page_count}{extension}` and returns the new name.
///
/// An already-existing target is a rename failure; nothing is overwritten
/// and no alternative name is tried.
pub fn rename_in_place(
    dir: &Path,
    filename: &str,
    category: Category,
    bridge: &dyn AutomationBridge,
    config: &Config,
) -> Result<String> {
    let old_path = dir.join(filename);
    let (base_name, extension) = split_name(filename);

    let record = FileRecord {
        base_name: base_name.to_string(),
        extension: extension.to_string(),
        modified_date: modified_date(&old_path)?,
        page_count: counter::count_pages(&old_path, category, bridge, config),
    };

    let new_filename = record.new_filename();
    let new_path = dir.join(&new_filename);

    // fs::rename would silently replace an existing target on some
    // platforms; a collision has to surface as a per-file failure instead.
    if new_path.exists() {
        return Err(AppError::Rename {
            from: filename.to_string(),
            to: new_filename,
            reason: "target already exists".to_string(),
        });
    }

    fs::rename(&old_path, &new_path).map_err(|e| AppError::Rename {
        from: filename.to_string(),
        to: new_filename.clone(),
        reason: e.to_string(),
    })?;

    Ok(new_filename)
}
