//! Recursive one-pass batch transform over a folder tree.

use std::path::Path;

use log::{debug, info, warn};
use walkdir::WalkDir;

use crate::automation::AutomationBridge;
use crate::classify::{Category, ExtensionTable};
use crate::config::Config;
use crate::rename;

/// Per-run tallies for the completion report.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub renamed: u64,
    pub skipped: u64,
    pub failed: u64,
}

/// Visits every regular file under `root`, classifies its extension, and
/// renames recognized files in place. Unsupported extensions are skipped
/// silently; every per-file failure is logged and the walk continues.
///
/// Directory entries are sorted so each directory's file list is captured
/// before its renames happen; a renamed file is never visited twice in one
/// run.
pub fn walk(
    root: &Path,
    table: &ExtensionTable,
    bridge: &dyn AutomationBridge,
    config: &Config,
) -> RunSummary {
    let mut summary = RunSummary::default();

    for entry in WalkDir::new(root)
        .follow_links(config.walk.follow_links)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("walk error under {}: {}", root.display(), e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(filename) = entry.file_name().to_str() else {
            debug!("skipping non-unicode filename {:?}", entry.file_name());
            summary.skipped += 1;
            continue;
        };

        let category = table.classify(filename);
        if category == Category::Unsupported {
            debug!("skipping {}", entry.path().display());
            summary.skipped += 1;
            continue;
        }

        let Some(dir) = entry.path().parent() else {
            summary.skipped += 1;
            continue;
        };

        match rename::rename_in_place(dir, filename, category, bridge, config) {
            Ok(new_name) => {
                info!("renamed {} -> {}", entry.path().display(), new_name);
                summary.renamed += 1;
            }
            Err(e) => {
                warn!("rename failed for {}: {}", entry.path().display(), e);
                summary.failed += 1;
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::automation::mock::{MockBridge, MockOutcome};
    use crate::classify::EXTENSIONS;
    use crate::rename::modified_date;

    #[test]
    fn walk_renames_recognized_files_and_skips_the_rest() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("notes.txt"), "hello").unwrap();
        fs::write(dir.path().join("data.weird"), "???").unwrap();
        let date = modified_date(&dir.path().join("sub").join("notes.txt")).unwrap();

        let bridge = MockBridge::new(&[], MockOutcome::Pages(9));
        let config = Config::default();
        let summary = walk(dir.path(), &EXTENSIONS, &bridge, &config);

        assert_eq!(
            summary,
            RunSummary {
                renamed: 1,
                skipped: 1,
                failed: 0
            }
        );
        assert!(dir
            .path()
            .join("sub")
            .join(format!("{date}-notes-1.txt"))
            .exists());
        // Unsupported files are left untouched.
        assert!(dir.path().join("data.weird").exists());
    }

    #[test]
    fn second_run_renames_again() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("notes.txt"), "hello").unwrap();
        let date = modified_date(&dir.path().join("notes.txt")).unwrap();

        let bridge = MockBridge::new(&[], MockOutcome::Pages(9));
        let config = Config::default();

        let first = walk(dir.path(), &EXTENSIONS, &bridge, &config);
        assert_eq!(first.renamed, 1);
        let once = format!("{date}-notes-1.txt");
        assert!(dir.path().join(&once).exists());

        // No "already processed" marker exists; the new name is prefixed
        // again from the unchanged file.
        let second = walk(dir.path(), &EXTENSIONS, &bridge, &config);
        assert_eq!(second.renamed, 1);
        let twice = format!("{date}-{date}-notes-1-1.txt");
        assert!(dir.path().join(&twice).exists());
        assert!(!dir.path().join(&once).exists());
    }

    #[test]
    fn collision_is_counted_as_failed_and_the_walk_continues() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        let date = modified_date(&dir.path().join("a.txt")).unwrap();
        // A directory squatting on the target name blocks the rename.
        fs::create_dir(dir.path().join(format!("{date}-a-1.txt"))).unwrap();

        let bridge = MockBridge::new(&[], MockOutcome::Pages(9));
        let config = Config::default();
        let summary = walk(dir.path(), &EXTENSIONS, &bridge, &config);

        // a.txt collides; b.txt still gets renamed.
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.renamed, 1);
        assert!(dir.path().join("a.txt").exists());
        assert!(!dir.path().join("b.txt").exists());
    }
}
