//! Dispatch from document category to page-counting strategy.
//!
//! Strategies return `Result`; this module maps every failure to the
//! category's fallback value with a logged reason, so callers always get a
//! plain count and no per-file failure can abort a batch.

use std::path::Path;

use log::warn;

use crate::automation::AutomationBridge;
use crate::classify::Category;
use crate::config::Config;
use crate::error::Result;

pub mod deck;
pub mod office;
pub mod pdf;

/// Computes the page count for a file of the given category. Never fails:
/// strategy errors become the category's fallback value (0, or 1 for
/// spreadsheets). A modern presentation whose primary count is 0 gets exactly
/// one fallback attempt through the automation-backed presentation strategy,
/// and that second result is final even when it is still 0.
pub fn count_pages(
    path: &Path,
    category: Category,
    bridge: &dyn AutomationBridge,
    config: &Config,
) -> u32 {
    let apps = &config.automation;
    match category {
        Category::Pdf => fallback_on_error(pdf::page_count(path), 0, path),
        Category::WordLike => fallback_on_error(
            office::word_page_count(bridge, &apps.word_apps, path),
            0,
            path,
        ),
        Category::SpreadsheetLike => fallback_on_error(
            office::spreadsheet_page_count(bridge, &apps.spreadsheet_apps, path),
            1,
            path,
        ),
        Category::PresentationModern => {
            let primary = fallback_on_error(deck::slide_count(path), 0, path);
            if primary == 0 {
                fallback_on_error(
                    office::presentation_page_count(bridge, &apps.presentation_apps, path),
                    0,
                    path,
                )
            } else {
                primary
            }
        }
        Category::PresentationLegacy => fallback_on_error(
            office::presentation_page_count(bridge, &apps.presentation_apps, path),
            0,
            path,
        ),
        Category::MarkupOrText => 1,
        // Skipped upstream by the walker; kept total for direct callers.
        Category::Unsupported => 0,
    }
}

fn fallback_on_error(result: Result<u32>, fallback: u32, path: &Path) -> u32 {
    match result {
        Ok(pages) => pages,
        Err(e) => {
            warn!("page count failed for {}: {}", path.display(), e);
            fallback
        }
    }
}
