//! Strategies that drive an external office application through the
//! automation bridge. Each invocation opens one scoped session via the
//! priority-ordered identifier trial and releases it on every exit path.

use std::path::Path;

use crate::automation::{open_first_available, AutomationBridge, PageMetric};
use crate::error::Result;

/// Page count of a word-processing document: open invisibly, repaginate,
/// read the page statistic (the bridge falls back to the stored document
/// property when the statistic fails). A successful count below 1 reads as 1.
pub fn word_page_count(
    bridge: &dyn AutomationBridge,
    app_ids: &[String],
    path: &Path,
) -> Result<u32> {
    let pages = run_metric(bridge, app_ids, path, PageMetric::WordPages)?;
    Ok(pages.max(1))
}

/// Total print pages of a workbook, summed over every worksheet with each
/// sheet contributing at least 1.
pub fn spreadsheet_page_count(
    bridge: &dyn AutomationBridge,
    app_ids: &[String],
    path: &Path,
) -> Result<u32> {
    let pages = run_metric(bridge, app_ids, path, PageMetric::SheetPagesTotal)?;
    Ok(pages.max(1))
}

/// Slide count of a presentation opened without a window and with alerts
/// suppressed. Also serves as the fallback for modern presentations whose
/// container parse came up empty.
pub fn presentation_page_count(
    bridge: &dyn AutomationBridge,
    app_ids: &[String],
    path: &Path,
) -> Result<u32> {
    let pages = run_metric(bridge, app_ids, path, PageMetric::SlideCount)?;
    Ok(pages.max(1))
}

fn run_metric(
    bridge: &dyn AutomationBridge,
    app_ids: &[String],
    path: &Path,
    metric: PageMetric,
) -> Result<u32> {
    let mut session = open_first_available(bridge, app_ids, path)?;
    // Close before propagating so the failure path releases the session too.
    let computed = session.compute_metric(metric);
    let closed = session.close();
    let pages = computed?;
    closed?;
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::automation::mock::{MockBridge, MockOutcome};
    use crate::error::AppError;

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn word_count_is_clamped_to_at_least_one() {
        let bridge = MockBridge::new(&["Word.Application"], MockOutcome::Pages(0));
        let pages =
            word_page_count(&bridge, &ids(&["Word.Application"]), Path::new("a.doc")).unwrap();
        assert_eq!(pages, 1);
    }

    #[test]
    fn spreadsheet_count_passes_the_sheet_total_through() {
        let bridge = MockBridge::new(&["Excel.Application"], MockOutcome::Pages(6));
        let pages = spreadsheet_page_count(
            &bridge,
            &ids(&["Excel.Application", "Et.Application"]),
            Path::new("data.xlsx"),
        )
        .unwrap();
        assert_eq!(pages, 6);
    }

    #[test]
    fn metric_failure_still_releases_the_session() {
        let bridge = MockBridge::new(&["PowerPoint.Application"], MockOutcome::Fail("corrupt"));
        let err = presentation_page_count(
            &bridge,
            &ids(&["PowerPoint.Application"]),
            Path::new("old.ppt"),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Automation(_)));
        assert_eq!(bridge.opened.get(), 1);
        assert_eq!(bridge.closed.get(), 1);
    }

    #[test]
    fn no_available_application_is_an_error() {
        let bridge = MockBridge::new(&[], MockOutcome::Pages(4));
        let err = word_page_count(
            &bridge,
            &ids(&["Word.Application", "Wps.Application"]),
            Path::new("a.doc"),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Automation(_)));
        assert_eq!(bridge.opened.get(), 0);
    }
}
