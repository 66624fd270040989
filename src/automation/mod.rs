//! Bridge to external office applications.
//!
//! Some formats only reveal their true pagination once the native application
//! has laid them out, so those strategies drive a desktop application
//! headlessly. The bridge is a trait seam: production code uses
//! [`script::ScriptBridge`], tests substitute a scripted mock.

use std::path::Path;

use log::debug;
use thiserror::Error;

pub mod script;

/// Which page statistic to read from an opened document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageMetric {
    /// Repaginated page count of a word-processing document.
    WordPages,
    /// Sum of every worksheet's configured print pages.
    SheetPagesTotal,
    /// Slide count of a presentation.
    SlideCount,
}

#[derive(Debug, Error)]
pub enum AutomationError {
    #[error("application '{app_id}' is not available: {reason}")]
    Unavailable { app_id: String, reason: String },

    #[error("no usable application, tried: {tried}")]
    NoApplication { tried: String },

    #[error("application '{app_id}' could not open '{path}'")]
    OpenFailed { app_id: String, path: String },

    #[error("page metric failed for '{path}': {reason}")]
    MetricFailed { path: String, reason: String },

    #[error("automation returned something that is not a page count: '{raw}'")]
    BadOutput { raw: String },

    #[error("automation is not supported on this platform")]
    Unsupported,

    #[error("automation IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A document opened by an external application. Sessions are scoped to one
/// strategy invocation: `close` releases the document and quits the
/// application, and implementations also close on `Drop` so the failure path
/// cannot leak an application process.
pub trait DocumentSession {
    fn compute_metric(&mut self, metric: PageMetric) -> Result<u32, AutomationError>;

    /// Idempotent; called explicitly on every exit path and again on `Drop`.
    fn close(&mut self) -> Result<(), AutomationError>;
}

pub trait AutomationBridge {
    /// Launch the application identified by `app_id` and open `path` in it,
    /// without showing a window.
    fn open_document(
        &self,
        app_id: &str,
        path: &Path,
    ) -> Result<Box<dyn DocumentSession + '_>, AutomationError>;
}

/// Tries each application identifier in priority order, returning the first
/// session that opens. Inability to instantiate any identifier is the
/// "no usable application" condition, fatal to this strategy only.
pub fn open_first_available<'a>(
    bridge: &'a dyn AutomationBridge,
    app_ids: &[String],
    path: &Path,
) -> Result<Box<dyn DocumentSession + 'a>, AutomationError> {
    for app_id in app_ids {
        match bridge.open_document(app_id, path) {
            Ok(session) => {
                debug!("opened {} with {}", path.display(), app_id);
                return Ok(session);
            }
            Err(e) => debug!("{} did not open {}: {}", app_id, path.display(), e),
        }
    }
    Err(AutomationError::NoApplication {
        tried: app_ids.join(", "),
    })
}
