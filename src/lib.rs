//! pagestamp renames every recognized document file under a folder tree to
//! `{YYYYMMDD}-{base_name}-{page_count}{extension}`, where the date comes
//! from the file's modification time and the page count from a per-category
//! counting strategy. Formats with a native page model (PDF, XML-container
//! presentations) are parsed directly; formats whose pagination only the
//! native application knows are counted by driving that application through
//! the automation bridge.

pub mod automation;
pub mod classify;
pub mod config;
pub mod counter;
pub mod error;
pub mod rename;
pub mod walker;

pub use classify::{Category, ExtensionTable, EXTENSIONS};
pub use config::Config;
pub use error::{AppError, Result};
pub use walker::{walk, RunSummary};
