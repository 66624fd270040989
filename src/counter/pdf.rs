use std::path::Path;

use pdfium_render::prelude::*;

use crate::error::{AppError, Result};

/// Counts the pages of a PDF by loading its document structure with pdfium,
/// binding to a library next to the executable first and the system library
/// second. Any binding or parse failure is an error for the caller to map.
pub fn page_count(path: &Path) -> Result<u32> {
    let binding = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map_err(|e| AppError::PdfLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
    let pdfium = Pdfium::new(binding);

    let document = pdfium
        .load_pdf_from_file(path, None)
        .map_err(|e| AppError::PdfLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    Ok(u32::from(document.pages().len()))
}
