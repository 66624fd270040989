//! Maps file extensions to document categories.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Document category, selecting the page-counting strategy for a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Pdf,
    WordLike,
    SpreadsheetLike,
    PresentationModern,
    PresentationLegacy,
    MarkupOrText,
    Unsupported,
}

const PDF_EXTS: &[&str] = &[".pdf"];
const WORD_EXTS: &[&str] = &[
    ".doc", ".docx", ".wps", ".wpt", ".dot", ".rtf", ".dotx", ".docm", ".dotm",
];
const SPREADSHEET_EXTS: &[&str] = &[
    ".xls", ".xlt", ".xlsx", ".xlsm", ".xltx", ".xltm", ".xlam", ".xla", ".csv", ".prn", ".dif",
    ".et",
];
const PRESENTATION_MODERN_EXTS: &[&str] = &[".pptx", ".pptm", ".ppsm", ".potm", ".ppsx", ".potx"];
const PRESENTATION_LEGACY_EXTS: &[&str] = &[".ppt", ".pot", ".pps", ".dpt", ".dps", ".ett"];
const MARKUP_EXTS: &[&str] = &[
    ".xml", ".mht", ".mhtml", ".html", ".htm", ".dbf", ".rtt", ".txt",
];

/// The process-wide extension table, built once and passed explicitly to the
/// classifier's callers.
pub static EXTENSIONS: Lazy<ExtensionTable> = Lazy::new(ExtensionTable::new);

/// Immutable mapping from lowercased extension (leading dot included) to
/// category. Extensions are disjoint across categories.
#[derive(Debug)]
pub struct ExtensionTable {
    by_extension: HashMap<&'static str, Category>,
}

impl ExtensionTable {
    fn new() -> Self {
        let sets: [(&[&str], Category); 6] = [
            (PDF_EXTS, Category::Pdf),
            (WORD_EXTS, Category::WordLike),
            (SPREADSHEET_EXTS, Category::SpreadsheetLike),
            (PRESENTATION_MODERN_EXTS, Category::PresentationModern),
            (PRESENTATION_LEGACY_EXTS, Category::PresentationLegacy),
            (MARKUP_EXTS, Category::MarkupOrText),
        ];
        let mut by_extension = HashMap::new();
        for (extensions, category) in sets {
            for extension in extensions {
                by_extension.insert(*extension, category);
            }
        }
        Self { by_extension }
    }

    /// Classifies a filename by its extension, case-insensitively.
    /// Filenames without an extension are `Unsupported`.
    pub fn classify(&self, filename: &str) -> Category {
        match extension_of(filename) {
            Some(extension) => self
                .by_extension
                .get(extension.to_ascii_lowercase().as_str())
                .copied()
                .unwrap_or(Category::Unsupported),
            None => Category::Unsupported,
        }
    }

    pub fn len(&self) -> usize {
        self.by_extension.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_extension.is_empty()
    }
}

/// The extension of a filename including its leading dot, original case
/// preserved. Dotfiles and names ending in a dot have no extension.
pub fn extension_of(filename: &str) -> Option<&str> {
    let dot = filename.rfind('.')?;
    if dot == 0 || dot == filename.len() - 1 {
        return None;
    }
    Some(&filename[dot..])
}

/// Splits a filename into base name and extension. The extension keeps its
/// dot and case; a filename without one yields an empty extension.
pub fn split_name(filename: &str) -> (&str, &str) {
    match extension_of(filename) {
        Some(extension) => (&filename[..filename.len() - extension.len()], extension),
        None => (filename, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_declared_extension_is_recognized() {
        for (extensions, category) in [
            (PDF_EXTS, Category::Pdf),
            (WORD_EXTS, Category::WordLike),
            (SPREADSHEET_EXTS, Category::SpreadsheetLike),
            (PRESENTATION_MODERN_EXTS, Category::PresentationModern),
            (PRESENTATION_LEGACY_EXTS, Category::PresentationLegacy),
            (MARKUP_EXTS, Category::MarkupOrText),
        ] {
            for extension in extensions {
                let name = format!("file{extension}");
                assert_eq!(EXTENSIONS.classify(&name), category, "{name}");
            }
        }
    }

    #[test]
    fn extension_sets_are_disjoint() {
        let declared = PDF_EXTS.len()
            + WORD_EXTS.len()
            + SPREADSHEET_EXTS.len()
            + PRESENTATION_MODERN_EXTS.len()
            + PRESENTATION_LEGACY_EXTS.len()
            + MARKUP_EXTS.len();
        // A duplicate across sets would collapse in the map.
        assert_eq!(EXTENSIONS.len(), declared);
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(EXTENSIONS.classify("REPORT.PDF"), Category::Pdf);
        assert_eq!(EXTENSIONS.classify("Slides.PpTx"), Category::PresentationModern);
        assert_eq!(EXTENSIONS.classify("data.XLSX"), Category::SpreadsheetLike);
    }

    #[test]
    fn unknown_extensions_are_unsupported() {
        assert_eq!(EXTENSIONS.classify("file.weird"), Category::Unsupported);
        assert_eq!(EXTENSIONS.classify("no_extension"), Category::Unsupported);
        assert_eq!(EXTENSIONS.classify(".gitignore"), Category::Unsupported);
        assert_eq!(EXTENSIONS.classify("trailing."), Category::Unsupported);
    }

    #[test]
    fn split_keeps_extension_case_and_dot() {
        assert_eq!(split_name("Report.PDF"), ("Report", ".PDF"));
        assert_eq!(split_name("archive.tar.gz"), ("archive.tar", ".gz"));
        assert_eq!(split_name("plain"), ("plain", ""));
    }
}
