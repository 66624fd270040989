use std::fmt::Display;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use crate::error::{AppError, Result};

const PRESENTATION_PART: &str = "ppt/presentation.xml";

/// Counts the slides of a modern (XML container) presentation without any
/// external application: the container is a zip archive whose
/// `ppt/presentation.xml` lists one `sldId` element per slide.
pub fn slide_count(path: &Path) -> Result<u32> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file).map_err(|e| container_error(path, e))?;

    let mut xml = String::new();
    archive
        .by_name(PRESENTATION_PART)
        .map_err(|e| container_error(path, e))?
        .read_to_string(&mut xml)?;

    count_slide_ids(&xml).map_err(|e| container_error(path, e))
}

fn count_slide_ids(xml: &str) -> std::result::Result<u32, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut count = 0;
    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"sldId" => {
                count += 1;
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(count)
}

fn container_error(path: &Path, err: impl Display) -> AppError {
    AppError::Container {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
