//! Paginated copy of a text report.

use crate::error::{Result, ReviewError};
use crate::util::expand_tabs;
use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::debug;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 15.0;
const FONT_SIZE: f32 = 9.0;
const LINE_PITCH: f32 = 4.0;
const TAB_WIDTH: usize = 4;

// Courier advances 0.6 em, so 9pt gives 1.905 mm per glyph across 180 mm.
const COLUMNS: usize = 94;
// 267 mm of printable height at LINE_PITCH.
const LINES_PER_PAGE: usize = 66;

pub fn pdf_path(text_path: &Path) -> PathBuf {
    text_path.with_extension("pdf")
}

/// Split report text into pages of printable lines.
pub fn paginate(text: &str) -> Vec<Vec<String>> {
    let mut lines = Vec::new();
    for raw in text.lines() {
        let expanded = expand_tabs(raw, TAB_WIDTH);
        let chars: Vec<char> = expanded.chars().collect();
        if chars.is_empty() {
            lines.push(String::new());
            continue;
        }
        for chunk in chars.chunks(COLUMNS) {
            lines.push(chunk.iter().collect());
        }
    }

    if lines.is_empty() {
        return vec![Vec::new()];
    }
    lines.chunks(LINES_PER_PAGE).map(<[String]>::to_vec).collect()
}

/// Write `<name>.pdf` next to the text report and return its path.
pub fn convert_to_pdf(text_path: &Path) -> Result<PathBuf> {
    let text = fs::read_to_string(text_path)?;
    let target = pdf_path(text_path);
    let title = text_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let (doc, first_page, first_layer) =
        PdfDocument::new(&title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Report");
    let font = doc
        .add_builtin_font(BuiltinFont::Courier)
        .map_err(|e| ReviewError::Pdf(e.to_string()))?;

    let pages = paginate(&text);
    for (index, lines) in pages.iter().enumerate() {
        let (page, layer) = if index == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Report")
        };
        let layer = doc.get_page(page).get_layer(layer);

        for (row, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let y = PAGE_HEIGHT - MARGIN - LINE_PITCH * (row as f32 + 1.0);
            layer.use_text(line.as_str(), FONT_SIZE, Mm(MARGIN), Mm(y), &font);
        }
    }

    // Render fully in memory so a failed save never leaves a truncated sibling.
    let mut writer = BufWriter::new(Vec::new());
    doc.save(&mut writer)
        .map_err(|e| ReviewError::Pdf(e.to_string()))?;
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    fs::write(&target, bytes)?;

    debug!(path = %target.display(), pages = pages.len(), "wrote pdf");
    Ok(target)
}
