//! @acp:module "Text Renderer"
//! @acp:summary "Plain-text worksheet output with form-feed page breaks"
//! @acp:domain render
//! @acp:layer output

use crate::error::Result;
use crate::layout::{Document, RowPair};

use super::Renderer;

/// Characters reserved for the left column
pub const TEXT_COLUMN_WIDTH: usize = 24;

/// Form feed, the page break of plain-text printing
const PAGE_BREAK: char = '\u{c}';

/// Renders the document as aligned monospace text
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, document: &Document) -> Result<Vec<u8>> {
        Ok(render_text(document).into_bytes())
    }
}

/// Render a document as text
pub fn render_text(document: &Document) -> String {
    let mut output = String::new();

    for page in &document.pages {
        for row in &page.rows {
            output.push_str(&format_row(row));
            output.push('\n');
            for _ in 0..document.style.spacer_lines {
                output.push('\n');
            }
        }
        if page.page_break_after {
            output.push(PAGE_BREAK);
            output.push('\n');
        }
    }

    output
}

fn format_row(row: &RowPair) -> String {
    match &row.right {
        Some(right) => {
            let line = format!(
                "{:<width$}{}",
                row.left.text,
                right.text,
                width = TEXT_COLUMN_WIDTH
            );
            line.trim_end().to_string()
        }
        None => row.left.text.trim_end().to_string(),
    }
}
