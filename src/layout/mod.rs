//! @acp:module "Page Layout"
//! @acp:summary "Document model: pages of two-column row pairs plus presentation constants"
//! @acp:domain layout
//! @acp:layer model
//!
//! Renderers never compute positions from problem data. They walk a
//! [`Document`]: pages in order, rows in order, left cell then right cell,
//! each cell printing its problem line followed by a blank spacer line.

pub mod builder;

use serde::{Deserialize, Serialize};

pub use builder::{build_document, layout};

/// Problems per page by default (two columns of twenty)
pub const DEFAULT_PER_PAGE: usize = 40;

/// Rows per column by default
pub const DEFAULT_PER_COLUMN: usize = 20;

/// Page capacity settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSpec {
    /// Problems per page
    #[serde(default = "default_per_page")]
    pub per_page: usize,

    /// Problems per column, i.e. rows per page
    #[serde(default = "default_per_column")]
    pub per_column: usize,
}

fn default_per_page() -> usize {
    DEFAULT_PER_PAGE
}

fn default_per_column() -> usize {
    DEFAULT_PER_COLUMN
}

impl Default for LayoutSpec {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            per_column: DEFAULT_PER_COLUMN,
        }
    }
}

impl LayoutSpec {
    pub fn new(per_page: usize, per_column: usize) -> Self {
        Self {
            per_page,
            per_column,
        }
    }

    /// Cells that actually fit on one page: bounded by both settings, never zero
    pub fn page_capacity(&self) -> usize {
        self.per_page.min(self.per_column.saturating_mul(2)).max(1)
    }
}

/// Paper size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageFormat {
    #[default]
    Letter,
    A4,
}

impl PageFormat {
    /// Width and height in PostScript points
    pub fn size_pt(&self) -> (f32, f32) {
        match self {
            PageFormat::Letter => (612.0, 792.0),
            PageFormat::A4 => (595.28, 841.89),
        }
    }
}

/// Presentation constants shared by all renderers
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageStyle {
    pub format: PageFormat,
    pub column_width_cm: f32,
    pub font_family: String,
    pub font_size_pt: f32,
    /// Blank lines printed under every problem
    pub spacer_lines: usize,
}

impl Default for PageStyle {
    fn default() -> Self {
        Self {
            format: PageFormat::Letter,
            column_width_cm: 9.0,
            font_family: "Courier".to_string(),
            font_size_pt: 18.0,
            spacer_lines: 1,
        }
    }
}

impl PageStyle {
    pub fn column_width_pt(&self) -> f32 {
        self.column_width_cm * 72.0 / 2.54
    }
}

/// One problem slot in a column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub text: String,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Left and right cell sharing a row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowPair {
    pub left: Cell,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<Cell>,
}

impl RowPair {
    /// Cells in reading order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        std::iter::once(&self.left).chain(self.right.as_ref())
    }

    pub fn cell_count(&self) -> usize {
        1 + usize::from(self.right.is_some())
    }
}

/// One printed page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub rows: Vec<RowPair>,
    /// A page break follows this page (false only on the last page)
    pub page_break_after: bool,
}

impl Page {
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(RowPair::cell_count).sum()
    }
}

/// Everything a renderer needs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub title: String,
    pub style: PageStyle,
    pub pages: Vec<Page>,
}

impl Document {
    /// Total number of cells across all pages
    pub fn cell_count(&self) -> usize {
        self.pages.iter().map(Page::cell_count).sum()
    }

    /// Cell texts in reading order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.pages
            .iter()
            .flat_map(|page| page.rows.iter())
            .flat_map(RowPair::cells)
            .map(|cell| cell.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_capacity_defaults() {
        assert_eq!(LayoutSpec::default().page_capacity(), 40);
    }

    #[test]
    fn test_page_capacity_bounded_by_columns() {
        assert_eq!(LayoutSpec::new(100, 10).page_capacity(), 20);
        assert_eq!(LayoutSpec::new(15, 10).page_capacity(), 15);
        assert_eq!(LayoutSpec::new(0, 0).page_capacity(), 1);
    }

    #[test]
    fn test_column_width_in_points() {
        let style = PageStyle::default();
        assert!((style.column_width_pt() - 255.118).abs() < 0.01);
    }

    #[test]
    fn test_layout_spec_deserializes_with_defaults() {
        let spec: LayoutSpec = serde_json::from_str(r#"{"perColumn": 10}"#).unwrap();
        assert_eq!(spec, LayoutSpec::new(40, 10));
    }
}
