//! @acp:module "PDF Renderer"
//! @acp:summary "Paginated PDF output with an embedded TrueType face"
//! @acp:domain render
//! @acp:layer output
//!
//! Each [`Page`] becomes one PDF page. Cells are placed on a fixed grid: two
//! columns of the style's column width centred on the page, one row pitch per
//! row pair (problem line plus spacer lines).

use pdf_writer::types::FontFlags;
use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str, TextStr};
use ttf_parser::{name_id, Face, GlyphId};

use crate::error::{MathGenError, Result};
use crate::layout::{Cell, Document, Page, PageStyle};

use super::font::FontResolver;
use super::Renderer;

/// Resource name of the problem font
const FONT_RESOURCE: Name<'static> = Name(b"F1");

/// WinAnsi range covered by the width table
const FIRST_CHAR: u8 = 32;
const LAST_CHAR: u8 = 126;

/// Distance from the top edge to the top of the first row
const TOP_MARGIN_PT: f32 = 60.0;

/// Height of one blank spacer line
const SPACER_LINE_PT: f32 = 12.0;

/// Line height as a multiple of the font size
const LINE_SPACING: f32 = 1.2;

/// Renders documents to PDF using faces from a [`FontResolver`]
pub struct PdfRenderer<'a> {
    fonts: &'a dyn FontResolver,
}

impl<'a> PdfRenderer<'a> {
    pub fn new(fonts: &'a dyn FontResolver) -> Self {
        Self { fonts }
    }
}

impl Renderer for PdfRenderer<'_> {
    fn render(&self, document: &Document) -> Result<Vec<u8>> {
        let style = &document.style;
        let face = self.fonts.resolve_typeface(&style.font_family, false, false);
        let data = self.fonts.font_data(&face)?;
        let metrics = FontMetrics::parse(&face, &data)?;

        tracing::debug!(
            face = %face,
            base_font = %metrics.base_font,
            pages = document.pages.len(),
            "rendering pdf"
        );

        Ok(write_pdf(document, &metrics, &data))
    }
}

/// Metrics pulled from the TrueType face, in PDF glyph units (1/1000 em)
#[derive(Debug, Clone, PartialEq)]
pub struct FontMetrics {
    pub base_font: String,
    pub widths: Vec<f32>,
    pub ascent: f32,
    pub descent: f32,
    pub cap_height: f32,
    pub bbox: [f32; 4],
    pub fixed_pitch: bool,
}

impl FontMetrics {
    pub fn parse(face_name: &str, data: &[u8]) -> Result<Self> {
        let face = Face::parse(data, 0).map_err(|e| MathGenError::FontParse {
            face: face_name.to_string(),
            reason: e.to_string(),
        })?;

        let scale = 1000.0 / f32::from(face.units_per_em());
        let to_units = |v: i16| f32::from(v) * scale;

        let notdef = face.glyph_hor_advance(GlyphId(0)).unwrap_or(0);
        let widths = (FIRST_CHAR..=LAST_CHAR)
            .map(|byte| {
                face.glyph_index(char::from(byte))
                    .and_then(|glyph| face.glyph_hor_advance(glyph))
                    .unwrap_or(notdef)
            })
            .map(|advance| f32::from(advance) * scale)
            .collect();

        let bbox = face.global_bounding_box();
        let ascent = to_units(face.ascender());

        Ok(Self {
            base_font: postscript_name(&face).unwrap_or_else(|| fallback_name(face_name)),
            widths,
            ascent,
            descent: to_units(face.descender()),
            cap_height: face.capital_height().map(to_units).unwrap_or(ascent),
            bbox: [
                to_units(bbox.x_min),
                to_units(bbox.y_min),
                to_units(bbox.x_max),
                to_units(bbox.y_max),
            ],
            fixed_pitch: face.is_monospaced(),
        })
    }
}

fn postscript_name(face: &Face<'_>) -> Option<String> {
    face.names()
        .into_iter()
        .filter(|name| name.name_id == name_id::POST_SCRIPT_NAME && name.is_unicode())
        .find_map(|name| name.to_string())
        .map(|name| sanitize_name(&name))
        .filter(|name| !name.is_empty())
}

fn fallback_name(face_name: &str) -> String {
    let stem = face_name.rsplit_once('.').map_or(face_name, |(stem, _)| stem);
    let name = sanitize_name(stem);
    if name.is_empty() {
        "Courier".to_string()
    } else {
        name
    }
}

fn sanitize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect()
}

/// Page grid derived from the style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub page_width: f32,
    pub page_height: f32,
    pub left_x: f32,
    pub right_x: f32,
    pub first_baseline: f32,
    pub row_pitch: f32,
    pub font_size: f32,
}

impl Geometry {
    pub fn new(style: &PageStyle) -> Self {
        let (page_width, page_height) = style.format.size_pt();
        let column_width = style.column_width_pt();
        let left_x = ((page_width - 2.0 * column_width) / 2.0).max(0.0);
        let line_height = style.font_size_pt * LINE_SPACING;

        Self {
            page_width,
            page_height,
            left_x,
            right_x: left_x + column_width,
            first_baseline: page_height - TOP_MARGIN_PT - style.font_size_pt,
            row_pitch: line_height + SPACER_LINE_PT * style.spacer_lines as f32,
            font_size: style.font_size_pt,
        }
    }

    /// Baseline of a row, counted from the top
    pub fn baseline(&self, row: usize) -> f32 {
        self.first_baseline - self.row_pitch * row as f32
    }
}

/// Content stream drawing one page's cells
pub fn page_content(page: &Page, geometry: &Geometry) -> Vec<u8> {
    let mut content = Content::new();
    content.begin_text();
    content.set_font(FONT_RESOURCE, geometry.font_size);

    for (index, row) in page.rows.iter().enumerate() {
        let y = geometry.baseline(index);
        show_cell(&mut content, &row.left, geometry.left_x, y);
        if let Some(right) = &row.right {
            show_cell(&mut content, right, geometry.right_x, y);
        }
    }

    content.end_text();
    content.finish().to_vec()
}

fn show_cell(content: &mut Content, cell: &Cell, x: f32, y: f32) {
    let text = win_ansi(&cell.text);
    content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
    content.show(Str(&text));
}

/// Printable ASCII passes through; anything else becomes `?`
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match u8::try_from(c) {
            Ok(byte) if (FIRST_CHAR..=LAST_CHAR).contains(&byte) => byte,
            _ => b'?',
        })
        .collect()
}

fn write_pdf(document: &Document, metrics: &FontMetrics, font_file: &[u8]) -> Vec<u8> {
    let geometry = Geometry::new(&document.style);

    let mut alloc = Ref::new(1);
    let catalog_id = alloc.bump();
    let tree_id = alloc.bump();
    let info_id = alloc.bump();
    let font_id = alloc.bump();
    let descriptor_id = alloc.bump();
    let file_id = alloc.bump();
    let page_ids: Vec<(Ref, Ref)> = document
        .pages
        .iter()
        .map(|_| (alloc.bump(), alloc.bump()))
        .collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(tree_id);
    pdf.pages(tree_id)
        .kids(page_ids.iter().map(|(page_id, _)| *page_id))
        .count(page_ids.len() as i32);
    pdf.document_info(info_id)
        .title(TextStr(&document.title))
        .creator(TextStr("mathgen"));

    for (page, (page_id, content_id)) in document.pages.iter().zip(&page_ids) {
        let mut pdf_page = pdf.page(*page_id);
        pdf_page.media_box(Rect::new(0.0, 0.0, geometry.page_width, geometry.page_height));
        pdf_page.parent(tree_id);
        pdf_page.contents(*content_id);
        pdf_page.resources().fonts().pair(FONT_RESOURCE, font_id);
        pdf_page.finish();

        pdf.stream(*content_id, &page_content(page, &geometry));
    }

    let base_font = Name(metrics.base_font.as_bytes());
    // Simple TrueType font dictionary, written by hand
    let mut font = pdf.indirect(font_id).dict();
    font.pair(Name(b"Type"), Name(b"Font"));
    font.pair(Name(b"Subtype"), Name(b"TrueType"));
    font.pair(Name(b"BaseFont"), base_font);
    font.pair(Name(b"FirstChar"), i32::from(FIRST_CHAR));
    font.pair(Name(b"LastChar"), i32::from(LAST_CHAR));
    font.insert(Name(b"Widths"))
        .array()
        .items(metrics.widths.iter().copied());
    font.pair(Name(b"FontDescriptor"), descriptor_id);
    font.pair(Name(b"Encoding"), Name(b"WinAnsiEncoding"));
    font.finish();

    let mut flags = FontFlags::NON_SYMBOLIC;
    if metrics.fixed_pitch {
        flags |= FontFlags::FIXED_PITCH;
    }
    let [x_min, y_min, x_max, y_max] = metrics.bbox;
    pdf.font_descriptor(descriptor_id)
        .name(base_font)
        .flags(flags)
        .bbox(Rect::new(x_min, y_min, x_max, y_max))
        .italic_angle(0.0)
        .ascent(metrics.ascent)
        .descent(metrics.descent)
        .cap_height(metrics.cap_height)
        .stem_v(80.0)
        .font_file2(file_id);

    pdf.stream(file_id, font_file)
        .pair(Name(b"Length1"), font_file.len() as i32);

    pdf.finish()
}
