//! @acp:module "Rendering"
//! @acp:summary "Document renderers (PDF, text, JSON) and font resolution"
//! @acp:domain render
//! @acp:layer output
//!
//! Renderers are consumers of a finished [`Document`]; none of them decide
//! what goes on which page.

pub mod font;
pub mod pdf;
pub mod text;

use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;

use crate::error::Result;
use crate::layout::Document;

pub use font::{FontResolver, HostFontStore};
pub use pdf::PdfRenderer;
pub use text::TextRenderer;

/// Turns a laid-out document into file bytes
pub trait Renderer {
    fn render(&self, document: &Document) -> Result<Vec<u8>>;
}

/// Document as pretty-printed JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, document: &Document) -> Result<Vec<u8>> {
        let mut bytes = serde_json::to_vec_pretty(document)?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}

/// Output format for the worksheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Pdf,
    Text,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Pdf => "pdf",
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }

    /// Whether the bytes are safe to print to a terminal
    pub fn is_textual(&self) -> bool {
        !matches!(self, OutputFormat::Pdf)
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(OutputFormat::Pdf),
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown output format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Render a document in the requested format
///
/// Only PDF output consults the font resolver.
pub fn render(
    document: &Document,
    format: OutputFormat,
    fonts: &dyn FontResolver,
) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Pdf => PdfRenderer::new(fonts).render(document),
        OutputFormat::Text => TextRenderer.render(document),
        OutputFormat::Json => JsonRenderer.render(document),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{layout, PageStyle};
    use crate::problem::Problem;

    #[test]
    fn test_output_format_parse() {
        assert_eq!("pdf".parse::<OutputFormat>().unwrap(), OutputFormat::Pdf);
        assert_eq!("TXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("docx".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_json_renderer_lists_pages() {
        let problems = vec![Problem::new("1 + 1 = "), Problem::new("2 - 1 = "), Problem::new("3 + 0 = ")];
        let document = Document {
            title: "t".to_string(),
            style: PageStyle::default(),
            pages: layout(&problems, 2, 1),
        };
        let bytes = JsonRenderer.render(&document).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value["pages"].as_array().unwrap().len(), 2);
        assert_eq!(value["pages"][0]["pageBreakAfter"], true);
        assert_eq!(value["pages"][1]["pageBreakAfter"], false);
        assert_eq!(value["pages"][1]["rows"][0]["left"]["text"], "3 + 0 = ");
        assert!(value["pages"][1]["rows"][0].get("right").is_none());
        assert_eq!(value["style"]["fontSizePt"], 18.0);
    }
}
