#![forbid(unsafe_code)]

//! @acp:module "MathGen Library"
//! @acp:summary "Randomized practice problems laid out as printable worksheets"
//! @acp:domain generation
//! @acp:layer api
//! @acp:stability stable
//!
//! # MathGen
//!
//! Generates arithmetic and algebra practice problems within a numeric range
//! and lays them out two columns to a page.
//!
//! ## Features
//!
//! - **Bounded Sampling**: Rejection sampling with an attempt cap, so
//!   impossible ranges fail instead of hanging
//! - **Three Modes**: Addition/subtraction, multiplication/division, one-unknown algebra
//! - **Renderer-agnostic Layout**: Pages of row pairs, rendered to PDF, text or JSON
//!
//! ## Example
//!
//! ```rust,no_run
//! use mathgen::{build_document, render, HostFontStore, LayoutSpec, OperationMode, OutputFormat, Range};
//!
//! fn main() -> anyhow::Result<()> {
//!     let range = Range::parse("0-20")?;
//!     let problems = mathgen::problem::generate(OperationMode::AddSub, range, 80)?;
//!
//!     let document = build_document(&problems, LayoutSpec::default());
//!     let bytes = render(&document, OutputFormat::Pdf, &HostFontStore::system())?;
//!     std::fs::write("MathSums.pdf", bytes)?;
//!
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod layout;
pub mod problem;
pub mod render;

// Re-exports
pub use config::Config;
pub use error::{MathGenError, Result};
pub use layout::{build_document, layout, Document, LayoutSpec, Page, RowPair};
pub use problem::{GenerationError, OperationMode, Problem, ProblemGenerator, ProblemSet, Range};
pub use render::{render, FontResolver, HostFontStore, OutputFormat, Renderer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
