//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Provides implementations for all CLI commands.

pub mod fonts;
pub mod generate;
pub mod prompt;

pub use fonts::{execute_fonts, FontsOptions};
pub use generate::{execute_generate, execute_generate_to, prepare_document, GenerateOptions};
