//! @acp:module "Fonts Command"
//! @acp:summary "Show where the worksheet font is looked up and found"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use crate::config::Config;
use crate::layout::PageStyle;
use crate::render::font::{FontResolver, HostFontStore};

/// Options for the fonts command
#[derive(Debug, Clone, Default)]
pub struct FontsOptions {
    /// Extra font directories
    pub font_dirs: Vec<PathBuf>,
}

/// Execute the fonts command
pub fn execute_fonts(options: FontsOptions, config: &Config) -> Result<()> {
    let mut font_dirs = options.font_dirs;
    font_dirs.extend(config.font_dirs.iter().cloned());
    let store = HostFontStore::with_extra_dirs(font_dirs);

    println!("{}", style("Font directories:").bold());
    for dir in store.directories() {
        let marker = if dir.is_dir() {
            style("✓").green()
        } else {
            style("·").dim()
        };
        println!("  {} {}", marker, dir.display());
    }

    let family = PageStyle::default().font_family;
    println!("\n{}", style(format!("{} faces:", family)).bold());
    for (bold, italic) in [(false, false), (true, false), (false, true), (true, true)] {
        let face = store.resolve_typeface(&family, bold, italic);
        match store.locate(&face) {
            Some(path) => println!("  {} {} → {}", style("✓").green(), face, path.display()),
            None => println!("  {} {} not found", style("✗").red(), face),
        }
    }

    Ok(())
}
