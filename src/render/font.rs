//! @acp:module "Font Resolution"
//! @acp:summary "Typeface-to-file mapping and host font store lookup"
//! @acp:domain render
//! @acp:layer service
//!
//! The resolver is handed to the PDF renderer explicitly; nothing here is
//! process-global.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{MathGenError, Result};

/// Face used when a family is unknown
pub const DEFAULT_FACE: &str = "cour.ttf";

/// How deep to look below each font directory
const MAX_SEARCH_DEPTH: usize = 5;

/// Resolves a typeface to a font file and loads its bytes
pub trait FontResolver {
    /// Map a family name and style to a face file name
    fn resolve_typeface(&self, family: &str, bold: bool, italic: bool) -> String;

    /// Read the font file for a face returned by [`FontResolver::resolve_typeface`]
    fn font_data(&self, face: &str) -> Result<Vec<u8>>;
}

/// Courier faces by style; any other family falls back to regular Courier
pub fn courier_face(family: &str, bold: bool, italic: bool) -> &'static str {
    let is_courier =
        family.eq_ignore_ascii_case("Courier") || family.eq_ignore_ascii_case("Courier New");
    if !is_courier {
        return DEFAULT_FACE;
    }
    match (bold, italic) {
        (true, true) => "courbi.ttf",
        (true, false) => "courbd.ttf",
        (false, true) => "couri.ttf",
        (false, false) => "cour.ttf",
    }
}

/// Looks faces up in the host's font directories
#[derive(Debug, Clone)]
pub struct HostFontStore {
    dirs: Vec<PathBuf>,
}

impl HostFontStore {
    /// Search only the given directories, in order
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }

    /// Platform font directories
    pub fn system() -> Self {
        Self::new(system_font_dirs())
    }

    /// Extra directories first, then the platform ones
    pub fn with_extra_dirs(extra: impl IntoIterator<Item = PathBuf>) -> Self {
        let mut dirs: Vec<PathBuf> = extra.into_iter().collect();
        for dir in system_font_dirs() {
            if !dirs.contains(&dir) {
                dirs.push(dir);
            }
        }
        Self::new(dirs)
    }

    pub fn directories(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Find a face file by name (case-insensitive) below the font directories
    pub fn locate(&self, face: &str) -> Option<PathBuf> {
        self.dirs
            .iter()
            .filter(|dir| dir.is_dir())
            .find_map(|dir| find_in(dir, face))
    }
}

fn find_in(dir: &Path, face: &str) -> Option<PathBuf> {
    WalkDir::new(dir)
        .follow_links(true)
        .max_depth(MAX_SEARCH_DEPTH)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .find(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.eq_ignore_ascii_case(face))
        })
        .map(|entry| entry.into_path())
}

impl FontResolver for HostFontStore {
    fn resolve_typeface(&self, family: &str, bold: bool, italic: bool) -> String {
        courier_face(family, bold, italic).to_string()
    }

    fn font_data(&self, face: &str) -> Result<Vec<u8>> {
        let path = self.locate(face).ok_or_else(|| MathGenError::FontNotFound {
            face: face.to_string(),
            searched: self.dirs.clone(),
        })?;
        tracing::debug!(face, path = %path.display(), "loading font");
        Ok(std::fs::read(path)?)
    }
}

/// Font directories for the current platform, user directory first
pub fn system_font_dirs() -> Vec<PathBuf> {
    let mut dirs_found: Vec<PathBuf> = Vec::new();

    if let Some(user) = dirs::font_dir() {
        dirs_found.push(user);
    }

    if cfg!(target_os = "windows") {
        let windir = std::env::var_os("WINDIR").unwrap_or_else(|| "C:\\Windows".into());
        dirs_found.push(PathBuf::from(windir).join("Fonts"));
    } else if cfg!(target_os = "macos") {
        dirs_found.push(PathBuf::from("/Library/Fonts"));
        dirs_found.push(PathBuf::from("/System/Library/Fonts"));
    } else {
        if let Some(home) = dirs::home_dir() {
            dirs_found.push(home.join(".fonts"));
        }
        dirs_found.push(PathBuf::from("/usr/local/share/fonts"));
        dirs_found.push(PathBuf::from("/usr/share/fonts"));
    }

    dirs_found
}
