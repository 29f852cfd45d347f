//! Installed font families.
//!
//! With the `system-fonts` feature the host font database is queried through
//! `font-kit`. Without it (or when that query fails) the well-known font
//! directories are walked and family names are derived from file names.

use crate::kernel::services::ports::fonts::{FontSource, FontSourceError};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

const FONT_EXTENSIONS: &[&str] = &["ttf", "otf", "ttc", "otc", "pfb", "woff", "woff2"];

pub struct SystemFontSource {
    dirs: Vec<PathBuf>,
}

impl SystemFontSource {
    pub fn new() -> Self {
        Self {
            dirs: default_font_dirs(),
        }
    }

    pub fn with_dirs(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }

    #[cfg(feature = "system-fonts")]
    fn query_host(&self) -> Option<Vec<String>> {
        match font_kit::source::SystemSource::new().all_families() {
            Ok(families) => Some(families),
            Err(err) => {
                tracing::warn!(error = ?err, "font-kit enumeration failed, scanning font dirs");
                None
            }
        }
    }

    #[cfg(not(feature = "system-fonts"))]
    fn query_host(&self) -> Option<Vec<String>> {
        None
    }
}

impl Default for SystemFontSource {
    fn default() -> Self {
        Self::new()
    }
}

impl FontSource for SystemFontSource {
    fn families(&self) -> Result<Vec<String>, FontSourceError> {
        if let Some(families) = self.query_host() {
            return Ok(families);
        }

        let existing: Vec<&PathBuf> = self.dirs.iter().filter(|d| d.is_dir()).collect();
        if existing.is_empty() {
            return Err(FontSourceError("no font directories found".to_string()));
        }
        Ok(scan_font_dirs(existing.into_iter().map(PathBuf::as_path)))
    }
}

/// Family names of every font file below `dirs`, in walk order, deduplicated.
pub fn scan_font_dirs<'a>(dirs: impl IntoIterator<Item = &'a Path>) -> Vec<String> {
    let mut dirs = dirs.into_iter();
    let Some(first) = dirs.next() else {
        return Vec::new();
    };

    let mut builder = WalkBuilder::new(first);
    for dir in dirs {
        builder.add(dir);
    }
    builder.standard_filters(false).follow_links(true);

    let mut families = Vec::new();
    for entry in builder.build().filter_map(Result::ok) {
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let Some(name) = family_from_file_name(entry.path()) else {
            continue;
        };
        if !families.contains(&name) {
            families.push(name);
        }
    }
    families
}

/// `DejaVuSansMono-BoldOblique.ttf` → `DejaVuSansMono`; `Noto_Serif.otf` → `Noto Serif`.
pub fn family_from_file_name(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    if !FONT_EXTENSIONS.contains(&ext.as_str()) {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    let family = stem.split('-').next().unwrap_or(stem).replace('_', " ");
    let family = family.trim();
    if family.is_empty() {
        return None;
    }
    Some(family.to_string())
}

fn default_font_dirs() -> Vec<PathBuf> {
    #[allow(unused_mut)]
    let mut dirs = Vec::new();

    #[cfg(target_os = "linux")]
    {
        dirs.push(PathBuf::from("/usr/share/fonts"));
        dirs.push(PathBuf::from("/usr/local/share/fonts"));
        if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
            dirs.push(home.join(".local/share/fonts"));
            dirs.push(home.join(".fonts"));
        }
    }

    #[cfg(target_os = "macos")]
    {
        dirs.push(PathBuf::from("/System/Library/Fonts"));
        dirs.push(PathBuf::from("/Library/Fonts"));
        if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
            dirs.push(home.join("Library/Fonts"));
        }
    }

    #[cfg(target_os = "windows")]
    {
        let windir = std::env::var_os("WINDIR").unwrap_or_else(|| "C:\\Windows".into());
        dirs.push(PathBuf::from(windir).join("Fonts"));
        if let Some(local) = std::env::var_os("LOCALAPPDATA") {
            dirs.push(PathBuf::from(local).join("Microsoft\\Windows\\Fonts"));
        }
    }

    dirs
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/fonts.rs"]
mod tests;
