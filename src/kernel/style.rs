//! Font style of the body.

use std::fmt;

/// Sizes offered by the font dialog.
pub const FONT_SIZES: [u16; 17] = [6, 8, 9, 10, 11, 12, 14, 16, 18, 20, 22, 24, 26, 28, 36, 48, 72];

/// Hosts flag vertical/special font variants with this leading character.
pub const SPECIAL_FONT_MARKER: char = '@';

pub const DEFAULT_FAMILY: &str = "System";
pub const DEFAULT_SIZE: u16 = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontStyle {
    pub family: String,
    pub size: u16,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
}

impl Default for FontStyle {
    fn default() -> Self {
        Self {
            family: DEFAULT_FAMILY.to_string(),
            size: DEFAULT_SIZE,
            bold: false,
            italic: false,
            underline: false,
            strikethrough: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slant {
    Roman,
    Italic,
}

/// The combined descriptor applied to the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDescriptor {
    pub family: String,
    pub size: u16,
    pub weight: Weight,
    pub slant: Slant,
    pub underline: bool,
    pub strikethrough: bool,
}

impl FontStyle {
    pub fn descriptor(&self) -> StyleDescriptor {
        StyleDescriptor {
            family: self.family.clone(),
            size: self.size,
            weight: if self.bold { Weight::Bold } else { Weight::Normal },
            slant: if self.italic { Slant::Italic } else { Slant::Roman },
            underline: self.underline,
            strikethrough: self.strikethrough,
        }
    }

    /// Active flags in dialog order, e.g. `["Bold", "Underline"]`.
    pub fn flag_labels(&self) -> Vec<&'static str> {
        [
            (self.bold, "Bold"),
            (self.italic, "Italic"),
            (self.underline, "Underline"),
            (self.strikethrough, "Strikethrough"),
        ]
        .into_iter()
        .filter_map(|(on, label)| on.then_some(label))
        .collect()
    }
}

impl fmt::Display for StyleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let weight = match self.weight {
            Weight::Normal => "normal",
            Weight::Bold => "bold",
        };
        let slant = match self.slant {
            Slant::Roman => "roman",
            Slant::Italic => "italic",
        };
        write!(f, "{} {} {} {}", self.family, self.size, weight, slant)?;
        if self.underline {
            f.write_str(" underline")?;
        }
        if self.strikethrough {
            f.write_str(" overstrike")?;
        }
        Ok(())
    }
}

/// Families the font dialog offers: special variants dropped, sorted
/// case-insensitively, deduplicated, and always including `current`.
pub fn selectable_families<I>(installed: I, current: &str) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut families: Vec<String> = installed
        .into_iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty() && !name.starts_with(SPECIAL_FONT_MARKER))
        .collect();

    if !current.is_empty() && !families.iter().any(|f| f == current) {
        families.push(current.to_string());
    }

    families.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
    families.dedup();
    families
}

/// Sizes the font dialog offers, with `current` inserted if it is not standard.
pub fn selectable_sizes(current: u16) -> Vec<u16> {
    let mut sizes = FONT_SIZES.to_vec();
    if !sizes.contains(&current) {
        sizes.push(current);
        sizes.sort_unstable();
    }
    sizes
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/style.rs"]
mod tests;
