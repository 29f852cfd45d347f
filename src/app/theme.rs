//! Window themes: named colour palettes bundled with the binary.

use ratatui::style::Color;
use serde::Deserialize;

const BUNDLED_THEMES: &str = include_str!("../../assets/themes.json");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiTheme {
    pub menu_bg: Color,
    pub menu_fg: Color,
    pub menu_active_bg: Color,
    pub menu_active_fg: Color,
    pub menu_mnemonic_fg: Color,
    pub body_bg: Color,
    pub body_fg: Color,
    pub border: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub dialog_bg: Color,
    pub dialog_fg: Color,
    pub dialog_border: Color,
    pub dialog_selected_bg: Color,
    pub dialog_selected_fg: Color,
    pub accent_fg: Color,
    pub error_fg: Color,
    pub muted_fg: Color,
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            menu_bg: Color::Indexed(8),          // DarkGray
            menu_fg: Color::Indexed(15),         // White
            menu_active_bg: Color::Indexed(6),   // Cyan
            menu_active_fg: Color::Indexed(0),   // Black
            menu_mnemonic_fg: Color::Indexed(3), // Yellow
            body_bg: Color::Reset,
            body_fg: Color::Reset,
            border: Color::Indexed(8),
            selection_bg: Color::Indexed(4), // Blue
            selection_fg: Color::Indexed(15),
            status_bg: Color::Indexed(8),
            status_fg: Color::Indexed(15),
            dialog_bg: Color::Reset,
            dialog_fg: Color::Indexed(15),
            dialog_border: Color::Indexed(6),
            dialog_selected_bg: Color::Indexed(8),
            dialog_selected_fg: Color::Indexed(15),
            accent_fg: Color::Indexed(3),
            error_fg: Color::Indexed(1), // Red
            muted_fg: Color::Indexed(8),
        }
    }
}

/// Colour overrides of one theme as written in the asset. Missing or
/// unparsable entries keep the default palette's value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    pub menu_bg: Option<String>,
    pub menu_fg: Option<String>,
    pub menu_active_bg: Option<String>,
    pub menu_active_fg: Option<String>,
    pub menu_mnemonic_fg: Option<String>,
    pub body_bg: Option<String>,
    pub body_fg: Option<String>,
    pub border: Option<String>,
    pub selection_bg: Option<String>,
    pub selection_fg: Option<String>,
    pub status_bg: Option<String>,
    pub status_fg: Option<String>,
    pub dialog_bg: Option<String>,
    pub dialog_fg: Option<String>,
    pub dialog_border: Option<String>,
    pub dialog_selected_bg: Option<String>,
    pub dialog_selected_fg: Option<String>,
    pub accent_fg: Option<String>,
    pub error_fg: Option<String>,
    pub muted_fg: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct ThemeSpec {
    name: String,
    #[serde(default)]
    colors: ThemeColors,
}

#[derive(Debug, Clone, Deserialize)]
struct ThemeFile {
    themes: Vec<ThemeSpec>,
}

impl UiTheme {
    pub fn from_colors(colors: &ThemeColors) -> Self {
        let mut theme = Self::default();
        theme.apply_colors(colors);
        theme
    }

    pub fn apply_colors(&mut self, colors: &ThemeColors) {
        apply(&mut self.menu_bg, &colors.menu_bg);
        apply(&mut self.menu_fg, &colors.menu_fg);
        apply(&mut self.menu_active_bg, &colors.menu_active_bg);
        apply(&mut self.menu_active_fg, &colors.menu_active_fg);
        apply(&mut self.menu_mnemonic_fg, &colors.menu_mnemonic_fg);
        apply(&mut self.body_bg, &colors.body_bg);
        apply(&mut self.body_fg, &colors.body_fg);
        apply(&mut self.border, &colors.border);
        apply(&mut self.selection_bg, &colors.selection_bg);
        apply(&mut self.selection_fg, &colors.selection_fg);
        apply(&mut self.status_bg, &colors.status_bg);
        apply(&mut self.status_fg, &colors.status_fg);
        apply(&mut self.dialog_bg, &colors.dialog_bg);
        apply(&mut self.dialog_fg, &colors.dialog_fg);
        apply(&mut self.dialog_border, &colors.dialog_border);
        apply(&mut self.dialog_selected_bg, &colors.dialog_selected_bg);
        apply(&mut self.dialog_selected_fg, &colors.dialog_selected_fg);
        apply(&mut self.accent_fg, &colors.accent_fg);
        apply(&mut self.error_fg, &colors.error_fg);
        apply(&mut self.muted_fg, &colors.muted_fg);
    }

    pub fn adapt_to_terminal_capabilities(&mut self) {
        self.apply_color_support(detect_terminal_color_support());
    }

    fn apply_color_support(&mut self, support: TerminalColorSupport) {
        if support == TerminalColorSupport::TrueColor {
            return;
        }

        for slot in [
            &mut self.menu_bg,
            &mut self.menu_fg,
            &mut self.menu_active_bg,
            &mut self.menu_active_fg,
            &mut self.menu_mnemonic_fg,
            &mut self.body_bg,
            &mut self.body_fg,
            &mut self.border,
            &mut self.selection_bg,
            &mut self.selection_fg,
            &mut self.status_bg,
            &mut self.status_fg,
            &mut self.dialog_bg,
            &mut self.dialog_fg,
            &mut self.dialog_border,
            &mut self.dialog_selected_bg,
            &mut self.dialog_selected_fg,
            &mut self.accent_fg,
            &mut self.error_fg,
            &mut self.muted_fg,
        ] {
            *slot = map_color_for_support(*slot, support);
        }
    }
}

fn apply(slot: &mut Color, value: &Option<String>) {
    let Some(value) = value else {
        return;
    };
    match parse_color(value) {
        Some(color) => *slot = color,
        None => tracing::warn!(color = %value, "unknown theme colour, keeping default"),
    }
}

/// Theme names and palettes, in asset order.
#[derive(Debug, Clone)]
pub struct ThemeCatalog {
    themes: Vec<(String, UiTheme)>,
}

impl ThemeCatalog {
    /// Themes bundled with the binary.
    pub fn bundled() -> Self {
        match Self::from_json(BUNDLED_THEMES) {
            Ok(catalog) => catalog,
            Err(err) => {
                tracing::error!(error = %err, "bundled themes are invalid");
                Self::fallback()
            }
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let file: ThemeFile = serde_json::from_str(json)?;
        let mut themes: Vec<(String, UiTheme)> = Vec::with_capacity(file.themes.len());
        for entry in file.themes {
            let name = entry.name.trim().to_string();
            if name.is_empty() || themes.iter().any(|(n, _)| *n == name) {
                continue;
            }
            themes.push((name, UiTheme::from_colors(&entry.colors)));
        }

        if themes.is_empty() {
            return Ok(Self::fallback());
        }
        Ok(Self { themes })
    }

    fn fallback() -> Self {
        Self {
            themes: vec![(
                crate::kernel::services::ports::config::DEFAULT_THEME.to_string(),
                UiTheme::default(),
            )],
        }
    }

    pub fn names(&self) -> Vec<String> {
        self.themes.iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.themes.iter().any(|(n, _)| n == name)
    }

    /// Palette for `name`; unknown names resolve to the first theme.
    pub fn get(&self, name: &str) -> UiTheme {
        self.themes
            .iter()
            .find(|(n, _)| n == name)
            .or_else(|| self.themes.first())
            .map(|(_, theme)| theme.clone())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalColorSupport {
    TrueColor,
    Ansi256,
    Ansi16,
}

pub fn detect_terminal_color_support() -> TerminalColorSupport {
    if let Ok(value) = std::env::var("QUILL_COLOR_SUPPORT") {
        let value = value.trim().to_ascii_lowercase();
        match value.as_str() {
            "truecolor" | "24bit" | "rgb" => return TerminalColorSupport::TrueColor,
            "256" | "ansi256" => return TerminalColorSupport::Ansi256,
            "16" | "ansi16" | "basic" => return TerminalColorSupport::Ansi16,
            _ => {}
        }
    }

    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    let term = std::env::var("TERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    if colorterm.contains("truecolor")
        || colorterm.contains("24bit")
        || term.contains("truecolor")
        || term.contains("24bit")
        || term.contains("direct")
    {
        return TerminalColorSupport::TrueColor;
    }

    if term.contains("256color") {
        return TerminalColorSupport::Ansi256;
    }

    TerminalColorSupport::Ansi16
}

fn map_color_for_support(color: Color, support: TerminalColorSupport) -> Color {
    match (support, color) {
        (TerminalColorSupport::TrueColor, value) => value,
        (TerminalColorSupport::Ansi256, Color::Rgb(r, g, b)) => {
            Color::Indexed(rgb_to_ansi256_index(r, g, b))
        }
        (TerminalColorSupport::Ansi16, Color::Rgb(r, g, b)) => {
            Color::Indexed(rgb_to_ansi16_index(r, g, b))
        }
        (TerminalColorSupport::Ansi16, Color::Indexed(i)) if i > 15 => {
            let (r, g, b) = ansi256_index_to_rgb(i);
            Color::Indexed(rgb_to_ansi16_index(r, g, b))
        }
        (_, value) => value,
    }
}

fn rgb_to_ansi256_index(r: u8, g: u8, b: u8) -> u8 {
    (0u8..=255)
        .min_by_key(|&index| {
            let (pr, pg, pb) = ansi256_index_to_rgb(index);
            color_distance_sq((r, g, b), (pr, pg, pb))
        })
        .unwrap_or(0)
}

fn rgb_to_ansi16_index(r: u8, g: u8, b: u8) -> u8 {
    (0u8..16)
        .min_by_key(|&index| color_distance_sq((r, g, b), ANSI16_RGB[index as usize]))
        .unwrap_or(0)
}

fn ansi256_index_to_rgb(index: u8) -> (u8, u8, u8) {
    if index <= 15 {
        return ANSI16_RGB[index as usize];
    }

    if (16..=231).contains(&index) {
        let level = [0u8, 95, 135, 175, 215, 255];
        let offset = index - 16;
        let r = level[(offset / 36) as usize];
        let g = level[((offset / 6) % 6) as usize];
        let b = level[(offset % 6) as usize];
        return (r, g, b);
    }

    let gray = 8u8.saturating_add((index - 232).saturating_mul(10));
    (gray, gray, gray)
}

fn color_distance_sq(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
    let dr = i32::from(a.0) - i32::from(b.0);
    let dg = i32::from(a.1) - i32::from(b.1);
    let db = i32::from(a.2) - i32::from(b.2);
    (dr * dr + dg * dg + db * db) as u32
}

const ANSI16_RGB: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

/// Accepts `reset`, colour names (`cyan`, `dark_gray`, `light_blue`, ...)
/// and `#rrggbb`.
pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() == 6 && hex.is_ascii() {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }

    let v = v.to_ascii_lowercase();
    let c = match v.as_str() {
        "reset" => Color::Reset,
        "black" => Color::Indexed(0),
        "red" => Color::Indexed(1),
        "green" => Color::Indexed(2),
        "yellow" => Color::Indexed(3),
        "blue" => Color::Indexed(4),
        "magenta" => Color::Indexed(5),
        "cyan" => Color::Indexed(6),
        "gray" | "grey" => Color::Indexed(7),
        "dark_gray" | "darkgrey" => Color::Indexed(8),
        "light_red" => Color::Indexed(9),
        "light_green" => Color::Indexed(10),
        "light_yellow" => Color::Indexed(11),
        "light_blue" => Color::Indexed(12),
        "light_magenta" => Color::Indexed(13),
        "light_cyan" => Color::Indexed(14),
        "white" => Color::Indexed(15),
        _ => return None,
    };

    Some(c)
}

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
