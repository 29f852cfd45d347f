use crate::kernel::style::FontStyle;

pub const DEFAULT_THEME: &str = "Default";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorConfig {
    pub style: FontStyle,
    pub word_wrap: bool,
    pub theme: String,
    pub tab_width: u8,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            style: FontStyle::default(),
            word_wrap: true,
            theme: DEFAULT_THEME.to_string(),
            tab_width: 4,
        }
    }
}

impl EditorConfig {
    /// Spaces inserted for a Tab key press.
    pub fn tab_text(&self) -> String {
        " ".repeat(self.tab_width.max(1) as usize)
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/config.rs"]
mod tests;
