//! Startup configuration.
//!
//! There is no configuration file: defaults come from `EditorConfig` and
//! can be overridden per launch through environment variables.

use crate::kernel::services::ports::config::EditorConfig;

pub const ENV_FONT: &str = "QUILL_FONT";
pub const ENV_FONT_SIZE: &str = "QUILL_FONT_SIZE";
pub const ENV_WORD_WRAP: &str = "QUILL_WORD_WRAP";
pub const ENV_THEME: &str = "QUILL_THEME";
pub const ENV_TAB_WIDTH: &str = "QUILL_TAB_WIDTH";

pub fn load_config() -> EditorConfig {
    load_config_from(|key| std::env::var(key).ok())
}

/// Applies overrides looked up through `lookup`; invalid values are logged and skipped.
pub fn load_config_from<F>(lookup: F) -> EditorConfig
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = EditorConfig::default();

    if let Some(family) = lookup(ENV_FONT).map(|v| v.trim().to_string()) {
        if !family.is_empty() {
            config.style.family = family;
        }
    }

    if let Some(value) = lookup(ENV_FONT_SIZE) {
        match value.trim().parse::<u16>() {
            Ok(size) if size > 0 => config.style.size = size,
            _ => tracing::warn!(key = ENV_FONT_SIZE, value = %value, "ignoring invalid font size"),
        }
    }

    if let Some(value) = lookup(ENV_WORD_WRAP) {
        match parse_bool(&value) {
            Some(wrap) => config.word_wrap = wrap,
            None => tracing::warn!(key = ENV_WORD_WRAP, value = %value, "ignoring invalid flag"),
        }
    }

    if let Some(theme) = lookup(ENV_THEME).map(|v| v.trim().to_string()) {
        if !theme.is_empty() {
            config.theme = theme;
        }
    }

    if let Some(value) = lookup(ENV_TAB_WIDTH) {
        match value.trim().parse::<u8>() {
            Ok(width) if (1..=16).contains(&width) => config.tab_width = width,
            _ => tracing::warn!(key = ENV_TAB_WIDTH, value = %value, "ignoring invalid tab width"),
        }
    }

    config
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/config.rs"]
mod tests;
