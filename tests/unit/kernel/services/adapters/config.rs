use super::*;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_no_overrides_gives_defaults() {
    assert_eq!(load_config_from(lookup(&[])), EditorConfig::default());
}

#[test]
fn test_overrides_apply() {
    let config = load_config_from(lookup(&[
        (ENV_FONT, " Courier New "),
        (ENV_FONT_SIZE, "14"),
        (ENV_WORD_WRAP, "off"),
        (ENV_THEME, "Nord"),
        (ENV_TAB_WIDTH, "2"),
    ]));
    assert_eq!(config.style.family, "Courier New");
    assert_eq!(config.style.size, 14);
    assert!(!config.word_wrap);
    assert_eq!(config.theme, "Nord");
    assert_eq!(config.tab_width, 2);
}

#[test]
fn test_invalid_values_are_ignored() {
    let config = load_config_from(lookup(&[
        (ENV_FONT, "   "),
        (ENV_FONT_SIZE, "0"),
        (ENV_WORD_WRAP, "maybe"),
        (ENV_TAB_WIDTH, "99"),
    ]));
    assert_eq!(config, EditorConfig::default());
}
