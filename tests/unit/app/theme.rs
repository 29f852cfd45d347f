use super::*;

#[test]
fn parse_color_accepts_names_hex_and_reset() {
    assert_eq!(parse_color("cyan"), Some(Color::Indexed(6)));
    assert_eq!(parse_color(" Dark_Gray "), Some(Color::Indexed(8)));
    assert_eq!(parse_color("reset"), Some(Color::Reset));
    assert_eq!(parse_color("#1e1E1e"), Some(Color::Rgb(0x1E, 0x1E, 0x1E)));
    assert_eq!(parse_color("#12345"), None);
    assert_eq!(parse_color("#zzzzzz"), None);
    assert_eq!(parse_color("chartreuse"), None);
    assert_eq!(parse_color(""), None);
}

#[test]
fn bundled_catalog_starts_with_default() {
    let catalog = ThemeCatalog::bundled();
    let names = catalog.names();
    assert_eq!(names.first().map(String::as_str), Some("Default"));
    assert!(names.len() > 5);
    assert!(catalog.contains("Nord"));
    assert_eq!(catalog.get("Default"), UiTheme::default());
}

#[test]
fn unknown_theme_resolves_to_first() {
    let catalog = ThemeCatalog::bundled();
    assert_eq!(catalog.get("No Such Theme"), catalog.get("Default"));
}

#[test]
fn missing_and_invalid_colors_keep_defaults() {
    let json = r##"{
        "themes": [
            { "name": "Mine", "colors": { "body_bg": "#000000", "border": "nope" } },
            { "name": "Mine", "colors": { "body_bg": "white" } },
            { "name": "  " }
        ]
    }"##;
    let catalog = ThemeCatalog::from_json(json).unwrap();
    assert_eq!(catalog.names(), ["Mine"]);

    let theme = catalog.get("Mine");
    assert_eq!(theme.body_bg, Color::Rgb(0, 0, 0));
    assert_eq!(theme.border, UiTheme::default().border);
    assert_eq!(theme.status_fg, UiTheme::default().status_fg);
}

#[test]
fn empty_catalog_falls_back_to_default_theme() {
    let catalog = ThemeCatalog::from_json(r#"{ "themes": [] }"#).unwrap();
    assert_eq!(catalog.names(), ["Default"]);
    assert!(ThemeCatalog::from_json("not json").is_err());
}

#[test]
fn ansi16_support_maps_rgb_to_basic_palette() {
    let mut theme = UiTheme {
        body_bg: Color::Rgb(0, 0, 0),
        body_fg: Color::Rgb(250, 250, 250),
        selection_bg: Color::Indexed(196),
        ..UiTheme::default()
    };
    theme.apply_color_support(TerminalColorSupport::Ansi16);

    assert_eq!(theme.body_bg, Color::Indexed(0));
    assert_eq!(theme.body_fg, Color::Indexed(15));
    assert_eq!(theme.selection_bg, Color::Indexed(9));
    assert_eq!(theme.menu_bg, Color::Indexed(8));
}

#[test]
fn ansi256_support_keeps_indexed_and_maps_rgb() {
    let mut theme = UiTheme {
        body_bg: Color::Rgb(0xFF, 0x00, 0x00),
        ..UiTheme::default()
    };
    theme.apply_color_support(TerminalColorSupport::Ansi256);

    assert_eq!(theme.body_bg, Color::Indexed(9));
    assert_eq!(theme.border, Color::Indexed(8));
    assert_eq!(theme.body_fg, Color::Reset);
}
