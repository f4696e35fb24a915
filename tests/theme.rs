use getitdone::theme::Theme;

#[test]
fn test_default_theme_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn test_toggle_is_an_involution() {
    for theme in [Theme::Dark, Theme::Light] {
        assert_ne!(theme.toggled(), theme);
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

#[test]
fn test_base_styles_differ_between_themes() {
    assert_ne!(Theme::Dark.base(), Theme::Light.base());
}

#[test]
fn test_theme_deserializes_from_lowercase_names() {
    #[derive(serde::Deserialize)]
    struct Wrapper {
        theme: Theme,
    }

    let dark: Wrapper = toml::from_str("theme = \"dark\"").unwrap();
    assert_eq!(dark.theme, Theme::Dark);

    let light: Wrapper = toml::from_str("theme = \"light\"").unwrap();
    assert_eq!(light.theme, Theme::Light);
}
