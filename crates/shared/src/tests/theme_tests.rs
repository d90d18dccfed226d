use super::*;

use std::str::FromStr;

#[test]
fn light_and_dark_palettes_differ_in_every_slot() {
    for ((name, light), (_, dark)) in Palette::LIGHT.slots().iter().zip(Palette::DARK.slots()) {
        assert_ne!(*light, dark, "slot {name} is identical in both palettes");
    }
}

#[test]
fn switching_replaces_the_palette_wholesale() {
    let mut registry = ThemeRegistry::default();
    assert_eq!(registry.active(), &Palette::LIGHT);

    registry.set_mode(ThemeMode::Dark, None);
    for ((name, active), (_, dark)) in registry.active().slots().iter().zip(Palette::DARK.slots())
    {
        assert_eq!(*active, dark, "slot {name} kept a stale color");
    }

    registry.set_mode(ThemeMode::Light, None);
    assert_eq!(registry.active(), &Palette::LIGHT);
}

#[test]
fn toggle_flips_between_light_and_dark() {
    let mut registry = ThemeRegistry::default();
    registry.toggle();
    assert!(registry.is_dark());
    assert_eq!(registry.mode(), ThemeMode::Dark);
    registry.toggle();
    assert!(!registry.is_dark());
}

#[test]
fn system_mode_follows_the_hint_and_defaults_to_light() {
    let registry = ThemeRegistry::new(ThemeMode::System, Some(true));
    assert!(registry.is_dark());

    let registry = ThemeRegistry::new(ThemeMode::System, Some(false));
    assert!(!registry.is_dark());

    // Detection unavailable: fall back to light.
    let registry = ThemeRegistry::new(ThemeMode::System, None);
    assert!(!registry.is_dark());
}

#[test]
fn usage_color_thresholds() {
    assert_eq!(usage_color(0), STATUS_OK);
    assert_eq!(usage_color(49), STATUS_OK);
    assert_eq!(usage_color(50), STATUS_WARN);
    assert_eq!(usage_color(79), STATUS_WARN);
    assert_eq!(usage_color(80), STATUS_CRITICAL);
    assert_eq!(usage_color(100), STATUS_CRITICAL);
}

#[test]
fn theme_mode_parses_its_snake_case_form() {
    assert_eq!(ThemeMode::from_str("light").unwrap(), ThemeMode::Light);
    assert_eq!(ThemeMode::from_str("dark").unwrap(), ThemeMode::Dark);
    assert_eq!(ThemeMode::from_str("system").unwrap(), ThemeMode::System);
    assert!(ThemeMode::from_str("solarized").is_err());

    let json = serde_json::to_string(&ThemeMode::System).unwrap();
    assert_eq!(json, "\"system\"");
}
