use super::*;

fn available(families: &[&str]) -> BTreeSet<String> {
    families.iter().map(|s| s.to_string()).collect()
}

#[test]
fn resolves_the_first_available_preference() {
    let stack = FontStack::default();
    let fonts = available(&["Arial", "SimHei", "Comic Sans MS"]);
    assert_eq!(stack.resolve(&fonts), Some("SimHei"));
}

#[test]
fn override_wins_when_available() {
    let stack = FontStack::with_override(Some("Arial".to_string()));
    let fonts = available(&["HarmonyOS Sans SC", "Arial"]);
    assert_eq!(stack.resolve(&fonts), Some("Arial"));
}

#[test]
fn unavailable_override_falls_back_to_preferences() {
    let stack = FontStack::with_override(Some("Papyrus".to_string()));
    let fonts = available(&["Microsoft YaHei"]);
    assert_eq!(stack.resolve(&fonts), Some("Microsoft YaHei"));
}

#[test]
fn nothing_available_yields_none() {
    let stack = FontStack::default();
    assert_eq!(stack.resolve(&available(&["Courier New"])), None);
    assert_eq!(stack.resolve(&BTreeSet::new()), None);
}

#[test]
fn clearing_the_override_restores_preference_order() {
    let mut stack = FontStack::with_override(Some("Arial".to_string()));
    let fonts = available(&["HarmonyOS Sans SC", "Arial"]);
    assert_eq!(stack.resolve(&fonts), Some("Arial"));

    stack.set_override(None);
    assert_eq!(stack.resolve(&fonts), Some("HarmonyOS Sans SC"));
}
