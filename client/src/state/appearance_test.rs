use super::*;
use crate::util::preference::MemoryStore;

// =============================================================
// Appearance
// =============================================================

#[test]
fn toggled_flips_each_value() {
    assert_eq!(Appearance::Light.toggled(), Appearance::Dark);
    assert_eq!(Appearance::Dark.toggled(), Appearance::Light);
}

#[test]
fn toggled_twice_returns_original() {
    for value in [Appearance::Light, Appearance::Dark] {
        assert_ne!(value.toggled(), value);
        assert_eq!(value.toggled().toggled(), value);
    }
}

#[test]
fn appearance_default_is_light() {
    assert_eq!(Appearance::default(), Appearance::Light);
}

#[test]
fn appearance_parses_its_text_form() {
    assert_eq!("light".parse::<Appearance>(), Ok(Appearance::Light));
    assert_eq!("dark".parse::<Appearance>(), Ok(Appearance::Dark));
    assert_eq!(Appearance::Dark.to_string(), "dark");
    assert_eq!(
        "system".parse::<Appearance>(),
        Err(PreferenceError::Malformed("system".to_owned()))
    );
}

#[test]
fn appearance_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Appearance::Dark).unwrap(), "\"dark\"");
    assert_eq!(serde_json::from_str::<Appearance>("\"light\"").unwrap(), Appearance::Light);
}

// =============================================================
// AppearanceState
// =============================================================

#[test]
fn state_default_is_unresolved_without_icon() {
    let state = AppearanceState::default();
    assert_eq!(state, AppearanceState::Unresolved);
    assert_eq!(state.icon(), None);
    assert_eq!(state.appearance(), None);
}

#[test]
fn resolved_states_show_one_matching_icon() {
    assert_eq!(AppearanceState::Resolved(Appearance::Light).icon(), Some(ToggleIcon::Moon));
    assert_eq!(AppearanceState::Resolved(Appearance::Dark).icon(), Some(ToggleIcon::Sun));
}

#[test]
fn resolve_uses_stored_value() {
    let store = MemoryStore::with_value(Appearance::Dark);
    assert_eq!(AppearanceState::resolve(&store), AppearanceState::Resolved(Appearance::Dark));
}

#[test]
fn resolve_empty_store_defaults_to_light() {
    let store = MemoryStore::new();
    assert_eq!(AppearanceState::resolve(&store), AppearanceState::Resolved(Appearance::Light));
}

#[test]
fn resolve_failing_store_defaults_to_light() {
    let store = MemoryStore::failing();
    assert_eq!(AppearanceState::resolve(&store), AppearanceState::Resolved(Appearance::Light));
}

#[test]
fn toggle_while_unresolved_is_noop() {
    let store = MemoryStore::new();
    let state = AppearanceState::Unresolved.toggle(&store);
    assert_eq!(state, AppearanceState::Unresolved);
    assert!(store.writes().is_empty());
}

#[test]
fn toggle_with_failing_store_still_flips() {
    let store = MemoryStore::failing();
    let state = AppearanceState::Resolved(Appearance::Light).toggle(&store);
    assert_eq!(state, AppearanceState::Resolved(Appearance::Dark));
}

#[test]
fn first_visit_then_toggle_writes_dark_and_shows_sun() {
    let store = MemoryStore::new();

    let state = AppearanceState::default();
    assert_eq!(state.icon(), None);

    let state = AppearanceState::resolve(&store);
    assert_eq!(state.icon(), Some(ToggleIcon::Moon));

    let state = state.toggle(&store);
    assert_eq!(store.writes(), vec![Appearance::Dark]);
    assert_eq!(store.value(), Some(Appearance::Dark));
    assert_eq!(state.icon(), Some(ToggleIcon::Sun));
}

#[test]
fn toggle_twice_persists_both_values() {
    let store = MemoryStore::with_value(Appearance::Dark);
    let state = AppearanceState::resolve(&store).toggle(&store).toggle(&store);
    assert_eq!(state, AppearanceState::Resolved(Appearance::Dark));
    assert_eq!(store.writes(), vec![Appearance::Light, Appearance::Dark]);
}
