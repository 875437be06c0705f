use super::*;

#[test]
fn encode_writes_json_string() {
    assert_eq!(encode(Appearance::Dark), "\"dark\"");
    assert_eq!(encode(Appearance::Light), "\"light\"");
}

#[test]
fn decode_accepts_json_and_bare_text() {
    assert_eq!(decode("\"dark\""), Ok(Appearance::Dark));
    assert_eq!(decode("light"), Ok(Appearance::Light));
    assert_eq!(decode(" dark\n"), Ok(Appearance::Dark));
}

#[test]
fn decode_rejects_unknown_values() {
    assert_eq!(decode("\"system\""), Err(PreferenceError::Malformed("\"system\"".to_owned())));
    assert!(decode("").is_err());
}

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::new();
    assert_eq!(store.read(), Ok(None));
    assert!(store.writes().is_empty());
}

#[test]
fn memory_store_write_then_read() {
    let store = MemoryStore::new();
    store.write(Appearance::Dark).unwrap();
    assert_eq!(store.read(), Ok(Some(Appearance::Dark)));
    assert_eq!(store.writes(), vec![Appearance::Dark]);
}

#[test]
fn memory_store_with_value_does_not_log_a_write() {
    let store = MemoryStore::with_value(Appearance::Light);
    assert_eq!(store.value(), Some(Appearance::Light));
    assert!(store.writes().is_empty());
}

#[test]
fn failing_store_errors_on_read_and_write() {
    let store = MemoryStore::failing();
    assert_eq!(store.read(), Err(PreferenceError::Unavailable));
    assert!(matches!(store.write(Appearance::Dark), Err(PreferenceError::WriteFailed(_))));
    assert!(store.writes().is_empty());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_store_is_empty_outside_the_browser() {
    let store = LocalStorageStore;
    assert_eq!(store.read(), Ok(None));
    assert_eq!(store.write(Appearance::Dark), Ok(()));
}

#[test]
fn document_theme_matches_appearance() {
    assert_eq!(
        DocumentTheme::from(Appearance::Dark),
        DocumentTheme { dark_class: true, color_scheme: "dark" }
    );
    assert_eq!(
        DocumentTheme::from(Appearance::Light),
        DocumentTheme { dark_class: false, color_scheme: "light" }
    );
}

#[test]
fn theme_boot_script_reads_the_storage_key() {
    let script = theme_boot_script();
    assert!(script.contains("localStorage.getItem(\"xevrion_appearance\")"));
    assert!(script.contains("prefers-color-scheme: dark"));
    assert!(script.contains("classList.add('dark')"));
}

#[test]
fn theme_boot_script_sets_only_the_color_scheme_property() {
    let script = theme_boot_script();
    assert!(script.contains("style.setProperty('color-scheme'"));
    assert!(!script.contains("setAttribute('style'"));
}

#[test]
fn theme_boot_script_is_a_single_guarded_statement() {
    let script = theme_boot_script();
    assert!(script.starts_with("(function(){try{"));
    assert!(script.ends_with("}catch(e){}})();"));
    assert!(!script.contains('\n'));
}
