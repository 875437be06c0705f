use super::*;

#[test]
fn footer_text_names_year_and_owner() {
    assert_eq!(footer_text(&PROFILE), "\u{a9} 2025 Xevrion. Built with Leptos.");
}
