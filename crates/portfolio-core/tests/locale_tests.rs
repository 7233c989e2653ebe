// Host-side tests for the two-locale translation switch.

use portfolio_core::locale::{entries, read_less_label, read_more_label, translate, Lang, STORAGE_KEY};
use std::collections::HashSet;

#[test]
fn toggle_flips_between_the_two_locales() {
    assert_eq!(Lang::En.toggled(), Lang::Pt);
    assert_eq!(Lang::Pt.toggled(), Lang::En);
    assert_eq!(Lang::En.toggled().toggled(), Lang::En);
}

#[test]
fn codes_round_trip() {
    assert_eq!(Lang::from_code("en"), Some(Lang::En));
    assert_eq!(Lang::from_code("pt"), Some(Lang::Pt));
    assert_eq!(Lang::from_code(Lang::Pt.code()), Some(Lang::Pt));
    assert_eq!(Lang::from_code("de"), None);
}

#[test]
fn initial_prefers_saved_choice_over_navigator() {
    assert_eq!(Lang::initial(Some("en"), "pt-BR"), Lang::En);
    assert_eq!(Lang::initial(Some("pt"), "en-US"), Lang::Pt);
    // Corrupt saved value falls back to the browser language.
    assert_eq!(Lang::initial(Some("xx"), "pt-BR"), Lang::Pt);
    assert_eq!(Lang::initial(None, "pt"), Lang::Pt);
    assert_eq!(Lang::initial(None, "fr-FR"), Lang::En);
}

#[test]
fn lookup_returns_the_locale_specific_text() {
    assert_eq!(translate(Lang::En, "nav.projects"), Some("Projects"));
    assert_eq!(translate(Lang::Pt, "nav.projects"), Some("Projetos"));
    assert_eq!(translate(Lang::En, "no.such.key"), None);
}

#[test]
fn both_tables_carry_the_same_keys() {
    let en: HashSet<&str> = entries(Lang::En).iter().map(|(k, _)| *k).collect();
    let pt: HashSet<&str> = entries(Lang::Pt).iter().map(|(k, _)| *k).collect();
    assert_eq!(en, pt, "locale tables diverge");
    // Declaration order holds no duplicates either.
    assert_eq!(en.len(), entries(Lang::En).len());
}

#[test]
fn cv_path_and_labels_follow_the_language() {
    assert!(Lang::En.cv_path().ends_with("EN.pdf"));
    assert!(Lang::Pt.cv_path().ends_with("PT.pdf"));
    assert_eq!(read_more_label(Lang::Pt), "Ler Mais");
    assert_eq!(read_less_label(Lang::En), "Show Less");
}

#[test]
fn storage_key_is_stable() {
    // Persisted visitor preferences break if this ever changes.
    assert_eq!(STORAGE_KEY, "preferred-lang");
}
