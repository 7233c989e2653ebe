//! Language toggle (en/pt): applies the translation table to the page,
//! persists the choice and drives the journey expand/collapse labels.

use std::cell::RefCell;
use std::rc::Rc;

use portfolio_core::locale::{read_less_label, read_more_label, translate, Lang, STORAGE_KEY};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{
    CURRENT_LANG_DESKTOP_ID, CURRENT_LANG_MOBILE_ID, CV_LINK_SELECTOR, JOURNEY_TOGGLE_SELECTOR,
    LANG_TOGGLE_DESKTOP_ID, LANG_TOGGLE_MOBILE_ID, TRANSLATED_NODE_SELECTOR,
};
use crate::dom;

pub fn wire(document: &web::Document) {
    let saved = dom::local_storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
    let navigator = web::window().map(|w| w.navigator().language().unwrap_or_default());
    let current = Rc::new(RefCell::new(Lang::initial(
        saved.as_deref(),
        navigator.as_deref().unwrap_or(""),
    )));

    apply(document, *current.borrow());

    for toggle_id in [LANG_TOGGLE_DESKTOP_ID, LANG_TOGGLE_MOBILE_ID] {
        let Some(btn) = dom::element_by_id(document, toggle_id) else {
            continue;
        };
        let current = current.clone();
        let document = document.clone();
        dom::on_click(&btn, move || {
            let next = current.borrow().toggled();
            *current.borrow_mut() = next;
            apply(&document, next);
        });
    }

    wire_journey_toggles(document, &current);
    log::info!("[locale] active language: {}", current.borrow().code());
}

/// Rewrite every `[data-lang]` node, the CV links and the toggle labels
/// for `lang`, and persist the choice. Persisting here covers the initial
/// navigator-derived language too, not just explicit toggles. Unknown
/// keys leave the node's markup untouched.
fn apply(document: &web::Document, lang: Lang) {
    if let Some(storage) = dom::local_storage() {
        let _ = storage.set_item(STORAGE_KEY, lang.code());
    }
    for node in dom::query_all(document, TRANSLATED_NODE_SELECTOR) {
        let Some(key) = node.get_attribute("data-lang") else {
            continue;
        };
        if let Some(text) = translate(lang, &key) {
            node.set_inner_html(text);
        }
    }
    for link in dom::query_all(document, CV_LINK_SELECTOR) {
        let _ = link.set_attribute("href", lang.cv_path());
    }
    for label_id in [CURRENT_LANG_DESKTOP_ID, CURRENT_LANG_MOBILE_ID] {
        if let Some(label) = dom::element_by_id(document, label_id) {
            label.set_inner_text(&lang.code().to_uppercase());
        }
    }
}

/// Journey cards expand in place; the toggle label tracks both the open
/// state and the active language.
fn wire_journey_toggles(document: &web::Document, current: &Rc<RefCell<Lang>>) {
    for toggle in dom::query_all(document, JOURNEY_TOGGLE_SELECTOR) {
        let Some(target_id) = toggle.get_attribute("data-journey-toggle") else {
            continue;
        };
        let Some(panel) = dom::element_by_id(document, &target_id) else {
            continue;
        };
        let current = current.clone();
        let toggle_el = toggle.clone();
        dom::on_click(&toggle, move || {
            // Open state lives in the markup itself.
            let panel_list = panel.class_list();
            let opening = panel_list.contains("grid-rows-[0fr]");
            if opening {
                let _ = panel_list.remove_2("grid-rows-[0fr]", "opacity-0");
                let _ = panel_list.add_2("grid-rows-[1fr]", "opacity-100");
            } else {
                let _ = panel_list.remove_2("grid-rows-[1fr]", "opacity-100");
                let _ = panel_list.add_2("grid-rows-[0fr]", "opacity-0");
            }
            if let Ok(Some(icon)) = toggle_el.query_selector("i") {
                if let Ok(icon) = icon.dyn_into::<web::HtmlElement>() {
                    let angle = if opening { "rotate(180deg)" } else { "rotate(0deg)" };
                    dom::set_style(&icon, "transform", angle);
                }
            }
            if let Ok(Some(span)) = toggle_el.query_selector("span") {
                let lang = *current.borrow();
                let label = if opening {
                    read_less_label(lang)
                } else {
                    read_more_label(lang)
                };
                span.set_text_content(Some(label));
            }
        });
    }
}
