//! Scroll-linked page chrome: section reveals, hero parallax, navbar
//! elevation and the back-to-top button.

use portfolio_core::page::{
    back_to_top_visible, hero_parallax_offset, navbar_elevated, reveal_triggered,
};
use web_sys as web;

use crate::constants::{
    BACK_TO_TOP_ID, FADE_IN_SELECTOR, HERO_BG_ID, NAVBAR_ID, NAVBAR_SHADOW_CLASS,
    REVEAL_SELECTOR, VISIBLE_CLASS,
};
use crate::dom;

pub fn wire(document: &web::Document) {
    let Some(window) = web::window() else { return };

    // Above-the-fold content fades in right away.
    for el in dom::query_all(document, FADE_IN_SELECTOR) {
        let _ = el.class_list().add_1(VISIBLE_CLASS);
    }

    let reveals = dom::query_all(document, REVEAL_SELECTOR);
    let hero_bg = dom::element_by_id(document, HERO_BG_ID);
    let navbar = dom::element_by_id(document, NAVBAR_ID);

    let on_scroll = {
        let window = window.clone();
        move || {
            let scroll_y = window.scroll_y().unwrap_or(0.0);
            let viewport_h = window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);

            if let Some(bg) = &hero_bg {
                let offset = hero_parallax_offset(scroll_y);
                dom::set_style(bg, "transform", &format!("translateY({offset}px)"));
            }
            if let Some(nav) = &navbar {
                let list = nav.class_list();
                let _ = if navbar_elevated(scroll_y) {
                    list.add_1(NAVBAR_SHADOW_CLASS)
                } else {
                    list.remove_1(NAVBAR_SHADOW_CLASS)
                };
            }
            for el in &reveals {
                let top = el.get_bounding_client_rect().top();
                let list = el.class_list();
                let _ = if reveal_triggered(top, viewport_h) {
                    list.add_1(VISIBLE_CLASS)
                } else {
                    list.remove_1(VISIBLE_CLASS)
                };
            }
        }
    };
    on_scroll();
    dom::on_event(&window, "scroll", move |_| on_scroll());
    log::info!("[reveal] scroll animations wired");
}

pub fn wire_back_to_top(document: &web::Document) {
    let Some(window) = web::window() else { return };
    let Some(button) = dom::element_by_id(document, BACK_TO_TOP_ID) else {
        return;
    };

    {
        let win = window.clone();
        let button = button.clone();
        dom::on_event(&window, "scroll", move |_| {
            let scroll_y = win.scroll_y().unwrap_or(0.0);
            let viewport_h = win
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            let list = button.class_list();
            let _ = if back_to_top_visible(scroll_y, viewport_h) {
                list.remove_2("translate-y-20", "opacity-0")
            } else {
                list.add_2("translate-y-20", "opacity-0")
            };
        });
    }

    dom::on_click(&button, move || {
        let opts = web::ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
    });
}
