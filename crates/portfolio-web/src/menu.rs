//! Mobile slide-in menu with backdrop and scroll locking.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys as web;

use crate::constants::{MENU_BTN_ID, MOBILE_LINK_SELECTOR, MOBILE_MENU_BACKDROP_ID, MOBILE_MENU_ID};
use crate::dom;

const BARS_ICON: &str = "<i class=\"fas fa-bars text-2xl\"></i>";
const TIMES_ICON: &str = "<i class=\"fas fa-times text-2xl\"></i>";

pub fn wire(document: &web::Document) {
    let (Some(btn), Some(menu), Some(backdrop)) = (
        dom::element_by_id(document, MENU_BTN_ID),
        dom::element_by_id(document, MOBILE_MENU_ID),
        dom::element_by_id(document, MOBILE_MENU_BACKDROP_ID),
    ) else {
        log::info!("[menu] mobile menu markup missing; skipping");
        return;
    };

    let open = Rc::new(RefCell::new(false));
    let body = document.body();

    let apply = {
        let btn = btn.clone();
        let menu = menu.clone();
        let backdrop = backdrop.clone();
        move |open: bool| {
            let menu_list = menu.class_list();
            let backdrop_list = backdrop.class_list();
            if open {
                let _ = menu_list.remove_1("translate-x-full");
                let _ = menu_list.add_1("translate-x-0");
                let _ = backdrop_list.remove_2("opacity-0", "pointer-events-none");
                let _ = backdrop_list.add_2("opacity-100", "pointer-events-auto");
                btn.set_inner_html(TIMES_ICON);
            } else {
                let _ = menu_list.remove_1("translate-x-0");
                let _ = menu_list.add_1("translate-x-full");
                let _ = backdrop_list.remove_2("opacity-100", "pointer-events-auto");
                let _ = backdrop_list.add_2("opacity-0", "pointer-events-none");
                btn.set_inner_html(BARS_ICON);
            }
            // Lock page scroll while the menu covers it.
            if let Some(body) = &body {
                dom::set_style(body, "overflow", if open { "hidden" } else { "" });
            }
        }
    };

    let toggle = {
        let open = open.clone();
        let apply = apply.clone();
        Rc::new(move || {
            let next = !*open.borrow();
            *open.borrow_mut() = next;
            apply(next);
        })
    };

    {
        let toggle = toggle.clone();
        dom::on_click(&btn, move || toggle());
    }

    let close = {
        let open = open.clone();
        Rc::new(move || {
            if *open.borrow() {
                *open.borrow_mut() = false;
                apply(false);
            }
        })
    };

    {
        let close = close.clone();
        dom::on_click(&backdrop, move || close());
    }
    for link in dom::query_all(document, MOBILE_LINK_SELECTOR) {
        let close = close.clone();
        dom::on_click(&link, move || close());
    }
}
