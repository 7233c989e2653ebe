//! Boot loader overlay: fake progress counter, exit transition and a
//! watchdog for pages where the `load` event never fires cleanly.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};

use portfolio_core::constants::{LOADER_EXIT_DELAY_MS, LOADER_TICK_MS, LOADER_WATCHDOG_MS};
use portfolio_core::loader::LoaderProgress;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{LOADER_BAR_ID, LOADER_ID, LOADER_PERCENT_ID};
use crate::dom;

static STARTED: AtomicBool = AtomicBool::new(false);

/// Arm the loader on `window.load`, plus a watchdog in case the event was
/// already consumed before our listener attached. `run` itself is guarded
/// so the two triggers cannot double-animate.
pub fn wire(document: &web::Document) {
    let Some(window) = web::window() else { return };

    {
        let document = document.clone();
        let closure = Closure::wrap(Box::new(move |_: web::Event| {
            run(&document);
        }) as Box<dyn FnMut(_)>);
        let _ = window.add_event_listener_with_callback("load", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    let document = document.clone();
    dom::set_timeout(LOADER_WATCHDOG_MS, move || {
        let stuck = dom::element_by_id(&document, LOADER_ID)
            .map(|el| el.offset_height() > 0)
            .unwrap_or(false);
        if stuck {
            log::warn!("[loader] watchdog fired; forcing start");
            run(&document);
        }
    });
}

fn run(document: &web::Document) {
    if STARTED.swap(true, Ordering::SeqCst) {
        return;
    }
    let Some(window) = web::window() else { return };
    let Some(overlay) = dom::element_by_id(document, LOADER_ID) else {
        crate::start_page_animations(document);
        return;
    };
    let percent_el = dom::element_by_id(document, LOADER_PERCENT_ID);
    let bar_el = dom::element_by_id(document, LOADER_BAR_ID);

    let progress = Rc::new(RefCell::new(LoaderProgress::new()));
    let interval_handle: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));

    let tick = {
        let progress = progress.clone();
        let interval_handle = interval_handle.clone();
        let document = document.clone();
        Closure::wrap(Box::new(move || {
            let pct = progress.borrow_mut().advance(&mut rand::thread_rng());
            if let Some(el) = &percent_el {
                el.set_inner_text(&format!("{pct}%"));
            }
            if let Some(bar) = &bar_el {
                dom::set_style(bar, "width", &format!("{pct}%"));
            }
            if !progress.borrow().is_complete() {
                return;
            }
            if let (Some(w), Some(id)) = (web::window(), interval_handle.borrow_mut().take()) {
                w.clear_interval_with_handle(id);
            }
            let overlay = overlay.clone();
            let document = document.clone();
            dom::set_timeout(LOADER_EXIT_DELAY_MS, move || {
                dom::set_style(&overlay, "opacity", "0");
                dom::set_style(&overlay, "pointer-events", "none");
                let overlay = overlay.clone();
                dom::set_timeout(500, move || {
                    dom::set_style(&overlay, "display", "none");
                });
                log::info!("[loader] complete");
                crate::start_page_animations(&document);
            });
        }) as Box<dyn FnMut()>)
    };

    match window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        LOADER_TICK_MS,
    ) {
        Ok(id) => *interval_handle.borrow_mut() = Some(id),
        Err(_) => log::warn!("[loader] could not schedule progress interval"),
    }
    tick.forget();
}
