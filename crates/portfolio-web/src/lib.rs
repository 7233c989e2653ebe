//! Browser entry point for the portfolio page. Wires every interactive
//! feature to the DOM; all the behavior itself lives in `portfolio-core`.

#![cfg(target_arch = "wasm32")]

mod carousel;
mod constants;
mod cursor;
mod dom;
mod loader;
mod locale;
mod menu;
mod music;
mod petals;
mod reveal;

use anyhow::Result;
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");
    if let Err(e) = init() {
        log::error!("init failed: {e:?}");
    }
}

fn init() -> Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    cursor::wire(&document);
    petals::wire(&document);
    menu::wire(&document);
    music::wire(&document);
    locale::wire(&document);
    reveal::wire_back_to_top(&document);

    // The loader runs last and hands off to the scroll/carousel wiring
    // once its exit transition finishes.
    loader::wire(&document);
    Ok(())
}

/// Deferred wiring for everything that measures layout; runs after the
/// loader overlay is gone so initial rects are the real ones.
pub(crate) fn start_page_animations(document: &web::Document) {
    reveal::wire(document);
    carousel::wire(document);
}
