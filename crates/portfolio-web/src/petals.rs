//! Decorative falling petals layered over the hero section.

use portfolio_core::constants::PETAL_COUNT;
use portfolio_core::petals::PetalSpec;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::PETALS_CONTAINER_ID;
use crate::dom;

pub fn wire(document: &web::Document) {
    let Some(container) = dom::element_by_id(document, PETALS_CONTAINER_ID) else {
        return;
    };
    let mut rng = rand::thread_rng();
    for _ in 0..PETAL_COUNT {
        if let Some(petal) = spawn(document, &PetalSpec::random(&mut rng)) {
            let _ = container.append_child(&petal);
        }
    }
    log::info!("[petals] spawned {PETAL_COUNT}");
}

fn spawn(document: &web::Document, spec: &PetalSpec) -> Option<web::HtmlElement> {
    let el: web::HtmlElement = document.create_element("span").ok()?.dyn_into().ok()?;
    el.set_class_name("petal");
    dom::set_style(&el, "left", &format!("{}%", spec.left_percent));
    dom::set_style(&el, "animation-delay", &format!("{}s", spec.delay_sec));
    dom::set_style(&el, "animation-duration", &format!("{}s", spec.duration_sec));
    Some(el)
}
