//! DOM wiring for the momentum project carousel.
//!
//! Owns the live [`CarouselView`] bindings, the pointer/touch listeners and
//! the `requestAnimationFrame` momentum loop. All carousel semantics live
//! in `portfolio_core::carousel`; this module only moves events and frames
//! across the DOM boundary.

use std::cell::RefCell;
use std::rc::Rc;

use portfolio_core::carousel::{CarouselController, CarouselView, FrameControl, ItemRect, Phase};
use portfolio_core::constants::PROJECT_COUNT;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{
    CAROUSEL_COUNTER_ID, CAROUSEL_PROGRESS_ID, CAROUSEL_TRACK_ID, CAROUSEL_WRAPPER_ID,
    GRABBING_CLASS, PARALLAX_IMG_SELECTOR,
};
use crate::dom;

/// Live DOM bindings behind the controller's view trait.
///
/// Progress bar, counter and parallax images are optional page features;
/// the setters silently skip whatever is absent.
pub struct DomCarouselView {
    wrapper: web::HtmlElement,
    progress_bar: Option<web::HtmlElement>,
    counter: Option<web::HtmlElement>,
    images: Vec<web::HtmlElement>,
}

impl DomCarouselView {
    fn new(document: &web::Document, wrapper: web::HtmlElement) -> Self {
        Self {
            wrapper,
            progress_bar: dom::element_by_id(document, CAROUSEL_PROGRESS_ID),
            counter: dom::element_by_id(document, CAROUSEL_COUNTER_ID),
            images: dom::query_all(document, PARALLAX_IMG_SELECTOR),
        }
    }
}

impl CarouselView for DomCarouselView {
    fn scroll_left(&self) -> f32 {
        self.wrapper.scroll_left() as f32
    }

    fn set_scroll_left(&mut self, px: f32) {
        self.wrapper.set_scroll_left(px.round() as i32);
    }

    fn scroll_width(&self) -> f32 {
        self.wrapper.scroll_width() as f32
    }

    fn client_width(&self) -> f32 {
        self.wrapper.client_width() as f32
    }

    fn offset_left(&self) -> f32 {
        self.wrapper.offset_left() as f32
    }

    fn viewport_width(&self) -> f32 {
        web::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32
    }

    fn item_rects(&self) -> Vec<ItemRect> {
        self.images
            .iter()
            .map(|img| {
                // Parallax is measured on the image's card, not the image.
                let rect = img
                    .parent_element()
                    .map(|p| p.get_bounding_client_rect())
                    .unwrap_or_else(|| img.get_bounding_client_rect());
                ItemRect {
                    left: rect.left() as f32,
                    width: rect.width() as f32,
                }
            })
            .collect()
    }

    fn set_progress_percent(&mut self, percent: f32) {
        if let Some(bar) = &self.progress_bar {
            dom::set_style(bar, "width", &format!("{percent}%"));
        }
    }

    fn set_counter_text(&mut self, text: &str) {
        if let Some(counter) = &self.counter {
            counter.set_inner_text(text);
        }
    }

    fn set_item_focal_x(&mut self, index: usize, percent: f32) {
        if let Some(img) = self.images.get(index) {
            dom::set_style(img, "object-position", &format!("{percent}% 50%"));
        }
    }

    fn is_connected(&self) -> bool {
        self.wrapper.is_connected()
    }
}

type SharedController = Rc<RefCell<CarouselController>>;
type SharedView = Rc<RefCell<DomCarouselView>>;
type FrameHandle = Rc<RefCell<Option<i32>>>;
type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn cancel_momentum(handle: &FrameHandle) {
    if let Some(id) = handle.borrow_mut().take() {
        if let Some(w) = web::window() {
            let _ = w.cancel_animation_frame(id);
        }
    }
}

fn schedule_momentum(tick: &Tick, handle: &FrameHandle) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            *handle.borrow_mut() = Some(id);
        }
    }
}

/// Cancel any in-flight momentum trajectory and start a fresh one from the
/// controller's current velocity. There is at most one scheduled frame at
/// any time.
fn begin_momentum(tick: &Tick, handle: &FrameHandle) {
    cancel_momentum(handle);
    schedule_momentum(tick, handle);
}

pub fn wire(document: &web::Document) {
    let Some(wrapper) = dom::element_by_id(document, CAROUSEL_WRAPPER_ID) else {
        log::info!("[carousel] no wrapper on this page; skipping");
        return;
    };
    if document.get_element_by_id(CAROUSEL_TRACK_ID).is_none() {
        log::info!("[carousel] no track on this page; skipping");
        return;
    }

    let controller: SharedController = Rc::new(RefCell::new(CarouselController::new(PROJECT_COUNT)));
    let view: SharedView = Rc::new(RefCell::new(DomCarouselView::new(document, wrapper.clone())));
    let momentum_handle: FrameHandle = Rc::new(RefCell::new(None));

    // Momentum tick: one decay step per display refresh, re-armed for as
    // long as the controller asks for more frames.
    let tick: Tick = Rc::new(RefCell::new(None));
    {
        let controller = controller.clone();
        let view = view.clone();
        let handle = momentum_handle.clone();
        let tick_rearm = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let control = controller
                .borrow_mut()
                .momentum_frame(&mut *view.borrow_mut());
            match control {
                FrameControl::Continue => schedule_momentum(&tick_rearm, &handle),
                FrameControl::Stop => *handle.borrow_mut() = None,
            }
        }) as Box<dyn FnMut()>));
    }

    // mousedown: grab the track, interrupting any running momentum.
    {
        let controller = controller.clone();
        let view = view.clone();
        let handle = momentum_handle.clone();
        let wrapper_grab = wrapper.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            cancel_momentum(&handle);
            controller
                .borrow_mut()
                .drag_start(ev.page_x() as f32, &*view.borrow());
            let _ = wrapper_grab.class_list().add_1(GRABBING_CLASS);
        }) as Box<dyn FnMut(_)>);
        let _ = wrapper
            .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // mousemove: drag. preventDefault only while dragging, so native text
    // and image selection stays available otherwise.
    {
        let controller = controller.clone();
        let view = view.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            if controller.borrow().phase() != Phase::Dragging {
                return;
            }
            ev.prevent_default();
            controller
                .borrow_mut()
                .drag_move(ev.page_x() as f32, &mut *view.borrow_mut());
        }) as Box<dyn FnMut(_)>);
        let _ = wrapper
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // mouseup and mouseleave both release the grab: a session must not
    // outlive the pointer leaving the tracked element.
    for release_event in ["mouseup", "mouseleave"] {
        let controller = controller.clone();
        let handle = momentum_handle.clone();
        let tick = tick.clone();
        let wrapper_release = wrapper.clone();
        let closure = Closure::wrap(Box::new(move |_: web::MouseEvent| {
            controller.borrow_mut().drag_end();
            let _ = wrapper_release.class_list().remove_1(GRABBING_CLASS);
            begin_momentum(&tick, &handle);
        }) as Box<dyn FnMut(_)>);
        let _ = wrapper
            .add_event_listener_with_callback(release_event, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Touch family, same semantics. No preventDefault on touchmove: the
    // gesture already targets the scrollable element.
    {
        let controller = controller.clone();
        let view = view.clone();
        let handle = momentum_handle.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            let Some(touch) = ev.touches().get(0) else { return };
            cancel_momentum(&handle);
            controller
                .borrow_mut()
                .drag_start(touch.page_x() as f32, &*view.borrow());
        }) as Box<dyn FnMut(_)>);
        let _ = wrapper
            .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let controller = controller.clone();
        let view = view.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            let Some(touch) = ev.touches().get(0) else { return };
            controller
                .borrow_mut()
                .drag_move(touch.page_x() as f32, &mut *view.borrow_mut());
        }) as Box<dyn FnMut(_)>);
        let _ = wrapper
            .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let controller = controller.clone();
        let handle = momentum_handle.clone();
        let tick = tick.clone();
        let closure = Closure::wrap(Box::new(move |_: web::TouchEvent| {
            controller.borrow_mut().drag_end();
            begin_momentum(&tick, &handle);
        }) as Box<dyn FnMut(_)>);
        let _ = wrapper
            .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Native scroll (trackpad, wheel) bypasses the drag and momentum paths
    // entirely; readouts still have to follow.
    {
        let controller = controller.clone();
        let view = view.clone();
        dom::on_event(&wrapper, "scroll", move |_| {
            controller.borrow().sync_readouts(&mut *view.borrow_mut());
        });
    }

    // Initial readout state before any interaction.
    controller.borrow().sync_readouts(&mut *view.borrow_mut());
    log::info!("[carousel] wired with {} parallax images", view.borrow().images.len());
}
