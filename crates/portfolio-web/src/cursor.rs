//! Custom cursor follower: a dot that tracks the pointer tightly and a
//! ring that trails it on a slower time constant.

use std::cell::RefCell;
use std::rc::Rc;

use instant::Instant;
use portfolio_core::constants::{CURSOR_DOT_TAU_SEC, CURSOR_RING_TAU_SEC};
use portfolio_core::motion::approach;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{
    CURSOR_DOT_SELECTOR, CURSOR_HOVER_CLASS, CURSOR_RING_SELECTOR, HOVER_TRIGGER_SELECTOR,
};
use crate::dom;

struct Follower {
    el: web::HtmlElement,
    x: f32,
    y: f32,
    tau: f32,
}

impl Follower {
    fn step(&mut self, target: (f32, f32), dt: f32) {
        self.x = approach(self.x, target.0, self.tau, dt);
        self.y = approach(self.y, target.1, self.tau, dt);
        dom::set_style(
            &self.el,
            "transform",
            &format!("translate3d({}px, {}px, 0) translate(-50%, -50%)", self.x, self.y),
        );
    }
}

pub fn wire(document: &web::Document) {
    let dot = dom::query_all(document, CURSOR_DOT_SELECTOR).into_iter().next();
    let ring = dom::query_all(document, CURSOR_RING_SELECTOR).into_iter().next();
    let (Some(dot), Some(ring)) = (dot, ring) else {
        log::info!("[cursor] follower elements missing; skipping");
        return;
    };

    let target = Rc::new(RefCell::new((0.0_f32, 0.0_f32)));
    {
        let target = target.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            *target.borrow_mut() = (ev.client_x() as f32, ev.client_y() as f32);
        }) as Box<dyn FnMut(_)>);
        let _ = document
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Interactive elements swell the ring via a body class.
    if let Some(body) = document.body() {
        for trigger in dom::query_all(document, HOVER_TRIGGER_SELECTOR) {
            let body_enter = body.clone();
            dom::on_event(&trigger, "mouseenter", move |_| {
                let _ = body_enter.class_list().add_1(CURSOR_HOVER_CLASS);
            });
            let body_leave = body.clone();
            dom::on_event(&trigger, "mouseleave", move |_| {
                let _ = body_leave.class_list().remove_1(CURSOR_HOVER_CLASS);
            });
        }
    }

    // Permanent rAF loop smoothing both followers toward the pointer.
    let followers = Rc::new(RefCell::new((
        Follower { el: dot, x: 0.0, y: 0.0, tau: CURSOR_DOT_TAU_SEC },
        Follower { el: ring, x: 0.0, y: 0.0, tau: CURSOR_RING_TAU_SEC },
    )));
    let last_frame = Rc::new(RefCell::new(Instant::now()));
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    {
        let frame_rearm = frame.clone();
        *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let now = Instant::now();
            let dt = now
                .duration_since(*last_frame.borrow())
                .as_secs_f32()
                .min(0.1);
            *last_frame.borrow_mut() = now;

            let pointer = *target.borrow();
            let mut pair = followers.borrow_mut();
            pair.0.step(pointer, dt);
            pair.1.step(pointer, dt);

            request_frame(&frame_rearm);
        }) as Box<dyn FnMut()>));
    }
    request_frame(&frame);
    log::info!("[cursor] follower running");
}

fn request_frame(frame: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), frame.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
