//! Momentum-drag controller for the horizontal project carousel.
//!
//! Translates pointer drags on a scrollable track into scroll position,
//! carries inertial deceleration after release, and derives the dependent
//! visual readouts (progress bar fill, item counter, per-image parallax
//! focal point) from the current scroll position.
//!
//! The controller is headless: every DOM touch goes through the
//! [`CarouselView`] bindings, so the same logic runs against the live page
//! or a recording test double.

use crate::constants::{DRAG_SPEED_MULTIPLIER, MOMENTUM_FRICTION, MOMENTUM_MIN_VELOCITY};

/// Horizontal bounding box of one carousel item, in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemRect {
    pub left: f32,
    pub width: f32,
}

/// View bindings the controller drives.
///
/// The scroll container owns the scroll position; the controller only reads
/// and writes `scroll_left`. Progress bar, counter and parallax images are
/// optional on the page, so implementations silently skip the corresponding
/// setters when the element is absent.
pub trait CarouselView {
    fn scroll_left(&self) -> f32;
    /// Set the track scroll offset. Implementations clamp to
    /// `[0, scroll_width - client_width]` the way a browser clamps
    /// `scrollLeft`; the controller reads the realized value back.
    fn set_scroll_left(&mut self, px: f32);
    fn scroll_width(&self) -> f32;
    fn client_width(&self) -> f32;
    /// Left page offset of the container; pointer coordinates arrive
    /// page-relative.
    fn offset_left(&self) -> f32;
    fn viewport_width(&self) -> f32;
    fn item_rects(&self) -> Vec<ItemRect>;
    fn set_progress_percent(&mut self, percent: f32);
    fn set_counter_text(&mut self, text: &str);
    fn set_item_focal_x(&mut self, index: usize, percent: f32);
    /// False once the container has left the page. A momentum frame that
    /// fires afterwards stops instead of mutating a detached element.
    fn is_connected(&self) -> bool {
        true
    }
}

/// One active pointer interaction; fixed at gesture start, discarded on
/// release.
#[derive(Clone, Copy, Debug)]
struct DragSession {
    start_x: f32,
    base_scroll_left: f32,
}

/// Controller lifecycle: Idle -> Dragging -> Decelerating -> Idle. A new
/// grab interrupts deceleration; no other transitions exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Dragging,
    Decelerating,
}

/// Whether the momentum loop wants another animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameControl {
    Continue,
    Stop,
}

pub struct CarouselController {
    drag: Option<DragSession>,
    vel_x: f32,
    item_count: usize,
}

impl CarouselController {
    pub fn new(item_count: usize) -> Self {
        Self {
            drag: None,
            vel_x: 0.0,
            item_count,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.drag.is_some() {
            Phase::Dragging
        } else if self.vel_x.abs() > MOMENTUM_MIN_VELOCITY {
            Phase::Decelerating
        } else {
            Phase::Idle
        }
    }

    /// Begin a drag session at a page-relative pointer x.
    ///
    /// The caller cancels any scheduled momentum frame before the next
    /// repaint; a stale frame that still fires is ignored by
    /// [`Self::momentum_frame`], so at most one mutation source is ever
    /// active.
    pub fn drag_start(&mut self, pointer_x: f32, view: &impl CarouselView) {
        self.drag = Some(DragSession {
            start_x: pointer_x - view.offset_left(),
            base_scroll_left: view.scroll_left(),
        });
    }

    /// Apply a drag movement; no-op without an active session.
    ///
    /// Velocity records the *realized* scroll delta, not the requested
    /// walk: the view clamps at the track bounds and momentum must not
    /// carry motion the track never performed.
    pub fn drag_move(&mut self, pointer_x: f32, view: &mut impl CarouselView) {
        let Some(session) = self.drag else { return };
        let x = pointer_x - view.offset_left();
        let walk = (x - session.start_x) * DRAG_SPEED_MULTIPLIER;
        let prev = view.scroll_left();
        view.set_scroll_left(session.base_scroll_left - walk);
        self.vel_x = view.scroll_left() - prev;
        self.sync_readouts(view);
    }

    /// End the session; the last measured velocity feeds the momentum
    /// phase, which the caller schedules on the next display refresh.
    pub fn drag_end(&mut self) {
        self.drag = None;
    }

    /// One momentum step: advance by the current velocity, then decay it.
    ///
    /// Returns [`FrameControl::Continue`] while |velocity| stays above the
    /// halt threshold; readouts are refreshed on every continuing frame.
    pub fn momentum_frame(&mut self, view: &mut impl CarouselView) -> FrameControl {
        if self.drag.is_some() || !view.is_connected() {
            return FrameControl::Stop;
        }
        view.set_scroll_left(view.scroll_left() + self.vel_x);
        self.vel_x *= MOMENTUM_FRICTION;
        if self.vel_x.abs() > MOMENTUM_MIN_VELOCITY {
            self.sync_readouts(view);
            FrameControl::Continue
        } else {
            FrameControl::Stop
        }
    }

    /// Recompute every readout from the current scroll position.
    ///
    /// Runs on drag moves and momentum frames; the host must also invoke it
    /// for native scroll events (trackpad, wheel), which bypass both paths.
    pub fn sync_readouts(&self, view: &mut impl CarouselView) {
        let max_scroll = view.scroll_width() - view.client_width();
        let progress = progress_fraction(view.scroll_left(), max_scroll);
        view.set_progress_percent(progress * 100.0);
        view.set_counter_text(&counter_label(progress, self.item_count));

        let viewport = view.viewport_width();
        let rects = view.item_rects();
        for (i, rect) in rects.iter().enumerate() {
            if let Some(focal) = parallax_focal_x(rect, viewport) {
                view.set_item_focal_x(i, focal);
            }
        }
    }
}

/// Scroll progress in `[0, 1]`. Defined as 0 whenever the track does not
/// actually overflow (`max_scroll` zero, negative or non-finite), so the
/// readouts never divide by zero.
pub fn progress_fraction(scroll_left: f32, max_scroll: f32) -> f32 {
    if !max_scroll.is_finite() || max_scroll <= 0.0 {
        return 0.0;
    }
    (scroll_left / max_scroll).clamp(0.0, 1.0)
}

/// Zero-padded item counter, "01" through item count.
///
/// Never reads below 1 even at zero progress, never above `item_count`.
pub fn counter_label(progress: f32, item_count: usize) -> String {
    let raw = (progress * item_count as f32).ceil() as i64;
    let shown = raw.clamp(1, item_count.max(1) as i64);
    format!("{shown:02}")
}

/// Horizontal focal position (as an `object-position` percentage) for a
/// parallax image whose card occupies `rect`.
///
/// Returns `None` for cards entirely outside the horizontal viewport; those
/// are skipped rather than panned. The pan runs from 100% down to 0% as the
/// card crosses the viewport right-to-left.
pub fn parallax_focal_x(rect: &ItemRect, viewport_width: f32) -> Option<f32> {
    let right = rect.left + rect.width;
    if rect.left >= viewport_width || right <= 0.0 {
        return None;
    }
    let span = viewport_width + rect.width;
    if span <= 0.0 {
        return None;
    }
    let percentage = right / span;
    Some((1.0 - percentage) * 100.0)
}
