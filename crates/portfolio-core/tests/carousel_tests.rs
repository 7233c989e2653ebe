// Host-side tests for the momentum carousel controller, run against a
// recording view double instead of a live DOM.

use portfolio_core::carousel::{
    counter_label, parallax_focal_x, progress_fraction, CarouselController, CarouselView,
    FrameControl, ItemRect, Phase,
};
use portfolio_core::constants::PROJECT_COUNT;

/// Test double: behaves like a browser scroll container (clamped
/// `scrollLeft`) and records every readout mutation for assertions.
#[derive(Clone, Debug)]
struct RecordingView {
    scroll_left: f32,
    scroll_width: f32,
    client_width: f32,
    offset_left: f32,
    viewport_width: f32,
    items: Vec<ItemRect>,
    connected: bool,
    progress_history: Vec<f32>,
    counter_history: Vec<String>,
    focal_history: Vec<(usize, f32)>,
}

impl RecordingView {
    fn new(client_width: f32, scroll_width: f32) -> Self {
        Self {
            scroll_left: 0.0,
            scroll_width,
            client_width,
            offset_left: 0.0,
            viewport_width: 1000.0,
            items: Vec::new(),
            connected: true,
            progress_history: Vec::new(),
            counter_history: Vec::new(),
            focal_history: Vec::new(),
        }
    }

    fn max_scroll(&self) -> f32 {
        (self.scroll_width - self.client_width).max(0.0)
    }

    fn last_progress(&self) -> f32 {
        *self.progress_history.last().expect("no progress recorded")
    }

    fn last_counter(&self) -> &str {
        self.counter_history.last().expect("no counter recorded")
    }
}

impl CarouselView for RecordingView {
    fn scroll_left(&self) -> f32 {
        self.scroll_left
    }

    fn set_scroll_left(&mut self, px: f32) {
        self.scroll_left = px.clamp(0.0, self.max_scroll());
    }

    fn scroll_width(&self) -> f32 {
        self.scroll_width
    }

    fn client_width(&self) -> f32 {
        self.client_width
    }

    fn offset_left(&self) -> f32 {
        self.offset_left
    }

    fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    fn item_rects(&self) -> Vec<ItemRect> {
        self.items.clone()
    }

    fn set_progress_percent(&mut self, percent: f32) {
        self.progress_history.push(percent);
    }

    fn set_counter_text(&mut self, text: &str) {
        self.counter_history.push(text.to_string());
    }

    fn set_item_focal_x(&mut self, index: usize, percent: f32) {
        self.focal_history.push((index, percent));
    }

    fn is_connected(&self) -> bool {
        self.connected
    }
}

#[test]
fn drag_walk_applies_speed_multiplier() {
    // Reference scenario: 500px viewport, 2000px track, drag 300 -> 100.
    let mut view = RecordingView::new(500.0, 2000.0);
    let mut ctl = CarouselController::new(PROJECT_COUNT);

    ctl.drag_start(300.0, &view);
    assert_eq!(ctl.phase(), Phase::Dragging);
    ctl.drag_move(100.0, &mut view);

    assert_eq!(view.scroll_left, 400.0);
    let expected = 400.0 / 1500.0 * 100.0;
    assert!((view.last_progress() - expected).abs() < 1e-3);
    assert_eq!(view.last_counter(), "02");
}

#[test]
fn drag_clamps_at_track_start_and_velocity_reflects_realized_motion() {
    let mut view = RecordingView::new(500.0, 2000.0);
    let mut ctl = CarouselController::new(PROJECT_COUNT);

    // Dragging right from scroll 0 requests a negative scrollLeft; the view
    // clamps to 0 and the realized delta (hence velocity) is 0.
    ctl.drag_start(100.0, &view);
    ctl.drag_move(400.0, &mut view);
    assert_eq!(view.scroll_left, 0.0);
    ctl.drag_end();

    // No realized motion -> no momentum.
    assert_eq!(ctl.momentum_frame(&mut view), FrameControl::Stop);
    assert_eq!(view.scroll_left, 0.0);
    assert_eq!(ctl.phase(), Phase::Idle);
}

#[test]
fn drag_move_without_session_is_noop() {
    let mut view = RecordingView::new(500.0, 2000.0);
    let mut ctl = CarouselController::new(PROJECT_COUNT);

    ctl.drag_move(250.0, &mut view);
    assert_eq!(view.scroll_left, 0.0);
    assert!(view.progress_history.is_empty());
}

#[test]
fn final_scroll_matches_clamped_walk_for_any_move_sequence() {
    // Only the last pointer position matters within one session.
    let mut view = RecordingView::new(500.0, 2000.0);
    view.scroll_left = 600.0;
    let mut ctl = CarouselController::new(PROJECT_COUNT);

    ctl.drag_start(300.0, &view);
    for x in [290.0, 350.0, 120.0, 480.0, 200.0] {
        ctl.drag_move(x, &mut view);
    }

    let expected = (600.0_f32 - (200.0 - 300.0) * 2.0).clamp(0.0, 1500.0);
    assert_eq!(view.scroll_left, expected);
}

/// Puts the controller into the released state with a known velocity by
/// performing a single drag move whose realized delta is `vel`.
fn release_with_velocity(ctl: &mut CarouselController, view: &mut RecordingView, vel: f32) {
    ctl.drag_start(0.0, view);
    ctl.drag_move(-vel / 2.0, view);
    ctl.drag_end();
}

#[test]
fn momentum_decays_geometrically_and_halts_at_threshold() {
    // Reference scenario: released at 20 px/frame, friction 0.95 per frame,
    // halting at |v| <= 0.5 -> exactly 72 frames.
    let mut view = RecordingView::new(500.0, 20_000.0);
    let mut ctl = CarouselController::new(PROJECT_COUNT);
    release_with_velocity(&mut ctl, &mut view, 20.0);
    assert_eq!(view.scroll_left, 20.0);
    assert_eq!(ctl.phase(), Phase::Decelerating);

    let start = view.scroll_left;
    let mut frames = 0;
    while ctl.momentum_frame(&mut view) == FrameControl::Continue {
        frames += 1;
        assert!(frames < 1000, "momentum loop failed to terminate");
    }
    frames += 1; // the Stop frame still applied its velocity step

    assert_eq!(frames, 72);
    assert_eq!(ctl.phase(), Phase::Idle);

    // Total travel is the geometric series sum(20 * 0.95^k), k=0..71.
    let expected: f32 = (0..72).map(|k| 20.0 * 0.95_f32.powi(k)).sum();
    assert!((view.scroll_left - start - expected).abs() < 0.5);
}

#[test]
fn new_drag_interrupts_momentum() {
    let mut view = RecordingView::new(500.0, 20_000.0);
    let mut ctl = CarouselController::new(PROJECT_COUNT);
    release_with_velocity(&mut ctl, &mut view, 20.0);
    assert_eq!(ctl.momentum_frame(&mut view), FrameControl::Continue);

    // Grab again: a stale scheduled frame must not mutate the scroll.
    ctl.drag_start(300.0, &view);
    let before = view.scroll_left;
    assert_eq!(ctl.momentum_frame(&mut view), FrameControl::Stop);
    assert_eq!(view.scroll_left, before);
}

#[test]
fn momentum_stops_when_view_detaches() {
    let mut view = RecordingView::new(500.0, 20_000.0);
    let mut ctl = CarouselController::new(PROJECT_COUNT);
    release_with_velocity(&mut ctl, &mut view, 20.0);

    view.connected = false;
    let before = view.scroll_left;
    assert_eq!(ctl.momentum_frame(&mut view), FrameControl::Stop);
    assert_eq!(view.scroll_left, before);
}

#[test]
fn native_scroll_sync_updates_all_readouts() {
    let mut view = RecordingView::new(500.0, 2000.0);
    view.items = vec![ItemRect {
        left: 200.0,
        width: 300.0,
    }];
    view.scroll_left = 750.0; // trackpad scrolled without any drag
    let ctl = CarouselController::new(PROJECT_COUNT);

    ctl.sync_readouts(&mut view);

    assert!((view.last_progress() - 50.0).abs() < 1e-3);
    assert_eq!(view.last_counter(), "02");
    assert_eq!(view.focal_history.len(), 1);
}

#[test]
fn progress_is_monotonic_in_scroll_position() {
    let mut prev = -1.0;
    for step in 0..=60 {
        let scroll = step as f32 * 25.0;
        let p = progress_fraction(scroll, 1500.0);
        assert!(p >= prev, "progress decreased at scroll {scroll}");
        prev = p;
    }
}

#[test]
fn progress_is_zero_when_track_does_not_overflow() {
    assert_eq!(progress_fraction(100.0, 0.0), 0.0);
    assert_eq!(progress_fraction(100.0, -50.0), 0.0);
    assert_eq!(progress_fraction(100.0, f32::NAN), 0.0);
    assert_eq!(progress_fraction(100.0, f32::INFINITY), 0.0);
}

#[test]
fn counter_stays_within_item_bounds() {
    assert_eq!(counter_label(0.0, 4), "01");
    assert_eq!(counter_label(0.267, 4), "02");
    assert_eq!(counter_label(1.0, 4), "04");
    // Even absurd progress never overruns the item count.
    assert_eq!(counter_label(2.0, 4), "04");
}

#[test]
fn parallax_focal_matches_reference_scenario() {
    // rect.left=200, width=300, viewport=1000 -> focal ~61.5%.
    let rect = ItemRect {
        left: 200.0,
        width: 300.0,
    };
    let focal = parallax_focal_x(&rect, 1000.0).expect("rect is visible");
    assert!((focal - 61.538).abs() < 0.01);
}

#[test]
fn parallax_skips_offscreen_items() {
    let right_of_viewport = ItemRect {
        left: 1000.0,
        width: 300.0,
    };
    assert_eq!(parallax_focal_x(&right_of_viewport, 1000.0), None);

    let left_of_viewport = ItemRect {
        left: -400.0,
        width: 300.0,
    };
    assert_eq!(parallax_focal_x(&left_of_viewport, 1000.0), None);
}

#[test]
fn phase_walks_idle_dragging_decelerating_idle() {
    let mut view = RecordingView::new(500.0, 20_000.0);
    let mut ctl = CarouselController::new(PROJECT_COUNT);
    assert_eq!(ctl.phase(), Phase::Idle);

    ctl.drag_start(0.0, &view);
    assert_eq!(ctl.phase(), Phase::Dragging);
    ctl.drag_move(-5.0, &mut view);
    ctl.drag_end();
    assert_eq!(ctl.phase(), Phase::Decelerating);

    while ctl.momentum_frame(&mut view) == FrameControl::Continue {}
    assert_eq!(ctl.phase(), Phase::Idle);
}
