// Page-behavior tuning constants shared by the core logic and the web glue.

// Project carousel drag & momentum
/// Pointer-walk to scroll-distance multiplier (drag sensitivity).
pub const DRAG_SPEED_MULTIPLIER: f32 = 2.0;
/// Geometric velocity decay applied once per scheduled animation frame.
/// Deliberately frame-rate dependent: the decay cadence follows the display
/// refresh, matching the reference feel of the page.
pub const MOMENTUM_FRICTION: f32 = 0.95;
/// Momentum halts once |velocity| falls to this many pixels per frame.
pub const MOMENTUM_MIN_VELOCITY: f32 = 0.5;
/// Number of project cards on the carousel track.
pub const PROJECT_COUNT: usize = 4;

// Loader splash
pub const LOADER_TICK_MS: i32 = 150;
/// Random progress step per tick, `MIN..MAX` (exclusive upper bound).
pub const LOADER_STEP_MIN: u32 = 5;
pub const LOADER_STEP_MAX: u32 = 20;
/// Pause between hitting 100% and the exit transition.
pub const LOADER_EXIT_DELAY_MS: i32 = 500;
/// If the window `load` event never fires, force the loader after this long.
pub const LOADER_WATCHDOG_MS: i32 = 4000;

// Decorative petals
pub const PETAL_COUNT: usize = 30;
pub const PETAL_DELAY_MAX_SEC: f32 = 5.0;
pub const PETAL_DURATION_MIN_SEC: f32 = 5.0;
pub const PETAL_DURATION_MAX_SEC: f32 = 15.0;

// Cursor follower time constants (seconds)
pub const CURSOR_DOT_TAU_SEC: f32 = 0.1;
pub const CURSOR_RING_TAU_SEC: f32 = 0.3;

// Page scroll thresholds
/// Navbar picks up its shadow once the page scrolls past this offset.
pub const NAVBAR_ELEVATE_AFTER_PX: f64 = 80.0;
/// Back-to-top button shows after scrolling this fraction of the viewport.
pub const BACK_TO_TOP_VIEWPORT_FRACTION: f64 = 0.5;
/// Reveal sections once their top enters this fraction of the viewport.
pub const REVEAL_VIEWPORT_FRACTION: f64 = 0.85;
/// Hero background translates by this fraction of the scroll offset.
pub const HERO_PARALLAX_FACTOR: f64 = 0.3;
