/// Roadmap layout and choreography tuning constants.
///
/// Distances are in SVG user units unless noted; durations are seconds.

// Path coordinate space (matches the `viewBox` of the roadmap SVG)
pub const INTRINSIC_WIDTH: f64 = 500.0;
pub const INTRINSIC_HEIGHT: f64 = 2000.0;

// Waypoint layout: card_top(i) = (BASE + i * SPACING) * scale
pub const WAYPOINT_BASE_OFFSET: f64 = 100.0;
pub const WAYPOINT_SPACING: f64 = 600.0;

// Section height before scaling; tall enough that "bottom center" passes the last card
pub const ROADMAP_MIN_HEIGHT: f64 = 3200.0;

// Scale changes smaller than this do not count as a relayout
pub const SCALE_EPSILON: f64 = 1e-4;

// Arc length accuracy passed to kurbo
pub const ARCLEN_ACCURACY: f64 = 1e-3;

// Scroll-coupled timeline
pub const SCRUB_TAU_SEC: f64 = 1.2; // playhead lag behind scroll progress
pub const SCRUB_SETTLE_EPSILON: f64 = 1e-4; // snap playhead onto target when this close
pub const SNAP_DELAY_SEC: f64 = 0.05; // idle time before snapping engages
pub const SNAP_DURATION_MIN_SEC: f64 = 0.2;
pub const SNAP_DURATION_MAX_SEC: f64 = 0.5;
pub const SNAP_PROGRESS_PER_SEC: f64 = 1.0; // progress covered per second of snap travel
pub const SNAP_SELF_SCROLL_TOLERANCE_PX: f64 = 1.5;

// Waypoint activation
pub const ACTIVATION_WINDOW_WIDTH: f64 = 0.1;
pub const ACTIVATE_DURATION_SEC: f64 = 0.8;
pub const ACTIVATE_OVERSHOOT: f64 = 1.2;
pub const DEACTIVATE_DURATION_SEC: f64 = 0.6;
pub const DOT_DURATION_SEC: f64 = 0.4;

// Card visuals
pub const BASELINE_CARD_OPACITY: f64 = 0.1; // before any activation
pub const INACTIVE_CARD_OPACITY: f64 = 0.15;
pub const INACTIVE_CARD_SCALE: f64 = 0.9;
pub const INACTIVE_CARD_OFFSET_PX: f64 = 40.0;
pub const INACTIVE_CARD_BLUR_PX: f64 = 4.0;

// Waypoint dot visuals
pub const DOT_ACTIVE_SCALE: f64 = 1.8;
pub const DOT_GLOW_RADIUS_PX: f64 = 30.0;
pub const DOT_IDLE_COLOR: &str = "#111111";
pub const DOT_ACTIVE_BORDER: &str = "#ffffff";
pub const DOT_IDLE_BORDER: &str = "#ffffff1a"; // white at 10%

// Ambient: flow dashes along the guide path
pub const FLOW_DASH: f64 = 15.0;
pub const FLOW_GAP: f64 = 60.0;
pub const FLOW_LOOP_SEC: f64 = 3.0; // one dash period per loop

// Ambient: breathing glow
pub const GLOW_STD_DEV_MIN: f64 = 3.0;
pub const GLOW_STD_DEV_MAX: f64 = 6.0;
pub const GLOW_HALF_PERIOD_SEC: f64 = 2.5;

// Ambient: gradient stop cycling
pub const GRADIENT_HALF_PERIOD_SEC: f64 = 4.0;
pub const GRADIENT_STAGGER_AMOUNT_SEC: f64 = 1.0;
pub const GRADIENT_BASE_STOPS: [&str; 3] = ["#ec4899", "#a855f7", "#22d3ee"];
pub const GRADIENT_CYCLE_STOPS: [&str; 3] = ["#f472b6", "#d946ef", "#22d3ee"];

// Page shell
pub const GRID_TILE_PX: f64 = 100.0;
pub const GRID_DRIFT_LOOP_SEC: f64 = 20.0;
