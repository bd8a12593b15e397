// DOM hooks shared by mounting, measurement and the stages.
// Selectors are resolved once at mount into owned element handles; nothing
// looks elements up by name after that.

// Mount points
pub const APP_ROOT_ID: &str = "app";
pub const ROADMAP_ROOT_ID: &str = "roadmap-root";

// Page shell
pub const GRID_BG_SELECTOR: &str = ".grid-bg";

// Roadmap SVG
pub const ROADMAP_SVG_SELECTOR: &str = ".roadmap-svg";
pub const ROADMAP_PATH_SELECTOR: &str = ".roadmap-path";
pub const FLOW_PATH_SELECTOR: &str = ".data-flow-path";
pub const GLOW_BLUR_SELECTOR: &str = ".path-glow-blur";
pub const GRADIENT_STOP_SELECTOR: &str = "#roadmap-gradient stop";
pub const MARKER_SELECTOR: &str = ".roadmap-marker";

// Per-level handles (index is filled in at mount)
pub const CARD_SLOT_ATTR: &str = "data-slot-index";
pub const CARD_ATTR: &str = "data-level-index";
pub const DOT_ATTR: &str = "data-dot-index";

// Dot glow radius in CSS pixels
pub const DOT_GLOW_RADIUS_PX: f64 = roadmap_core::constants::DOT_GLOW_RADIUS_PX;

// Upper bound on a single frame step; long pauses (tab switch) should not fast-forward tweens
pub const MAX_FRAME_DT_SEC: f64 = 0.1;
