//! Platform-independent core of the VIBEDEV landing page: course data, card
//! and shell markup, path geometry, and the scroll-driven roadmap scene.
//!
//! Nothing here touches the DOM; the web crate measures the page, feeds
//! events in and applies the resulting frames.

pub mod ambient;
pub mod card;
pub mod color;
pub mod config;
pub mod constants;
pub mod ease;
pub mod error;
pub mod geometry;
pub mod icons;
pub mod layout;
pub mod levels;
pub mod scene;
pub mod session;
pub mod shell;
pub mod tween;
pub mod waypoints;

pub use ambient::*;
pub use color::Rgba;
pub use config::RoadmapConfig;
pub use ease::Ease;
pub use error::{RoadmapError, RoadmapResult};
pub use geometry::*;
pub use layout::*;
pub use levels::*;
pub use scene::*;
pub use session::*;
pub use waypoints::*;
