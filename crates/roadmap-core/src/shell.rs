//! Page shell: static nav/hero/footer markup, the one-shot hero entrance and
//! the drifting background grid.

use crate::constants::{GRID_DRIFT_LOOP_SEC, GRID_TILE_PX};
use crate::ease::Ease;
use crate::icons::glyph;
use crate::session::Scene;
use crate::tween::{Cycle, Lerp, LoopMode};

/// Animated hero element properties.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroStyle {
    pub opacity: f64,
    pub scale: f64,
    pub x: f64,
    pub y: f64,
}

impl HeroStyle {
    pub const REST: HeroStyle = HeroStyle {
        opacity: 1.0,
        scale: 1.0,
        x: 0.0,
        y: 0.0,
    };
}

impl Lerp for HeroStyle {
    fn lerp(self, o: Self, t: f64) -> Self {
        Self {
            opacity: self.opacity.lerp(o.opacity, t),
            scale: self.scale.lerp(o.scale, t),
            x: self.x.lerp(o.x, t),
            y: self.y.lerp(o.y, t),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeroPart {
    Tag,
    Title,
    Subtitle,
}

impl HeroPart {
    pub const ALL: [HeroPart; 3] = [HeroPart::Tag, HeroPart::Title, HeroPart::Subtitle];

    pub fn class_name(self) -> &'static str {
        match self {
            HeroPart::Tag => "hero-tag",
            HeroPart::Title => "hero-title",
            HeroPart::Subtitle => "hero-subtitle",
        }
    }
}

/// A "from" tween placed on the entrance timeline.
#[derive(Clone, Copy, Debug)]
pub struct EntranceStep {
    pub part: HeroPart,
    pub start: f64,
    pub duration: f64,
    pub ease: Ease,
    pub from: HeroStyle,
}

impl EntranceStep {
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    pub fn sample(&self, t: f64) -> HeroStyle {
        if t <= self.start {
            return self.from;
        }
        let local = if self.duration > 0.0 {
            (t - self.start) / self.duration
        } else {
            1.0
        };
        self.from.lerp(HeroStyle::REST, self.ease.apply(local))
    }
}

/// Tag, then title overlapping by 0.5 s, then subtitle overlapping by 0.8 s.
pub fn entrance_steps() -> [EntranceStep; 3] {
    let tag = EntranceStep {
        part: HeroPart::Tag,
        start: 0.0,
        duration: 1.0,
        ease: Ease::Power1Out,
        from: HeroStyle {
            opacity: 0.0,
            y: 20.0,
            ..HeroStyle::REST
        },
    };
    let title = EntranceStep {
        part: HeroPart::Title,
        start: tag.end() - 0.5,
        duration: 1.2,
        ease: Ease::ExpoOut,
        from: HeroStyle {
            opacity: 0.0,
            scale: 0.9,
            ..HeroStyle::REST
        },
    };
    let subtitle = EntranceStep {
        part: HeroPart::Subtitle,
        start: title.end() - 0.8,
        duration: 1.0,
        ease: Ease::Power2Out,
        from: HeroStyle {
            opacity: 0.0,
            x: -30.0,
            ..HeroStyle::REST
        },
    };
    [tag, title, subtitle]
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShellFrame {
    /// Hero styles in [`HeroPart::ALL`] order; `None` once the entrance has
    /// finished and its final state was written.
    pub hero: Option<[HeroStyle; 3]>,
    pub grid_offset_y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellEvent {
    PlayEntrance,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EntranceState {
    Pending,
    Playing,
    Finished,
}

pub struct ShellScene {
    steps: [EntranceStep; 3],
    entrance: EntranceState,
    entrance_elapsed: f64,
    drift: Cycle,
    drift_elapsed: f64,
}

impl Default for ShellScene {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellScene {
    pub fn new() -> Self {
        Self {
            steps: entrance_steps(),
            entrance: EntranceState::Pending,
            entrance_elapsed: 0.0,
            drift: Cycle::new(GRID_DRIFT_LOOP_SEC, LoopMode::Restart, Ease::Linear),
            drift_elapsed: 0.0,
        }
    }

    /// Start the entrance. Only the first call has any effect.
    pub fn play_entrance(&mut self) -> bool {
        if self.entrance != EntranceState::Pending {
            return false;
        }
        log::info!("[shell] entrance started");
        self.entrance = EntranceState::Playing;
        self.entrance_elapsed = 0.0;
        true
    }

    pub fn has_played(&self) -> bool {
        self.entrance != EntranceState::Pending
    }

    pub fn entrance_duration(&self) -> f64 {
        self.steps.iter().map(EntranceStep::end).fold(0.0, f64::max)
    }

    pub fn grid_offset_at(&self, t: f64) -> f64 {
        // one full tile per pass so the wrap is invisible
        GRID_TILE_PX * self.drift.sample(t)
    }

    fn hero_at(&self, t: f64) -> [HeroStyle; 3] {
        [
            self.steps[0].sample(t),
            self.steps[1].sample(t),
            self.steps[2].sample(t),
        ]
    }
}

impl Scene for ShellScene {
    type Event = ShellEvent;
    type Frame = ShellFrame;

    fn handle(&mut self, event: ShellEvent) {
        match event {
            ShellEvent::PlayEntrance => {
                self.play_entrance();
            }
        }
    }

    fn frame(&mut self, dt: f64) -> Option<ShellFrame> {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.drift_elapsed += dt;
        let hero = match self.entrance {
            EntranceState::Pending | EntranceState::Finished => None,
            EntranceState::Playing => {
                self.entrance_elapsed += dt;
                let styles = self.hero_at(self.entrance_elapsed);
                if self.entrance_elapsed >= self.entrance_duration() {
                    self.entrance = EntranceState::Finished;
                    log::info!("[shell] entrance finished");
                }
                Some(styles)
            }
        };
        Some(ShellFrame {
            hero,
            grid_offset_y: self.grid_offset_at(self.drift_elapsed),
        })
    }
}

/// Nav, hero, roadmap section frame and footer. The roadmap body is mounted
/// into `#roadmap-root` separately.
pub fn render_page_shell() -> String {
    let nav_links: String = ["Roadmap", "Manifest", "Modules"]
        .iter()
        .map(|l| {
            let href = if *l == "Roadmap" { "#roadmap" } else { "#" };
            format!(r#"<a href="{href}" class="nav-link">// {l}</a>"#)
        })
        .collect();
    let footer_nav: String = ["HOME", "ROADMAP", "ARCHIVE", "LOGIN"]
        .iter()
        .map(|l| format!(r##"<li><a href="#" class="footer-link">// {l}</a></li>"##))
        .collect();
    let socials: String = ["Github", "Twitter", "Linkedin"]
        .iter()
        .map(|s| format!(r##"<a href="#" class="social-link" aria-label="{s}">{}</a>"##, glyph(s, "icon-sm")))
        .collect();
    format!(
        concat!(
            r#"<div class="grid-bg"></div>"#,
            r#"<nav class="site-nav">"#,
            r#"<div class="brand"><div class="brand-mark">{terminal}</div><span class="brand-name">VIBE<span class="accent-pink">DEV</span></span></div>"#,
            r#"<div class="nav-links">{nav_links}<button class="nav-cta">INITIATE</button></div>"#,
            r#"</nav>"#,
            r#"<section class="hero">"#,
            r#"<div class="hero-blob hero-blob-pink"></div><div class="hero-blob hero-blob-cyan"></div>"#,
            r#"<div class="hero-content">"#,
            r#"<div class="hero-tag">{activity}<span>System Online: v2.0.16</span></div>"#,
            r#"<h1 class="hero-title">UPGRADE <br/><span class="hero-title-gradient">YOUR REALITY.</span></h1>"#,
            r#"<p class="hero-subtitle">The definitive course for developers who refuse to settle for the default. Master the stack, control the vibe, build the future.</p>"#,
            r#"<div class="hero-badges">"#,
            r#"<div class="hero-badge">{layers}<span>MODULAR</span></div>"#,
            r#"<div class="hero-badge">{shield}<span>SECURE</span></div>"#,
            r#"</div>"#,
            r#"</div>"#,
            r#"<div class="scroll-hint"><div class="scroll-hint-line"></div>{chevron}</div>"#,
            r#"</section>"#,
            r#"<section id="roadmap" class="roadmap-section">"#,
            r#"<div class="roadmap-intro">"#,
            r#"<div><span class="roadmap-kicker">// Curriculum Path</span><h2 class="roadmap-heading">THE MISSION<br/>PARAMETERS.</h2></div>"#,
            r#"<p class="roadmap-blurb">Four critical stages of development. No fluff, no filler. Only the tools required to dominate the modern web landscape.</p>"#,
            r#"</div>"#,
            r#"<div id="roadmap-root" class="roadmap"></div>"#,
            r#"</section>"#,
            r#"<footer class="site-footer">"#,
            r#"<div class="footer-grid">"#,
            r#"<div class="footer-brand"><div class="brand">{terminal_lg}<span class="brand-name">VIBE<span class="accent-pink">DEV</span></span></div>"#,
            r#"<p class="footer-blurb">We don't just teach code. We teach the philosophy of digital architecture. Join the 2016 collective and redefine your potential.</p>"#,
            r#"<div class="socials">{socials}</div></div>"#,
            r#"<div><h4 class="footer-heading">Navigation</h4><ul class="footer-list">{footer_nav}</ul></div>"#,
            r#"<div><h4 class="footer-heading">Contact</h4><ul class="footer-list">"#,
            r#"<li><a href="mailto:hq@vibedev.io" class="footer-link">// HQ@VIBEDEV.IO</a></li>"#,
            r##"<li><a href="#" class="footer-link">// DISCORD_CHANNEL</a></li>"##,
            r##"<li><a href="#" class="footer-link">// TEL_ENCRYPTED</a></li>"##,
            r#"</ul></div>"#,
            r#"</div>"#,
            r#"<div class="footer-legal">VIBE DEV 2016 &copy; DISTRIBUTED UNDER NEON-LICENSE-01</div>"#,
            r#"</footer>"#
        ),
        terminal = glyph("Terminal", "icon-md"),
        terminal_lg = glyph("Terminal", "icon-lg accent-pink"),
        nav_links = nav_links,
        activity = glyph("Activity", "icon-xs accent-cyan"),
        layers = glyph("Layers", "icon-md"),
        shield = glyph("ShieldCheck", "icon-md"),
        chevron = glyph("ChevronDown", "icon-sm accent-cyan"),
        socials = socials,
        footer_nav = footer_nav,
    )
}
