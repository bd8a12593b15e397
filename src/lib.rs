#![cfg(target_arch = "wasm32")]
use instant::Instant;
use roadmap_core::card::render_roadmap;
use roadmap_core::shell::{render_page_shell, HeroPart, ShellEvent, ShellScene};
use roadmap_core::{
    AnimationSession, Choreographer, RoadmapConfig, SceneEvent, COURSE_LEVELS, SVG_PATH,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod render;

use constants::*;
use render::{RoadmapHandles, RoadmapStage, ShellStage};

thread_local! {
    // handle to the mounted page so `unmount` and `pagehide` can tear it down
    static MOUNTED: RefCell<Option<Rc<RefCell<frame::FrameContext>>>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("roadmap-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Dispose every animation session and detach all listeners.
#[wasm_bindgen]
pub fn unmount() {
    MOUNTED.with(|m| {
        let mut slot = m.borrow_mut();
        let Some(ctx) = slot.as_ref() else {
            return;
        };
        match ctx.try_borrow_mut() {
            Ok(mut c) => c.dispose(),
            Err(_) => {
                // keep the handle so a later call can still tear down
                log::error!("[session] unmount while a frame is running");
                return;
            }
        }
        *slot = None;
    });
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let app = document
        .get_element_by_id(APP_ROOT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", APP_ROOT_ID))?;

    app.set_inner_html(&render_page_shell());
    let shell = mount_shell(&app)?;

    let roadmap_root = document
        .get_element_by_id(ROADMAP_ROOT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", ROADMAP_ROOT_ID))?;
    roadmap_root.set_inner_html(&render_roadmap(COURSE_LEVELS, SVG_PATH));
    let roadmap_events: events::EventQueue<SceneEvent> = Rc::new(RefCell::new(Vec::new()));
    let roadmap = mount_roadmap(&roadmap_root, &roadmap_events)?;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        shell,
        roadmap,
        roadmap_events,
        last_instant: Instant::now(),
    }));
    MOUNTED.with(|m| *m.borrow_mut() = Some(frame_ctx.clone()));
    frame::start_loop(frame_ctx);
    Ok(())
}

fn mount_shell(app: &web::Element) -> anyhow::Result<frame::ShellSession> {
    let hero = HeroPart::ALL
        .iter()
        .map(|p| dom::query_html(app, &format!(".{}", p.class_name())))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let grid = dom::query_html(app, GRID_BG_SELECTOR)?;

    let mut session = AnimationSession::new("shell", ShellScene::new(), ShellStage::new(hero, grid));
    session.dispatch(ShellEvent::PlayEntrance);
    session.attach(Box::new(events::wire_pagehide(unmount)?));
    Ok(session)
}

fn mount_roadmap(
    root: &web::Element,
    queue: &events::EventQueue<SceneEvent>,
) -> anyhow::Result<frame::RoadmapSession> {
    let n = COURSE_LEVELS.len();
    let section = root
        .clone()
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("roadmap root is not an HTML element: {:?}", e))?;
    let handles = RoadmapHandles {
        section,
        svg: dom::query(root, ROADMAP_SVG_SELECTOR)?,
        path: dom::query(root, ROADMAP_PATH_SELECTOR)?,
        flow_path: dom::query(root, FLOW_PATH_SELECTOR)?,
        glow_blur: dom::query(root, GLOW_BLUR_SELECTOR)?,
        gradient_stops: dom::query_all(root, GRADIENT_STOP_SELECTOR)?,
        marker: dom::query(root, MARKER_SELECTOR)?,
        slots: dom::indexed_html(root, CARD_SLOT_ATTR, n)?,
        cards: dom::indexed_html(root, CARD_ATTR, n)?,
        dots: dom::indexed_html(root, DOT_ATTR, n)?,
    };
    let svg = handles.svg.clone();

    let scene = Choreographer::new(COURSE_LEVELS, SVG_PATH, RoadmapConfig::default())
        .map_err(|e| anyhow::anyhow!("roadmap scene: {}", e))?;
    let mut session = AnimationSession::new("roadmap", scene, RoadmapStage::new(handles));

    // geometry only once the section is in the document and measurable
    match dom::measure_roadmap(root, &svg) {
        Some(input) => {
            session.dispatch(SceneEvent::Mounted(input));
            session.dispatch(SceneEvent::ScrollChanged {
                scroll_y: dom::scroll_y(),
            });
        }
        None => log::warn!("[roadmap] section not measurable at mount; waiting for resize"),
    }

    session.attach(Box::new(events::wire_scroll(queue)?));
    session.attach(Box::new(events::wire_resize(queue, root, &svg)?));
    log::info!(
        "[roadmap] mounted {} levels, {} listeners",
        n,
        session.listener_count()
    );
    Ok(session)
}
