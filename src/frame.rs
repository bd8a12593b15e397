use crate::constants::MAX_FRAME_DT_SEC;
use crate::events::EventQueue;
use crate::render::{RoadmapStage, ShellStage};
use instant::Instant;
use roadmap_core::shell::ShellScene;
use roadmap_core::{AnimationSession, Choreographer, SceneEvent};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type RoadmapSession = AnimationSession<Choreographer, RoadmapStage>;
pub type ShellSession = AnimationSession<ShellScene, ShellStage>;

pub struct FrameContext {
    pub shell: ShellSession,
    pub roadmap: RoadmapSession,
    pub roadmap_events: EventQueue<SceneEvent>,
    pub last_instant: Instant,
}

impl FrameContext {
    /// Run one animation step. Returns `false` once both sessions are gone.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f64().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        // take the batch first so listeners can keep pushing while we dispatch
        let events: Vec<SceneEvent> = self.roadmap_events.borrow_mut().drain(..).collect();
        for ev in events {
            self.roadmap.dispatch(ev);
        }

        self.shell.tick(dt);
        self.roadmap.tick(dt);
        self.shell.is_alive() || self.roadmap.is_alive()
    }

    pub fn dispose(&mut self) {
        self.roadmap.dispose();
        self.shell.dispose();
        self.roadmap_events.borrow_mut().clear();
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let keep_running = match frame_ctx_tick.try_borrow_mut() {
            Ok(mut ctx) => ctx.frame(),
            // something else holds the context this frame; try again next frame
            Err(_) => true,
        };
        if !keep_running {
            log::info!("[frame] loop stopped");
            return;
        }
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
