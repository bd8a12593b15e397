//! Scoped animation sessions.
//!
//! A session is created when a section mounts and owns everything that
//! animates it: the scene state, the surface it draws to and every event
//! listener wired for it. Disposing the session (explicitly or by dropping it)
//! removes the listeners and puts the surface back to its pre-animation state.

/// Pure animation state driven by events and time.
pub trait Scene {
    type Event;
    type Frame;

    fn handle(&mut self, event: Self::Event);

    /// Advance by `dt` seconds. `None` means there is nothing to draw yet.
    fn frame(&mut self, dt: f64) -> Option<Self::Frame>;
}

/// Rendering surface a scene's frames are written to.
pub trait Stage<F> {
    fn apply(&mut self, frame: &F);

    /// Remove every property this stage has written.
    fn revert(&mut self);
}

/// A registered event listener that can be detached.
pub trait Listener {
    fn remove(&mut self);
}

pub struct AnimationSession<Sc, St>
where
    Sc: Scene,
    St: Stage<Sc::Frame>,
{
    name: &'static str,
    scene: Sc,
    stage: St,
    listeners: Vec<Box<dyn Listener>>,
    alive: bool,
}

impl<Sc, St> AnimationSession<Sc, St>
where
    Sc: Scene,
    St: Stage<Sc::Frame>,
{
    pub fn new(name: &'static str, scene: Sc, stage: St) -> Self {
        log::debug!("[session] {} opened", name);
        Self {
            name,
            scene,
            stage,
            listeners: Vec::new(),
            alive: true,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn scene(&self) -> &Sc {
        &self.scene
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Hand a listener to the session. Listeners offered after disposal are
    /// removed immediately.
    pub fn attach(&mut self, mut listener: Box<dyn Listener>) {
        if self.alive {
            self.listeners.push(listener);
        } else {
            listener.remove();
        }
    }

    pub fn dispatch(&mut self, event: Sc::Event) {
        if self.alive {
            self.scene.handle(event);
        }
    }

    /// Advance the scene and draw the result. Returns whether anything was drawn.
    pub fn tick(&mut self, dt: f64) -> bool {
        if !self.alive {
            return false;
        }
        match self.scene.frame(dt) {
            Some(frame) => {
                self.stage.apply(&frame);
                true
            }
            None => false,
        }
    }

    /// Detach every listener and revert the stage. Safe to call repeatedly.
    pub fn dispose(&mut self) {
        if !self.alive {
            return;
        }
        self.alive = false;
        for mut l in self.listeners.drain(..) {
            l.remove();
        }
        self.stage.revert();
        log::info!("[session] {} disposed", self.name);
    }
}

impl<Sc, St> Drop for AnimationSession<Sc, St>
where
    Sc: Scene,
    St: Stage<Sc::Frame>,
{
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Whether a `pagehide` should dispose the page's sessions. A persisted page
/// goes into the back/forward cache and must still be live when restored.
pub fn teardown_on_pagehide(persisted: bool) -> bool {
    !persisted
}
