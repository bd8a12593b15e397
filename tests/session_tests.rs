// Host-side tests for session teardown, using recording fakes for the stage
// and the listeners.

use std::cell::RefCell;
use std::rc::Rc;

use roadmap_core::{
    teardown_on_pagehide, AnimationSession, Choreographer, LayoutInput, Listener,
    RoadmapConfig, SceneEvent, SceneFrame, Stage, Viewport, COURSE_LEVELS, SVG_PATH,
};

#[derive(Default)]
struct Log {
    applied: usize,
    reverted: usize,
    removed: Vec<&'static str>,
}

type SharedLog = Rc<RefCell<Log>>;

struct FakeStage(SharedLog);

impl Stage<SceneFrame> for FakeStage {
    fn apply(&mut self, _frame: &SceneFrame) {
        self.0.borrow_mut().applied += 1;
    }

    fn revert(&mut self) {
        self.0.borrow_mut().reverted += 1;
    }
}

struct FakeListener {
    name: &'static str,
    log: SharedLog,
}

impl Listener for FakeListener {
    fn remove(&mut self) {
        self.log.borrow_mut().removed.push(self.name);
    }
}

fn listener(name: &'static str, log: &SharedLog) -> Box<dyn Listener> {
    Box::new(FakeListener {
        name,
        log: log.clone(),
    })
}

fn session(log: &SharedLog) -> AnimationSession<Choreographer, FakeStage> {
    let scene = Choreographer::new(COURSE_LEVELS, SVG_PATH, RoadmapConfig::default()).unwrap();
    let mut s = AnimationSession::new("roadmap", scene, FakeStage(log.clone()));
    s.dispatch(SceneEvent::Mounted(LayoutInput {
        viewport: Viewport {
            width: 1280.0,
            height: 800.0,
        },
        svg_width: 500.0,
        section_top: 1000.0,
        trailing_height: None,
    }));
    s
}

#[test]
fn ticks_draw_while_alive() {
    let log = SharedLog::default();
    let mut s = session(&log);
    assert!(s.tick(0.016));
    assert!(s.tick(0.016));
    assert_eq!(log.borrow().applied, 2);
}

#[test]
fn unmounted_scene_draws_nothing() {
    let log = SharedLog::default();
    let scene = Choreographer::new(COURSE_LEVELS, SVG_PATH, RoadmapConfig::default()).unwrap();
    let mut s = AnimationSession::new("roadmap", scene, FakeStage(log.clone()));
    assert!(!s.tick(0.016));
    assert_eq!(log.borrow().applied, 0);
}

#[test]
fn dispose_removes_every_listener_and_reverts_once() {
    let log = SharedLog::default();
    let mut s = session(&log);
    s.attach(listener("scroll", &log));
    s.attach(listener("resize", &log));
    assert_eq!(s.listener_count(), 2);
    s.tick(0.016);

    s.dispose();
    assert!(!s.is_alive());
    assert_eq!(s.listener_count(), 0);
    assert_eq!(log.borrow().removed, vec!["scroll", "resize"]);
    assert_eq!(log.borrow().reverted, 1);

    // idempotent
    s.dispose();
    assert_eq!(log.borrow().reverted, 1);
    assert_eq!(log.borrow().removed.len(), 2);
}

#[test]
fn events_after_teardown_have_no_effect() {
    let log = SharedLog::default();
    let mut s = session(&log);
    s.attach(listener("scroll", &log));
    s.dispose();
    let applied = log.borrow().applied;

    s.dispatch(SceneEvent::ScrollChanged { scroll_y: 2000.0 });
    assert!(!s.tick(0.016));
    assert_eq!(log.borrow().applied, applied);
    assert_eq!(s.scene().progress(), 0.0);
}

#[test]
fn late_listeners_are_removed_immediately() {
    let log = SharedLog::default();
    let mut s = session(&log);
    s.dispose();
    s.attach(listener("late", &log));
    assert_eq!(s.listener_count(), 0);
    assert_eq!(log.borrow().removed, vec!["late"]);
}

#[test]
fn dropping_a_session_tears_it_down() {
    let log = SharedLog::default();
    {
        let mut s = session(&log);
        s.attach(listener("scroll", &log));
        s.tick(0.016);
    }
    assert_eq!(log.borrow().removed, vec!["scroll"]);
    assert_eq!(log.borrow().reverted, 1);
}

#[test]
fn remount_starts_clean() {
    let log = SharedLog::default();
    let mut first = session(&log);
    first.attach(listener("first", &log));
    first.dispose();

    let mut second = session(&log);
    second.attach(listener("second", &log));
    assert!(second.tick(0.016));
    assert_eq!(second.listener_count(), 1);
    assert_eq!(log.borrow().removed, vec!["first"]);
}

#[test]
fn cached_pages_keep_their_sessions() {
    assert!(!teardown_on_pagehide(true));
    assert!(teardown_on_pagehide(false));
}
