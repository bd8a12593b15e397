//! DOM event subscriptions. Handlers only measure and enqueue; the frame
//! loop drains the queue into the owning session.

mod scroll;
mod viewport;

pub use scroll::wire_scroll;
pub use viewport::{wire_pagehide, wire_resize};

use roadmap_core::Listener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Events waiting for the next frame.
pub type EventQueue<E> = Rc<RefCell<Vec<E>>>;

/// A live `addEventListener` registration. Removing it detaches the callback;
/// the closure itself is freed when the listener is dropped.
pub struct DomListener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
    attached: bool,
}

impl DomListener {
    pub fn attach(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("addEventListener({}) failed: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
            attached: true,
        })
    }
}

impl Listener for DomListener {
    fn remove(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
        log::debug!("[session] removed {} listener", self.event);
    }
}
