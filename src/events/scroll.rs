use super::{DomListener, EventQueue};
use crate::dom;
use roadmap_core::SceneEvent;
use web_sys as web;

/// Forward window scroll positions to the roadmap.
pub fn wire_scroll(queue: &EventQueue<SceneEvent>) -> anyhow::Result<DomListener> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let queue = queue.clone();
    DomListener::attach(&window, "scroll", move |_| {
        queue.borrow_mut().push(SceneEvent::ScrollChanged {
            scroll_y: dom::scroll_y(),
        });
    })
}
