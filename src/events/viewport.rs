use super::{DomListener, EventQueue};
use crate::dom;
use roadmap_core::{teardown_on_pagehide, SceneEvent};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Re-measure the roadmap on every resize. Each event carries a complete set
/// of measurements so the scene can rebuild its layout from scratch.
pub fn wire_resize(
    queue: &EventQueue<SceneEvent>,
    section: &web::Element,
    svg: &web::Element,
) -> anyhow::Result<DomListener> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let queue = queue.clone();
    let section = section.clone();
    let svg = svg.clone();
    DomListener::attach(&window, "resize", move |_| {
        if let Some(input) = dom::measure_roadmap(&section, &svg) {
            queue.borrow_mut().push(SceneEvent::ViewportResized(input));
        }
    })
}

/// Tear the page down when it is being unloaded. Pages entering the
/// back/forward cache stay mounted so they come back alive on restore.
///
/// Runs `on_hide` after the event handler returns so the listener can be
/// freed by the teardown itself.
pub fn wire_pagehide(on_hide: impl Fn() + Clone + 'static) -> anyhow::Result<DomListener> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    DomListener::attach(&window, "pagehide", move |ev: web::Event| {
        let persisted = ev
            .dyn_ref::<web::PageTransitionEvent>()
            .map(|e| e.persisted())
            .unwrap_or(false);
        if !teardown_on_pagehide(persisted) {
            log::info!("[session] page cached; keeping sessions");
            return;
        }
        let on_hide = on_hide.clone();
        spawn_local(async move { on_hide() });
    })
}
