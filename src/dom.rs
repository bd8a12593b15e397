use roadmap_core::{LayoutInput, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// First element matching `selector` under `root`.
pub fn query(root: &web::Element, selector: &str) -> anyhow::Result<web::Element> {
    root.query_selector(selector)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing {}", selector))
}

/// Every element matching `selector` under `root`, in document order.
pub fn query_all(root: &web::Element, selector: &str) -> anyhow::Result<Vec<web::Element>> {
    let list = root
        .query_selector_all(selector)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect())
}

pub fn query_html(root: &web::Element, selector: &str) -> anyhow::Result<web::HtmlElement> {
    query(root, selector)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{} is not an HTML element: {:?}", selector, e))
}

/// Element carrying `attr="index"` for each index in `0..count`.
pub fn indexed_html(
    root: &web::Element,
    attr: &str,
    count: usize,
) -> anyhow::Result<Vec<web::HtmlElement>> {
    (0..count)
        .map(|i| query_html(root, &format!("[{}=\"{}\"]", attr, i)))
        .collect()
}

#[inline]
pub fn set_style(el: &web::HtmlElement, name: &str, value: &str) {
    _ = el.style().set_property(name, value);
}

#[inline]
pub fn set_attr(el: &web::Element, name: &str, value: &str) {
    _ = el.set_attribute(name, value);
}

pub fn scroll_y() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport() -> Option<Viewport> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some(Viewport { width, height })
}

/// Take the measurements the roadmap layout is derived from.
///
/// Returns `None` while the section is detached; callers skip the update.
pub fn measure_roadmap(section: &web::Element, svg: &web::Element) -> Option<LayoutInput> {
    if !section.is_connected() || !svg.is_connected() {
        return None;
    }
    let viewport = viewport()?;
    let section_rect = section.get_bounding_client_rect();
    let svg_rect = svg.get_bounding_client_rect();
    let section_top = section_rect.top() + scroll_y();
    // everything below the section (padding, footer) keeps its height across relayouts
    let trailing_height = window_document()
        .and_then(|d| d.document_element())
        .map(|root| (root.scroll_height() as f64 - section_top - section_rect.height()).max(0.0));
    Some(LayoutInput {
        viewport,
        svg_width: svg_rect.width(),
        section_top,
        trailing_height,
    })
}
