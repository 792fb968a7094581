use crate::effect::RenderSink;
use crate::offset::Offset;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Writes offsets into each element's inline `transform`.
///
/// Every call replaces the previous value, so repeated frames never
/// accumulate.
pub struct StyleSink {
    transform_supported: bool,
}

impl StyleSink {
    /// Probe a scratch element once for `style.transform`.
    pub fn new(document: &web::Document) -> Self {
        let transform_supported = document
            .create_element("div")
            .ok()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
            .map(|el| crate::dom::has_property(el.style().as_ref(), "transform"))
            .unwrap_or(false);
        Self {
            transform_supported,
        }
    }
}

impl RenderSink<web::HtmlElement> for StyleSink {
    fn apply(&mut self, handle: &web::HtmlElement, offset: Offset) {
        _ = handle
            .style()
            .set_property("transform", &offset.to_css_matrix3d());
    }

    fn supports_transform(&self) -> bool {
        self.transform_supported
    }
}
