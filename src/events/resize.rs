use super::{InputWiring, Listener};
use crate::dom;
use web_sys as web;

/// Re-measure the scope's viewport and hand it to the controller.
pub fn remeasure(w: &InputWiring) {
    let viewport = dom::measure_viewport(&w.window, &w.container, w.scope);
    if let Ok(mut controller) = w.controller.try_borrow_mut() {
        controller.on_resize(viewport);
    }
}

pub fn wire_resize(w: &InputWiring) -> anyhow::Result<Listener> {
    let wiring = w.clone();
    Listener::add(w.window.as_ref(), "resize", move |_ev: web::Event| {
        remeasure(&wiring);
    })
}
