use super::{InputWiring, Listener};
use crate::dom;
use crate::input::{InputSource, RawInput};
use std::rc::Rc;
use web_sys as web;

fn record_scroll(w: &InputWiring, input: &InputSource) {
    let (scroll_x, scroll_y) = dom::scroll_offset(&w.window, &w.container, w.scope);
    input.record(RawInput::Scroll { scroll_x, scroll_y });
}

pub fn wire_scroll(w: &InputWiring, input: Rc<InputSource>) -> anyhow::Result<Listener> {
    // a page loaded mid-scroll has a position before any event fires
    record_scroll(w, &input);

    let wiring = w.clone();
    Listener::add(&w.capture_target(), "scroll", move |_ev: web::Event| {
        record_scroll(&wiring, &input);
    })
}
