use super::{InputWiring, Listener};
use crate::input::{InputSource, RawInput};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointermove(w: &InputWiring, input: Rc<InputSource>) -> anyhow::Result<Listener> {
    Listener::add(&w.capture_target(), "pointermove", move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            input.record(RawInput::PointerMove {
                page_x: ev.page_x() as f32,
                page_y: ev.page_y() as f32,
            });
        }
    })
}
