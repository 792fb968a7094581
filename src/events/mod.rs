pub mod orientation;
pub mod pointer;
pub mod resize;
pub mod scroll;

pub use orientation::request_orientation_permission;

use crate::config::Scope;
use crate::controller::Controller;
use crate::input::InputMode;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A registered event listener. Dropping it removes the listener.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn add(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

#[derive(Clone)]
pub struct InputWiring {
    pub window: web::Window,
    pub container: web::HtmlElement,
    pub scope: Scope,
    pub controller: Rc<RefCell<Controller<web::HtmlElement>>>,
}

impl InputWiring {
    /// Where pointer and scroll events are captured for this scope.
    pub fn capture_target(&self) -> web::EventTarget {
        match self.scope {
            Scope::Global => self.window.clone().into(),
            Scope::Local => self.container.clone().into(),
        }
    }
}

/// Register the listener for the selected input mode plus the resize
/// listener.
pub fn wire_input_handlers(w: &InputWiring) -> anyhow::Result<Vec<Listener>> {
    let input = w.controller.borrow().input();
    let mut listeners = Vec::with_capacity(2);
    match input.mode() {
        InputMode::Pointer => listeners.push(pointer::wire_pointermove(w, input)?),
        InputMode::Scroll => listeners.push(scroll::wire_scroll(w, input)?),
        InputMode::Orientation => listeners.push(orientation::wire_deviceorientation(w, input)?),
    }
    listeners.push(resize::wire_resize(w)?);
    Ok(listeners)
}
