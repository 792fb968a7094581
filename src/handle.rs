use crate::constants::LOG_TAG;
use crate::controller::{AttachPlan, Controller};
use crate::dom;
use crate::error::ParallaxError;
use crate::events::{self, InputWiring, Listener};
use crate::frame::{self, FrameLoop};
use crate::render::StyleSink;
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

/// A running effect, exposed to JS as `Parallax`.
///
/// ```js
/// const fx = new Parallax(document.getElementById("scene"), { axis: "both", power: 5 });
/// // ...
/// fx.detach();
/// ```
#[wasm_bindgen(js_name = Parallax)]
pub struct EffectHandle {
    wiring: InputWiring,
    listeners: Vec<Listener>,
    frames: Option<FrameLoop>,
}

#[wasm_bindgen(js_class = Parallax)]
impl EffectHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(
        container: Option<web::HtmlElement>,
        options: JsValue,
    ) -> Result<EffectHandle, JsValue> {
        attach(container, &options).map_err(|e| to_js_error(&e))
    }

    /// Re-measure the viewport; the tracked elements stay the same.
    #[wasm_bindgen(js_name = onResize)]
    pub fn on_resize(&self) {
        events::resize::remeasure(&self.wiring);
    }

    /// Stop the frame loop and remove every listener. Safe to call twice.
    pub fn detach(&mut self) {
        if let Some(frames) = self.frames.take() {
            frames.cancel();
        }
        self.listeners.clear();
        if let Ok(mut controller) = self.wiring.controller.try_borrow_mut() {
            controller.detach();
        }
    }

    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> String {
        self.wiring.controller.borrow().mode().as_str().to_string()
    }

    #[wasm_bindgen(getter, js_name = targetCount)]
    pub fn target_count(&self) -> usize {
        self.wiring.controller.borrow().target_count()
    }

    #[wasm_bindgen(getter, js_name = isAttached)]
    pub fn is_attached(&self) -> bool {
        self.wiring.controller.borrow().is_attached()
    }
}

impl Drop for EffectHandle {
    fn drop(&mut self) {
        self.detach();
    }
}

fn attach(
    container: Option<web::HtmlElement>,
    options: &JsValue,
) -> anyhow::Result<EffectHandle> {
    let container = container
        .ok_or_else(|| ParallaxError::Configuration("missing container element".to_string()))?;
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let overrides = options_to_value(options)?;
    let env = dom::probe_environment(&window);
    let plan = AttachPlan::resolve(&overrides, &env)?;
    if env.is_mobile {
        log::info!("{} mobile agent detected; using orientation", LOG_TAG);
    }

    let scope = plan.config.scope;
    let targets = dom::discover_targets(&container, &plan.config.class_name);
    let viewport = dom::measure_viewport(&window, &container, scope);
    let sink = StyleSink::new(&document);
    let controller = Rc::new(RefCell::new(Controller::attach(
        plan, targets, viewport, &sink,
    )?));

    let wiring = InputWiring {
        window: window.clone(),
        container,
        scope,
        controller: controller.clone(),
    };
    let listeners = events::wire_input_handlers(&wiring)?;
    let frames = frame::start_loop(&window, controller, sink)?;

    Ok(EffectHandle {
        wiring,
        listeners,
        frames: Some(frames),
    })
}

/// `undefined`/`null` mean defaults; anything else goes through JSON so the
/// merge sees plain data only.
fn options_to_value(options: &JsValue) -> Result<Value, ParallaxError> {
    if options.is_undefined() || options.is_null() {
        return Ok(Value::Null);
    }
    let json: String = js_sys::JSON::stringify(options)
        .map_err(|e| ParallaxError::Configuration(format!("options not serializable: {:?}", e)))?
        .into();
    serde_json::from_str(&json).map_err(|e| ParallaxError::Configuration(e.to_string()))
}

pub(crate) fn to_js_error(e: &anyhow::Error) -> JsValue {
    log::error!("{} {:#}", LOG_TAG, e);
    js_sys::Error::new(&format!("{:#}", e)).into()
}
