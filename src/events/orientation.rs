use super::{InputWiring, Listener};
use crate::error::{Capability, ParallaxError};
use crate::input::{InputSource, RawInput};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

thread_local! {
    static PERMISSION_GRANTED: Cell<bool> = const { Cell::new(false) };
}

/// Whether [`request_orientation_permission`] has resolved "granted" on this
/// page.
pub fn permission_granted() -> bool {
    PERMISSION_GRANTED.with(Cell::get)
}

pub fn wire_deviceorientation(
    w: &InputWiring,
    input: Rc<InputSource>,
) -> anyhow::Result<Listener> {
    Listener::add(w.window.as_ref(), "deviceorientation", move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::DeviceOrientationEvent>() {
            input.record(RawInput::Orientation {
                gamma: ev.gamma().unwrap_or(0.0) as f32,
                beta: ev.beta().unwrap_or(0.0) as f32,
            });
        }
    })
}

/// Ask for orientation access on platforms that gate it behind
/// `DeviceOrientationEvent.requestPermission()`. Elsewhere this resolves
/// immediately when orientation events exist at all.
pub async fn request_orientation_permission() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let ctor =
        js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("DeviceOrientationEvent"))
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if ctor.is_undefined() {
        return Err(ParallaxError::CapabilityUnavailable(Capability::Orientation).into());
    }
    let request = js_sys::Reflect::get(&ctor, &JsValue::from_str("requestPermission"))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let Some(request) = request.dyn_ref::<js_sys::Function>() else {
        return Ok(());
    };
    let denied = || ParallaxError::CapabilityUnavailable(Capability::OrientationPermission);
    let promise: js_sys::Promise = request
        .call0(&ctor)
        .map_err(|_| denied())?
        .dyn_into()
        .map_err(|_| denied())?;
    let state = JsFuture::from(promise).await.map_err(|_| denied())?;
    if state.as_string().as_deref() == Some("granted") {
        PERMISSION_GRANTED.with(|granted| granted.set(true));
        log::info!("{} orientation permission granted", crate::constants::LOG_TAG);
        Ok(())
    } else {
        Err(denied().into())
    }
}
