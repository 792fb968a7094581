//! Layered parallax for web pages.
//!
//! The effect samples one input (pointer, scroll or device tilt), smooths it,
//! and every animation frame translates each tracked element in proportion to
//! its strength. The math and the loop state live in plain Rust modules that
//! build and test on the host; the browser glue is compiled for `wasm32` only.

pub mod config;
pub mod constants;
pub mod controller;
pub mod effect;
pub mod error;
pub mod input;
pub mod offset;
pub mod smoother;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod handle;
#[cfg(target_arch = "wasm32")]
mod render;

pub use config::{Axis, Config, Controls, Scope};
pub use controller::{AttachPlan, Controller, Environment};
pub use effect::{CancelToken, EffectLoop, LoopState, RenderSink, TickOutcome};
pub use error::{Capability, ParallaxError};
pub use input::{resolve_input_mode, InputMode, InputSource, RawInput};
pub use offset::{Offset, Target, ViewportMetrics};
pub use smoother::{SmoothedState, Smoother};

#[cfg(target_arch = "wasm32")]
pub use handle::EffectHandle;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("parallax-web loaded");
    Ok(())
}

/// Resolves once orientation events may be used; rejects when the platform
/// lacks them or the user declines.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = requestOrientationPermission)]
pub async fn request_orientation_permission() -> Result<(), JsValue> {
    events::request_orientation_permission()
        .await
        .map_err(|e| handle::to_js_error(&e))
}
