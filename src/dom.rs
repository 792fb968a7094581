use crate::config::Scope;
use crate::constants::{LOG_TAG, STRENGTH_ATTRIBUTE};
use crate::controller::Environment;
use crate::events;
use crate::input::is_mobile_agent;
use crate::offset::{Target, ViewportMetrics};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn has_property(target: &JsValue, name: &str) -> bool {
    js_sys::Reflect::has(target, &JsValue::from_str(name)).unwrap_or(false)
}

pub fn probe_environment(window: &web::Window) -> Environment {
    let user_agent = window.navigator().user_agent().unwrap_or_default();
    Environment {
        is_mobile: is_mobile_agent(&user_agent),
        frame_scheduler: has_property(window.as_ref(), "requestAnimationFrame"),
        orientation: has_property(window.as_ref(), "DeviceOrientationEvent"),
        orientation_permission: orientation_permission_granted(window),
    }
}

/// Orientation is usable without a prompt unless the platform exposes
/// `DeviceOrientationEvent.requestPermission`; then only after it resolved
/// "granted".
fn orientation_permission_granted(window: &web::Window) -> bool {
    let ctor = JsValue::from_str("DeviceOrientationEvent");
    let gated = js_sys::Reflect::get(window.as_ref(), &ctor)
        .ok()
        .filter(|ctor| !ctor.is_undefined())
        .map(|ctor| has_property(&ctor, "requestPermission"))
        .unwrap_or(false);
    !gated || events::orientation::permission_granted()
}

/// Elements carrying `class_name` inside the container, in document order.
pub fn discover_targets(
    container: &web::HtmlElement,
    class_name: &str,
) -> Vec<Target<web::HtmlElement>> {
    let found = container.get_elements_by_class_name(class_name);
    let mut targets = Vec::with_capacity(found.length() as usize);
    for i in 0..found.length() {
        let Some(el) = found.item(i) else {
            continue;
        };
        // SVG and other non-HTML elements have no inline style to write to
        let Ok(el) = el.dyn_into::<web::HtmlElement>() else {
            continue;
        };
        let strength_override = strength_override(&el);
        targets.push(Target::new(el, strength_override));
    }
    targets
}

fn strength_override(el: &web::Element) -> Option<f32> {
    let raw = el.get_attribute(STRENGTH_ATTRIBUTE)?;
    match raw.trim().parse::<f32>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => {
            log::warn!(
                "{} ignoring {}=\"{}\" on <{}>",
                LOG_TAG,
                STRENGTH_ATTRIBUTE,
                raw,
                el.tag_name().to_lowercase()
            );
            None
        }
    }
}

/// Window size for global scope; container bounds in page coordinates for
/// local scope.
pub fn measure_viewport(
    window: &web::Window,
    container: &web::HtmlElement,
    scope: Scope,
) -> ViewportMetrics {
    match scope {
        Scope::Global => {
            let w = window
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            let h = window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            ViewportMetrics::window(w as f32, h as f32)
        }
        Scope::Local => {
            let rect = container.get_bounding_client_rect();
            let sx = window.scroll_x().unwrap_or(0.0);
            let sy = window.scroll_y().unwrap_or(0.0);
            ViewportMetrics::container(
                (rect.left() + sx) as f32,
                (rect.top() + sy) as f32,
                rect.width() as f32,
                rect.height() as f32,
            )
        }
    }
}

/// Current scroll offset of the element the scope listens on.
pub fn scroll_offset(
    window: &web::Window,
    container: &web::HtmlElement,
    scope: Scope,
) -> (f32, f32) {
    match scope {
        Scope::Global => (
            window.scroll_x().unwrap_or(0.0) as f32,
            window.scroll_y().unwrap_or(0.0) as f32,
        ),
        Scope::Local => (container.scroll_left() as f32, container.scroll_top() as f32),
    }
}
