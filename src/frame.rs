use crate::constants::LOG_TAG;
use crate::controller::Controller;
use crate::effect::TickOutcome;
use crate::render::StyleSink;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` driver for one controller.
///
/// The tick closure re-requests itself while the controller reports
/// `Continue`. [`FrameLoop::cancel`] drops the pending frame and the closure,
/// which also breaks the closure's self-reference.
pub struct FrameLoop {
    window: web::Window,
    pending: Rc<Cell<Option<i32>>>,
    tick: TickSlot,
}

pub fn start_loop(
    window: &web::Window,
    controller: Rc<RefCell<Controller<web::HtmlElement>>>,
    mut sink: StyleSink,
) -> anyhow::Result<FrameLoop> {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let pending_tick = pending.clone();
    let window_tick = window.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_tick.set(None);
        let outcome = match controller.try_borrow_mut() {
            Ok(mut c) => c.tick(&mut sink),
            // something up the stack holds the controller; try again next frame
            Err(_) => {
                log::debug!("{} frame skipped: controller busy", LOG_TAG);
                TickOutcome::Continue
            }
        };
        if outcome == TickOutcome::Stopped {
            return;
        }
        if let Some(cb) = tick_clone.borrow().as_ref() {
            match window_tick.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(id) => pending_tick.set(Some(id)),
                Err(e) => log::error!("{} requestAnimationFrame failed: {:?}", LOG_TAG, e),
            }
        }
    }) as Box<dyn FnMut()>));

    let first = {
        let slot = tick.borrow();
        let cb = slot
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("frame callback missing"))?;
        window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("requestAnimationFrame: {:?}", e))?
    };
    pending.set(Some(first));

    Ok(FrameLoop {
        window: window.clone(),
        pending,
        tick,
    })
}

impl FrameLoop {
    /// Idempotent.
    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            _ = self.window.cancel_animation_frame(id);
        }
        if let Ok(mut slot) = self.tick.try_borrow_mut() {
            slot.take();
        }
    }
}
