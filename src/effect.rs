//! The per-frame pipeline: sample, smooth, compute, publish.
//!
//! `EffectLoop` does not schedule itself. The frame driver (in the browser,
//! `frame::FrameLoop` over `requestAnimationFrame`) calls [`EffectLoop::tick`]
//! and asks for another frame only while the tick reports
//! [`TickOutcome::Continue`].

use crate::config::Config;
use crate::input::InputSource;
use crate::offset::{self, Offset, Target, ViewportMetrics};
use crate::smoother::Smoother;
use std::cell::Cell;
use std::rc::Rc;

/// Applies a computed offset to the element behind `handle`.
///
/// Calls overwrite the previous transform; applying the same offset twice must
/// leave the element unchanged.
pub trait RenderSink<H> {
    fn apply(&mut self, handle: &H, offset: Offset);

    /// Whether this sink can apply a transform at all.
    fn supports_transform(&self) -> bool {
        true
    }
}

/// Shared stop flag, checked at the top of every tick.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Safe to call any number of times.
    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Uninitialized,
    Running,
    Cancelled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Offsets were published; schedule the next frame.
    Continue,
    /// Not started yet; nothing published.
    Idle,
    /// Cancelled; do not schedule again.
    Stopped,
}

pub struct EffectLoop<H> {
    input: Rc<InputSource>,
    smoother: Smoother,
    targets: Vec<Target<H>>,
    config: Config,
    viewport: ViewportMetrics,
    cancel: CancelToken,
    state: LoopState,
    ticks: u64,
}

impl<H> EffectLoop<H> {
    pub fn new(
        input: Rc<InputSource>,
        targets: Vec<Target<H>>,
        config: Config,
        viewport: ViewportMetrics,
    ) -> Self {
        Self {
            input,
            smoother: Smoother::new(),
            targets,
            config,
            viewport,
            cancel: CancelToken::new(),
            state: LoopState::Uninitialized,
            ticks: 0,
        }
    }

    /// Uninitialized -> Running. Starting twice, or after cancel, does nothing.
    pub fn start(&mut self) {
        if self.state == LoopState::Uninitialized && !self.cancel.is_cancelled() {
            self.state = LoopState::Running;
        }
    }

    pub fn tick(&mut self, sink: &mut dyn RenderSink<H>) -> TickOutcome {
        if self.cancel.is_cancelled() {
            self.state = LoopState::Cancelled;
            return TickOutcome::Stopped;
        }
        match self.state {
            LoopState::Uninitialized => return TickOutcome::Idle,
            LoopState::Cancelled => return TickOutcome::Stopped,
            LoopState::Running => {}
        }

        let signal = self.input.sample(&self.viewport);
        let current = self.smoother.advance(signal);
        let mode = self.input.mode();
        for target in &self.targets {
            let off = offset::compute(current, target, &self.viewport, &self.config, mode);
            sink.apply(&target.handle, off);
        }
        self.ticks += 1;
        TickOutcome::Continue
    }

    pub fn cancel(&mut self) {
        self.cancel.cancel();
        self.state = LoopState::Cancelled;
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn set_viewport(&mut self, viewport: ViewportMetrics) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> ViewportMetrics {
        self.viewport
    }

    pub fn state(&self) -> LoopState {
        if self.cancel.is_cancelled() {
            LoopState::Cancelled
        } else {
            self.state
        }
    }

    pub fn smoother(&self) -> &Smoother {
        &self.smoother
    }

    pub fn targets(&self) -> &[Target<H>] {
        &self.targets
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
