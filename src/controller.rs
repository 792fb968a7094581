use crate::config::Config;
use crate::constants::LOG_TAG;
use crate::effect::{EffectLoop, LoopState, RenderSink, TickOutcome};
use crate::error::{Capability, ParallaxError, Result};
use crate::input::{resolve_input_mode, InputMode, InputSource};
use crate::offset::{Target, ViewportMetrics};
use serde_json::Value;
use std::rc::Rc;

/// What the host environment can do, probed once before attaching.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Environment {
    pub is_mobile: bool,
    pub frame_scheduler: bool,
    pub orientation: bool,
    /// False where orientation access is gated and has not been granted yet.
    pub orientation_permission: bool,
}

/// Config and input mode, resolved and checked against the environment.
#[derive(Clone, Debug, PartialEq)]
pub struct AttachPlan {
    pub config: Config,
    pub mode: InputMode,
}

impl AttachPlan {
    pub fn resolve(overrides: &Value, env: &Environment) -> Result<Self> {
        let config = Config::from_overrides(overrides)?;
        let mode = resolve_input_mode(config.controls, env.is_mobile);
        if !env.frame_scheduler {
            return Err(ParallaxError::CapabilityUnavailable(
                Capability::FrameScheduler,
            ));
        }
        if mode == InputMode::Orientation {
            if !env.orientation {
                return Err(ParallaxError::CapabilityUnavailable(
                    Capability::Orientation,
                ));
            }
            if !env.orientation_permission {
                return Err(ParallaxError::CapabilityUnavailable(
                    Capability::OrientationPermission,
                ));
            }
        }
        Ok(Self { config, mode })
    }
}

/// Owns one running effect: config, input slot and loop.
pub struct Controller<H> {
    config: Config,
    mode: InputMode,
    input: Rc<InputSource>,
    effect: EffectLoop<H>,
}

impl<H> Controller<H> {
    /// Wire the pipeline for `targets` and start the loop.
    pub fn attach(
        plan: AttachPlan,
        targets: Vec<Target<H>>,
        viewport: ViewportMetrics,
        sink: &dyn RenderSink<H>,
    ) -> Result<Self> {
        if !sink.supports_transform() {
            return Err(ParallaxError::CapabilityUnavailable(Capability::Transform));
        }
        let AttachPlan { config, mode } = plan;
        if targets.is_empty() {
            log::warn!(
                "{} no elements with class '{}' found; nothing will move",
                LOG_TAG,
                config.class_name
            );
        }
        let input = Rc::new(InputSource::for_mode(mode));
        let mut effect = EffectLoop::new(input.clone(), targets, config.clone(), viewport);
        effect.start();
        log::info!(
            "{} attached: mode={} axis={:?} scope={:?} power={} targets={}",
            LOG_TAG,
            mode.as_str(),
            config.axis,
            config.scope,
            config.power,
            effect.targets().len()
        );
        Ok(Self {
            config,
            mode,
            input,
            effect,
        })
    }

    #[inline]
    pub fn tick(&mut self, sink: &mut dyn RenderSink<H>) -> TickOutcome {
        self.effect.tick(sink)
    }

    /// New viewport metrics; the target set is left alone.
    pub fn on_resize(&mut self, viewport: ViewportMetrics) {
        if self.effect.state() == LoopState::Cancelled {
            return;
        }
        log::debug!(
            "{} resize: {}x{} at ({}, {})",
            LOG_TAG,
            viewport.size.x,
            viewport.size.y,
            viewport.origin.x,
            viewport.origin.y
        );
        self.effect.set_viewport(viewport);
    }

    /// Stop the loop. Returns `false` when it was already detached.
    pub fn detach(&mut self) -> bool {
        if self.effect.state() == LoopState::Cancelled {
            return false;
        }
        self.effect.cancel();
        log::info!("{} detached after {} frames", LOG_TAG, self.effect.ticks());
        true
    }

    pub fn is_attached(&self) -> bool {
        self.effect.state() == LoopState::Running
    }

    pub fn input(&self) -> Rc<InputSource> {
        self.input.clone()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn effect(&self) -> &EffectLoop<H> {
        &self.effect
    }

    pub fn target_count(&self) -> usize {
        self.effect.targets().len()
    }
}
