use crate::config::Controls;
use crate::constants::{MOBILE_AGENT_TOKENS, ORIENTATION_DEAD_ZONE_DEG};
use crate::offset::ViewportMetrics;
use glam::Vec2;
use std::cell::Cell;

/// Input origin actually driving the effect, after the mobile override.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    Pointer,
    Scroll,
    Orientation,
}

impl InputMode {
    pub fn as_str(self) -> &'static str {
        match self {
            InputMode::Pointer => "pointer",
            InputMode::Scroll => "scroll",
            InputMode::Orientation => "orientation",
        }
    }
}

/// Mobile devices always use orientation, whatever `controls` says; pointer
/// input is usually not there on touch screens.
#[inline]
pub fn resolve_input_mode(controls: Controls, is_mobile: bool) -> InputMode {
    if is_mobile {
        return InputMode::Orientation;
    }
    match controls {
        Controls::Pointer => InputMode::Pointer,
        Controls::Scroll => InputMode::Scroll,
        Controls::Orientation => InputMode::Orientation,
    }
}

#[inline]
pub fn is_mobile_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_AGENT_TOKENS.iter().any(|token| ua.contains(token))
}

/// Zero out readings inside the dead zone (inclusive).
#[inline]
pub fn apply_dead_zone(degrees: f32) -> f32 {
    if degrees.abs() <= ORIENTATION_DEAD_ZONE_DEG {
        0.0
    } else {
        degrees
    }
}

/// One raw environment event, as delivered by a listener.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RawInput {
    /// Pointer position in page coordinates.
    PointerMove { page_x: f32, page_y: f32 },
    /// Scroll offset of the scope element.
    Scroll { scroll_x: f32, scroll_y: f32 },
    /// Tilt in degrees: gamma is left-to-right, beta is front-to-back.
    Orientation { gamma: f32, beta: f32 },
}

#[derive(Debug, Default)]
pub struct PointerInput {
    latest: Cell<Vec2>,
}

impl PointerInput {
    pub fn record(&self, page_x: f32, page_y: f32) {
        self.latest.set(Vec2::new(page_x, page_y));
    }
}

#[derive(Debug, Default)]
pub struct ScrollInput {
    offset: Cell<Vec2>,
}

impl ScrollInput {
    pub fn record(&self, scroll_x: f32, scroll_y: f32) {
        self.offset.set(Vec2::new(scroll_x, scroll_y));
    }

    /// The scroll offset as a point at the center of the visible area, so the
    /// units match pointer coordinates. Uses the metrics of the current frame.
    #[inline]
    pub fn sample(&self, viewport: &ViewportMetrics) -> Vec2 {
        self.offset.get() + viewport.center()
    }
}

#[derive(Debug, Default)]
pub struct OrientationInput {
    latest: Cell<Vec2>,
}

impl OrientationInput {
    pub fn record(&self, gamma: f32, beta: f32) {
        self.latest.set(Vec2::new(apply_dead_zone(gamma), apply_dead_zone(beta)));
    }
}

/// Latest-sample slot for the selected input origin.
///
/// Listeners write through [`InputSource::record`]; the frame loop reads with
/// [`InputSource::sample`]. Before the first event the raw value is `(0, 0)`.
#[derive(Debug)]
pub enum InputSource {
    Pointer(PointerInput),
    Scroll(ScrollInput),
    Orientation(OrientationInput),
}

impl InputSource {
    pub fn for_mode(mode: InputMode) -> Self {
        match mode {
            InputMode::Pointer => InputSource::Pointer(PointerInput::default()),
            InputMode::Scroll => InputSource::Scroll(ScrollInput::default()),
            InputMode::Orientation => InputSource::Orientation(OrientationInput::default()),
        }
    }

    pub fn mode(&self) -> InputMode {
        match self {
            InputSource::Pointer(_) => InputMode::Pointer,
            InputSource::Scroll(_) => InputMode::Scroll,
            InputSource::Orientation(_) => InputMode::Orientation,
        }
    }

    /// Feed one event. Events for another mode are ignored.
    pub fn record(&self, raw: RawInput) {
        match (self, raw) {
            (InputSource::Pointer(p), RawInput::PointerMove { page_x, page_y }) => {
                p.record(page_x, page_y)
            }
            (InputSource::Scroll(s), RawInput::Scroll { scroll_x, scroll_y }) => {
                s.record(scroll_x, scroll_y)
            }
            (InputSource::Orientation(o), RawInput::Orientation { gamma, beta }) => {
                o.record(gamma, beta)
            }
            _ => {}
        }
    }

    /// Latest signal; `viewport` is only consulted in scroll mode.
    #[inline]
    pub fn sample(&self, viewport: &ViewportMetrics) -> Vec2 {
        match self {
            InputSource::Pointer(p) => p.latest.get(),
            InputSource::Scroll(s) => s.sample(viewport),
            InputSource::Orientation(o) => o.latest.get(),
        }
    }
}

