//! Per-target displacement math.
//!
//! Everything here is plain arithmetic over already validated state, so none
//! of it can fail during a frame.

use crate::config::Config;
use crate::constants::{ORIENTATION_SCALE, STRENGTH_DIVISOR};
use crate::input::InputMode;
use glam::{Mat4, Vec2, Vec3};

/// Reference rectangle used for centering: the window for global scope,
/// the container (in page coordinates) for local scope.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ViewportMetrics {
    pub origin: Vec2,
    pub size: Vec2,
}

impl ViewportMetrics {
    /// Window-sized viewport anchored at the page origin.
    pub fn window(width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::ZERO,
            size: Vec2::new(width, height),
        }
    }

    /// Container bounds in page coordinates.
    pub fn container(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(left, top),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.origin + self.size * 0.5
    }
}

/// One tracked element. `handle` is whatever the rendering sink needs to find
/// the element again.
#[derive(Clone, Debug, PartialEq)]
pub struct Target<H> {
    pub handle: H,
    pub strength_override: Option<f32>,
}

impl<H> Target<H> {
    pub fn new(handle: H, strength_override: Option<f32>) -> Self {
        Self {
            handle,
            strength_override,
        }
    }

    /// Override if present, otherwise the configured power.
    #[inline]
    pub fn strength(&self, config: &Config) -> f32 {
        self.strength_override.unwrap_or(config.power)
    }
}

/// Pixel translation for one target.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Offset {
    pub tx: f32,
    pub ty: f32,
}

impl Offset {
    /// Homogeneous transform with only the translation column populated.
    pub fn to_mat4(self) -> Mat4 {
        Mat4::from_translation(Vec3::new(self.tx, self.ty, 0.0))
    }

    /// CSS `matrix3d(...)` value for this translation (column-major, like glam).
    pub fn to_css_matrix3d(self) -> String {
        let cols = self.to_mat4().to_cols_array();
        let parts: Vec<String> = cols.iter().map(|v| format!("{}", v)).collect();
        format!("matrix3d({})", parts.join(", "))
    }
}

/// Displacement of one target for the smoothed signal `current`.
///
/// Pointer and scroll signals are measured from the viewport center; tilt
/// angles are used directly, scaled up by [`ORIENTATION_SCALE`]. Disabled axes
/// stay exactly 0.
pub fn compute<H>(
    current: Vec2,
    target: &Target<H>,
    viewport: &ViewportMetrics,
    config: &Config,
    mode: InputMode,
) -> Offset {
    let strength = target.strength(config) / STRENGTH_DIVISOR;
    let delta = match mode {
        InputMode::Pointer | InputMode::Scroll => current - viewport.center(),
        InputMode::Orientation => current * ORIENTATION_SCALE,
    };
    let tx = if config.axis.has_x() {
        delta.x * -strength
    } else {
        0.0
    };
    let ty = if config.axis.has_y() {
        delta.y * -strength
    } else {
        0.0
    };
    Offset { tx, ty }
}
