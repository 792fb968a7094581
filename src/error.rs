use std::fmt;
use thiserror::Error;

/// Environment features the effect cannot run without.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capability {
    /// A "run before next repaint" primitive (`requestAnimationFrame`).
    FrameScheduler,
    /// Device orientation events.
    Orientation,
    /// The user declined (or the platform refused) orientation access.
    OrientationPermission,
    /// The rendering sink cannot apply a transform.
    Transform,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Capability::FrameScheduler => "animation frame scheduler",
            Capability::Orientation => "device orientation",
            Capability::OrientationPermission => "device orientation permission",
            Capability::Transform => "css transform",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParallaxError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("capability unavailable: {0}")]
    CapabilityUnavailable(Capability),
}

pub type Result<T> = std::result::Result<T, ParallaxError>;
