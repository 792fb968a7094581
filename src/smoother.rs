use crate::constants::SMOOTHING_FACTOR;
use glam::Vec2;

/// Exponentially smoothed signal.
///
/// `current` chases `raw` by a fixed fraction per tick, so it never overshoots
/// and never quite arrives.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothedState {
    pub current: Vec2,
    pub raw: Vec2,
}

#[derive(Clone, Debug)]
pub struct Smoother {
    state: SmoothedState,
    factor: f32,
}

impl Default for Smoother {
    fn default() -> Self {
        Self::new()
    }
}

impl Smoother {
    pub fn new() -> Self {
        Self {
            state: SmoothedState {
                current: Vec2::ZERO,
                raw: Vec2::ZERO,
            },
            factor: SMOOTHING_FACTOR,
        }
    }

    /// Take the latest sample and move `current` one step toward it.
    #[inline]
    pub fn advance(&mut self, signal: Vec2) -> Vec2 {
        self.state.raw = signal;
        self.state.current += (self.state.raw - self.state.current) / self.factor;
        self.state.current
    }

    #[inline]
    pub fn current(&self) -> Vec2 {
        self.state.current
    }

    pub fn state(&self) -> SmoothedState {
        self.state
    }
}
