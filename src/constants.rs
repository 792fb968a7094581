/// Smoothing and displacement tuning constants.
///
/// These keep the magic numbers of the effect in one place. The smoothing
/// factor and strength divisor are part of the observable behavior and are
/// not exposed as options.
// Divisor of the exponential moving average: current += (raw - current) / k
pub const SMOOTHING_FACTOR: f32 = 10.0;

// Per-target strength is divided by this before it scales the displacement
pub const STRENGTH_DIVISOR: f32 = 10.0;

// Tilt readings within +/- this many degrees are reported as 0
pub const ORIENTATION_DEAD_ZONE_DEG: f32 = 2.0;

// Tilt angles span a much smaller range than pixels
pub const ORIENTATION_SCALE: f32 = 10.0;

// Option defaults
pub const DEFAULT_POWER: f32 = 0.5;
pub const DEFAULT_CLASS_NAME: &str = "parallax";

// Element attribute carrying a per-target strength override
pub const STRENGTH_ATTRIBUTE: &str = "data-power";

// User agent fragments that force orientation controls (matched case-insensitively)
pub const MOBILE_AGENT_TOKENS: [&str; 7] = [
    "android",
    "blackberry",
    "iphone",
    "ipad",
    "ipod",
    "opera mini",
    "iemobile",
];

pub const LOG_TAG: &str = "[parallax]";
