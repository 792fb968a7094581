// Host-side tests for tuning constants and their relationships.

use parallax_web::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // A factor of 1 would jump straight to the raw sample
    assert!(SMOOTHING_FACTOR > 1.0);
    assert!(STRENGTH_DIVISOR > 0.0);
    assert!(ORIENTATION_SCALE > 0.0);

    // Dead zone must be small next to a usable tilt range
    assert!(ORIENTATION_DEAD_ZONE_DEG >= 0.0);
    assert!(ORIENTATION_DEAD_ZONE_DEG < 45.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn defaults_match_documented_values() {
    assert_eq!(SMOOTHING_FACTOR, 10.0);
    assert_eq!(STRENGTH_DIVISOR, 10.0);
    assert_eq!(DEFAULT_POWER, 0.5);
    assert_eq!(DEFAULT_CLASS_NAME, "parallax");
    assert_eq!(STRENGTH_ATTRIBUTE, "data-power");
}

#[test]
fn mobile_tokens_are_lowercase() {
    for token in MOBILE_AGENT_TOKENS {
        assert_eq!(token, token.to_ascii_lowercase(), "token {token} must be lowercase");
        assert!(!token.is_empty());
    }
}
