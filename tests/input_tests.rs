// Host-side tests for input sources and mode selection.

use glam::Vec2;
use parallax_web::input::{apply_dead_zone, is_mobile_agent};
use parallax_web::{
    resolve_input_mode, Controls, InputMode, InputSource, RawInput, ViewportMetrics,
};

fn window() -> ViewportMetrics {
    ViewportMetrics::window(1000.0, 800.0)
}

#[test]
fn mobile_forces_orientation() {
    for controls in [Controls::Pointer, Controls::Scroll, Controls::Orientation] {
        assert_eq!(resolve_input_mode(controls, true), InputMode::Orientation);
    }
}

#[test]
fn desktop_uses_configured_controls() {
    assert_eq!(resolve_input_mode(Controls::Pointer, false), InputMode::Pointer);
    assert_eq!(resolve_input_mode(Controls::Scroll, false), InputMode::Scroll);
    assert_eq!(
        resolve_input_mode(Controls::Orientation, false),
        InputMode::Orientation
    );
}

#[test]
fn mobile_agent_detection() {
    let mobile = [
        "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36",
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)",
        "Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X)",
        "Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)",
        "Mozilla/5.0 (compatible; MSIE 10.0; Windows Phone 8.0; IEMobile/10.0)",
        "BlackBerry9700/5.0.0.351",
    ];
    for ua in mobile {
        assert!(is_mobile_agent(ua), "{ua}");
    }
    let desktop = [
        "Mozilla/5.0 (X11; Linux x86_64) Gecko/20100101 Firefox/128.0",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_0) AppleWebKit/605.1.15 Safari/605.1.15",
        "",
    ];
    for ua in desktop {
        assert!(!is_mobile_agent(ua), "{ua}");
    }
}

#[test]
fn dead_zone_is_inclusive() {
    assert_eq!(apply_dead_zone(1.5), 0.0);
    assert_eq!(apply_dead_zone(-1.5), 0.0);
    assert_eq!(apply_dead_zone(2.0), 0.0);
    assert_eq!(apply_dead_zone(-2.0), 0.0);
    assert_eq!(apply_dead_zone(2.5), 2.5);
    assert_eq!(apply_dead_zone(-30.0), -30.0);
}

#[test]
fn orientation_reading_inside_dead_zone_reports_zero() {
    let src = InputSource::for_mode(InputMode::Orientation);
    src.record(RawInput::Orientation {
        gamma: 1.5,
        beta: 10.0,
    });
    assert_eq!(src.sample(&window()), Vec2::new(0.0, 10.0));
}

#[test]
fn sample_defaults_to_origin_until_first_event() {
    for mode in [InputMode::Pointer, InputMode::Orientation] {
        let src = InputSource::for_mode(mode);
        assert_eq!(src.mode(), mode);
        assert_eq!(src.sample(&window()), Vec2::ZERO);
    }
    // unscrolled page: the signal sits on the viewport center
    let src = InputSource::for_mode(InputMode::Scroll);
    assert_eq!(src.sample(&window()), Vec2::new(500.0, 400.0));
}

#[test]
fn pointer_keeps_only_latest_sample() {
    let src = InputSource::for_mode(InputMode::Pointer);
    src.record(RawInput::PointerMove {
        page_x: 10.0,
        page_y: 20.0,
    });
    src.record(RawInput::PointerMove {
        page_x: 640.0,
        page_y: 360.0,
    });
    assert_eq!(src.sample(&window()), Vec2::new(640.0, 360.0));
}

#[test]
fn scroll_is_converted_to_centered_point() {
    let src = InputSource::for_mode(InputMode::Scroll);
    src.record(RawInput::Scroll {
        scroll_x: 0.0,
        scroll_y: 1200.0,
    });
    assert_eq!(src.sample(&window()), Vec2::new(500.0, 1600.0));
}

#[test]
fn scroll_signal_follows_the_current_viewport() {
    let src = InputSource::for_mode(InputMode::Scroll);
    src.record(RawInput::Scroll {
        scroll_x: 100.0,
        scroll_y: 50.0,
    });
    assert_eq!(src.sample(&window()), Vec2::new(600.0, 450.0));
    let resized = ViewportMetrics::window(800.0, 600.0);
    assert_eq!(src.sample(&resized), Vec2::new(500.0, 350.0));
}

#[test]
fn events_for_another_mode_are_ignored() {
    let src = InputSource::for_mode(InputMode::Pointer);
    src.record(RawInput::Orientation {
        gamma: 40.0,
        beta: 40.0,
    });
    src.record(RawInput::Scroll {
        scroll_x: 10.0,
        scroll_y: 10.0,
    });
    assert_eq!(src.sample(&window()), Vec2::ZERO);
}
