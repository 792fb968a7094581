// Host-side tests for option merging and validation.

use parallax_web::config::merge_options;
use parallax_web::{Axis, Config, Controls, ParallaxError, Scope};
use serde_json::json;

#[test]
fn null_options_give_defaults() {
    let cfg = Config::from_overrides(&serde_json::Value::Null).unwrap();
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.power, 0.5);
    assert_eq!(cfg.axis, Axis::X);
    assert_eq!(cfg.scope, Scope::Global);
    assert_eq!(cfg.controls, Controls::Pointer);
    assert_eq!(cfg.class_name, "parallax");
}

#[test]
fn overrides_replace_only_given_keys() {
    let cfg = Config::from_overrides(&json!({ "power": 5, "axis": "both" })).unwrap();
    assert_eq!(cfg.power, 5.0);
    assert_eq!(cfg.axis, Axis::Both);
    assert_eq!(cfg.scope, Scope::Global);
    assert_eq!(cfg.class_name, "parallax");
}

#[test]
fn all_options_round_trip_from_js_names() {
    let cfg = Config::from_overrides(&json!({
        "className": "layer",
        "power": -3.5,
        "axis": "y",
        "scope": "local",
        "controls": "scroll"
    }))
    .unwrap();
    assert_eq!(cfg.class_name, "layer");
    assert_eq!(cfg.power, -3.5);
    assert_eq!(cfg.axis, Axis::Y);
    assert_eq!(cfg.scope, Scope::Local);
    assert_eq!(cfg.controls, Controls::Scroll);
}

#[test]
fn legacy_mouse_control_means_pointer() {
    let cfg = Config::from_overrides(&json!({ "controls": "mouse" })).unwrap();
    assert_eq!(cfg.controls, Controls::Pointer);
}

#[test]
fn unknown_keys_are_ignored() {
    let cfg = Config::from_overrides(&json!({ "debug": true })).unwrap();
    assert_eq!(cfg, Config::default());
}

#[test]
fn invalid_values_are_configuration_errors() {
    let bad = [
        json!({ "axis": "z" }),
        json!({ "scope": "page" }),
        json!({ "controls": "keyboard" }),
        json!({ "power": "strong" }),
        json!({ "power": null }),
        json!({ "className": "" }),
        json!({ "className": "   " }),
        json!(42),
        json!(["axis", "both"]),
    ];
    for options in bad {
        match Config::from_overrides(&options) {
            Err(ParallaxError::Configuration(_)) => {}
            other => panic!("{options} should be rejected, got {other:?}"),
        }
    }
}

#[test]
fn merge_recurses_into_objects_and_replaces_arrays() {
    let defaults = json!({
        "nested": { "a": 1, "b": 2 },
        "list": [1, 2, 3],
        "flag": true
    });
    let overrides = json!({
        "nested": { "b": 20, "c": 30 },
        "list": [9],
        "extra": { "deep": { "x": 1 } }
    });
    let merged = merge_options(&defaults, &overrides);
    assert_eq!(
        merged,
        json!({
            "nested": { "a": 1, "b": 20, "c": 30 },
            "list": [9],
            "flag": true,
            "extra": { "deep": { "x": 1 } }
        })
    );
}

#[test]
fn merge_leaves_inputs_untouched() {
    let defaults = json!({ "nested": { "a": 1 } });
    let overrides = json!({ "nested": { "a": 2 } });
    let d_before = defaults.clone();
    let o_before = overrides.clone();
    let _ = merge_options(&defaults, &overrides);
    assert_eq!(defaults, d_before);
    assert_eq!(overrides, o_before);
}

#[test]
fn object_override_replaces_scalar_default() {
    let merged = merge_options(&json!({ "power": 1 }), &json!({ "power": { "x": 2 } }));
    assert_eq!(merged, json!({ "power": { "x": 2 } }));
}
