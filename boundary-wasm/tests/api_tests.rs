#![cfg(target_arch = "wasm32")]

use boundary_wasm::Cleaner;
use js_sys::{Float64Array, Reflect};
use serde::Deserialize;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const SWING: f64 = 0.414_213_562;

fn get(v: &JsValue, k: &str) -> JsValue {
    Reflect::get(v, &JsValue::from_str(k)).unwrap()
}

fn is_ok(v: &JsValue) -> bool {
    get(v, "ok").as_bool().unwrap_or(false)
}

fn is_err(v: &JsValue, code: &str) -> bool {
    if is_ok(v) {
        return false;
    }
    let err = get(v, "error");
    get(&err, "code").as_string().map_or(false, |s| s == code)
}

#[derive(Deserialize)]
struct Report {
    vertices_in: usize,
    vertices_out: usize,
    spikes_removed: usize,
    doors_matched: usize,
}

// 240" x 120" room with a door swing on the bottom wall.
fn door_room() -> (Vec<f64>, Vec<f64>) {
    let xy = vec![
        0.0, 0.0, 100.0, 0.0, 100.0, -36.0, 136.0, 0.0, 240.0, 0.0, 240.0, 120.0, 0.0, 120.0,
    ];
    let bulges = vec![0.0, 0.0, SWING, 0.0, 0.0, 0.0, 0.0];
    (xy, bulges)
}

#[wasm_bindgen_test]
fn clean_collapses_door_swing() {
    let c = Cleaner::new();
    let (xy, bulges) = door_room();
    let r = c.clean_res(
        Float64Array::from(&xy[..]),
        Some(Float64Array::from(&bulges[..])),
    );
    assert!(is_ok(&r));
    let value = get(&r, "value");
    assert!(get(&value, "warning").is_null());
    let out = Float64Array::new(&get(&value, "xy"));
    assert_eq!(out.length(), 10);
    let report: Report = serde_wasm_bindgen::from_value(get(&value, "report")).unwrap();
    assert_eq!(report.vertices_in, 7);
    assert_eq!(report.vertices_out, 5);
    assert_eq!(report.spikes_removed, 0);
    assert_eq!(report.doors_matched, 1);
    assert!(out.to_vec().chunks(2).all(|p| p[1] >= 0.0));
}

#[wasm_bindgen_test]
fn malformed_arrays_are_typed_errors() {
    let c = Cleaner::new();
    let odd = Float64Array::from(&[0.0, 0.0, 1.0][..]);
    assert!(is_err(&c.clean_res(odd, None), "invalid_input"));

    let (xy, _) = door_room();
    let short = Float64Array::from(&[0.0, 0.0][..]);
    assert!(is_err(&c.clean_res(Float64Array::from(&xy[..]), Some(short)), "invalid_input"));

    let two = Float64Array::from(&[0.0, 0.0, 1.0, 0.0][..]);
    assert!(is_err(&c.clean_res(two, None), "too_few_vertices"));

    let nan = Float64Array::from(&[0.0, 0.0, f64::NAN, 0.0, 1.0, 1.0][..]);
    assert!(is_err(&c.clean_res(nan, None), "non_finite"));
}

#[wasm_bindgen_test]
fn thresholds_are_validated_and_kept_on_error() {
    let mut c = Cleaner::new();
    assert!(is_ok(&c.set_threshold_res("door_width_max", 48.0)));
    assert!(is_err(&c.set_threshold_res("door_width_max", 10.0), "invalid_config"));
    assert!(is_err(&c.set_threshold_res("spike_proximity", f64::INFINITY), "non_finite"));
    assert!(is_err(&c.set_threshold_res("door_height", 1.0), "invalid_param"));

    let r = c.get_config_res();
    assert!(is_ok(&r));
    let cfg = get(&r, "value");
    assert_eq!(get(&cfg, "door_width_max").as_f64(), Some(48.0));
    assert_eq!(get(&cfg, "spike_proximity").as_f64(), Some(24.0));
}

#[wasm_bindgen_test]
fn config_json_and_json_documents() {
    let mut c = Cleaner::new();
    assert!(is_ok(&c.set_config_json_res(r#"{"collapse_doors": false}"#)));
    assert!(is_err(&c.set_config_json_res("{not json"), "invalid_config"));

    let doc = r#"{"version":1,"vertices":[
        {"x":0,"y":0},{"x":100,"y":0},{"x":100,"y":-36,"bulge":0.414213562},
        {"x":136,"y":0},{"x":240,"y":0},{"x":240,"y":120},{"x":0,"y":120}]}"#;
    let r = c.clean_json_res(doc);
    assert!(is_ok(&r));
    let text = get(&r, "value").as_string().unwrap();
    let out: serde_json::Value = serde_json::from_str(&text).unwrap();
    // Doors stay when the door stage is off; arcs are still flattened.
    assert_eq!(out["vertices"].as_array().map(Vec::len), Some(7));
    assert_eq!(out["report"]["doors_matched"], serde_json::json!(0));

    assert!(is_err(&c.clean_json_res(r#"{"version":9,"vertices":[]}"#), "invalid_input"));
}
