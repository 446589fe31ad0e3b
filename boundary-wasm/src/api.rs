use crate::Cleaner;
use boundary::json::{cleanup_to_json_value, polygon_from_json_str};
use boundary::{clean_polygon, Cleanup, CleanupConfig, Polygon, Vertex};
use js_sys::Float64Array;
use wasm_bindgen::prelude::*;
use crate::error;
use crate::interop::{arr_f64, new_obj, set_kv};
use crate::logging;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Route core log records to the browser console.
#[wasm_bindgen]
pub fn init_logging(level: u8) {
    logging::init_logger(logging::level_filter(level));
}

fn vertices_from_arrays(xy: &[f64], bulges: Option<&[f64]>) -> Result<Vec<Vertex>, JsValue> {
    if xy.len() % 2 != 0 {
        return Err(error::invalid_input("xy must hold an even number of values"));
    }
    let n = xy.len() / 2;
    if let Some(b) = bulges {
        if b.len() != n {
            return Err(error::invalid_input("bulges must hold one value per vertex"));
        }
    }
    Ok((0..n)
        .map(|i| {
            let bulge = bulges.map_or(0.0, |b| b[i]);
            Vertex::arc(xy[2 * i], xy[2 * i + 1], bulge)
        })
        .collect())
}

fn cleanup_value(c: &Cleanup) -> Result<JsValue, JsValue> {
    let xy: Vec<f64> = c.polygon.points().iter().flat_map(|p| [p.x, p.y]).collect();
    let report = serde_wasm_bindgen::to_value(&c.report)
        .map_err(|e| error::internal(e.to_string()))?;
    let o = new_obj();
    set_kv(&o, "xy", &arr_f64(&xy).into());
    match c.warning {
        Some(w) => set_kv(&o, "warning", &JsValue::from_str(&w.to_string())),
        None => set_kv(&o, "warning", &JsValue::NULL),
    }
    set_kv(&o, "report", &report);
    Ok(o.into())
}

#[wasm_bindgen]
impl Cleaner {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Cleaner {
        crate::Cleaner::rs_new()
    }

    /// Session with a config object; missing fields take their defaults.
    pub fn with_config_res(cfg: JsValue) -> JsValue {
        let parsed: CleanupConfig = match serde_wasm_bindgen::from_value(cfg) {
            Ok(c) => c,
            Err(e) => return error::err("invalid_config", e.to_string(), None),
        };
        if let Err(e) = parsed.validate() {
            return error::from_config(&e);
        }
        error::ok(crate::Cleaner::rs_with_config(parsed).into())
    }

    pub fn get_config_res(&self) -> JsValue {
        match serde_wasm_bindgen::to_value(self.rs_config()) {
            Ok(v) => error::ok(v),
            Err(e) => error::internal(e.to_string()),
        }
    }

    pub fn set_config_json_res(&mut self, doc: &str) -> JsValue {
        match CleanupConfig::from_json_str(doc) {
            Ok(cfg) => {
                self.cfg = cfg;
                error::ok(JsValue::from_bool(true))
            }
            Err(e) => error::from_config(&e),
        }
    }

    /// Set one numeric threshold by its config field name.
    pub fn set_threshold_res(&mut self, name: &str, value: f64) -> JsValue {
        if !value.is_finite() {
            return error::non_finite(name);
        }
        let mut next = self.cfg.clone();
        let slot = match name {
            "spike_proximity" => &mut next.spike_proximity,
            "spike_detour_ratio" => &mut next.spike_detour_ratio,
            "spike_min_size" => &mut next.spike_min_size,
            "door_width_min" => &mut next.door_width_min,
            "door_width_max" => &mut next.door_width_max,
            "door_arc_max_distance" => &mut next.door_arc_max_distance,
            _ => return error::invalid_param(name),
        };
        *slot = value;
        if let Err(e) = next.validate() {
            return error::from_config(&e);
        }
        self.cfg = next;
        error::ok(JsValue::from_bool(true))
    }

    /// Clean a polygon given as interleaved `[x0, y0, x1, y1, ...]` with an
    /// optional per-vertex bulge array.
    pub fn clean_res(&self, xy: Float64Array, bulges: Option<Float64Array>) -> JsValue {
        let xy = xy.to_vec();
        let bulges = bulges.map(|b| b.to_vec());
        let vertices = match vertices_from_arrays(&xy, bulges.as_deref()) {
            Ok(v) => v,
            Err(e) => return e,
        };
        let raw = match Polygon::new(vertices) {
            Ok(p) => p,
            Err(e) => return error::from_polygon(&e),
        };
        match cleanup_value(&clean_polygon(&raw, &self.cfg)) {
            Ok(v) => error::ok(v),
            Err(e) => e,
        }
    }

    /// Clean a polygon JSON document; the value is the cleaned document as a
    /// JSON string with `warning` and `report` fields.
    pub fn clean_json_res(&self, doc: &str) -> JsValue {
        let raw = match polygon_from_json_str(doc) {
            Ok(p) => p,
            Err(e) => return error::from_polygon(&e),
        };
        match cleanup_to_json_value(&clean_polygon(&raw, &self.cfg)) {
            Ok(out) => error::ok(JsValue::from_str(&out.to_string())),
            Err(e) => error::internal(e.to_string()),
        }
    }
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new()
    }
}
