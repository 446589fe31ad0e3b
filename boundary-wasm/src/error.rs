use boundary::{ConfigError, PolygonError};
use wasm_bindgen::JsValue;

use crate::interop::{new_obj, set_kv};

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

#[inline]
pub fn non_finite(param: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "param", &JsValue::from_str(param));
    err("non_finite", format!("parameter '{}' must be finite", param), Some(d.into()))
}

#[inline]
pub fn invalid_param(name: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "param", &JsValue::from_str(name));
    err("invalid_param", format!("unknown parameter '{}'", name), Some(d.into()))
}

#[inline]
pub fn invalid_input(message: impl Into<String>) -> JsValue {
    err("invalid_input", message, None)
}

#[inline]
pub fn internal(message: impl Into<String>) -> JsValue {
    err("internal", message, None)
}

pub fn from_config(e: &ConfigError) -> JsValue {
    let d = new_obj();
    match e {
        ConfigError::NonFinite { param } | ConfigError::NotPositive { param } => {
            set_kv(&d, "param", &JsValue::from_str(param));
        }
        ConfigError::EmptyDoorRange { min, max } => {
            set_kv(&d, "min", &JsValue::from_f64(*min));
            set_kv(&d, "max", &JsValue::from_f64(*max));
        }
        _ => {}
    }
    err("invalid_config", e.to_string(), Some(d.into()))
}

pub fn from_polygon(e: &PolygonError) -> JsValue {
    let d = new_obj();
    let code = match e {
        PolygonError::TooFewVertices { got } => {
            set_kv(&d, "got", &JsValue::from_f64(*got as f64));
            "too_few_vertices"
        }
        PolygonError::TooManyVertices { got, max } => {
            set_kv(&d, "got", &JsValue::from_f64(*got as f64));
            set_kv(&d, "max", &JsValue::from_f64(*max as f64));
            "too_many_vertices"
        }
        PolygonError::NonFinite { index } => {
            set_kv(&d, "index", &JsValue::from_f64(*index as f64));
            "non_finite"
        }
        PolygonError::OutOfBounds { index } => {
            set_kv(&d, "index", &JsValue::from_f64(*index as f64));
            "out_of_bounds"
        }
        _ => "invalid_input",
    };
    err(code, e.to_string(), Some(d.into()))
}
