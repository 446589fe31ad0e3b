// Centralized tolerances and unit conventions for boundary geometry

// Drawing units are inches
pub const IN_PER_FT: f64 = 12.0;
pub const SQIN_PER_SQFT: f64 = IN_PER_FT * IN_PER_FT;

#[inline] pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool { (a - b).abs() <= eps }

#[inline] pub fn sqin_to_sqft(a: f64) -> f64 { a / SQIN_PER_SQFT }
