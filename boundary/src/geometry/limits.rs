// Centralized ingestion limits to harden against untrusted input (JSON/wasm)

// A traced room boundary rarely exceeds a few hundred vertices; the spike
// and door stages are quadratic in this count.
pub const MAX_VERTICES: usize = 20_000;

// Numeric bounds
pub const COORD_MIN: f64 = -1.0e9;
pub const COORD_MAX: f64 =  1.0e9;
pub const BULGE_MAX: f64 = 1.0e6;

#[inline]
pub fn in_coord_bounds(x: f64) -> bool { x.is_finite() && x >= COORD_MIN && x <= COORD_MAX }

#[inline]
pub fn in_bulge_bounds(b: f64) -> bool { b.is_finite() && b.abs() <= BULGE_MAX }
