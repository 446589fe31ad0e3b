//! Default value functions for serde deserialization.
//!
//! All lengths are drawing units (inches).

use super::DoorOrder;

pub fn spike_proximity() -> f64 {
    24.0
}

pub fn spike_detour_ratio() -> f64 {
    3.0
}

pub fn spike_min_size() -> f64 {
    36.0
}

pub fn door_width_min() -> f64 {
    30.0
}

pub fn door_width_max() -> f64 {
    44.0
}

pub fn door_arc_max_distance() -> f64 {
    72.0
}

pub fn door_order() -> DoorOrder {
    DoorOrder::ReverseScan
}

pub fn enabled() -> bool {
    true
}
