//! Door swing detection and door/arc pairing.
//!
//! When the tracer walks around a door swing instead of straight across the
//! opening, the boundary picks up an arc-flagged vertex next to a door-width
//! edge. Extraction runs on the pre-flattening polygon because flattening
//! clears the arc flags; matching pairs each door edge with the nearest arc
//! that no earlier door has claimed.

use std::collections::HashSet;

use log::debug;

use crate::config::{CleanupConfig, DoorOrder};
use crate::model::{ArcMarker, DoorCandidate, Polygon};

/// Frozen snapshot of arcs and door edges over one polygon's index space.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub vertex_count: usize,
    pub arcs: Vec<ArcMarker>,
    pub doors: Vec<DoorCandidate>,
}

pub fn extract(poly: &Polygon, cfg: &CleanupConfig) -> Extraction {
    let n = poly.len();
    let mut arcs = Vec::new();
    let mut doors = Vec::new();
    for i in 0..n {
        let v = poly.vertices()[i];
        if v.is_arc() {
            arcs.push(ArcMarker { index: i, pos: v.pos });
        }
        let j = poly.next_index(i);
        let w = poly.vertices()[j];
        let width = v.pos.dist(w.pos);
        if cfg.is_door_width(width) {
            doors.push(DoorCandidate {
                start: i,
                end: j,
                midpoint: v.pos.midpoint(w.pos),
                width,
            });
        }
    }
    if cfg.door_order == DoorOrder::ReverseScan {
        arcs.reverse();
        doors.reverse();
    }
    Extraction { vertex_count: n, arcs, doors }
}

/// A door edge paired with the arc it collapses against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoorMatch {
    pub arc: ArcMarker,
    pub door: DoorCandidate,
    pub distance: f64,
}

impl DoorMatch {
    /// `(arc index, door edge start)`: the two vertices the notch span joins.
    pub fn span_ends(&self) -> (usize, usize) {
        (self.arc.index, self.door.start)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Matching {
    pub matches: Vec<DoorMatch>,
    pub unmatched: Vec<DoorCandidate>,
}

/// Greedy nearest-arc assignment in discovery order. A door takes the
/// closest unused arc when it is strictly within `door_arc_max_distance`;
/// ties keep the arc discovered first.
pub fn match_doors(ext: &Extraction, cfg: &CleanupConfig) -> Matching {
    let mut used: HashSet<usize> = HashSet::new();
    let mut out = Matching::default();
    for door in &ext.doors {
        let mut best: Option<(ArcMarker, f64)> = None;
        for arc in ext.arcs.iter().filter(|a| !used.contains(&a.index)) {
            let d = door.midpoint.dist(arc.pos);
            if best.map_or(true, |(_, bd)| d < bd) {
                best = Some((*arc, d));
            }
        }
        match best {
            Some((arc, distance)) if distance < cfg.door_arc_max_distance => {
                debug!(
                    "door {} -> {} (width {:.1}) matched arc {} at {:.1}",
                    door.start, door.end, door.width, arc.index, distance
                );
                used.insert(arc.index);
                out.matches.push(DoorMatch { arc, door: *door, distance });
            }
            _ => {
                debug!("door {} -> {} (width {:.1}) left unmatched", door.start, door.end, door.width);
                out.unmatched.push(*door);
            }
        }
    }
    out
}
