//! There-and-back excursion removal.
//!
//! A tracer that bridges from a wall into an unrelated nearby shape walks out,
//! around that shape, and back to (nearly) where it left. Such an excursion is
//! bounded by two vertices that sit close together while the boundary between
//! them is long. Removing the excursion's interior vertices reconnects the two
//! ends with a short chord.

use log::debug;

use crate::config::CleanupConfig;
use crate::geometry::path_length::{forward_interior, BoundaryLengths};
use crate::model::Polygon;

/// One excursion found on a working polygon. `from -> to` walks forward over
/// the excursion; its interior vertices are the ones to delete.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spike {
    pub from: usize,
    pub to: usize,
    pub direct: f64,
    pub detour: f64,
    pub interior: usize,
}

/// First qualifying excursion in lexicographic `(i, j)` order, `i < j`.
///
/// The excursion side of a pair is the shorter boundary walk between the two
/// vertices (forward walk on ties). It must have interior vertices, and
/// deleting them must leave at least 3 vertices.
pub fn find_spike(poly: &Polygon, cfg: &CleanupConfig) -> Option<Spike> {
    let n = poly.len();
    if n < 4 {
        return None;
    }
    let pts = poly.points();
    let lens = BoundaryLengths::new(&pts);
    let perimeter = lens.perimeter();

    for i in 0..n {
        for j in (i + 1)..n {
            let direct = pts[i].dist(pts[j]);
            if direct >= cfg.spike_proximity {
                continue;
            }
            let fwd = lens.forward(i, j);
            let back = perimeter - fwd;
            let (from, to, detour) = if fwd <= back { (i, j, fwd) } else { (j, i, back) };
            let interior = forward_interior(n, from, to);
            if interior == 0 || n - interior < 3 {
                continue;
            }
            if detour < cfg.spike_detour_ratio * direct || detour < cfg.spike_min_size {
                continue;
            }
            return Some(Spike { from, to, direct, detour, interior });
        }
    }
    None
}

/// Drop the vertices strictly between `spike.from` and `spike.to`.
pub fn excise(poly: &Polygon, spike: &Spike) -> Polygon {
    let n = poly.len();
    let span = (spike.to + n - spike.from) % n;
    poly.retain_indices(|k| {
        let off = (k + n - spike.from) % n;
        off == 0 || off >= span
    })
}

/// Remove excursions until none qualifies. Returns the cleaned polygon and
/// the excursions in removal order (indices refer to the polygon at the time
/// each one was found).
pub fn remove_spikes(poly: &Polygon, cfg: &CleanupConfig) -> (Polygon, Vec<Spike>) {
    let mut current = poly.clone();
    let mut removed = Vec::new();
    while let Some(spike) = find_spike(&current, cfg) {
        debug!(
            "spike {} -> {}: direct {:.2}, detour {:.2}, dropping {} vertices",
            spike.from, spike.to, spike.direct, spike.detour, spike.interior
        );
        let next = excise(&current, &spike);
        // find_spike only reports detours with interior vertices that leave 3.
        debug_assert!(next.len() < current.len() && next.len() >= 3);
        current = next;
        removed.push(spike);
    }
    (current, removed)
}
