//! Door notch removal and final rebuild.
//!
//! Every matched door contributes one cyclic span of vertex indices. Spans
//! are all computed against the same frozen index space and merged into one
//! removal set, so later doors never see indices shifted by earlier ones.

use std::collections::BTreeSet;

use crate::error::CleanupWarning;
use crate::model::Polygon;

/// Inclusive cyclic span of vertex indices between two vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    /// `lo..=hi`
    Direct { lo: usize, hi: usize },
    /// `hi..n` followed by `0..=lo`
    Wrap { lo: usize, hi: usize },
}

impl Span {
    pub fn len(&self, n: usize) -> usize {
        match *self {
            Span::Direct { lo, hi } => hi - lo + 1,
            Span::Wrap { lo, hi } => n - (hi - lo) + 1,
        }
    }

    pub fn indices(&self, n: usize) -> Vec<usize> {
        match *self {
            Span::Direct { lo, hi } => (lo..=hi).collect(),
            Span::Wrap { lo, hi } => (hi..n).chain(0..=lo).collect(),
        }
    }
}

/// Shorter of the two spans joining `a` and `d` by vertex count; the direct
/// span wins ties.
pub fn notch_span(n: usize, a: usize, d: usize) -> Span {
    let (lo, hi) = if a <= d { (a, d) } else { (d, a) };
    let direct = Span::Direct { lo, hi };
    let wrap = Span::Wrap { lo, hi };
    if direct.len(n) <= wrap.len(n) {
        direct
    } else {
        wrap
    }
}

/// Union of the notch spans for `(arc, door start)` pairs over `n` vertices.
pub fn collect_removals(n: usize, pairs: &[(usize, usize)]) -> BTreeSet<usize> {
    let mut remove = BTreeSet::new();
    for &(a, d) in pairs {
        remove.extend(notch_span(n, a, d).indices(n));
    }
    remove
}

/// Keep every vertex not marked for removal, in original order. Refuses a
/// result with fewer than 3 vertices.
pub fn rebuild(poly: &Polygon, remove: &BTreeSet<usize>) -> Result<Polygon, CleanupWarning> {
    let kept = poly.retain_indices(|i| !remove.contains(&i));
    if kept.len() < 3 {
        return Err(CleanupWarning::DegenerateRebuild { remaining: kept.len() });
    }
    Ok(kept)
}
