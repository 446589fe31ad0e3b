//! Boundary cleanup for traced room polygons.
//!
//! A boundary tracer working over architectural linework produces closed
//! polygons with two kinds of artifacts: spikes where it bridged into a
//! nearby unrelated shape, and notches where it walked around a door swing
//! instead of across the opening. [`clean_polygon`] repairs both:
//!
//! raw polygon → spike removal (to fixpoint) → arc/door extraction →
//! flattening → door/arc matching → notch span collection → rebuild.
//!
//! ```
//! use boundary::{clean_polygon, CleanupConfig, Polygon};
//!
//! let raw = Polygon::from_points(&[
//!     (0.0, 0.0), (100.0, 0.0), (100.0, -20.0), (110.0, -20.0),
//!     (110.0, 0.0), (240.0, 0.0), (240.0, 240.0), (0.0, 240.0),
//! ])?;
//! let cleaned = clean_polygon(&raw, &CleanupConfig::default());
//! assert_eq!(cleaned.polygon.len(), 6);
//! assert!(cleaned.warning.is_none());
//! # Ok::<(), boundary::PolygonError>(())
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod model;
pub mod geometry {
    pub mod flatten;
    pub mod limits;
    pub mod math;
    pub mod path_length;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod doors;
    pub mod notches;
    pub mod spikes;
}
pub mod json;

pub use config::{CleanupConfig, DoorOrder};
pub use error::{CleanupError, CleanupWarning, ConfigError, PolygonError};
pub use model::{ArcMarker, DoorCandidate, Polygon, Vec2, Vertex};

use log::{info, warn};
use serde::Serialize;

use algorithms::{doors, notches, spikes};
use geometry::flatten::flatten_arcs;

/// Counters and areas collected while cleaning one polygon.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CleanupReport {
    pub vertices_in: usize,
    pub vertices_out: usize,
    pub spikes_removed: usize,
    pub spike_vertices_removed: usize,
    pub arcs_found: usize,
    pub doors_found: usize,
    pub doors_matched: usize,
    pub doors_unmatched: usize,
    pub notch_vertices_removed: usize,
    pub area_before_sqft: f64,
    pub area_after_sqft: f64,
}

/// Result of one cleanup run. `polygon` never carries arc flags.
#[derive(Clone, Debug)]
pub struct Cleanup {
    pub polygon: Polygon,
    pub warning: Option<CleanupWarning>,
    pub report: CleanupReport,
}

impl Cleanup {
    pub fn is_clean(&self) -> bool {
        self.warning.is_none()
    }
}

/// Run the full pipeline on a raw traced polygon.
///
/// The input is assumed to be closed with at least 3 vertices; use
/// [`clean_checked`] to validate untrusted input first. When collapsing the
/// door notches would leave fewer than 3 vertices, the door stage is dropped:
/// the despiked, flattened polygon is returned with a warning.
pub fn clean_polygon(raw: &Polygon, cfg: &CleanupConfig) -> Cleanup {
    let mut report = CleanupReport {
        vertices_in: raw.len(),
        area_before_sqft: raw.area_sqft(),
        ..CleanupReport::default()
    };

    let working = if cfg.remove_spikes {
        let (poly, removed) = spikes::remove_spikes(raw, cfg);
        report.spikes_removed = removed.len();
        report.spike_vertices_removed = removed.iter().map(|s| s.interior).sum();
        poly
    } else {
        raw.clone()
    };

    // Arc flags only survive until flattening, so extraction goes first.
    let extraction = if cfg.collapse_doors {
        doors::extract(&working, cfg)
    } else {
        doors::Extraction::default()
    };
    report.arcs_found = extraction.arcs.len();
    report.doors_found = extraction.doors.len();

    let flat = flatten_arcs(&working);

    let matching = doors::match_doors(&extraction, cfg);
    report.doors_matched = matching.matches.len();
    report.doors_unmatched = matching.unmatched.len();

    let pairs: Vec<(usize, usize)> =
        matching.matches.iter().map(doors::DoorMatch::span_ends).collect();
    let removals = notches::collect_removals(working.len(), &pairs);

    let (polygon, warning) = if removals.is_empty() {
        (flat, None)
    } else {
        match notches::rebuild(&flat, &removals) {
            Ok(rebuilt) => {
                report.notch_vertices_removed = removals.len();
                (rebuilt, None)
            }
            Err(w) => {
                warn!("{}", w);
                (flat, Some(w))
            }
        }
    };

    report.vertices_out = polygon.len();
    report.area_after_sqft = polygon.area_sqft();
    info!(
        "cleanup: {} -> {} vertices, {} spikes, {}/{} doors matched, {:.1} -> {:.1} sqft",
        report.vertices_in,
        report.vertices_out,
        report.spikes_removed,
        report.doors_matched,
        report.doors_found,
        report.area_before_sqft,
        report.area_after_sqft,
    );

    Cleanup { polygon, warning, report }
}

/// Validate config and vertices, then run [`clean_polygon`].
pub fn clean_checked(vertices: Vec<Vertex>, cfg: &CleanupConfig) -> Result<Cleanup, CleanupError> {
    cfg.validate()?;
    let raw = Polygon::new(vertices)?;
    Ok(clean_polygon(&raw, cfg))
}
