use serde::{Deserialize, Serialize};

use crate::error::PolygonError;
use crate::geometry::limits;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Vec2 { x, y }
    }

    pub fn dist(self, other: Vec2) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn midpoint(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: 0.5 * (self.x + other.x),
            y: 0.5 * (self.y + other.y),
        }
    }
}

/// A boundary vertex. `bulge` is non-zero when the edge leaving this vertex
/// is a circular arc rather than a straight segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub pos: Vec2,
    #[serde(default)]
    pub bulge: f64,
}

impl Vertex {
    pub const fn line(x: f64, y: f64) -> Self {
        Vertex { pos: Vec2 { x, y }, bulge: 0.0 }
    }

    pub const fn arc(x: f64, y: f64, bulge: f64) -> Self {
        Vertex { pos: Vec2 { x, y }, bulge }
    }

    pub fn is_arc(&self) -> bool {
        self.bulge != 0.0
    }

    pub fn straightened(self) -> Vertex {
        Vertex { pos: self.pos, bulge: 0.0 }
    }
}

/// Closed, cyclically indexed vertex sequence. The edge from the last vertex
/// back to the first is part of the boundary.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<Vertex>,
}

impl Polygon {
    /// Validating constructor: at least 3 vertices, finite coordinates within
    /// the ingestion bounds.
    pub fn new(vertices: Vec<Vertex>) -> Result<Polygon, PolygonError> {
        if vertices.len() < 3 {
            return Err(PolygonError::TooFewVertices { got: vertices.len() });
        }
        if vertices.len() > limits::MAX_VERTICES {
            return Err(PolygonError::TooManyVertices {
                got: vertices.len(),
                max: limits::MAX_VERTICES,
            });
        }
        for (index, v) in vertices.iter().enumerate() {
            if !v.pos.x.is_finite() || !v.pos.y.is_finite() || !v.bulge.is_finite() {
                return Err(PolygonError::NonFinite { index });
            }
            if !limits::in_coord_bounds(v.pos.x)
                || !limits::in_coord_bounds(v.pos.y)
                || !limits::in_bulge_bounds(v.bulge)
            {
                return Err(PolygonError::OutOfBounds { index });
            }
        }
        Ok(Polygon { vertices })
    }

    /// Trusted construction; the caller guarantees the polygon preconditions.
    pub fn from_vertices_unchecked(vertices: Vec<Vertex>) -> Polygon {
        Polygon { vertices }
    }

    /// Straight-edged polygon from bare positions.
    pub fn from_points(points: &[(f64, f64)]) -> Result<Polygon, PolygonError> {
        Polygon::new(points.iter().map(|&(x, y)| Vertex::line(x, y)).collect())
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<Vertex> {
        self.vertices
    }

    pub fn points(&self) -> Vec<Vec2> {
        self.vertices.iter().map(|v| v.pos).collect()
    }

    /// Vertex at a cyclic index.
    pub fn at(&self, i: usize) -> &Vertex {
        &self.vertices[i % self.vertices.len()]
    }

    #[inline]
    pub fn next_index(&self, i: usize) -> usize {
        (i + 1) % self.vertices.len()
    }

    pub fn has_arcs(&self) -> bool {
        self.vertices.iter().any(Vertex::is_arc)
    }

    /// New polygon keeping only the vertices for which `keep(index)` holds,
    /// in original order.
    pub fn retain_indices(&self, mut keep: impl FnMut(usize) -> bool) -> Polygon {
        let vertices = self
            .vertices
            .iter()
            .enumerate()
            .filter(|(i, _)| keep(*i))
            .map(|(_, v)| *v)
            .collect();
        Polygon { vertices }
    }
}

/// Vertex of the pre-flattening polygon whose outgoing edge is an arc.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArcMarker {
    pub index: usize,
    pub pos: Vec2,
}

/// Edge `start -> end` of the pre-flattening polygon with a door-like length.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DoorCandidate {
    pub start: usize,
    pub end: usize,
    pub midpoint: Vec2,
    pub width: f64,
}
