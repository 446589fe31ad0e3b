//! JSON documents for handing polygons across the binding boundary.
//!
//! Shape: `{"version": 1, "vertices": [{"x": .., "y": .., "bulge": ..}]}`,
//! with `bulge` optional. Documents beyond the ingestion limits are refused
//! before deserializing the vertex list.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::PolygonError;
use crate::geometry::limits;
use crate::model::{Polygon, Vertex};
use crate::Cleanup;

pub const DOC_VERSION: u32 = 1;

fn doc_version() -> u32 {
    DOC_VERSION
}

#[derive(Serialize, Deserialize)]
struct VertexDoc {
    x: f64,
    y: f64,
    #[serde(default)]
    bulge: f64,
}

#[derive(Deserialize)]
struct PolygonDocIn {
    #[serde(default = "doc_version")]
    version: u32,
    vertices: Vec<VertexDoc>,
}

fn vertex_docs(poly: &Polygon) -> Vec<VertexDoc> {
    poly.vertices()
        .iter()
        .map(|v| VertexDoc { x: v.pos.x, y: v.pos.y, bulge: v.bulge })
        .collect()
}

pub fn polygon_from_json_value(v: Value) -> Result<Polygon, PolygonError> {
    let count = v
        .get("vertices")
        .and_then(Value::as_array)
        .map(Vec::len)
        .ok_or_else(|| PolygonError::Malformed("missing 'vertices' array".to_string()))?;
    if count > limits::MAX_VERTICES {
        return Err(PolygonError::TooManyVertices { got: count, max: limits::MAX_VERTICES });
    }
    let doc: PolygonDocIn =
        serde_json::from_value(v).map_err(|e| PolygonError::Malformed(e.to_string()))?;
    if doc.version != DOC_VERSION {
        return Err(PolygonError::UnsupportedVersion(doc.version));
    }
    Polygon::new(
        doc.vertices
            .into_iter()
            .map(|d| Vertex::arc(d.x, d.y, d.bulge))
            .collect(),
    )
}

pub fn polygon_from_json_str(s: &str) -> Result<Polygon, PolygonError> {
    let v: Value = serde_json::from_str(s).map_err(|e| PolygonError::Malformed(e.to_string()))?;
    polygon_from_json_value(v)
}

pub fn polygon_to_json_value(poly: &Polygon) -> Result<Value, serde_json::Error> {
    #[derive(Serialize)]
    struct Doc {
        version: u32,
        vertices: Vec<VertexDoc>,
    }
    serde_json::to_value(Doc { version: DOC_VERSION, vertices: vertex_docs(poly) })
}

/// Cleaned polygon plus the warning text (or null) and the run report.
pub fn cleanup_to_json_value(c: &Cleanup) -> Result<Value, serde_json::Error> {
    #[derive(Serialize)]
    struct Doc<'a> {
        version: u32,
        vertices: Vec<VertexDoc>,
        warning: Option<String>,
        report: &'a crate::CleanupReport,
    }
    serde_json::to_value(Doc {
        version: DOC_VERSION,
        vertices: vertex_docs(&c.polygon),
        warning: c.warning.map(|w| w.to_string()),
        report: &c.report,
    })
}
