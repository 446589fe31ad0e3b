use crate::model::Polygon;

/// Replace every arc edge by its chord. Positions are untouched; only the
/// curve flag is cleared, so indices stay valid across this stage.
pub fn flatten_arcs(poly: &Polygon) -> Polygon {
    if !poly.has_arcs() {
        return poly.clone();
    }
    Polygon::from_vertices_unchecked(poly.vertices().iter().map(|v| v.straightened()).collect())
}
