use super::tolerance::sqin_to_sqft;
use crate::model::{Polygon, Vec2};

/// Shoelace area over the vertex positions. Positive = counter-clockwise.
/// Arc edges are measured by their chords.
pub fn signed_area(poly: &[Vec2]) -> f64 {
    let n = poly.len();
    if n < 3 {
        return 0.0;
    }
    let mut a = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        a += poly[i].x * poly[j].y - poly[j].x * poly[i].y;
    }
    0.5 * a
}

pub fn area_sqft(poly: &[Vec2]) -> f64 {
    sqin_to_sqft(signed_area(poly).abs())
}

pub fn perimeter(poly: &[Vec2]) -> f64 {
    let n = poly.len();
    if n < 2 {
        return 0.0;
    }
    (0..n).map(|i| poly[i].dist(poly[(i + 1) % n])).sum()
}

pub fn polygon_bbox(points: &[Vec2]) -> (f64, f64, f64, f64) {
    let mut minx = f64::INFINITY;
    let mut miny = f64::INFINITY;
    let mut maxx = f64::NEG_INFINITY;
    let mut maxy = f64::NEG_INFINITY;
    for p in points {
        minx = minx.min(p.x);
        miny = miny.min(p.y);
        maxx = maxx.max(p.x);
        maxy = maxy.max(p.y);
    }
    (minx, miny, maxx, maxy)
}

/// Even-odd ray cast. Points exactly on the boundary may land either way.
pub fn point_in_polygon(pt: Vec2, poly: &[Vec2]) -> bool {
    let n = poly.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (poly[i], poly[j]);
        if (pi.y > pt.y) != (pj.y > pt.y) {
            let x_cross = (pj.x - pi.x) * (pt.y - pi.y) / (pj.y - pi.y) + pi.x;
            if pt.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

impl Polygon {
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points())
    }

    pub fn area_sqft(&self) -> f64 {
        area_sqft(&self.points())
    }

    pub fn perimeter(&self) -> f64 {
        perimeter(&self.points())
    }

    pub fn bbox(&self) -> (f64, f64, f64, f64) {
        polygon_bbox(&self.points())
    }

    pub fn contains(&self, pt: Vec2) -> bool {
        point_in_polygon(pt, &self.points())
    }
}
