//! Boundary path lengths on a closed polygon.
//!
//! Prefix sums over edge lengths turn any forward walk `i -> j` into an O(1)
//! lookup, which keeps the all-pairs spike scan quadratic rather than cubic.

use crate::model::Vec2;

/// Cumulative edge lengths of a closed polygon.
#[derive(Debug, Clone)]
pub struct BoundaryLengths {
    /// `prefix[k]` is the walked length from vertex 0 to vertex k;
    /// `prefix[n]` closes the loop and equals the perimeter.
    prefix: Vec<f64>,
}

impl BoundaryLengths {
    pub fn new(points: &[Vec2]) -> Self {
        let n = points.len();
        let mut prefix = Vec::with_capacity(n + 1);
        prefix.push(0.0);
        let mut total = 0.0;
        for i in 0..n {
            total += points[i].dist(points[(i + 1) % n]);
            prefix.push(total);
        }
        BoundaryLengths { prefix }
    }

    pub fn vertex_count(&self) -> usize {
        self.prefix.len() - 1
    }

    pub fn perimeter(&self) -> f64 {
        self.prefix[self.vertex_count()]
    }

    /// Length walked forward from vertex `i` to vertex `j`, wrapping past the
    /// last vertex when `j < i`. Zero when `i == j`.
    pub fn forward(&self, i: usize, j: usize) -> f64 {
        if j >= i {
            self.prefix[j] - self.prefix[i]
        } else {
            self.perimeter() - (self.prefix[i] - self.prefix[j])
        }
    }
}

/// Number of vertices strictly between `i` and `j` walking forward.
#[inline]
pub fn forward_interior(n: usize, i: usize, j: usize) -> usize {
    ((j + n - i) % n).saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 5.0),
            Vec2::new(0.0, 5.0),
        ]
    }

    #[test]
    fn test_perimeter() {
        let lens = BoundaryLengths::new(&rect());
        assert_eq!(lens.vertex_count(), 4);
        assert!((lens.perimeter() - 30.0).abs() < 1e-12);
        assert!((lens.forward(0, 1) - 10.0).abs() < 1e-12);
        assert!((lens.forward(3, 0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_forward_wraps() {
        let lens = BoundaryLengths::new(&rect());
        assert!((lens.forward(0, 2) - 15.0).abs() < 1e-12);
        assert!((lens.forward(2, 0) - 15.0).abs() < 1e-12);
        assert!((lens.forward(3, 1) - 15.0).abs() < 1e-12);
        assert_eq!(lens.forward(1, 1), 0.0);
        // The two walks between a pair always add up to the perimeter.
        assert!((lens.forward(1, 3) + lens.forward(3, 1) - lens.perimeter()).abs() < 1e-12);
    }

    #[test]
    fn test_forward_interior() {
        assert_eq!(forward_interior(6, 1, 2), 0);
        assert_eq!(forward_interior(6, 1, 4), 2);
        assert_eq!(forward_interior(6, 4, 1), 2);
        assert_eq!(forward_interior(6, 5, 0), 0);
    }
}
