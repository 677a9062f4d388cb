//! Triangle type for parsed facets.

use serde::{Deserialize, Serialize};

/// A single triangular facet: a normal vector plus three vertices.
///
/// Coordinates are stored as `[x, y, z]` in the precision the STL format
/// carries (32-bit floats). A triangle is only ever constructed from a
/// facet block that parsed without errors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// Normal vector of the facet.
    pub normal: [f32; 3],

    /// The three corner vertices, in source order.
    pub vertices: [[f32; 3]; 3],
}

impl Triangle {
    pub fn new(normal: [f32; 3], vertices: [[f32; 3]; 3]) -> Self {
        Self { normal, vertices }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_new() {
        let t = Triangle::new([0.0, 0.0, 1.0], [[0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);

        assert_eq!(t.normal, [0.0, 0.0, 1.0]);
        assert_eq!(t.vertices[1], [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_triangle_serializes_as_arrays() {
        let t = Triangle::new([0.0, 0.0, 1.0], [[0.0; 3]; 3]);
        let json = serde_json::to_value(&t).unwrap();

        assert_eq!(json["normal"][2], 1.0);
        assert_eq!(json["vertices"].as_array().unwrap().len(), 3);
    }
}
