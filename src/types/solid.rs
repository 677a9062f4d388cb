//! Solid type - the parsed result of one STL document.

use serde::{Deserialize, Serialize};

use super::Triangle;

/// A parsed solid: the declared name and its triangles.
///
/// The name comes from the `solid <name>` header line and may be empty.
/// Triangles appear in the order their facet blocks appear in the input,
/// and only facets that parsed cleanly are included. Whether the document
/// as a whole parsed successfully is tracked separately on the parse
/// report, not here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Solid {
    /// Name declared on the header line (may be empty).
    pub name: String,

    /// Cleanly parsed facets, in source order.
    pub triangles: Vec<Triangle>,
}

impl Solid {
    /// Create an empty solid with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            triangles: Vec::new(),
        }
    }

    /// Number of cleanly parsed triangles.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_new() {
        let solid = Solid::new("part");

        assert_eq!(solid.name, "part");
        assert_eq!(solid.triangle_count(), 0);
    }

    #[test]
    fn test_solid_count_tracks_triangles() {
        let mut solid = Solid::new("part");
        solid
            .triangles
            .push(Triangle::new([0.0; 3], [[0.0; 3]; 3]));

        assert_eq!(solid.triangle_count(), 1);
    }
}
