//! POLYLINE entity and its VERTEX chain

use super::{Entity, EntityCommon};
use crate::types::{Attributes, Vector2, Vector3};

bitflags::bitflags! {
    // Polyline flags (code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PolylineFlags: i32 {
        /// Closed polyline (or polygon mesh closed in M)
        const CLOSED = 1;
        /// Curve-fit vertices added
        const CURVE_FIT = 2;
        /// Spline-fit vertices added
        const SPLINE_FIT = 4;
        /// 3D polyline
        const POLYLINE_3D = 8;
        /// 3D polygon mesh
        const POLYGON_MESH = 16;
        /// Polygon mesh closed in N
        const CLOSED_N = 32;
        /// Polyface mesh
        const POLYFACE_MESH = 64;
        /// Linetype pattern generated continuously around vertices
        const CONTINUOUS_LINETYPE = 128;
    }
}

impl Default for PolylineFlags {
    fn default() -> Self {
        PolylineFlags::empty()
    }
}

/// One VERTEX record of a polyline
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    /// Layer (always the owning polyline's layer)
    pub layer: String,
    /// Location (groups 10/20/30)
    pub location: Vector3,
    /// Free-form groups in file order
    pub attributes: Attributes,
}

impl Vertex {
    pub fn new(layer: impl Into<String>, location: Vector3) -> Self {
        Vertex {
            layer: layer.into(),
            location,
            attributes: Attributes::new(),
        }
    }

    /// Bulge of the segment starting here (group 42), 0 for straight segments
    pub fn bulge(&self) -> f64 {
        self.attributes
            .get("42")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0.0)
    }
}

/// A POLYLINE entity
///
/// Vertices belong to the polyline that introduced them with the
/// vertices-follow flag and are never shared.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    /// Common entity data
    pub common: EntityCommon,
    /// Flags (group 70), unknown bits retained
    pub flags: PolylineFlags,
    /// Vertices in file order, up to SEQEND
    pub vertices: Vec<Vertex>,
}

impl Polyline {
    pub fn new(layer: impl Into<String>) -> Self {
        Polyline {
            common: EntityCommon::with_layer(layer),
            flags: PolylineFlags::empty(),
            vertices: Vec::new(),
        }
    }

    /// Raw group 70 value
    pub fn raw_flags(&self) -> i32 {
        self.flags.bits()
    }

    pub fn is_closed(&self) -> bool {
        self.flags.contains(PolylineFlags::CLOSED)
    }

    pub fn is_3d(&self) -> bool {
        self.flags.contains(PolylineFlags::POLYLINE_3D)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Sum of the straight segment lengths, including the closing segment
    pub fn length(&self) -> f64 {
        let open: f64 = self
            .vertices
            .windows(2)
            .map(|w| w[0].location.distance(&w[1].location))
            .sum();
        match (self.is_closed(), self.vertices.first(), self.vertices.last()) {
            (true, Some(first), Some(last)) if self.vertices.len() > 2 => {
                open + last.location.distance(&first.location)
            }
            _ => open,
        }
    }
}

impl Entity for Polyline {
    fn layer(&self) -> &str {
        &self.common.layer
    }

    fn attributes(&self) -> &Attributes {
        &self.common.attributes
    }

    fn entity_type(&self) -> &'static str {
        "POLYLINE"
    }

    fn planar_points(&self) -> Vec<Vector2> {
        self.vertices.iter().map(|v| v.location.xy()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(closed: bool) -> Polyline {
        let mut pl = Polyline::new("GEM");
        if closed {
            pl.flags |= PolylineFlags::CLOSED;
        }
        for (x, y) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)] {
            pl.vertices.push(Vertex::new("GEM", Vector3::new(x, y, 0.0)));
        }
        pl
    }

    #[test]
    fn test_length_open_and_closed() {
        assert_eq!(square(false).length(), 3.0);
        assert_eq!(square(true).length(), 4.0);
    }

    #[test]
    fn test_flags_keep_unknown_bits() {
        let mut pl = Polyline::new("0");
        pl.flags = PolylineFlags::from_bits_retain(1 | 1024);
        assert!(pl.is_closed());
        assert!(!pl.is_3d());
        assert_eq!(pl.raw_flags(), 1025);
    }

    #[test]
    fn test_planar_points_in_order() {
        let pl = square(false);
        let pts = pl.planar_points();
        assert_eq!(pts.len(), 4);
        assert_eq!(pts[2], Vector2::new(1.0, 1.0));
        let bb = pl.bounding_box().unwrap();
        assert_eq!(bb.max, Vector2::new(1.0, 1.0));
    }

    #[test]
    fn test_vertex_bulge() {
        let mut v = Vertex::new("0", Vector3::ZERO);
        assert_eq!(v.bulge(), 0.0);
        v.attributes.insert("42".into(), "0.5".into());
        assert_eq!(v.bulge(), 0.5);
    }
}
