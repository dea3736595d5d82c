//! Projection of drawing coordinates to geographic positions
//!
//! The reader returns raw planar coordinates. A [`CoordinateTransform`]
//! turns them into latitude/longitude for display on a map.

pub mod ch1903;

pub use ch1903::Ch1903;

use crate::entities::{Entity, EntityType, Polyline};
use crate::types::Vector2;
use std::fmt;

/// WGS84 position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        LatLng { lat, lng }
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}

/// Planar-to-geographic coordinate conversion
pub trait CoordinateTransform {
    /// Latitude of the planar point `(x, y)`
    fn latitude(&self, x: f64, y: f64) -> f64;

    /// Longitude of the planar point `(x, y)`
    fn longitude(&self, x: f64, y: f64) -> f64;

    fn to_lat_lng(&self, point: Vector2) -> LatLng {
        LatLng::new(
            self.latitude(point.x, point.y),
            self.longitude(point.x, point.y),
        )
    }
}

/// Project the vertices of a polyline, in order
pub fn project_polyline<T>(polyline: &Polyline, transform: &T) -> Vec<LatLng>
where
    T: CoordinateTransform + ?Sized,
{
    project_points(&polyline.planar_points(), transform)
}

/// Project every coordinate of any entity
pub fn project_entity<T>(entity: &EntityType, transform: &T) -> Vec<LatLng>
where
    T: CoordinateTransform + ?Sized,
{
    project_points(&entity.as_entity().planar_points(), transform)
}

fn project_points<T>(points: &[Vector2], transform: &T) -> Vec<LatLng>
where
    T: CoordinateTransform + ?Sized,
{
    points.iter().map(|p| transform.to_lat_lng(*p)).collect()
}
