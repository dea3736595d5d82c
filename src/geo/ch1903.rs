//! Swiss CH1903 (LV03) grid coordinates
//!
//! Uses the approximate swisstopo polynomials, accurate to about one metre
//! inside Switzerland. Coordinates are military: `x` is the east value
//! (origin 600000 at Bern), `y` the north value (origin 200000).

use super::CoordinateTransform;
use crate::types::Vector2;

const ORIGIN_EAST: f64 = 600_000.0;
const ORIGIN_NORTH: f64 = 200_000.0;

/// Bern observatory in sexagesimal seconds
const BERN_LAT_SECONDS: f64 = 169_028.66;
const BERN_LNG_SECONDS: f64 = 26_782.5;

/// CH1903 to WGS84 transform
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ch1903;

impl Ch1903 {
    pub fn new() -> Self {
        Ch1903
    }

    /// Auxiliary values relative to Bern, unit 1000 km
    fn aux(x: f64, y: f64) -> (f64, f64) {
        ((x - ORIGIN_EAST) / 1_000_000.0, (y - ORIGIN_NORTH) / 1_000_000.0)
    }

    /// WGS84 degrees to CH1903 military coordinates
    pub fn from_wgs84(lat: f64, lng: f64) -> Vector2 {
        let lat_aux = (lat * 3600.0 - BERN_LAT_SECONDS) / 10_000.0;
        let lng_aux = (lng * 3600.0 - BERN_LNG_SECONDS) / 10_000.0;

        let x = 600_072.37 + 211_455.93 * lng_aux
            - 10_938.51 * lng_aux * lat_aux
            - 0.36 * lng_aux * lat_aux.powi(2)
            - 44.54 * lng_aux.powi(3);

        let y = 200_147.07 + 308_807.95 * lat_aux
            + 3_745.25 * lng_aux.powi(2)
            + 76.63 * lat_aux.powi(2)
            - 194.56 * lng_aux.powi(2) * lat_aux
            + 119.79 * lat_aux.powi(3);

        Vector2::new(x, y)
    }
}

impl CoordinateTransform for Ch1903 {
    fn latitude(&self, x: f64, y: f64) -> f64 {
        let (x_aux, y_aux) = Self::aux(x, y);
        let lat = 16.902_389_2 + 3.238_272 * y_aux
            - 0.270_978 * x_aux.powi(2)
            - 0.002_528 * y_aux.powi(2)
            - 0.044_7 * x_aux.powi(2) * y_aux
            - 0.014_0 * y_aux.powi(3);
        // 10000" units to degrees
        lat * 100.0 / 36.0
    }

    fn longitude(&self, x: f64, y: f64) -> f64 {
        let (x_aux, y_aux) = Self::aux(x, y);
        let lng = 2.677_909_4 + 4.728_982 * x_aux
            + 0.791_484 * x_aux * y_aux
            + 0.130_6 * x_aux * y_aux.powi(2)
            - 0.043_6 * x_aux.powi(3);
        lng * 100.0 / 36.0
    }
}
