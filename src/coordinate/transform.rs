//! Coordinate transformation functionality
//!
//! RD New conversions use the published approximation polynomials for
//! Amersfoort / RD New, accurate to roughly a meter inside the Netherlands.
//! That is well below a pixel at any resolution the exporter offers.

use std::f64::consts::PI;

use log::debug;

use super::crs::ReferenceFrame;
use super::point::Point;
use super::rect::Rectangle;
use crate::errors::{QInfraError, QInfraResult};

/// RD New false origin (Amersfoort)
const RD_X0: f64 = 155_000.0;
const RD_Y0: f64 = 463_000.0;
const RD_PHI0: f64 = 52.155_174_40;
const RD_LAM0: f64 = 5.387_206_21;

/// Latitude coefficients (p, q, K) for RD -> WGS84
const RD_TO_LAT: [(i32, i32, f64); 11] = [
    (0, 1, 3235.653_89),
    (2, 0, -32.582_97),
    (0, 2, -0.247_50),
    (2, 1, -0.849_78),
    (0, 3, -0.065_50),
    (2, 2, -0.017_09),
    (1, 0, -0.007_38),
    (4, 0, 0.005_30),
    (2, 3, -0.000_39),
    (4, 1, 0.000_33),
    (1, 1, -0.000_12),
];

/// Longitude coefficients (p, q, L) for RD -> WGS84
const RD_TO_LON: [(i32, i32, f64); 12] = [
    (1, 0, 5260.529_16),
    (1, 1, 105.946_84),
    (1, 2, 2.456_56),
    (3, 0, -0.818_85),
    (1, 3, 0.055_94),
    (3, 1, -0.056_07),
    (0, 1, 0.011_99),
    (3, 2, -0.002_56),
    (1, 4, 0.001_28),
    (0, 2, 0.000_22),
    (2, 0, -0.000_22),
    (5, 0, 0.000_26),
];

/// Easting coefficients (p, q, R) for WGS84 -> RD
const WGS84_TO_X: [(i32, i32, f64); 9] = [
    (0, 1, 190_094.945),
    (1, 1, -11_832.228),
    (2, 1, -114.221),
    (0, 3, -32.391),
    (1, 0, -0.705),
    (3, 1, -2.340),
    (1, 3, -0.608),
    (0, 2, -0.008),
    (2, 3, 0.148),
];

/// Northing coefficients (p, q, S) for WGS84 -> RD
const WGS84_TO_Y: [(i32, i32, f64); 10] = [
    (1, 0, 309_056.544),
    (0, 2, 3638.893),
    (2, 0, 73.077),
    (1, 2, -157.984),
    (3, 0, 59.788),
    (0, 1, 0.433),
    (2, 2, -6.439),
    (1, 1, -0.032),
    (0, 4, 0.092),
    (1, 4, -0.054),
];

fn polynomial(terms: &[(i32, i32, f64)], a: f64, b: f64) -> f64 {
    terms.iter().map(|&(p, q, c)| c * a.powi(p) * b.powi(q)).sum()
}

/// Transformer for converting between reference frames
pub struct CoordinateTransformer;

impl CoordinateTransformer {
    /// Earth radius in meters
    const EARTH_RADIUS: f64 = 6378137.0;

    /// Convert from RD New to WGS84 longitude/latitude
    pub fn rd_to_wgs84(&self, x: f64, y: f64) -> Point {
        let dx = (x - RD_X0) * 1e-5;
        let dy = (y - RD_Y0) * 1e-5;

        let lat = RD_PHI0 + polynomial(&RD_TO_LAT, dx, dy) / 3600.0;
        let lon = RD_LAM0 + polynomial(&RD_TO_LON, dx, dy) / 3600.0;

        Point::new(lon, lat)
    }

    /// Convert from WGS84 longitude/latitude to RD New
    pub fn wgs84_to_rd(&self, lon: f64, lat: f64) -> Point {
        let dphi = 0.36 * (lat - RD_PHI0);
        let dlam = 0.36 * (lon - RD_LAM0);

        let x = RD_X0 + polynomial(&WGS84_TO_X, dphi, dlam);
        let y = RD_Y0 + polynomial(&WGS84_TO_Y, dphi, dlam);

        Point::new(x, y)
    }

    /// Convert from WGS84 (EPSG:4326) to Web Mercator (EPSG:3857)
    pub fn wgs84_to_web_mercator(&self, lon: f64, lat: f64) -> Point {
        // Web Mercator is undefined at the poles
        let lat = lat.clamp(-85.05, 85.05);

        let x = lon * Self::EARTH_RADIUS * PI / 180.0;
        let y = f64::ln(f64::tan((90.0 + lat) * PI / 360.0)) * Self::EARTH_RADIUS;

        Point::new(x, y)
    }

    /// Convert from Web Mercator (EPSG:3857) to WGS84 (EPSG:4326)
    pub fn web_mercator_to_wgs84(&self, x: f64, y: f64) -> Point {
        let lon = x * 180.0 / (Self::EARTH_RADIUS * PI);
        let lat = 180.0 / PI * (2.0 * f64::atan(f64::exp(y / Self::EARTH_RADIUS)) - PI / 2.0);

        Point::new(lon, lat)
    }

    fn to_wgs84(&self, point: &Point, from: &ReferenceFrame) -> Option<Point> {
        match from {
            ReferenceFrame::WGS84 => Some(*point),
            ReferenceFrame::RdNew => Some(self.rd_to_wgs84(point.x, point.y)),
            ReferenceFrame::WebMercator => Some(self.web_mercator_to_wgs84(point.x, point.y)),
            ReferenceFrame::Other(_) => None,
        }
    }

    fn from_wgs84(&self, point: &Point, to: &ReferenceFrame) -> Option<Point> {
        match to {
            ReferenceFrame::WGS84 => Some(*point),
            ReferenceFrame::RdNew => Some(self.wgs84_to_rd(point.x, point.y)),
            ReferenceFrame::WebMercator => Some(self.wgs84_to_web_mercator(point.x, point.y)),
            ReferenceFrame::Other(_) => None,
        }
    }

    /// Transform a point between frames, pivoting through WGS84
    pub fn transform_point(&self, point: &Point, from_crs: &ReferenceFrame, to_crs: &ReferenceFrame) -> QInfraResult<Point> {
        if from_crs == to_crs {
            return Ok(*point);
        }

        self.to_wgs84(point, from_crs)
            .and_then(|geographic| self.from_wgs84(&geographic, to_crs))
            .ok_or_else(|| QInfraError::UnsupportedTransform {
                from: from_crs.description(),
                to: to_crs.description(),
            })
    }

    /// Transform a rectangle between frames
    ///
    /// All four corners are transformed and the envelope is returned, so the
    /// result stays axis-aligned with ordered bounds even when the frames are
    /// rotated relative to each other.
    pub fn transform_rect(&self, rect: &Rectangle, from_crs: &ReferenceFrame, to_crs: &ReferenceFrame) -> QInfraResult<Rectangle> {
        if from_crs == to_crs {
            return Ok(*rect);
        }

        let corners = rect.ring();
        let transformed = corners[..4]
            .iter()
            .map(|corner| self.transform_point(corner, from_crs, to_crs))
            .collect::<QInfraResult<Vec<Point>>>()?;

        let result = Rectangle::envelope(&transformed).ok_or_else(|| {
            QInfraError::InvalidInput("Rectangle transform produced no corners".to_string())
        })?;

        debug!("Transformed rectangle {} from {} to {}: {}",
               rect, from_crs.code(), to_crs.code(), result);

        Ok(result)
    }
}
