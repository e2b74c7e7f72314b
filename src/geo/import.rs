//! Imports route geometry into ordered [`Point`] lists.
//!
//! ```rust
//! use vrp_insert::geo::points_from_wkt;
//!
//! let points = points_from_wkt("LINESTRING (-0.3037 51.4613, -0.257 51.492)").unwrap();
//! assert_eq!(points.len(), 2);
//! assert_eq!(points[1].key, "1");
//! ```

use geo::LineString;
use log::debug;
use wkt::TryFromWkt;

use crate::geo::error::GeoError;
use crate::route::Point;

/// Parses a WKT `LINESTRING` into route points, one per vertex,
/// keyed by the vertex index. None of the points are waypoints.
pub fn points_from_wkt(source: &str) -> crate::Result<Vec<Point>> {
    let linestring: LineString<f64> = LineString::try_from_wkt_str(source)
        .map_err(|err| GeoError::InvalidWkt(err.to_string()))?;

    let points = linestring
        .into_points()
        .into_iter()
        .enumerate()
        .map(|(index, position)| Point::new(index.to_string(), position))
        .collect::<Vec<_>>();

    debug!("Imported {} points from linestring", points.len());
    Ok(points)
}
