use crate::geo::error::GeoError;

pub type Degree = f64;

/// A location, stored as `x` (longitude) and `y` (latitude).
///
/// There is no reserved "absent" coordinate; a point at the
/// origin is as valid as any other. Absence is always
/// expressed through `Option` by the callers.
pub type Coordinate = geo::Point<Degree>;

/// Constructs a [`Coordinate`] from a `lng`, `lat` pair in
/// degrees, rejecting values beyond the valid ranges.
///
/// ```rust
/// use vrp_insert::geo::coordinate;
///
/// let soho = coordinate(-0.1321499, 51.5153077).unwrap();
/// assert_eq!(soho.y(), 51.5153077);
/// assert!(coordinate(-0.13, 91.0).is_err());
/// ```
pub fn coordinate(lng: Degree, lat: Degree) -> Result<Coordinate, GeoError> {
    if !(-90f64..=90f64).contains(&lat) {
        return Err(GeoError::InvalidCoordinate(format!(
            "Latitude must be between -90 and 90. Given: {}",
            lat
        )));
    }

    if !(-180f64..=180f64).contains(&lng) {
        return Err(GeoError::InvalidCoordinate(format!(
            "Longitude must be between -180 and 180. Given: {}",
            lng
        )));
    }

    Ok(Coordinate::new(lng, lat))
}
