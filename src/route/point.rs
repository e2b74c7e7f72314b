use chrono::{DateTime, TimeDelta, Utc};

use crate::geo::Coordinate;

/// A place and a time. That is, a point along a route along
/// with information of when it is visited.
///
/// A point is either a waypoint, a mandatory stop along the route,
/// or a route point describing the shape of the route between waypoints.
///
/// The `key` is opaque to the route, and compared along with every
/// other field for equality.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub coordinate: Coordinate,
    pub arrival: DateTime<Utc>,
    pub departure: DateTime<Utc>,
    pub is_waypoint: bool,
    pub key: String,
}

impl Default for Point {
    fn default() -> Self {
        Point {
            coordinate: Coordinate::new(0.0, 0.0),
            arrival: DateTime::<Utc>::UNIX_EPOCH,
            departure: DateTime::<Utc>::UNIX_EPOCH,
            is_waypoint: false,
            key: String::new(),
        }
    }
}

impl Point {
    /// Constructs a route point at the given coordinate, with no
    /// dwell time.
    pub fn new(key: impl Into<String>, coordinate: Coordinate) -> Self {
        Point {
            coordinate,
            key: key.into(),
            ..Point::default()
        }
    }

    /// Marks the point as a waypoint.
    pub fn waypoint(mut self) -> Self {
        self.is_waypoint = true;
        self
    }

    /// Sets the visit window of the point.
    pub fn visited(mut self, arrival: DateTime<Utc>, departure: DateTime<Utc>) -> Self {
        self.arrival = arrival;
        self.departure = departure;
        self
    }

    /// The time spent at the point before departing.
    #[inline]
    pub fn dwell(&self) -> TimeDelta {
        self.departure - self.arrival
    }
}
