use chrono::TimeDelta;
use geo::{Distance, Haversine};

use crate::geo::coord::Coordinate;
use crate::geo::DEFAULT_SPEED_KPH;

/// A travel cost between two coordinates, expressed as a duration.
///
/// Implementations must be pure and deterministic, with
/// `cost(a, a) == 0`. They need not be a strict metric, although
/// the insertion heuristic assumes near-metric behaviour.
///
/// Any `Fn(&Coordinate, &Coordinate) -> TimeDelta` is a cost.
///
/// ```rust
/// use chrono::TimeDelta;
/// use vrp_insert::{Coordinate, Cost};
///
/// let unit = |a: &Coordinate, b: &Coordinate| {
///     TimeDelta::seconds(((a.x() - b.x()).abs() + (a.y() - b.y()).abs()) as i64)
/// };
///
/// let cost = unit.cost(&Coordinate::new(0.0, 0.0), &Coordinate::new(3.0, 4.0));
/// assert_eq!(cost, TimeDelta::seconds(7));
/// ```
pub trait Cost: Send + Sync {
    fn cost(&self, from: &Coordinate, to: &Coordinate) -> TimeDelta;
}

impl<F> Cost for F
where
    F: Fn(&Coordinate, &Coordinate) -> TimeDelta + Send + Sync,
{
    #[inline]
    fn cost(&self, from: &Coordinate, to: &Coordinate) -> TimeDelta {
        self(from, to)
    }
}

/// Costs the great-circle surface distance between two coordinates
/// as travel time at a fixed vehicle speed, truncated to whole
/// milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HaversineCost {
    pub speed_kph: f64,
}

impl HaversineCost {
    pub fn new(speed_kph: f64) -> Self {
        HaversineCost { speed_kph }
    }

    /// Meters travelled per millisecond.
    #[inline]
    fn meters_per_milli(&self) -> f64 {
        self.speed_kph * 1000.0 / (60.0 * 60.0 * 1000.0)
    }
}

impl Default for HaversineCost {
    fn default() -> Self {
        HaversineCost::new(DEFAULT_SPEED_KPH)
    }
}

impl Cost for HaversineCost {
    #[inline]
    fn cost(&self, from: &Coordinate, to: &Coordinate) -> TimeDelta {
        let meters = Haversine.distance(*from, *to);
        TimeDelta::milliseconds((meters / self.meters_per_milli()) as i64)
    }
}
