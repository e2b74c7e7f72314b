use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use chrono::TimeDelta;
use log::debug;

use crate::geo::{Coordinate, Cost};
use crate::route::error::RouteError;
use crate::route::index::{SearchConfig, SpatialIndex};
use crate::route::point::Point;

/// The bounding corners of a route, (northwest, southeast).
///
/// These are geographic corners: `north_west` is (min lng, max lat) and
/// `south_east` is (max lng, min lat). They are not the component-wise
/// (min, min) and (max, max) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub north_west: Coordinate,
    pub south_east: Coordinate,
}

impl Bounds {
    /// Computes the bounds of every coordinate given, or `None`
    /// if there are none.
    pub fn of<'a>(coordinates: impl IntoIterator<Item = &'a Coordinate>) -> Option<Bounds> {
        coordinates
            .into_iter()
            .fold(None, |bounds: Option<Bounds>, c| match bounds {
                None => Some(Bounds {
                    north_west: *c,
                    south_east: *c,
                }),
                Some(Bounds {
                    north_west,
                    south_east,
                }) => Some(Bounds {
                    north_west: Coordinate::new(north_west.x().min(c.x()), north_west.y().max(c.y())),
                    south_east: Coordinate::new(south_east.x().max(c.x()), south_east.y().min(c.y())),
                }),
            })
    }
}

/// An immutable route between a collection of waypoints.
///
/// The route owns its points in visiting order, alongside a spatial
/// index over them, all built once by [`Route::new`]. Insertion never
/// alters a route, it produces a new one (see [`Route::insert`]), so a
/// route may be shared freely across threads.
pub struct Route<C: Cost> {
    pub(crate) cost: Arc<C>,
    pub(crate) points: Vec<Point>,
    pub(crate) index: SpatialIndex,
    bounds: Option<Bounds>,
    duration: TimeDelta,
}

impl<C: Cost> Debug for Route<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Route with Points: {} (Duration: {}ms)",
            self.points.len(),
            self.duration.num_milliseconds()
        )
    }
}

impl<C: Cost> PartialEq for Route<C> {
    /// Routes are equal when they visit equal points in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
    }
}

impl<C: Cost> Route<C> {
    /// Creates a route from the points given, in visiting order,
    /// using the default [`SearchConfig`].
    pub fn new(cost: C, points: Vec<Point>) -> Route<C> {
        Route::with_config(Arc::new(cost), SearchConfig::default(), points)
    }

    /// Creates a route sharing an existing cost function, and
    /// searching its points using the given configuration.
    pub fn with_config(cost: Arc<C>, config: SearchConfig, points: Vec<Point>) -> Route<C> {
        let bounds = Bounds::of(points.iter().map(|point| &point.coordinate));
        let index = SpatialIndex::new(points.iter().map(|point| &point.coordinate), config);

        let dwell = points.iter().map(Point::dwell).sum::<TimeDelta>();
        let travel = points
            .windows(2)
            .map(|leg| cost.cost(&leg[0].coordinate, &leg[1].coordinate))
            .sum::<TimeDelta>();

        debug!(
            "Built route of {} points, indexed {} (Duration: {}ms)",
            points.len(),
            index.size(),
            (dwell + travel).num_milliseconds()
        );

        Route {
            cost,
            points,
            index,
            bounds,
            duration: dwell + travel,
        }
    }

    /// The bounding box of the points the route was built with,
    /// or `None` for an empty route.
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// All points of the route, waypoints and route points, in order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The waypoints of the route, in order.
    pub fn waypoints(&self) -> Vec<&Point> {
        self.points.iter().filter(|point| point.is_waypoint).collect()
    }

    /// The route points between waypoints, in order.
    pub fn route_points(&self) -> Vec<&Point> {
        self.points.iter().filter(|point| !point.is_waypoint).collect()
    }

    /// The total duration of the route: the dwell at every point, and
    /// the cost of travelling between each consecutive pair.
    pub fn duration(&self) -> TimeDelta {
        self.duration
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The cost function the route is measured with.
    pub fn coster(&self) -> &C {
        &self.cost
    }

    /// Returns the `k` nearest points to a given coordinate, nearest first.
    /// If the route has fewer than `k` points, all of them are returned.
    pub fn k_nearest(&self, coordinate: &Coordinate, k: usize) -> Result<Vec<&Point>, RouteError> {
        let indices = self.index.k_nearest(self.cost.as_ref(), coordinate, k)?;
        Ok(indices.into_iter().map(|index| &self.points[index]).collect())
    }
}
