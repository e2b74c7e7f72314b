//! The cheapest-insertion heuristic, and its copy-on-write application.

use std::fmt::{Debug, Display, Formatter};

use chrono::TimeDelta;
use log::{debug, trace};

use crate::geo::Cost;
use crate::route::entity::Route;
use crate::route::error::RouteError;
use crate::route::point::Point;

/// The adjacent pair of existing points between which a new
/// point is inserted.
#[derive(Debug, Clone, PartialEq)]
pub enum Bracket {
    /// Before the first point of the route.
    Head { successor: Point },
    /// Between two consecutive points of the route.
    Between { predecessor: Point, successor: Point },
    /// After the last point of the route.
    Tail { predecessor: Point },
}

impl Bracket {
    pub fn predecessor(&self) -> Option<&Point> {
        match self {
            Bracket::Head { .. } => None,
            Bracket::Between { predecessor, .. } | Bracket::Tail { predecessor } => Some(predecessor),
        }
    }

    pub fn successor(&self) -> Option<&Point> {
        match self {
            Bracket::Tail { .. } => None,
            Bracket::Head { successor } | Bracket::Between { successor, .. } => Some(successor),
        }
    }
}

impl Display for Bracket {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let key = |point: Option<&Point>| point.map_or("<none>".to_string(), |p| format!("{:?}", p.key));
        write!(f, "[{} {}]", key(self.predecessor()), key(self.successor()))
    }
}

/// Where, and at what predicted cost, a point would be inserted into
/// a specific route.
///
/// The `cost` is the marginal change in the route's duration,
/// including the dwell of the point itself. It is only meaningful
/// against the `route` which produced it.
pub struct RouteInsertion<'r, C: Cost> {
    pub route: &'r Route<C>,
    pub point: Point,
    pub cost: TimeDelta,
    pub bracket: Bracket,
}

impl<C: Cost> Clone for RouteInsertion<'_, C> {
    fn clone(&self) -> Self {
        RouteInsertion {
            route: self.route,
            point: self.point.clone(),
            cost: self.cost,
            bracket: self.bracket.clone(),
        }
    }
}

impl<C: Cost> Debug for RouteInsertion<'_, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteInsertion")
            .field("route", self.route)
            .field("point", &self.point)
            .field("cost", &self.cost)
            .field("bracket", &self.bracket)
            .finish()
    }
}

/// A candidate position for the new point, in terms of sequence indices.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Anchor {
    Head,
    Between(usize),
    Tail,
}

impl<C: Cost> Route<C> {
    /// The marginal cost of splicing `point` between the points at
    /// `left` and `right`.
    #[inline]
    fn leg_cost(&self, left: usize, point: &Point, right: usize) -> TimeDelta {
        let (l, r) = (&self.points[left].coordinate, &self.points[right].coordinate);
        self.cost.cost(l, &point.coordinate) + self.cost.cost(&point.coordinate, r) - self.cost.cost(l, r)
    }

    /// Returns where the given point should be inserted, at lowest cost.
    ///
    /// Candidates are evaluated in a fixed order: before the head, the
    /// leg preceding the nearest existing point, the leg following it,
    /// and after the tail. A candidate only replaces the best so far on
    /// a strict improvement, so earlier candidates win ties.
    ///
    /// Only the legs touching the nearest point are considered, not
    /// every leg of the route.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub fn insertion_points(&self, point: Point) -> Result<RouteInsertion<'_, C>, RouteError> {
        let last = match self.points.len() {
            0 => return Err(RouteError::EmptyRoute),
            n => n - 1,
        };

        if !(point.coordinate.x().is_finite() && point.coordinate.y().is_finite()) {
            return Err(RouteError::NonFiniteCoordinate(format!("{:?}", point.coordinate)));
        }

        let head = self.cost.cost(&point.coordinate, &self.points[0].coordinate);
        let mut best = (Anchor::Head, head);
        let mut consider = |anchor: Anchor, cost: TimeDelta| {
            trace!("Candidate {:?} costs {}ms", anchor, cost.num_milliseconds());
            if cost < best.1 {
                best = (anchor, cost);
            }
        };

        if last > 0 {
            let nearest = self
                .index
                .k_nearest(self.cost.as_ref(), &point.coordinate, 1)?
                .first()
                .copied()
                .ok_or(RouteError::EmptyRoute)?;

            if nearest > 0 {
                consider(Anchor::Between(nearest - 1), self.leg_cost(nearest - 1, &point, nearest));
            }

            if nearest < last {
                consider(Anchor::Between(nearest), self.leg_cost(nearest, &point, nearest + 1));
            }
        }

        consider(Anchor::Tail, self.cost.cost(&self.points[last].coordinate, &point.coordinate));

        let (anchor, cost) = best;
        let bracket = match anchor {
            Anchor::Head => Bracket::Head {
                successor: self.points[0].clone(),
            },
            Anchor::Between(left) => Bracket::Between {
                predecessor: self.points[left].clone(),
                successor: self.points[left + 1].clone(),
            },
            Anchor::Tail => Bracket::Tail {
                predecessor: self.points[last].clone(),
            },
        };

        let cost = cost + point.dwell();
        debug!("Cheapest insertion of {:?} is {} at {}ms", point.key, bracket, cost.num_milliseconds());

        Ok(RouteInsertion {
            route: self,
            point,
            cost,
            bracket,
        })
    }

    /// Applies an insertion, returning a new route which includes the
    /// inserted point. The existing route is untouched.
    ///
    /// The bracket must name adjacent points of this route, otherwise
    /// [`RouteError::UnresolvedInsertionBracket`] is returned. The new
    /// route is built from scratch, so its bounds and index cover the
    /// inserted point.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all))]
    pub fn insert(&self, insertion: &RouteInsertion<'_, C>) -> Result<Route<C>, RouteError> {
        let unresolved = || RouteError::UnresolvedInsertionBracket(insertion.bracket.to_string());

        let position = match &insertion.bracket {
            Bracket::Head { successor } => match self.points.first() {
                Some(first) if first == successor => 0,
                _ => return Err(unresolved()),
            },
            Bracket::Tail { predecessor } => match self.points.last() {
                Some(last) if last == predecessor => self.points.len(),
                _ => return Err(unresolved()),
            },
            Bracket::Between {
                predecessor,
                successor,
            } => self
                .points
                .windows(2)
                .position(|leg| &leg[0] == predecessor && &leg[1] == successor)
                .map(|left| left + 1)
                .ok_or_else(unresolved)?,
        };

        let mut points = Vec::with_capacity(self.points.len() + 1);
        points.extend_from_slice(&self.points[..position]);
        points.push(insertion.point.clone());
        points.extend_from_slice(&self.points[position..]);

        Ok(Route::with_config(self.cost.clone(), self.index.config(), points))
    }
}
