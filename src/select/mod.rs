//! Selection of the cheapest routes to insert a point into.
//!
//! Every candidate route is evaluated in parallel, each upon its own
//! rayon task. As routes are immutable and the cost function is
//! stateless, the tasks share no mutable state. Results are
//! delivered, in order of completion, through a channel with capacity
//! for every candidate, so no task ever blocks or drops a result.

use crossbeam::channel;
use log::{debug, warn};

use crate::error::Error;
use crate::geo::Cost;
use crate::route::{Point, Route, RouteError, RouteInsertion};


/// Keeps the cheapest `n` insertions, ascending by cost.
struct Selection<'r, C: Cost> {
    limit: usize,
    entries: Vec<RouteInsertion<'r, C>>,
}

impl<'r, C: Cost> Selection<'r, C> {
    fn new(limit: usize) -> Self {
        Selection {
            limit,
            entries: Vec::with_capacity(limit + 1),
        }
    }

    /// Inserts in cost order, after any entries of equal cost,
    /// then truncates back to the limit.
    fn offer(&mut self, insertion: RouteInsertion<'r, C>) {
        let at = self
            .entries
            .partition_point(|entry| entry.cost <= insertion.cost);

        self.entries.insert(at, insertion);
        self.entries.truncate(self.limit);
    }
}

/// Locates the cheapest routes in which to insert the given point.
///
/// Returns the `n` cheapest insertions across all candidates (or every
/// candidate, if there are fewer than `n`), ascending by cost. The
/// selected set does not depend on the order in which evaluations
/// complete, though which of two exactly equal costs is kept may.
///
/// Every evaluation runs to completion. If any of them fails, the
/// whole call fails with [`Error::BatchEvaluationFailure`], naming the
/// candidate's index.
///
/// ```rust
/// use vrp_insert::{find_closest_routes, Coordinate, HaversineCost, Point, Route};
///
/// let route = |lng: f64| {
///     Route::new(
///         HaversineCost::default(),
///         vec![
///             Point::new("a", Coordinate::new(lng, 51.40)),
///             Point::new("b", Coordinate::new(lng, 51.60)),
///         ],
///     )
/// };
///
/// let routes = vec![route(-0.5), route(-0.1), route(0.3)];
/// let stop = Point::new("stop", Coordinate::new(-0.09, 51.5));
///
/// let closest = find_closest_routes(&stop, &routes, 1).unwrap();
/// assert_eq!(closest.len(), 1);
/// assert_eq!(closest[0].route, &routes[1]);
/// ```
#[cfg_attr(feature = "tracing", tracing::instrument(level = "info", skip(candidates)))]
pub fn find_closest_routes<'r, C: Cost>(
    point: &Point,
    candidates: &'r [Route<C>],
    n: usize,
) -> crate::Result<Vec<RouteInsertion<'r, C>>> {
    let (sender, receiver) =
        channel::bounded::<(usize, Result<RouteInsertion<'r, C>, RouteError>)>(candidates.len());

    rayon::scope(|scope| {
        for (index, route) in candidates.iter().enumerate() {
            let sender = sender.clone();
            let point = point.clone();

            scope.spawn(move |_| {
                // The receiver outlives the scope, and has capacity for
                // every candidate, so sending cannot fail or block.
                let _ = sender.send((index, route.insertion_points(point)));
            });
        }
    });
    drop(sender);

    let mut selection = Selection::new(n.min(candidates.len()));
    let mut failure: Option<(usize, RouteError)> = None;
    let mut received = 0usize;

    for (index, result) in receiver.iter() {
        received += 1;

        match result {
            Ok(insertion) => selection.offer(insertion),
            Err(source) => {
                warn!("Evaluation of candidate route {} failed: {}", index, source);
                failure.get_or_insert((index, source));
            }
        }
    }

    debug!(
        "Collected {} of {} evaluations, retaining {}",
        received,
        candidates.len(),
        selection.entries.len()
    );

    match failure {
        Some((index, source)) => Err(Error::BatchEvaluationFailure { index, source }),
        None => Ok(selection.entries),
    }
}
