//! Spatial index over the points of a route, backing the
//! k-nearest-neighbour search.

use itertools::Itertools;
use log::trace;
use rstar::{RTree, RTreeObject, AABB};
use rustc_hash::FxHashSet;

use crate::geo::{Coordinate, Cost};
use crate::route::error::RouteError;

const MIN_GROWTH: f64 = 2.0;

/// Tunes the growing-box nearest neighbour search.
///
/// The first query is made with a zero-radius box around the
/// origin. Each following query widens the box, first to
/// `initial_radius` and then by a factor of `growth`. Radii are
/// expressed in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    pub initial_radius: f64,
    pub growth: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            initial_radius: 1e-3,
            growth: 500.0,
        }
    }
}

impl SearchConfig {
    pub fn new(initial_radius: f64, growth: f64) -> Self {
        SearchConfig {
            initial_radius,
            growth,
        }
    }

    /// The radius of the query following one made at `radius`.
    /// Always strictly larger than the input, so the search terminates.
    #[inline]
    fn next_radius(&self, radius: f64) -> f64 {
        if radius <= 0.0 {
            self.initial_radius.max(f64::EPSILON)
        } else {
            radius * self.growth.max(MIN_GROWTH)
        }
    }
}

/// A coordinate, tagged with the sequence index of the point it belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedPoint {
    pub index: usize,
    pub position: Coordinate,
}

impl RTreeObject for IndexedPoint {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.position.x(), self.position.y()])
    }
}

/// Builds a square envelope of the given radius around `center`.
#[inline]
pub fn envelope_around(center: &Coordinate, radius: f64) -> AABB<[f64; 2]> {
    AABB::from_corners(
        [center.x() - radius, center.y() - radius],
        [center.x() + radius, center.y() + radius],
    )
}

/// Immutable once built; safe to query from many threads at once.
pub struct SpatialIndex {
    tree: RTree<IndexedPoint>,
    config: SearchConfig,
}

impl SpatialIndex {
    /// Bulk-loads the index, tagging each coordinate with its position
    /// in the iteration.
    pub fn new<'a>(coordinates: impl IntoIterator<Item = &'a Coordinate>, config: SearchConfig) -> Self {
        let entries = coordinates
            .into_iter()
            .enumerate()
            .map(|(index, position)| IndexedPoint {
                index,
                position: *position,
            })
            .collect::<Vec<_>>();

        SpatialIndex {
            tree: RTree::bulk_load(entries),
            config,
        }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn size(&self) -> usize {
        self.tree.size()
    }

    /// Returns every indexed point within the envelope, unsorted.
    #[inline]
    pub fn query<'a>(&'a self, envelope: &AABB<[f64; 2]>) -> impl Iterator<Item = &'a IndexedPoint> {
        self.tree.locate_in_envelope(envelope)
    }

    /// Returns the sequence indices of the `k` points nearest `origin`,
    /// ascending by `cost` from the origin. `k` is clamped to the size
    /// of the index.
    ///
    /// ### Note
    /// Queries are square-scans, which do not follow the cost
    /// function exactly: a point in the corner of a box may be
    /// more costly than one just outside of it. Therefore, once `k`
    /// candidates are found, the box is widened once more and
    /// every candidate gathered is ranked by cost.
    ///
    /// Fails with [`RouteError::NonFiniteCoordinate`] if the origin is
    /// NaN or infinite, as no box could ever contain it.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self, cost)))]
    pub fn k_nearest<C>(&self, cost: &C, origin: &Coordinate, k: usize) -> Result<Vec<usize>, RouteError>
    where
        C: Cost + ?Sized,
    {
        let total = self.size();
        if total == 0 {
            return Err(RouteError::EmptyRoute);
        }

        if !(origin.x().is_finite() && origin.y().is_finite()) {
            return Err(RouteError::NonFiniteCoordinate(format!("{:?}", origin)));
        }

        let k = k.min(total);
        if k == 0 {
            return Ok(vec![]);
        }

        let mut seen = FxHashSet::default();
        let mut candidates: Vec<IndexedPoint> = Vec::with_capacity(k);

        let mut radius = 0.0;
        let mut widened = false;

        loop {
            let before = candidates.len();
            for entry in self.query(&envelope_around(origin, radius)) {
                if seen.insert(entry.index) {
                    candidates.push(*entry);
                }
            }

            trace!(
                "Radius {} gathered {} new candidates ({} of {})",
                radius,
                candidates.len() - before,
                candidates.len(),
                k
            );

            if widened || candidates.len() == total || !radius.is_finite() {
                break;
            }

            widened = candidates.len() >= k;
            radius = self.config.next_radius(radius);
        }

        Ok(candidates
            .into_iter()
            .sorted_by_cached_key(|candidate| cost.cost(origin, &candidate.position))
            .take(k)
            .map(|candidate| candidate.index)
            .collect())
    }
}
