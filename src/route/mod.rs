//! Immutable, spatially indexed routes and the cheapest-insertion
//! heuristic upon them.
//!
//! ```rust
//! use vrp_insert::{Coordinate, HaversineCost, Point, Route};
//!
//! let route = Route::new(
//!     HaversineCost::default(),
//!     vec![
//!         Point::new("Home", Coordinate::new(-0.1555536, 51.4323465)).waypoint(),
//!         Point::new("Clapham Junction", Coordinate::new(-0.17027, 51.46419)).waypoint(),
//!     ],
//! );
//!
//! let stop = Point::new("Stop", Coordinate::new(-0.16573906, 51.45636018));
//! let insertion = route.insertion_points(stop).unwrap();
//! let extended = route.insert(&insertion).unwrap();
//!
//! assert_eq!(extended.len(), 3);
//! assert_eq!(extended.duration(), route.duration() + insertion.cost);
//! ```

#[doc(hidden)]
pub mod entity;
#[doc(hidden)]
pub mod error;
pub mod index;
#[doc(hidden)]
pub mod insertion;
#[doc(hidden)]
pub mod point;

#[doc(inline)]
pub use entity::{Bounds, Route};
#[doc(inline)]
pub use error::RouteError;
#[doc(inline)]
pub use index::SearchConfig;
#[doc(inline)]
pub use insertion::{Bracket, RouteInsertion};
#[doc(inline)]
pub use point::Point;
