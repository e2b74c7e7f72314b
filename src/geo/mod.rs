//! Geographic primitives: coordinates, travel costing and
//! the import of route geometry.

/// Assumed vehicle speed of the reference cost function.
pub const DEFAULT_SPEED_KPH: f64 = 15.0;

#[doc(hidden)]
pub mod coord;
#[doc(hidden)]
pub mod cost;
#[doc(hidden)]
pub mod error;
pub mod import;

#[doc(inline)]
pub use coord::{coordinate, Coordinate};
#[doc(inline)]
pub use cost::{Cost, HaversineCost};
#[doc(inline)]
pub use error::GeoError;
#[doc(inline)]
pub use import::points_from_wkt;
