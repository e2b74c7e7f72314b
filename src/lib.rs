#![doc = include_str!("../readme.md")]

#[cfg(feature = "mimalloc")]
use mimalloc::MiMalloc;
#[cfg_attr(feature = "mimalloc", global_allocator)]
#[cfg(feature = "mimalloc")]
static GLOBAL: MiMalloc = MiMalloc;

pub mod error;
pub mod geo;
pub mod route;
pub mod select;
pub mod util;

#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use crate::geo::{Coordinate, Cost, HaversineCost};
#[doc(inline)]
pub use route::{Bounds, Bracket, Point, Route, RouteError, RouteInsertion, SearchConfig};
#[doc(inline)]
pub use select::find_closest_routes;
