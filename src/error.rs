use thiserror::Error;

use crate::geo::GeoError;
use crate::route::RouteError;

/// The crate-level error, joining the errors of each module.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Route(RouteError),

    #[error(transparent)]
    Geo(GeoError),

    /// A candidate route could not be evaluated during selection,
    /// so no (partial) result set is returned.
    #[error("evaluation of candidate route {index} failed: {source}")]
    BatchEvaluationFailure {
        index: usize,
        #[source]
        source: RouteError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

crate::impl_err!(RouteError, Route);
crate::impl_err!(GeoError, Geo);
