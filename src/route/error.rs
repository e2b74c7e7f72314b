use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    /// The operation requires at least one point in the route.
    #[error("route contains no points")]
    EmptyRoute,

    /// A search was made from a coordinate which is not finite.
    #[error("cannot search from a non-finite coordinate: {0}")]
    NonFiniteCoordinate(String),

    /// The bracket of an insertion does not name adjacent points
    /// of the route it was applied to.
    #[error("insertion bracket could not be resolved against the route: {0}")]
    UnresolvedInsertionBracket(String),
}
