/// Converts errors from their error type (of the submodule) to that of
/// a `vrp_insert::Error` variant.
///
/// ```rust,ignore
/// use vrp_insert::route::RouteError;
/// vrp_insert::impl_err!(RouteError, Route);
/// ```
#[macro_export]
macro_rules! impl_err {
    ($from:ty, $variant:ident) => {
        impl From<$from> for $crate::Error {
            fn from(value: $from) -> Self {
                $crate::Error::$variant(value)
            }
        }
    };
}
