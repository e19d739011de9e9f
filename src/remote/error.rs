//! Error types for conversions out of [`RemoteData`](super::RemoteData).
//!
//! The algebra itself never fails. The only fallible operation is turning a
//! `RemoteData` into a `Result`, which is impossible while the request is
//! still unresolved.

use super::variant::Variant;

/// Represents an attempt to read an outcome from a value that has none yet.
///
/// Returned when converting a `NotAsked` or `Loading` value into a
/// `Result`.
///
/// # Examples
///
/// ```rust
/// use remote_data::remote::{RemoteData, UnresolvedError, Variant};
///
/// let loading: RemoteData<String, i32> = RemoteData::Loading;
/// let error = Result::<i32, String>::try_from(loading).unwrap_err();
///
/// assert_eq!(error, UnresolvedError { variant: Variant::Loading });
/// assert_eq!(
///     format!("{}", error),
///     "RemoteData is unresolved: expected Failure or Success, found Loading"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnresolvedError {
    /// The variant that was found instead of an outcome.
    pub variant: Variant,
}

impl std::fmt::Display for UnresolvedError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "RemoteData is unresolved: expected Failure or Success, found {}",
            self.variant
        )
    }
}

impl std::error::Error for UnresolvedError {}
