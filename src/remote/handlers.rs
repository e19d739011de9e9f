//! Handler records for folding [`RemoteData`] values.
//!
//! [`RemoteData::fold`] takes its four handlers positionally and consumes
//! them. When the same reduction is applied to many values (rendering a
//! list of widgets, for instance) it is more convenient to name the
//! handlers once in a [`Handlers`] record and turn that record into a
//! reusable function with [`fold`].

use super::remote_data::RemoteData;

/// One handler per [`RemoteData`] variant.
///
/// # Examples
///
/// ```rust
/// use remote_data::remote::{Handlers, RemoteData};
///
/// let describe = Handlers {
///     on_not_asked: || "not asked".to_string(),
///     on_loading: || "loading".to_string(),
///     on_failure: |error: String| format!("failed: {error}"),
///     on_success: |count: u32| format!("{count} items"),
/// };
///
/// assert_eq!(describe.apply(RemoteData::Success(3)), "3 items");
/// assert_eq!(describe.apply(RemoteData::Loading), "loading");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Handlers<N, L, F, S> {
    /// Called for `NotAsked`.
    pub on_not_asked: N,
    /// Called for `Loading`.
    pub on_loading: L,
    /// Called with the error of a `Failure`.
    pub on_failure: F,
    /// Called with the value of a `Success`.
    pub on_success: S,
}

impl<N, L, F, S> Handlers<N, L, F, S> {
    /// Creates a handler record.
    #[inline]
    pub const fn new(on_not_asked: N, on_loading: L, on_failure: F, on_success: S) -> Self {
        Self {
            on_not_asked,
            on_loading,
            on_failure,
            on_success,
        }
    }

    /// Reduces `remote_data` with the handler of its variant.
    #[inline]
    pub fn apply<E, A, R>(&self, remote_data: RemoteData<E, A>) -> R
    where
        N: Fn() -> R,
        L: Fn() -> R,
        F: Fn(E) -> R,
        S: Fn(A) -> R,
    {
        remote_data.fold(
            &self.on_not_asked,
            &self.on_loading,
            &self.on_failure,
            &self.on_success,
        )
    }
}

/// Turns a handler record into a function that reduces any number of
/// [`RemoteData`] values.
///
/// # Examples
///
/// ```rust
/// use remote_data::remote::{fold, success, Handlers, RemoteData};
///
/// let label = fold(Handlers {
///     on_not_asked: || 'A',
///     on_loading: || 'B',
///     on_failure: |_: String| 'C',
///     on_success: |_: i32| 'D',
/// });
///
/// assert_eq!(label(success(1)), 'D');
/// assert_eq!(label(RemoteData::NotAsked), 'A');
/// ```
#[inline]
pub fn fold<E, A, R, N, L, F, S>(
    handlers: Handlers<N, L, F, S>,
) -> impl Fn(RemoteData<E, A>) -> R
where
    N: Fn() -> R,
    L: Fn() -> R,
    F: Fn(E) -> R,
    S: Fn(A) -> R,
{
    move |remote_data: RemoteData<E, A>| handlers.apply(remote_data)
}

/// Alias for [`fold`].
#[inline]
pub fn cata<E, A, R, N, L, F, S>(
    handlers: Handlers<N, L, F, S>,
) -> impl Fn(RemoteData<E, A>) -> R
where
    N: Fn() -> R,
    L: Fn() -> R,
    F: Fn(E) -> R,
    S: Fn(A) -> R,
{
    fold(handlers)
}
