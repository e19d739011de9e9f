//! Free-standing constructors, curried combinators and predicates.
//!
//! The curried forms take the transformation first and return a function
//! over `RemoteData`, so a pipeline step can be built once and applied to
//! many values:
//!
//! ```rust
//! use remote_data::remote::{bind, loading, map, success, RemoteData};
//!
//! let increment = map(|x: i32| x + 1);
//! let halve = bind(|x: i32| {
//!     if x % 2 == 0 {
//!         success(x / 2)
//!     } else {
//!         RemoteData::Failure(format!("{x} is odd"))
//!     }
//! });
//!
//! assert_eq!(halve(increment(success(3))), success(2));
//! assert_eq!(halve(increment(success(2))), RemoteData::Failure("3 is odd".to_string()));
//! assert_eq!(halve(increment(loading())), loading());
//! ```
//!
//! Each returned function only borrows the captured transformation, so it
//! implements `Fn` and can be called repeatedly.

use super::remote_data::RemoteData;

// =============================================================================
// Constructors
// =============================================================================

/// Creates a `NotAsked` value.
#[inline]
pub const fn not_asked<E, A>() -> RemoteData<E, A> {
    RemoteData::NotAsked
}

/// Creates a `Loading` value.
#[inline]
pub const fn loading<E, A>() -> RemoteData<E, A> {
    RemoteData::Loading
}

/// Creates a `Failure` value carrying `error`.
#[inline]
pub const fn failure<E, A>(error: E) -> RemoteData<E, A> {
    RemoteData::Failure(error)
}

/// Creates a `Success` value carrying `value`.
#[inline]
pub const fn success<E, A>(value: A) -> RemoteData<E, A> {
    RemoteData::Success(value)
}

// =============================================================================
// Curried Combinators
// =============================================================================

/// Lifts `function` to act on the `Success` payload.
///
/// See [`RemoteData::map`].
#[inline]
pub fn map<E, A, B, F>(function: F) -> impl Fn(RemoteData<E, A>) -> RemoteData<E, B>
where
    F: Fn(A) -> B,
{
    move |remote_data: RemoteData<E, A>| remote_data.map(&function)
}

/// Lifts `function` to act on the `Failure` payload.
///
/// See [`RemoteData::map_failure`].
#[inline]
pub fn map_failure<E, E2, A, G>(function: G) -> impl Fn(RemoteData<E, A>) -> RemoteData<E2, A>
where
    G: Fn(E) -> E2,
{
    move |remote_data: RemoteData<E, A>| remote_data.map_failure(&function)
}

/// Lifts a pair of functions to act on `Failure` and `Success` payloads.
///
/// See [`RemoteData::bimap`].
///
/// # Examples
///
/// ```rust
/// use remote_data::remote::{bimap, failure, success, RemoteData};
///
/// let both = bimap(|e: i32| format!("{e}_"), |a: i32| a.to_string());
///
/// assert_eq!(both(failure(1)), failure::<String, String>("1_".to_string()));
/// assert_eq!(both(success(1)), success::<String, String>("1".to_string()));
/// assert_eq!(both(RemoteData::Loading), RemoteData::Loading);
/// ```
#[inline]
pub fn bimap<E, E2, A, B, G, H>(
    on_error: G,
    on_success: H,
) -> impl Fn(RemoteData<E, A>) -> RemoteData<E2, B>
where
    G: Fn(E) -> E2,
    H: Fn(A) -> B,
{
    move |remote_data: RemoteData<E, A>| remote_data.bimap(&on_error, &on_success)
}

/// Lifts `function` to chain on the `Success` payload.
///
/// See [`RemoteData::bind`].
#[inline]
pub fn bind<E, A, B, F>(function: F) -> impl Fn(RemoteData<E, A>) -> RemoteData<E, B>
where
    F: Fn(A) -> RemoteData<E, B>,
{
    move |remote_data: RemoteData<E, A>| remote_data.bind(&function)
}

/// Alias for [`bind`].
#[inline]
pub fn and_then<E, A, B, F>(function: F) -> impl Fn(RemoteData<E, A>) -> RemoteData<E, B>
where
    F: Fn(A) -> RemoteData<E, B>,
{
    bind(function)
}

/// Alias for [`bind`].
#[inline]
pub fn flat_map<E, A, B, F>(function: F) -> impl Fn(RemoteData<E, A>) -> RemoteData<E, B>
where
    F: Fn(A) -> RemoteData<E, B>,
{
    bind(function)
}

// =============================================================================
// Predicates
// =============================================================================

/// Returns `true` if `remote_data` is `NotAsked`.
#[inline]
pub fn is_not_asked<E, A>(remote_data: &RemoteData<E, A>) -> bool {
    remote_data.is_not_asked()
}

/// Returns `true` if `remote_data` is `Loading`.
#[inline]
pub fn is_loading<E, A>(remote_data: &RemoteData<E, A>) -> bool {
    remote_data.is_loading()
}

/// Returns `true` if `remote_data` is `Failure`.
#[inline]
pub fn is_failure<E, A>(remote_data: &RemoteData<E, A>) -> bool {
    remote_data.is_failure()
}

/// Returns `true` if `remote_data` is `Success`.
#[inline]
pub fn is_success<E, A>(remote_data: &RemoteData<E, A>) -> bool {
    remote_data.is_success()
}
