//! Monad type class - sequencing dependent computations.
//!
//! `Monad` extends `Applicative` with `flat_map`, which lets the next
//! computation depend on the result of the previous one. For `RemoteData`,
//! `flat_map` is [`RemoteData::bind`]: a second request is only described
//! once the first one succeeded.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use remote_data::remote::RemoteData;
//! use remote_data::typeclass::Monad;
//!
//! fn load_profile(user_id: u32) -> RemoteData<String, String> {
//!     if user_id == 0 {
//!         RemoteData::Failure("unknown user".to_string())
//!     } else {
//!         RemoteData::Success(format!("profile #{user_id}"))
//!     }
//! }
//!
//! let session: RemoteData<String, u32> = RemoteData::Success(7);
//! assert_eq!(session.flat_map(load_profile), RemoteData::Success("profile #7".to_string()));
//!
//! let session: RemoteData<String, u32> = RemoteData::Loading;
//! assert_eq!(session.flat_map(load_profile), RemoteData::Loading);
//! ```

use super::applicative::Applicative;
use crate::remote::RemoteData;

/// A type class for types that support sequencing of computations.
///
/// See the module documentation for the laws every implementation obeys.
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// In Haskell, this is `>>=` (bind).
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` to match Rust's naming conventions.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// If `self` is not a success, its state propagates and `next` is
    /// dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remote_data::remote::RemoteData;
    /// use remote_data::typeclass::Monad;
    ///
    /// let saved: RemoteData<String, ()> = RemoteData::Success(());
    /// let reloaded: RemoteData<String, i32> = RemoteData::Success(3);
    /// assert_eq!(Monad::then(saved, reloaded), RemoteData::Success(3));
    ///
    /// let saving: RemoteData<String, ()> = RemoteData::Loading;
    /// let reloaded: RemoteData<String, i32> = RemoteData::Success(3);
    /// assert_eq!(Monad::then(saving, reloaded), RemoteData::Loading);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<E, A> Monad for RemoteData<E, A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> RemoteData<E, B>
    where
        F: FnOnce(A) -> RemoteData<E, B>,
    {
        self.bind(function)
    }
}

/// Flattens a nested `RemoteData` into a single layer.
///
/// The outer state wins unless it is `Success`, in which case the inner
/// value is returned.
///
/// # Examples
///
/// ```rust
/// use remote_data::remote::RemoteData;
/// use remote_data::typeclass::flatten;
///
/// let nested: RemoteData<(), RemoteData<(), i32>> = RemoteData::Success(RemoteData::Loading);
/// assert_eq!(flatten(nested), RemoteData::Loading);
/// ```
#[inline]
pub fn flatten<E, A>(nested: RemoteData<E, RemoteData<E, A>>) -> RemoteData<E, A> {
    nested.bind(|inner| inner)
}
