//! Functor type class - mapping over the success value.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use remote_data::remote::RemoteData;
//! use remote_data::typeclass::Functor;
//!
//! let fetched: RemoteData<String, i32> = RemoteData::Success(5);
//! assert_eq!(fetched.fmap(|n| n.to_string()), RemoteData::Success("5".to_string()));
//!
//! let pending: RemoteData<String, i32> = RemoteData::Loading;
//! assert_eq!(pending.fmap(|n| n.to_string()), RemoteData::Loading);
//! ```

use super::higher::TypeConstructor;
use crate::remote::RemoteData;

/// A type class for types that can have a function mapped over their contents.
///
/// See the module documentation for the laws every implementation obeys.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remote_data::remote::RemoteData;
    /// use remote_data::typeclass::Functor;
    ///
    /// let x: RemoteData<(), i32> = RemoteData::Success(5);
    /// assert_eq!(x.fmap(|n| n * 2), RemoteData::Success(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remote_data::remote::RemoteData;
    /// use remote_data::typeclass::Functor;
    ///
    /// let x: RemoteData<(), i32> = RemoteData::Success(5);
    /// assert_eq!(x.replace("replaced"), RemoteData::Success("replaced"));
    ///
    /// let y: RemoteData<(), i32> = RemoteData::NotAsked;
    /// assert_eq!(y.replace("replaced"), RemoteData::NotAsked);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    ///
    /// Useful when only the state of the request matters.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<E, A> Functor for RemoteData<E, A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> RemoteData<E, B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn describe<T: Functor<Inner = i32>>(value: T) -> T::WithType<String> {
        value.fmap(|n| format!("#{n}"))
    }

    #[rstest]
    #[case(RemoteData::NotAsked, RemoteData::NotAsked)]
    #[case(RemoteData::Loading, RemoteData::Loading)]
    #[case(RemoteData::Failure('x'), RemoteData::Failure('x'))]
    #[case(RemoteData::Success(7), RemoteData::Success("#7".to_string()))]
    fn generic_fmap_over_remote_data(
        #[case] value: RemoteData<char, i32>,
        #[case] expected: RemoteData<char, String>,
    ) {
        assert_eq!(describe(value), expected);
    }

    #[rstest]
    fn void_keeps_state() {
        let failed: RemoteData<&str, i32> = RemoteData::Failure("boom");
        assert_eq!(failed.void(), RemoteData::Failure("boom"));

        let succeeded: RemoteData<&str, i32> = RemoteData::Success(1);
        assert_eq!(succeeded.void(), RemoteData::Success(()));
    }
}
