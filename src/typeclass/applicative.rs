//! Applicative type class - combining independent values.
//!
//! `Applicative` extends `Functor` with `pure`, which lifts a plain value,
//! and `map2`, which combines two values with a binary function.
//!
//! For `RemoteData`, `pure` is `Success` and `map2` is derived from `bind`,
//! so the left operand's state is checked first:
//!
//! | `self`       | `other`      | result          |
//! |--------------|--------------|-----------------|
//! | `NotAsked`   | any          | `NotAsked`      |
//! | `Loading`    | any          | `Loading`       |
//! | `Failure(e)` | any          | `Failure(e)`    |
//! | `Success(a)` | `Success(b)` | `Success(f(a, b))` |
//! | `Success(_)` | other state  | that state      |
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Consistency with Monad
//!
//! ```text
//! a.map2(b, f) == a.flat_map(|x| b.fmap(|y| f(x, y)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use remote_data::remote::RemoteData;
//! use remote_data::typeclass::Applicative;
//!
//! let user: RemoteData<String, &str> = RemoteData::Success("alice");
//! let posts: RemoteData<String, u32> = RemoteData::Success(3);
//! assert_eq!(
//!     user.map2(posts, |name, count| format!("{name}: {count}")),
//!     RemoteData::Success("alice: 3".to_string())
//! );
//!
//! let user: RemoteData<String, &str> = RemoteData::Success("alice");
//! let posts: RemoteData<String, u32> = RemoteData::Loading;
//! assert_eq!(user.map2(posts, |name, count| format!("{name}: {count}")), RemoteData::Loading);
//! ```

use super::functor::Functor;
use crate::remote::RemoteData;

/// A type class for functors that can lift values and combine independent
/// computations.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remote_data::remote::RemoteData;
    /// use remote_data::typeclass::Applicative;
    ///
    /// let x: RemoteData<String, i32> = <RemoteData<String, ()>>::pure(42);
    /// assert_eq!(x, RemoteData::Success(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remote_data::remote::RemoteData;
    /// use remote_data::typeclass::Applicative;
    ///
    /// let a: RemoteData<(), i32> = RemoteData::Success(1);
    /// let b: RemoteData<(), i32> = RemoteData::Success(2);
    /// let c: RemoteData<(), i32> = RemoteData::Success(3);
    /// assert_eq!(a.map3(b, c, |x, y, z| x + y + z), RemoteData::Success(6));
    /// ```
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Combines two applicative values and keeps the left value.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Combines two applicative values and keeps the right value.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a function inside the context to a value inside the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remote_data::remote::RemoteData;
    /// use remote_data::typeclass::Applicative;
    ///
    /// let function: RemoteData<(), fn(i32) -> i32> = RemoteData::Success(|x| x + 1);
    /// assert_eq!(function.apply(RemoteData::Success(5)), RemoteData::Success(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

impl<E, A> Applicative for RemoteData<E, A> {
    #[inline]
    fn pure<B>(value: B) -> RemoteData<E, B> {
        RemoteData::Success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: RemoteData<E, B>, function: F) -> RemoteData<E, C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.bind(|a| other.map(|b| function(a, b)))
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: RemoteData<E, B>,
        third: RemoteData<E, C>,
        function: F,
    ) -> RemoteData<E, D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        self.bind(|a| second.bind(|b| third.map(|c| function(a, b, c))))
    }

    #[inline]
    fn apply<B, Output>(self, other: RemoteData<E, B>) -> RemoteData<E, Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.map2(other, |function, b| function(b))
    }
}
