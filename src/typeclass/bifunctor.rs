//! Bifunctor type class - mapping over both type parameters.
//!
//! While `Functor` transforms `F<A>` to `F<B>`, `Bifunctor` transforms
//! `F<A, B>` to `F<C, D>`. `RemoteData<E, A>` is implemented as
//! `Bifunctor<E, A>`:
//!
//! - `first`: transforms the error type, equivalent to `map_failure`
//! - `second`: transforms the success type, equivalent to `Functor::fmap`
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)
//! ```
//!
//! ## first/second Consistency Law
//!
//! ```text
//! bf.bimap(f, g) == bf.first(f).second(g) == bf.second(g).first(f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use remote_data::remote::RemoteData;
//! use remote_data::typeclass::Bifunctor;
//!
//! let failed: RemoteData<u16, String> = RemoteData::Failure(503);
//! assert_eq!(
//!     failed.first(|status| format!("HTTP {status}")),
//!     RemoteData::Failure("HTTP 503".to_string())
//! );
//! ```
//!
//! `Bifunctor` does not require `TypeConstructor`. The result type is named
//! by the generic associated type `Target<C, D>`.

use crate::remote::RemoteData;

/// A type class for types with two type parameters that can have functions
/// mapped over both.
///
/// See module-level documentation for laws.
pub trait Bifunctor<A, B> {
    /// The resulting type constructor after applying the transformation.
    ///
    /// For `RemoteData<E, A>`, `Target<C, D> = RemoteData<C, D>`.
    type Target<C, D>;

    /// Applies two functions to both type parameters simultaneously.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Applies a function to the first type parameter only.
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |b| b)
    }

    /// Applies a function to the second type parameter only.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|a| a, function)
    }

    /// Applies two functions to references of both type parameters without
    /// consuming self.
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D;
}

impl<E, A> Bifunctor<E, A> for RemoteData<E, A> {
    type Target<C, D> = RemoteData<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> RemoteData<C, D>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(A) -> D,
    {
        Self::bimap(self, first_function, second_function)
    }

    #[inline]
    fn first<C, F>(self, function: F) -> RemoteData<C, A>
    where
        F: FnOnce(E) -> C,
    {
        self.map_failure(function)
    }

    #[inline]
    fn second<D, G>(self, function: G) -> RemoteData<E, D>
    where
        G: FnOnce(A) -> D,
    {
        self.map(function)
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> RemoteData<C, D>
    where
        F: FnOnce(&E) -> C,
        G: FnOnce(&A) -> D,
    {
        self.as_ref().bimap(first_function, second_function)
    }
}
