//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `RemoteData<E, _>`
//! directly. [`TypeConstructor`] names the type a value is currently applied
//! to (`Inner`) and the same constructor applied to another type
//! (`WithType<B>`), which is enough to state `Functor`, `Applicative` and
//! `Monad` generically.

use crate::remote::RemoteData;

/// A trait representing a type constructor.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
///
/// # Example
///
/// ```rust
/// use remote_data::remote::RemoteData;
/// use remote_data::typeclass::TypeConstructor;
///
/// fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
/// assert_inner::<RemoteData<String, i32>>();
/// ```
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `RemoteData<E, A>` this is `A`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For `RemoteData<E, A>` this is `RemoteData<E, B>`: the error type is
    /// fixed and only the success type varies.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<E, A> TypeConstructor for RemoteData<E, A> {
    type Inner = A;
    type WithType<B> = RemoteData<E, B>;
}
