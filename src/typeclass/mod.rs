//! Type class traits implemented by `RemoteData`.
//!
//! These traits let generic code treat `RemoteData<E, _>` like any other
//! context:
//!
//! - [`TypeConstructor`]: Higher-kinded type emulation via GATs
//! - [`Functor`]: Mapping over the success value
//! - [`Applicative`]: Lifting values and combining independent requests
//! - [`Monad`]: Sequencing dependent requests
//! - [`Bifunctor`]: Mapping over the error and the success value
//!
//! The inherent methods on [`RemoteData`](crate::remote::RemoteData) cover
//! the same ground. The traits exist so that helpers written against
//! `Functor` or `Monad` accept `RemoteData` unchanged.
//!
//! # Examples
//!
//! ```rust
//! use remote_data::remote::RemoteData;
//! use remote_data::typeclass::{Applicative, Monad};
//!
//! fn both<M>(first: M, second: M::WithType<i32>) -> M::WithType<i32>
//! where
//!     M: Monad<Inner = i32>,
//! {
//!     first.map2(second, |a, b| a + b)
//! }
//!
//! let total = both(RemoteData::<String, i32>::Success(1), RemoteData::Success(2));
//! assert_eq!(total, RemoteData::Success(3));
//! ```

mod applicative;
mod bifunctor;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::{Monad, flatten};
