//! # remote-data
//!
//! A `RemoteData` type for Rust: the four states of a value that is fetched
//! asynchronously, plus the pure combinators that transform it.
//!
//! ## Overview
//!
//! A request is either not asked for yet, in flight, failed, or succeeded.
//! Modelling that with a pair of `bool`s and an `Option<Result<_, _>>` admits
//! impossible states. `RemoteData<E, A>` admits exactly four:
//!
//! - **`NotAsked`**: no request has been initiated
//! - **`Loading`**: the request is in flight
//! - **`Failure(E)`**: the request completed with an error
//! - **`Success(A)`**: the request completed with a result
//!
//! The crate does no fetching itself. The caller's pipeline produces the
//! values, and renders or branches on them with `fold`.
//!
//! ## Feature Flags
//!
//! - `typeclass` (default): `Functor`, `Applicative`, `Monad` and
//!   `Bifunctor` instances
//! - `serde`: `Serialize`/`Deserialize` for `RemoteData` and `Variant`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use remote_data::prelude::*;
//!
//! let render = fold(Handlers {
//!     on_not_asked: || "A",
//!     on_loading: || "B",
//!     on_failure: |_: String| "C",
//!     on_success: |_: i32| "D",
//! });
//!
//! let response: RemoteData<String, i32> = success(1);
//! assert_eq!(render(response.bind(|x| success(x + 1))), "D");
//! assert_eq!(render(loading()), "B");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, functions and traits.
///
/// # Usage
///
/// ```rust
/// use remote_data::prelude::*;
/// ```
pub mod prelude {
    pub use crate::remote::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod remote;

#[cfg(feature = "typeclass")]
pub mod typeclass;
