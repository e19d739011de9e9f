//! The `RemoteData` algebra.
//!
//! This module provides the [`RemoteData`] type and its combinators:
//!
//! - [`RemoteData`]: `NotAsked`, `Loading`, `Failure(E)` or `Success(A)`
//! - Constructors: [`not_asked`], [`loading`], [`failure`], [`success`]
//! - Eliminator: [`RemoteData::fold`], or [`fold`] / [`cata`] over a [`Handlers`] record
//! - Combinators: [`map`], [`map_failure`], [`bimap`], [`bind`] ([`and_then`], [`flat_map`])
//! - Predicates: [`is_not_asked`], [`is_loading`], [`is_failure`], [`is_success`]
//!
//! Combinators exist both as methods and as curried free functions.
//!
//! # Examples
//!
//! ```rust
//! use remote_data::remote::{bind, fold, success, Handlers, RemoteData};
//!
//! let render = fold(Handlers {
//!     on_not_asked: || "idle".to_string(),
//!     on_loading: || "spinner".to_string(),
//!     on_failure: |error: String| format!("error: {error}"),
//!     on_success: |value: i32| format!("value: {value}"),
//! });
//!
//! let next = bind(|x: i32| success(x + 1));
//! assert_eq!(render(next(success(1))), "value: 2");
//! assert_eq!(render(next(RemoteData::Failure("x".to_string()))), "error: x");
//! ```

mod combinators;
mod error;
mod handlers;
mod remote_data;
mod variant;

pub use combinators::{
    and_then, bimap, bind, failure, flat_map, is_failure, is_loading, is_not_asked, is_success,
    loading, map, map_failure, not_asked, success,
};
pub use error::UnresolvedError;
pub use handlers::{Handlers, cata, fold};
pub use remote_data::RemoteData;
pub use variant::Variant;
