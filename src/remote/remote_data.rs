//! The `RemoteData` type - the lifecycle of an asynchronously fetched value.
//!
//! A value fetched from somewhere else is, at any moment, in exactly one of
//! four states: nobody asked for it yet, the request is in flight, the request
//! failed, or the request succeeded. `RemoteData<E, A>` names those states so
//! that a UI or a pipeline can branch on them exhaustively instead of juggling
//! `bool` flags and `Option`s.
//!
//! Every combinator here is written in terms of [`RemoteData::fold`], which is
//! the only place that dispatches on the variant.
//!
//! # Examples
//!
//! ```rust
//! use remote_data::remote::RemoteData;
//!
//! let user_name: RemoteData<String, &str> = RemoteData::Success("alice");
//!
//! let rendered = user_name
//!     .map(str::to_uppercase)
//!     .fold(
//!         || "Click to load".to_string(),
//!         || "Loading...".to_string(),
//!         |error| format!("Could not load: {error}"),
//!         |name| format!("Hello, {name}"),
//!     );
//! assert_eq!(rendered, "Hello, ALICE");
//! ```

use std::fmt;

use super::error::UnresolvedError;
use super::variant::Variant;

/// The four possible states of a remotely fetched value.
///
/// # Type Parameters
///
/// * `E` - The error carried by `Failure`
/// * `A` - The value carried by `Success`
///
/// `NotAsked` and `Loading` carry nothing and are valid for every `E` and
/// `A`. Equality, ordering and hashing are structural, with the variants
/// ordered `NotAsked < Loading < Failure < Success`.
///
/// # Examples
///
/// ```rust
/// use remote_data::remote::RemoteData;
///
/// let fetched: RemoteData<String, i32> = RemoteData::Success(21);
/// assert_eq!(fetched.map(|x| x * 2), RemoteData::Success(42));
///
/// let in_flight: RemoteData<String, i32> = RemoteData::Loading;
/// assert_eq!(in_flight.map(|x| x * 2), RemoteData::Loading);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "value"))]
pub enum RemoteData<E, A> {
    /// No request has been initiated.
    NotAsked,
    /// A request is in flight.
    Loading,
    /// The request completed with an error.
    Failure(E),
    /// The request completed with a result.
    Success(A),
}

impl<E, A> Default for RemoteData<E, A> {
    /// A fresh value has not been requested yet.
    #[inline]
    fn default() -> Self {
        Self::NotAsked
    }
}

static_assertions::assert_impl_all!(
    RemoteData<String, i32>: Send, Sync, Clone, Eq, std::hash::Hash
);
static_assertions::assert_impl_all!(RemoteData<(), u8>: Copy);

impl<E, A> RemoteData<E, A> {
    // =========================================================================
    // Eliminators
    // =========================================================================

    /// Reduces the value by running the handler of its variant.
    ///
    /// Exactly one handler is invoked. `on_failure` and `on_success` receive
    /// the payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remote_data::remote::RemoteData;
    ///
    /// let value: RemoteData<String, i32> = RemoteData::Success(1);
    /// let label = value.fold(|| "A", || "B", |_| "C", |_| "D");
    /// assert_eq!(label, "D");
    /// ```
    #[inline]
    pub fn fold<R, N, L, F, S>(
        self,
        on_not_asked: N,
        on_loading: L,
        on_failure: F,
        on_success: S,
    ) -> R
    where
        N: FnOnce() -> R,
        L: FnOnce() -> R,
        F: FnOnce(E) -> R,
        S: FnOnce(A) -> R,
    {
        match self {
            Self::NotAsked => on_not_asked(),
            Self::Loading => on_loading(),
            Self::Failure(error) => on_failure(error),
            Self::Success(value) => on_success(value),
        }
    }

    /// Like [`fold`](Self::fold), but borrows the payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remote_data::remote::RemoteData;
    ///
    /// let value: RemoteData<String, String> = RemoteData::Failure("timeout".to_string());
    /// let length = value.fold_ref(|| 0, || 0, String::len, String::len);
    /// assert_eq!(length, 7);
    /// assert!(value.is_failure());
    /// ```
    #[inline]
    pub fn fold_ref<'a, R, N, L, F, S>(
        &'a self,
        on_not_asked: N,
        on_loading: L,
        on_failure: F,
        on_success: S,
    ) -> R
    where
        N: FnOnce() -> R,
        L: FnOnce() -> R,
        F: FnOnce(&'a E) -> R,
        S: FnOnce(&'a A) -> R,
    {
        self.as_ref()
            .fold(on_not_asked, on_loading, on_failure, on_success)
    }

    /// Converts `&RemoteData<E, A>` into `RemoteData<&E, &A>`.
    #[inline]
    pub const fn as_ref(&self) -> RemoteData<&E, &A> {
        match self {
            Self::NotAsked => RemoteData::NotAsked,
            Self::Loading => RemoteData::Loading,
            Self::Failure(error) => RemoteData::Failure(error),
            Self::Success(value) => RemoteData::Success(value),
        }
    }

    // =========================================================================
    // Predicates
    // =========================================================================

    /// Returns `true` if no request has been initiated.
    #[inline]
    pub fn is_not_asked(&self) -> bool {
        self.fold_ref(|| true, || false, |_| false, |_| false)
    }

    /// Returns `true` if the request is in flight.
    #[inline]
    pub fn is_loading(&self) -> bool {
        self.fold_ref(|| false, || true, |_| false, |_| false)
    }

    /// Returns `true` if the request completed with an error.
    #[inline]
    pub fn is_failure(&self) -> bool {
        self.fold_ref(|| false, || false, |_| true, |_| false)
    }

    /// Returns `true` if the request completed with a result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remote_data::remote::RemoteData;
    ///
    /// let value: RemoteData<(), i32> = RemoteData::Success(3);
    /// assert!(value.is_success());
    /// assert!(!value.is_failure());
    /// assert!(!value.is_loading());
    /// assert!(!value.is_not_asked());
    /// ```
    #[inline]
    pub fn is_success(&self) -> bool {
        self.fold_ref(|| false, || false, |_| false, |_| true)
    }

    /// Returns the tag of this value.
    #[inline]
    pub fn variant(&self) -> Variant {
        self.fold_ref(
            || Variant::NotAsked,
            || Variant::Loading,
            |_| Variant::Failure,
            |_| Variant::Success,
        )
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the `Success` payload.
    ///
    /// Every other variant is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remote_data::remote::RemoteData;
    ///
    /// let value: RemoteData<String, i32> = RemoteData::Success(1);
    /// assert_eq!(value.map(|x| x.to_string()), RemoteData::Success("1".to_string()));
    ///
    /// let failed: RemoteData<String, i32> = RemoteData::Failure("failed".to_string());
    /// assert_eq!(failed.map(|x| x + 1), RemoteData::Failure("failed".to_string()));
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> RemoteData<E, B>
    where
        F: FnOnce(A) -> B,
    {
        self.fold(
            || RemoteData::NotAsked,
            || RemoteData::Loading,
            RemoteData::Failure,
            |value| RemoteData::Success(function(value)),
        )
    }

    /// Applies a function to the `Failure` payload.
    ///
    /// Every other variant is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remote_data::remote::RemoteData;
    ///
    /// let failed: RemoteData<&str, i32> = RemoteData::Failure("not found");
    /// assert_eq!(failed.map_failure(str::len), RemoteData::Failure(9));
    /// ```
    #[inline]
    pub fn map_failure<E2, G>(self, function: G) -> RemoteData<E2, A>
    where
        G: FnOnce(E) -> E2,
    {
        self.bimap(function, |value| value)
    }

    /// Applies `on_error` to a `Failure` payload or `on_success` to a
    /// `Success` payload.
    ///
    /// `NotAsked` and `Loading` are returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remote_data::remote::RemoteData;
    ///
    /// let failed: RemoteData<i32, i32> = RemoteData::Failure(1);
    /// assert_eq!(
    ///     failed.bimap(|e| format!("{e}_"), |x| x + 1),
    ///     RemoteData::Failure("1_".to_string())
    /// );
    /// ```
    #[inline]
    pub fn bimap<E2, B, G, H>(self, on_error: G, on_success: H) -> RemoteData<E2, B>
    where
        G: FnOnce(E) -> E2,
        H: FnOnce(A) -> B,
    {
        self.fold(
            || RemoteData::NotAsked,
            || RemoteData::Loading,
            |error| RemoteData::Failure(on_error(error)),
            |value| RemoteData::Success(on_success(value)),
        )
    }

    // =========================================================================
    // Chaining Operations
    // =========================================================================

    /// Feeds the `Success` payload into a function that returns another
    /// `RemoteData`.
    ///
    /// The returned value is used as is. `NotAsked`, `Loading` and `Failure`
    /// short-circuit and the function is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remote_data::remote::RemoteData;
    ///
    /// let value: RemoteData<String, i32> = RemoteData::Success(1);
    /// assert_eq!(value.bind(|x| RemoteData::Success(x + 1)), RemoteData::Success(2));
    ///
    /// let value: RemoteData<String, i32> = RemoteData::Success(1);
    /// assert_eq!(value.bind(|_| RemoteData::<String, i32>::Loading), RemoteData::Loading);
    /// ```
    #[inline]
    pub fn bind<B, F>(self, function: F) -> RemoteData<E, B>
    where
        F: FnOnce(A) -> RemoteData<E, B>,
    {
        self.fold(
            || RemoteData::NotAsked,
            || RemoteData::Loading,
            RemoteData::Failure,
            function,
        )
    }

    /// Alias for [`bind`](Self::bind).
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> RemoteData<E, B>
    where
        F: FnOnce(A) -> RemoteData<E, B>,
    {
        self.bind(function)
    }

    /// Alias for [`bind`](Self::bind).
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> RemoteData<E, B>
    where
        F: FnOnce(A) -> RemoteData<E, B>,
    {
        self.bind(function)
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the `Success` payload, if any.
    #[inline]
    pub fn into_success(self) -> Option<A> {
        self.fold(|| None, || None, |_| None, Some)
    }

    /// Returns the `Failure` payload, if any.
    #[inline]
    pub fn into_failure(self) -> Option<E> {
        self.fold(|| None, || None, Some, |_| None)
    }

    /// Returns a reference to the `Success` payload, if any.
    #[inline]
    pub fn success_ref(&self) -> Option<&A> {
        self.fold_ref(|| None, || None, |_| None, Some)
    }

    /// Returns a reference to the `Failure` payload, if any.
    #[inline]
    pub fn failure_ref(&self) -> Option<&E> {
        self.fold_ref(|| None, || None, Some, |_| None)
    }

    /// Returns the `Success` payload, or `default` for every other variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remote_data::remote::RemoteData;
    ///
    /// let loading: RemoteData<String, Vec<i32>> = RemoteData::Loading;
    /// assert_eq!(loading.with_default(Vec::new()), Vec::<i32>::new());
    /// ```
    #[inline]
    pub fn with_default(self, default: A) -> A {
        self.into_success().unwrap_or(default)
    }

    /// Returns the `Success` payload.
    ///
    /// # Panics
    ///
    /// Panics if this is not a `Success` value.
    #[inline]
    pub fn unwrap_success(self) -> A {
        self.fold(
            || panic!("called `RemoteData::unwrap_success()` on a `NotAsked` value"),
            || panic!("called `RemoteData::unwrap_success()` on a `Loading` value"),
            |_| panic!("called `RemoteData::unwrap_success()` on a `Failure` value"),
            |value| value,
        )
    }

    /// Returns the `Failure` payload.
    ///
    /// # Panics
    ///
    /// Panics if this is not a `Failure` value.
    #[inline]
    pub fn unwrap_failure(self) -> E {
        self.fold(
            || panic!("called `RemoteData::unwrap_failure()` on a `NotAsked` value"),
            || panic!("called `RemoteData::unwrap_failure()` on a `Loading` value"),
            |error| error,
            |_| panic!("called `RemoteData::unwrap_failure()` on a `Success` value"),
        )
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<E: fmt::Display, A: fmt::Display> fmt::Display for RemoteData<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let payload: Option<&dyn fmt::Display> = self.fold_ref(
            || None,
            || None,
            |error| Some(error as &dyn fmt::Display),
            |value| Some(value as &dyn fmt::Display),
        );
        match payload {
            Some(payload) => write!(formatter, "{}({payload})", self.variant()),
            None => write!(formatter, "{}", self.variant()),
        }
    }
}

// =============================================================================
// Result Conversions
// =============================================================================

impl<E, A> From<Result<A, E>> for RemoteData<E, A> {
    /// Converts a completed `Result` into a settled `RemoteData`.
    ///
    /// `Ok(a)` becomes `Success(a)`, and `Err(e)` becomes `Failure(e)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remote_data::remote::RemoteData;
    ///
    /// let ok: Result<i32, String> = Ok(42);
    /// assert_eq!(RemoteData::from(ok), RemoteData::Success(42));
    /// ```
    #[inline]
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<E, A> TryFrom<RemoteData<E, A>> for Result<A, E> {
    type Error = UnresolvedError;

    /// Converts a settled `RemoteData` into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns [`UnresolvedError`] for `NotAsked` and `Loading`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remote_data::remote::RemoteData;
    ///
    /// let failed: RemoteData<String, i32> = RemoteData::Failure("boom".to_string());
    /// assert_eq!(Result::<i32, String>::try_from(failed), Ok(Err("boom".to_string())));
    /// ```
    #[inline]
    fn try_from(remote_data: RemoteData<E, A>) -> Result<Self, Self::Error> {
        remote_data.fold(
            || {
                Err(UnresolvedError {
                    variant: Variant::NotAsked,
                })
            },
            || {
                Err(UnresolvedError {
                    variant: Variant::Loading,
                })
            },
            |error| Ok(Err(error)),
            |value| Ok(Ok(value)),
        )
    }
}
