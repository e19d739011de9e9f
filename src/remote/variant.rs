//! Payload-free tag of a [`RemoteData`](super::RemoteData) value.

use std::fmt;

/// The tag of a [`RemoteData`](super::RemoteData) value, without its payload.
///
/// # Examples
///
/// ```rust
/// use remote_data::remote::{RemoteData, Variant};
///
/// let value: RemoteData<String, i32> = RemoteData::Success(1);
/// assert_eq!(value.variant(), Variant::Success);
/// assert_eq!(Variant::Loading.to_string(), "Loading");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    /// No request has been initiated.
    NotAsked,
    /// A request is in flight.
    Loading,
    /// The request completed with an error.
    Failure,
    /// The request completed with a result.
    Success,
}

impl Variant {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 4] = [Self::NotAsked, Self::Loading, Self::Failure, Self::Success];

    /// Returns the variant name.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NotAsked => "NotAsked",
            Self::Loading => "Loading",
            Self::Failure => "Failure",
            Self::Success => "Success",
        }
    }

    /// Returns `true` for `Failure` and `Success`.
    #[inline]
    pub const fn is_settled(self) -> bool {
        matches!(self, Self::Failure | Self::Success)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}
