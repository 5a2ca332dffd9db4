//! JSON encoding and decoding for [`Set`].
//!
//! Thin convenience layer over the serde implementations: a set encodes
//! to a JSON array and decodes from one.
//!
//! # Examples
//!
//! ```rust
//! use sets::set::Set;
//!
//! let set = Set::from([3, 1, 2]);
//! assert_eq!(set.to_json_canonical().unwrap(), "[1,2,3]");
//!
//! let decoded: Set<i32> = Set::from_json("[2, 3, 1, 3]").unwrap();
//! assert_eq!(decoded, set);
//!
//! assert!(Set::<i32>::from_json("[1, \"two\"]").is_err());
//! ```

use std::fmt;
use std::hash::Hash;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::Set;

// =============================================================================
// Error Type
// =============================================================================

/// Represents a failure to encode a set to, or decode a set from, JSON.
///
/// Decoding is all-or-nothing: one element of the wrong type, or input
/// that is not an array, rejects the whole document.
///
/// # Examples
///
/// ```rust
/// use sets::set::{JsonError, Set};
///
/// let error = Set::<u8>::from_json("[1, 300]").unwrap_err();
/// assert!(matches!(error, JsonError::Decode(_)));
/// assert!(error.to_string().starts_with("failed to decode set from JSON"));
/// ```
#[derive(Debug)]
pub enum JsonError {
    /// The set could not be written as JSON.
    Encode(serde_json::Error),
    /// The input was not a well-formed JSON array of elements.
    Decode(serde_json::Error),
}

impl fmt::Display for JsonError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encode(error) => write!(formatter, "failed to encode set as JSON: {error}"),
            Self::Decode(error) => write!(formatter, "failed to decode set from JSON: {error}"),
        }
    }
}

impl std::error::Error for JsonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Encode(error) | Self::Decode(error) => Some(error),
        }
    }
}

// =============================================================================
// Set JSON Methods
// =============================================================================

impl<E: Serialize> Set<E> {
    /// Encodes the set as a JSON array in iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`JsonError::Encode`] if an element cannot be represented
    /// in JSON (for example a map key that is not a string).
    pub fn to_json(&self) -> Result<String, JsonError> {
        serde_json::to_string(self).map_err(JsonError::Encode)
    }

    /// Encodes the set as a JSON array sorted ascending.
    ///
    /// Equal sets always produce identical output.
    ///
    /// # Errors
    ///
    /// Returns [`JsonError::Encode`] if an element cannot be represented
    /// in JSON.
    pub fn to_json_canonical(&self) -> Result<String, JsonError>
    where
        E: Ord,
    {
        serde_json::to_string(&self.canonical()).map_err(JsonError::Encode)
    }
}

impl<E: DeserializeOwned + Eq + Hash> Set<E> {
    /// Decodes a set from a JSON array, collapsing duplicate elements.
    ///
    /// # Errors
    ///
    /// Returns [`JsonError::Decode`] if the input is not a JSON array or
    /// any element does not decode as `E`.
    pub fn from_json(input: &str) -> Result<Self, JsonError> {
        serde_json::from_str(input).map_err(|error| {
            #[cfg(feature = "tracing")]
            tracing::debug!(%error, "rejected JSON set input");
            JsonError::Decode(error)
        })
    }
}
