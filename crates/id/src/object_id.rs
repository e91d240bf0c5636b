//! Internal implementation of identifier validation and key encoding.

use crate::{IdError, IdResult};
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Canonical hyphenated UUID string length.
const UUID_LEN: usize = 36;

/// Tenant identifier length when the id comes from the external identity service.
const TENANT_ID_LEN: usize = 32;

/// Offset of the UUID version nibble in the hyphen-stripped form.
const UUID_VERSION_POS: usize = 12;

/// Hex digit count of the UUID `time_low` field.
const UUID_TIME_LOW: usize = 8;

/// Hex digit count of the UUID `time_mid` field.
const UUID_TIME_MID: usize = 4;

/// Hex digit count of the UUID `time_hi_and_version` field.
const UUID_TIME_HIGH_VERSION: usize = 4;

/// Hex digit count of the UUID `clock_seq` field.
const UUID_CLOCK_SEQ: usize = 4;

/// Hex digit count of the combined UUID time fields.
const UUID_TIME_LEN: usize = UUID_TIME_LOW + UUID_TIME_MID + UUID_TIME_HIGH_VERSION;

/// Longest key the datastore accepts.
const STORE_KEY_MAX_LEN: usize = TENANT_ID_LEN - 1;

/// A validated northbound object identifier.
///
/// This wrapper type guarantees that once constructed, the contained string is
/// one of the two accepted identifier shapes: a canonical 36-character
/// hyphenated UUID string, or a tenant identifier of 1 to 32 characters. The
/// original spelling, including hex digit case, is preserved.
///
/// # When to use this type
/// Use this wrapper whenever you are:
/// - Accepting an object identifier from *outside* the core (API request, CLI
///   input, etc), or
/// - Deriving the datastore key for an object.
/// - Generating identifiers for objects created without one.
///
/// # Construction
/// - [`ObjectId::new`] generates a fresh hyphenated UUID identifier.
/// - [`ObjectId::parse`] validates an externally supplied identifier.
///
/// # Errors
/// [`ObjectId::parse`] returns [`IdError::InvalidInput`] if the input matches
/// neither accepted shape.
///
/// # Display format
/// When displayed or converted to string, `ObjectId` reproduces the validated
/// input exactly as supplied.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObjectId(String);

impl ObjectId {
    /// Generates a new UUID-shaped identifier.
    ///
    /// This is suitable for allocating an identifier to an object created
    /// through the API without one. The generated UUID follows RFC 4122
    /// version 4 and is rendered in the canonical hyphenated form.
    ///
    /// # Returns
    ///
    /// Returns a newly generated identifier wrapped in `ObjectId`.
    pub fn new() -> Self {
        Self(Uuid::new_v4().hyphenated().to_string())
    }

    /// Validates and wraps an externally supplied identifier.
    ///
    /// This does **not** normalise the input in any way; the wrapped value is
    /// the exact string that was passed in, so a key derived later reflects
    /// the caller's spelling.
    ///
    /// # Arguments
    ///
    /// * `input` - Identifier string to validate and wrap.
    ///
    /// # Returns
    ///
    /// Returns a validated [`ObjectId`] on success.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::InvalidInput`] if `input` matches neither accepted
    /// shape.
    pub fn parse(input: &str) -> IdResult<Self> {
        if Self::is_valid(input) {
            return Ok(Self(input.to_owned()));
        }
        Err(IdError::InvalidInput(format!(
            "identifier must be a 36-character UUID string or 1 to 32 characters, got: '{}'",
            input
        )))
    }

    /// Returns true if `input` is an acceptable object identifier.
    ///
    /// Shape rules:
    /// - Exactly 36 characters: must parse as a UUID and re-serialise to a
    ///   case-insensitively identical string. This rejects 36-character
    ///   strings with misplaced hyphens or non-hex digits.
    /// - 1 to 32 characters: accepted with no structural check.
    /// - Anything else (empty, 33 to 35, 37 or more): rejected.
    ///
    /// A 32-character identifier is accepted here even when its digits cannot
    /// be re-read as a UUID; that stricter check only runs during key
    /// derivation. See [`ObjectId::store_key`].
    ///
    /// # Arguments
    ///
    /// * `input` - Candidate identifier to check.
    ///
    /// # Returns
    ///
    /// Returns `true` if `input` is acceptable, otherwise `false`.
    pub fn is_valid(input: &str) -> bool {
        tracing::trace!("id - {}, length - {}", input, input.len());
        match input.len() {
            UUID_LEN => match Uuid::parse_str(input) {
                Ok(parsed) => parsed.hyphenated().to_string().eq_ignore_ascii_case(input),
                Err(_) => {
                    tracing::debug!("rejecting malformed UUID identifier - {}", input);
                    false
                }
            },
            1..=TENANT_ID_LEN => true,
            _ => false,
        }
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derives the datastore key for this identifier.
    ///
    /// Dispatches on the identifier shape:
    /// - 36 characters: hyphen-stripped UUID digits with the version nibble
    ///   removed, giving 31 hex digits.
    /// - 32 characters: the digits are re-grouped into a candidate UUID string
    ///   and must survive a parse round-trip before taking the UUID path.
    /// - 1 to 31 characters: the identifier itself, unchanged.
    ///
    /// # Returns
    ///
    /// Returns a [`StoreKey`] of at most 31 characters.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::NotUuidDerived`] if a 32-character identifier does
    /// not decode into a genuine UUID once re-grouped.
    pub fn store_key(&self) -> IdResult<StoreKey> {
        tracing::trace!("id - {}, length - {}", self.0, self.0.len());
        match self.0.len() {
            UUID_LEN => uuid_store_key(&self.0),
            TENANT_ID_LEN => tenant_store_key(&self.0),
            _ => Ok(StoreKey(self.0.clone())),
        }
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObjectId {
    /// Formats the identifier exactly as it was supplied.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ObjectId {
    type Err = IdError;

    /// Parses a string into an `ObjectId`, requiring an accepted shape.
    ///
    /// This is equivalent to calling [`ObjectId::parse`].
    ///
    /// # Errors
    ///
    /// Returns [`IdError::InvalidInput`] if the string matches neither shape.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse(s)
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(feature = "serde")]
impl Serialize for ObjectId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ObjectId::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// A datastore key derived from a validated [`ObjectId`].
///
/// Always at most 31 characters. UUID-derived keys are exactly 31 hex digits
/// with no hyphens; short tenant identifiers pass through unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StoreKey(String);

impl StoreKey {
    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for StoreKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(feature = "serde")]
impl Serialize for StoreKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for StoreKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s.is_empty() || s.len() > STORE_KEY_MAX_LEN {
            return Err(serde::de::Error::custom(format!(
                "datastore key must be 1 to {} characters, got {}",
                STORE_KEY_MAX_LEN,
                s.len()
            )));
        }
        Ok(StoreKey(s))
    }
}

/// Validates `id` and derives its datastore key in one step.
///
/// Convenience for callers holding a raw identifier string; equivalent to
/// [`ObjectId::parse`] followed by [`ObjectId::store_key`].
///
/// # Errors
///
/// Returns [`IdError::InvalidInput`] for identifiers matching neither accepted
/// shape, and [`IdError::NotUuidDerived`] for 32-character identifiers whose
/// digits do not form a UUID.
pub fn store_key_for(id: &str) -> IdResult<StoreKey> {
    ObjectId::parse(id)?.store_key()
}

/// Strips hyphens from a canonical UUID string and drops the version nibble.
fn uuid_store_key(id: &str) -> IdResult<StoreKey> {
    let mut digits: String = id.split('-').collect();
    if digits.len() != TENANT_ID_LEN {
        return Err(IdError::InvalidInput(format!(
            "expected {} hex digits after stripping hyphens, got {}: '{}'",
            TENANT_ID_LEN,
            digits.len(),
            id
        )));
    }
    digits.remove(UUID_VERSION_POS);
    debug_assert_eq!(digits.len(), STORE_KEY_MAX_LEN);
    Ok(StoreKey(digits))
}

/// Re-groups a 32-character tenant identifier into a candidate UUID string and
/// derives the key when its digits survive a parse round-trip.
fn tenant_store_key(id: &str) -> IdResult<StoreKey> {
    let candidate = regroup_as_uuid(id).ok_or_else(|| {
        tracing::debug!("tenant identifier does not split into UUID fields - {}", id);
        IdError::NotUuidDerived(id.to_owned())
    })?;

    let parsed = Uuid::parse_str(&candidate).map_err(|_| {
        tracing::debug!("invalid UUID digits in tenant identifier - {}", id);
        IdError::NotUuidDerived(id.to_owned())
    })?;

    // parse_str is lenient about other input forms at other lengths; require
    // an exact round-trip of the re-grouped candidate.
    if !parsed
        .hyphenated()
        .to_string()
        .eq_ignore_ascii_case(&candidate)
    {
        return Err(IdError::NotUuidDerived(id.to_owned()));
    }

    uuid_store_key(&candidate)
}

/// Re-inserts hyphens at the canonical `8-4-4-4-12` group boundaries.
///
/// Returns `None` when a group boundary does not fall on a character boundary,
/// which can only happen for multi-byte input.
fn regroup_as_uuid(id: &str) -> Option<String> {
    let time_low = id.get(..UUID_TIME_LOW)?;
    let time_mid = id.get(UUID_TIME_LOW..UUID_TIME_LOW + UUID_TIME_MID)?;
    let time_high = id.get(UUID_TIME_LOW + UUID_TIME_MID..UUID_TIME_LEN)?;
    let clock_seq = id.get(UUID_TIME_LEN..UUID_TIME_LEN + UUID_CLOCK_SEQ)?;
    let node = id.get(UUID_TIME_LEN + UUID_CLOCK_SEQ..TENANT_ID_LEN)?;
    Some(format!(
        "{}-{}-{}-{}-{}",
        time_low, time_mid, time_high, clock_seq, node
    ))
}
