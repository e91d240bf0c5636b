//! Identifier validation and datastore-key encoding.
//!
//! VNA sits between a northbound API and an internal key-value datastore whose
//! key syntax caps keys *below* 32 characters, too short for the canonical
//! 36-character hyphenated UUID strings the API exchanges.
//!
//! This crate provides:
//! - A small wrapper type ([`ObjectId`]) that *guarantees* an accepted
//!   identifier shape once constructed.
//! - A derived datastore key ([`StoreKey`]) that always fits the datastore's
//!   key-length limit.
//!
//! ## Accepted identifier shapes
//! - *Canonical UUID string*: exactly 36 characters, `8-4-4-4-12` hex groups
//!   separated by hyphens. Example: `550e8400-e29b-41d4-a716-446655440000`.
//!   Upper and mixed case hex digits are accepted.
//! - *Tenant identifier*: 1 to 32 characters with no structural constraint.
//!   Identifiers of exactly 32 characters are expected to be the condensed hex
//!   digits of a UUID as handed out by the external identity service; that
//!   expectation is only checked when a key is derived.
//!
//! ## Key derivation
//! For a UUID-shaped identifier the key is the hyphen-stripped 32-digit form
//! with the version nibble (offset 12 of the condensed form) removed, giving
//! 31 hex digits. Shorter identifiers already fit and pass through unchanged.
//!
//! Notes:
//! - Derivation is one-way: no decode path from a [`StoreKey`] back to the
//!   identifier exists.
//! - A 32-character identifier can be *valid* yet *unconvertible* when its
//!   digits do not form a genuine UUID. See [`ObjectId::store_key`].

mod object_id;

// Re-export public types
pub use object_id::{ObjectId, StoreKey, store_key_for};

/// Error type for identifier operations.
#[derive(Debug, thiserror::Error)]
pub enum IdError {
    /// Invalid input provided
    #[error("invalid identifier: {0}")]
    InvalidInput(String),
    /// A 32-character tenant identifier whose digits do not form a UUID
    #[error("tenant identifier is not UUID-derived: {0}")]
    NotUuidDerived(String),
}

/// Result type for identifier operations.
pub type IdResult<T> = Result<T, IdError>;
