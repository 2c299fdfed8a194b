//! Engine error type.
//!
//! Every fallible surface operation returns [`SurfaceError`] so the UI layer
//! can catch it at the action boundary, log it, and notify the user without
//! crashing the view. Failed operations leave engine state unchanged.

use thiserror::Error;

use crate::doc::ObjectId;

/// Errors surfaced by snapshot and mutation operations.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The document could not be serialized into a snapshot.
    #[error("failed to encode surface snapshot: {0}")]
    Encode(#[source] serde_json::Error),

    /// A stored snapshot could not be parsed back into a document.
    #[error("failed to decode surface snapshot: {0}")]
    Decode(#[source] serde_json::Error),

    /// The referenced object is not present in the document.
    #[error("unknown object {0}")]
    UnknownObject(ObjectId),
}
