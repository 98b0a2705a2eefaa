//! Envelope used by the document collection.
//!
//! Every stored record comes back as
//! `{"ref": {"@ref": {"id": "..."}}, "ts": 1680000000000000, "data": {...}}`
//! and a listing wraps the documents in `{"data": [...]}`. The backend writes
//! this shape and the frontend reads it, so both go through these types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefId {
    pub id: String,
}

/// The `{"@ref": {"id": ...}}` part of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    #[serde(rename = "@ref")]
    pub inner: RefId,
}

impl DocumentRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            inner: RefId { id: id.into() },
        }
    }

    pub fn id(&self) -> &str {
        &self.inner.id
    }
}

/// A stored document carrying a payload of type `T`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document<T> {
    #[serde(rename = "ref")]
    pub reference: DocumentRef,
    /// Write timestamp in microseconds. Absent in documents built client side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts: Option<i64>,
    pub data: T,
}

impl<T> Document<T> {
    pub fn id(&self) -> &str {
        self.reference.id()
    }
}

/// Result of a "list all" query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing<T> {
    pub data: Vec<T>,
}
