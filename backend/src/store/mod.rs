//! Document collection persisted in SQLite.
//!
//! The microservice is a thin REST wrapper over a document database: every
//! record is a JSON object stored under a generated id, grouped by
//! collection, and returned inside the `{"ref", "ts", "data"}` envelope from
//! `common::model::Document`.
//!
//! - `documents`: the `DocumentStore` with list/get/update/create.
//! - `seed`: sample athletes inserted into an empty collection.

mod documents;
pub mod seed;

pub use documents::{DocumentStore, StoreError};
