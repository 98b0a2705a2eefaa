//! Domain records and the document envelope they travel in.

pub mod document;
pub mod error;
pub mod info;
pub mod person;

pub use document::{Document, DocumentRef, Listing};
pub use error::ModelError;
pub use info::{AboutInfo, HomeInfo};
pub use person::{BirthDate, Person, PersonData};
