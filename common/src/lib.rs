//! Shared core of the MS Plantilla microservice.
//!
//! Both the `backend` (REST wrapper over the document collection) and the
//! `frontend` (browser client) depend on this crate. It holds the record model
//! and its wire format, the HTML template engine, prev/next navigation over the
//! last listing, and the display controller that turns fetched records into
//! the HTML handed to the page.

pub mod display;
pub mod gateway;
pub mod info;
pub mod model;
pub mod navigation;
pub mod requests;
pub mod template;
