//! # MS Plantilla Service Module
//!
//! This module aggregates the API endpoints of the microservice. Every route
//! lives under the `/plantilla` path and answers JSON; the record routes read
//! and write the document collection held in `store::DocumentStore`.
//!
//! ## Sub-modules:
//! - `info`: informational endpoints (`home`, `acerca de`).
//! - `get`: listing and single-document retrieval.
//! - `save`: update (`setTodo`) and creation (`crear`) of documents.
//! - `body`: decoding of request bodies posted either as JSON or as a form.

mod body;
mod get;
mod info;
mod save;

use actix_web::middleware::DefaultHeaders;
use actix_web::web::{get, post, scope};
use actix_web::{HttpResponse, Scope};
use common::gateway::paths;
use log::error;
use std::fmt::Display;

/// Configures and returns the Actix `Scope` for the microservice routes.
///
/// # Registered Routes:
///
/// Paths are matched without a trailing slash; the app trims it first with
/// `middleware::NormalizePath::trim()`, so `POST /plantilla/setTodo/` lands
/// on the same handler as `POST /plantilla/setTodo`.
///
/// *   **`GET ""`** (the scope itself) and **`GET /acercade`**: informational
///     messages.
/// *   **`GET /test_db`** and **`GET /getTodas`**: every document of the
///     collection as `{"data": [...]}`.
/// *   **`GET /getPorId/{idPersona}`**: one document.
/// *   **`POST /setTodo`**: updates `nombre`, `apellido`, `pais` and
///     `medallasOro` of the document named by `id`.
/// *   **`POST /crear`**: creates a new document.
pub fn configure_routes() -> Scope {
    scope(paths::SCOPE)
        .route(paths::HOME, get().to(info::home))
        .route(paths::ABOUT, get().to(info::about))
        .route(paths::TEST_DB, get().to(get::test_db))
        .route(paths::GET_ALL, get().to(get::all))
        .route(
            &format!("{}/{{id_persona}}", paths::GET_BY_ID),
            get().to(get::by_id),
        )
        .route(paths::SET_ALL, post().to(save::set_all))
        .route(paths::CREATE, post().to(save::create))
}

/// Headers that let any origin call the API.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add((
            "Access-Control-Allow-Headers",
            "Origin, X-Requested-With, Content-Type, Accept",
        ))
}

/// `500` with the `{"error": ...}` body used by every failing route.
pub(crate) fn failure(description: impl Display) -> HttpResponse {
    let description = description.to_string();
    error!("{}", description);
    HttpResponse::InternalServerError().json(serde_json::json!({ "error": description }))
}
