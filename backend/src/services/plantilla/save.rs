//! # Document Write Service
//!
//! Handlers for `POST /plantilla/setTodo` (update) and `POST /plantilla/crear`
//! (create). Bodies go through `body::decode`, so both accept JSON as well as
//! the form-encoded JSON that a no-cors browser `fetch` produces.
//!
//! `setTodo` only touches `nombre`, `apellido`, `pais` and `medallasOro`; the
//! birth date and the participation years of the stored document are kept.

use actix_web::web::Bytes;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use common::model::PersonData;
use common::requests::{NewPerson, PersonUpdate};
use log::info;
use serde_json::{json, Map, Value};

use super::{body, failure};
use crate::store::{DocumentStore, StoreError};

/// Actix web handler for `POST /plantilla/setTodo`.
///
/// # Arguments
/// * `req` - Used for its `Content-Type`, which selects the body decoder.
/// * `payload` - A `PersonUpdate` as JSON or as a form.
/// * `store` - The document collection.
///
/// # Returns
/// - `200 OK` with the updated document.
/// - `500 Internal Server Error` with `{"error": ...}` for an undecodable body
///   or an unknown id.
pub async fn set_all(
    req: HttpRequest,
    payload: Bytes,
    store: web::Data<DocumentStore>,
) -> impl Responder {
    let update: PersonUpdate = match body::decode(&req, &payload) {
        Ok(update) => update,
        Err(e) => return failure(e),
    };

    info!("Updating document {}", update.id);
    let store = store.get_ref().clone();
    match tokio::task::spawn_blocking(move || apply_update(&store, update)).await {
        Ok(Ok(document)) => HttpResponse::Ok().json(document),
        Ok(Err(e)) => failure(e),
        Err(e) => failure(format!("Task join error: {}", e)),
    }
}

/// Actix web handler for `POST /plantilla/crear`.
///
/// # Returns
/// - `200 OK` with the new document, whose id is a fresh UUID.
/// - `500 Internal Server Error` with `{"error": ...}` when the body is not a
///   valid `NewPerson`.
pub async fn create(
    req: HttpRequest,
    payload: Bytes,
    store: web::Data<DocumentStore>,
) -> impl Responder {
    let new: NewPerson = match body::decode(&req, &payload) {
        Ok(new) => new,
        Err(e) => return failure(e),
    };

    let store = store.get_ref().clone();
    let result = tokio::task::spawn_blocking(move || {
        let data = serde_json::to_value(PersonData::from(new))?;
        store.create(data)
    })
    .await;

    match result {
        Ok(Ok(document)) => {
            info!("Created document {}", document.id());
            HttpResponse::Ok().json(document)
        }
        Ok(Err(e)) => failure(e),
        Err(e) => failure(format!("Task join error: {}", e)),
    }
}

/// Writes the four editable fields; the rest of the stored data is kept.
fn apply_update(
    store: &DocumentStore,
    update: PersonUpdate,
) -> Result<common::model::Document<Value>, StoreError> {
    let changes: Map<String, Value> = [
        ("nombre", json!(update.name)),
        ("apellido", json!(update.surname)),
        ("pais", json!(update.country)),
        ("medallasOro", json!(update.gold_medals)),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value))
    .collect();

    store.update(&update.id, changes)
}
