//! # Document Retrieval Service
//!
//! Handlers for `GET /plantilla/getTodas`, `GET /plantilla/test_db` and
//! `GET /plantilla/getPorId/{id_persona}`.
//!
//! The documents are returned as stored, inside the envelope from
//! `common::model::Document`; decoding them into persons is left to the
//! client. SQLite work runs on the blocking pool through
//! `tokio::task::spawn_blocking` so the async workers are never stalled by
//! file I/O.

use actix_web::{web, HttpResponse, Responder};
use common::model::Listing;
use log::info;

use super::failure;
use crate::store::DocumentStore;

/// `GET /plantilla/getTodas`: every document of the collection.
pub async fn all(store: web::Data<DocumentStore>) -> impl Responder {
    list(store).await
}

/// `GET /plantilla/test_db`: same listing, kept as a connectivity probe.
pub async fn test_db(store: web::Data<DocumentStore>) -> impl Responder {
    info!("Database probe requested");
    list(store).await
}

async fn list(store: web::Data<DocumentStore>) -> HttpResponse {
    let store = store.get_ref().clone();
    match tokio::task::spawn_blocking(move || store.all()).await {
        Ok(Ok(data)) => HttpResponse::Ok().json(Listing { data }),
        Ok(Err(e)) => failure(e),
        Err(e) => failure(format!("Task join error: {}", e)),
    }
}

/// `GET /plantilla/getPorId/{id_persona}`: a single document.
pub async fn by_id(id: web::Path<String>, store: web::Data<DocumentStore>) -> impl Responder {
    let id = id.into_inner();
    let store = store.get_ref().clone();
    match tokio::task::spawn_blocking(move || store.get(&id)).await {
        Ok(Ok(document)) => HttpResponse::Ok().json(document),
        Ok(Err(e)) => failure(e),
        Err(e) => failure(format!("Task join error: {}", e)),
    }
}
