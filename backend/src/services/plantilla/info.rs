//! Informational endpoints of the microservice. Neither touches the store.

use actix_web::{HttpResponse, Responder};
use common::model::{AboutInfo, HomeInfo};

/// Actix web handler for `GET /plantilla`.
///
/// # Returns
/// - `200 OK` with `{"mensaje": ...}`.
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(HomeInfo {
        mensaje: "Microservicio MS Plantilla: home".to_string(),
    })
}

/// Actix web handler for `GET /plantilla/acercade`.
///
/// # Returns
/// - `200 OK` with the message and the author's name, e-mail and date.
pub async fn about() -> impl Responder {
    HttpResponse::Ok().json(AboutInfo {
        mensaje: "Microservicio MS Plantilla: acerca de".to_string(),
        autor: "Juan Llavero Company".to_string(),
        email: "jlc00052@red.ujaen.es".to_string(),
        fecha: "30/03/2023".to_string(),
    })
}
