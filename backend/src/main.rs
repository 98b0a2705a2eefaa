mod config;
mod services;
mod store;

use crate::config::Config;
use crate::services::plantilla;
use crate::store::{seed, DocumentStore};
use actix_web::{middleware, web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{error, info};
use mime_guess::{from_path, mime, Mime};
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");
const INDEX: &str = "index.html";

/// Looks a path up in the embedded bundle. Paths that name no file resolve
/// to `index.html`.
fn bundle_file(path: &str) -> Option<(&'static [u8], Mime)> {
    let path = path.trim_start_matches('/');
    STATIC_DIR
        .get_file(path)
        .filter(|_| !path.is_empty())
        .map(|file| (file.contents(), from_path(path).first_or_octet_stream()))
        .or_else(|| {
            STATIC_DIR
                .get_file(INDEX)
                .map(|index| (index.contents(), mime::TEXT_HTML_UTF_8))
        })
}

/// Default service: everything outside `/plantilla` is the front-end.
async fn serve_bundle(req: HttpRequest) -> HttpResponse {
    match bundle_file(req.path()) {
        Some((contents, kind)) => HttpResponse::Ok().content_type(kind.as_ref()).body(contents),
        None => HttpResponse::NotFound().body("Not Found"),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::load();
    let url = config.url();

    let store = DocumentStore::new(&config.db_path, config.collection.as_str());
    store
        .init()
        .map_err(|e| std::io::Error::other(format!("cannot open {}: {}", config.db_path, e)))?;

    if config.seed {
        // A failed seed leaves an empty collection; the API still works.
        if let Err(e) = seed::seed_if_empty(&store) {
            error!("Could not seed collection {}: {}", store.collection(), e);
        }
    }

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                error!("Could not open browser: {}", e);
            }
        });
    }

    info!(
        "Server running at {} (collection {} in {})",
        url, config.collection, config.db_path
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(plantilla::cors_headers())
            .wrap(middleware::NormalizePath::trim())
            .app_data(web::Data::new(store.clone()))
            .service(plantilla::configure_routes())
            .default_service(web::route().to(serve_bundle))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
