//! Collaborator that talks to the API gateway, and the routes it uses.
//!
//! The frontend implements [`Gateway`] over HTTP; the display core only sees
//! records, raw info payloads and [`GatewayError`]s.

use serde_json::Value;
use thiserror::Error;

use crate::model::Person;
use crate::requests::PersonUpdate;

/// Paths served by the microservice, relative to the gateway root.
///
/// The server trims trailing slashes before routing, so `/plantilla/` and
/// `/setTodo/` reach the same handlers as their bare forms.
pub mod paths {
    pub const SCOPE: &str = "/plantilla";
    pub const HOME: &str = "";
    pub const ABOUT: &str = "/acercade";
    pub const TEST_DB: &str = "/test_db";
    pub const GET_ALL: &str = "/getTodas";
    pub const GET_BY_ID: &str = "/getPorId";
    pub const SET_ALL: &str = "/setTodo";
    pub const CREATE: &str = "/crear";
}

/// Message shown to the user for any failed round trip.
pub const ALERT_MESSAGE: &str = "Error: No se han podido acceder al API Gateway";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("no se ha podido contactar con el API Gateway: {0}")]
    Connectivity(String),
    #[error("respuesta no válida del API Gateway: {0}")]
    MalformedResponse(String),
}

impl GatewayError {
    /// Both kinds are reported the same way.
    pub fn alert_message(&self) -> &'static str {
        ALERT_MESSAGE
    }
}

#[allow(async_fn_in_trait)]
pub trait Gateway {
    async fn fetch_many(&self) -> Result<Vec<Person>, GatewayError>;

    async fn fetch_one(&self, id: &str) -> Result<Person, GatewayError>;

    /// Sends an update. The response body is not relied upon.
    async fn save(&self, update: &PersonUpdate) -> Result<(), GatewayError>;

    async fn fetch_home(&self) -> Result<Value, GatewayError>;

    async fn fetch_about(&self) -> Result<Value, GatewayError>;
}

/// Saves `update` and fetches the stored record again by id.
pub async fn save_and_reload<G: Gateway>(
    gateway: &G,
    update: &PersonUpdate,
) -> Result<Person, GatewayError> {
    gateway.save(update).await?;
    gateway.fetch_one(&update.id).await
}
