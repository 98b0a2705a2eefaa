//! `Gateway` implementation over HTTP.
//!
//! The base URL is fixed at compile time through `PLANTILLA_API_GATEWAY`;
//! when unset, requests go to the origin that served the page.

use common::gateway::{paths, Gateway, GatewayError};
use common::model::Person;
use common::requests::PersonUpdate;
use gloo_net::http::{Request, Response};
use serde_json::Value;

fn api_gateway() -> &'static str {
    option_env!("PLANTILLA_API_GATEWAY").unwrap_or("")
}

#[derive(Debug, Clone, Default)]
pub struct HttpGateway;

impl HttpGateway {
    fn url(&self, path: &str) -> String {
        format!("{}{}{}", api_gateway(), paths::SCOPE, path)
    }

    async fn get_json(&self, path: &str) -> Result<Value, GatewayError> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| GatewayError::Connectivity(e.to_string()))?;
        read_json(response).await
    }
}

async fn read_json(response: Response) -> Result<Value, GatewayError> {
    if !response.ok() {
        return Err(GatewayError::MalformedResponse(format!(
            "HTTP {} {}",
            response.status(),
            response.text().await.unwrap_or_default()
        )));
    }
    response
        .json::<Value>()
        .await
        .map_err(|e| GatewayError::MalformedResponse(e.to_string()))
}

fn to_person(document: &Value) -> Result<Person, GatewayError> {
    Person::from_json(document).map_err(|e| GatewayError::MalformedResponse(e.to_string()))
}

impl Gateway for HttpGateway {
    async fn fetch_many(&self) -> Result<Vec<Person>, GatewayError> {
        let listing = self.get_json(paths::GET_ALL).await?;
        listing
            .get("data")
            .and_then(Value::as_array)
            .ok_or_else(|| GatewayError::MalformedResponse("listado sin `data`".to_string()))?
            .iter()
            .map(to_person)
            .collect()
    }

    async fn fetch_one(&self, id: &str) -> Result<Person, GatewayError> {
        let document = self
            .get_json(&format!("{}/{}", paths::GET_BY_ID, id))
            .await?;
        to_person(&document)
    }

    async fn save(&self, update: &PersonUpdate) -> Result<(), GatewayError> {
        let response = Request::post(&self.url(paths::SET_ALL))
            .json(update)
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?
            .send()
            .await
            .map_err(|e| GatewayError::Connectivity(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(GatewayError::MalformedResponse(format!(
                "HTTP {}",
                response.status()
            )))
        }
    }

    async fn fetch_home(&self) -> Result<Value, GatewayError> {
        self.get_json(paths::HOME).await
    }

    async fn fetch_about(&self) -> Result<Value, GatewayError> {
        self.get_json(paths::ABOUT).await
    }
}
