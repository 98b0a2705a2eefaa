//! Decoding of `POST` bodies.
//!
//! Browsers post the record either as `application/json` or, from a no-cors
//! `fetch`, as a form whose body is the JSON text itself. In the second case
//! the form parser sees a single key (the JSON) with an empty value. A regular
//! form with `key=value` pairs is also accepted and read field by field.
//!
//! The JSON-as-key path goes through the regular form decoder first, exactly
//! as an urlencoded body parser on the browser's side of the contract would:
//! a `+` inside a string value arrives as a space, and an unencoded `&` or `=`
//! splits the JSON and makes the body undecodable.

use actix_web::error::QueryPayloadError;
use actix_web::{web, HttpMessage, HttpRequest};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BodyError {
    #[error("request body is not UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("malformed form body: {0}")]
    Form(#[from] QueryPayloadError),
    #[error("malformed JSON body: {0}")]
    Json(#[from] serde_json::Error),
    #[error("empty request body")]
    Empty,
}

pub fn decode<T: DeserializeOwned>(req: &HttpRequest, body: &[u8]) -> Result<T, BodyError> {
    if req.content_type() == "application/json" {
        return Ok(serde_json::from_slice(body)?);
    }

    let text = std::str::from_utf8(body)?;
    let pairs = web::Query::<Vec<(String, String)>>::from_query(text)?.into_inner();

    match pairs.first() {
        None => Err(BodyError::Empty),
        Some((key, value)) if value.is_empty() => Ok(serde_json::from_str(key)?),
        Some(_) => {
            let fields: Map<String, Value> = pairs
                .into_iter()
                .map(|(key, value)| (key, Value::String(value)))
                .collect();
            Ok(serde_json::from_value(Value::Object(fields))?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use common::requests::PersonUpdate;

    fn form() -> HttpRequest {
        TestRequest::default()
            .insert_header(("Content-Type", "application/x-www-form-urlencoded"))
            .to_http_request()
    }

    #[test]
    fn json_content_type_is_parsed_directly() {
        let req = TestRequest::default()
            .insert_header(("Content-Type", "application/json; charset=utf-8"))
            .to_http_request();
        let body = br#"{"id":"1","nombre":"a","apellido":"b","pais":"c","medallasOro":2}"#;
        let update: PersonUpdate = decode(&req, body).unwrap();
        assert_eq!(update.gold_medals, 2);
    }

    #[test]
    fn json_as_the_only_form_key() {
        let body = br#"{"id":"1","nombre":"a","apellido":"b","pais":"c","medallasOro":"2"}"#;
        let update: PersonUpdate = decode(&form(), body).unwrap();
        assert_eq!(update.id, "1");
        assert_eq!(update.gold_medals, 2);
    }

    #[test]
    fn json_as_form_key_goes_through_form_decoding() {
        let body = br#"{"id":"1","nombre":"Jean+Luc","apellido":"b","pais":"c","medallasOro":1}"#;
        let update: PersonUpdate = decode(&form(), body).unwrap();
        assert_eq!(update.name, "Jean Luc");

        let body = br#"{"id":"1","nombre":"a","apellido":"Smith&Co","pais":"c","medallasOro":1}"#;
        assert!(matches!(
            decode::<PersonUpdate>(&form(), body),
            Err(BodyError::Json(_))
        ));
    }

    #[test]
    fn regular_form_fields() {
        let body = b"id=1&nombre=Ana%20Mar%C3%ADa&apellido=b&pais=c&medallasOro=7";
        let update: PersonUpdate = decode(&form(), body).unwrap();
        assert_eq!(update.name, "Ana María");
        assert_eq!(update.gold_medals, 7);
    }

    #[test]
    fn empty_and_broken_bodies_fail() {
        assert!(matches!(
            decode::<PersonUpdate>(&form(), b""),
            Err(BodyError::Empty)
        ));
        assert!(matches!(
            decode::<PersonUpdate>(&form(), b"{\"id\":"),
            Err(BodyError::Json(_))
        ));
    }
}
