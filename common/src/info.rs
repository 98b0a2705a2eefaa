//! Home and "about" views.
//!
//! The payloads of these views are checked before use: anything that is not
//! an object with every expected text field is replaced by a null object
//! whose message reads "Datos Descargados No válidos".

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::model::{AboutInfo, HomeInfo};

pub const HOME_TITLE: &str = "Plantilla Home";
pub const ABOUT_TITLE: &str = "Plantilla Acerca de";

/// Outcome of checking a downloaded payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validated<T> {
    Valid(T),
    Fallback,
}

/// Types with a placeholder value for unusable data.
pub trait NullObject {
    fn null_object() -> Self;
}

impl NullObject for HomeInfo {
    fn null_object() -> Self {
        HomeInfo::invalid()
    }
}

impl NullObject for AboutInfo {
    fn null_object() -> Self {
        AboutInfo::invalid()
    }
}

impl<T: NullObject> Validated<T> {
    pub fn or_invalid(self) -> T {
        match self {
            Validated::Valid(value) => value,
            Validated::Fallback => T::null_object(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Validated::Fallback)
    }
}

pub fn validate_home(raw: Option<&Value>) -> Validated<HomeInfo> {
    validate(raw)
}

pub fn validate_about(raw: Option<&Value>) -> Validated<AboutInfo> {
    validate(raw)
}

fn validate<T: DeserializeOwned>(raw: Option<&Value>) -> Validated<T> {
    match raw {
        Some(value @ Value::Object(_)) => serde_json::from_value(value.clone())
            .map(Validated::Valid)
            .unwrap_or(Validated::Fallback),
        _ => Validated::Fallback,
    }
}

pub fn about_html(about: &AboutInfo) -> String {
    format!(
        "<div>
    <p>{}</p>
    <ul>
        <li><b>Autor/a</b>: {}</li>
        <li><b>E-mail</b>: {}</li>
        <li><b>Fecha</b>: {}</li>
    </ul>
    </div>
    ",
        about.mensaje, about.autor, about.email, about.fecha
    )
}
