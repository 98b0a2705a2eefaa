//! Request payloads accepted by the microservice.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::model::person::unsigned;
use crate::model::{BirthDate, PersonData};

/// Body of `POST /plantilla/setTodo`: the editable subset of a person.
///
/// `medallasOro` comes straight from a number input, so both `3` and `"3"`
/// are accepted when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonUpdate {
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "apellido")]
    pub surname: String,
    #[serde(rename = "pais")]
    pub country: String,
    #[serde(rename = "medallasOro", deserialize_with = "lenient_u32")]
    pub gold_medals: u32,
}

/// Body of `POST /plantilla/crear`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPerson {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "apellido")]
    pub surname: String,
    #[serde(rename = "fechaN")]
    pub birth_date: BirthDate,
    #[serde(rename = "pais")]
    pub country: String,
    #[serde(rename = "partMundiales", default)]
    pub participations: Vec<u32>,
    #[serde(rename = "medallasOro", deserialize_with = "lenient_u32")]
    pub gold_medals: u32,
}

impl From<NewPerson> for PersonData {
    fn from(new: NewPerson) -> Self {
        PersonData {
            name: new.name,
            surname: new.surname,
            birth_date: new.birth_date,
            country: new.country,
            participations: new.participations,
            gold_medals: new.gold_medals,
        }
    }
}

fn lenient_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let raw = Value::deserialize(deserializer)?;
    unsigned(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("`{}` no es un número de medallas válido", raw))
    })
}
