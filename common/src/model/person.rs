//! The athlete record ("persona") shown by the microservice.
//!
//! On the wire a person is a [`Document`] whose `data` holds the Spanish field
//! names used by the collection (`nombre`, `apellido`, `fechaNacimiento`,
//! `pais`, `partMundiales`, `medallasOro`). Decoding goes through
//! [`Person::from_json`], which fails on the first missing or malformed field
//! instead of letting an incomplete record reach the templates.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::document::{Document, DocumentRef};
use super::error::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthDate {
    #[serde(rename = "dia")]
    pub day: u32,
    #[serde(rename = "mes")]
    pub month: u32,
    #[serde(rename = "año")]
    pub year: u32,
}

/// Renders as `day/month/year`, without zero padding.
impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.day, self.month, self.year)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonData {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "apellido")]
    pub surname: String,
    #[serde(rename = "fechaNacimiento")]
    pub birth_date: BirthDate,
    #[serde(rename = "pais")]
    pub country: String,
    /// Years of participation in world championships, in stored order.
    #[serde(rename = "partMundiales")]
    pub participations: Vec<u32>,
    #[serde(rename = "medallasOro")]
    pub gold_medals: u32,
}

impl PersonData {
    /// Participation years joined by bare commas (`2010,2014`).
    pub fn participations_text(&self) -> String {
        self.participations
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Reads the `data` object of a person document.
    pub fn from_json(data: &Value) -> Result<Self, ModelError> {
        let birth = field(data, "fechaNacimiento")?;
        if !birth.is_object() {
            return Err(ModelError::InvalidField("fechaNacimiento"));
        }

        let participations = match field(data, "partMundiales")? {
            Value::Array(years) => years
                .iter()
                .map(|year| unsigned(year).ok_or(ModelError::InvalidField("partMundiales")))
                .collect::<Result<Vec<_>, _>>()?,
            _ => return Err(ModelError::InvalidField("partMundiales")),
        };

        Ok(Self {
            name: text(data, "nombre")?,
            surname: text(data, "apellido")?,
            birth_date: BirthDate {
                day: number(birth, "dia", "fechaNacimiento.dia")?,
                month: number(birth, "mes", "fechaNacimiento.mes")?,
                year: number(birth, "año", "fechaNacimiento.año")?,
            },
            country: text(data, "pais")?,
            participations,
            gold_medals: number(data, "medallasOro", "medallasOro")?,
        })
    }
}

/// A record with its collection identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: String,
    pub data: PersonData,
}

impl Person {
    pub fn new(id: impl Into<String>, data: PersonData) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }

    /// Decodes a full document (`ref` + `data`).
    pub fn from_json(document: &Value) -> Result<Self, ModelError> {
        let id = match document.pointer("/ref/@ref/id") {
            Some(Value::String(id)) => id.clone(),
            Some(Value::Number(id)) => id.to_string(),
            Some(_) => return Err(ModelError::InvalidField("ref")),
            None => return Err(ModelError::MissingField("ref")),
        };
        let data = PersonData::from_json(field(document, "data")?)?;

        Ok(Self { id, data })
    }

    pub fn to_document(&self) -> Document<&PersonData> {
        Document {
            reference: DocumentRef::new(self.id.clone()),
            ts: None,
            data: &self.data,
        }
    }
}

impl Serialize for Person {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_document().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Person {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Person::from_json(&raw).map_err(D::Error::custom)
    }
}

fn field<'a>(object: &'a Value, key: &'static str) -> Result<&'a Value, ModelError> {
    match object.get(key) {
        Some(Value::Null) | None => Err(ModelError::MissingField(key)),
        Some(value) => Ok(value),
    }
}

fn text(object: &Value, key: &'static str) -> Result<String, ModelError> {
    field(object, key)?
        .as_str()
        .map(str::to_string)
        .ok_or(ModelError::InvalidField(key))
}

fn number(object: &Value, key: &'static str, path: &'static str) -> Result<u32, ModelError> {
    let value = object.get(key).filter(|v| !v.is_null());
    let value = value.ok_or(ModelError::MissingField(path))?;
    unsigned(value).ok_or(ModelError::InvalidField(path))
}

/// Accepts `3` as well as `"3"`: values edited in a form arrive as text.
pub(crate) fn unsigned(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => unsigned_text(s),
        _ => None,
    }
}

/// Parses the text of a numeric input, ignoring surrounding blanks.
pub(crate) fn unsigned_text(text: &str) -> Option<u32> {
    text.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document() -> Value {
        json!({
            "ref": { "@ref": { "id": "359344232144633933" } },
            "ts": 1680187446160000i64,
            "data": {
                "nombre": "Shaun",
                "apellido": "White",
                "fechaNacimiento": { "dia": 3, "mes": 9, "año": 1986 },
                "pais": "Estados Unidos",
                "partMundiales": [2006, 2010, 2018],
                "medallasOro": 3
            }
        })
    }

    #[test]
    fn decodes_a_complete_document() {
        let person = Person::from_json(&document()).unwrap();
        assert_eq!(person.id, "359344232144633933");
        assert_eq!(person.data.name, "Shaun");
        assert_eq!(person.data.birth_date.to_string(), "3/9/1986");
        assert_eq!(person.data.participations_text(), "2006,2010,2018");
        assert_eq!(person.data.gold_medals, 3);
    }

    #[test]
    fn missing_field_is_reported_by_wire_name() {
        let mut doc = document();
        doc["data"].as_object_mut().unwrap().remove("pais");
        assert_eq!(
            Person::from_json(&doc),
            Err(ModelError::MissingField("pais"))
        );

        let mut doc = document();
        doc["data"]["fechaNacimiento"]
            .as_object_mut()
            .unwrap()
            .remove("año");
        assert_eq!(
            Person::from_json(&doc),
            Err(ModelError::MissingField("fechaNacimiento.año"))
        );
    }

    #[test]
    fn numeric_strings_are_accepted_for_counts() {
        let mut doc = document();
        doc["data"]["medallasOro"] = json!("5");
        doc["data"]["partMundiales"] = json!(["2014", 2018]);
        let person = Person::from_json(&doc).unwrap();
        assert_eq!(person.data.gold_medals, 5);
        assert_eq!(person.data.participations, vec![2014, 2018]);
    }

    #[test]
    fn wrong_types_are_rejected() {
        let mut doc = document();
        doc["data"]["partMundiales"] = json!("2010");
        assert_eq!(
            Person::from_json(&doc),
            Err(ModelError::InvalidField("partMundiales"))
        );

        let mut doc = document();
        doc["ref"] = json!({ "@ref": { "id": true } });
        assert_eq!(Person::from_json(&doc), Err(ModelError::InvalidField("ref")));
    }

    #[test]
    fn serializes_back_into_the_document_shape() {
        let person: Person = serde_json::from_value(document()).unwrap();
        let value = serde_json::to_value(&person).unwrap();
        assert_eq!(value["ref"]["@ref"]["id"], "359344232144633933");
        assert_eq!(value["data"]["fechaNacimiento"]["año"], 1986);
        assert!(value.get("ts").is_none());
    }

    #[test]
    fn numeric_text_is_trimmed_and_must_be_unsigned() {
        assert_eq!(unsigned_text(" 7 "), Some(7));
        assert_eq!(unsigned_text("-1"), None);
        assert_eq!(unsigned_text(""), None);
        assert_eq!(unsigned(&json!(" 12")), Some(12));
    }
}
