use serde::{Deserialize, Serialize};

/// Payload of `GET /plantilla/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeInfo {
    pub mensaje: String,
}

/// Payload of `GET /plantilla/acercade`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutInfo {
    pub mensaje: String,
    pub autor: String,
    pub email: String,
    pub fecha: String,
}

impl AboutInfo {
    /// Null object shown whenever the downloaded data is not usable.
    pub fn invalid() -> Self {
        Self {
            mensaje: "Datos Descargados No válidos".to_string(),
            autor: String::new(),
            email: String::new(),
            fecha: String::new(),
        }
    }
}

impl HomeInfo {
    pub fn invalid() -> Self {
        Self {
            mensaje: AboutInfo::invalid().mensaje,
        }
    }
}
