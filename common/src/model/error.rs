use thiserror::Error;

/// Reasons a JSON payload cannot be turned into a domain record.
///
/// Field names are reported with their wire spelling (`fechaNacimiento.dia`,
/// `medallasOro`, ...) so the message can be matched against the response body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("falta el campo `{0}`")]
    MissingField(&'static str),
    #[error("el campo `{0}` no tiene un valor válido")]
    InvalidField(&'static str),
}
