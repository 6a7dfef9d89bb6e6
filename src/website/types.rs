use serde::{Deserialize, Serialize};
use std::fmt;

/// Root of the Portal Services API.
pub const API_ROOT: &str = "https://inmostore-api.psweb.me/";

/// `Operacion.codigo` carried by the error document.
pub const ERROR_CODE: i32 = -1;

/// `Operacion.mensaje` carried by the error document.
pub const ERROR_MESSAGE: &str = "Error en la llamada a la API";

/// Error document returned in place of a body whenever a call fails.
///
/// Every failure path hands out this exact text, so callers can match on
/// `Operacion.codigo == -1`.
pub const ERROR_SENTINEL: &str =
    r#"{"Operacion":{"codigo":-1,"mensaje":"Error en la llamada a la API"},"resultado":null,"items":[]}"#;

/// Outcome header present in every API response.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Operacion {
    pub codigo: i32,
    #[serde(rename = "newItemId", default, skip_serializing_if = "Option::is_none")]
    pub new_item_id: Option<String>,
    #[serde(rename = "affectedRows", default, skip_serializing_if = "Option::is_none")]
    pub affected_rows: Option<i64>,
    pub mensaje: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detalle: Option<String>,
}

/// Typed view of [`ERROR_SENTINEL`].
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ErrorDocument {
    #[serde(rename = "Operacion")]
    pub operacion: Operacion,
    pub resultado: Option<serde_json::Value>,
    pub items: Vec<serde_json::Value>,
}

impl ErrorDocument {
    pub fn sentinel() -> Self {
        Self {
            operacion: Operacion {
                codigo: ERROR_CODE,
                new_item_id: None,
                affected_rows: None,
                mensaje: ERROR_MESSAGE.to_string(),
                detalle: None,
            },
            resultado: None,
            items: Vec::new(),
        }
    }
}

/// Text returned by an endpoint method.
///
/// The client never parses bodies; `Body` holds the server's bytes as they
/// arrived and `Failed` stands for [`ERROR_SENTINEL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse {
    Body(String),
    Failed,
}

impl ApiResponse {
    pub fn as_str(&self) -> &str {
        match self {
            ApiResponse::Body(body) => body,
            ApiResponse::Failed => ERROR_SENTINEL,
        }
    }

    /// True when the call failed locally and the error document was produced.
    pub fn is_error(&self) -> bool {
        matches!(self, ApiResponse::Failed)
    }

    pub fn into_string(self) -> String {
        match self {
            ApiResponse::Body(body) => body,
            ApiResponse::Failed => ERROR_SENTINEL.to_string(),
        }
    }
}

impl AsRef<str> for ApiResponse {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ApiResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of object scenes and images hang off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modo {
    Inmueble,
    Proyecto,
}

impl Modo {
    pub fn code(self) -> i32 {
        match self {
            Modo::Inmueble => 0,
            Modo::Proyecto => 1,
        }
    }
}

impl From<Modo> for i32 {
    fn from(modo: Modo) -> Self {
        modo.code()
    }
}
