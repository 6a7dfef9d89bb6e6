//! Classification of failed API calls.
//!
//! Only two kinds are told apart, and only for diagnostics: the caller of an
//! endpoint sees the same error document either way.

use super::client::Reply;

/// Why an API call did not produce a usable body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallFailure {
    /// No HTTP response was obtained (connection refused, timeout, reset...)
    Transport(String),
    /// The server answered with a status other than 200
    Status(u16),
}

impl std::fmt::Display for CallFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CallFailure::Transport(reason) => {
                write!(f, "Error al conectar con el servidor de la API: {}", reason)
            }
            CallFailure::Status(code) => {
                write!(f, "Error en la respuesta de la API: {}", code)
            }
        }
    }
}

impl std::error::Error for CallFailure {}

/// Turns the outcome of a transport call into a body or a failure.
pub fn classify(outcome: anyhow::Result<Reply>) -> Result<String, CallFailure> {
    match outcome {
        Ok(reply) if reply.is_ok() => Ok(reply.body),
        Ok(reply) => Err(CallFailure::Status(reply.status)),
        // Alternate formatting keeps the whole context chain in one line.
        Err(e) => Err(CallFailure::Transport(format!("{:#}", e))),
    }
}
