//! Portal Services website API.
//!
//! [`WebsiteClient`] maps each remote endpoint to one method. Bodies are passed
//! through untouched; failed calls yield [`ERROR_SENTINEL`].

mod client;
mod types;

pub use client::WebsiteClient;
pub use types::{
    API_ROOT, ApiResponse, ERROR_CODE, ERROR_MESSAGE, ERROR_SENTINEL, ErrorDocument, Modo,
    Operacion,
};
