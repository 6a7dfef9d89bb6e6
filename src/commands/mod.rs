//! Command line glue: settings and endpoint dispatch.

mod config;
mod endpoint;

pub use config::Config;
pub use endpoint::{Endpoint, Output, execute};
