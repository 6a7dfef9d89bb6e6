//! Website API client.
//!
//! Diagnostics here are `tracing` events rather than `log` records. The
//! `log` feature of `tracing` forwards them to `env_logger` in the binary,
//! while tests install a scoped subscriber to assert on them.

use std::fmt;

use anyhow::Result;
use tracing::{debug, error};

use super::types::{API_ROOT, ApiResponse};
use crate::http::{HttpClient, Transport, USER_AGENT, build_http_client, classify};

/// Path segment accepted by the URL builder.
type Segment<'a> = &'a (dyn fmt::Display + Sync);

/// Client for the Portal Services website API.
///
/// Every endpoint is a GET on `{root}{path}/{params...}/{api_key}`. Failures
/// never surface as errors: they are logged and answered with
/// [`ERROR_SENTINEL`](super::ERROR_SENTINEL).
pub struct WebsiteClient<T: Transport = HttpClient> {
    account_id: String,
    api_key: String,
    api_root: String,
    transport: T,
}

impl WebsiteClient<HttpClient> {
    /// Errors only when the HTTP client itself cannot be built.
    pub fn new(account_id: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::with_api_root(account_id, api_key, API_ROOT)
    }

    /// Same as [`WebsiteClient::new`] against a different API root.
    pub fn with_api_root(
        account_id: impl Into<String>,
        api_key: impl Into<String>,
        api_root: impl Into<String>,
    ) -> Result<Self> {
        let transport = build_http_client(USER_AGENT)?;
        Ok(Self::with_transport(account_id, api_key, api_root, transport))
    }
}

impl<T: Transport> WebsiteClient<T> {
    #[tracing::instrument(skip_all)]
    pub fn with_transport(
        account_id: impl Into<String>,
        api_key: impl Into<String>,
        api_root: impl Into<String>,
        transport: T,
    ) -> Self {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            error!("*** No se ha detectado la configuración del sitio web. ***");
        }

        let mut api_root = api_root.into();
        if !api_root.ends_with('/') {
            api_root.push('/');
        }

        Self {
            account_id: account_id.into(),
            api_key,
            api_root,
            transport,
        }
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// False when the API key is empty or blank; every call will then fail.
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// `{root}{path}/{params...}/{api_key}`, segments joined as-is.
    fn endpoint_url(&self, path: &str, params: &[Segment<'_>]) -> String {
        let mut url = format!("{}{}", self.api_root, path);
        for param in params {
            url.push('/');
            url.push_str(&param.to_string());
        }
        url.push('/');
        url.push_str(&self.api_key);
        url
    }

    #[tracing::instrument(skip(self, params))]
    async fn fetch(&self, path: &str, params: &[Segment<'_>]) -> ApiResponse {
        let url = self.endpoint_url(path, params);
        self.get_api_response(&url).await
    }

    async fn get_api_response(&self, url: &str) -> ApiResponse {
        debug!("GET {}", url);

        match classify(self.transport.get(url).await) {
            Ok(body) => ApiResponse::Body(body),
            Err(failure) => {
                error!("{}", failure);
                ApiResponse::Failed
            }
        }
    }

    /// API version string, wrapped in the usual `Resultado` envelope.
    pub async fn get_version(&self) -> ApiResponse {
        self.fetch("sys/version", &[]).await
    }

    pub async fn get_elemento(&self, id: i64) -> ApiResponse {
        self.fetch("elementos/get", &[&id]).await
    }

    pub async fn get_empresa(&self, empresa_id: &str) -> ApiResponse {
        self.fetch("empresas/get", &[&empresa_id]).await
    }

    /// Active scenes of an object. `modo` is 0 for a property, 1 for a project.
    pub async fn list_escenas(
        &self,
        empresa_id: &str,
        modo: impl Into<i32>,
        object_id: &str,
    ) -> ApiResponse {
        let modo = modo.into();
        self.fetch("escenas/active", &[&empresa_id, &modo, &object_id])
            .await
    }

    pub async fn list_escena_pins(&self, escena_id: &str) -> ApiResponse {
        self.fetch("pins/list", &[&escena_id]).await
    }

    /// URL to embed an image directly. No request is made.
    pub fn get_embeded_image_url(&self, image_id: &str) -> String {
        self.endpoint_url("images/embed", &[&image_id])
    }

    pub async fn list_imagenes(&self, modo: impl Into<i32>, object_id: &str) -> ApiResponse {
        let modo = modo.into();
        self.fetch("imagenes/list", &[&modo, &object_id]).await
    }

    /// Cover image of a property.
    pub async fn get_imagen_portada(&self, inmueble_id: &str) -> ApiResponse {
        self.fetch("imagenes/portada", &[&inmueble_id]).await
    }

    pub async fn get_inmueble(&self, inmueble_id: &str) -> ApiResponse {
        self.fetch("inmuebles/get", &[&inmueble_id]).await
    }

    /// Properties of a company filtered by property type, operation type and city.
    pub async fn list_inmuebles_by(
        &self,
        empresa_id: &str,
        tipo_inmueble: i32,
        tipo_operacion: i32,
        ciudad: i32,
    ) -> ApiResponse {
        self.fetch(
            "inmuebles/listweb",
            &[&empresa_id, &tipo_inmueble, &tipo_operacion, &ciudad],
        )
        .await
    }

    pub async fn list_tipos_inmueble(&self, empresa_id: &str) -> ApiResponse {
        self.fetch("inmuebles/tiposInmueble", &[&empresa_id]).await
    }

    pub async fn list_tipos_operacion(&self, empresa_id: &str) -> ApiResponse {
        self.fetch("inmuebles/tiposOperacion", &[&empresa_id]).await
    }

    pub async fn list_ciudades(&self, empresa_id: &str) -> ApiResponse {
        self.fetch("inmuebles/ciudades", &[&empresa_id]).await
    }

    /// Featured properties for the company's front page.
    pub async fn list_inmuebles_portada(&self, empresa_id: &str) -> ApiResponse {
        self.fetch("inmuebles/portada", &[&empresa_id]).await
    }

    pub async fn list_inmuebles_recientes(&self, empresa_id: &str) -> ApiResponse {
        self.fetch("inmuebles/recientes", &[&empresa_id]).await
    }

    pub async fn get_inmueble_caracteristicas(&self, inmueble_id: &str) -> ApiResponse {
        self.fetch("caracteristicas/get", &[&inmueble_id]).await
    }

    pub async fn list_propiedades_inmueble(
        &self,
        inmueble_id: &str,
        tipo_propiedad: i32,
    ) -> ApiResponse {
        self.fetch("properties/list", &[&inmueble_id, &tipo_propiedad])
            .await
    }

    pub async fn get_proyecto(&self, proyecto_id: &str) -> ApiResponse {
        self.fetch("proyectos/get", &[&proyecto_id]).await
    }

    /// Active projects of a company.
    pub async fn list_proyectos(&self, empresa_id: &str) -> ApiResponse {
        self.fetch("proyectos/active", &[&empresa_id]).await
    }

    pub async fn get_proyecto_id_by_subdomain(&self, subdomain: &str) -> ApiResponse {
        self.fetch("proyectos/pidsubdir", &[&subdomain]).await
    }

    pub async fn get_proyecto_modelo(&self, modelo_id: &str) -> ApiResponse {
        self.fetch("modelos/get", &[&modelo_id]).await
    }

    pub async fn list_proyecto_modelos(&self, proyecto_id: &str) -> ApiResponse {
        self.fetch("modelos/active", &[&proyecto_id]).await
    }

    pub async fn get_setting(&self, empresa_id: &str, clave: &str) -> ApiResponse {
        self.fetch("settings/get", &[&empresa_id, &clave]).await
    }
}
