//! One subcommand per website endpoint.

use log::warn;
use serde_json::Value;

use crate::{
    http::Transport,
    website::{ApiResponse, WebsiteClient},
};

#[derive(clap::Subcommand, Debug, Clone, PartialEq)]
pub enum Endpoint {
    /// Print the API version
    Version,

    /// Get an element by its numeric id
    GetElemento {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },

    /// Get a company
    GetEmpresa { empresa_id: String },

    /// List the active scenes of a property (modo 0) or project (modo 1)
    ListEscenas {
        empresa_id: String,
        #[arg(allow_negative_numbers = true)]
        modo: i32,
        object_id: String,
    },

    /// List the pins of a scene
    ListEscenaPins { escena_id: String },

    /// Print the URL to embed an image; no request is made
    EmbedUrl { image_id: String },

    /// List the images of a property (modo 0) or project (modo 1)
    ListImagenes {
        #[arg(allow_negative_numbers = true)]
        modo: i32,
        object_id: String,
    },

    /// Get the cover image of a property
    GetImagenPortada { inmueble_id: String },

    /// Get a property
    GetInmueble { inmueble_id: String },

    /// List properties by type, operation and city
    ListInmueblesBy {
        empresa_id: String,
        #[arg(allow_negative_numbers = true)]
        tipo_inmueble: i32,
        #[arg(allow_negative_numbers = true)]
        tipo_operacion: i32,
        #[arg(allow_negative_numbers = true)]
        ciudad: i32,
    },

    /// List the property types of a company
    ListTiposInmueble { empresa_id: String },

    /// List the operation types of a company
    ListTiposOperacion { empresa_id: String },

    /// List the cities of a company
    ListCiudades { empresa_id: String },

    /// List the featured properties of a company
    ListInmueblesPortada { empresa_id: String },

    /// List the most recent properties of a company
    ListInmueblesRecientes { empresa_id: String },

    /// Get the features of a property
    GetInmuebleCaracteristicas { inmueble_id: String },

    /// List the properties (attributes) of a property
    ListPropiedadesInmueble {
        inmueble_id: String,
        #[arg(allow_negative_numbers = true)]
        tipo_propiedad: i32,
    },

    /// Get a project
    GetProyecto { proyecto_id: String },

    /// List the active projects of a company
    ListProyectos { empresa_id: String },

    /// Resolve a project id from its subdomain
    GetProyectoIdBySubdomain { subdomain: String },

    /// Get a project model
    GetProyectoModelo { modelo_id: String },

    /// List the active models of a project
    ListProyectoModelos { proyecto_id: String },

    /// Get a company setting
    GetSetting { empresa_id: String, clave: String },
}

/// Text to print and whether the call failed.
#[derive(Debug, Clone, PartialEq)]
pub struct Output {
    pub text: String,
    pub failed: bool,
}

impl From<ApiResponse> for Output {
    fn from(response: ApiResponse) -> Self {
        Self {
            failed: response.is_error(),
            text: response.into_string(),
        }
    }
}

#[tracing::instrument(skip(client))]
pub async fn execute<T: Transport>(client: &WebsiteClient<T>, endpoint: &Endpoint) -> Output {
    let response = match endpoint {
        Endpoint::Version => return version_output(client.get_version().await),
        Endpoint::EmbedUrl { image_id } => {
            return Output {
                text: client.get_embeded_image_url(image_id),
                failed: false,
            };
        }
        Endpoint::GetElemento { id } => client.get_elemento(*id).await,
        Endpoint::GetEmpresa { empresa_id } => client.get_empresa(empresa_id).await,
        Endpoint::ListEscenas {
            empresa_id,
            modo,
            object_id,
        } => client.list_escenas(empresa_id, *modo, object_id).await,
        Endpoint::ListEscenaPins { escena_id } => client.list_escena_pins(escena_id).await,
        Endpoint::ListImagenes { modo, object_id } => client.list_imagenes(*modo, object_id).await,
        Endpoint::GetImagenPortada { inmueble_id } => client.get_imagen_portada(inmueble_id).await,
        Endpoint::GetInmueble { inmueble_id } => client.get_inmueble(inmueble_id).await,
        Endpoint::ListInmueblesBy {
            empresa_id,
            tipo_inmueble,
            tipo_operacion,
            ciudad,
        } => {
            client
                .list_inmuebles_by(empresa_id, *tipo_inmueble, *tipo_operacion, *ciudad)
                .await
        }
        Endpoint::ListTiposInmueble { empresa_id } => client.list_tipos_inmueble(empresa_id).await,
        Endpoint::ListTiposOperacion { empresa_id } => {
            client.list_tipos_operacion(empresa_id).await
        }
        Endpoint::ListCiudades { empresa_id } => client.list_ciudades(empresa_id).await,
        Endpoint::ListInmueblesPortada { empresa_id } => {
            client.list_inmuebles_portada(empresa_id).await
        }
        Endpoint::ListInmueblesRecientes { empresa_id } => {
            client.list_inmuebles_recientes(empresa_id).await
        }
        Endpoint::GetInmuebleCaracteristicas { inmueble_id } => {
            client.get_inmueble_caracteristicas(inmueble_id).await
        }
        Endpoint::ListPropiedadesInmueble {
            inmueble_id,
            tipo_propiedad,
        } => {
            client
                .list_propiedades_inmueble(inmueble_id, *tipo_propiedad)
                .await
        }
        Endpoint::GetProyecto { proyecto_id } => client.get_proyecto(proyecto_id).await,
        Endpoint::ListProyectos { empresa_id } => client.list_proyectos(empresa_id).await,
        Endpoint::GetProyectoIdBySubdomain { subdomain } => {
            client.get_proyecto_id_by_subdomain(subdomain).await
        }
        Endpoint::GetProyectoModelo { modelo_id } => client.get_proyecto_modelo(modelo_id).await,
        Endpoint::ListProyectoModelos { proyecto_id } => {
            client.list_proyecto_modelos(proyecto_id).await
        }
        Endpoint::GetSetting { empresa_id, clave } => client.get_setting(empresa_id, clave).await,
    };

    Output::from(response)
}

/// Prints only the `Resultado` field when the body carries one.
fn version_output(response: ApiResponse) -> Output {
    if response.is_error() {
        return Output::from(response);
    }

    match extract_version(response.as_str()) {
        Some(version) => Output {
            text: version,
            failed: false,
        },
        None => {
            warn!("Version response carries no Resultado field");
            Output::from(response)
        }
    }
}

fn extract_version(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("Resultado").or_else(|| value.get("resultado"))? {
        Value::Null => None,
        Value::String(version) => Some(version.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{MockTransport, Reply};
    use crate::website::ERROR_SENTINEL;
    use mockall::predicate::eq;

    const ROOT: &str = "http://api.test/";

    fn client_expecting(url: &'static str, reply: Reply) -> WebsiteClient<MockTransport> {
        let mut transport = MockTransport::new();
        transport
            .expect_get()
            .with(eq(url))
            .times(1)
            .returning(move |_| Ok(reply.clone()));
        WebsiteClient::with_transport("E1", "K", ROOT, transport)
    }

    #[test_log::test(tokio::test)]
    async fn test_execute_passes_body_through() {
        let client = client_expecting(
            "http://api.test/inmuebles/listweb/E1/1/2/3/K",
            Reply::ok(r#"{"items":[]}"#),
        );

        let endpoint = Endpoint::ListInmueblesBy {
            empresa_id: "E1".to_string(),
            tipo_inmueble: 1,
            tipo_operacion: 2,
            ciudad: 3,
        };
        let output = execute(&client, &endpoint).await;

        assert_eq!(
            output,
            Output {
                text: r#"{"items":[]}"#.to_string(),
                failed: false,
            }
        );
    }

    #[test_log::test(tokio::test)]
    async fn test_execute_failure_prints_sentinel() {
        let client = client_expecting("http://api.test/settings/get/E1/logo/K", Reply::with_status(500));

        let endpoint = Endpoint::GetSetting {
            empresa_id: "E1".to_string(),
            clave: "logo".to_string(),
        };
        let output = execute(&client, &endpoint).await;

        assert!(output.failed);
        assert_eq!(output.text, ERROR_SENTINEL);
    }

    #[tokio::test]
    async fn test_execute_embed_url_makes_no_request() {
        let mut transport = MockTransport::new();
        transport.expect_get().never();
        let client = WebsiteClient::with_transport("E1", "K", ROOT, transport);

        let endpoint = Endpoint::EmbedUrl {
            image_id: "IMG1".to_string(),
        };
        let output = execute(&client, &endpoint).await;

        assert_eq!(output.text, "http://api.test/images/embed/IMG1/K");
        assert!(!output.failed);
    }

    #[tokio::test]
    async fn test_execute_version_extracts_resultado() {
        let client = client_expecting(
            "http://api.test/sys/version/K",
            Reply::ok(r#"{"Operacion":{"codigo":0,"mensaje":"OK"},"Resultado":"2.4.1"}"#),
        );

        let output = execute(&client, &Endpoint::Version).await;

        assert_eq!(output.text, "2.4.1");
        assert!(!output.failed);
    }

    #[tokio::test]
    async fn test_execute_version_without_resultado_prints_body() {
        let client = client_expecting("http://api.test/sys/version/K", Reply::ok("{}"));

        let output = execute(&client, &Endpoint::Version).await;

        assert_eq!(output.text, "{}");
        assert!(!output.failed);
    }

    #[tokio::test]
    async fn test_execute_version_failure() {
        let client = client_expecting("http://api.test/sys/version/K", Reply::with_status(404));

        let output = execute(&client, &Endpoint::Version).await;

        assert!(output.failed);
        assert_eq!(output.text, ERROR_SENTINEL);
    }

    #[test]
    fn test_extract_version() {
        assert_eq!(
            extract_version(r#"{"Resultado":"1.0"}"#),
            Some("1.0".to_string())
        );
        assert_eq!(
            extract_version(r#"{"resultado":3}"#),
            Some("3".to_string())
        );
        assert_eq!(extract_version(r#"{"Resultado":null}"#), None);
        assert_eq!(extract_version("not json"), None);
    }
}
