use axum::{http::header, response::IntoResponse, routing::get, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    api::{error::ApiError, health::HealthResponse},
    domain::{EnergyAnalysis, EnergyFeature, EnergyFeatureType, House, Improvement},
};

#[derive(OpenApi)]
#[openapi(
    info(title = "House Api", version = "1.0.0"),
    paths(
        crate::api::houses::create_house,
        crate::api::houses::put_house,
        crate::api::houses::get_house,
        crate::api::houses::delete_house,
        crate::api::houses::get_energy,
        crate::api::health::healthz,
    ),
    components(
        schemas(
            House,
            Improvement,
            EnergyAnalysis,
            EnergyFeature,
            EnergyFeatureType,
            HealthResponse,
        )
    ),
    tags(
        (name = "houses", description = "House records and their energy analysis"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;

async fn swagger_yaml() -> Result<impl IntoResponse, ApiError> {
    let yaml = serde_yaml::to_string(&ApiDoc::openapi())
        .map_err(|e| ApiError::InternalError(format!("failed to render OpenAPI YAML: {e}")))?;
    Ok(([(header::CONTENT_TYPE, "application/yaml")], yaml))
}

pub fn with_swagger(app: Router) -> Router {
    app.merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .route("/swagger.yaml", get(swagger_yaml))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_house_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/houses/{id}/energy"));
        assert!(doc.paths.paths.contains_key("/houses"));
        let yaml = serde_yaml::to_string(&doc).unwrap();
        assert!(yaml.contains("House Api"));
    }
}
