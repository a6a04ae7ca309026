//! OpenAPI specification endpoints

use actix_web::{HttpResponse, Responder, get};
use utoipa::OpenApi;

use crate::api::error::ErrorResponse;
use crate::api::health::HealthStatus;
use crate::model::{ClassificationRequest, ClassificationResult};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "PhishGuard",
        description = "Classifies emails as phishing or legitimate using an LLM"
    ),
    paths(
        crate::api::detect::detect_fraud,
        crate::api::health::hello,
        crate::api::health::liveness,
    ),
    components(schemas(
        ClassificationRequest,
        ClassificationResult,
        ErrorResponse,
        HealthStatus
    )),
    tags(
        (name = "detection", description = "Email fraud detection"),
        (name = "health", description = "Liveness checks")
    )
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON specification
#[get("/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Serve OpenAPI YAML specification
#[get("/openapi.yaml")]
pub async fn openapi_yaml() -> impl Responder {
    match ApiDoc::openapi().to_yaml() {
        Ok(yaml) => HttpResponse::Ok().content_type("text/yaml").body(yaml),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render OpenAPI YAML");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Configure OpenAPI routes
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(openapi_json).service(openapi_yaml);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_documents_detection_endpoint() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        assert!(doc["paths"]["/detect-fraud"]["post"].is_object());
        assert!(doc["paths"]["/"]["get"].is_object());
        assert!(doc["components"]["schemas"]["ClassificationResult"].is_object());
    }
}
