//! REST API endpoint for email fraud detection

use actix_web::{HttpResponse, post, web};

use crate::api::error::{ApiError, json_error_handler};
use crate::model::{ClassificationRequest, ClassificationResult};
use crate::service::ClassifierService;

/// Classify an email as phishing or legitimate
#[utoipa::path(
    post,
    path = "/detect-fraud",
    request_body = ClassificationRequest,
    responses(
        (status = 200, description = "Email classified", body = ClassificationResult),
        (status = 400, description = "Missing, malformed or empty emailContent", body = crate::api::error::ErrorResponse),
        (status = 413, description = "Request body too large", body = crate::api::error::ErrorResponse),
        (status = 500, description = "Classification failed", body = crate::api::error::ErrorResponse)
    ),
    tag = "detection"
)]
#[post("/detect-fraud")]
pub async fn detect_fraud(
    service: web::Data<ClassifierService>,
    body: web::Json<ClassificationRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();

    tracing::debug!(
        content_length = request.email_content.len(),
        "Received fraud detection request"
    );

    let result = service.classify(&request.email_content).await?;

    Ok(HttpResponse::Ok().json(result))
}

/// JSON extractor settings for the detection endpoint
pub fn json_config(max_payload_bytes: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(max_payload_bytes)
        .error_handler(json_error_handler)
}

/// Configure detection routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(detect_fraud);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use serde_json::{Value, json};

    use super::*;
    use crate::api::error::REQUEST_ID_HEADER;
    use crate::model::{ClassificationMode, ClassifierConfig};
    use crate::service::classifier::tests::{StubProvider, legitimate_verdict, phishing_verdict};

    fn classifier(stub: StubProvider, mode: ClassificationMode) -> web::Data<ClassifierService> {
        web::Data::new(ClassifierService::new(
            Arc::new(stub),
            ClassifierConfig {
                mode,
                ..ClassifierConfig::default()
            },
        ))
    }

    macro_rules! init_app {
        ($service:expr) => {
            test::init_service(
                App::new()
                    .app_data($service)
                    .app_data(json_config(1024))
                    .configure(configure),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_detect_phishing() {
        let app = init_app!(classifier(
            StubProvider::with_verdict(phishing_verdict()),
            ClassificationMode::Structured
        ));

        let req = test::TestRequest::post()
            .uri("/detect-fraud")
            .set_json(json!({ "emailContent": "Your account is locked, verify now" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({ "fraudDetected": 1, "phishing_score": 9, "result_rationale": "..." })
        );
    }

    #[actix_web::test]
    async fn test_detect_legitimate() {
        let app = init_app!(classifier(
            StubProvider::with_verdict(legitimate_verdict()),
            ClassificationMode::Structured
        ));

        let req = test::TestRequest::post()
            .uri("/detect-fraud")
            .set_json(json!({ "emailContent": "Standup moved to 10am." }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["fraudDetected"], 0);
        assert!(body["phishing_score"].as_u64().unwrap() <= 5);
    }

    #[actix_web::test]
    async fn test_detect_keyword_mode() {
        let app = init_app!(classifier(
            StubProvider::with_reply("...this is a fraud attempt..."),
            ClassificationMode::Keyword
        ));

        let req = test::TestRequest::post()
            .uri("/detect-fraud")
            .set_json(json!({ "emailContent": "You won a cruise" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body,
            json!({
                "fraudDetected": 1,
                "phishing_score": null,
                "result_rationale": "...this is a fraud attempt..."
            })
        );
    }

    #[actix_web::test]
    async fn test_provider_failure_is_opaque_500() {
        let app = init_app!(classifier(
            StubProvider::failing(),
            ClassificationMode::Structured
        ));

        let req = test::TestRequest::post()
            .uri("/detect-fraud")
            .set_json(json!({ "emailContent": "Hello" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(resp.headers().contains_key(REQUEST_ID_HEADER));

        let body = test::read_body(resp).await;
        assert_eq!(body.as_ref(), br#"{"error":"An error occurred"}"#);
    }

    #[actix_web::test]
    async fn test_invalid_bodies_are_rejected() {
        let app = init_app!(classifier(
            StubProvider::with_verdict(phishing_verdict()),
            ClassificationMode::Structured
        ));

        let bodies = [
            json!({}),
            json!({ "emailContent": null }),
            json!({ "emailContent": 42 }),
            json!({ "emailContent": "" }),
            json!({ "emailContent": "   " }),
        ];

        for body in bodies {
            let req = test::TestRequest::post()
                .uri("/detect-fraud")
                .set_json(&body)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {body}");

            let json: Value = test::read_body_json(resp).await;
            assert_eq!(json, json!({ "error": "Invalid request" }));
        }

        let req = test::TestRequest::post()
            .uri("/detect-fraud")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_oversized_body() {
        let app = init_app!(classifier(
            StubProvider::with_verdict(phishing_verdict()),
            ClassificationMode::Structured
        ));

        let req = test::TestRequest::post()
            .uri("/detect-fraud")
            .set_json(json!({ "emailContent": "a".repeat(4096) }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
