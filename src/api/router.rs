//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::endpoints;
use crate::api::AppState;
use crate::documents::DocumentManager;
use crate::pipeline::ReviewPipeline;
use crate::review::{CompletionClient, DocumentReviewer};
use crate::store::{
    MemoryAnswerStore, MemoryDocumentStore, MemoryObjectStore, MemoryProfileStore,
    MemoryReviewStore, MemorySubscriptionStore,
};

/// Build the API router.
///
/// NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
pub fn visa_api_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(endpoints::questions::list))
        .route(
            "/profiles",
            post(endpoints::profiles::create).get(endpoints::profiles::list),
        )
        .route(
            "/profiles/:profile_id/answers",
            get(endpoints::answers::list).put(endpoints::answers::save),
        )
        .route(
            "/profiles/:profile_id/checklist",
            get(endpoints::checklist::show),
        )
        .route(
            "/profiles/:profile_id/documents",
            get(endpoints::documents::list),
        )
        .route(
            "/profiles/:profile_id/documents/:document_type",
            post(endpoints::documents::upload).delete(endpoints::documents::remove),
        )
        .route(
            "/profiles/:profile_id/documents/:document_type/review",
            post(endpoints::reviews::run).get(endpoints::reviews::latest),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Wire up an [`AppState`] over in-memory stores and the given completion
/// client. Used by the demo server and the router tests.
pub fn memory_app_state(
    client: Arc<dyn CompletionClient>,
) -> (AppState, Arc<MemorySubscriptionStore>) {
    let profiles = Arc::new(MemoryProfileStore::default());
    let answers = Arc::new(MemoryAnswerStore::default());
    let documents = Arc::new(MemoryDocumentStore::default());
    let reviews = Arc::new(MemoryReviewStore::default());
    let objects = Arc::new(MemoryObjectStore::default());
    let subscriptions = Arc::new(MemorySubscriptionStore::default());

    let manager = Arc::new(DocumentManager::new(
        profiles.clone(),
        documents.clone(),
        objects.clone(),
    ));
    let pipeline = Arc::new(ReviewPipeline::new(
        profiles.clone(),
        answers.clone(),
        documents.clone(),
        reviews.clone(),
        objects.clone(),
        subscriptions.clone(),
        DocumentReviewer::new(client),
    ));

    let state = AppState {
        profiles,
        answers,
        documents,
        reviews,
        manager,
        pipeline,
    };
    (state, subscriptions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::api::USER_ID_HEADER;
    use crate::extraction::pdf::test_pdf::make_test_pdf;
    use crate::models::Subscription;
    use crate::review::MockCompletionClient;
    use crate::store::SubscriptionStore;

    const VALID_REVIEW: &str = r#"{
        "summary": "Document looks consistent with the stated answers.",
        "issues_found": [],
        "missing_information": [],
        "consistency_warnings": [],
        "risk_level": "low",
        "confidence_notes": "Clean digital text."
    }"#;

    fn test_router() -> (Router, Arc<MemorySubscriptionStore>) {
        let (state, subscriptions) =
            memory_app_state(Arc::new(MockCompletionClient::new(VALID_REVIEW)));
        let router = Router::new().nest("/api", visa_api_router(state));
        (router, subscriptions)
    }

    fn request(method: &str, uri: &str, user: Option<Uuid>, body: Option<Value>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(user) = user {
            builder = builder.header(USER_ID_HEADER, user.to_string());
        }
        match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn create_profile(router: &Router, user: Uuid) -> Uuid {
        let response = router
            .clone()
            .oneshot(request("POST", "/api/profiles", Some(user), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        Uuid::parse_str(body["id"].as_str().unwrap()).unwrap()
    }

    #[tokio::test]
    async fn questions_endpoint_is_public() {
        let (router, _) = test_router();
        let response = router
            .oneshot(request("GET", "/api/questions", None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["questions"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn profiles_require_a_user_header() {
        let (router, _) = test_router();
        let response = router
            .oneshot(request("GET", "/api/profiles", None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "AUTH_REQUIRED");
    }

    #[tokio::test]
    async fn answers_round_trip_through_the_api() {
        let (router, _) = test_router();
        let user = Uuid::new_v4();
        let profile_id = create_profile(&router, user).await;

        let save = request(
            "PUT",
            &format!("/api/profiles/{profile_id}/answers"),
            Some(user),
            Some(json!({
                "answers": [
                    {"question_key": "nationality", "value": "india"},
                    {"question_key": "funding_type", "value": "self_funded"}
                ]
            })),
        );
        let response = router.clone().oneshot(save).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router
            .oneshot(request(
                "GET",
                &format!("/api/profiles/{profile_id}/answers"),
                Some(user),
                None,
            ))
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["answers"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn invalid_answer_value_is_rejected() {
        let (router, _) = test_router();
        let user = Uuid::new_v4();
        let profile_id = create_profile(&router, user).await;

        let save = request(
            "PUT",
            &format!("/api/profiles/{profile_id}/answers"),
            Some(user),
            Some(json!({
                "answers": [{"question_key": "nationality", "value": "atlantis"}]
            })),
        );
        let response = router.oneshot(save).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn checklist_reflects_saved_answers() {
        let (router, _) = test_router();
        let user = Uuid::new_v4();
        let profile_id = create_profile(&router, user).await;

        let save = request(
            "PUT",
            &format!("/api/profiles/{profile_id}/answers"),
            Some(user),
            Some(json!({
                "answers": [{"question_key": "nationality", "value": "india"}]
            })),
        );
        router.clone().oneshot(save).await.unwrap();

        let response = router
            .oneshot(request(
                "GET",
                &format!("/api/profiles/{profile_id}/checklist"),
                Some(user),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        let required: Vec<&str> = body["required_documents"]
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["key"].as_str().unwrap())
            .collect();
        assert!(required.contains(&"TB_test"));
    }

    #[tokio::test]
    async fn foreign_profile_is_forbidden() {
        let (router, _) = test_router();
        let owner = Uuid::new_v4();
        let profile_id = create_profile(&router, owner).await;

        let response = router
            .oneshot(request(
                "GET",
                &format!("/api/profiles/{profile_id}/checklist"),
                Some(Uuid::new_v4()),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    fn upload_request(profile_id: Uuid, user: Uuid, bytes: Vec<u8>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(format!(
                "/api/profiles/{profile_id}/documents/passport?filename=scan.pdf"
            ))
            .header(USER_ID_HEADER, user.to_string())
            .header(header::CONTENT_TYPE, "application/pdf")
            .body(Body::from(bytes))
            .unwrap()
    }

    #[tokio::test]
    async fn upload_then_list_documents() {
        let (router, _) = test_router();
        let user = Uuid::new_v4();
        let profile_id = create_profile(&router, user).await;

        let pdf = make_test_pdf("Passport number AB1234567");
        let response = router
            .clone()
            .oneshot(upload_request(profile_id, user, pdf))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router
            .oneshot(request(
                "GET",
                &format!("/api/profiles/{profile_id}/documents"),
                Some(user),
                None,
            ))
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["documents"].as_array().unwrap().len(), 1);
        assert_eq!(body["documents"][0]["document_type"], "passport");
    }

    #[tokio::test]
    async fn unknown_document_type_is_rejected() {
        let (router, _) = test_router();
        let user = Uuid::new_v4();
        let profile_id = create_profile(&router, user).await;

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/api/profiles/{profile_id}/documents/tax_return"))
                    .header(USER_ID_HEADER, user.to_string())
                    .header(header::CONTENT_TYPE, "application/pdf")
                    .body(Body::from("%PDF-"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn review_requires_an_active_subscription() {
        let (router, _) = test_router();
        let user = Uuid::new_v4();
        let profile_id = create_profile(&router, user).await;

        let pdf = make_test_pdf("Passport number AB1234567");
        router
            .clone()
            .oneshot(upload_request(profile_id, user, pdf))
            .await
            .unwrap();

        let response = router
            .oneshot(request(
                "POST",
                &format!("/api/profiles/{profile_id}/documents/passport/review"),
                Some(user),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYMENT_REQUIRED);
    }

    #[tokio::test]
    async fn review_runs_and_is_retrievable() {
        let (router, subscriptions) = test_router();
        let user = Uuid::new_v4();
        let profile_id = create_profile(&router, user).await;
        subscriptions
            .upsert_subscription(Subscription {
                user_id: user,
                status: "active".to_string(),
                current_period_end: None,
            })
            .unwrap();

        let pdf = make_test_pdf("Passport number AB1234567");
        router
            .clone()
            .oneshot(upload_request(profile_id, user, pdf))
            .await
            .unwrap();

        let response = router
            .clone()
            .oneshot(request(
                "POST",
                &format!("/api/profiles/{profile_id}/documents/passport/review"),
                Some(user),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["review"]["risk_level"], "low");

        let response = router
            .oneshot(request(
                "GET",
                &format!("/api/profiles/{profile_id}/documents/passport/review"),
                Some(user),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["review"]["risk_level"], "low");
    }

    #[tokio::test]
    async fn delete_removes_the_document_slot() {
        let (router, _) = test_router();
        let user = Uuid::new_v4();
        let profile_id = create_profile(&router, user).await;

        let pdf = make_test_pdf("Passport number AB1234567");
        router
            .clone()
            .oneshot(upload_request(profile_id, user, pdf))
            .await
            .unwrap();

        let response = router
            .clone()
            .oneshot(request(
                "DELETE",
                &format!("/api/profiles/{profile_id}/documents/passport"),
                Some(user),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = router
            .oneshot(request(
                "GET",
                &format!("/api/profiles/{profile_id}/documents"),
                Some(user),
                None,
            ))
            .await
            .unwrap();
        let body = json_body(response).await;
        assert!(body["documents"].as_array().unwrap().is_empty());
    }
}
