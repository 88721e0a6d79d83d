//! Vehicle lookup endpoint (`/api/vehicle`).
//!
//! Validates the request, forwards one GET upstream, redacts the answer and
//! wraps it in the response envelope.

use axum::extract::{RawQuery, State};
use axum::http::Method;
use axum::Json;
use plateproxy_core::{QueryParams, ResponseEnvelope, UpstreamPayload, VehicleIdentifier};
use tracing::{error, info, instrument, warn};

use crate::error::LookupError;
use crate::server::GatewayState;
use crate::upstream::UpstreamClient;

/// Fetch, interpret and sanitize one lookup.
///
/// Shared by the HTTP handler and the `lookup` CLI command.
pub async fn lookup(
    upstream: &UpstreamClient,
    identifier: &VehicleIdentifier,
) -> Result<ResponseEnvelope, LookupError> {
    let body = upstream.fetch(identifier).await?;
    let payload = UpstreamPayload::from_body(&body);
    Ok(ResponseEnvelope::success(identifier, payload))
}

/// Handler for `/api/vehicle`. Any method is routed here; only GET is served.
#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4(), method = %method))]
pub async fn vehicle_lookup(
    State(state): State<GatewayState>,
    method: Method,
    RawQuery(query): RawQuery,
) -> Result<Json<ResponseEnvelope>, LookupError> {
    if method != Method::GET {
        warn!("Rejected non-GET lookup");
        return Err(LookupError::MethodNotAllowed);
    }

    let params = QueryParams::parse(query.as_deref());
    let Some(identifier) = params.vehicle_identifier() else {
        warn!("Lookup without vehicle number");
        return Err(LookupError::MissingIdentifier);
    };

    match lookup(&state.upstream, &identifier).await {
        Ok(envelope) => {
            info!(
                identifier = %identifier,
                response_type = envelope.original_response_type.as_deref().unwrap_or_default(),
                "Lookup served"
            );
            Ok(Json(envelope))
        }
        Err(e) => {
            error!(identifier = %identifier, error = %e, "Lookup failed");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use plateproxy_config::UpstreamConfig;
    use serde_json::{json, Value};
    use tower::ServiceExt as _;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::server::{router, GatewayState};
    use crate::upstream::UpstreamClient;

    fn app(upstream_base: &str) -> Router {
        let upstream = UpstreamClient::new(&UpstreamConfig::default())
            .with_base_url(format!("{upstream_base}/numapi.php"));
        router(GatewayState::new(upstream))
    }

    async fn call(app: Router, method: &str, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn non_get_is_rejected_without_upstream_call() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        for verb in ["POST", "PUT", "DELETE", "PATCH", "OPTIONS"] {
            let (status, body) = call(app(&server.uri()), verb, "/api/vehicle?num=KA04JW3068").await;
            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{verb}");
            assert_eq!(
                body,
                json!({"success": false, "error": "Only GET method allowed", "credit": "@SxThunder"})
            );
        }
    }

    #[tokio::test]
    async fn missing_identifier_is_bad_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        for uri in ["/api/vehicle", "/api/vehicle?other=1", "/api/vehicle?num=&test1=&v=&vehicle=&q="] {
            let (status, body) = call(app(&server.uri()), "GET", uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body["success"], false);
            assert_eq!(
                body["error"],
                "Vehicle number missing. Example: ?num=KA04JW3068 or ?test1=UP32AB1234"
            );
            assert_eq!(body["credit"], "@SxThunder");
        }
    }

    #[tokio::test]
    async fn json_upstream_is_sanitized() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/numapi.php"))
            .and(query_param("test1", "ka04jw3068"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"owner":"@SxThunder","city":"Delhi"}"#),
            )
            .expect(1)
            .mount(&server)
            .await;

        let (status, body) = call(app(&server.uri()), "GET", "/api/vehicle?num=ka04jw3068").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "success": true,
                "vehicle_number": "KA04JW3068",
                "data": {"owner": "[USER HIDDEN]", "city": "Delhi"},
                "original_response_type": "json",
                "cleaned": true,
                "credit": "@SxThunder",
                "note": "All @mentions and links are hidden | Powered by @SxThunder proxy",
            })
        );
    }

    #[tokio::test]
    async fn first_param_in_priority_order_is_forwarded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("test1", "X"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let (status, body) = call(app(&server.uri()), "GET", "/api/vehicle?q=Z&test1=Y&num=X").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["vehicle_number"], "X");
    }

    #[tokio::test]
    async fn upstream_error_status_becomes_500() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let (status, body) = call(app(&server.uri()), "GET", "/api/vehicle?v=KA04JW3068").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Failed to fetch vehicle details");
        assert!(body["details"].as_str().unwrap().contains("404"));
        assert_eq!(body["credit"], "@SxThunder");
    }

    #[tokio::test]
    async fn text_upstream_is_passed_through_as_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("plain response"))
            .mount(&server)
            .await;

        let (status, body) = call(app(&server.uri()), "GET", "/api/vehicle?vehicle=mh12").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["original_response_type"], "text");
        assert_eq!(body["data"], "plain response");
        assert_eq!(body["vehicle_number"], "MH12");
    }

    #[tokio::test]
    async fn text_upstream_is_redacted() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string("Owner: R. Kumar, join https://t.me/x @chan\n"),
            )
            .mount(&server)
            .await;

        let (_, body) = call(app(&server.uri()), "GET", "/api/vehicle?q=DL1").await;
        assert_eq!(body["data"], "Owner: R. Kumar, join [LINK HIDDEN] [USER HIDDEN]");
    }

    #[tokio::test]
    async fn unreachable_upstream_becomes_500() {
        let (status, body) = call(app("http://127.0.0.1:1"), "GET", "/api/vehicle?num=KA04JW3068").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to fetch vehicle details");
        assert!(body["details"].is_string());
    }
}
