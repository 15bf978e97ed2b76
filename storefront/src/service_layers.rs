use axum::http::{HeaderValue, Method};
use tower::{
    ServiceBuilder,
    layer::util::{Identity, Stack},
};
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    cors::CorsLayer,
    trace::TraceLayer,
};

type HttpTraceLayer = TraceLayer<SharedClassifier<ServerErrorsAsFailures>>;

// cors needs a body type with Default, so it sits inside the trace layer
pub(crate) fn build_service_layers(
    allowed_origin: HeaderValue,
) -> ServiceBuilder<Stack<CorsLayer, Stack<HttpTraceLayer, Identity>>> {
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(allowed_origin);

    ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use tower::ServiceExt;

    use crate::{server::build_router, test_support::stub_state};

    #[tokio::test]
    async fn allowed_origin_is_echoed() {
        let (state, _) = stub_state(Vec::new());
        let router = build_router(state, "http://localhost:3000".parse().unwrap());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/healthz")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:3000"
        );
    }
}
