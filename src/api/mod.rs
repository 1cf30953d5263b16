use crate::{
    cli::globals::GlobalArgs,
    cognito::{self, sigv4::Credentials},
    APP_USER_AGENT,
};
use anyhow::{Context, Result};
use axum::{
    body::Body,
    extract::MatchedPath,
    http::{header::CONTENT_TYPE, HeaderName, HeaderValue, Method, Request},
    response::Json,
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::PropagateRequestIdLayer,
    set_header::SetRequestHeaderLayer,
    trace::TraceLayer,
};
use tracing::{error, info, info_span, Span};
use ulid::Ulid;
use utoipa::OpenApi;

pub mod handlers;

use self::handlers::types;

#[derive(OpenApi)]
#[openapi(
    info(description = "Stateless authentication gateway for Amazon Cognito user pools"),
    paths(
        handlers::health::health,
        handlers::signup::signup,
        handlers::signin::signin,
        handlers::verify::verify,
    ),
    components(schemas(
        types::SignupRequest,
        types::SignupResponse,
        types::SigninRequest,
        types::TokenResponse,
        types::VerifyRequest,
        types::VerifiedResponse,
        types::ErrorResponse,
    )),
    tags(
        (name = "auth", description = "Cognito-backed authentication flows"),
        (name = "health", description = "Service health"),
    )
)]
struct ApiDoc;

/// The generated `OpenAPI` document.
#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

/// Build the application router around one shared provider client.
#[must_use]
pub fn router(provider: Arc<cognito::Client>) -> Router {
    let cors = CorsLayer::new()
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any);

    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/signup", post(handlers::signup::signup))
        .route("/signin", post(handlers::signin::signin))
        .route("/verify", post(handlers::verify::verify))
        .route("/api-docs/openapi.json", get(|| async { Json(openapi()) }))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestHeaderLayer::if_not_present(
                    HeaderName::from_static("x-request-id"),
                    |_req: &_| HeaderValue::from_str(Ulid::new().to_string().as_str()).ok(),
                ))
                .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                    "x-request-id",
                )))
                .layer(TraceLayer::new_for_http().make_span_with(make_span))
                .layer(cors)
                .layer(Extension(provider)),
        )
}

/// Start the server
/// # Errors
/// Return error if failed to start the server
pub async fn new(port: u16, globals: &GlobalArgs) -> Result<()> {
    let config = cognito::Config {
        client_id: globals.client_id.clone(),
        user_pool_id: globals.user_pool_id.clone(),
        region: globals.region.clone(),
        endpoint: globals.endpoint.clone(),
        credentials: Credentials {
            access_key_id: globals.access_key_id.clone(),
            secret_access_key: globals.secret_access_key.clone(),
            session_token: globals.session_token.clone(),
        },
    };

    let provider = Arc::new(
        cognito::Client::new(APP_USER_AGENT, config).context("Failed to build provider client")?,
    );

    let app = router(provider);

    let listener = TcpListener::bind(format!("::0:{port}")).await?;

    info!("Listening on [::]:{}", port);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Gracefully shutdown"),
        Err(error) => {
            error!("Failed to install shutdown signal handler: {}", error);

            // Without a handler the server runs until killed.
            std::future::pending::<()>().await;
        }
    }
}

fn make_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|val| val.to_str().ok())
        .unwrap_or("none");
    let matched_path = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| request.uri().path(), MatchedPath::as_str);

    info_span!(
        "http.request",
        http.method = %request.method(),
        http.route = matched_path,
        request_id
    )
}
