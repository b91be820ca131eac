//! End-to-end tests against the full router
//!
//! The app is driven in-process with `tower::ServiceExt::oneshot`; the
//! OAuth provider is stubbed so no test touches the network.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use forgegate_api::config::Config;
use forgegate_api::{router, AppState};
use forgegate_auth_core::{AuthConfig, AuthService, CredentialHasher, SESSION_COOKIE_NAME};
use forgegate_oauth_core::{
    BrokerConfig, BrokerError, ExchangeError, OAuthBroker, OAuthProvider, ProviderResolver,
};
use forgegate_store::{MemoryPrincipalStore, MemoryVcsStore};
use forgegate_types::{OAuthExchange, OAuthToken, VcsConnection, VcsId, VcsProviderType};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

struct StubProvider;

#[async_trait]
impl OAuthProvider for StubProvider {
    async fn exchange_oauth_token(
        &self,
        _instance_url: &str,
        _exchange: &OAuthExchange,
        _code: &str,
        _redirect_url: &str,
    ) -> Result<OAuthToken, ExchangeError> {
        Ok(OAuthToken {
            access_token: "tok_x".to_string(),
            refresh_token: None,
            expires_in: Some(3600),
            token_type: None,
        })
    }
}

struct StubResolver;

impl ProviderResolver for StubResolver {
    fn resolve(
        &self,
        provider_type: VcsProviderType,
    ) -> Result<Arc<dyn OAuthProvider>, BrokerError> {
        match provider_type {
            VcsProviderType::GitLabSelfHost | VcsProviderType::GitHubCom => {
                Ok(Arc::new(StubProvider))
            }
            other => Err(BrokerError::UnsupportedProvider(other)),
        }
    }
}

fn test_app_with(cookie_secure: bool, connections: Vec<VcsConnection>) -> Router {
    let auth_config = AuthConfig::new("0123456789abcdef0123456789abcdef")
        .with_cookie_secure(cookie_secure);
    let config = Config {
        http_port: 0,
        auth: auth_config.clone(),
        broker: BrokerConfig::new("http://localhost", 3000),
        vcs_connections: Vec::new(),
    };

    let hasher = CredentialHasher::with_params(1024, 1, 1).unwrap();
    let auth = AuthService::with_hasher(
        &auth_config,
        Arc::new(MemoryPrincipalStore::new()),
        hasher,
    )
    .unwrap();

    let registry = MemoryVcsStore::new();
    for connection in connections {
        registry.insert(connection);
    }
    let resolver: Arc<dyn ProviderResolver> = Arc::new(StubResolver);
    let broker = OAuthBroker::new(Arc::new(registry), resolver, config.broker.clone());

    router(AppState::new(auth, broker, config))
}

fn test_app() -> Router {
    test_app_with(false, Vec::new())
}

fn gitlab_connection(id: i32) -> VcsConnection {
    VcsConnection {
        id: VcsId(id),
        name: "Team GitLab".to_string(),
        provider_type: VcsProviderType::GitLabSelfHost,
        instance_url: "https://git.example.com".to_string(),
        application_id: "app-id".to_string(),
        secret: "app-secret".to_string(),
    }
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn signup_request(name: &str, email: &str, password: &str) -> Request<Body> {
    post_json(
        "/api/auth/signup",
        json!({ "name": name, "email": email, "password": password }),
    )
}

fn login_request(email: &str, password: &str) -> Request<Body> {
    post_json(
        "/api/auth/login",
        json!({ "email": email, "password": password }),
    )
}

#[tokio::test]
async fn test_healthz() {
    let app = test_app();
    let response = app
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_signup_sets_cookie_and_hides_hash() {
    let app = test_app();
    let response = app
        .oneshot(signup_request("Ada", "ada@example.com", "hunter2hunter2"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with(&format!("{SESSION_COOKIE_NAME}=")));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Strict"));
    assert!(cookie.contains("Path=/api"));
    assert!(cookie.contains("Max-Age="));
    assert!(!cookie.contains("Secure"));

    let body = body_json(response).await;
    assert_eq!(body["email"], "ada@example.com");
    assert_eq!(body["status"], "ACTIVE");
    assert_eq!(body["type"], "END_USER");
    assert_eq!(body["creator_id"], 1);
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_secure_attribute_tracks_config() {
    let app = test_app_with(true, Vec::new());
    let response = app
        .oneshot(signup_request("Ada", "ada@example.com", "hunter2hunter2"))
        .await
        .unwrap();

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(cookie.contains("; Secure"));
}

#[tokio::test]
async fn test_signup_then_login() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(signup_request("Ada", "ada@example.com", "hunter2hunter2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(login_request("ada@example.com", "hunter2hunter2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key(header::SET_COOKIE));

    let body = body_json(response).await;
    assert_eq!(body["email"], "ada@example.com");
}

#[tokio::test]
async fn test_duplicate_signup_conflicts() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(signup_request("Ada", "ada@example.com", "first-password"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(signup_request("Ada Again", "ada@example.com", "other-password"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "EMAIL_CONFLICT");
}

#[tokio::test]
async fn test_credential_failures_are_byte_identical() {
    let app = test_app();
    app.clone()
        .oneshot(signup_request("Ada", "ada@example.com", "the-right-password"))
        .await
        .unwrap();

    let wrong_password = app
        .clone()
        .oneshot(login_request("ada@example.com", "the-wrong-password"))
        .await
        .unwrap();
    let unknown_email = app
        .oneshot(login_request("nobody@example.com", "the-right-password"))
        .await
        .unwrap();

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
    assert!(!wrong_password.headers().contains_key(header::SET_COOKIE));
    assert!(!unknown_email.headers().contains_key(header::SET_COOKIE));

    let a = wrong_password.into_body().collect().await.unwrap().to_bytes();
    let b = unknown_email.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(a, b);
}

#[tokio::test]
async fn test_malformed_login_body_is_bad_request() {
    let app = test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
    assert_eq!(body["error"]["message"], "Malformatted login request.");
}

#[tokio::test]
async fn test_missing_signup_field_is_bad_request() {
    let app = test_app();
    let response = app
        .oneshot(post_json(
            "/api/auth/signup",
            json!({ "email": "ada@example.com", "password": "pw" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"]["message"], "Malformatted signup request.");
}

#[tokio::test]
async fn test_concurrent_same_email_signups_over_http() {
    let app = test_app();

    let a = {
        let app = app.clone();
        tokio::spawn(async move {
            app.oneshot(signup_request("Ada", "race@example.com", "password-one"))
                .await
                .unwrap()
        })
    };
    let b = tokio::spawn(async move {
        app.oneshot(signup_request("Ada", "race@example.com", "password-two"))
            .await
            .unwrap()
    });

    let responses = [a.await.unwrap(), b.await.unwrap()];
    let statuses: Vec<StatusCode> = responses.iter().map(|r| r.status()).collect();

    assert!(statuses.contains(&StatusCode::OK));
    assert!(statuses.contains(&StatusCode::CONFLICT));

    for response in responses {
        if response.status() == StatusCode::OK {
            assert!(response.headers().contains_key(header::SET_COOKIE));
        } else {
            assert!(!response.headers().contains_key(header::SET_COOKIE));
        }
    }
}

#[tokio::test]
async fn test_exchange_returns_exact_token_fields() {
    let app = test_app_with(false, vec![gitlab_connection(3)]);
    let request = Request::builder()
        .method("POST")
        .uri("/api/oauth/vcs/3/exchange-oauth-token")
        .header("code", "abc123")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body, json!({ "access_token": "tok_x", "expires_in": 3600 }));
}

#[tokio::test]
async fn test_exchange_unknown_vcs_is_not_found() {
    let app = test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/oauth/vcs/99/exchange-oauth-token")
        .header("code", "abc123")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VCS_NOT_FOUND");
}

#[tokio::test]
async fn test_exchange_non_numeric_vcs_id_is_bad_request() {
    let app = test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/oauth/vcs/abc/exchange-oauth-token")
        .header("code", "abc123")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_exchange_unsupported_provider_hides_detail() {
    let mut connection = gitlab_connection(7);
    connection.provider_type = VcsProviderType::BitbucketCloud;
    let app = test_app_with(false, vec![connection]);

    let request = Request::builder()
        .method("POST")
        .uri("/api/oauth/vcs/7/exchange-oauth-token")
        .header("code", "abc123")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "UNSUPPORTED_PROVIDER");
    assert_eq!(body["error"]["message"], "Internal server error");
}
