use std::sync::Mutex;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use test_utils::{
    builder::TestBuilder,
    context::TestContext,
    worldbank::{country, record, WorldBankStub},
};
use tower::ServiceExt;

use crate::server::{router, startup, state::AppState, worldbank::WorldBankClient};

mod probe;

const USERNAME: &str = "analyst";
const PASSWORD: &str = "s3cret-pass";

/// Full application wired to an in-memory database and a stubbed World Bank API.
struct TestApp {
    app: Router,
    stub: WorldBankStub,
    /// Keeps the in-memory database alive for the duration of the test.
    _context: TestContext,
    /// Session cookie from the most recent `Set-Cookie` response header.
    cookie: Mutex<Option<String>>,
}

/// Response status and decoded JSON body (`Value::Null` for an empty body).
struct TestResponse {
    status: StatusCode,
    body: Value,
}

impl TestApp {
    async fn new() -> Self {
        let mut context = TestBuilder::new()
            .with_dashboard_tables()
            .build()
            .await
            .unwrap();
        let db = context.database().await.unwrap().clone();
        let session_store = context.session_store().await.unwrap();

        let stub = WorldBankStub::start().await;
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(2))
            .build()
            .unwrap();
        let worldbank = WorldBankClient::new(http_client, stub.base_url());

        let app = router::app(
            AppState::new(db, worldbank),
            startup::session_layer(session_store, false),
        );

        Self {
            app,
            stub,
            _context: context,
            cookie: Mutex::new(None),
        }
    }

    /// Registers the default user, leaving the session logged in.
    async fn logged_in() -> Self {
        let app = Self::new().await;
        let response = app.register(USERNAME, PASSWORD, PASSWORD).await;
        assert_eq!(response.status, StatusCode::CREATED);
        app
    }

    async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder().method("GET").uri(uri);
        self.send(request, Body::empty()).await
    }

    async fn post_form(&self, uri: &str, form: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        self.send(request, Body::from(form.to_string())).await
    }

    async fn register(&self, username: &str, password1: &str, password2: &str) -> TestResponse {
        let form = format!(
            "username={}&password1={}&password2={}",
            username, password1, password2
        );
        self.post_form("/register/", &form).await
    }

    async fn login(&self, username: &str, password: &str) -> TestResponse {
        let form = format!("username={}&password={}", username, password);
        self.post_form("/login/", &form).await
    }

    fn cookie(&self) -> Option<String> {
        self.cookie.lock().unwrap().clone()
    }

    /// Replaces the cookie sent with subsequent requests.
    fn set_cookie(&self, cookie: Option<String>) {
        *self.cookie.lock().unwrap() = cookie;
    }

    async fn send(&self, mut request: axum::http::request::Builder, body: Body) -> TestResponse {
        if let Some(cookie) = self.cookie() {
            request = request.header(header::COOKIE, cookie);
        }

        let response = self
            .app
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();

        if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
            let pair = set_cookie.to_str().unwrap().split(';').next().unwrap();
            self.set_cookie(Some(pair.to_string()));
        }

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        TestResponse { status, body }
    }
}
