use std::sync::Arc;

use account_service::domain::user::service::UserService;
use account_service::inbound::http::router::create_router;
use account_service::outbound::repositories::InMemoryUserRepository;
use auth::JwtHandler;
use auth::TokenIssuer;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub repository: Arc<InMemoryUserRepository>,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let repository = Arc::new(InMemoryUserRepository::new());
        let user_service = Arc::new(UserService::new(Arc::clone(&repository)));
        let token_issuer =
            Arc::new(TokenIssuer::new(JWT_SECRET).expect("Failed to create token issuer"));

        let router = create_router(user_service, token_issuer, 15);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            repository,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(JWT_SECRET),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/account{}", self.address, path)
    }

    /// POST a form to an account endpoint
    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> reqwest::Response {
        self.api_client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn register(&self, username: &str, password: &str, email: &str) -> reqwest::Response {
        self.post_form(
            "/register",
            &[("username", username), ("password", password), ("email", email)],
        )
        .await
    }

    pub async fn authenticate(&self, username: &str, password: &str) -> reqwest::Response {
        self.post_form("/authenticate", &[("username", username), ("password", password)])
            .await
    }

    /// Register, authenticate, and return the issued token
    pub async fn login_new_user(&self, username: &str, password: &str, email: &str) -> String {
        let response = self.register(username, password, email).await;
        assert!(response.status().is_success(), "registration failed");

        let body: serde_json::Value = self
            .authenticate(username, password)
            .await
            .json()
            .await
            .expect("Failed to parse response");

        body["data"]["token"]
            .as_str()
            .expect("token missing from response")
            .to_string()
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client.get(self.url(path)).bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(self.url(path)).bearer_auth(token)
    }
}
