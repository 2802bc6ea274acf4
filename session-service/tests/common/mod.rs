use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::TokenIssuer;
use chrono::Duration;

use session_service::domain::user::models::EmailAddress;
use session_service::domain::user::models::User;
use session_service::domain::user::models::UserId;
use session_service::domain::user::ports::UserRepository;
use session_service::domain::user::service::AccountService;
use session_service::inbound::http::router::create_router;
use session_service::user::errors::UserError;

pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const TEST_ACCESS_TTL_SECONDS: i64 = 20;
pub const TEST_REFRESH_TTL_DAYS: i64 = 7;

/// Test application that spawns a real server on a random port
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

/// In-memory user store standing in for Postgres.
///
/// Enforces email uniqueness at create time, matching the database
/// constraint.
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users
            .values()
            .any(|existing| existing.email == user.email)
        {
            return Err(UserError::AccountExists(user.email.as_str().to_string()));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(users.get(id).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(users.values().find(|user| &user.email == email).cloned())
    }
}

/// Token issuer signing with the test secret; used to craft tokens outside
/// the application (expired ones, for instance).
pub fn test_issuer(access_ttl: Duration, refresh_ttl: Duration) -> TokenIssuer {
    TokenIssuer::new(TEST_JWT_SECRET, access_ttl, refresh_ttl)
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let repository = Arc::new(InMemoryUserRepository::new());
        let account_service = Arc::new(AccountService::new(repository));
        let token_issuer = Arc::new(test_issuer(
            Duration::seconds(TEST_ACCESS_TTL_SECONDS),
            Duration::days(TEST_REFRESH_TTL_DAYS),
        ));

        let application = create_router(
            account_service,
            token_issuer,
            false,
            "http://localhost:3000".parse().unwrap(),
        );

        tokio::spawn(async move { axum::serve(listener, application).await });

        let api_client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to build api client");

        Self {
            address,
            api_client,
        }
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client
            .post(format!("{}{}", self.address, path))
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }
}
