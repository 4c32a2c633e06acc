//! Thin wrapper over the external email/password identity provider. The
//! repositories perform no authorization checks themselves; callers gate
//! admin-only writes on a session verified through this client.

pub mod dto;

use std::env;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::AppError;

#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub base_url: String,
    pub api_key: String,
}

impl AuthConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        let base_url = env::var("AUTH_BASE_URL")
            .unwrap_or_else(|_| "https://identitytoolkit.googleapis.com".to_string());
        let api_key = env::var("AUTH_API_KEY")
            .map_err(|_| AppError::Auth("AUTH_API_KEY is not set".to_string()))?;

        Ok(Self { base_url, api_key })
    }
}

/// An authenticated session as issued by the provider.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub email: String,
    pub expires_in: Option<u64>,
}

/// A signed-in user. Any signed-in user is the admin role.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub email: String,
}

#[async_trait]
pub trait AuthClient: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AppError>;
    async fn sign_out(&self, token: &str) -> Result<(), AppError>;
    async fn verify(&self, token: &str) -> Result<Option<AuthUser>, AppError>;
}

pub struct HttpAuthClient {
    client: Client,
    config: AuthConfig,
}

impl HttpAuthClient {
    pub fn new(config: AuthConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Auth(format!("Failed to build http client: {e}")))?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl AuthClient for HttpAuthClient {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AppError> {
        let url = format!(
            "{}/v1/accounts:signInWithPassword?key={}",
            self.config.base_url, self.config.api_key
        );

        let request_body = dto::SignInRequest {
            email: email.to_owned(),
            password: password.to_owned(),
            return_secure_token: true,
        };

        let response = self
            .client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AppError::Auth(format!("identity provider unreachable: {e}")))?;

        if !response.status().is_success() {
            let message = response
                .json::<dto::ProviderError>()
                .await
                .map(|e| e.error.message)
                .unwrap_or_else(|_| "sign-in rejected".to_string());
            return Err(AppError::Auth(message));
        }

        let body: dto::SignInResponse = response
            .json()
            .await
            .map_err(|e| AppError::Auth(format!("unexpected identity provider response: {e}")))?;

        Ok(AuthSession {
            token: body.id_token,
            email: body.email,
            expires_in: body.expires_in.and_then(|s| s.parse().ok()),
        })
    }

    async fn sign_out(&self, _token: &str) -> Result<(), AppError> {
        // Tokens are bearer-style and expire on their own; the provider keeps
        // no server-side session to revoke.
        debug!("sign-out requested, token discarded client-side");
        Ok(())
    }

    async fn verify(&self, token: &str) -> Result<Option<AuthUser>, AppError> {
        let url = format!(
            "{}/v1/accounts:lookup?key={}",
            self.config.base_url, self.config.api_key
        );

        let request_body = dto::LookupRequest {
            id_token: token.to_owned(),
        };

        let response = self
            .client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AppError::Auth(format!("identity provider unreachable: {e}")))?;

        if !response.status().is_success() {
            return Ok(None);
        }

        let body: dto::LookupResponse = response
            .json()
            .await
            .map_err(|e| AppError::Auth(format!("unexpected identity provider response: {e}")))?;

        Ok(body.users.into_iter().next().map(|user| AuthUser {
            email: user.email.unwrap_or_default(),
        }))
    }
}

/// Client for deployments with no identity provider configured: every
/// sign-in fails and no token verifies, so admin writes stay locked.
pub struct DisabledAuthClient;

#[async_trait]
impl AuthClient for DisabledAuthClient {
    async fn sign_in(&self, _email: &str, _password: &str) -> Result<AuthSession, AppError> {
        Err(AppError::Auth("sign-in is not configured".to_string()))
    }

    async fn sign_out(&self, _token: &str) -> Result<(), AppError> {
        Ok(())
    }

    async fn verify(&self, _token: &str) -> Result<Option<AuthUser>, AppError> {
        Ok(None)
    }
}
