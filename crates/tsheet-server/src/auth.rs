//! Session injection.
//!
//! Callers present a bearer token; the configured [`AuthProvider`] turns it
//! into an [`Identity`], and [`require_session`] stores the resulting
//! [`Session`] in the request extensions for handlers to extract.

use std::collections::HashSet;

use async_trait::async_trait;
use axum::extract::{Request, State};
use axum::http::{header, HeaderMap};
use axum::middleware::Next;
use axum::response::Response;

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub authenticated: bool,
}

impl Identity {
    pub fn anonymous() -> Self { Self { name: "anonymous".into(), authenticated: false } }
    pub fn user(name: impl Into<String>) -> Self { Self { name: name.into(), authenticated: true } }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credentials {
    Bearer(String),
    Anonymous,
}

impl Credentials {
    /// Read credentials from an `Authorization` header, if any.
    pub fn from_headers(headers: &HeaderMap) -> ServerResult<Self> {
        let Some(value) = headers.get(header::AUTHORIZATION) else {
            return Ok(Self::Anonymous);
        };
        let value = value.to_str().map_err(|_| {
            ServerError::Unauthorized("authorization header is not valid text".into())
        })?;
        match value.split_once(' ') {
            Some((scheme, token))
                if scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() =>
            {
                Ok(Self::Bearer(token.trim().to_string()))
            }
            _ => Err(ServerError::Unauthorized("expected a bearer token".into())),
        }
    }
}

/// Per-request session, available to handlers as `Extension<Session>`.
#[derive(Clone, Debug)]
pub struct Session {
    pub identity: Identity,
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> ServerResult<Identity>;
}

/// Accepts every bearer token.
pub struct AllowAllAuth;

#[async_trait]
impl AuthProvider for AllowAllAuth {
    async fn authenticate(&self, credentials: &Credentials) -> ServerResult<Identity> {
        match credentials {
            Credentials::Bearer(token) => Ok(Identity::user(token_label(token))),
            Credentials::Anonymous => Ok(Identity::anonymous()),
        }
    }
}

/// Accepts only bearer tokens from a fixed set.
pub struct StaticTokenAuth {
    tokens: HashSet<String>,
}

impl StaticTokenAuth {
    pub fn new(tokens: impl IntoIterator<Item = String>) -> Self {
        Self { tokens: tokens.into_iter().collect() }
    }
}

#[async_trait]
impl AuthProvider for StaticTokenAuth {
    async fn authenticate(&self, credentials: &Credentials) -> ServerResult<Identity> {
        match credentials {
            Credentials::Bearer(token) if self.tokens.contains(token) => {
                Ok(Identity::user(token_label(token)))
            }
            Credentials::Bearer(_) => Err(ServerError::Unauthorized("unknown bearer token".into())),
            Credentials::Anonymous => Ok(Identity::anonymous()),
        }
    }
}

fn token_label(token: &str) -> String {
    let prefix: String = token.chars().take(8).collect();
    format!("bearer:{prefix}")
}

/// Middleware that authenticates the caller and injects a [`Session`].
pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> ServerResult<Response> {
    let credentials = Credentials::from_headers(request.headers())?;
    let identity = state.auth.authenticate(&credentials).await?;
    if !identity.authenticated && !state.allow_anonymous {
        return Err(ServerError::Unauthorized("a bearer token is required".into()));
    }
    tracing::debug!(identity = %identity.name, "session established");
    request.extensions_mut().insert(Session { identity });
    Ok(next.run(request).await)
}
