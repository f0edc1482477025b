//! Token Resolution
//!
//! Panel and phone endpoints authenticate with a bearer token passed as a query
//! parameter. Tokens are opaque: resolution is plain equality against the users of
//! the loaded document.

use crate::error::ApiError;
use crate::store::types::{Document, User};

use axum::async_trait;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;
use serde::de::DeserializeOwned;

pub const PANEL_TOKEN_PARAM: &str = "panel_token";
pub const PHONE_TOKEN_PARAM: &str = "phone_token";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Panel,
    Phone,
}

impl TokenKind {
    pub fn param(self) -> &'static str {
        match self {
            Self::Panel => PANEL_TOKEN_PARAM,
            Self::Phone => PHONE_TOKEN_PARAM,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct PanelTokenQuery {
    panel_token: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct PhoneTokenQuery {
    phone_token: Option<String>,
}

/// The raw `panel_token` query parameter, not yet resolved.
#[derive(Debug, Clone, Default)]
pub struct PanelToken(pub Option<String>);

/// The raw `phone_token` query parameter, not yet resolved.
#[derive(Debug, Clone, Default)]
pub struct PhoneToken(pub Option<String>);

/// Parses the query string. One that cannot be read (a repeated token parameter,
/// for instance) counts as an invalid token, so the caller still gets a JSON 401.
fn parse_query<T: DeserializeOwned>(parts: &Parts, kind: TokenKind) -> Result<T, ApiError> {
    Query::<T>::try_from_uri(&parts.uri)
        .map(|Query(query)| query)
        .map_err(|rejection| {
            tracing::warn!("Rejected unreadable {} query: {}", kind.param(), rejection);
            ApiError::invalid_token(kind.param())
        })
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for PanelToken {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parse_query::<PanelTokenQuery>(parts, TokenKind::Panel).map(|query| Self(query.panel_token))
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for PhoneToken {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parse_query::<PhoneTokenQuery>(parts, TokenKind::Phone).map(|query| Self(query.phone_token))
    }
}

/// Resolves `token` to a user. An absent or empty token is "manquant", a token
/// matching no user is "invalide".
pub fn resolve_user<'a>(
    document: &'a Document,
    kind: TokenKind,
    token: Option<&str>,
) -> Result<&'a User, ApiError> {
    let token = match token {
        Some(token) if !token.is_empty() => token,
        _ => {
            tracing::debug!("Rejected request without {}", kind.param());
            return Err(ApiError::missing_token(kind.param()));
        }
    };

    let user = match kind {
        TokenKind::Panel => document.user_by_panel_token(token),
        TokenKind::Phone => document.user_by_phone_token(token),
    };

    user.ok_or_else(|| {
        tracing::warn!("Rejected request with unknown {}", kind.param());
        ApiError::invalid_token(kind.param())
    })
}
