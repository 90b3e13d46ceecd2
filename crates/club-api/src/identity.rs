//! Identity extraction.
//!
//! Tokens and credentials are validated upstream; this module only reads the
//! caller's username out of the `Authorization` header.
//!
//! | Scheme | Principal | Username |
//! |--------|-----------|----------|
//! | `Bearer <jwt>` | [`Principal::Token`] | `preferred_username`, else `sub` |
//! | `Basic <b64>`  | [`Principal::Named`] | the user part of `user:password` |

use axum::{
  extract::FromRequestParts,
  http::{HeaderMap, header, request::Parts},
};
use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD as B64, URL_SAFE_NO_PAD as B64_URL};
use serde::Deserialize;

use crate::error::ApiError;

/// The claims of a structured token that this service cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Claims {
  pub preferred_username: Option<String>,
  /// Subject; the token's generic principal name.
  pub sub:                Option<String>,
}

/// The authenticated principal carried by a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Principal {
  Token(Claims),
  Named(String),
}

impl Principal {
  /// Read the principal from the `Authorization` header, if one is present
  /// and decodable.
  pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    // Auth schemes are case-insensitive.
    let (scheme, credentials) = value.trim().split_once(' ')?;

    if scheme.eq_ignore_ascii_case("Bearer") {
      return decode_claims(credentials.trim()).map(Principal::Token);
    }
    if !scheme.eq_ignore_ascii_case("Basic") {
      return None;
    }

    let decoded = B64.decode(credentials.trim()).ok()?;
    let creds = String::from_utf8(decoded).ok()?;
    let (user, _password) = creds.split_once(':')?;
    Some(Principal::Named(user.to_owned()))
  }

  /// The username used for ownership checks. A structured token is read
  /// through its `preferred_username` claim; any other principal falls back
  /// to its plain name.
  pub fn username(&self) -> Option<&str> {
    let name = match self {
      Principal::Token(claims) => claims
        .preferred_username
        .as_deref()
        .or(claims.sub.as_deref()),
      Principal::Named(name) => Some(name.as_str()),
    };
    name.filter(|n| !n.is_empty())
  }
}

/// Decode the payload segment of a compact JWT. The signature is not checked.
fn decode_claims(token: &str) -> Option<Claims> {
  let payload = token.split('.').nth(1)?;
  let bytes = B64_URL.decode(payload.trim_end_matches('=')).ok()?;
  serde_json::from_slice(&bytes).ok()
}

/// The caller's username. Rejects with 401 when no identity can be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
  pub username: String,
}

impl<S> FromRequestParts<S> for Identity
where
  S: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    _state: &S,
  ) -> Result<Self, Self::Rejection> {
    let principal = Principal::from_headers(&parts.headers);
    let username = principal
      .as_ref()
      .and_then(Principal::username)
      .ok_or(ApiError::Unauthorized)?;
    Ok(Identity { username: username.to_owned() })
  }
}
