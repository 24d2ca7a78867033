use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use jsonwebtoken::{decode, decode_header, jwk::JwkSet, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::sync::RwLock;

use crate::config::AuthConfig;
use crate::error::{Error, Result};
use crate::services::user_service::Identity;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

impl Claims {
    pub fn identity(&self) -> Identity {
        Identity {
            sub: self.sub.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
            picture: self.picture.clone(),
        }
    }
}

enum KeySource {
    Secret(DecodingKey),
    Jwks {
        url: String,
        http: reqwest::Client,
        cache: RwLock<JwksCache>,
    },
}

/// Minimum spacing between key set fetches triggered by unknown key ids.
const JWKS_MIN_REFRESH: Duration = Duration::from_secs(60);

#[derive(Default)]
struct JwksCache {
    keys: HashMap<String, DecodingKey>,
    fetched_at: Option<Instant>,
}

enum Lookup {
    Hit(DecodingKey),
    Refresh,
    Throttled,
}

impl JwksCache {
    fn lookup(&self, kid: &str, now: Instant) -> Lookup {
        if let Some(key) = self.keys.get(kid) {
            return Lookup::Hit(key.clone());
        }
        match self.fetched_at {
            Some(at) if now.saturating_duration_since(at) < JWKS_MIN_REFRESH => Lookup::Throttled,
            _ => Lookup::Refresh,
        }
    }

    fn replace(&mut self, keys: HashMap<String, DecodingKey>, now: Instant) {
        self.keys = keys;
        self.fetched_at = Some(now);
    }
}

struct Inner {
    source: KeySource,
    validation: Validation,
}

/// Verifies bearer tokens from the identity provider, either against a shared
/// HS256 secret or against the provider's published RS256 key set.
#[derive(Clone)]
pub struct TokenVerifier {
    inner: Arc<Inner>,
}

impl TokenVerifier {
    pub fn from_config(auth: &AuthConfig) -> Self {
        match auth {
            AuthConfig::SharedSecret {
                secret,
                issuer,
                audience,
            } => Self::shared_secret(secret, issuer.as_deref(), audience.as_deref()),
            AuthConfig::Jwks {
                jwks_url,
                issuer,
                audience,
            } => Self::jwks(jwks_url, issuer, audience.as_deref()),
        }
    }

    pub fn shared_secret(secret: &str, issuer: Option<&str>, audience: Option<&str>) -> Self {
        Self {
            inner: Arc::new(Inner {
                source: KeySource::Secret(DecodingKey::from_secret(secret.as_bytes())),
                validation: validation(Algorithm::HS256, issuer, audience),
            }),
        }
    }

    pub fn jwks(url: &str, issuer: &str, audience: Option<&str>) -> Self {
        Self {
            inner: Arc::new(Inner {
                source: KeySource::Jwks {
                    url: url.to_string(),
                    http: reqwest::Client::new(),
                    cache: RwLock::new(JwksCache::default()),
                },
                validation: validation(Algorithm::RS256, Some(issuer), audience),
            }),
        }
    }

    pub async fn verify(&self, token: &str) -> Result<Claims> {
        let key = match &self.inner.source {
            KeySource::Secret(key) => key.clone(),
            KeySource::Jwks { url, http, cache } => {
                let kid = decode_header(token)?
                    .kid
                    .ok_or_else(|| Error::Unauthorized("invalid_token".to_string()))?;
                signing_key(url, http, cache, &kid).await?
            }
        };
        let data = decode::<Claims>(token, &key, &self.inner.validation)?;
        Ok(data.claims)
    }
}

fn validation(alg: Algorithm, issuer: Option<&str>, audience: Option<&str>) -> Validation {
    let mut validation = Validation::new(alg);
    validation.validate_exp = true;
    if let Some(issuer) = issuer {
        validation.set_issuer(&[issuer]);
    }
    match audience {
        Some(audience) => validation.set_audience(&[audience]),
        None => validation.validate_aud = false,
    }
    validation
}

/// Looks the key up in the cache. An unknown id refetches the key set so
/// rotated keys are picked up, at most once per `JWKS_MIN_REFRESH`.
async fn signing_key(
    url: &str,
    http: &reqwest::Client,
    cache: &RwLock<JwksCache>,
    kid: &str,
) -> Result<DecodingKey> {
    match cache.read().await.lookup(kid, Instant::now()) {
        Lookup::Hit(key) => return Ok(key),
        Lookup::Throttled => return Err(Error::Unauthorized("invalid_token".to_string())),
        Lookup::Refresh => {}
    }

    // Concurrent misses queue on the write lock; re-check before fetching.
    let mut cache = cache.write().await;
    match cache.lookup(kid, Instant::now()) {
        Lookup::Hit(key) => return Ok(key),
        Lookup::Throttled => return Err(Error::Unauthorized("invalid_token".to_string())),
        Lookup::Refresh => {}
    }

    let fetched = fetch_key_set(url, http).await;
    // A failed fetch also counts against the refresh interval.
    let fresh = match fetched {
        Ok(fresh) => fresh,
        Err(e) => {
            cache.fetched_at = Some(Instant::now());
            return Err(e);
        }
    };
    let found = fresh.get(kid).cloned();
    cache.replace(fresh, Instant::now());
    found.ok_or_else(|| Error::Unauthorized("invalid_token".to_string()))
}

async fn fetch_key_set(url: &str, http: &reqwest::Client) -> Result<HashMap<String, DecodingKey>> {
    let set: JwkSet = http
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let mut fresh = HashMap::new();
    for jwk in &set.keys {
        let Some(id) = jwk.common.key_id.clone() else {
            continue;
        };
        match DecodingKey::from_jwk(jwk) {
            Ok(key) => {
                fresh.insert(id, key);
            }
            Err(e) => tracing::warn!(kid = %id, error = %e, "skipping unusable jwk"),
        }
    }
    tracing::info!(keys = fresh.len(), "refreshed signing keys");
    Ok(fresh)
}

fn unauthorized(code: &str) -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({ "error": code }))).into_response()
}

pub async fn require_bearer_auth(
    State(verifier): State<TokenVerifier>,
    mut req: Request,
    next: Next,
) -> Response {
    let Some(auth_header) = req.headers().get(axum::http::header::AUTHORIZATION) else {
        return unauthorized("missing_authorization");
    };
    let Ok(auth_str) = auth_header.to_str() else {
        return unauthorized("bad_authorization");
    };
    let Some(token) = auth_str.strip_prefix("Bearer ") else {
        return unauthorized("unsupported_scheme");
    };

    match verifier.verify(token.trim()).await {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        Err(e) => {
            tracing::debug!(error = %e, "bearer token rejected");
            unauthorized("invalid_token")
        }
    }
}
