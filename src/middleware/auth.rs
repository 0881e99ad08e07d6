use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    AppState,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    pub role: Option<String>,
}

/// Identity resolved from the request's bearer token.
#[derive(Debug, Clone)]
pub struct Caller {
    pub user_id: String,
    pub role: Option<String>,
}

impl Caller {
    pub fn is_admin(&self) -> bool {
        self.role
            .as_deref()
            .is_some_and(|r| r.eq_ignore_ascii_case("admin"))
    }
}

impl From<Claims> for Caller {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            role: claims.role,
        }
    }
}

/// A caller that has been checked for the admin role. Only obtainable
/// through [`require_admin`].
#[derive(Debug, Clone)]
pub struct AdminCaller(Caller);

impl AdminCaller {
    pub fn user_id(&self) -> &str {
        &self.0.user_id
    }
}

pub fn require_admin(caller: Option<Caller>) -> Result<AdminCaller> {
    match caller {
        Some(caller) if caller.is_admin() => Ok(AdminCaller(caller)),
        Some(caller) => {
            tracing::warn!(user_id = %caller.user_id, "Non-admin caller rejected");
            Err(Error::Forbidden("Access denied. Administrators only.".to_string()))
        }
        None => Err(Error::Forbidden("Access denied. Administrators only.".to_string())),
    }
}

pub fn decode_bearer(headers: &HeaderMap, secret: &str) -> Result<Claims> {
    let Some(auth_header) = headers.get(AUTHORIZATION) else {
        return Err(Error::Forbidden("missing_authorization".to_string()));
    };
    let Ok(auth_str) = auth_header.to_str() else {
        return Err(Error::Forbidden("bad_authorization".to_string()));
    };
    let Some(token) = auth_str.strip_prefix("Bearer ") else {
        return Err(Error::Forbidden("unsupported_scheme".to_string()));
    };

    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        tracing::debug!(error = %e, "Rejected bearer token");
        Error::Forbidden("invalid_token".to_string())
    })
}

#[axum::async_trait]
impl FromRequestParts<AppState> for Caller {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self> {
        let claims = decode_bearer(&parts.headers, &state.jwt_secret)?;
        Ok(Caller::from(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "test_secret_key";

    fn token(role: Option<&str>, exp_offset: i64) -> String {
        let claims = Claims {
            sub: "admin-1".into(),
            exp: (chrono::Utc::now().timestamp() + exp_offset) as usize,
            role: role.map(str::to_string),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap()
    }

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn decodes_valid_bearer_token() {
        let headers = headers_with(&format!("Bearer {}", token(Some("admin"), 3600)));
        let claims = decode_bearer(&headers, SECRET).unwrap();
        assert_eq!(claims.sub, "admin-1");
        assert_eq!(claims.role.as_deref(), Some("admin"));
    }

    #[test]
    fn rejects_missing_foreign_and_expired_tokens() {
        assert!(matches!(
            decode_bearer(&HeaderMap::new(), SECRET),
            Err(Error::Forbidden(_))
        ));
        assert!(matches!(
            decode_bearer(&headers_with("Basic abc"), SECRET),
            Err(Error::Forbidden(_))
        ));
        let signed = format!("Bearer {}", token(Some("admin"), 3600));
        assert!(decode_bearer(&headers_with(&signed), "other_secret").is_err());
        let expired = format!("Bearer {}", token(Some("admin"), -3600));
        assert!(decode_bearer(&headers_with(&expired), SECRET).is_err());
    }

    #[test]
    fn require_admin_accepts_only_admins() {
        let caller = |role: Option<&str>| Caller {
            user_id: "u".into(),
            role: role.map(str::to_string),
        };
        assert!(require_admin(Some(caller(Some("admin")))).is_ok());
        assert!(require_admin(Some(caller(Some("ADMIN")))).is_ok());
        assert!(matches!(
            require_admin(Some(caller(Some("usuario")))),
            Err(Error::Forbidden(_))
        ));
        assert!(matches!(
            require_admin(Some(caller(None))),
            Err(Error::Forbidden(_))
        ));
        assert!(matches!(require_admin(None), Err(Error::Forbidden(_))));
    }
}
