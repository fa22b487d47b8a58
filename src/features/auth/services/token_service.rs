use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::model::{AuthenticatedUser, Claims, TokenKind};
use crate::features::users::models::User;
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

/// Freshly signed access/refresh pair
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
}

/// Issues and verifies the HS256 tokens used by every protected route
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    issuer: String,
    audience: String,
    access_ttl_secs: i64,
    refresh_ttl_secs: i64,
    leeway: u64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            access_ttl_secs: config.access_ttl.as_secs() as i64,
            refresh_ttl_secs: config.refresh_ttl.as_secs() as i64,
            leeway: config.jwt_leeway.as_secs(),
        }
    }

    /// Sign a new access + refresh token pair for the user
    pub fn issue_pair(&self, user: &User) -> Result<TokenPair> {
        let access_token = self.sign(user, TokenKind::Access)?;
        let refresh_token = self.sign(user, TokenKind::Refresh)?;

        tracing::debug!("Issued token pair for user {}", user.id);

        Ok(TokenPair {
            access_token,
            refresh_token,
            expires_in: self.access_ttl_secs,
        })
    }

    fn sign(&self, user: &User, kind: TokenKind) -> Result<String> {
        let now = Utc::now().timestamp();
        let ttl = match kind {
            TokenKind::Access => self.access_ttl_secs,
            TokenKind::Refresh => self.refresh_ttl_secs,
        };
        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            role: user.role,
            kind,
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: now,
            exp: now + ttl,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(|e| {
            tracing::error!("Failed to sign {:?} token: {}", kind, e);
            AppError::Internal("Failed to sign token".to_string())
        })
    }

    fn decode(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        validation.leeway = self.leeway;

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("Token rejected: {}", e);
                AppError::Unauthorized("Invalid or expired token".to_string())
            })
    }

    /// Validate an access token and return the identity it carries
    pub fn verify_access(&self, token: &str) -> Result<AuthenticatedUser> {
        let claims = self.decode(token)?;
        if claims.kind != TokenKind::Access {
            return Err(AppError::Unauthorized(
                "Token is not an access token".to_string(),
            ));
        }
        Ok(claims.into())
    }

    /// Validate a refresh token and return its claims
    pub fn verify_refresh(&self, token: &str) -> Result<Claims> {
        let claims = self.decode(token)?;
        if claims.kind != TokenKind::Refresh {
            return Err(AppError::Unauthorized(
                "Invalid or expired refresh token".to_string(),
            ));
        }
        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::users::models::UserRole;
    use std::time::Duration;
    use uuid::Uuid;

    fn test_config(secret: &str, issuer: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            issuer: issuer.to_string(),
            audience: "launchtribe-api".to_string(),
            access_ttl: Duration::from_secs(300),
            refresh_ttl: Duration::from_secs(3600),
            jwt_leeway: Duration::from_secs(0),
        }
    }

    fn test_user(role: UserRole) -> User {
        User {
            id: Uuid::new_v4(),
            email: "ada@example.com".to_string(),
            password_hash: String::new(),
            name: Some("Ada".to_string()),
            role,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    const SECRET: &str = "an-unit-test-secret-that-is-long-enough";

    #[test]
    fn test_access_token_roundtrip_carries_identity() {
        let service = TokenService::new(&test_config(SECRET, "launchtribe"));
        let user = test_user(UserRole::Investor);

        let pair = service.issue_pair(&user).unwrap();
        assert_eq!(pair.expires_in, 300);

        let authenticated = service.verify_access(&pair.access_token).unwrap();
        assert_eq!(authenticated.user_id, user.id);
        assert_eq!(authenticated.email, user.email);
        assert_eq!(authenticated.role, UserRole::Investor);
    }

    #[test]
    fn test_refresh_token_is_not_an_access_token() {
        let service = TokenService::new(&test_config(SECRET, "launchtribe"));
        let pair = service.issue_pair(&test_user(UserRole::Admin)).unwrap();

        assert!(matches!(
            service.verify_access(&pair.refresh_token),
            Err(AppError::Unauthorized(_))
        ));
        assert!(matches!(
            service.verify_refresh(&pair.access_token),
            Err(AppError::Unauthorized(_))
        ));

        let claims = service.verify_refresh(&pair.refresh_token).unwrap();
        assert_eq!(claims.kind, TokenKind::Refresh);
        assert_eq!(claims.role, UserRole::Admin);
    }

    #[test]
    fn test_rejects_foreign_secret_and_issuer() {
        let ours = TokenService::new(&test_config(SECRET, "launchtribe"));
        let other_secret =
            TokenService::new(&test_config("some-other-secret-which-is-also-long", "launchtribe"));
        let other_issuer = TokenService::new(&test_config(SECRET, "someone-else"));

        let user = test_user(UserRole::Entrepreneur);
        let forged = other_secret.issue_pair(&user).unwrap();
        assert!(ours.verify_access(&forged.access_token).is_err());

        let wrong_issuer = other_issuer.issue_pair(&user).unwrap();
        assert!(ours.verify_access(&wrong_issuer.access_token).is_err());
    }

    #[test]
    fn test_rejects_garbage() {
        let service = TokenService::new(&test_config(SECRET, "launchtribe"));
        assert!(service.verify_access("not.a.jwt").is_err());
        assert!(service.verify_access("").is_err());
    }
}
