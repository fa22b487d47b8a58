use crate::core::config::AdminBootstrapConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::{
    AuthResponseDto, LoginRequestDto, RefreshTokenRequestDto, RefreshTokenResponseDto,
    RegisterRequestDto,
};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::auth::password::{hash_password, verify_password};
use crate::features::auth::services::token_service::{TokenPair, TokenService};
use crate::features::users::dtos::UserResponseDto;
use crate::features::users::models::{User, UserRole};
use crate::features::users::services::UserService;
use std::sync::Arc;

const TOKEN_TYPE: &str = "Bearer";

/// Service for authentication operations (register, login, refresh)
pub struct AuthService {
    users: Arc<UserService>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(users: Arc<UserService>, tokens: Arc<TokenService>) -> Self {
        Self { users, tokens }
    }

    /// Register a new entrepreneur or investor account
    pub async fn register(&self, dto: RegisterRequestDto) -> Result<AuthResponseDto> {
        if !dto.role.is_self_registrable() {
            return Err(AppError::Validation(
                "Role must be entrepreneur or investor".to_string(),
            ));
        }

        if self.users.find_by_email(&dto.email).await?.is_some() {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        let password_hash = hash_password(&dto.password)?;
        let user = self
            .users
            .create(
                &dto.email,
                &password_hash,
                dto.name.as_deref().map(str::trim),
                dto.role,
            )
            .await?;

        tracing::info!("Registered {} account {}", user.role, user.id);

        let pair = self.tokens.issue_pair(&user)?;
        Ok(auth_response(pair, user))
    }

    /// Login with email and password
    pub async fn login(&self, dto: LoginRequestDto) -> Result<AuthResponseDto> {
        let invalid = || AppError::Unauthorized("Invalid credentials".to_string());

        let Some(user) = self.users.find_by_email(&dto.email).await? else {
            tracing::warn!("Login attempt for unknown email");
            return Err(invalid());
        };

        if !verify_password(&dto.password, &user.password_hash)? {
            tracing::warn!("Failed login for user {}", user.id);
            return Err(invalid());
        }

        let pair = self.tokens.issue_pair(&user)?;
        Ok(auth_response(pair, user))
    }

    /// Exchange a refresh token for a new token pair
    pub async fn refresh_token(
        &self,
        dto: RefreshTokenRequestDto,
    ) -> Result<RefreshTokenResponseDto> {
        let claims = self.tokens.verify_refresh(&dto.refresh_token)?;

        // Re-read the account so deleted users cannot refresh
        let user = self.users.get_by_id(claims.sub).await.map_err(|e| match e {
            AppError::NotFound(_) => {
                AppError::Unauthorized("Invalid or expired refresh token".to_string())
            }
            other => other,
        })?;

        let pair = self.tokens.issue_pair(&user)?;
        Ok(RefreshTokenResponseDto {
            access_token: pair.access_token,
            token_type: TOKEN_TYPE.to_string(),
            expires_in: pair.expires_in,
            refresh_token: pair.refresh_token,
        })
    }

    /// Get current user info (for /me endpoint)
    pub async fn get_current_user(&self, user: &AuthenticatedUser) -> Result<UserResponseDto> {
        self.users.get_me(user).await
    }

    /// Create the configured admin account if it does not exist yet.
    /// Returns true when an account was created.
    pub async fn ensure_admin_account(&self, config: &AdminBootstrapConfig) -> Result<bool> {
        let Some((email, password)) = config.credentials() else {
            tracing::info!("Admin bootstrap disabled (ADMIN_EMAIL not set)");
            return Ok(false);
        };

        if let Some(existing) = self.users.find_by_email(email).await? {
            if existing.role != UserRole::Admin {
                return Err(AppError::Conflict(format!(
                    "ADMIN_EMAIL belongs to an existing {} account",
                    existing.role
                )));
            }
            return Ok(false);
        }

        let password_hash = hash_password(password)?;
        let admin = self
            .users
            .create(email, &password_hash, Some(&config.name), UserRole::Admin)
            .await?;

        tracing::info!("Bootstrapped admin account {}", admin.id);
        Ok(true)
    }
}

fn auth_response(pair: TokenPair, user: User) -> AuthResponseDto {
    AuthResponseDto {
        access_token: pair.access_token,
        token_type: TOKEN_TYPE.to_string(),
        expires_in: pair.expires_in,
        refresh_token: pair.refresh_token,
        user: user.into(),
    }
}
