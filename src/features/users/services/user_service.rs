use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::auth::password::{hash_password, verify_password};
use crate::features::users::dtos::{ChangePasswordDto, UpdateProfileDto, UserResponseDto};
use crate::features::users::models::{User, UserRole};
use sqlx::PgPool;
use uuid::Uuid;

/// Service for user accounts stored in the `users` table
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a user by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, name, role, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch user {}: {:?}", id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Find a user by email (case-insensitive)
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, name, role, created_at, updated_at
            FROM users
            WHERE LOWER(email) = LOWER($1)
            "#,
        )
        .bind(email.trim())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch user by email: {:?}", e);
            AppError::Database(e)
        })
    }

    /// Insert a new account. The email is stored lowercased.
    pub async fn create(
        &self,
        email: &str,
        password_hash: &str,
        name: Option<&str>,
        role: UserRole,
    ) -> Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash, name, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, password_hash, name, role, created_at, updated_at
            "#,
        )
        .bind(email.trim().to_lowercase())
        .bind(password_hash)
        .bind(name)
        .bind(role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                AppError::Conflict("Email already registered".to_string())
            }
            e => {
                tracing::error!("Failed to create user: {:?}", e);
                AppError::Database(e)
            }
        })
    }

    /// Get the caller's own account
    pub async fn get_me(&self, user: &AuthenticatedUser) -> Result<UserResponseDto> {
        Ok(self.get_by_id(user.user_id).await?.into())
    }

    /// Update the caller's display name
    pub async fn update_profile(
        &self,
        user: &AuthenticatedUser,
        dto: UpdateProfileDto,
    ) -> Result<UserResponseDto> {
        let updated = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, email, password_hash, name, role, created_at, updated_at
            "#,
        )
        .bind(user.user_id)
        .bind(dto.name.trim())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update profile: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user.user_id)))?;

        Ok(updated.into())
    }

    /// Replace the caller's password after verifying the current one
    pub async fn change_password(
        &self,
        user: &AuthenticatedUser,
        dto: ChangePasswordDto,
    ) -> Result<()> {
        let account = self.get_by_id(user.user_id).await?;

        if !verify_password(&dto.current_password, &account.password_hash)? {
            return Err(AppError::Validation(
                "Current password is incorrect".to_string(),
            ));
        }

        let new_hash = hash_password(&dto.new_password)?;

        sqlx::query("UPDATE users SET password_hash = $2, updated_at = NOW() WHERE id = $1")
            .bind(user.user_id)
            .bind(new_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update password: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!("Password changed for user {}", user.user_id);
        Ok(())
    }
}
