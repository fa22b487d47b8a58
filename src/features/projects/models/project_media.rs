use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Media kind matching the `media_type` database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "media_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

/// Database model for an ordered project image or video URL
#[derive(Debug, Clone, FromRow)]
pub struct ProjectMedia {
    pub id: Uuid,
    pub project_id: Uuid,
    pub media_type: MediaType,
    pub media_url: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}
