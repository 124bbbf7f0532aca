//! Link representation returned by listing and statistics endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::Link;

/// A link with its access statistics.
///
/// `short_link` is the full public URL of the link.
#[derive(Debug, Serialize)]
pub struct LinkItem {
    pub id: Uuid,
    pub target_url: String,
    pub short_link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_access: Option<DateTime<Utc>>,
    pub access_count: i64,
    pub created_at: DateTime<Utc>,
    pub expire_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Link> for LinkItem {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            target_url: link.target_url,
            short_link: link.short_code,
            last_access: link.last_access,
            access_count: link.access_count,
            created_at: link.created_at,
            expire_at: link.expire_at,
            updated_at: link.updated_at,
            deleted_at: link.deleted_at,
        }
    }
}
