//! Link entity representing a shortened URL and its access statistics.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A shortened URL with lifecycle timestamps and access counters.
///
/// Rows are never physically removed: deletion sets `deleted_at`, after which
/// the link no longer redirects but stays visible to statistics.
///
/// Links returned by [`crate::application::services::ShortenerService`] carry the
/// full short link (`{base_url}/{code}`) in `short_code`; links coming straight
/// from a repository carry the bare 8-character code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: Uuid,
    pub target_url: String,
    pub short_code: String,
    pub last_access: Option<DateTime<Utc>>,
    pub access_count: i64,
    pub created_at: DateTime<Utc>,
    pub expire_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Link {
    /// Returns true if the link has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Returns true if the link has passed its expiry time.
    ///
    /// Expiry is advisory: nothing refuses a redirect because of it.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expire_at
    }

    /// Rewrites `short_code` into the public short link under `base_url`.
    pub fn with_short_link(mut self, base_url: &str) -> Self {
        self.short_code = format!("{}/{}", base_url.trim_end_matches('/'), self.short_code);
        self
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub id: Uuid,
    pub target_url: String,
    pub short_code: String,
    pub expire_at: DateTime<Utc>,
}

impl NewLink {
    /// Materializes the row a repository stores for this command at `now`.
    pub fn into_link(self, now: DateTime<Utc>) -> Link {
        Link {
            id: self.id,
            target_url: self.target_url,
            short_code: self.short_code,
            last_access: None,
            access_count: 0,
            created_at: now,
            expire_at: self.expire_at,
            updated_at: now,
            deleted_at: None,
        }
    }
}
