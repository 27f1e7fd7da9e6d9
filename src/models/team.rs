use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A roster entry. Immutable once created; bulk import replaces the
/// whole roster rather than editing individual teams.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub logo_url: String,
    /// Auxiliary classification tag, derived from the name at import time.
    pub tag: String,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let id = Uuid::new_v4();
        let tag = name
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_lowercase();
        Self {
            logo_url: format!("https://picsum.photos/seed/{}/200/200", id),
            id,
            name,
            tag,
        }
    }
}
