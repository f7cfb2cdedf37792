//! User accounts and roles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a user.
pub type UserId = Uuid;

/// What a user can do: players join clubs, coaches run clubs and tournaments,
/// visitors only browse.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Player,
    Coach,
    #[default]
    Visitor,
}

/// A registered user.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Sign-in key; stored trimmed and lowercased, unique across users.
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: Role, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: normalize_email(email.into()),
            role,
            created_at: now,
        }
    }
}

/// Canonical form used for sign-in lookup and uniqueness checks.
pub fn normalize_email(email: String) -> String {
    email.trim().to_ascii_lowercase()
}
