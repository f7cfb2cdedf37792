//! Clubs: a coach plus a roster of players.

use crate::models::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a club.
pub type ClubId = Uuid;

/// A club created and managed by one coach.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Club {
    pub id: ClubId,
    pub name: String,
    pub coach: UserId,
    /// Roster; players join by accepting a club invitation.
    pub players: Vec<UserId>,
    pub created_at: DateTime<Utc>,
}

impl Club {
    pub fn new(name: impl Into<String>, coach: UserId, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            coach,
            players: Vec::new(),
            created_at: now,
        }
    }

    /// Add a player to the roster. Returns false if already a member.
    pub fn add_player(&mut self, player: UserId) -> bool {
        if self.players.contains(&player) {
            return false;
        }
        self.players.push(player);
        true
    }
}
