//! Invitations, notifications, and per-tournament chat messages.

use crate::models::club::ClubId;
use crate::models::tournament::TournamentId;
use crate::models::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an invitation.
pub type InvitationId = Uuid;

/// What accepting the invitation grants.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InvitationKind {
    /// A coach invites a player to join their club's roster.
    Club { club: ClubId },
    /// An organizer invites a club (addressed to its coach) into a tournament.
    Tournament { tournament: TournamentId, club: ClubId },
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvitationStatus {
    #[default]
    Pending,
    Accepted,
    Declined,
}

/// Errors for invitation state transitions.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InvitationError {
    /// The invitation was already accepted or declined.
    AlreadyAnswered,
    /// Only the invitee can answer.
    NotAddressedToUser,
}

impl std::fmt::Display for InvitationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvitationError::AlreadyAnswered => write!(f, "Invitation has already been answered"),
            InvitationError::NotAddressedToUser => {
                write!(f, "Invitation is addressed to someone else")
            }
        }
    }
}

/// An invitation from one user to another; accepting applies the membership
/// effect described by `kind`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Invitation {
    pub id: InvitationId,
    #[serde(flatten)]
    pub kind: InvitationKind,
    pub from: UserId,
    pub to: UserId,
    pub status: InvitationStatus,
    pub created_at: DateTime<Utc>,
}

impl Invitation {
    pub fn new(kind: InvitationKind, from: UserId, to: UserId, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            from,
            to,
            status: InvitationStatus::Pending,
            created_at: now,
        }
    }

    /// Record the invitee's answer. Pending -> Accepted/Declined, once.
    pub fn answer(
        &mut self,
        by: UserId,
        status: InvitationStatus,
    ) -> Result<(), InvitationError> {
        if by != self.to {
            return Err(InvitationError::NotAddressedToUser);
        }
        if self.status != InvitationStatus::Pending {
            return Err(InvitationError::AlreadyAnswered);
        }
        self.status = status;
        Ok(())
    }
}

/// Unique identifier for a notification.
pub type NotificationId = Uuid;

/// A one-line message shown in the user's notification feed.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub user: UserId,
    pub body: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(user: UserId, body: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user,
            body: body.into(),
            read: false,
            created_at: now,
        }
    }
}

/// Unique identifier for a chat message.
pub type MessageId = Uuid;

/// One message in a tournament's chat. Plain append-only CRUD, listed in send
/// order; no delivery or ordering guarantees beyond last write wins.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub tournament: TournamentId,
    pub author: UserId,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(
        tournament: TournamentId,
        author: UserId,
        body: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament,
            author,
            body: body.into(),
            sent_at: now,
        }
    }
}
