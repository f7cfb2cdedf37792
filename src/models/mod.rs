//! Data structures for the platform: users, clubs, tournaments, messaging.

mod club;
mod game;
mod messaging;
mod tournament;
mod user;

pub use club::{Club, ClubId};
pub use game::{GameMatch, MatchId, Phase, Round, Side};
pub use messaging::{
    ChatMessage, Invitation, InvitationError, InvitationId, InvitationKind, InvitationStatus,
    MessageId, Notification, NotificationId,
};
pub use tournament::{Tournament, TournamentError, TournamentId};
pub use user::{normalize_email, Role, User, UserId};
