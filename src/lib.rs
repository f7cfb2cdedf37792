//! rivalize web app: library with models and tournament logic.

pub mod api;
pub mod logic;
pub mod models;

pub use logic::{
    assign_clubs, generate_bracket, record_result, reconfigure_format, resolve_match_result,
    schedule_match, tournament_window, MatchOutcome, TournamentWindow, SUPPORTED_SLOTS,
};
pub use models::{
    normalize_email, ChatMessage, Club, ClubId, GameMatch, Invitation, InvitationError, InvitationId,
    InvitationKind, InvitationStatus, MatchId, MessageId, Notification, NotificationId, Phase,
    Role, Round, Side, Tournament, TournamentError, TournamentId, User, UserId,
};
