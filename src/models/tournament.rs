//! Tournament and TournamentError.

use crate::models::club::ClubId;
use crate::models::game::{GameMatch, MatchId, Round};
use crate::models::user::UserId;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Bracket size is not one of the supported powers of two (4, 8, 16, 32).
    InvalidSlotCount(u32),
    /// No match with this id in the bracket.
    MatchNotFound(MatchId),
    /// The match already has a winner; its record is locked.
    MatchAlreadyDecided(MatchId),
    /// At least one match is decided, so the bracket can no longer be regenerated.
    BracketLocked,
    /// A result needs both clubs assigned first.
    ClubsNotAssigned,
    /// The same club cannot play both sides of a fixture.
    SameClubBothSides,
    /// Club is not registered in this tournament.
    ClubNotRegistered(ClubId),
    /// Club is already registered in this tournament.
    ClubAlreadyRegistered(ClubId),
    /// All slots are taken.
    TournamentFull,
    /// Regular time was level but no penalty scores were supplied.
    MissingPenaltyScores,
    /// Penalty shootout scores are equal; not a valid terminal state.
    TiedPenaltyScore,
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InvalidSlotCount(n) => {
                write!(f, "Unsupported slot count {} (must be 4, 8, 16 or 32)", n)
            }
            TournamentError::MatchNotFound(_) => write!(f, "Match not found"),
            TournamentError::MatchAlreadyDecided(_) => {
                write!(f, "Match already has a recorded result")
            }
            TournamentError::BracketLocked => {
                write!(f, "Bracket cannot change once a result has been recorded")
            }
            TournamentError::ClubsNotAssigned => {
                write!(f, "Both clubs must be assigned before recording a result")
            }
            TournamentError::SameClubBothSides => {
                write!(f, "A club cannot play against itself")
            }
            TournamentError::ClubNotRegistered(_) => {
                write!(f, "Club is not registered in this tournament")
            }
            TournamentError::ClubAlreadyRegistered(_) => {
                write!(f, "Club is already registered in this tournament")
            }
            TournamentError::TournamentFull => write!(f, "All tournament slots are taken"),
            TournamentError::MissingPenaltyScores => {
                write!(f, "Scores are level: penalty shootout scores are required")
            }
            TournamentError::TiedPenaltyScore => {
                write!(f, "Penalty shootout scores cannot be equal")
            }
        }
    }
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// A single-elimination tournament: format, bracket, participants, and the
/// derived schedule window.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    /// Coach who created the tournament; only they may mutate it.
    pub organizer: UserId,
    /// Bracket capacity: 4, 8, 16 or 32 clubs.
    pub available_slots: u32,
    /// Whether every fixture is played home and away (two legs).
    pub return_matches: bool,
    /// Full bracket, earliest round first. Generated once at creation;
    /// regenerated only while no result has been recorded.
    pub rounds: Vec<Round>,
    /// Derived: earliest match date. Never authored directly.
    pub start_date: Option<NaiveDate>,
    /// Derived: latest match date + kick-off time.
    pub end_date: Option<NaiveDateTime>,
    /// Registered clubs, in registration order.
    pub participants: Vec<ClubId>,
    pub created_at: DateTime<Utc>,
}

impl Tournament {
    /// Create a tournament around an already generated bracket
    /// (see `logic::generate_bracket`). Derives the initial window.
    pub fn new(
        name: impl Into<String>,
        organizer: UserId,
        available_slots: u32,
        return_matches: bool,
        rounds: Vec<Round>,
        now: DateTime<Utc>,
    ) -> Self {
        let mut t = Self {
            id: Uuid::new_v4(),
            name: name.into(),
            organizer,
            available_slots,
            return_matches,
            rounds,
            start_date: None,
            end_date: None,
            participants: Vec::new(),
            created_at: now,
        };
        t.recompute_window();
        t
    }

    /// Recompute `start_date`/`end_date` from the current match schedule.
    /// Must be called after any mutation that can move the window.
    pub fn recompute_window(&mut self) {
        match crate::logic::tournament_window(&self.rounds) {
            Some(w) => {
                self.start_date = Some(w.start_date);
                self.end_date = Some(w.end_date);
            }
            None => {
                self.start_date = None;
                self.end_date = None;
            }
        }
    }

    /// Reference to a match anywhere in the bracket.
    pub fn find_match(&self, id: MatchId) -> Option<&GameMatch> {
        self.rounds
            .iter()
            .flat_map(|r| r.matches.iter())
            .find(|m| m.id == id)
    }

    /// Mutable reference to a match anywhere in the bracket.
    pub fn find_match_mut(&mut self, id: MatchId) -> Option<&mut GameMatch> {
        self.rounds
            .iter_mut()
            .flat_map(|r| r.matches.iter_mut())
            .find(|m| m.id == id)
    }

    /// True once any match carries a winner (locks the bracket shape).
    pub fn has_decided_match(&self) -> bool {
        self.rounds
            .iter()
            .flat_map(|r| r.matches.iter())
            .any(|m| m.is_decided())
    }

    /// Register a club into the tournament (capacity = `available_slots`).
    pub fn register_club(&mut self, club: ClubId) -> Result<(), TournamentError> {
        if self.participants.contains(&club) {
            return Err(TournamentError::ClubAlreadyRegistered(club));
        }
        if self.participants.len() >= self.available_slots as usize {
            return Err(TournamentError::TournamentFull);
        }
        self.participants.push(club);
        Ok(())
    }
}
