//! Match (fixture), Side, Phase, and Round for single-elimination brackets.

use crate::models::club::ClubId;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Which side of a fixture won.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    A,
    B,
}

/// Elimination stage a round belongs to, counted backward from the final.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Final,
    SemiFinals,
    QuarterFinals,
    RoundOf16,
    RoundOf32,
    /// Earlier stage: round number counted from the final.
    Round(u32),
}

impl Phase {
    /// Phase for the round `from_final` stages before the final (0 = the final itself).
    pub fn from_final(from_final: u32) -> Self {
        match from_final {
            0 => Phase::Final,
            1 => Phase::SemiFinals,
            2 => Phase::QuarterFinals,
            3 => Phase::RoundOf16,
            4 => Phase::RoundOf32,
            n => Phase::Round(n + 1),
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Final => write!(f, "Finale"),
            Phase::SemiFinals => write!(f, "Demi-finales"),
            Phase::QuarterFinals => write!(f, "Quarts de finale"),
            Phase::RoundOf16 => write!(f, "Huitièmes de finale"),
            Phase::RoundOf32 => write!(f, "Seizièmes de finale"),
            Phase::Round(n) => write!(f, "Tour {}", n),
        }
    }
}

/// A single fixture. Clubs, scores, and the winner are filled in after generation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    /// Home side club (assigned by the organizer, None until then).
    pub club_a: Option<ClubId>,
    /// Away side club.
    pub club_b: Option<ClubId>,
    /// Day the fixture is played (day granularity).
    pub date: NaiveDate,
    /// Kick-off time of day, combined with `date` for the end-of-tournament instant.
    pub time: NaiveTime,
    pub score_a: Option<u32>,
    pub score_b: Option<u32>,
    /// Penalty shootout scores, set only when regular time was level.
    pub penalty_a: Option<u32>,
    pub penalty_b: Option<u32>,
    /// None until a result is recorded; Some means the record is locked.
    pub winner: Option<Side>,
}

impl GameMatch {
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            club_a: None,
            club_b: None,
            date,
            time,
            score_a: None,
            score_b: None,
            penalty_a: None,
            penalty_b: None,
            winner: None,
        }
    }

    /// A decided match refuses further mutation.
    pub fn is_decided(&self) -> bool {
        self.winner.is_some()
    }

    /// Composite instant: the match's own date plus the time-of-day of `time`.
    pub fn kickoff(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

/// One elimination stage: phase label plus its fixtures in bracket order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub phase: Phase,
    pub matches: Vec<GameMatch>,
}
