//! Organizer operations on an existing bracket: reconfigure the format,
//! assign clubs, schedule fixtures, record results.

use crate::logic::bracket::generate_bracket;
use crate::logic::results::resolve_match_result;
use crate::models::{ClubId, MatchId, Side, Tournament, TournamentError};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Change slot count and/or the return-match flag.
///
/// A real change regenerates the whole bracket (discarding club assignments
/// and schedules, as a format change invalidates them) and recomputes the
/// window; when the resolved values equal the current ones the call is a
/// no-op and the bracket is untouched. Regeneration is refused once any
/// match is decided.
pub fn reconfigure_format(
    tournament: &mut Tournament,
    slots: Option<u32>,
    return_matches: Option<bool>,
    now: DateTime<Utc>,
) -> Result<(), TournamentError> {
    let slots = slots.unwrap_or(tournament.available_slots);
    let return_matches = return_matches.unwrap_or(tournament.return_matches);
    if slots == tournament.available_slots && return_matches == tournament.return_matches {
        return Ok(());
    }
    if tournament.has_decided_match() {
        return Err(TournamentError::BracketLocked);
    }
    let rounds = generate_bracket(slots, return_matches, now)?;
    tournament.available_slots = slots;
    tournament.return_matches = return_matches;
    tournament.rounds = rounds;
    tournament.recompute_window();
    Ok(())
}

/// Fill in the two participants of a fixture. Both clubs must be registered
/// in the tournament and distinct; decided matches are locked.
pub fn assign_clubs(
    tournament: &mut Tournament,
    match_id: MatchId,
    club_a: ClubId,
    club_b: ClubId,
) -> Result<(), TournamentError> {
    if club_a == club_b {
        return Err(TournamentError::SameClubBothSides);
    }
    for club in [club_a, club_b] {
        if !tournament.participants.contains(&club) {
            return Err(TournamentError::ClubNotRegistered(club));
        }
    }
    let m = tournament
        .find_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    if m.is_decided() {
        return Err(TournamentError::MatchAlreadyDecided(match_id));
    }
    m.club_a = Some(club_a);
    m.club_b = Some(club_b);
    Ok(())
}

/// Set one fixture's date and kick-off time, then recompute the tournament
/// window. Decided matches are locked.
pub fn schedule_match(
    tournament: &mut Tournament,
    match_id: MatchId,
    date: NaiveDate,
    time: NaiveTime,
) -> Result<(), TournamentError> {
    let m = tournament
        .find_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    if m.is_decided() {
        return Err(TournamentError::MatchAlreadyDecided(match_id));
    }
    m.date = date;
    m.time = time;
    tournament.recompute_window();
    Ok(())
}

/// Record a played fixture's result: resolve the winner, store the scores,
/// and lock the match. Returns the winning club for notification fan-out.
pub fn record_result(
    tournament: &mut Tournament,
    match_id: MatchId,
    score_a: u32,
    score_b: u32,
    penalties: Option<(u32, u32)>,
) -> Result<ClubId, TournamentError> {
    let m = tournament
        .find_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    if m.is_decided() {
        return Err(TournamentError::MatchAlreadyDecided(match_id));
    }
    let (club_a, club_b) = match (m.club_a, m.club_b) {
        (Some(a), Some(b)) => (a, b),
        _ => return Err(TournamentError::ClubsNotAssigned),
    };

    let outcome = resolve_match_result(score_a, score_b, penalties)?;
    m.score_a = Some(score_a);
    m.score_b = Some(score_b);
    if outcome.decided_by_penalties {
        if let Some((penalty_a, penalty_b)) = penalties {
            m.penalty_a = Some(penalty_a);
            m.penalty_b = Some(penalty_b);
        }
    }
    m.winner = Some(outcome.winner);

    Ok(match outcome.winner {
        Side::A => club_a,
        Side::B => club_b,
    })
}
