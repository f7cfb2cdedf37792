//! Integration tests for match results: resolution, tie-breaks, locking.

use chrono::{DateTime, TimeZone, Utc};
use rivalize_web::{
    assign_clubs, generate_bracket, record_result, reconfigure_format, resolve_match_result,
    schedule_match, ClubId, Side, Tournament, TournamentError,
};
use uuid::Uuid;

fn clock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
}

/// 4-slot tournament with two registered clubs, returned alongside their ids.
fn tournament_with_clubs() -> (Tournament, ClubId, ClubId) {
    let now = clock();
    let rounds = generate_bracket(4, false, now).unwrap();
    let mut t = Tournament::new("Coupe", Uuid::new_v4(), 4, false, rounds, now);
    let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
    t.register_club(a).unwrap();
    t.register_club(b).unwrap();
    (t, a, b)
}

#[test]
fn higher_regular_time_score_wins() {
    let outcome = resolve_match_result(3, 1, None).unwrap();
    assert_eq!(outcome.winner, Side::A);
    assert!(!outcome.decided_by_penalties);

    let outcome = resolve_match_result(0, 2, None).unwrap();
    assert_eq!(outcome.winner, Side::B);
    assert!(!outcome.decided_by_penalties);
}

#[test]
fn penalties_decide_a_level_score() {
    let outcome = resolve_match_result(2, 2, Some((5, 4))).unwrap();
    assert_eq!(outcome.winner, Side::A);
    assert!(outcome.decided_by_penalties);

    let outcome = resolve_match_result(0, 0, Some((2, 3))).unwrap();
    assert_eq!(outcome.winner, Side::B);
    assert!(outcome.decided_by_penalties);
}

#[test]
fn level_score_without_penalties_is_rejected() {
    assert_eq!(
        resolve_match_result(2, 2, None),
        Err(TournamentError::MissingPenaltyScores)
    );
}

#[test]
fn equal_penalty_scores_are_rejected() {
    assert_eq!(
        resolve_match_result(2, 2, Some((3, 3))),
        Err(TournamentError::TiedPenaltyScore)
    );
}

#[test]
fn penalties_are_ignored_when_regular_time_decides() {
    let outcome = resolve_match_result(3, 1, Some((0, 5))).unwrap();
    assert_eq!(outcome.winner, Side::A);
    assert!(!outcome.decided_by_penalties);
}

#[test]
fn recording_a_result_stores_scores_and_locks_the_match() {
    let (mut t, club_a, club_b) = tournament_with_clubs();
    let semi = t.rounds[0].matches[0].id;
    assign_clubs(&mut t, semi, club_a, club_b).unwrap();

    let winner = record_result(&mut t, semi, 2, 1, None).unwrap();
    assert_eq!(winner, club_a);

    let m = t.find_match(semi).unwrap();
    assert!(m.is_decided());
    assert_eq!(m.winner, Some(Side::A));
    assert_eq!(m.score_a, Some(2));
    assert_eq!(m.score_b, Some(1));
    assert_eq!(m.penalty_a, None);
    assert_eq!(m.penalty_b, None);

    // Locked: no further score, schedule, or participant mutation.
    assert_eq!(
        record_result(&mut t, semi, 0, 3, None),
        Err(TournamentError::MatchAlreadyDecided(semi))
    );
    assert_eq!(
        schedule_match(
            &mut t,
            semi,
            clock().date_naive(),
            clock().time()
        ),
        Err(TournamentError::MatchAlreadyDecided(semi))
    );
    assert_eq!(
        assign_clubs(&mut t, semi, club_b, club_a),
        Err(TournamentError::MatchAlreadyDecided(semi))
    );
}

#[test]
fn shootout_results_store_penalty_scores() {
    let (mut t, club_a, club_b) = tournament_with_clubs();
    let semi = t.rounds[0].matches[0].id;
    assign_clubs(&mut t, semi, club_a, club_b).unwrap();

    let winner = record_result(&mut t, semi, 1, 1, Some((4, 5))).unwrap();
    assert_eq!(winner, club_b);

    let m = t.find_match(semi).unwrap();
    assert_eq!(m.winner, Some(Side::B));
    assert_eq!(m.penalty_a, Some(4));
    assert_eq!(m.penalty_b, Some(5));
}

#[test]
fn failed_resolution_leaves_the_match_untouched() {
    let (mut t, club_a, club_b) = tournament_with_clubs();
    let semi = t.rounds[0].matches[0].id;
    assign_clubs(&mut t, semi, club_a, club_b).unwrap();

    assert_eq!(
        record_result(&mut t, semi, 2, 2, Some((3, 3))),
        Err(TournamentError::TiedPenaltyScore)
    );
    let m = t.find_match(semi).unwrap();
    assert!(!m.is_decided());
    assert_eq!(m.score_a, None);
}

#[test]
fn results_require_assigned_clubs() {
    let (mut t, _, _) = tournament_with_clubs();
    let semi = t.rounds[0].matches[0].id;
    assert_eq!(
        record_result(&mut t, semi, 2, 1, None),
        Err(TournamentError::ClubsNotAssigned)
    );
}

#[test]
fn unknown_match_ids_are_rejected() {
    let (mut t, _, _) = tournament_with_clubs();
    let bogus = Uuid::new_v4();
    assert_eq!(
        record_result(&mut t, bogus, 2, 1, None),
        Err(TournamentError::MatchNotFound(bogus))
    );
}

#[test]
fn a_decided_match_locks_the_bracket_format() {
    let (mut t, club_a, club_b) = tournament_with_clubs();
    let semi = t.rounds[0].matches[0].id;
    assign_clubs(&mut t, semi, club_a, club_b).unwrap();
    record_result(&mut t, semi, 2, 1, None).unwrap();

    assert_eq!(
        reconfigure_format(&mut t, Some(8), None, clock()),
        Err(TournamentError::BracketLocked)
    );
    // A no-change call stays a harmless no-op even once locked.
    assert_eq!(reconfigure_format(&mut t, None, None, clock()), Ok(()));
    assert!(t.find_match(semi).unwrap().is_decided());
}
