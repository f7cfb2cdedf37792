//! Integration tests for the schedule window: start/end date derivation.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use rivalize_web::{
    assign_clubs, generate_bracket, reconfigure_format, schedule_match, tournament_window,
    Tournament,
};
use uuid::Uuid;

fn clock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
}

fn small_tournament() -> Tournament {
    let now = clock();
    let rounds = generate_bracket(4, false, now).unwrap();
    Tournament::new("Coupe de printemps", Uuid::new_v4(), 4, false, rounds, now)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn window_is_earliest_date_and_latest_kickoff() {
    let mut t = small_tournament();
    let semi_a = t.rounds[0].matches[0].id;
    let semi_b = t.rounds[0].matches[1].id;
    let final_m = t.rounds[1].matches[0].id;

    schedule_match(&mut t, semi_a, date(2025, 3, 1), time(10, 0)).unwrap();
    schedule_match(&mut t, semi_b, date(2025, 3, 8), time(15, 0)).unwrap();
    schedule_match(&mut t, final_m, date(2025, 3, 15), time(18, 30)).unwrap();

    assert_eq!(t.start_date, Some(date(2025, 3, 1)));
    assert_eq!(t.end_date, Some(date(2025, 3, 15).and_time(time(18, 30))));
}

#[test]
fn window_is_independent_of_round_ordering() {
    let mut t = small_tournament();
    let semi_a = t.rounds[0].matches[0].id;
    let final_m = t.rounds[1].matches[0].id;
    schedule_match(&mut t, semi_a, date(2025, 3, 1), time(10, 0)).unwrap();
    schedule_match(&mut t, final_m, date(2025, 3, 15), time(18, 30)).unwrap();

    let forward = tournament_window(&t.rounds).unwrap();
    let mut reversed = t.rounds.clone();
    reversed.reverse();
    let backward = tournament_window(&reversed).unwrap();
    assert_eq!(forward, backward);
}

#[test]
fn latest_date_wins_even_with_an_early_kickoff() {
    let mut t = small_tournament();
    let semi_a = t.rounds[0].matches[0].id;
    let final_m = t.rounds[1].matches[0].id;
    // Later day at 08:00 must beat an earlier day at 23:00.
    schedule_match(&mut t, semi_a, date(2025, 3, 10), time(23, 0)).unwrap();
    schedule_match(&mut t, final_m, date(2025, 3, 11), time(8, 0)).unwrap();

    assert_eq!(t.end_date, Some(date(2025, 3, 11).and_time(time(8, 0))));
}

#[test]
fn empty_schedule_has_no_window() {
    assert_eq!(tournament_window(&[]), None);
}

#[test]
fn schedule_edit_moves_the_window() {
    let mut t = small_tournament();
    let final_m = t.rounds[1].matches[0].id;
    // Generation seeds every match from the clock.
    assert_eq!(t.start_date, Some(clock().date_naive()));

    schedule_match(&mut t, final_m, date(2025, 6, 1), time(20, 0)).unwrap();
    assert_eq!(t.end_date, Some(date(2025, 6, 1).and_time(time(20, 0))));

    // Moving the same fixture back shrinks the window again.
    schedule_match(&mut t, final_m, date(2025, 3, 2), time(9, 0)).unwrap();
    assert_eq!(t.end_date, Some(date(2025, 3, 2).and_time(time(9, 0))));
}

#[test]
fn format_change_regenerates_and_recomputes() {
    let mut t = small_tournament();
    let final_m = t.rounds[1].matches[0].id;
    schedule_match(&mut t, final_m, date(2025, 6, 1), time(20, 0)).unwrap();

    let later = Utc.with_ymd_and_hms(2025, 4, 1, 9, 0, 0).unwrap();
    reconfigure_format(&mut t, Some(8), None, later).unwrap();

    assert_eq!(t.available_slots, 8);
    assert_eq!(t.rounds.len(), 3);
    // Old schedules are discarded; the window follows the new seed date.
    assert_eq!(t.start_date, Some(later.date_naive()));
    assert_eq!(t.end_date, Some(later.naive_utc()));
}

#[test]
fn unchanged_format_keeps_assignments_and_schedules() {
    let mut t = small_tournament();
    let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
    t.register_club(a).unwrap();
    t.register_club(b).unwrap();
    let semi = t.rounds[0].matches[0].id;
    assign_clubs(&mut t, semi, a, b).unwrap();
    schedule_match(&mut t, semi, date(2025, 5, 1), time(18, 0)).unwrap();
    let before = t.clone();

    let later = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    // An empty body resolves to the current values: must be a no-op.
    reconfigure_format(&mut t, None, None, later).unwrap();
    assert_eq!(t, before);

    // Same for explicitly restating the current format.
    reconfigure_format(&mut t, Some(4), Some(false), later).unwrap();
    assert_eq!(t, before);
}
