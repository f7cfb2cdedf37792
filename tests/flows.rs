//! Integration tests for membership flows: clubs, invitations, registration.

use chrono::{DateTime, TimeZone, Utc};
use rivalize_web::{
    assign_clubs, generate_bracket, Club, Invitation, InvitationError, InvitationKind,
    InvitationStatus, Role, Tournament, TournamentError, User,
};
use uuid::Uuid;

fn clock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
}

fn tournament_with_slots(slots: u32) -> Tournament {
    let now = clock();
    let rounds = generate_bracket(slots, false, now).unwrap();
    Tournament::new("Coupe", Uuid::new_v4(), slots, false, rounds, now)
}

#[test]
fn club_roster_deduplicates_players() {
    let coach = User::new("Ada", "ada@example.com", Role::Coach, clock());
    let player = User::new("Marc", "Marc@Example.com ", Role::Player, clock());
    // Emails are stored normalized.
    assert_eq!(player.email, "marc@example.com");

    let mut club = Club::new("FC Nord", coach.id, clock());
    assert!(club.add_player(player.id));
    assert!(!club.add_player(player.id));
    assert_eq!(club.players.len(), 1);
}

#[test]
fn invitation_can_only_be_answered_by_the_invitee() {
    let (from, to, other) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
    let mut inv = Invitation::new(
        InvitationKind::Club { club: Uuid::new_v4() },
        from,
        to,
        clock(),
    );
    assert_eq!(
        inv.answer(other, InvitationStatus::Accepted),
        Err(InvitationError::NotAddressedToUser)
    );
    assert_eq!(inv.status, InvitationStatus::Pending);

    inv.answer(to, InvitationStatus::Accepted).unwrap();
    assert_eq!(inv.status, InvitationStatus::Accepted);
}

#[test]
fn invitation_cannot_be_answered_twice() {
    let (from, to) = (Uuid::new_v4(), Uuid::new_v4());
    let mut inv = Invitation::new(
        InvitationKind::Tournament {
            tournament: Uuid::new_v4(),
            club: Uuid::new_v4(),
        },
        from,
        to,
        clock(),
    );
    inv.answer(to, InvitationStatus::Declined).unwrap();
    assert_eq!(
        inv.answer(to, InvitationStatus::Accepted),
        Err(InvitationError::AlreadyAnswered)
    );
    assert_eq!(inv.status, InvitationStatus::Declined);
}

#[test]
fn registration_is_capped_at_available_slots() {
    let mut t = tournament_with_slots(4);
    let clubs: Vec<Uuid> = (0..5).map(|_| Uuid::new_v4()).collect();
    for club in &clubs[..4] {
        t.register_club(*club).unwrap();
    }
    assert_eq!(
        t.register_club(clubs[4]),
        Err(TournamentError::TournamentFull)
    );
    assert_eq!(
        t.register_club(clubs[0]),
        Err(TournamentError::ClubAlreadyRegistered(clubs[0]))
    );
}

#[test]
fn fixtures_only_accept_registered_clubs() {
    let mut t = tournament_with_slots(4);
    let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
    t.register_club(a).unwrap();
    let semi = t.rounds[0].matches[0].id;

    assert_eq!(
        assign_clubs(&mut t, semi, a, b),
        Err(TournamentError::ClubNotRegistered(b))
    );
    assert_eq!(
        assign_clubs(&mut t, semi, a, a),
        Err(TournamentError::SameClubBothSides)
    );

    t.register_club(b).unwrap();
    assign_clubs(&mut t, semi, a, b).unwrap();
    let m = t.find_match(semi).unwrap();
    assert_eq!(m.club_a, Some(a));
    assert_eq!(m.club_b, Some(b));
}
