//! JSON REST API: handlers, in-memory store, and session resolution.
//! The `web` binary mounts this via [`configure`]; tests drive it through
//! `actix_web::test`.

use crate::logic::{assign_clubs, generate_bracket, reconfigure_format, record_result, schedule_match};
use crate::models::{
    normalize_email, ChatMessage, Club, ClubId, Invitation, InvitationId, InvitationKind,
    InvitationStatus, MatchId, Notification, NotificationId, Role, Tournament, TournamentId, User,
    UserId,
};
use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path},
    HttpRequest, HttpResponse, Responder,
};
use chrono::{NaiveDate, NaiveTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// One signed-in session: token maps to user + last activity (for expiry).
struct SessionEntry {
    user_id: UserId,
    last_activity: Instant,
}

/// In-memory state: typed collections keyed by id, plus live sessions.
#[derive(Default)]
pub struct Store {
    users: HashMap<UserId, User>,
    sessions: HashMap<Uuid, SessionEntry>,
    clubs: HashMap<ClubId, Club>,
    tournaments: HashMap<TournamentId, Tournament>,
    invitations: HashMap<InvitationId, Invitation>,
    notifications: HashMap<NotificationId, Notification>,
    messages: Vec<ChatMessage>,
}

impl Store {
    /// Drop sessions idle for `timeout` or longer; returns how many were removed.
    pub fn remove_idle_sessions(&mut self, timeout: Duration) -> usize {
        let before = self.sessions.len();
        self.sessions
            .retain(|_, entry| entry.last_activity.elapsed() < timeout);
        before - self.sessions.len()
    }
}

pub type AppState = Data<RwLock<Store>>;

/// Sessions idle for this long are signed out by the cleanup task.
pub const SESSION_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

/// Header carrying the sign-in token on authenticated requests.
pub const SESSION_HEADER: &str = "x-session-token";

/// Resolve the session token header to a user, refreshing last_activity.
fn session_user(store: &mut Store, req: &HttpRequest) -> Option<UserId> {
    let token: Uuid = req
        .headers()
        .get(SESSION_HEADER)?
        .to_str()
        .ok()?
        .parse()
        .ok()?;
    let entry = store.sessions.get_mut(&token)?;
    entry.last_activity = Instant::now();
    Some(entry.user_id)
}

fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(serde_json::json!({ "error": "Sign-in required" }))
}

fn forbidden(reason: &str) -> HttpResponse {
    HttpResponse::Forbidden().json(serde_json::json!({ "error": reason }))
}

fn not_found(what: &str) -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": what }))
}

fn bad_request(err: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": err.to_string() }))
}

/// True when the user belongs to the tournament: organizer, or coach/player
/// of a registered club. Gates the tournament chat.
fn is_tournament_member(store: &Store, tournament: &Tournament, user: UserId) -> bool {
    if tournament.organizer == user {
        return true;
    }
    tournament.participants.iter().any(|club_id| {
        store
            .clubs
            .get(club_id)
            .map_or(false, |c| c.coach == user || c.players.contains(&user))
    })
}

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct RegisterUserBody {
    name: String,
    email: String,
    #[serde(default)]
    role: Role,
}

#[derive(Deserialize)]
struct SignInBody {
    email: String,
}

#[derive(Deserialize)]
struct CreateClubBody {
    name: String,
}

#[derive(Deserialize)]
struct CreateInvitationBody {
    #[serde(flatten)]
    kind: InvitationKind,
    to: UserId,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    name: String,
    #[serde(default = "default_slots")]
    slots: u32,
    #[serde(default)]
    return_matches: bool,
}

fn default_slots() -> u32 {
    8
}

#[derive(Deserialize)]
struct FormatBody {
    slots: Option<u32>,
    return_matches: Option<bool>,
}

#[derive(Deserialize)]
struct AssignClubsBody {
    club_a: ClubId,
    club_b: ClubId,
}

#[derive(Deserialize)]
struct ScheduleBody {
    date: NaiveDate,
    time: NaiveTime,
}

#[derive(Deserialize)]
struct ResultBody {
    score_a: u32,
    score_b: u32,
    penalty_a: Option<u32>,
    penalty_b: Option<u32>,
}

#[derive(Deserialize)]
struct ChatBody {
    body: String,
}

/// Path segment: entity id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct IdPath {
    id: Uuid,
}

/// Path segments: tournament id and match id.
#[derive(Deserialize)]
struct TournamentMatchPath {
    id: TournamentId,
    match_id: MatchId,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "rivalize-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Register a user (player, coach, or visitor). Emails are unique.
#[post("/api/users")]
async fn api_register_user(state: AppState, body: Json<RegisterUserBody>) -> HttpResponse {
    let name = body.name.trim();
    if name.is_empty() {
        return bad_request("Name must not be empty");
    }
    let email = normalize_email(body.email.clone());
    if email.is_empty() {
        return bad_request("Email must not be empty");
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    if g.users.values().any(|u| u.email == email) {
        return bad_request("A user with this email already exists");
    }
    let user = User::new(name, email, body.role, Utc::now());
    let id = user.id;
    g.users.insert(id, user);
    match g.users.get(&id) {
        Some(u) => HttpResponse::Ok().json(u),
        None => HttpResponse::InternalServerError().body("insert failed"),
    }
}

/// Get a user by id (404 if not found).
#[get("/api/users/{id}")]
async fn api_get_user(state: AppState, path: Path<IdPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.users.get(&path.id) {
        Some(u) => HttpResponse::Ok().json(u),
        None => not_found("No user"),
    }
}

/// Sign in by email: creates a session and returns its token with the user.
#[post("/api/sessions")]
async fn api_sign_in(state: AppState, body: Json<SignInBody>) -> HttpResponse {
    let email = normalize_email(body.email.clone());
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let user = match g.users.values().find(|u| u.email == email).cloned() {
        Some(u) => u,
        None => return not_found("No user with this email"),
    };
    let token = Uuid::new_v4();
    g.sessions.insert(
        token,
        SessionEntry {
            user_id: user.id,
            last_activity: Instant::now(),
        },
    );
    HttpResponse::Ok().json(serde_json::json!({ "token": token, "user": user }))
}

/// Sign out: removes the session named by the token header.
#[delete("/api/sessions")]
async fn api_sign_out(state: AppState, req: HttpRequest) -> HttpResponse {
    let token: Option<Uuid> = req
        .headers()
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse().ok());
    let token = match token {
        Some(t) => t,
        None => return unauthorized(),
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.sessions.remove(&token) {
        Some(_) => HttpResponse::NoContent().finish(),
        None => unauthorized(),
    }
}

/// Create a club (coaches only).
#[post("/api/clubs")]
async fn api_create_club(state: AppState, req: HttpRequest, body: Json<CreateClubBody>) -> HttpResponse {
    let name = body.name.trim();
    if name.is_empty() {
        return bad_request("Name must not be empty");
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let user_id = match session_user(&mut g, &req) {
        Some(u) => u,
        None => return unauthorized(),
    };
    match g.users.get(&user_id) {
        Some(u) if u.role == Role::Coach => {}
        Some(_) => return forbidden("Only coaches can create clubs"),
        None => return unauthorized(),
    }
    let club = Club::new(name, user_id, Utc::now());
    let id = club.id;
    g.clubs.insert(id, club);
    match g.clubs.get(&id) {
        Some(c) => HttpResponse::Ok().json(c),
        None => HttpResponse::InternalServerError().body("insert failed"),
    }
}

/// List all clubs.
#[get("/api/clubs")]
async fn api_list_clubs(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let mut clubs: Vec<&Club> = g.clubs.values().collect();
    clubs.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    HttpResponse::Ok().json(clubs)
}

/// Get a club by id (404 if not found).
#[get("/api/clubs/{id}")]
async fn api_get_club(state: AppState, path: Path<IdPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.clubs.get(&path.id) {
        Some(c) => HttpResponse::Ok().json(c),
        None => not_found("No club"),
    }
}

/// Invite a player to a club, or a club (via its coach) to a tournament.
#[post("/api/invitations")]
async fn api_create_invitation(
    state: AppState,
    req: HttpRequest,
    body: Json<CreateInvitationBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let user_id = match session_user(&mut g, &req) {
        Some(u) => u,
        None => return unauthorized(),
    };
    if !g.users.contains_key(&body.to) {
        return not_found("No such invitee");
    }
    match body.kind {
        InvitationKind::Club { club } => {
            let club = match g.clubs.get(&club) {
                Some(c) => c,
                None => return not_found("No club"),
            };
            if club.coach != user_id {
                return forbidden("Only the club's coach can invite players");
            }
            match g.users.get(&body.to) {
                Some(u) if u.role == Role::Player => {}
                _ => return bad_request("Club invitations can only go to players"),
            }
        }
        InvitationKind::Tournament { tournament, club } => {
            let coach = match g.clubs.get(&club) {
                Some(c) => c.coach,
                None => return not_found("No club"),
            };
            let t = match g.tournaments.get(&tournament) {
                Some(t) => t,
                None => return not_found("No tournament"),
            };
            if t.organizer != user_id {
                return forbidden("Only the organizer can invite clubs");
            }
            if body.to != coach {
                return bad_request("Tournament invitations must go to the club's coach");
            }
        }
    }
    let now = Utc::now();
    let invitation = Invitation::new(body.kind, user_id, body.to, now);
    let id = invitation.id;
    let notice = Notification::new(body.to, "You have a new invitation", now);
    g.notifications.insert(notice.id, notice);
    g.invitations.insert(id, invitation);
    match g.invitations.get(&id) {
        Some(inv) => HttpResponse::Ok().json(inv),
        None => HttpResponse::InternalServerError().body("insert failed"),
    }
}

/// List invitations addressed to the signed-in user.
#[get("/api/invitations")]
async fn api_list_invitations(state: AppState, req: HttpRequest) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let user_id = match session_user(&mut g, &req) {
        Some(u) => u,
        None => return unauthorized(),
    };
    let mut mine: Vec<&Invitation> = g.invitations.values().filter(|i| i.to == user_id).collect();
    mine.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    HttpResponse::Ok().json(mine)
}

/// Accept an invitation: joins the club roster or registers the club into
/// the tournament, then notifies the inviter.
#[post("/api/invitations/{id}/accept")]
async fn api_accept_invitation(state: AppState, req: HttpRequest, path: Path<IdPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let user_id = match session_user(&mut g, &req) {
        Some(u) => u,
        None => return unauthorized(),
    };
    let (kind, from) = match g.invitations.get(&path.id) {
        Some(inv) => {
            if inv.to != user_id {
                return forbidden("Invitation is addressed to someone else");
            }
            if inv.status != InvitationStatus::Pending {
                return bad_request("Invitation has already been answered");
            }
            (inv.kind, inv.from)
        }
        None => return not_found("No invitation"),
    };

    // Apply the membership effect before flipping the status, so a failed
    // effect leaves the invitation answerable.
    match kind {
        InvitationKind::Club { club } => match g.clubs.get_mut(&club) {
            Some(c) => {
                c.add_player(user_id);
            }
            None => return not_found("Club no longer exists"),
        },
        InvitationKind::Tournament { tournament, club } => {
            let t = match g.tournaments.get_mut(&tournament) {
                Some(t) => t,
                None => return not_found("Tournament no longer exists"),
            };
            if let Err(e) = t.register_club(club) {
                return bad_request(e);
            }
        }
    }

    let now = Utc::now();
    let answered = match g.invitations.get_mut(&path.id) {
        Some(inv) => {
            if let Err(e) = inv.answer(user_id, InvitationStatus::Accepted) {
                return bad_request(e);
            }
            inv.clone()
        }
        None => return not_found("No invitation"),
    };
    let notice = Notification::new(from, "Your invitation was accepted", now);
    g.notifications.insert(notice.id, notice);
    HttpResponse::Ok().json(answered)
}

/// Decline an invitation and notify the inviter.
#[post("/api/invitations/{id}/decline")]
async fn api_decline_invitation(state: AppState, req: HttpRequest, path: Path<IdPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let user_id = match session_user(&mut g, &req) {
        Some(u) => u,
        None => return unauthorized(),
    };
    let from = match g.invitations.get(&path.id) {
        Some(inv) => {
            if inv.to != user_id {
                return forbidden("Invitation is addressed to someone else");
            }
            if inv.status != InvitationStatus::Pending {
                return bad_request("Invitation has already been answered");
            }
            inv.from
        }
        None => return not_found("No invitation"),
    };
    let answered = match g.invitations.get_mut(&path.id) {
        Some(inv) => {
            if let Err(e) = inv.answer(user_id, InvitationStatus::Declined) {
                return bad_request(e);
            }
            inv.clone()
        }
        None => return not_found("No invitation"),
    };
    let notice = Notification::new(from, "Your invitation was declined", Utc::now());
    g.notifications.insert(notice.id, notice);
    HttpResponse::Ok().json(answered)
}

/// Create a tournament (coaches only). Generates the full bracket once and
/// derives the initial schedule window.
#[post("/api/tournaments")]
async fn api_create_tournament(
    state: AppState,
    req: HttpRequest,
    body: Json<CreateTournamentBody>,
) -> HttpResponse {
    let name = body.name.trim();
    if name.is_empty() {
        return bad_request("Name must not be empty");
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let user_id = match session_user(&mut g, &req) {
        Some(u) => u,
        None => return unauthorized(),
    };
    match g.users.get(&user_id) {
        Some(u) if u.role == Role::Coach => {}
        Some(_) => return forbidden("Only coaches can create tournaments"),
        None => return unauthorized(),
    }
    let now = Utc::now();
    let rounds = match generate_bracket(body.slots, body.return_matches, now) {
        Ok(r) => r,
        Err(e) => return bad_request(e),
    };
    let tournament = Tournament::new(name, user_id, body.slots, body.return_matches, rounds, now);
    let id = tournament.id;
    g.tournaments.insert(id, tournament);
    match g.tournaments.get(&id) {
        Some(t) => HttpResponse::Ok().json(t),
        None => HttpResponse::InternalServerError().body("insert failed"),
    }
}

/// List all tournaments.
#[get("/api/tournaments")]
async fn api_list_tournaments(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let mut ts: Vec<&Tournament> = g.tournaments.values().collect();
    ts.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    HttpResponse::Ok().json(ts)
}

/// Get a tournament by id (404 if not found).
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<IdPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.tournaments.get(&path.id) {
        Some(t) => HttpResponse::Ok().json(t),
        None => not_found("No tournament"),
    }
}

/// Change slot count and/or return-match flag (organizer only). Regenerates
/// the bracket on a real change; refused once any result is recorded.
#[put("/api/tournaments/{id}/format")]
async fn api_set_format(
    state: AppState,
    req: HttpRequest,
    path: Path<IdPath>,
    body: Json<FormatBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let user_id = match session_user(&mut g, &req) {
        Some(u) => u,
        None => return unauthorized(),
    };
    let t = match g.tournaments.get_mut(&path.id) {
        Some(t) => t,
        None => return not_found("No tournament"),
    };
    if t.organizer != user_id {
        return forbidden("Only the organizer can change the format");
    }
    match reconfigure_format(t, body.slots, body.return_matches, Utc::now()) {
        Ok(()) => HttpResponse::Ok().json(t),
        Err(e) => bad_request(e),
    }
}

/// Assign the two clubs of a fixture (organizer only).
#[put("/api/tournaments/{id}/matches/{match_id}/clubs")]
async fn api_assign_clubs(
    state: AppState,
    req: HttpRequest,
    path: Path<TournamentMatchPath>,
    body: Json<AssignClubsBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let user_id = match session_user(&mut g, &req) {
        Some(u) => u,
        None => return unauthorized(),
    };
    let t = match g.tournaments.get_mut(&path.id) {
        Some(t) => t,
        None => return not_found("No tournament"),
    };
    if t.organizer != user_id {
        return forbidden("Only the organizer can assign clubs");
    }
    match assign_clubs(t, path.match_id, body.club_a, body.club_b) {
        Ok(()) => HttpResponse::Ok().json(t),
        Err(e) => bad_request(e),
    }
}

/// Set a fixture's date and kick-off time (organizer only). Recomputes the
/// tournament window.
#[put("/api/tournaments/{id}/matches/{match_id}/schedule")]
async fn api_schedule_match(
    state: AppState,
    req: HttpRequest,
    path: Path<TournamentMatchPath>,
    body: Json<ScheduleBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let user_id = match session_user(&mut g, &req) {
        Some(u) => u,
        None => return unauthorized(),
    };
    let t = match g.tournaments.get_mut(&path.id) {
        Some(t) => t,
        None => return not_found("No tournament"),
    };
    if t.organizer != user_id {
        return forbidden("Only the organizer can schedule matches");
    }
    match schedule_match(t, path.match_id, body.date, body.time) {
        Ok(()) => HttpResponse::Ok().json(t),
        Err(e) => bad_request(e),
    }
}

/// Record a fixture's result (organizer only). Locks the match and notifies
/// both clubs' coaches.
#[post("/api/tournaments/{id}/matches/{match_id}/result")]
async fn api_record_result(
    state: AppState,
    req: HttpRequest,
    path: Path<TournamentMatchPath>,
    body: Json<ResultBody>,
) -> HttpResponse {
    let penalties = match (body.penalty_a, body.penalty_b) {
        (Some(a), Some(b)) => Some((a, b)),
        _ => None,
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let user_id = match session_user(&mut g, &req) {
        Some(u) => u,
        None => return unauthorized(),
    };
    let (winner, sides, tournament_name) = {
        let t = match g.tournaments.get_mut(&path.id) {
            Some(t) => t,
            None => return not_found("No tournament"),
        };
        if t.organizer != user_id {
            return forbidden("Only the organizer can record results");
        }
        let winner = match record_result(t, path.match_id, body.score_a, body.score_b, penalties) {
            Ok(w) => w,
            Err(e) => return bad_request(e),
        };
        let sides = t
            .find_match(path.match_id)
            .map(|m| (m.club_a, m.club_b))
            .unwrap_or((None, None));
        (winner, sides, t.name.clone())
    };

    let now = Utc::now();
    let winner_name = g
        .clubs
        .get(&winner)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "the winning club".to_string());
    let coaches: Vec<UserId> = [sides.0, sides.1]
        .into_iter()
        .flatten()
        .filter_map(|club_id| g.clubs.get(&club_id).map(|c| c.coach))
        .collect();
    for coach in coaches {
        let notice = Notification::new(
            coach,
            format!("Result recorded in {}: {} won", tournament_name, winner_name),
            now,
        );
        g.notifications.insert(notice.id, notice);
    }
    match g.tournaments.get(&path.id) {
        Some(t) => HttpResponse::Ok().json(t),
        None => not_found("No tournament"),
    }
}

/// List a tournament's chat messages in send order (members only).
#[get("/api/tournaments/{id}/chat")]
async fn api_list_chat(state: AppState, req: HttpRequest, path: Path<IdPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let user_id = match session_user(&mut g, &req) {
        Some(u) => u,
        None => return unauthorized(),
    };
    let t = match g.tournaments.get(&path.id) {
        Some(t) => t,
        None => return not_found("No tournament"),
    };
    if !is_tournament_member(&g, t, user_id) {
        return forbidden("Only tournament members can read the chat");
    }
    let mut msgs: Vec<&ChatMessage> = g
        .messages
        .iter()
        .filter(|m| m.tournament == path.id)
        .collect();
    msgs.sort_by(|a, b| a.sent_at.cmp(&b.sent_at));
    HttpResponse::Ok().json(msgs)
}

/// Post a message to a tournament's chat (members only).
#[post("/api/tournaments/{id}/chat")]
async fn api_post_chat(
    state: AppState,
    req: HttpRequest,
    path: Path<IdPath>,
    body: Json<ChatBody>,
) -> HttpResponse {
    let text = body.body.trim();
    if text.is_empty() {
        return bad_request("Message must not be empty");
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let user_id = match session_user(&mut g, &req) {
        Some(u) => u,
        None => return unauthorized(),
    };
    let t = match g.tournaments.get(&path.id) {
        Some(t) => t,
        None => return not_found("No tournament"),
    };
    if !is_tournament_member(&g, t, user_id) {
        return forbidden("Only tournament members can post in the chat");
    }
    let message = ChatMessage::new(path.id, user_id, text, Utc::now());
    g.messages.push(message.clone());
    HttpResponse::Ok().json(message)
}

/// List the signed-in user's notifications, newest first.
#[get("/api/notifications")]
async fn api_list_notifications(state: AppState, req: HttpRequest) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let user_id = match session_user(&mut g, &req) {
        Some(u) => u,
        None => return unauthorized(),
    };
    let mut mine: Vec<&Notification> = g
        .notifications
        .values()
        .filter(|n| n.user == user_id)
        .collect();
    mine.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    HttpResponse::Ok().json(mine)
}

/// Mark one of the signed-in user's notifications as read.
#[post("/api/notifications/{id}/read")]
async fn api_read_notification(state: AppState, req: HttpRequest, path: Path<IdPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let user_id = match session_user(&mut g, &req) {
        Some(u) => u,
        None => return unauthorized(),
    };
    match g.notifications.get_mut(&path.id) {
        Some(n) if n.user == user_id => {
            n.read = true;
            HttpResponse::Ok().json(&*n)
        }
        Some(_) => forbidden("Notification belongs to someone else"),
        None => not_found("No notification"),
    }
}

/// Mount every API route onto an actix `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api_health)
        .service(favicon)
        .service(api_register_user)
        .service(api_get_user)
        .service(api_sign_in)
        .service(api_sign_out)
        .service(api_create_club)
        .service(api_list_clubs)
        .service(api_get_club)
        .service(api_create_invitation)
        .service(api_list_invitations)
        .service(api_accept_invitation)
        .service(api_decline_invitation)
        .service(api_create_tournament)
        .service(api_list_tournaments)
        .service(api_get_tournament)
        .service(api_set_format)
        .service(api_assign_clubs)
        .service(api_schedule_match)
        .service(api_record_result)
        .service(api_list_chat)
        .service(api_post_chat)
        .service(api_list_notifications)
        .service(api_read_notification);
}
