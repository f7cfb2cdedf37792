//! Tournament business logic: bracket generation, scheduling, results.

mod bracket;
mod fixtures;
mod results;
mod schedule;

pub use bracket::{generate_bracket, SUPPORTED_SLOTS};
pub use fixtures::{assign_clubs, record_result, reconfigure_format, schedule_match};
pub use results::{resolve_match_result, MatchOutcome};
pub use schedule::{tournament_window, TournamentWindow};
