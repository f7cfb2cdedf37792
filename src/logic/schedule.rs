//! Schedule aggregation: derive a tournament's start/end window from its
//! per-match dates and times.

use crate::models::Round;
use chrono::{NaiveDate, NaiveDateTime};

/// Derived tournament window.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TournamentWindow {
    /// Earliest match date (date-only comparison).
    pub start_date: NaiveDate,
    /// Latest match date combined with that match's own kick-off time.
    pub end_date: NaiveDateTime,
}

/// Compute the window over every match in the bracket, in any round order.
///
/// Each match's `time` contributes only its time-of-day; its date component is
/// the owning match's `date`. Returns None for an empty schedule. Stateless:
/// callers re-invoke after any format change or match date/time edit.
pub fn tournament_window(rounds: &[Round]) -> Option<TournamentWindow> {
    let mut matches = rounds.iter().flat_map(|r| r.matches.iter());
    let first = matches.next()?;
    let mut start_date = first.date;
    let mut end_date = first.kickoff();
    for m in matches {
        start_date = start_date.min(m.date);
        end_date = end_date.max(m.kickoff());
    }
    Some(TournamentWindow {
        start_date,
        end_date,
    })
}
