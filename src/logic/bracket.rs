//! Bracket generation: the complete empty round/match skeleton for a
//! single-elimination tournament.

use crate::models::{GameMatch, Phase, Round, TournamentError};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Bracket sizes the platform supports.
pub const SUPPORTED_SLOTS: [u32; 4] = [4, 8, 16, 32];

/// Generate the full bracket for `slots` clubs, earliest round first.
///
/// Round *i* (0-indexed from the first) holds `slots / 2^(i+1)` matches; the
/// last round is always the final. When `return_matches` is set, every fixture
/// is duplicated into two legs with independent ids, including the final.
///
/// Pure function of its inputs: match dates/times are seeded from the injected
/// `now` (never from the wall clock), and two calls with equal inputs produce
/// structurally identical brackets. Only the per-match ids are fresh each
/// call; stable ids across regeneration are unsupported.
pub fn generate_bracket(
    slots: u32,
    return_matches: bool,
    now: DateTime<Utc>,
) -> Result<Vec<Round>, TournamentError> {
    if !SUPPORTED_SLOTS.contains(&slots) {
        return Err(TournamentError::InvalidSlotCount(slots));
    }

    let total_rounds = slots.ilog2();
    let date = now.date_naive();
    let time = now.time();

    let mut rounds = Vec::with_capacity(total_rounds as usize);
    for i in 0..total_rounds {
        let phase = Phase::from_final(total_rounds - 1 - i);
        let match_count = slots >> (i + 1);
        let mut matches: Vec<GameMatch> = (0..match_count)
            .map(|_| GameMatch::new(date, time))
            .collect();
        if return_matches {
            matches = matches
                .into_iter()
                .flat_map(|first_leg| {
                    let second_leg = GameMatch {
                        id: Uuid::new_v4(),
                        ..first_leg.clone()
                    };
                    [first_leg, second_leg]
                })
                .collect();
        }
        rounds.push(Round { phase, matches });
    }
    Ok(rounds)
}
