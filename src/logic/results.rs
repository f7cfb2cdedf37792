//! Match result resolution: regular-time scores with a penalty-shootout
//! tie-break.

use crate::models::{Side, TournamentError};

/// Outcome of a resolved match.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MatchOutcome {
    pub winner: Side,
    /// True when regular time was level and penalties decided it.
    pub decided_by_penalties: bool,
}

/// Decide the winning side from regular-time scores, falling back to the
/// penalty shootout when level.
///
/// Penalties supplied alongside a non-level score are ignored. A level score
/// with no penalties is `MissingPenaltyScores`; level penalties are
/// `TiedPenaltyScore` (not a valid terminal state in single elimination).
pub fn resolve_match_result(
    score_a: u32,
    score_b: u32,
    penalties: Option<(u32, u32)>,
) -> Result<MatchOutcome, TournamentError> {
    if score_a != score_b {
        let winner = if score_a > score_b { Side::A } else { Side::B };
        return Ok(MatchOutcome {
            winner,
            decided_by_penalties: false,
        });
    }

    let (penalty_a, penalty_b) = penalties.ok_or(TournamentError::MissingPenaltyScores)?;
    if penalty_a == penalty_b {
        return Err(TournamentError::TiedPenaltyScore);
    }
    let winner = if penalty_a > penalty_b {
        Side::A
    } else {
        Side::B
    };
    Ok(MatchOutcome {
        winner,
        decided_by_penalties: true,
    })
}
