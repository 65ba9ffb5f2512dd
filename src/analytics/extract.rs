// Stat extraction: maps a prop type onto a game record's stat counts.

use crate::gamelog::GameStatRecord;
use crate::props::PropType;

/// Extract the value a prop is graded on from a single game. Composite
/// props are the exact sum of their constituent counts.
pub fn extract_value(game: &GameStatRecord, prop: PropType) -> f64 {
    let value = match prop {
        PropType::Points => game.pts,
        PropType::Rebounds => game.reb,
        PropType::Assists => game.ast,
        PropType::ThreesMade => game.three_pm,
        PropType::Steals => game.stl,
        PropType::Blocks => game.blk,
        PropType::PtsRebAst => game.pts + game.reb + game.ast,
        PropType::PtsReb => game.pts + game.reb,
        PropType::PtsAst => game.pts + game.ast,
        PropType::RebAst => game.reb + game.ast,
    };
    f64::from(value)
}

/// Element-wise extraction over a game log slice, preserving order
/// (newest-first in, newest-first out).
pub fn extract_values(games: &[GameStatRecord], prop: PropType) -> Vec<f64> {
    games.iter().map(|game| extract_value(game, prop)).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
