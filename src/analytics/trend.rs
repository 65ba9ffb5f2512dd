// Trend, streak, and recent-form heuristics over a newest-first value
// sequence.

use serde::{Deserialize, Serialize};

use crate::analytics::betting;
use crate::analytics::stats;
use crate::props::Line;

/// How many of the most recent games make up the recent-form window.
const RECENT_FORM_WINDOW: usize = 5;

// ---------------------------------------------------------------------------
// Trend
// ---------------------------------------------------------------------------

/// Split-half trend: the rounded percentage change of the recent half's
/// mean (first `floor(n/2)` elements; index 0 is the most recent game)
/// versus the older half's mean.
///
/// Returns 0 for fewer than 3 games, and 0 when the older half's mean is 0
/// (the ratio is undefined there, and a zeroed baseline carries no signal).
pub fn trend(values: &[f64]) -> i32 {
    if values.len() < 3 {
        return 0;
    }
    let mid = values.len() / 2;
    let recent_avg = stats::mean(&values[..mid]);
    let older_avg = stats::mean(&values[mid..]);
    if older_avg.abs() < f64::EPSILON {
        return 0;
    }
    ((recent_avg - older_avg) / older_avg * 100.0).round() as i32
}

// ---------------------------------------------------------------------------
// Streak
// ---------------------------------------------------------------------------

/// Classification of the current run of outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreakKind {
    Hit,
    Miss,
    None,
}

impl StreakKind {
    pub fn label(&self) -> &'static str {
        match self {
            StreakKind::Hit => "hit",
            StreakKind::Miss => "miss",
            StreakKind::None => "none",
        }
    }
}

/// The unbroken run of same-classification outcomes counting back from the
/// most recent game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Streak {
    pub kind: StreakKind,
    pub count: usize,
}

impl Default for Streak {
    fn default() -> Self {
        Streak {
            kind: StreakKind::None,
            count: 0,
        }
    }
}

/// Current streak against the line. The most recent game sets the streak
/// kind; the count extends while consecutive games share that
/// classification.
pub fn streak(values: &[f64], line: Line) -> Streak {
    let Some(&first) = values.first() else {
        return Streak::default();
    };
    let kind = if first > line {
        StreakKind::Hit
    } else {
        StreakKind::Miss
    };
    let count = values
        .iter()
        .take_while(|&&v| (v > line) == (first > line))
        .count();
    Streak { kind, count }
}

// ---------------------------------------------------------------------------
// Recent form
// ---------------------------------------------------------------------------

/// Hit rate and trend over the most recent games (up to
/// `RECENT_FORM_WINDOW`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RecentForm {
    pub hits: usize,
    pub total: usize,
    pub percentage: u32,
    pub trend: i32,
}

pub fn recent_form(values: &[f64], line: Line) -> RecentForm {
    let recent = &values[..values.len().min(RECENT_FORM_WINDOW)];
    let hit_rate = betting::hit_rate(recent, line);
    RecentForm {
        hits: hit_rate.hits,
        total: hit_rate.total,
        percentage: hit_rate.percentage,
        trend: trend(recent),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
