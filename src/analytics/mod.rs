// Prop analytics engine: stat extraction, descriptive statistics,
// trend/streak heuristics, betting metrics, and insight generation.
//
// Everything here is a pure function of its inputs. Metrics are recomputed
// on every query and never stored.

pub mod betting;
pub mod extract;
pub mod insights;
pub mod stats;
pub mod trend;

use serde::Serialize;

use crate::config::OddsModel;
use crate::gamelog::GameStatRecord;
use crate::props::{Line, Period, PropType};

use crate::analytics::betting::{Confidence, HitRate, HomeAwaySplit, Recommendation};
use crate::analytics::trend::{RecentForm, Streak};

// ---------------------------------------------------------------------------
// Metrics record
// ---------------------------------------------------------------------------

/// The full analytics bundle for one (player log, prop, line, period)
/// query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsRecord {
    pub hit_rate: HitRate,
    pub average: f64,
    pub median: f64,
    pub std_dev: f64,
    /// Steadiness score; see [`stats::consistency`].
    pub consistency: i32,
    /// Split-half trend in percent; see [`trend::trend`].
    pub trend: i32,
    pub volatility: i32,
    /// Percentage points above the configured break-even hit rate.
    pub edge: f64,
    pub confidence: Confidence,
    pub recommendation: Recommendation,
    pub streak: Streak,
    pub recent_form: RecentForm,
    pub home_away_split: HomeAwaySplit,
    /// Percentile rank of the line within the graded values.
    pub percentile: u32,
    pub probability: f64,
    pub expected_value: f64,
}

/// The no-data record: what an empty (or empty-after-truncation) game log
/// grades to.
impl Default for MetricsRecord {
    fn default() -> Self {
        MetricsRecord {
            hit_rate: HitRate::default(),
            average: 0.0,
            median: 0.0,
            std_dev: 0.0,
            consistency: 0,
            trend: 0,
            volatility: 0,
            edge: 0.0,
            confidence: Confidence::Low,
            recommendation: Recommendation::NoData,
            streak: Streak::default(),
            recent_form: RecentForm::default(),
            home_away_split: HomeAwaySplit::default(),
            percentile: 0,
            probability: 0.0,
            expected_value: 0.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Compute the full metrics bundle for a newest-first game log.
///
/// The log is truncated to the period's window first; a log shorter than
/// the window is graded as-is. An empty truncated log returns
/// `MetricsRecord::default()`.
pub fn compute_metrics(
    games: &[GameStatRecord],
    prop: PropType,
    line: Line,
    period: Period,
    odds: &OddsModel,
) -> MetricsRecord {
    let games = &games[..games.len().min(period.window())];
    if games.is_empty() {
        return MetricsRecord::default();
    }
    let values = extract::extract_values(games, prop);

    MetricsRecord {
        hit_rate: betting::hit_rate(&values, line),
        average: stats::mean(&values),
        median: stats::median(&values),
        std_dev: stats::std_dev(&values),
        consistency: stats::consistency(&values),
        trend: trend::trend(&values),
        volatility: stats::volatility(&values),
        edge: betting::edge(&values, line, odds),
        confidence: betting::confidence(&values, line),
        recommendation: betting::recommendation(&values, line, odds),
        streak: trend::streak(&values, line),
        recent_form: trend::recent_form(&values, line),
        home_away_split: betting::home_away_split(games, prop, line),
        percentile: stats::percentile(&values, line),
        probability: betting::probability(&values, line),
        expected_value: betting::expected_value(&values, line, odds),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
