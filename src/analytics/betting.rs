// Betting metrics: hit rate, edge against the configured odds model,
// confidence, recommendation, home/away split, and expected value.

use serde::{Deserialize, Serialize};

use crate::analytics::extract::extract_value;
use crate::analytics::stats;
use crate::analytics::trend::trend;
use crate::config::OddsModel;
use crate::gamelog::{GameStatRecord, Venue};
use crate::props::{Line, PropType};

// ---------------------------------------------------------------------------
// Hit rate
// ---------------------------------------------------------------------------

/// Hits, total games graded, and the rounded hit percentage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HitRate {
    pub hits: usize,
    pub total: usize,
    pub percentage: u32,
}

/// Count games whose value is strictly greater than the line. A push (value
/// exactly on the line) grades as a miss.
pub fn hit_rate(values: &[f64], line: Line) -> HitRate {
    let hits = values.iter().filter(|&&v| v > line).count();
    let total = values.len();
    let percentage = if total > 0 {
        (hits as f64 / total as f64 * 100.0).round() as u32
    } else {
        0
    };
    HitRate {
        hits,
        total,
        percentage,
    }
}

// ---------------------------------------------------------------------------
// Edge, probability, expected value
// ---------------------------------------------------------------------------

/// Hit percentage minus the odds model's break-even rate, in percentage
/// points.
pub fn edge(values: &[f64], line: Line, odds: &OddsModel) -> f64 {
    f64::from(hit_rate(values, line).percentage) - odds.baseline_hit_pct
}

/// Empirical hit probability, derived from the rounded hit percentage.
pub fn probability(values: &[f64], line: Line) -> f64 {
    f64::from(hit_rate(values, line).percentage) / 100.0
}

/// Expected value per one unit staked under the configured payout.
pub fn expected_value(values: &[f64], line: Line, odds: &OddsModel) -> f64 {
    let p = probability(values, line);
    p * odds.win_payout - (1.0 - p)
}

// ---------------------------------------------------------------------------
// Confidence
// ---------------------------------------------------------------------------

/// How much weight the sample supports putting on the other metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn label(&self) -> &'static str {
        match self {
            Confidence::Low => "Low",
            Confidence::Medium => "Medium",
            Confidence::High => "High",
        }
    }
}

/// Fewer than 5 games is Low, fewer than 10 is Medium; a full sample is
/// High only when the hit rate sits clear of the coin-flip band
/// (above 60% or below 40%).
pub fn confidence(values: &[f64], line: Line) -> Confidence {
    let sample_size = values.len();
    if sample_size < 5 {
        return Confidence::Low;
    }
    if sample_size < 10 {
        return Confidence::Medium;
    }
    let percentage = hit_rate(values, line).percentage;
    if percentage > 60 || percentage < 40 {
        Confidence::High
    } else {
        Confidence::Medium
    }
}

// ---------------------------------------------------------------------------
// Recommendation
// ---------------------------------------------------------------------------

/// Categorical betting recommendation.
///
/// `NoData` is only ever produced for an empty log (see
/// `MetricsRecord::default`); [`recommendation`] itself always returns one
/// of the other seven labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "Strong Over")]
    StrongOver,
    Over,
    #[serde(rename = "Strong Under")]
    StrongUnder,
    Under,
    #[serde(rename = "Trending Up")]
    TrendingUp,
    #[serde(rename = "Trending Down")]
    TrendingDown,
    #[serde(rename = "No Edge")]
    NoEdge,
    #[serde(rename = "No Data")]
    NoData,
}

impl Recommendation {
    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::StrongOver => "Strong Over",
            Recommendation::Over => "Over",
            Recommendation::StrongUnder => "Strong Under",
            Recommendation::Under => "Under",
            Recommendation::TrendingUp => "Trending Up",
            Recommendation::TrendingDown => "Trending Down",
            Recommendation::NoEdge => "No Edge",
            Recommendation::NoData => "No Data",
        }
    }
}

/// First matching rule wins; the order is load-bearing. All comparisons are
/// strict, so a hit rate of exactly 60% with positive edge grades as Over,
/// not Strong Over. Edge thresholds are in percentage points relative to
/// the configured break-even rate.
///
/// 1. hit rate > 60% and edge > 5  -> Strong Over
/// 2. hit rate > 55% and edge > 0  -> Over
/// 3. hit rate < 40% and edge < -5 -> Strong Under
/// 4. hit rate < 45% and edge < 0  -> Under
/// 5. trend > 10                   -> Trending Up
/// 6. trend < -10                  -> Trending Down
/// 7. otherwise                    -> No Edge
pub fn recommendation(values: &[f64], line: Line, odds: &OddsModel) -> Recommendation {
    let percentage = hit_rate(values, line).percentage;
    let edge = edge(values, line, odds);
    let trend = trend(values);

    if percentage > 60 && edge > 5.0 {
        return Recommendation::StrongOver;
    }
    if percentage > 55 && edge > 0.0 {
        return Recommendation::Over;
    }
    if percentage < 40 && edge < -5.0 {
        return Recommendation::StrongUnder;
    }
    if percentage < 45 && edge < 0.0 {
        return Recommendation::Under;
    }
    if trend > 10 {
        return Recommendation::TrendingUp;
    }
    if trend < -10 {
        return Recommendation::TrendingDown;
    }
    Recommendation::NoEdge
}

// ---------------------------------------------------------------------------
// Home/away split
// ---------------------------------------------------------------------------

/// Per-venue hit rate, average, and game count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SplitSide {
    pub hit_rate: HitRate,
    pub average: f64,
    pub games: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct HomeAwaySplit {
    pub home: SplitSide,
    pub away: SplitSide,
}

/// Partition the (already period-truncated) log by venue and grade each
/// side independently. Games with no known venue join neither side but
/// still count toward the overall metrics computed elsewhere.
pub fn home_away_split(games: &[GameStatRecord], prop: PropType, line: Line) -> HomeAwaySplit {
    HomeAwaySplit {
        home: side_split(games, Venue::Home, prop, line),
        away: side_split(games, Venue::Away, prop, line),
    }
}

fn side_split(games: &[GameStatRecord], venue: Venue, prop: PropType, line: Line) -> SplitSide {
    let values: Vec<f64> = games
        .iter()
        .filter(|g| g.venue == Some(venue))
        .map(|g| extract_value(g, prop))
        .collect();
    SplitSide {
        hit_rate: hit_rate(&values, line),
        average: stats::mean(&values),
        games: values.len(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn default_odds() -> OddsModel {
        OddsModel::default()
    }

    fn game(pts: u32, venue: Option<Venue>) -> GameStatRecord {
        GameStatRecord {
            date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            opponent: "BOS".to_string(),
            venue,
            pts,
            reb: 0,
            ast: 0,
            three_pm: 0,
            stl: 0,
            blk: 0,
        }
    }

    // ---- Hit rate ----

    #[test]
    fn hit_rate_counts_strictly_above_the_line() {
        let hr = hit_rate(&[25.0, 18.0, 30.0, 12.0, 20.0], 19.5);
        assert_eq!(hr.hits, 3);
        assert_eq!(hr.total, 5);
        assert_eq!(hr.percentage, 60);
    }

    #[test]
    fn hits_plus_misses_equal_total() {
        let values = [25.0, 18.0, 30.0, 12.0, 20.0];
        let hr = hit_rate(&values, 19.5);
        let misses = values.iter().filter(|&&v| v <= 19.5).count();
        assert_eq!(hr.hits + misses, hr.total);
        assert_eq!(hr.total, values.len());
        assert!(hr.percentage <= 100);
    }

    #[test]
    fn pushes_grade_as_misses() {
        let hr = hit_rate(&[20.0, 20.0, 20.0, 20.0, 20.0], 20.0);
        assert_eq!(hr.hits, 0);
        assert_eq!(hr.percentage, 0);
    }

    #[test]
    fn empty_hit_rate_is_zeroed() {
        assert_eq!(hit_rate(&[], 19.5), HitRate::default());
    }

    // ---- Edge / probability / EV ----

    #[test]
    fn edge_is_relative_to_the_baseline() {
        let values = [25.0, 18.0, 30.0, 12.0, 20.0]; // 60%
        assert!(approx_eq(edge(&values, 19.5, &default_odds()), 10.0));

        let juiced = OddsModel {
            baseline_hit_pct: 55.0,
            ..OddsModel::default()
        };
        assert!(approx_eq(edge(&values, 19.5, &juiced), 5.0));
    }

    #[test]
    fn probability_follows_the_rounded_percentage() {
        assert!(approx_eq(
            probability(&[25.0, 18.0, 30.0, 12.0, 20.0], 19.5),
            0.60
        ));
    }

    #[test]
    fn expected_value_under_default_odds() {
        // p = 0.6: 0.6 * 0.91 - 0.4 = 0.146.
        let ev = expected_value(&[25.0, 18.0, 30.0, 12.0, 20.0], 19.5, &default_odds());
        assert!(approx_eq(ev, 0.146));
        // A certain winner pays out the full 0.91.
        let ev = expected_value(&[30.0, 30.0], 19.5, &default_odds());
        assert!(approx_eq(ev, 0.91));
    }

    #[test]
    fn expected_value_respects_a_custom_payout() {
        let even_money = OddsModel {
            win_payout: 1.0,
            ..OddsModel::default()
        };
        let ev = expected_value(&[30.0, 10.0], 19.5, &even_money);
        assert!(approx_eq(ev, 0.0));
    }

    // ---- Confidence ----

    #[test]
    fn confidence_thresholds() {
        let odds_line = 19.5;
        assert_eq!(confidence(&[25.0, 25.0, 25.0], odds_line), Confidence::Low);
        assert_eq!(
            confidence(&[25.0; 7], odds_line),
            Confidence::Medium
        );
        // 12 games, 100% hit rate: clear of the coin-flip band.
        assert_eq!(confidence(&[25.0; 12], odds_line), Confidence::High);
        // 12 games, 50% hit rate: stays Medium.
        let coin_flip: Vec<f64> = (0..12).map(|i| if i % 2 == 0 { 25.0 } else { 10.0 }).collect();
        assert_eq!(confidence(&coin_flip, odds_line), Confidence::Medium);
    }

    // ---- Recommendation ----

    #[test]
    fn recommendation_priority_table() {
        let odds = default_odds();
        // 80% hit rate, edge 30.
        assert_eq!(
            recommendation(&[30.0, 30.0, 30.0, 10.0, 30.0], 19.5, &odds),
            Recommendation::StrongOver
        );
        // 20% hit rate, edge -30.
        assert_eq!(
            recommendation(&[10.0, 10.0, 10.0, 30.0, 10.0], 19.5, &odds),
            Recommendation::StrongUnder
        );
        // 40% hit rate, edge -10: not under 40, so plain Under.
        assert_eq!(
            recommendation(&[25.0, 25.0, 10.0, 10.0, 10.0], 19.5, &odds),
            Recommendation::Under
        );
        // 50% hit rate, steeply rising values.
        assert_eq!(
            recommendation(&[30.0, 28.0, 10.0, 12.0], 20.0, &odds),
            Recommendation::TrendingUp
        );
        // 50% hit rate, steeply falling values.
        assert_eq!(
            recommendation(&[10.0, 12.0, 30.0, 28.0], 20.0, &odds),
            Recommendation::TrendingDown
        );
        // 50% hit rate, flat: nothing fires.
        assert_eq!(
            recommendation(&[20.0, 25.0, 20.0, 25.0], 22.0, &odds),
            Recommendation::NoEdge
        );
    }

    #[test]
    fn sixty_percent_exactly_is_over_not_strong_over() {
        // 60% is not strictly greater than 60, so rule 1 passes and rule 2
        // fires even though the edge (10) would satisfy rule 1.
        assert_eq!(
            recommendation(&[25.0, 18.0, 30.0, 12.0, 20.0], 19.5, &default_odds()),
            Recommendation::Over
        );
    }

    #[test]
    fn over_rules_outrank_trend_rules() {
        // 80% hit rate with a strong upward trend must still grade on the
        // hit-rate rules first.
        let values = [30.0, 30.0, 30.0, 10.0, 30.0];
        assert_eq!(
            recommendation(&values, 19.5, &default_odds()),
            Recommendation::StrongOver
        );
    }

    #[test]
    fn all_pushes_grade_strong_under() {
        // Five ties: 0% hit rate, edge -50.
        let values = [20.0, 20.0, 20.0, 20.0, 20.0];
        assert_eq!(
            recommendation(&values, 20.0, &default_odds()),
            Recommendation::StrongUnder
        );
        // Five games is past the small-sample floor but short of a full
        // sample, so the grade carries Medium confidence.
        assert_eq!(confidence(&values, 20.0), Confidence::Medium);
    }

    // ---- Home/away split ----

    #[test]
    fn split_partitions_by_venue() {
        let games = vec![
            game(25, Some(Venue::Home)),
            game(18, Some(Venue::Away)),
            game(30, Some(Venue::Home)),
            game(12, None), // neutral label: excluded from both sides
            game(20, Some(Venue::Away)),
        ];
        let split = home_away_split(&games, PropType::Points, 19.5);

        assert_eq!(split.home.games, 2);
        assert_eq!(split.home.hit_rate.hits, 2);
        assert_eq!(split.home.hit_rate.percentage, 100);
        assert!(approx_eq(split.home.average, 27.5));

        assert_eq!(split.away.games, 2);
        assert_eq!(split.away.hit_rate.hits, 1);
        assert_eq!(split.away.hit_rate.percentage, 50);
        assert!(approx_eq(split.away.average, 19.0));
    }

    #[test]
    fn empty_split_sides_are_zeroed() {
        let split = home_away_split(&[], PropType::Points, 19.5);
        assert_eq!(split.home, SplitSide::default());
        assert_eq!(split.away, SplitSide::default());
    }
}
