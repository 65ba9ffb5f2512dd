// Insight generation: turns a metrics record into short labeled messages
// via fixed threshold rules.
//
// Rules are independent (several can fire for one record) and are evaluated
// in a fixed order: hit rate, trend, consistency, streak, recent form.

use serde::{Deserialize, Serialize};

use crate::analytics::trend::StreakKind;
use crate::analytics::MetricsRecord;

// ---------------------------------------------------------------------------
// Insight model
// ---------------------------------------------------------------------------

/// Tone of an insight, used by callers to pick styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Positive,
    Negative,
    Warning,
    Neutral,
}

impl InsightKind {
    pub fn label(&self) -> &'static str {
        match self {
            InsightKind::Positive => "positive",
            InsightKind::Negative => "negative",
            InsightKind::Warning => "warning",
            InsightKind::Neutral => "neutral",
        }
    }
}

/// One human-readable takeaway from a metrics record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: String,
    pub message: String,
}

impl Insight {
    fn new(kind: InsightKind, title: &str, message: String) -> Self {
        Insight {
            kind,
            title: title.to_string(),
            message,
        }
    }
}

// ---------------------------------------------------------------------------
// Rule evaluation
// ---------------------------------------------------------------------------

/// Generate insights for a computed metrics record. Returns an empty list
/// when no rule fires, and always when the record graded zero games (a
/// no-data record has nothing to say; callers render their own
/// placeholder).
pub fn generate_insights(metrics: &MetricsRecord) -> Vec<Insight> {
    if metrics.hit_rate.total == 0 {
        return Vec::new();
    }

    let mut insights = Vec::new();

    // Hit rate extremes.
    if metrics.hit_rate.percentage > 60 {
        insights.push(Insight::new(
            InsightKind::Positive,
            "Strong Hit Rate",
            format!(
                "{}% hit rate suggests value on the Over",
                metrics.hit_rate.percentage
            ),
        ));
    } else if metrics.hit_rate.percentage < 40 {
        insights.push(Insight::new(
            InsightKind::Negative,
            "Low Hit Rate",
            format!(
                "{}% hit rate suggests value on the Under",
                metrics.hit_rate.percentage
            ),
        ));
    }

    // Trend extremes.
    if metrics.trend > 10 {
        insights.push(Insight::new(
            InsightKind::Positive,
            "Positive Trend",
            format!("Player is trending up (+{}% vs earlier games)", metrics.trend),
        ));
    } else if metrics.trend < -10 {
        insights.push(Insight::new(
            InsightKind::Negative,
            "Negative Trend",
            format!("Player is trending down ({}% vs earlier games)", metrics.trend),
        ));
    }

    // Consistency extremes.
    if metrics.consistency > 80 {
        insights.push(Insight::new(
            InsightKind::Neutral,
            "High Consistency",
            format!(
                "Very consistent performance ({}% consistency)",
                metrics.consistency
            ),
        ));
    } else if metrics.consistency < 50 {
        insights.push(Insight::new(
            InsightKind::Warning,
            "High Volatility",
            format!(
                "Inconsistent performance ({}% consistency)",
                metrics.consistency
            ),
        ));
    }

    // Long streaks.
    if metrics.streak.count > 3 {
        match metrics.streak.kind {
            StreakKind::Hit => insights.push(Insight::new(
                InsightKind::Positive,
                &format!("{}-Game Hit Streak", metrics.streak.count),
                format!("Currently on a {}-game hit streak", metrics.streak.count),
            )),
            StreakKind::Miss => insights.push(Insight::new(
                InsightKind::Negative,
                &format!("{}-Game Miss Streak", metrics.streak.count),
                format!("Currently on a {}-game miss streak", metrics.streak.count),
            )),
            StreakKind::None => {}
        }
    }

    // Recent form extremes.
    if metrics.recent_form.percentage > 70 {
        insights.push(Insight::new(
            InsightKind::Positive,
            "Hot Recent Form",
            format!(
                "{}% hit rate in last 5 games",
                metrics.recent_form.percentage
            ),
        ));
    } else if metrics.recent_form.percentage < 30 {
        insights.push(Insight::new(
            InsightKind::Negative,
            "Cold Recent Form",
            format!(
                "{}% hit rate in last 5 games",
                metrics.recent_form.percentage
            ),
        ));
    }

    insights
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
