// Report rendering: plain-text and JSON views of a metrics record.

use std::fmt::Write;

use serde::Serialize;

use crate::analytics::insights::Insight;
use crate::analytics::MetricsRecord;
use crate::props::{Line, Period, PropType};

/// One full analytics report: the query parameters plus everything
/// computed from them.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub prop: &'a str,
    pub line: Line,
    pub period: &'a str,
    pub metrics: &'a MetricsRecord,
    pub insights: &'a [Insight],
}

impl<'a> Report<'a> {
    pub fn new(
        prop: PropType,
        line: Line,
        period: Period,
        metrics: &'a MetricsRecord,
        insights: &'a [Insight],
    ) -> Self {
        Report {
            prop: prop.label(),
            line,
            period: period.label(),
            metrics,
            insights,
        }
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Render as a plain-text report.
    pub fn to_text(&self) -> String {
        let m = self.metrics;
        let mut out = String::new();

        // Infallible: write! to a String cannot fail.
        let _ = writeln!(out, "{} {} ({})", self.prop, self.line, self.period);
        let _ = writeln!(out, "{}", "-".repeat(40));
        let _ = writeln!(
            out,
            "Hit rate:       {}/{} ({}%)",
            m.hit_rate.hits, m.hit_rate.total, m.hit_rate.percentage
        );
        let _ = writeln!(out, "Average:        {:.1}", m.average);
        let _ = writeln!(out, "Median:         {:.1}", m.median);
        let _ = writeln!(out, "Std deviation:  {:.2}", m.std_dev);
        let _ = writeln!(out, "Consistency:    {}%", m.consistency);
        let _ = writeln!(out, "Volatility:     {}%", m.volatility);
        let _ = writeln!(out, "Trend:          {:+}%", m.trend);
        let _ = writeln!(out, "Percentile:     {}%", m.percentile);
        let _ = writeln!(out);
        let _ = writeln!(out, "Edge:           {:+.1}%", m.edge);
        let _ = writeln!(out, "Probability:    {:.2}", m.probability);
        let _ = writeln!(out, "Expected value: {:+.3} units", m.expected_value);
        let _ = writeln!(out, "Confidence:     {}", m.confidence.label());
        let _ = writeln!(out, "Recommendation: {}", m.recommendation.label());
        let _ = writeln!(
            out,
            "Streak:         {} ({})",
            m.streak.count,
            m.streak.kind.label()
        );
        let _ = writeln!(
            out,
            "Recent form:    {}/{} ({}%), trend {:+}%",
            m.recent_form.hits, m.recent_form.total, m.recent_form.percentage, m.recent_form.trend
        );
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Home:           {}/{} ({}%), avg {:.1} over {} games",
            m.home_away_split.home.hit_rate.hits,
            m.home_away_split.home.hit_rate.total,
            m.home_away_split.home.hit_rate.percentage,
            m.home_away_split.home.average,
            m.home_away_split.home.games
        );
        let _ = writeln!(
            out,
            "Away:           {}/{} ({}%), avg {:.1} over {} games",
            m.home_away_split.away.hit_rate.hits,
            m.home_away_split.away.hit_rate.total,
            m.home_away_split.away.hit_rate.percentage,
            m.home_away_split.away.average,
            m.home_away_split.away.games
        );

        let _ = writeln!(out);
        if self.insights.is_empty() {
            let _ = writeln!(out, "No insights available");
        } else {
            for insight in self.insights {
                let _ = writeln!(
                    out,
                    "[{}] {}: {}",
                    insight.kind.label(),
                    insight.title,
                    insight.message
                );
            }
        }

        out
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
