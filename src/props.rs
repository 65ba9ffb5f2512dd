// Prop market primitives: prop types, betting lines, analysis windows.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// A betting line. May be fractional (e.g. 20.5); a game hits the prop iff
/// its extracted value is strictly greater than the line.
pub type Line = f64;

// ---------------------------------------------------------------------------
// Prop types
// ---------------------------------------------------------------------------

/// The statistic (or fixed sum of statistics) a prop is graded on.
///
/// This is a closed set: feeds that hand us an arbitrary label go through
/// [`PropType::from_str`] (strict) or [`PropType::parse_lenient`] (legacy
/// fallback) at the boundary, so the analytics engine itself never sees an
/// unrecognized prop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropType {
    Points,
    Rebounds,
    Assists,
    ThreesMade,
    Steals,
    Blocks,
    PtsRebAst,
    PtsReb,
    PtsAst,
    RebAst,
}

/// All prop types, in display order.
pub const ALL_PROPS: &[PropType] = &[
    PropType::Points,
    PropType::Rebounds,
    PropType::Assists,
    PropType::ThreesMade,
    PropType::Steals,
    PropType::Blocks,
    PropType::PtsRebAst,
    PropType::PtsReb,
    PropType::PtsAst,
    PropType::RebAst,
];

impl PropType {
    /// Sportsbook-style display label, matching the upstream feed naming.
    pub fn label(&self) -> &'static str {
        match self {
            PropType::Points => "Points",
            PropType::Rebounds => "Rebounds",
            PropType::Assists => "Assists",
            PropType::ThreesMade => "3-Pointers Made",
            PropType::Steals => "Steals",
            PropType::Blocks => "Blocks",
            PropType::PtsRebAst => "Pts+Reb+Ast",
            PropType::PtsReb => "Pts+Reb",
            PropType::PtsAst => "Pts+Ast",
            PropType::RebAst => "Reb+Ast",
        }
    }

    /// Parse a prop label, falling back to `Points` for anything
    /// unrecognized. This preserves the legacy feed behavior, but the
    /// fallback is logged instead of silent.
    pub fn parse_lenient(label: &str) -> PropType {
        match label.parse() {
            Ok(prop) => prop,
            Err(_) => {
                warn!(label, "unrecognized prop label, falling back to Points");
                PropType::Points
            }
        }
    }
}

#[derive(Debug, Error)]
#[error("unrecognized prop type `{0}`")]
pub struct ParsePropError(pub String);

impl FromStr for PropType {
    type Err = ParsePropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "points" => Ok(PropType::Points),
            "rebounds" => Ok(PropType::Rebounds),
            "assists" => Ok(PropType::Assists),
            "3-pointers made" | "3pm" => Ok(PropType::ThreesMade),
            "steals" => Ok(PropType::Steals),
            "blocks" => Ok(PropType::Blocks),
            "pts+reb+ast" => Ok(PropType::PtsRebAst),
            "pts+reb" => Ok(PropType::PtsReb),
            "pts+ast" => Ok(PropType::PtsAst),
            "reb+ast" => Ok(PropType::RebAst),
            _ => Err(ParsePropError(s.to_string())),
        }
    }
}

impl fmt::Display for PropType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Analysis windows
// ---------------------------------------------------------------------------

/// How many of the most recent games to analyze. A log shorter than the
/// window is used as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    Last5,
    Last10,
    Last20,
}

impl Period {
    /// Window size in games.
    pub fn window(&self) -> usize {
        match self {
            Period::Last5 => 5,
            Period::Last10 => 10,
            Period::Last20 => 20,
        }
    }

    /// Display label, matching the upstream feed naming.
    pub fn label(&self) -> &'static str {
        match self {
            Period::Last5 => "Last 5",
            Period::Last10 => "Last 10",
            Period::Last20 => "Last 20",
        }
    }
}

#[derive(Debug, Error)]
#[error("unrecognized period `{0}` (expected one of: last5, last10, last20)")]
pub struct ParsePeriodError(pub String);

impl FromStr for Period {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        match normalized.as_str() {
            "last5" | "5" => Ok(Period::Last5),
            "last10" | "10" => Ok(Period::Last10),
            "last20" | "20" => Ok(Period::Last20),
            _ => Err(ParsePeriodError(s.to_string())),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
