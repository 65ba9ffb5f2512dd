// Game-log ingest: per-game stat records plus CSV and JSON loading.
//
// Feed files carry the opponent column in the sportsbook convention
// ("vs BOS" = home, "@ BOS" = away). That label is split exactly once, here,
// so the analytics engine works with a typed venue and never parses strings.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

// ---------------------------------------------------------------------------
// Record model
// ---------------------------------------------------------------------------

/// Where a game was played, from the player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Venue {
    Home,
    Away,
}

/// One played game for one player. Logs are ordered newest-first:
/// index 0 is the most recent game.
///
/// `venue` is `None` when the feed's opponent label carried neither prefix;
/// such games count toward overall metrics but toward neither side of the
/// home/away split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatRecord {
    pub date: NaiveDate,
    /// Bare opponent label, prefix already stripped (e.g. "BOS").
    pub opponent: String,
    pub venue: Option<Venue>,
    pub pts: u32,
    pub reb: u32,
    pub ast: u32,
    pub three_pm: u32,
    pub stl: u32,
    pub blk: u32,
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum GameLogError {
    #[error("failed to read game log {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in game log {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("JSON error in game log {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    #[error("unsupported game log format for {path} (expected .csv or .json)")]
    UnsupportedFormat { path: String },
}

// ---------------------------------------------------------------------------
// Raw feed rows (private)
// ---------------------------------------------------------------------------

/// One feed row, CSV or JSON. The opponent column still carries the
/// "vs "/"@ " venue prefix at this stage. Stat column aliases cover the
/// upstream API spelling (`threePM`).
#[derive(Debug, Deserialize)]
struct RawGameRow {
    date: NaiveDate,
    opponent: String,
    pts: u32,
    reb: u32,
    ast: u32,
    #[serde(alias = "threePM", alias = "3pm")]
    three_pm: u32,
    stl: u32,
    blk: u32,
}

impl RawGameRow {
    fn into_record(self) -> GameStatRecord {
        let (venue, opponent) = split_opponent_label(&self.opponent);
        if venue.is_none() {
            warn!(
                opponent = %self.opponent,
                date = %self.date,
                "opponent label has no venue prefix; game is excluded from the home/away split"
            );
        }
        GameStatRecord {
            date: self.date,
            opponent,
            venue,
            pts: self.pts,
            reb: self.reb,
            ast: self.ast,
            three_pm: self.three_pm,
            stl: self.stl,
            blk: self.blk,
        }
    }
}

/// Split a feed opponent label into a venue and the bare opponent name.
///
/// "vs BOS" -> (Home, "BOS"); "@ BOS" -> (Away, "BOS"); anything else is
/// returned unsplit with no venue.
fn split_opponent_label(label: &str) -> (Option<Venue>, String) {
    let trimmed = label.trim();
    if let Some(rest) = trimmed.strip_prefix("vs ") {
        return (Some(Venue::Home), rest.trim().to_string());
    }
    if let Some(rest) = trimmed.strip_prefix('@') {
        return (Some(Venue::Away), rest.trim().to_string());
    }
    (None, trimmed.to_string())
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load a game log from a CSV or JSON file, dispatching on the extension.
/// Records are returned in file order, which the feed guarantees to be
/// newest-first.
pub fn load_game_log(path: &Path) -> Result<Vec<GameStatRecord>, GameLogError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    let log = match ext.as_deref() {
        Some("csv") => load_csv(path)?,
        Some("json") => load_json(path)?,
        _ => {
            return Err(GameLogError::UnsupportedFormat {
                path: path.display().to_string(),
            })
        }
    };
    info!(games = log.len(), path = %path.display(), "game log loaded");
    Ok(log)
}

/// Load a CSV game log (header row: date, opponent, pts, reb, ast,
/// three_pm, stl, blk).
pub fn load_csv(path: &Path) -> Result<Vec<GameStatRecord>, GameLogError> {
    let file = File::open(path).map_err(|e| GameLogError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_csv(file).map_err(|e| GameLogError::Csv {
        path: path.display().to_string(),
        source: e,
    })
}

/// Load a JSON game log (array of feed row objects).
pub fn load_json(path: &Path) -> Result<Vec<GameStatRecord>, GameLogError> {
    let file = File::open(path).map_err(|e| GameLogError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_json(file).map_err(|e| GameLogError::Json {
        path: path.display().to_string(),
        source: e,
    })
}

fn parse_csv<R: Read>(reader: R) -> Result<Vec<GameStatRecord>, csv::Error> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for row in csv_reader.deserialize::<RawGameRow>() {
        records.push(row?.into_record());
    }
    Ok(records)
}

fn parse_json<R: Read>(reader: R) -> Result<Vec<GameStatRecord>, serde_json::Error> {
    let rows: Vec<RawGameRow> = serde_json::from_reader(reader)?;
    Ok(rows.into_iter().map(RawGameRow::into_record).collect())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
