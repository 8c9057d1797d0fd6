//! Which games of a player's history get analyzed.

use chess_core::GameData;
use chrono::{Datelike, Days, NaiveDate};

use crate::config::BatchConfig;

/// First day still inside the look-back window, counting 30 days per month.
/// Windows reaching past the earliest representable date start there.
pub fn window_start(reference: NaiveDate, max_months: u32) -> NaiveDate {
    reference
        .checked_sub_days(Days::new(30 * u64::from(max_months)))
        .unwrap_or(NaiveDate::MIN)
}

/// Parse a PGN `Date` value (`YYYY.MM.DD`). Unknown parts (`??`) give `None`.
pub fn parse_game_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y.%m.%d").ok()
}

/// A game is inside the window when the first day of its month is not
/// before `start`. Undated games are always inside.
pub fn in_window(date: Option<&str>, start: NaiveDate) -> bool {
    let Some(played) = date.and_then(parse_game_date) else {
        return true;
    };
    NaiveDate::from_ymd_opt(played.year(), played.month(), 1)
        .map(|month_start| month_start >= start)
        .unwrap_or(true)
}

/// Indices of the games inside the window, in input order, capped at
/// `max_games`.
pub fn select_games(games: &[GameData], config: &BatchConfig) -> Vec<usize> {
    let start = window_start(config.reference_date, config.max_months);
    games
        .iter()
        .enumerate()
        .filter(|(_, g)| in_window(g.metadata.date.as_deref(), start))
        .map(|(i, _)| i)
        .take(config.max_games)
        .collect()
}
