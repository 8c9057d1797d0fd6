//! Player aggregation: analyze a batch of games and reduce the feature
//! records to per-column statistics.

use std::collections::BTreeMap;

use chess_analyzers::{FeatureRecord, GameAnalyzer};
use chess_core::pgn::PgnReader;
use chess_core::{GameData, Move};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::config::BatchConfig;
use crate::error::AnalyzerError;
use crate::selection::select_games;

/// Feature records of the analyzed games, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeatureTable {
    rows: Vec<FeatureRecord>,
}

impl FeatureTable {
    pub fn new(rows: Vec<FeatureRecord>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[FeatureRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First `n` rows.
    pub fn head(&self, n: usize) -> FeatureTable {
        Self::new(self.rows.iter().take(n).cloned().collect())
    }

    /// Arithmetic mean of every numeric column. A column only present in some
    /// rows is averaged over those rows.
    pub fn column_means(&self) -> BTreeMap<String, f64> {
        let mut sums: BTreeMap<&'static str, (f64, usize)> = BTreeMap::new();
        for row in &self.rows {
            for (name, value) in row.numeric_columns() {
                let entry = sums.entry(name).or_insert((0.0, 0));
                entry.0 += value;
                entry.1 += 1;
            }
        }
        sums.into_iter()
            .map(|(name, (sum, count))| (name.to_string(), sum / count as f64))
            .collect()
    }

    /// How often each castling type occurs.
    pub fn castling_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for row in &self.rows {
            *counts.entry(row.castling_type.to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Column-oriented JSON: `{column: {row_index: value}}`.
    pub fn to_columns_json(&self) -> Value {
        let mut columns = Map::new();
        for (i, row) in self.rows.iter().enumerate() {
            let Value::Object(fields) = row.to_json() else {
                continue;
            };
            for (name, value) in fields {
                let column = columns
                    .entry(name)
                    .or_insert_with(|| Value::Object(Map::new()));
                if let Value::Object(cells) = column {
                    cells.insert(i.to_string(), value);
                }
            }
        }
        Value::Object(columns)
    }
}

/// A game left out of the table, with the reason.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DroppedGame {
    /// Position of the game in the batch input.
    pub index: usize,
    pub reason: String,
}

/// Result of one batch: the table plus every game that was dropped.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub table: FeatureTable,
    pub dropped: Vec<DroppedGame>,
}

impl BatchReport {
    pub fn games_analyzed(&self) -> usize {
        self.table.len()
    }

    pub fn games_dropped(&self) -> usize {
        self.dropped.len()
    }
}

/// Column-wise summary of a player's games.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerSummary {
    pub player: Option<String>,
    pub games_analyzed: usize,
    pub games_dropped: usize,
    pub means: BTreeMap<String, f64>,
    pub castling_types: BTreeMap<String, usize>,
}

impl PlayerSummary {
    pub fn from_report(player: Option<&str>, report: &BatchReport) -> Self {
        Self {
            player: player.map(str::to_string),
            games_analyzed: report.games_analyzed(),
            games_dropped: report.games_dropped(),
            means: report.table.column_means(),
            castling_types: report.table.castling_counts(),
        }
    }
}

/// Runs the game analyzer over a bounded batch of one player's games.
///
/// Malformed games are dropped from the table and listed in the report; the
/// batch carries on with the rest.
pub struct PlayerAggregator {
    config: BatchConfig,
    reader: PgnReader,
    pool: ThreadPool,
}

impl PlayerAggregator {
    pub fn new(config: BatchConfig) -> Result<Self, AnalyzerError> {
        config.validate()?;
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build()?;
        Ok(Self {
            config,
            reader: PgnReader::new()?,
            pool,
        })
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Analyze already-decoded move lists, all of them, in order.
    pub fn analyze_moves(&self, games: &[Vec<Move>]) -> BatchReport {
        let inputs: Vec<(usize, &[Move])> = games
            .iter()
            .enumerate()
            .map(|(i, moves)| (i, moves.as_slice()))
            .collect();
        let mut report = BatchReport::default();
        self.run(&inputs, &mut report);
        report
    }

    /// Analyze decoded games after applying the look-back window and the
    /// game cap.
    pub fn analyze_games(&self, games: &[GameData]) -> BatchReport {
        let mut report = BatchReport::default();
        self.run_selected(games, &(0..games.len()).collect::<Vec<_>>(), &mut report);
        report
    }

    /// Parse PGN texts, then analyze them like [`Self::analyze_games`]. Games
    /// that fail to parse are dropped before selection.
    pub fn analyze_pgns(&self, pgns: &[String]) -> BatchReport {
        let mut report = BatchReport::default();
        let mut games = Vec::with_capacity(pgns.len());
        let mut origins = Vec::with_capacity(pgns.len());

        for (index, pgn) in pgns.iter().enumerate() {
            match self.reader.parse(pgn) {
                Ok(game) => {
                    games.push(game);
                    origins.push(index);
                }
                Err(e) => {
                    warn!(game = index, error = %e, "Dropping unparseable game");
                    report.dropped.push(DroppedGame {
                        index,
                        reason: e.to_string(),
                    });
                }
            }
        }

        self.run_selected(&games, &origins, &mut report);
        report.dropped.sort_by_key(|d| d.index);
        report
    }

    fn run_selected(&self, games: &[GameData], origins: &[usize], report: &mut BatchReport) {
        let selected = select_games(games, &self.config);
        info!(
            available = games.len(),
            selected = selected.len(),
            "Games selected for analysis"
        );

        let inputs: Vec<(usize, &[Move])> = selected
            .into_iter()
            .map(|i| (origins[i], games[i].moves.as_slice()))
            .collect();
        self.run(&inputs, report);
    }

    fn run(&self, inputs: &[(usize, &[Move])], report: &mut BatchReport) {
        let set = self.config.extractors;
        let outcomes: Vec<_> = self.pool.install(|| {
            inputs
                .par_iter()
                .map_init(
                    || GameAnalyzer::new(set),
                    |analyzer, (index, moves)| (*index, analyzer.analyze(moves)),
                )
                .collect()
        });

        let mut rows = Vec::with_capacity(outcomes.len());
        for (index, outcome) in outcomes {
            match outcome {
                Ok(record) => rows.push(record),
                Err(e) => {
                    warn!(game = index, ply = e.ply(), error = %e, "Dropping malformed game");
                    report.dropped.push(DroppedGame {
                        index,
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            analyzed = rows.len(),
            dropped = report.dropped.len(),
            "Batch analysis complete"
        );
        report.table = FeatureTable::new(rows);
    }
}
