//! Batch configuration from environment variables

use std::env;

use chess_analyzers::ExtractorSet;
use chrono::{Local, NaiveDate};
use tracing::info;

use crate::error::AnalyzerError;

#[derive(Clone, Debug)]
pub struct BatchConfig {
    /// Upper bound on games analyzed per player
    pub max_games: usize,

    /// Look-back window in months (30-day months)
    pub max_months: u32,

    /// Worker threads for batch analysis
    pub threads: usize,

    /// Date the look-back window is measured from
    pub reference_date: NaiveDate,

    /// Optional extractors to run on top of the base statistics
    pub extractors: ExtractorSet,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_games: 50,
            max_months: 3,
            threads: num_cpus::get(),
            reference_date: Local::now().date_naive(),
            extractors: ExtractorSet::default(),
        }
    }
}

fn env_flag(name: &str) -> Option<bool> {
    env::var(name)
        .ok()
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
}

impl BatchConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, AnalyzerError> {
        let defaults = Self::default();

        let max_games = env::var("MAX_GAMES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_games);

        let max_months = env::var("MAX_MONTHS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_months);

        let threads = env::var("ANALYSIS_THREADS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.threads);

        let extractors = ExtractorSet {
            queen_lifetime: env_flag("ANALYZE_QUEEN_LIFETIME")
                .unwrap_or(defaults.extractors.queen_lifetime),
            piece_moves: env_flag("ANALYZE_PIECE_MOVES")
                .unwrap_or(defaults.extractors.piece_moves),
        };

        let config = Self {
            max_games,
            max_months,
            threads,
            reference_date: defaults.reference_date,
            extractors,
        };
        config.validate()?;

        info!(
            max_games = config.max_games,
            max_months = config.max_months,
            threads = config.threads,
            "Batch config loaded"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AnalyzerError> {
        if self.max_games == 0 {
            return Err(AnalyzerError::Config("MAX_GAMES must be positive"));
        }
        if self.max_months == 0 {
            return Err(AnalyzerError::Config("MAX_MONTHS must be positive"));
        }
        if self.threads == 0 {
            return Err(AnalyzerError::Config("ANALYSIS_THREADS must be positive"));
        }
        Ok(())
    }
}
