//! Aggregator error types

use thiserror::Error;

use chess_core::pgn::PgnError;
use chess_core::ReplayError;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("Configuration error: {0}")]
    Config(&'static str),

    #[error("PGN error: {0}")]
    Pgn(#[from] PgnError),

    #[error("Replay error: {0}")]
    Replay(#[from] ReplayError),

    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Glob pattern error: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
