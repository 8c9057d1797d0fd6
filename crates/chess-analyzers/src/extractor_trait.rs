//! Base trait for per-game feature extractors.

use chess_core::ReplayStep;

use crate::record::FeatureRecord;

/// Trait that all extractors implement.
///
/// An extractor sees every replay step of one game in order and writes its
/// statistic into the game's [`FeatureRecord`] at the end. State never
/// carries over between games.
pub trait FeatureExtractor: Send {
    /// Column name of the statistic this extractor produces.
    fn name(&self) -> &'static str;

    /// Reset state for a new game.
    fn start_game(&mut self);

    /// Process a single replayed move.
    fn process_step(&mut self, step: &ReplayStep);

    /// Write the final value for the current game.
    fn finish_game(&mut self, record: &mut FeatureRecord);
}
