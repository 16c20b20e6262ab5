use crate::data::models::{build::BuildOutcome, game::GameDir};

/// Receives progress updates while games are copied and built.
pub trait PipelineReporter {
    fn set_total_games(&mut self, total_games: usize);
    fn on_game_copied(&mut self, game: &GameDir);
    fn on_game_built(&mut self, outcome: &BuildOutcome);
    fn finish(&mut self);
}
