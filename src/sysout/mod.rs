use indicatif::{ProgressBar, ProgressStyle};

use crate::{data::models::{build::BuildOutcome, game::GameDir}, reporter::PipelineReporter};

#[derive(Debug)]
pub struct PipelineReporterSysOut {
    progress_bar: ProgressBar,
    built: u32,
    failed: u32,
}

impl PipelineReporterSysOut {
    pub fn new() -> Self {
        let progress_bar = ProgressBar::new(0);
        Self { progress_bar, built: 0, failed: 0 }
    }
}

impl Default for PipelineReporterSysOut {
    fn default() -> Self { Self::new() }
}

impl PipelineReporter for PipelineReporterSysOut {
    fn set_total_games(&mut self, total_games: usize) {
        self.progress_bar.set_length(total_games as u64);
        self.progress_bar.set_style(ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.green/blue}] {pos}/{len} | {msg}")
            .progress_chars("#>-"));
    }

    fn on_game_copied(&mut self, game: &GameDir) {
        self.progress_bar.inc(1);
        self.progress_bar.set_message(&format!("Copied {}", game));
    }

    fn on_game_built(&mut self, outcome: &BuildOutcome) {
        if outcome.success() {
            self.built += 1;
        } else {
            self.failed += 1;
        }
        self.progress_bar.set_message(&format!("Built: #{} Failed: #{}", self.built, self.failed));
    }

    fn finish(&mut self) {
        self.progress_bar.finish_with_message(&format!("Total Built #{}, Failed #{}", self.built, self.failed));
    }
}
