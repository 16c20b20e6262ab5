mod macros;
pub mod builder;
pub mod config;
pub mod data;
pub mod error;
pub mod filesystem;
pub mod reporter;
pub mod sysout;

use builder::{BuildRunner, CommandRunner};
use config::PipelineConfig;
use console::Style;
use data::models::{build::BuildOutcome, game::GameDir, manifest::Manifest};
use error::GameorgError;
use filesystem::TargetStatus;
use log::{info, warn};
use reporter::PipelineReporter;
use std::{env, path::{Path, PathBuf}};
use anyhow::Result;

/// Everything a finished run produced, in discovery order.
#[derive(Debug)]
pub struct OrganizeReport {
    pub target: PathBuf,
    pub target_status: TargetStatus,
    pub games: Vec<GameDir>,
    pub builds: Vec<BuildOutcome>,
    pub manifest: PathBuf,
}

pub struct Gameorg {
    config: PipelineConfig,
    runner: Box<dyn BuildRunner>,
    reporter: Option<Box<dyn PipelineReporter>>,
}

impl Gameorg {
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, runner: Box::new(CommandRunner::new()), reporter: None })
    }

    pub fn with_runner<R>(mut self, runner: R) -> Self where R: BuildRunner + 'static {
        self.runner = Box::new(runner);
        self
    }

    pub fn add_reporter<P>(&mut self, reporter: P) where P: PipelineReporter + 'static {
        self.reporter = Some(Box::new(reporter));
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Runs the whole pipeline with `source` and `target` taken relative to the current directory.
    pub fn organize(&mut self, source: impl AsRef<Path>, target: impl AsRef<Path>) -> Result<OrganizeReport> {
        let cwd = env::current_dir()?;
        let (source_path, target_path) = resolve_paths(&cwd, source, target);
        self.organize_paths(&source_path, &target_path)
    }

    fn organize_paths(&mut self, source: &Path, target: &Path) -> Result<OrganizeReport> {
        if !source.exists() {
            return err!(GameorgError::SourceNotFound { path: source.display().to_string() });
        }

        let game_paths = filesystem::find_game_paths(&source, &self.config.marker)?;
        info!("Found {} game directories in {}", game_paths.len(), source.display());

        let target_status = filesystem::prepare_target(&target)?;
        match target_status {
            TargetStatus::Created => println!("The '{}' dir has been created!", target.display()),
            TargetStatus::AlreadyExists => println!("{} already exists, and therefore cannot be created.",
                Style::new().yellow().apply_to(target.display())),
        }

        let games = data::naming::game_dirs(game_paths, &self.config.suffix_token);
        if let Some(game) = games.iter().find(|game| !data::naming::is_valid_name(&game.name)) {
            return err!(GameorgError::InvalidGameName {
                path: game.source.display().to_string(),
                name: game.name.to_owned(),
            });
        }

        if let Some(reporter) = self.reporter.as_mut() {
            reporter.set_total_games(games.len());
        }

        let mut builds = vec![];
        for game in &games {
            let destination = game.destination(&target);
            filesystem::copy_and_overwrite(&game.source, &destination)?;
            if let Some(reporter) = self.reporter.as_mut() {
                reporter.on_game_copied(game);
            }

            let outcome = builder::compile_game(self.runner.as_ref(), &destination,
                &self.config.code_extension, &self.config.build_command)?;
            if let Some(outcome) = outcome {
                println!("{} {}", Style::new().bold().apply_to("Compile Result:"), outcome);
                if let Some(reporter) = self.reporter.as_mut() {
                    reporter.on_game_built(&outcome);
                }

                if !outcome.success() && self.config.strict_build {
                    return err!(GameorgError::BuildFailed { game: game.name.to_owned(), code: outcome.exit_code });
                }
                builds.push(outcome);
            }
        }
        if let Some(reporter) = self.reporter.as_mut() {
            reporter.finish();
        }
        println!("{}", Style::new().green().apply_to("Copy complete."));

        let failed = builds.iter().filter(|outcome| !outcome.success()).count();
        if failed > 0 {
            warn!("{} of {} builds failed", failed, builds.len());
        }

        let manifest_path = target.join(&self.config.manifest_file);
        let manifest = Manifest::new(games.iter().map(|game| game.name.to_owned()).collect());
        manifest.write_to(&manifest_path)?;
        info!("Wrote manifest with {} games to {}", manifest.number_of_games, manifest_path.display());

        Ok(OrganizeReport {
            target: target.to_path_buf(),
            target_status,
            games,
            builds,
            manifest: manifest_path,
        })
    }
}

/// Joins both paths onto `cwd`. Absolute paths are kept as they are.
pub fn resolve_paths(cwd: &Path, source: impl AsRef<Path>, target: impl AsRef<Path>) -> (PathBuf, PathBuf) {
    (cwd.join(source), cwd.join(target))
}
