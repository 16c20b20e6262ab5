use std::{path::PathBuf, process};

use clap::Parser;
use console::Style;
use env_logger::{Builder, Env, Target};
use gameorg::{Gameorg, config::PipelineConfig, sysout::PipelineReporterSysOut};
use log::debug;

#[derive(Parser)]
#[command(version = "1.0", author = "Nico Hormazábal", about = "Copies game directories into one place, builds them and writes a manifest")]
struct Opts {
    #[arg(help = "Directory to look for games in, relative to the current directory.")]
    source: PathBuf,
    #[arg(help = "Directory to copy the games into, relative to the current directory. Created if missing.")]
    target: PathBuf,
    #[arg(short, long, help = "JSON file with the pipeline configuration.")]
    config: Option<PathBuf>,
    #[arg(short, long, help = "Text a directory name must contain to be a game, ignoring case. Default is `game`")]
    marker: Option<String>,
    #[arg(short, long, help = "Text removed from the directory name to get the game name. Default is `_game`")]
    suffix: Option<String>,
    #[arg(short, long, help = "Extension of the file handed to the build command. Default is `.go`")]
    extension: Option<String>,
    #[arg(short, long = "build-cmd", allow_hyphen_values = true, help = "Build command, one token per flag. Default is `go build`")]
    build_cmd: Vec<String>,
    #[arg(long, help = "Stops when a build exits with an error.")]
    strict: bool,
    #[arg(short, long, help = "Shows a progress bar.")]
    progress: bool,
}

impl Opts {
    fn pipeline_config(&self) -> anyhow::Result<PipelineConfig> {
        let mut config = match self.config {
            Some(ref path) => PipelineConfig::from_path(path)?,
            None => PipelineConfig::default(),
        };

        if let Some(ref marker) = self.marker {
            config.marker = marker.to_owned();
        }
        if let Some(ref suffix) = self.suffix {
            config.suffix_token = suffix.to_owned();
        }
        if let Some(ref extension) = self.extension {
            config.code_extension = extension.to_owned();
        }
        if !self.build_cmd.is_empty() {
            config.build_command = self.build_cmd.to_owned();
        }
        if self.strict {
            config.strict_build = true;
        }

        Ok(config)
    }
}

fn main() {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.target(Target::Stdout);
    builder.init();
    let opts: Opts = Opts::parse();

    let gameorg = opts.pipeline_config().and_then(Gameorg::new);
    let mut gameorg = match gameorg {
        Ok(gameorg) => gameorg,
        Err(e) => {
            println!("{} loading the configuration.\n{}", Style::new().red().apply_to("ERROR"), e);
            process::exit(1);
        }
    };
    if opts.progress {
        gameorg.add_reporter(PipelineReporterSysOut::new());
    }
    debug!("Pipeline configuration: {:?}", gameorg.config());

    match gameorg.organize(&opts.source, &opts.target) {
        Ok(report) => {
            println!("Manifest: {} ({} games)",
                Style::new().bold().apply_to(report.manifest.display()),
                report.games.len());
        }
        Err(e) => {
            println!("{} organizing the games from {}.\n{:#}",
                Style::new().red().apply_to("ERROR"),
                Style::new().green().apply_to(opts.source.display()),
                e);
            process::exit(1);
        }
    }
}
