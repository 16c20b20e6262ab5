use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameorgError {
    #[error(transparent)]
    Other(#[from] anyhow::Error),

    #[error("The `{path}` directory doesn't exist")]
    SourceNotFound {
        path: String
    },

    #[error("`{path}` gives `{name}` once the suffix is removed, which is not a valid directory name")]
    InvalidGameName {
        path: String,
        name: String
    },

    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        message: String
    },

    #[error("Build of `{game}` failed with exit code {}", code.map(|c| c.to_string()).unwrap_or_else(|| "n/a".to_string()))]
    BuildFailed {
        game: String,
        code: Option<i32>
    },
}

#[derive(Error, Debug)]
pub enum GameorgIOError {
    #[error("IO Error")]
    Io {
        #[from]
        source: io::Error,
    },

    #[error("Error walking the directory tree: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Target directory `{path}` could not be created")]
    TargetNotCreated {
        path: String,
        source: io::Error,
    },

    #[error("Can't run build command `{program}`")]
    BuildSpawn {
        program: String,
        source: io::Error,
    },
}
