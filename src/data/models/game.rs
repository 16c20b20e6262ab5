use std::{fmt, path::{Path, PathBuf}};
use serde::{Deserialize, Serialize};

/// A discovered game directory paired with the name it gets in the target.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
pub struct GameDir {
    pub source: PathBuf,
    pub name: String,
}

impl GameDir {
    pub fn new(source: PathBuf, name: String) -> Self { Self { source, name } }

    pub fn destination(&self, target: &impl AsRef<Path>) -> PathBuf {
        target.as_ref().join(&self.name)
    }
}

impl fmt::Display for GameDir {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}] {}", self.name, self.source.display())
    }
}
