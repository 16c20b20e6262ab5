use std::{fs::File, io::BufWriter, io::Write, path::Path};

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(rename = "gameName")]
    pub game_names: Vec<String>,
    #[serde(rename = "numberOfGames")]
    pub number_of_games: usize,
}

impl Manifest {
    pub fn new(game_names: Vec<String>) -> Self {
        let number_of_games = game_names.len();
        Self { game_names, number_of_games }
    }

    /// Writes the manifest as compact JSON, replacing whatever was at `path`.
    pub fn write_to(&self, path: &impl AsRef<Path>) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}
