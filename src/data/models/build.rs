use std::fmt;

/// What happened when a game's build command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutcome {
    pub game: String,
    pub source_file: String,
    pub command: Vec<String>,
    /// `None` when the process was killed by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
}

impl BuildOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

impl fmt::Display for BuildOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let exit_code = match self.exit_code {
            Some(code) => code.to_string(),
            None => String::from("n/a"),
        };
        write!(f, "[{}] args={:?}, returncode={}, stdout={:?}", self.game, self.command, exit_code, self.stdout)
    }
}
