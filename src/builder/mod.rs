use std::{ffi::OsStr, path::Path, process::{Command, Stdio}};

use anyhow::Result;
use log::{debug, warn};

use crate::{data::models::build::BuildOutcome, err, error::GameorgIOError, filesystem};

pub trait BuildRunner {
    /// Runs `command` followed by `file` with `dir` as the working directory.
    fn run(&self, dir: &Path, command: &[String], file: &OsStr) -> Result<BuildOutcome>;
}

/// Runs the build through a real child process.
#[derive(Debug, Default)]
pub struct CommandRunner;

impl CommandRunner {
    pub fn new() -> Self { Self }
}

impl BuildRunner for CommandRunner {
    fn run(&self, dir: &Path, command: &[String], file: &OsStr) -> Result<BuildOutcome> {
        let (program, args) = match command.split_first() {
            Some(split) => split,
            None => return err!("Empty build command for {}", dir.display()),
        };

        let file_name = file.to_string_lossy().to_string();
        debug!("Running `{} {} {}` in {}", program, args.join(" "), file_name, dir.display());
        // stdin is piped and closed right away so the build never waits on the terminal
        let output = Command::new(program)
            .args(args)
            .arg(file)
            .current_dir(dir)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| GameorgIOError::BuildSpawn { program: program.to_owned(), source })?;

        let mut full_command = command.to_vec();
        full_command.push(file_name.to_owned());

        Ok(BuildOutcome {
            game: game_name(dir),
            source_file: file_name,
            command: full_command,
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        })
    }
}

fn game_name(dir: &Path) -> String {
    dir.file_name().map(|name| name.to_string_lossy().to_string()).unwrap_or_default()
}

/// Builds the game in `dir` if it has a top-level file ending in `extension`.
/// Returns `None` when there's nothing to build.
pub fn compile_game(runner: &dyn BuildRunner, dir: &impl AsRef<Path>, extension: &str, command: &[String]) -> Result<Option<BuildOutcome>> {
    let dir = dir.as_ref();
    let code_file = match filesystem::find_code_file(&dir, extension)? {
        Some(file) => file,
        None => {
            debug!("No `{}` file in {}, skipping build", extension, dir.display());
            return Ok(None);
        }
    };

    let outcome = runner.run(dir, command, &code_file)?;
    if !outcome.success() {
        warn!("Build of {} exited with {:?}", outcome.game, outcome.exit_code);
    }

    Ok(Some(outcome))
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, ffi::OsString, fs, path::PathBuf};

    use super::*;

    #[derive(Default)]
    struct RecordingRunner {
        calls: RefCell<Vec<(PathBuf, Vec<String>, OsString)>>,
    }

    impl BuildRunner for RecordingRunner {
        fn run(&self, dir: &Path, command: &[String], file: &OsStr) -> Result<BuildOutcome> {
            self.calls.borrow_mut().push((dir.to_path_buf(), command.to_vec(), file.to_os_string()));
            Ok(BuildOutcome {
                game: game_name(dir),
                source_file: file.to_string_lossy().to_string(),
                command: command.to_vec(),
                exit_code: Some(0),
                stdout: String::new(),
            })
        }
    }

    fn go_build() -> Vec<String> {
        vec![String::from("go"), String::from("build")]
    }

    #[test]
    fn skips_dir_without_code() -> Result<()> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("README.md"), "")?;
        let runner = RecordingRunner::default();

        assert_eq!(compile_game(&runner, &dir.path(), ".go", &go_build())?, None);
        assert!(runner.calls.borrow().is_empty());
        Ok(())
    }

    #[test]
    fn builds_the_code_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("main.go"), "package main")?;
        let runner = RecordingRunner::default();

        let outcome = compile_game(&runner, &dir.path(), ".go", &go_build())?;
        assert!(outcome.is_some());

        let calls = runner.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], (dir.path().to_path_buf(), go_build(), OsString::from("main.go")));
        Ok(())
    }

    #[test]
    fn empty_command_is_an_error() {
        let dir = std::env::temp_dir();
        assert!(CommandRunner::new().run(&dir, &[], OsStr::new("main.go")).is_err());
    }

    #[test]
    fn missing_executable_is_a_spawn_error() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let command = vec![String::from("surely-not-a-real-compiler-binary")];
        let error = CommandRunner::new().run(dir.path(), &command, OsStr::new("main.go")).unwrap_err();

        assert!(matches!(error.downcast_ref::<GameorgIOError>(), Some(GameorgIOError::BuildSpawn { .. })));
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn runs_in_the_game_dir_and_captures_stdout() -> Result<()> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("build.go"), "pwd\necho built\n")?;
        let cwd = std::env::current_dir()?;

        let outcome = CommandRunner::new().run(dir.path(), &[String::from("sh")], OsStr::new("build.go"))?;

        assert!(outcome.success());
        assert_eq!(outcome.source_file, "build.go");
        assert_eq!(outcome.command, vec![String::from("sh"), String::from("build.go")]);
        let expected_dir = dir.path().canonicalize()?;
        let lines: Vec<&str> = outcome.stdout.lines().collect();
        assert_eq!(PathBuf::from(lines[0]).canonicalize()?, expected_dir);
        assert_eq!(lines[1], "built");
        assert_eq!(std::env::current_dir()?, cwd);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn reports_non_zero_exit() -> Result<()> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("broken.go"), "exit 3\n")?;

        let outcome = compile_game(&CommandRunner::new(), &dir.path(), ".go", &[String::from("sh")])?;
        let outcome = outcome.expect("a code file was present");

        assert!(!outcome.success());
        assert_eq!(outcome.exit_code, Some(3));
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn passes_non_utf8_file_names_untouched() -> Result<()> {
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir()?;
        let name = OsStr::from_bytes(b"caf\xe9.go");
        if fs::write(dir.path().join(name), "echo found\n").is_err() {
            // some filesystems only accept UTF-8 names
            return Ok(());
        }

        let outcome = compile_game(&CommandRunner::new(), &dir.path(), ".go", &[String::from("sh")])?;
        let outcome = outcome.expect("a code file was present");

        assert!(outcome.success());
        assert_eq!(outcome.stdout, "found\n");
        Ok(())
    }
}
