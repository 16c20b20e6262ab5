use std::{ffi::OsString, fs, io, path::{Path, PathBuf}};

use log::{debug, info};
use walkdir::WalkDir;

use crate::error::GameorgIOError;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TargetStatus {
    Created,
    AlreadyExists,
}

/// Lists the immediate child directories of `source` whose name contains `marker`,
/// ignoring case. Order is whatever the filesystem reports.
pub fn find_game_paths(source: &impl AsRef<Path>, marker: &str) -> Result<Vec<PathBuf>, GameorgIOError> {
    let marker = marker.to_lowercase();
    let mut game_paths = vec![];

    for entry in WalkDir::new(source).min_depth(1).max_depth(1) {
        let entry = entry?;
        // Symlinked directories count as directories.
        if !entry.path().is_dir() {
            continue;
        }

        let dir_name = entry.file_name().to_string_lossy();
        if dir_name.to_lowercase().contains(&marker) {
            debug!("Found game directory {}", entry.path().display());
            game_paths.push(entry.path().to_path_buf());
        }
    }

    Ok(game_paths)
}

/// Creates `target` (one level only) unless it's already there.
pub fn prepare_target(target: &impl AsRef<Path>) -> Result<TargetStatus, GameorgIOError> {
    let target = target.as_ref();
    if target.exists() {
        info!("Target {} already exists, reusing it", target.display());
        return Ok(TargetStatus::AlreadyExists);
    }

    fs::create_dir(target).map_err(|source| GameorgIOError::TargetNotCreated {
        path: target.display().to_string(),
        source,
    })?;
    info!("Created target {}", target.display());

    Ok(TargetStatus::Created)
}

/// Replaces `destination` with a full copy of the `source` tree.
pub fn copy_and_overwrite(source: &impl AsRef<Path>, destination: &impl AsRef<Path>) -> Result<(), GameorgIOError> {
    let source = source.as_ref();
    let destination = destination.as_ref();

    if fs::symlink_metadata(destination).is_ok() {
        debug!("Removing previous copy at {}", destination.display());
        remove_entry(destination)?;
    }

    let mut files = 0;
    // The destination may live inside the source, it's created before the walk reaches it.
    let walker = WalkDir::new(source).follow_links(true).into_iter()
        .filter_entry(|entry| !entry.path().starts_with(destination));
    for entry in walker {
        let entry = entry?;
        let relative = entry.path().strip_prefix(source)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        let to = destination.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&to)?;
        } else {
            fs::copy(entry.path(), &to)?;
            files += 1;
        }
    }
    debug!("Copied {} files from {} to {}", files, source.display(), destination.display());

    Ok(())
}

fn remove_entry(path: &Path) -> io::Result<()> {
    let metadata = fs::symlink_metadata(path)?;
    if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

/// First file in the top level of `dir` whose name ends with `extension`.
pub fn find_code_file(dir: &impl AsRef<Path>, extension: &str) -> Result<Option<OsString>, GameorgIOError> {
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }

        if entry.file_name().to_string_lossy().ends_with(extension) {
            return Ok(Some(entry.file_name().to_os_string()));
        }
    }

    Ok(None)
}
