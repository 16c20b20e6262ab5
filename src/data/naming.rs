use std::path::{Component, Path};

use super::models::game::GameDir;

/// Removes the first occurrence of `token` from `name`, wherever it appears.
pub fn derive_name(name: &str, token: &str) -> String {
    name.replacen(token, "", 1)
}

/// A name is usable when it stays a single directory below the target:
/// not empty, not `.` or `..`, no separators.
pub fn is_valid_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!((components.next(), components.next()), (Some(Component::Normal(_)), None))
}

/// Derives the target name for each path from its last component, keeping order.
pub fn derive_names(paths: &[impl AsRef<Path>], token: &str) -> Vec<String> {
    paths.iter().map(|path| {
        let dir_name = path.as_ref().file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        derive_name(&dir_name, token)
    }).collect()
}

/// Pairs every discovered path with its derived name.
pub fn game_dirs(paths: Vec<impl AsRef<Path>>, token: &str) -> Vec<GameDir> {
    let names = derive_names(&paths, token);
    paths.into_iter().zip(names).map(|(path, name)| {
        GameDir::new(path.as_ref().to_path_buf(), name)
    }).collect()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn strips_the_token() {
        assert_eq!(derive_name("hello_world_game", "_game"), "hello_world");
    }

    #[test]
    fn token_match_is_case_sensitive() {
        assert_eq!(derive_name("TicTacToeGame", "_game"), "TicTacToeGame");
        assert_eq!(derive_name("pong_GAME", "_game"), "pong_GAME");
    }

    #[test]
    fn removes_only_the_first_occurrence() {
        assert_eq!(derive_name("game_gameplay", "_game"), "gameplay");
        assert_eq!(derive_name("a_game_game", "_game"), "a_game");
        assert_eq!(derive_name("my_gameplay_game", "_game"), "myplay_game");
    }

    #[test]
    fn second_pass_only_changes_when_token_reappears() {
        let once = derive_name("snake_game", "_game");
        assert_eq!(derive_name(&once, "_game"), once);

        let once = derive_name("a_game_game", "_game");
        assert_ne!(derive_name(&once, "_game"), once);
    }

    #[test]
    fn only_single_normal_components_are_valid() {
        assert!(is_valid_name("hello_world"));
        assert!(is_valid_name(".hidden"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name(&derive_name("._game", "_game")));
        assert!(!is_valid_name(&derive_name(".._game", "_game")));
        assert!(!is_valid_name("a/b"));
        assert!(!is_valid_name("/"));
    }

    #[test]
    fn uses_only_the_last_component() {
        let paths = vec![PathBuf::from("/data/some_game/hello_world_game"), PathBuf::from("/data/TicTacToeGame")];
        assert_eq!(derive_names(&paths, "_game"), vec!["hello_world".to_string(), "TicTacToeGame".to_string()]);
    }

    #[test]
    fn pairs_keep_discovery_order() {
        let paths = vec![PathBuf::from("/data/b_game"), PathBuf::from("/data/a_game")];
        let games = game_dirs(paths, "_game");
        assert_eq!(games.len(), 2);
        assert_eq!(games[0], GameDir::new(PathBuf::from("/data/b_game"), String::from("b")));
        assert_eq!(games[1], GameDir::new(PathBuf::from("/data/a_game"), String::from("a")));
    }
}
