use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;

const APP_DIR: &str = "black_screen";

/// Per-user config directory, e.g. `~/.config/black_screen`. Not created.
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR))
}

/// Load `.env` from the working directory, then from the config directory.
/// Variables already set in the process environment win.
pub fn load_env() {
    dotenv::dotenv().ok();
    if let Some(dir) = get_config_dir() {
        load_env_from(&dir);
    }
}

pub fn load_env_from(dir: &Path) -> bool {
    dotenv::from_path(dir.join(".env")).is_ok()
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn env_file_in_dir_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(".env"),
            "BLACK_SCREEN_UTIL_TEST_VALUE=from-dotenv\n",
        )
        .unwrap();

        assert!(load_env_from(dir.path()));
        assert_eq!(
            std::env::var("BLACK_SCREEN_UTIL_TEST_VALUE").as_deref(),
            Ok("from-dotenv")
        );
    }

    #[test]
    fn missing_env_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!load_env_from(dir.path()));
    }

    #[test]
    fn config_dir_is_app_scoped() {
        if let Some(dir) = get_config_dir() {
            assert!(dir.ends_with(APP_DIR));
        }
    }
}
