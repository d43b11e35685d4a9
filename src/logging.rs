use std::fs::{self, File};
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

use crate::config::data_dir;
use crate::error::AppError;

const LOG_FILE_NAME: &str = "grid-snake.log";

/// Default log location under the platform's local data directory.
#[must_use]
pub fn default_log_path() -> PathBuf {
    data_dir().join(LOG_FILE_NAME)
}

/// Installs a file logger; the terminal itself is owned by the game screen.
pub fn init(path: &Path, level: LevelFilter) -> Result<(), AppError> {
    let open = |path: &Path| -> std::io::Result<File> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        File::create(path)
    };
    let file = open(path).map_err(|source| AppError::LogFile {
        path: path.display().to_string(),
        source,
    })?;

    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    WriteLogger::init(level, config, file)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::config::data_dir;

    use super::default_log_path;

    #[test]
    fn log_file_lives_in_the_data_dir() {
        assert_eq!(default_log_path(), data_dir().join("grid-snake.log"));
    }
}
