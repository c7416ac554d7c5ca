use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid episode date: {year}.{month}.{day}")]
    InvalidDate {
        year: String,
        month: String,
        day: String,
    },

    #[error(
        "Multiple .rar files found in '{}' ({count}) and none is a .part01.rar volume",
        .save_path.display()
    )]
    MultipleArchives { save_path: PathBuf, count: usize },

    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_date_message() {
        let err = Error::InvalidDate {
            year: "2020".into(),
            month: "13".into(),
            day: "40".into(),
        };
        assert_eq!(err.to_string(), "Invalid episode date: 2020.13.40");
    }

    #[test]
    fn config_error_converts() {
        let err: Error = config::ConfigError::NotFound("logs.level".into()).into();
        assert!(matches!(err, Error::ConfigError(_)));
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
