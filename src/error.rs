//! Error types and handling for `snowcast`

use thiserror::Error;

/// Main error type for the `snowcast` application
#[derive(Error, Debug)]
pub enum SnowcastError {
    /// Configuration-related errors (CLI input, missing env vars)
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Hike page scrape errors
    #[error("Scrape error: {message}")]
    Scrape { message: String },

    /// Weather API errors
    #[error("Forecast error: {message}")]
    Forecast { message: String },

    /// Directions API errors
    #[error("Route error: {message}")]
    Route { message: String },

    /// Hike cache read/write errors
    #[error("Cache error: {message}")]
    Cache { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl SnowcastError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new scrape error
    pub fn scrape<S: Into<String>>(message: S) -> Self {
        Self::Scrape {
            message: message.into(),
        }
    }

    /// Create a new forecast error
    pub fn forecast<S: Into<String>>(message: S) -> Self {
        Self::Forecast {
            message: message.into(),
        }
    }

    /// Create a new route error
    pub fn route<S: Into<String>>(message: S) -> Self {
        Self::Route {
            message: message.into(),
        }
    }

    /// Create a new cache error
    pub fn cache<S: Into<String>>(message: S) -> Self {
        Self::Cache {
            message: message.into(),
        }
    }
}

impl From<csv::Error> for SnowcastError {
    fn from(err: csv::Error) -> Self {
        Self::cache(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = SnowcastError::config("missing API key");
        assert!(matches!(config_err, SnowcastError::Config { .. }));

        let forecast_err = SnowcastError::forecast("connection failed");
        assert!(matches!(forecast_err, SnowcastError::Forecast { .. }));

        let route_err = SnowcastError::route("no routes in response");
        assert!(matches!(route_err, SnowcastError::Route { .. }));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SnowcastError = io_err.into();
        assert!(matches!(err, SnowcastError::Io { .. }));
    }

    #[test]
    fn test_csv_error_conversion() {
        let io_err = std::io::Error::other("short write");
        let err: SnowcastError = csv::Error::from(io_err).into();
        assert!(matches!(err, SnowcastError::Cache { .. }));
    }
}
