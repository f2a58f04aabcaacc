/*
 * Error Module
 *
 * Error types for the ocean scene. Configuration, window and asset failures
 * are propagated to the application boundary and logged there, where the
 * scene falls back to defaults or exits.
 */

use std::path::PathBuf;

// Errors raised while loading or validating the scene configuration
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

// Errors raised while setting up the window and its assets
#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    #[error("Failed to load texture {path:?}: {source}")]
    Texture {
        path: PathBuf,
        #[source]
        source: nannou::image::ImageError,
    },

    #[error("Window error: {0}")]
    Window(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_convert_and_describe_cause() {
        let io: ConfigError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(io, ConfigError::Io(_)));
        assert_eq!(io.to_string(), "IO error: gone");

        let invalid = ConfigError::Invalid("animation_scale must be a positive finite number, got NaN".into());
        assert!(invalid.to_string().starts_with("Invalid configuration: animation_scale"));
    }

    #[test]
    fn window_error_reports_reason() {
        let err = SceneError::Window("no adapter".to_string());
        assert_eq!(err.to_string(), "Window error: no adapter");
    }
}
