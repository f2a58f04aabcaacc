/*
 * Configuration Module
 *
 * Startup settings for the ocean scene: window, animation speed, texture
 * location and axis-view camera tuning. Settings come from an optional TOML
 * file; any field left out of the file keeps its default.
 */

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

// Environment variable naming a config file to load instead of the default.
pub const CONFIG_ENV_VAR: &str = "OCEAN_SCENE_CONFIG";

// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "ocean_scene.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    // Animation time added per fixed step; one step runs per frame at reference_fps
    pub animation_scale: f32,
    pub reference_fps: f32,
    pub texture_path: PathBuf,
    pub axis_view_distance: f32,
    // Distance change per frame while Up or Down is held in an axis view.
    pub axis_zoom_step: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            window_title: "Ocean Scene".to_string(),
            window_width: 800,
            window_height: 600,
            animation_scale: 0.01,
            reference_fps: 60.0,
            texture_path: PathBuf::from("textures/ocean.bmp"),
            axis_view_distance: 20.0,
            axis_zoom_step: 0.1,
        }
    }
}

impl SceneConfig {
    // Parse a config from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: SceneConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    // Load a config file, failing if it is missing or malformed
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    // Resolve the config for this run: explicit file, then default file, then defaults
    pub fn load() -> Result<Self, ConfigError> {
        let explicit = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        Self::load_with(explicit, Path::new("."))
    }

    // Resolve a config from an explicit file (relative paths are taken from
    // `dir`), else DEFAULT_CONFIG_FILE inside `dir`, else defaults
    pub fn load_with(explicit: Option<PathBuf>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            let path = dir.join(path);
            log::info!("Loading scene config from {} ({})", path.display(), CONFIG_ENV_VAR);
            return Self::load_from_file(path);
        }

        let default_file = dir.join(DEFAULT_CONFIG_FILE);
        if default_file.exists() {
            log::info!("Loading scene config from {}", default_file.display());
            return Self::load_from_file(default_file);
        }

        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be positive, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        require_positive("animation_scale", self.animation_scale)?;
        require_positive("reference_fps", self.reference_fps)?;
        require_positive("axis_view_distance", self.axis_view_distance)?;
        require_positive("axis_zoom_step", self.axis_zoom_step)?;
        Ok(())
    }
}

// NaN fails the comparison, infinities fail the finiteness check
fn require_positive(name: &str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "{} must be a positive finite number, got {}",
            name, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_800_by_600_window() {
        let config = SceneConfig::default();
        assert_eq!(config.window_title, "Ocean Scene");
        assert_eq!((config.window_width, config.window_height), (800, 600));
        assert_eq!(config.animation_scale, 0.01);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config = SceneConfig::from_toml_str("animation_scale = 0.02\nwindow_width = 1024\n").unwrap();
        assert_eq!(config.animation_scale, 0.02);
        assert_eq!(config.window_width, 1024);
        assert_eq!(config.window_height, 600);
        assert_eq!(config.texture_path, PathBuf::from("textures/ocean.bmp"));
    }

    #[test]
    fn rejects_non_positive_scale() {
        let err = SceneConfig::from_toml_str("animation_scale = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = SceneConfig::from_toml_str("window_width = \"wide\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = SceneConfig::load_from_file("does/not/exist.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn rejects_nan_scale() {
        let err = SceneConfig::from_toml_str("animation_scale = nan").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_non_finite_and_negative_values() {
        for contents in [
            "reference_fps = nan",
            "reference_fps = inf",
            "axis_view_distance = nan",
            "axis_zoom_step = -0.1",
            "axis_zoom_step = 0.0",
        ] {
            let err = SceneConfig::from_toml_str(contents).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{} was accepted", contents);
        }
    }

    fn write_config(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn load_without_files_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SceneConfig::load_with(None, dir.path()).unwrap();
        assert_eq!(config, SceneConfig::default());
    }

    #[test]
    fn load_picks_up_default_file() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), DEFAULT_CONFIG_FILE, "window_title = \"From default file\"\n");
        let config = SceneConfig::load_with(None, dir.path()).unwrap();
        assert_eq!(config.window_title, "From default file");
    }

    #[test]
    fn explicit_file_wins_over_default_file() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), DEFAULT_CONFIG_FILE, "window_width = 640\n");
        write_config(dir.path(), "night.toml", "window_width = 1280\n");

        let relative = SceneConfig::load_with(Some(PathBuf::from("night.toml")), dir.path()).unwrap();
        assert_eq!(relative.window_width, 1280);

        let absolute = dir.path().join("night.toml");
        let config = SceneConfig::load_with(Some(absolute), Path::new("unused")).unwrap();
        assert_eq!(config.window_width, 1280);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), DEFAULT_CONFIG_FILE, "window_width = 640\n");
        let err = SceneConfig::load_with(Some(PathBuf::from("absent.toml")), dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn invalid_default_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), DEFAULT_CONFIG_FILE, "animation_scale = -1.0\n");
        let err = SceneConfig::load_with(None, dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
