/*
 * Scene Parameters Module
 *
 * This module defines the SceneParams struct holding the settings that can
 * be changed while the scene runs through the UI. It also provides snapshot
 * based change detection so the app can log what the user changed.
 */

use crate::config::SceneConfig;

// Parameters for the scene that can be adjusted via UI
pub struct SceneParams {
    pub animation_scale: f32,
    pub pause_animation: bool,
    pub show_debug: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
#[derive(Debug, Clone, Copy, PartialEq)]
struct ParamSnapshot {
    animation_scale: f32,
    pause_animation: bool,
    show_debug: bool,
}

impl SceneParams {
    pub fn from_config(config: &SceneConfig) -> Self {
        Self {
            animation_scale: config.animation_scale,
            ..Self::default()
        }
    }

    fn snapshot(&self) -> ParamSnapshot {
        ParamSnapshot {
            animation_scale: self.animation_scale,
            pause_animation: self.pause_animation,
            show_debug: self.show_debug,
        }
    }

    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(self.snapshot());
    }

    // Check if any parameters have changed since the last snapshot
    pub fn detect_changes(&self) -> bool {
        match &self.previous_values {
            Some(prev) => *prev != self.snapshot(),
            None => false,
        }
    }

    pub fn get_animation_scale_range() -> std::ops::RangeInclusive<f32> {
        0.0..=0.1
    }
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            animation_scale: 0.01,
            pause_animation: false,
            show_debug: false,
            previous_values: None,
        }
    }
}
