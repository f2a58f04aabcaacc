/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains frame metrics
 * displayed in the UI and the on-screen overlay.
 */

use std::time::Duration;

// Debug information to display
#[derive(Debug, Clone, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub animation_steps: u32,
}
