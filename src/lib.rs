/*
 * Ocean Scene - Module Definitions
 *
 * This file defines the module structure for the ocean scene application.
 * It organizes the code into logical components for better maintainability.
 */

// Re-export key components for easier access
pub use animation::AnimationState;
pub use app::Model;
pub use camera::Camera;
pub use config::SceneConfig;
pub use debug::DebugInfo;
pub use error::{ConfigError, SceneError};
pub use params::SceneParams;

// Define modules
pub mod animation;
pub mod app;
pub mod camera;
pub mod config;
pub mod debug;
pub mod error;
pub mod geometry;
pub mod input;
pub mod lighting;
pub mod mesh;
pub mod params;
pub mod renderer;
pub mod scene;
pub mod texture;
pub mod timestep;
pub mod transform;
pub mod ui;
