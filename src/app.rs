/*
 * Application Module
 *
 * This module defines the main application model and logic for the ocean scene.
 * It handles the initialization and per-frame update of the scene; rendering
 * lives in the renderer module.
 *
 * Each frame:
 * - The controls window runs and may issue animation commands
 * - Keyboard state is polled for boat, reset and camera commands
 * - The animations advance in fixed steps of the animation scale, one per
 *   1 / reference_fps of real time
 */

use nannou::prelude::*;
use nannou::wgpu;
use nannou_egui::Egui;

use crate::animation::AnimationState;
use crate::camera::Camera;
use crate::config::SceneConfig;
use crate::debug::DebugInfo;
use crate::error::SceneError;
use crate::input;
use crate::lighting::LightModel;
use crate::mesh::MeshLibrary;
use crate::params::SceneParams;
use crate::renderer;
use crate::texture;
use crate::timestep::{self, FixedTimestep};
use crate::ui;

// Main model for the application
pub struct Model {
    pub config: SceneConfig,
    pub params: SceneParams,
    pub animation: AnimationState,
    pub timestep: FixedTimestep,
    pub camera: Camera,
    pub meshes: MeshLibrary,
    pub lights: LightModel,
    pub backdrop: wgpu::Texture,
    pub egui: Egui,
    pub debug_info: DebugInfo,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let config = match SceneConfig::load() {
        Ok(config) => config,
        Err(err) => {
            log::error!("{}; using default settings", err);
            SceneConfig::default()
        }
    };

    let egui = match create_window(app, &config) {
        Ok(egui) => egui,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    };

    let backdrop = texture::load_backdrop_texture(app, &config.texture_path);

    log::info!(
        "Scene ready: {}x{} window, animation scale {}",
        config.window_width,
        config.window_height,
        config.animation_scale
    );

    Model {
        params: SceneParams::from_config(&config),
        animation: AnimationState::new(),
        timestep: FixedTimestep::new(config.reference_fps),
        camera: Camera::new(config.axis_view_distance),
        meshes: MeshLibrary::new(),
        lights: LightModel::night_ocean(),
        backdrop,
        egui,
        debug_info: DebugInfo::default(),
        config,
    }
}

// Create the main window and the UI attached to it
fn create_window(app: &App, config: &SceneConfig) -> Result<Egui, SceneError> {
    let window_id = app
        .new_window()
        .title(&config.window_title)
        .size(config.window_width, config.window_height)
        .view(renderer::view)
        .raw_event(input::raw_window_event)
        .build()
        .map_err(|err| SceneError::Window(format!("{:?}", err)))?;

    let window = app
        .window(window_id)
        .ok_or_else(|| SceneError::Window("window closed during startup".to_string()))?;

    Ok(Egui::from_window(&window))
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    // Update debug info
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    // Update UI and apply anything it asked for
    let (ui_command, ui_changed) =
        ui::update_ui(&mut model.egui, &mut model.params, &model.animation, &model.debug_info);

    if ui_changed {
        log::debug!(
            "Scene parameters changed: scale {}, paused {}, debug {}",
            model.params.animation_scale,
            model.params.pause_animation,
            model.params.show_debug
        );
    }

    if let Some(command) = ui_command {
        model.animation.apply(command);
    }

    input::check_scene_input(app, model);

    model.debug_info.animation_steps = timestep::advance_animation(
        &mut model.animation,
        &mut model.timestep,
        &model.params,
        update.since_last,
    );
}
