/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui. It mirrors the keyboard controls with buttons, exposes
 * the animation speed, and shows the current animation values.
 */

use nannou_egui::{egui, Egui};

use crate::animation::{AnimationState, BoatHeading};
use crate::debug::DebugInfo;
use crate::input::AnimationCommand;
use crate::params::SceneParams;

// Update the UI and return any animation command it issued and whether parameters changed
pub fn update_ui(
    egui: &mut Egui,
    params: &mut SceneParams,
    animation: &AnimationState,
    debug_info: &DebugInfo,
) -> (Option<AnimationCommand>, bool) {
    let mut command = None;

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Scene Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Boat", |ui| {
                ui.horizontal(|ui| {
                    if ui.button("Sail Left (L)").clicked() {
                        command = Some(AnimationCommand::MoveBoatLeft);
                    }
                    if ui.button("Sail Right (R)").clicked() {
                        command = Some(AnimationCommand::MoveBoatRight);
                    }
                });
                let heading = match animation.heading {
                    BoatHeading::West => "right",
                    BoatHeading::East => "left",
                };
                ui.label(format!("Heading: {}", heading));
                ui.label(format!("Position: ({:.2}, {:.2})", animation.boat_x, animation.boat_y));
            });

            ui.collapsing("Fish", |ui| {
                ui.label(format!("Position: ({:.2}, {:.2})", animation.fish_x, animation.fish_y));
                ui.label(format!("Tail tilt: {:.1} deg", animation.fish_tilt));
            });

            ui.collapsing("Animation", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.animation_scale, SceneParams::get_animation_scale_range())
                        .text("Animation Scale"),
                );
                if ui.button("Reset Animations (Space)").clicked() {
                    command = Some(AnimationCommand::ResetAnimations);
                }
                ui.label(format!("Time: {:.2}", animation.time));
            });

            ui.collapsing("Camera Controls", |ui| {
                ui.label("Hold X, Y or Z to view along that axis");
                ui.label("Up / Down while holding an axis key: move away / closer");
            });

            ui.separator();
            ui.label(format!("FPS: {:.1}", debug_info.fps));
            ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0));

            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_animation, "Pause Animation");
        });

    (command, params.detect_changes())
}

// Draw debug information on the screen
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
    draw_items: usize,
    triangles: usize,
) {
    // Background panel in the top-right corner, clear of the controls window
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 200.0;
    let panel_height = line_height * 5.0 + margin;
    let panel_x = window_rect.right() - panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = panel_x;
    let text_y = window_rect.top() - margin;

    let debug_texts = [
        format!("FPS: {:.1}", debug_info.fps),
        format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0),
        format!("Animation steps: {}", debug_info.animation_steps),
        format!("Draw items: {}", draw_items),
        format!("Triangles: {}", triangles),
    ];

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        draw.text(text)
            .x_y(text_x, y)
            .w(panel_width - margin)
            .left_justify()
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
