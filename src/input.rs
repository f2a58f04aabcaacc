/*
 * Input Module
 *
 * This module turns the keys held down this frame into scene commands.
 * Keys are polled once per frame rather than handled as events, so holding a
 * key keeps its command active.
 *
 * Controls:
 * - L: the boat sails left (east)
 * - R: the boat sails right (west)
 * - Space: reset the animations
 * - Hold X, Y or Z: view the scene along that axis
 * - Up / Down (while viewing an axis): move the viewpoint away / closer
 * - Escape: quit (handled by nannou)
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::camera::Axis;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationCommand {
    MoveBoatLeft,
    MoveBoatRight,
    ResetAnimations,
}

// Commands derived from the keyboard for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    pub animation: Option<AnimationCommand>,
    pub view_axis: Option<Axis>,
    // -1 moves the axis viewpoint closer, +1 farther, 0 leaves it.
    pub zoom: f32,
}

impl FrameInput {
    // Build this frame's input from a key-held predicate
    pub fn poll(is_down: impl Fn(Key) -> bool) -> Self {
        // Only one animation command per frame, L beats R beats Space
        let animation = if is_down(Key::L) {
            Some(AnimationCommand::MoveBoatLeft)
        } else if is_down(Key::R) {
            Some(AnimationCommand::MoveBoatRight)
        } else if is_down(Key::Space) {
            Some(AnimationCommand::ResetAnimations)
        } else {
            None
        };

        let view_axis = if is_down(Key::X) {
            Some(Axis::X)
        } else if is_down(Key::Y) {
            Some(Axis::Y)
        } else if is_down(Key::Z) {
            Some(Axis::Z)
        } else {
            None
        };

        let mut zoom = 0.0;
        if view_axis.is_some() {
            if is_down(Key::Up) {
                zoom += 1.0;
            }
            if is_down(Key::Down) {
                zoom -= 1.0;
            }
        }

        Self {
            animation,
            view_axis,
            zoom,
        }
    }
}

// Poll the keyboard and apply the result to the model
pub fn check_scene_input(app: &App, model: &mut Model) {
    // Leave the keyboard to egui while one of its widgets has focus
    if model.egui.ctx().wants_keyboard_input() {
        return;
    }

    let input = FrameInput::poll(|key| app.keys.down.contains(&key));

    if let Some(command) = input.animation {
        model.animation.apply(command);
    }

    model.camera.set_axis(input.view_axis);
    model.camera.adjust_distance(input.zoom * model.config.axis_zoom_step);
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
