/*
 * Animation Module
 *
 * The scene's two animations:
 * - Fish: runs by itself. It swims from its start to its end position,
 *   bobbing up and down and wagging its tail, then jumps back to the start
 *   and loops forever.
 * - Boat: controlled by the user. It bobs in place and sails toward the
 *   east (left) or west (right) end of its course, stopping at the end.
 *
 * All motion is driven by a single time accumulator advanced by the
 * animation scale every frame.
 */

use std::f32::consts::PI;

use crate::input::AnimationCommand;

pub const BOAT_START_X: f32 = -10.0;
pub const BOAT_END_X: f32 = 10.0;
pub const FISH_START_X: f32 = -5.0;
pub const FISH_END_X: f32 = 10.0;

const FISH_SPEED: f32 = 0.25;
const BOAT_SPEED: f32 = 0.5;
const FISH_DEPTH: f32 = -2.0;
const FISH_TILT_AMPLITUDE: f32 = 80.0;

// Direction the boat sails in. West is toward +X (screen right).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoatHeading {
    West,
    East,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    pub boat_x: f32,
    pub boat_y: f32,
    pub heading: BoatHeading,
    pub fish_x: f32,
    pub fish_y: f32,
    // Tail rotation around Y, in degrees.
    pub fish_tilt: f32,
    pub time: f32,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            boat_x: BOAT_START_X,
            boat_y: 0.0,
            heading: BoatHeading::West,
            fish_x: FISH_START_X,
            fish_y: 0.0,
            fish_tilt: 0.0,
            time: 0.0,
        }
    }
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    // Advance both animations by one step of `scale`
    pub fn update(&mut self, scale: f32) {
        self.time += scale;

        self.fish_tilt = self.time.sin() / PI * FISH_TILT_AMPLITUDE;
        self.fish_y = self.time.sin() / 10.0 + FISH_DEPTH;

        // Loop the fish back to the start once it reaches the end
        if self.fish_x >= FISH_END_X {
            self.fish_x = FISH_START_X;
        } else {
            self.fish_x += FISH_SPEED * scale;
        }

        self.boat_y = (self.time / PI).sin() / 10.0;

        match self.heading {
            BoatHeading::West if self.boat_x <= BOAT_END_X => self.boat_x += BOAT_SPEED * scale,
            BoatHeading::East if self.boat_x >= BOAT_START_X => self.boat_x -= BOAT_SPEED * scale,
            _ => {}
        }
    }

    // Move the fish and the boat back to their start positions.
    // The heading, the time accumulator and the bobbing are left as they are.
    pub fn reset(&mut self) {
        self.fish_x = FISH_START_X;
        self.boat_x = BOAT_START_X;
        log::info!("Animations reset");
    }

    pub fn apply(&mut self, command: AnimationCommand) {
        match command {
            AnimationCommand::MoveBoatLeft => self.heading = BoatHeading::East,
            AnimationCommand::MoveBoatRight => self.heading = BoatHeading::West,
            AnimationCommand::ResetAnimations => self.reset(),
        }
    }
}
