/*
 * Timestep Module
 *
 * Fixed timestep for the animations. Real frame time is added to an
 * accumulator which is drained in whole steps of 1 / reference_fps, so every
 * animation update advances by exactly the animation scale whatever the
 * display's frame rate. Catch-up after a stall (startup, window drag) is
 * capped per frame and the rest of the backlog is dropped.
 */

use std::time::Duration;

use crate::animation::AnimationState;
use crate::params::SceneParams;

pub const MAX_STEPS_PER_FRAME: u32 = 5;

pub struct FixedTimestep {
    accumulator: Duration,
    step_size: Duration,
}

impl FixedTimestep {
    // `steps_per_second` must be positive and finite
    pub fn new(steps_per_second: f32) -> Self {
        Self {
            accumulator: Duration::ZERO,
            step_size: Duration::from_secs_f32(1.0 / steps_per_second),
        }
    }

    pub fn step_size(&self) -> Duration {
        self.step_size
    }

    pub fn pending(&self) -> Duration {
        self.accumulator
    }

    // Add a frame's time and return how many whole steps to run
    pub fn advance(&mut self, frame_time: Duration) -> u32 {
        self.accumulator += frame_time;

        let mut steps = 0;
        while self.accumulator >= self.step_size && steps < MAX_STEPS_PER_FRAME {
            self.accumulator -= self.step_size;
            steps += 1;
        }

        if self.accumulator >= self.step_size {
            log::debug!("Dropping {:?} of animation backlog", self.accumulator);
            self.accumulator = Duration::ZERO;
        }

        steps
    }

    pub fn clear(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}

// Run this frame's fixed animation steps and return how many ran
pub fn advance_animation(
    animation: &mut AnimationState,
    timestep: &mut FixedTimestep,
    params: &SceneParams,
    frame_time: Duration,
) -> u32 {
    // Time spent paused is not caught up afterwards
    if params.pause_animation {
        timestep.clear();
        return 0;
    }

    let steps = timestep.advance(frame_time);
    for _ in 0..steps {
        animation.update(params.animation_scale);
    }
    steps
}
