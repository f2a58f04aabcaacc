/*
 * Camera Module
 *
 * This module defines the Camera that looks at the ocean scene. By default
 * it sits at the origin looking down -Z with a 45 degree perspective. While
 * one of the axis keys is held it instead views the scene from a point on
 * that axis, at a distance the user can change. It also provides the
 * transformation from world space to window coordinates.
 */

use nannou::prelude::*;

const FIELD_OF_VIEW_DEGREES: f32 = 45.0;
pub const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 100.0;
const MIN_AXIS_DISTANCE: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Scene,
    Axis(Axis),
}

// A point projected into the window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub screen: Vec2,
    // Distance along the view direction, larger is farther away
    pub depth: f32,
}

pub struct Camera {
    pub mode: ViewMode,
    pub axis_distance: f32,
}

impl Camera {
    pub fn new(axis_distance: f32) -> Self {
        Self {
            mode: ViewMode::Scene,
            axis_distance: axis_distance.max(MIN_AXIS_DISTANCE),
        }
    }

    pub fn is_viewing_axis(&self) -> bool {
        matches!(self.mode, ViewMode::Axis(_))
    }

    // Switch between the scene view and an axis view
    pub fn set_axis(&mut self, axis: Option<Axis>) {
        let mode = axis.map_or(ViewMode::Scene, ViewMode::Axis);
        if mode != self.mode {
            log::debug!("Camera view changed to {:?}", mode);
            self.mode = mode;
        }
    }

    // Move the axis viewpoint toward or away from the origin
    pub fn adjust_distance(&mut self, delta: f32) {
        if self.is_viewing_axis() {
            self.axis_distance = (self.axis_distance + delta).max(MIN_AXIS_DISTANCE);
        }
    }

    pub fn eye(&self) -> Vec3 {
        match self.mode {
            ViewMode::Scene => Vec3::ZERO,
            ViewMode::Axis(Axis::X) => vec3(self.axis_distance, 0.0, 0.0),
            ViewMode::Axis(Axis::Y) => vec3(0.0, self.axis_distance, 0.0),
            ViewMode::Axis(Axis::Z) => vec3(0.0, 0.0, self.axis_distance),
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        match self.mode {
            ViewMode::Scene => Mat4::look_at_rh(Vec3::ZERO, -Vec3::Z, Vec3::Y),
            // Looking straight down Y needs a different up vector
            ViewMode::Axis(Axis::Y) => Mat4::look_at_rh(self.eye(), Vec3::ZERO, -Vec3::Z),
            ViewMode::Axis(_) => Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Y),
        }
    }

    pub fn projection(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh_gl(
            FIELD_OF_VIEW_DEGREES.to_radians(),
            aspect_ratio,
            NEAR_PLANE,
            FAR_PLANE,
        )
    }

    pub fn view_projection(&self, window_rect: Rect) -> Mat4 {
        let aspect_ratio = if window_rect.h() > 0.0 {
            window_rect.w() / window_rect.h()
        } else {
            1.0
        };
        self.projection(aspect_ratio) * self.view_matrix()
    }

    // Direction from a world-space point toward the viewer
    pub fn view_direction(&self, point: Vec3) -> Vec3 {
        self.eye() - point
    }

    pub fn clip_position(&self, view_projection: Mat4, point: Vec3) -> Vec4 {
        view_projection * point.extend(1.0)
    }

    // Perspective divide and viewport mapping for a clip-space position with
    // w at or beyond the near plane. Window origin is the centre, +Y up.
    pub fn to_window(&self, clip: Vec4, window_rect: Rect) -> Projected {
        let ndc = clip.truncate() / clip.w;
        let half_size = window_rect.wh() / 2.0;
        Projected {
            screen: vec2(ndc.x * half_size.x, ndc.y * half_size.y) + window_rect.xy(),
            depth: clip.w,
        }
    }

    // Project a world-space point into the window, or None when it is behind
    // the near plane
    pub fn project(&self, view_projection: Mat4, point: Vec3, window_rect: Rect) -> Option<Projected> {
        let clip = self.clip_position(view_projection, point);
        if clip.w < NEAR_PLANE {
            return None;
        }
        Some(self.to_window(clip, window_rect))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(20.0)
    }
}
