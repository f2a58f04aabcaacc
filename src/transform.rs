/*
 * Transform Module
 *
 * A model-view matrix stack in the fixed-function style. Each transform
 * post-multiplies the current matrix, so the transform issued last is the
 * first one applied to a vertex. Scoped sections save the current matrix and
 * restore it when they end, which is how child parts of the scene (the fish
 * tail and eyes) inherit their parent's placement.
 */

use nannou::prelude::*;

pub struct MatrixStack {
    current: Mat4,
    saved: Vec<Mat4>,
}

impl MatrixStack {
    pub fn new() -> Self {
        Self::with_root(Mat4::IDENTITY)
    }

    pub fn with_root(root: Mat4) -> Self {
        Self {
            current: root,
            saved: Vec::new(),
        }
    }

    pub fn current(&self) -> Mat4 {
        self.current
    }

    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn translate(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.current = self.current * Mat4::from_translation(vec3(x, y, z));
        self
    }

    // Rotate by `degrees` around `axis` (right-handed, counter-clockwise).
    pub fn rotate(&mut self, degrees: f32, axis: Vec3) -> &mut Self {
        if axis.length_squared() > 0.0 {
            self.current = self.current * Mat4::from_axis_angle(axis.normalize(), degrees.to_radians());
        }
        self
    }

    pub fn scale(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.current = self.current * Mat4::from_scale(vec3(x, y, z));
        self
    }

    pub fn push(&mut self) {
        self.saved.push(self.current);
    }

    pub fn pop(&mut self) {
        match self.saved.pop() {
            Some(matrix) => self.current = matrix,
            None => log::warn!("Matrix stack underflow, keeping current matrix"),
        }
    }

    // Run `f` between a push and a pop and return its result
    pub fn scoped<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.push();
        let result = f(self);
        self.pop();
        result
    }
}

impl Default for MatrixStack {
    fn default() -> Self {
        Self::new()
    }
}
