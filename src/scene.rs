/*
 * Scene Module
 *
 * The scene graph, walked once per frame with a matrix stack:
 *
 *  Scene origin
 *  |
 *  +-- [T(0, 0, -20) Rx(90) S(22, 1, 17)] Backdrop plane
 *  |
 *  +-- [T(boat_x, boat_y, -18) S(2, 1, 0.5) Rx(15)] Boat
 *  |
 *  +-- [T(fish_x, fish_y, -8) S(0.3, 0.3, 1)] Fish body
 *      |
 *      +-- [Ry(fish_tilt) T(-1, 0, 0)] Tail
 *      +-- [T(1.15, 0.25, 0.2)] Left eye
 *      +-- [T(1.15, 0.25, -0.2)] Right eye
 *
 * The result is a flat list of draw items that the renderer consumes.
 */

use nannou::prelude::*;

use crate::animation::AnimationState;
use crate::lighting::Material;
use crate::mesh::MeshId;
use crate::transform::MatrixStack;

// How a mesh's faces are coloured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Surface {
    // Unlit, white, with the backdrop texture applied.
    Textured,
    // Lit with the scene lights using this material.
    Lit(Material),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    pub mesh: MeshId,
    pub transform: Mat4,
    pub surface: Surface,
    // Also trace the mesh's outline, so edge-on faces stay visible.
    pub outline: bool,
}

// Build the draw list for the current animation state
pub fn compose(animation: &AnimationState, viewing_axis: bool) -> Vec<DrawItem> {
    let mut stack = MatrixStack::new();
    let mut items = Vec::with_capacity(5);

    // Backdrop
    stack.scoped(|stack| {
        stack
            .translate(0.0, 0.0, -20.0)
            .rotate(90.0, Vec3::X)
            .scale(22.0, 1.0, 17.0);
        items.push(DrawItem {
            mesh: MeshId::Plane,
            transform: stack.current(),
            surface: Surface::Textured,
            outline: viewing_axis,
        });
    });

    // Boat
    stack.scoped(|stack| {
        stack
            .translate(animation.boat_x, animation.boat_y, -18.0)
            .scale(2.0, 1.0, 0.5)
            .rotate(15.0, Vec3::X);
        items.push(DrawItem {
            mesh: MeshId::Boat,
            transform: stack.current(),
            surface: Surface::Lit(Material::boat()),
            outline: false,
        });
    });

    // Fish
    stack.scoped(|stack| {
        stack
            .translate(animation.fish_x, animation.fish_y, -8.0)
            .scale(0.3, 0.3, 1.0);
        items.push(lit(MeshId::FishBody, stack.current(), Material::fish()));

        stack.scoped(|stack| {
            stack.rotate(animation.fish_tilt, Vec3::Y).translate(-1.0, 0.0, 0.0);
            items.push(lit(MeshId::FishTail, stack.current(), Material::fish()));
        });

        for eye_z in [0.2, -0.2] {
            stack.scoped(|stack| {
                stack.translate(1.15, 0.25, eye_z);
                items.push(lit(MeshId::FishEye, stack.current(), Material::fish_eye()));
            });
        }
    });

    items
}

fn lit(mesh: MeshId, transform: Mat4, material: Material) -> DrawItem {
    DrawItem {
        mesh,
        transform,
        surface: Surface::Lit(material),
        outline: false,
    }
}
