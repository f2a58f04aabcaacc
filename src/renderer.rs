/*
 * Renderer Module
 *
 * This module turns the frame's draw list into window-space triangles and
 * draws them with nannou.
 *
 * For every draw item the mesh faces are transformed to world space, lit
 * faces are shaded per vertex with the scene lights (normals are
 * re-normalised after transformation), and every face is clipped against
 * the camera's near plane before it is projected. Triangles and outline
 * segments are then drawn back to front so nearer geometry covers farther
 * geometry.
 */

use nannou::prelude::*;
use nannou::wgpu;
use std::cmp::Ordering;

use crate::app::Model;
use crate::camera::{Camera, NEAR_PLANE};
use crate::geometry::fan_triangles;
use crate::lighting::LightModel;
use crate::mesh::MeshLibrary;
use crate::scene::{self, DrawItem, Surface};
use crate::ui;

const OUTLINE_WEIGHT: f32 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill {
    // One RGBA colour per vertex
    Colored([Vec4; 3]),
    // One texture coordinate per vertex, (0, 0) at the image's top left
    Textured([Vec2; 3]),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenTriangle {
    pub points: [Vec2; 3],
    pub depth: f32,
    pub fill: Fill,
}

// One edge of an outlined polygon
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineSegment {
    pub points: [Vec2; 2],
    pub depth: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameGeometry {
    // Sorted farthest first
    pub triangles: Vec<ScreenTriangle>,
    pub outlines: Vec<OutlineSegment>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive<'a> {
    Triangle(&'a ScreenTriangle),
    Outline(&'a OutlineSegment),
}

impl Primitive<'_> {
    pub fn depth(&self) -> f32 {
        match self {
            Primitive::Triangle(triangle) => triangle.depth,
            Primitive::Outline(segment) => segment.depth,
        }
    }
}

impl FrameGeometry {
    // Triangles and outline segments merged farthest first. At equal depth
    // triangles come first so an outline is never covered by its own fill.
    pub fn painter_order(&self) -> Vec<Primitive<'_>> {
        let mut order: Vec<Primitive<'_>> = self
            .triangles
            .iter()
            .map(Primitive::Triangle)
            .chain(self.outlines.iter().map(Primitive::Outline))
            .collect();
        order.sort_by(|a, b| b.depth().partial_cmp(&a.depth()).unwrap_or(Ordering::Equal));
        order
    }
}

// A polygon corner in clip space with the attributes interpolated across it
#[derive(Debug, Clone, Copy, PartialEq)]
struct ClipVertex {
    clip: Vec4,
    color: Vec4,
    uv: Vec2,
}

impl ClipVertex {
    fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            clip: self.clip.lerp(other.clip, t),
            color: self.color.lerp(other.color, t),
            uv: self.uv.lerp(other.uv, t),
        }
    }
}

fn in_front(clip: Vec4) -> bool {
    clip.w >= NEAR_PLANE
}

// Parameter along a -> b where w crosses the near plane
fn near_crossing(a: Vec4, b: Vec4) -> f32 {
    (NEAR_PLANE - a.w) / (b.w - a.w)
}

// Sutherland-Hodgman against the near plane. A convex polygon stays convex.
fn clip_polygon(polygon: &[ClipVertex]) -> Vec<ClipVertex> {
    let mut clipped = Vec::with_capacity(polygon.len() + 1);

    for (i, current) in polygon.iter().enumerate() {
        let next = polygon[(i + 1) % polygon.len()];
        let current_in = in_front(current.clip);

        if current_in {
            clipped.push(*current);
        }
        if current_in != in_front(next.clip) {
            clipped.push(current.lerp(next, near_crossing(current.clip, next.clip)));
        }
    }

    clipped
}

// Clip one edge against the near plane
fn clip_segment(a: Vec4, b: Vec4) -> Option<(Vec4, Vec4)> {
    match (in_front(a), in_front(b)) {
        (true, true) => Some((a, b)),
        (true, false) => Some((a, a.lerp(b, near_crossing(a, b)))),
        (false, true) => Some((a.lerp(b, near_crossing(a, b)), b)),
        (false, false) => None,
    }
}

// Transform, light, clip and project the draw list
pub fn build_frame(
    items: &[DrawItem],
    meshes: &MeshLibrary,
    lights: &LightModel,
    camera: &Camera,
    window_rect: Rect,
) -> FrameGeometry {
    let view_projection = camera.view_projection(window_rect);
    let mut geometry = FrameGeometry::default();

    for item in items {
        let normal_matrix = item.transform.inverse().transpose();
        let first_outline = geometry.outlines.len();
        let mut nearest_triangle = f32::INFINITY;

        for face in &meshes.get(item.mesh).faces {
            let world: Vec<Vec3> = face
                .vertices
                .iter()
                .map(|v| item.transform.transform_point3(*v))
                .collect();
            let clip: Vec<Vec4> = world
                .iter()
                .map(|p| camera.clip_position(view_projection, *p))
                .collect();

            if item.outline {
                for (i, a) in clip.iter().enumerate() {
                    let b = clip[(i + 1) % clip.len()];
                    if let Some((a, b)) = clip_segment(*a, b) {
                        let a = camera.to_window(a, window_rect);
                        let b = camera.to_window(b, window_rect);
                        geometry.outlines.push(OutlineSegment {
                            points: [a.screen, b.screen],
                            depth: (a.depth + b.depth) / 2.0,
                        });
                    }
                }
            }

            let colors: Vec<Vec4> = match item.surface {
                Surface::Lit(material) => {
                    let normal = normal_matrix.transform_vector3(face.normal);
                    world
                        .iter()
                        .map(|p| lights.shade(*p, normal, camera.view_direction(*p), &material))
                        .collect()
                }
                Surface::Textured => vec![Vec4::ONE; world.len()],
            };
            let uvs: Vec<Vec2> = match &face.tex_coords {
                Some(tex) => tex.iter().map(|st| texture_uv(*st)).collect(),
                None => vec![Vec2::ZERO; world.len()],
            };

            let polygon: Vec<ClipVertex> = clip
                .iter()
                .zip(colors.iter())
                .zip(uvs.iter())
                .map(|((clip, color), uv)| ClipVertex {
                    clip: *clip,
                    color: *color,
                    uv: *uv,
                })
                .collect();

            let clipped = clip_polygon(&polygon);
            let projected: Vec<_> = clipped
                .iter()
                .map(|v| camera.to_window(v.clip, window_rect))
                .collect();
            let textured = matches!(item.surface, Surface::Textured) && face.tex_coords.is_some();

            for [a, b, c] in fan_triangles(clipped.len()) {
                let fill = if textured {
                    Fill::Textured([clipped[a].uv, clipped[b].uv, clipped[c].uv])
                } else {
                    Fill::Colored([clipped[a].color, clipped[b].color, clipped[c].color])
                };
                let depth = (projected[a].depth + projected[b].depth + projected[c].depth) / 3.0;
                nearest_triangle = nearest_triangle.min(depth);

                geometry.triangles.push(ScreenTriangle {
                    points: [projected[a].screen, projected[b].screen, projected[c].screen],
                    depth,
                    fill,
                });
            }
        }

        // An item's outline is drawn after all of its own triangles
        for segment in &mut geometry.outlines[first_outline..] {
            segment.depth = segment.depth.min(nearest_triangle);
        }
    }

    geometry
        .triangles
        .sort_by(|a, b| b.depth.partial_cmp(&a.depth).unwrap_or(Ordering::Equal));

    geometry
}

// Mesh texture coordinates have t = 0 at the bottom edge; images start at the top
fn texture_uv(st: Vec2) -> Vec2 {
    vec2(st.x, 1.0 - st.y)
}

// Draw prepared geometry back to front
pub fn draw_frame(draw: &Draw, geometry: &FrameGeometry, texture: &wgpu::Texture) {
    for primitive in geometry.painter_order() {
        match primitive {
            Primitive::Triangle(triangle) => match triangle.fill {
                Fill::Colored(colors) => {
                    let points = triangle
                        .points
                        .iter()
                        .zip(colors.iter())
                        .map(|(p, c)| (p.extend(0.0), srgba(c.x, c.y, c.z, c.w)));
                    draw.mesh().points_colored(points);
                }
                Fill::Textured(uvs) => {
                    let points = triangle
                        .points
                        .iter()
                        .zip(uvs.iter())
                        .map(|(p, uv)| (p.extend(0.0), *uv));
                    draw.mesh().points_textured(texture, points);
                }
            },
            Primitive::Outline(segment) => {
                draw.line()
                    .start(segment.points[0])
                    .end(segment.points[1])
                    .weight(OUTLINE_WEIGHT)
                    .color(WHITE);
            }
        }
    }
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    let window_rect = app.window_rect();
    let items = scene::compose(&model.animation, model.camera.is_viewing_axis());
    let geometry = build_frame(&items, &model.meshes, &model.lights, &model.camera, window_rect);

    draw_frame(&draw, &geometry, &model.backdrop);

    if model.params.show_debug {
        ui::draw_debug_info(
            &draw,
            &model.debug_info,
            window_rect,
            items.len(),
            geometry.triangles.len(),
        );
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        log::error!("Failed to render scene: {}", err);
    }

    if let Err(err) = model.egui.draw_to_frame(&frame) {
        log::error!("Failed to render controls: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::AnimationState;
    use crate::camera::Axis;
    use crate::mesh::MeshId;

    fn window() -> Rect {
        Rect::from_w_h(800.0, 600.0)
    }

    fn frame_for(state: &AnimationState, camera: &Camera) -> FrameGeometry {
        let items = scene::compose(state, camera.is_viewing_axis());
        build_frame(
            &items,
            &MeshLibrary::new(),
            &LightModel::night_ocean(),
            camera,
            window(),
        )
    }

    fn axis_camera(axis: Axis, distance: f32) -> Camera {
        let mut camera = Camera::new(distance);
        camera.set_axis(Some(axis));
        camera
    }

    fn textured_count(geometry: &FrameGeometry) -> usize {
        geometry
            .triangles
            .iter()
            .filter(|t| matches!(t.fill, Fill::Textured(_)))
            .count()
    }

    #[test]
    fn backdrop_is_drawn_first() {
        let geometry = frame_for(&AnimationState::new(), &Camera::default());
        assert!(matches!(geometry.triangles[0].fill, Fill::Textured(_)));
        assert!(matches!(geometry.triangles[1].fill, Fill::Textured(_)));
        assert!(geometry.outlines.is_empty());
    }

    #[test]
    fn triangles_sorted_far_to_near() {
        let geometry = frame_for(&AnimationState::new(), &Camera::default());
        assert!(geometry
            .triangles
            .windows(2)
            .all(|pair| pair[0].depth >= pair[1].depth));
        // Fish (z = -8) is the nearest geometry
        let last = geometry.triangles.last().unwrap();
        assert!(last.depth < 9.0);
    }

    #[test]
    fn every_triangle_is_visible_from_default_view() {
        let geometry = frame_for(&AnimationState::new(), &Camera::default());
        let library = MeshLibrary::new();
        let expected: usize = [
            MeshId::Plane,
            MeshId::Boat,
            MeshId::FishBody,
            MeshId::FishTail,
            MeshId::FishEye,
            MeshId::FishEye,
        ]
        .iter()
        .map(|id| library.get(*id).triangle_count())
        .sum();
        assert_eq!(geometry.triangles.len(), expected);
    }

    #[test]
    fn backdrop_texture_is_upright() {
        let geometry = frame_for(&AnimationState::new(), &Camera::default());
        for triangle in geometry.triangles.iter().take(2) {
            if let Fill::Textured(uvs) = triangle.fill {
                for (point, uv) in triangle.points.iter().zip(uvs.iter()) {
                    // Top of the window samples the top of the image
                    assert_eq!(point.y > 0.0, uv.y < 0.5);
                    assert_eq!(point.x > 0.0, uv.x > 0.5);
                }
            }
        }
    }

    #[test]
    fn lit_colours_are_in_range() {
        let geometry = frame_for(&AnimationState::new(), &Camera::default());
        for triangle in &geometry.triangles {
            if let Fill::Colored(colors) = triangle.fill {
                for c in colors.iter() {
                    assert!(c.x >= 0.0 && c.x <= 1.0);
                    assert!(c.w == 1.0);
                }
            }
        }
    }

    #[test]
    fn axis_view_outlines_backdrop() {
        let geometry = frame_for(&AnimationState::new(), &axis_camera(Axis::Y, 30.0));
        assert_eq!(geometry.outlines.len(), 4);
        assert_eq!(textured_count(&geometry), 2);
    }

    #[test]
    fn close_axis_view_clips_backdrop_at_near_plane() {
        // From (5, 0, 0) the backdrop's x = 11 edge is behind the viewer
        let geometry = frame_for(&AnimationState::new(), &axis_camera(Axis::X, 5.0));

        // The quad loses one corner pair and gains two on the near plane
        assert_eq!(textured_count(&geometry), 2);
        // The edge at x = 11 is dropped, the two edges crossing the plane are cut
        assert_eq!(geometry.outlines.len(), 3);

        for primitive in geometry.painter_order() {
            assert!(primitive.depth() >= NEAR_PLANE - 1e-4);
        }
    }

    #[test]
    fn clipping_interpolates_attributes() {
        let vertex = |w: f32, red: f32, u: f32| ClipVertex {
            clip: vec4(0.0, 0.0, 0.0, w),
            color: vec4(red, 0.0, 0.0, 1.0),
            uv: vec2(u, 0.0),
        };
        let triangle = [vertex(-1.9, 0.0, 0.0), vertex(2.1, 1.0, 1.0), vertex(2.1, 1.0, 0.0)];
        let clipped = clip_polygon(&triangle);

        assert_eq!(clipped.len(), 4);
        for v in &clipped {
            assert!(v.clip.w >= NEAR_PLANE - 1e-6);
        }
        // Halfway from w = -1.9 to w = 2.1 lies on the near plane
        let crossing = clipped[3];
        assert!((crossing.clip.w - NEAR_PLANE).abs() < 1e-6);
        assert!((crossing.color.x - 0.5).abs() < 1e-6);
        assert!((crossing.uv.x - 0.0).abs() < 1e-6);
        assert!((clipped[1].uv.x - 1.0).abs() < 1e-6);
        assert!((clipped[2].color.x - 1.0).abs() < 1e-6);
        let first = clipped[0];
        assert!((first.clip.w - NEAR_PLANE).abs() < 1e-6);
        assert!((first.uv.x - 0.5).abs() < 1e-6);
    }

    #[test]
    fn segments_behind_viewer_are_dropped() {
        assert!(clip_segment(vec4(0.0, 0.0, 0.0, -1.0), vec4(1.0, 0.0, 0.0, -2.0)).is_none());
        let (a, b) = clip_segment(vec4(0.0, 0.0, 0.0, -0.9), vec4(1.0, 0.0, 0.0, 1.1)).unwrap();
        assert!((a.w - NEAR_PLANE).abs() < 1e-6);
        assert!((a.x - 0.5).abs() < 1e-6);
        assert_eq!(b, vec4(1.0, 0.0, 0.0, 1.1));
    }

    #[test]
    fn outline_sits_between_backdrop_and_nearer_meshes() {
        // Looking down -Z the backdrop is the farthest thing in the scene
        let geometry = frame_for(&AnimationState::new(), &axis_camera(Axis::Z, 30.0));
        let order = geometry.painter_order();

        let last_textured = order
            .iter()
            .rposition(|p| matches!(p, Primitive::Triangle(t) if matches!(t.fill, Fill::Textured(_))))
            .unwrap();
        let first_outline = order
            .iter()
            .position(|p| matches!(p, Primitive::Outline(_)))
            .unwrap();
        let last_outline = order
            .iter()
            .rposition(|p| matches!(p, Primitive::Outline(_)))
            .unwrap();
        let first_lit = order
            .iter()
            .position(|p| matches!(p, Primitive::Triangle(t) if matches!(t.fill, Fill::Colored(_))))
            .unwrap();

        assert!(last_textured < first_outline);
        assert!(last_outline < first_lit);
    }
}
