/*
 * Geometry Module
 *
 * Vector helpers for building polygon meshes by hand: face normals,
 * centroids and fan triangulation of convex polygons.
 */

use nannou::prelude::*;

// Normals shorter than this are treated as degenerate
const DEGENERATE_EPSILON: f32 = 1.0e-12;

// Normal of a planar polygon whose front face winds counter-clockwise, by
// Newell's method. Zero for fewer than three vertices or a degenerate polygon.
pub fn face_normal(vertices: &[Vec3]) -> Vec3 {
    if vertices.len() < 3 {
        return Vec3::ZERO;
    }

    let mut normal = Vec3::ZERO;
    for (i, current) in vertices.iter().enumerate() {
        let next = vertices[(i + 1) % vertices.len()];
        normal.x += (current.y - next.y) * (current.z + next.z);
        normal.y += (current.z - next.z) * (current.x + next.x);
        normal.z += (current.x - next.x) * (current.y + next.y);
    }

    if normal.length_squared() <= DEGENERATE_EPSILON {
        Vec3::ZERO
    } else {
        normal.normalize()
    }
}

// Average of the polygon's vertices
pub fn centroid(vertices: &[Vec3]) -> Vec3 {
    if vertices.is_empty() {
        return Vec3::ZERO;
    }
    let sum = vertices.iter().fold(Vec3::ZERO, |acc, v| acc + *v);
    sum / vertices.len() as f32
}

// Fan a convex polygon with `vertex_count` corners into index triples
pub fn fan_triangles(vertex_count: usize) -> impl Iterator<Item = [usize; 3]> {
    (1..vertex_count.saturating_sub(1)).map(|i| [0, i, i + 1])
}
