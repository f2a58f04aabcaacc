/*
 * Mesh Module
 *
 * Hand-built polygon meshes for the scene: the backdrop plane, the
 * triangular prism used for the fish body, tail and eyes, and the boat hull.
 * Meshes are built once at startup and kept in a MeshLibrary for the life of
 * the program, so per-frame rendering never rebuilds geometry.
 */

use nannou::prelude::*;

use crate::geometry::{face_normal, fan_triangles};

// A convex planar polygon with a flat normal
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub vertices: Vec<Vec3>,
    pub normal: Vec3,
    // One texture coordinate per vertex, for textured faces only
    pub tex_coords: Option<Vec<Vec2>>,
}

impl Face {
    // Build a face and derive its normal from the winding order
    pub fn new(vertices: Vec<Vec3>) -> Self {
        let normal = face_normal(&vertices);
        Self {
            vertices,
            normal,
            tex_coords: None,
        }
    }

    pub fn with_tex_coords(mut self, tex_coords: Vec<Vec2>) -> Self {
        debug_assert_eq!(tex_coords.len(), self.vertices.len());
        self.tex_coords = Some(tex_coords);
        self
    }

    // Fan triangulation of the polygon as vertex index triples
    pub fn triangles(&self) -> impl Iterator<Item = [usize; 3]> {
        fan_triangles(self.vertices.len())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub faces: Vec<Face>,
}

impl Mesh {
    pub fn triangle_count(&self) -> usize {
        self.faces.iter().map(|face| face.triangles().count()).sum()
    }

    // Unit plane in XZ, front face toward +Y
    pub fn unit_plane() -> Self {
        let v1 = vec3(-0.5, 0.0, -0.5);
        let v2 = vec3(0.5, 0.0, -0.5);
        let v3 = vec3(0.5, 0.0, 0.5);
        let v4 = vec3(-0.5, 0.0, 0.5);

        let face = Face::new(vec![v4, v3, v2, v1]).with_tex_coords(vec![
            vec2(0.0, 0.0),
            vec2(1.0, 0.0),
            vec2(1.0, 1.0),
            vec2(0.0, 1.0),
        ]);

        Self { faces: vec![face] }
    }

    pub fn prism(size: f32) -> Self {
        let v1 = vec3(0.0, -1.0, 0.2) * size; // front, bottom
        let v2 = vec3(0.0, 1.0, 0.2) * size; // front, top
        let v3 = vec3(2.5, 0.0, 0.2) * size; // front, apex
        let v4 = vec3(0.0, -1.0, -0.2) * size; // back, bottom
        let v5 = vec3(0.0, 1.0, -0.2) * size; // back, top
        let v6 = vec3(2.5, 0.0, -0.2) * size; // back, apex

        Self {
            faces: vec![
                Face::new(vec![v1, v3, v2]),
                // Wound (v4, v5, v6) so the back face looks down -Z. The
                // reverse winding gives it a +Z normal and lights it from the front.
                Face::new(vec![v4, v5, v6]),
                Face::new(vec![v2, v3, v6, v5]),
                Face::new(vec![v1, v4, v6, v3]),
                Face::new(vec![v1, v2, v5, v4]),
            ],
        }
    }

    // Keel edge along X widening to a pointed deck at y = 1
    pub fn boat_hull() -> Self {
        let v1 = vec3(-0.5, 0.0, 0.0);
        let v2 = vec3(0.5, 0.0, 0.0);
        let v3 = vec3(0.5, 1.0, 0.5);
        let v4 = vec3(-0.5, 1.0, 0.5);
        let v5 = vec3(0.5, 1.0, -0.5);
        let v6 = vec3(-0.5, 1.0, -0.5);
        let v7 = vec3(1.5, 1.0, 0.0); // bow
        let v8 = vec3(-1.5, 1.0, 0.0); // stern

        Self {
            faces: vec![
                // Sides
                Face::new(vec![v1, v2, v3, v4]),
                Face::new(vec![v1, v6, v5, v2]),
                Face::new(vec![v2, v7, v3]),
                Face::new(vec![v2, v5, v7]),
                Face::new(vec![v1, v4, v8]),
                Face::new(vec![v1, v8, v6]),
                // Deck
                Face::new(vec![v4, v3, v5, v6]),
                Face::new(vec![v3, v7, v5]),
                Face::new(vec![v4, v6, v8]),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshId {
    Plane,
    FishBody,
    FishTail,
    FishEye,
    Boat,
}

impl MeshId {
    pub const ALL: [MeshId; 5] = [
        MeshId::Plane,
        MeshId::FishBody,
        MeshId::FishTail,
        MeshId::FishEye,
        MeshId::Boat,
    ];

    fn index(self) -> usize {
        match self {
            MeshId::Plane => 0,
            MeshId::FishBody => 1,
            MeshId::FishTail => 2,
            MeshId::FishEye => 3,
            MeshId::Boat => 4,
        }
    }

    fn build(self) -> Mesh {
        match self {
            MeshId::Plane => Mesh::unit_plane(),
            MeshId::FishBody => Mesh::prism(1.0),
            MeshId::FishTail => Mesh::prism(0.5),
            MeshId::FishEye => Mesh::prism(0.2),
            MeshId::Boat => Mesh::boat_hull(),
        }
    }
}

// All scene meshes, built once
pub struct MeshLibrary {
    meshes: Vec<Mesh>,
}

impl MeshLibrary {
    pub fn new() -> Self {
        let meshes: Vec<Mesh> = MeshId::ALL.iter().map(|id| id.build()).collect();
        log::debug!(
            "Built {} meshes ({} triangles)",
            meshes.len(),
            meshes.iter().map(Mesh::triangle_count).sum::<usize>()
        );
        Self { meshes }
    }

    pub fn get(&self, id: MeshId) -> &Mesh {
        &self.meshes[id.index()]
    }
}

impl Default for MeshLibrary {
    fn default() -> Self {
        Self::new()
    }
}
