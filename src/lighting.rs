/*
 * Lighting Module
 *
 * Fixed-function style lighting evaluated on the CPU. The scene has a global
 * ambient term and two positional lights: moonlight above the water and a
 * dim glow from the coral reef below it. Materials carry the classic
 * ambient/diffuse/specular/shininess/emission terms, and each vertex is shaded
 * with the Blinn-Phong equation the fixed-function pipeline uses.
 *
 * Colours are RGBA stored in a Vec4.
 */

use nannou::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub ambient: Vec4,
    pub diffuse: Vec4,
    pub specular: Vec4,
    pub position: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub ambient: Vec4,
    pub diffuse: Vec4,
    pub specular: Vec4,
    pub emission: Vec4,
    pub shininess: f32,
}

impl Default for Material {
    // Fixed-function defaults for front faces
    fn default() -> Self {
        Self {
            ambient: vec4(0.2, 0.2, 0.2, 1.0),
            diffuse: vec4(0.8, 0.8, 0.8, 1.0),
            specular: vec4(0.0, 0.0, 0.0, 1.0),
            emission: vec4(0.0, 0.0, 0.0, 1.0),
            shininess: 0.0,
        }
    }
}

impl Material {
    // Material with matching diffuse and specular reflection
    pub fn glossy(color: Vec4, shininess: f32) -> Self {
        Self {
            diffuse: color,
            specular: color,
            shininess,
            ..Self::default()
        }
    }

    pub fn boat() -> Self {
        Self::glossy(vec4(0.6, 0.6, 0.6, 1.0), 2.0)
    }

    pub fn fish() -> Self {
        Self::glossy(vec4(0.9, 0.6, 0.0, 1.0), 2.0)
    }

    pub fn fish_eye() -> Self {
        Self::glossy(vec4(1.0, 1.0, 1.0, 1.0), 2.0)
    }
}

pub struct LightModel {
    pub global_ambient: Vec4,
    pub lights: Vec<Light>,
}

impl LightModel {
    // Moonlight from above and in front of the viewer plus a faint reef
    // light from below and behind. Positions are world space, so the lights
    // stay put when the camera moves to an axis view.
    pub fn night_ocean() -> Self {
        let moonlight = Light {
            ambient: vec4(0.1, 0.1, 0.1, 1.0),
            diffuse: vec4(0.8, 0.8, 0.8, 1.0),
            specular: vec4(0.8, 0.8, 0.8, 1.0),
            position: vec3(0.0, 10.0, -10.0),
        };
        let reef_light = Light {
            ambient: vec4(0.2, 0.2, 0.2, 1.0),
            diffuse: vec4(0.1, 0.1, 0.1, 1.0),
            specular: vec4(0.1, 0.1, 0.1, 1.0),
            position: vec3(0.0, -10.0, 10.0),
        };

        Self {
            global_ambient: vec4(0.2, 0.2, 0.2, 1.0),
            lights: vec![moonlight, reef_light],
        }
    }

    // Colour of a surface point, clamped to [0, 1] with the diffuse alpha.
    // `normal` need not be unit length. The specular half vector uses the
    // true direction to the viewer (a local viewer), not a fixed +Z.
    pub fn shade(&self, position: Vec3, normal: Vec3, view_direction: Vec3, material: &Material) -> Vec4 {
        let n = normal.normalize_or_zero();
        let v = view_direction.normalize_or_zero();

        let mut color = material.emission + self.global_ambient * material.ambient;

        for light in &self.lights {
            let l = (light.position - position).normalize_or_zero();
            let n_dot_l = n.dot(l).max(0.0);

            color += light.ambient * material.ambient;
            color += light.diffuse * material.diffuse * n_dot_l;

            if n_dot_l > 0.0 {
                let h = (l + v).normalize_or_zero();
                let n_dot_h = n.dot(h).max(0.0);
                color += light.specular * material.specular * specular_term(n_dot_h, material.shininess);
            }
        }

        let clamped = color.max(Vec4::ZERO).min(Vec4::ONE);
        vec4(clamped.x, clamped.y, clamped.z, material.diffuse.w)
    }
}

// n.h raised to the shininess, with 0^0 taken as 1
fn specular_term(n_dot_h: f32, shininess: f32) -> f32 {
    if shininess == 0.0 {
        1.0
    } else {
        n_dot_h.powf(shininess)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn single_light(position: Vec3) -> LightModel {
        LightModel {
            global_ambient: Vec4::ZERO,
            lights: vec![Light {
                ambient: Vec4::ZERO,
                diffuse: Vec4::ONE,
                specular: Vec4::ZERO,
                position,
            }],
        }
    }

    #[test]
    fn facing_the_moon_is_brighter() {
        let model = LightModel::night_ocean();
        let material = Material::boat();
        // Straight down only catches the weak reef light
        let lit_from_below = model.shade(Vec3::ZERO, -Vec3::Y, Vec3::Z, &material);
        let facing_moon = model.shade(Vec3::ZERO, vec3(0.0, 1.0, -1.0), Vec3::Z, &material);
        assert!(facing_moon.x > lit_from_below.x);
    }

    #[test]
    fn ambient_terms_add_up() {
        let model = LightModel::night_ocean();
        let material = Material::default();
        // Far to the side with the normal facing away from both lights
        let color = model.shade(vec3(1000.0, 0.0, 0.0), Vec3::X, Vec3::Z, &material);
        // global 0.2*0.2 + moon 0.1*0.2 + reef 0.2*0.2
        assert_relative_eq!(color.x, 0.04 + 0.02 + 0.04, epsilon = 1e-5);
        assert_relative_eq!(color.w, 1.0);
    }

    #[test]
    fn diffuse_follows_lambert() {
        let model = single_light(vec3(0.0, 10.0, 0.0));
        let material = Material {
            ambient: Vec4::ZERO,
            diffuse: Vec4::ONE,
            ..Material::default()
        };
        let head_on = model.shade(Vec3::ZERO, Vec3::Y, Vec3::Z, &material);
        let tilted = model.shade(Vec3::ZERO, vec3(1.0, 1.0, 0.0), Vec3::Z, &material);
        assert_relative_eq!(head_on.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(tilted.x, std::f32::consts::FRAC_1_SQRT_2, epsilon = 1e-5);
    }

    #[test]
    fn normal_length_does_not_matter() {
        let model = LightModel::night_ocean();
        let material = Material::fish();
        let a = model.shade(vec3(0.0, -2.0, -8.0), vec3(0.0, 0.0, 1.0), Vec3::Z, &material);
        let b = model.shade(vec3(0.0, -2.0, -8.0), vec3(0.0, 0.0, 7.5), Vec3::Z, &material);
        assert_relative_eq!(a.x, b.x, epsilon = 1e-6);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-6);
    }

    #[test]
    fn output_is_clamped() {
        let mut model = single_light(vec3(0.0, 10.0, 0.0));
        model.global_ambient = Vec4::splat(5.0);
        let color = model.shade(Vec3::ZERO, Vec3::Y, Vec3::Y, &Material::fish_eye());
        assert_eq!(color, Vec4::ONE);
    }

    #[test]
    fn specular_highlight_when_mirrored_toward_eye() {
        let model = LightModel {
            global_ambient: Vec4::ZERO,
            lights: vec![Light {
                ambient: Vec4::ZERO,
                diffuse: Vec4::ZERO,
                specular: Vec4::ONE,
                position: vec3(0.0, 10.0, 0.0),
            }],
        };
        let material = Material {
            ambient: Vec4::ZERO,
            ..Material::glossy(Vec4::ONE, 2.0)
        };
        let highlight = model.shade(Vec3::ZERO, Vec3::Y, Vec3::Y, &material);
        let grazing = model.shade(Vec3::ZERO, Vec3::Y, Vec3::X, &material);
        assert_relative_eq!(highlight.x, 1.0, epsilon = 1e-5);
        assert!(grazing.x < highlight.x);
    }

    #[test]
    fn scene_materials() {
        assert_eq!(Material::boat().diffuse, vec4(0.6, 0.6, 0.6, 1.0));
        assert_eq!(Material::fish().specular, vec4(0.9, 0.6, 0.0, 1.0));
        assert_eq!(Material::fish_eye().shininess, 2.0);
        assert_eq!(Material::fish().ambient, vec4(0.2, 0.2, 0.2, 1.0));
    }
}
