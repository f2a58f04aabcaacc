/*
 * Texture Module
 *
 * Loads the ocean/sky backdrop texture. If the image file cannot be read the
 * scene still starts: a night-sky and sea gradient with a moon glow is
 * generated in its place.
 */

use nannou::image::{self, DynamicImage, GenericImageView, Rgba, RgbaImage};
use nannou::prelude::*;
use nannou::wgpu;
use std::path::Path;

use crate::error::SceneError;

const FALLBACK_WIDTH: u32 = 256;
const FALLBACK_HEIGHT: u32 = 256;

// Fraction of the image height where the sky meets the sea
const HORIZON: f32 = 0.45;

// Decode the backdrop image from disk
pub fn load_backdrop_image(path: &Path) -> Result<DynamicImage, SceneError> {
    image::open(path).map_err(|source| SceneError::Texture {
        path: path.to_path_buf(),
        source,
    })
}

// The backdrop image, or the generated fallback when loading fails.
pub fn backdrop_image_or_fallback(path: &Path) -> DynamicImage {
    match load_backdrop_image(path) {
        Ok(image) => {
            log::info!("Loaded backdrop texture {:?} ({}x{})", path, image.width(), image.height());
            image
        }
        Err(err) => {
            log::warn!("{}; using generated backdrop", err);
            fallback_backdrop(FALLBACK_WIDTH, FALLBACK_HEIGHT)
        }
    }
}

// Upload the backdrop to the GPU
pub fn load_backdrop_texture(app: &App, path: &Path) -> wgpu::Texture {
    let image = backdrop_image_or_fallback(path);
    wgpu::Texture::from_image(app, &image)
}

// A night sky fading into dark water, with a soft moon in the upper left.
// Row 0 is the top of the image.
pub fn fallback_backdrop(width: u32, height: u32) -> DynamicImage {
    let width = width.max(1);
    let height = height.max(1);
    let moon = vec2(0.25, 0.2);

    let image = RgbaImage::from_fn(width, height, |x, y| {
        let u = x as f32 / width as f32;
        let v = y as f32 / height as f32;

        let mut color = if v < HORIZON {
            // Sky: deep blue at the top, lighter near the horizon
            let t = v / HORIZON;
            vec3(0.02, 0.03, 0.12).lerp(vec3(0.10, 0.14, 0.30), t)
        } else {
            // Sea: dark teal below the surface, almost black at the bottom
            let t = (v - HORIZON) / (1.0 - HORIZON);
            vec3(0.02, 0.18, 0.25).lerp(vec3(0.0, 0.03, 0.06), t)
        };

        let moon_distance = vec2(u, v * height as f32 / width as f32).distance(moon);
        let glow = (1.0 - moon_distance / 0.12).max(0.0).powi(2);
        color += Vec3::splat(glow * 0.9);

        let to_byte = |c: f32| (c.min(1.0).max(0.0) * 255.0).round() as u8;
        Rgba([to_byte(color.x), to_byte(color.y), to_byte(color.z), 255])
    });

    DynamicImage::ImageRgba8(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_a_texture_error() {
        let err = load_backdrop_image(Path::new("no/such/ocean.bmp")).unwrap_err();
        assert!(matches!(err, SceneError::Texture { .. }));
    }

    #[test]
    fn missing_file_falls_back_to_generated_image() {
        let image = backdrop_image_or_fallback(Path::new("no/such/ocean.bmp"));
        assert_eq!(image.dimensions(), (FALLBACK_WIDTH, FALLBACK_HEIGHT));
    }

    #[test]
    fn fallback_has_sky_above_sea() {
        let image = fallback_backdrop(64, 64).to_rgba8();
        let sky = image.get_pixel(60, 20);
        let sea = image.get_pixel(60, 40);
        // Sea is greener than the sky
        assert!(sea[1] > sky[1]);
        assert_eq!(sky[3], 255);
    }

    #[test]
    fn fallback_moon_is_brightest() {
        let image = fallback_backdrop(100, 100).to_rgba8();
        let moon = image.get_pixel(25, 20);
        let corner = image.get_pixel(99, 0);
        assert!(moon[0] > 200);
        assert!(corner[0] < 50);
    }

    #[test]
    fn zero_size_is_clamped() {
        let image = fallback_backdrop(0, 0);
        assert_eq!(image.dimensions(), (1, 1));
    }
}
