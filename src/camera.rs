use rand::{rngs::SmallRng, Rng, SeedableRng};
use rayon::prelude::*;

use crate::{
    frame::FrameBuffer,
    hit::Hit,
    interval::Interval,
    ray::Ray,
    vec::{Color, Point, Vec3},
    world::World,
    Error,
};

/// Render configuration. Derived viewport geometry lives in [`Camera`].
#[derive(Clone, Copy, Debug)]
pub struct CameraConfig {
    pub aspect_ratio: f64,
    pub image_width: usize,
    pub focal_length: f64,
    pub viewport_height: f64,
    pub center: Point,
    pub samples_per_pixel: u32,
    pub max_ray_depth: u32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: 16.0 / 9.0,
            image_width: 800,
            focal_length: 1.0,
            viewport_height: 2.0,
            center: Point::new(0.0, 0.0, 0.0),
            samples_per_pixel: 10,
            max_ray_depth: 50,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Camera {
    center: Point,
    image_width: usize,
    image_height: usize,
    samples_per_pixel: u32,
    max_ray_depth: u32,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
    pixel_0: Point,
}

impl Camera {
    pub fn new(config: CameraConfig) -> Result<Self, Error> {
        if config.image_width < 1 {
            return Err(Error::Camera("image width must be at least 1"));
        }
        if !(config.aspect_ratio.is_finite() && config.aspect_ratio > 0.0) {
            return Err(Error::Camera("aspect ratio must be finite and positive"));
        }
        if !(config.focal_length.is_finite() && config.focal_length > 0.0) {
            return Err(Error::Camera("focal length must be finite and positive"));
        }
        if !(config.viewport_height.is_finite() && config.viewport_height > 0.0) {
            return Err(Error::Camera("viewport height must be finite and positive"));
        }
        if config.samples_per_pixel < 1 {
            return Err(Error::Camera("samples per pixel must be at least 1"));
        }
        if config.max_ray_depth < 1 {
            return Err(Error::Camera("max ray depth must be at least 1"));
        }

        let image_height = ((config.image_width as f64 / config.aspect_ratio) as usize).max(1);
        let viewport_height = config.viewport_height;
        let viewport_width =
            viewport_height * config.image_width as f64 / image_height as f64;
        let viewport_u = Vec3::new(viewport_width, 0.0, 0.0);
        let viewport_v = Vec3::new(0.0, -viewport_height, 0.0);
        let pixel_delta_u = viewport_u / config.image_width as f64;
        let pixel_delta_v = viewport_v / image_height as f64;
        let viewport_upper_left = config.center
            - Vec3::new(0.0, 0.0, config.focal_length)
            - viewport_u / 2.0
            - viewport_v / 2.0;
        let pixel_0 = viewport_upper_left + 0.5 * (pixel_delta_u + pixel_delta_v);

        Ok(Self {
            center: config.center,
            image_width: config.image_width,
            image_height,
            samples_per_pixel: config.samples_per_pixel,
            max_ray_depth: config.max_ray_depth,
            pixel_delta_u,
            pixel_delta_v,
            pixel_0,
        })
    }

    pub fn image_width(&self) -> usize {
        self.image_width
    }

    pub fn image_height(&self) -> usize {
        self.image_height
    }

    /// A ray through pixel (x, y), jittered inside the pixel's footprint.
    pub fn get_ray(&self, x: usize, y: usize, rng: &mut impl Rng) -> Ray {
        let px = rng.gen_range(-0.5..0.5);
        let py = rng.gen_range(-0.5..0.5);
        let pixel_center =
            self.pixel_0 + (x as f64 * self.pixel_delta_u) + (y as f64 * self.pixel_delta_v);
        let pixel_sample = pixel_center + (px * self.pixel_delta_u) + (py * self.pixel_delta_v);
        Ray {
            origin: self.center,
            direction: pixel_sample - self.center,
        }
    }

    /// Recursive trace. The lower bound of 0.001 keeps scattered rays from
    /// re-hitting the surface they left.
    pub fn ray_color(&self, ray: &Ray, depth: u32, world: &World, rng: &mut impl Rng) -> Color {
        if depth == 0 {
            return Color::new(0.0, 0.0, 0.0);
        }
        match world.hit(ray, Interval::new(0.001, f64::INFINITY)) {
            Some(record) => {
                let material = record.material.clone();
                match material.scatter(ray, &record, rng) {
                    Some(scatter) => scatter.attenuation.component_mul(&self.ray_color(
                        &scatter.scattered,
                        depth - 1,
                        world,
                        rng,
                    )),
                    None => Color::new(0.0, 0.0, 0.0),
                }
            }
            None => sky_color(ray),
        }
    }

    /// Average of `samples_per_pixel` jittered traces through pixel (x, y).
    pub fn pixel_color(&self, x: usize, y: usize, world: &World, rng: &mut impl Rng) -> Color {
        let mut color = Color::new(0.0, 0.0, 0.0);
        for _ in 0..self.samples_per_pixel {
            let ray = self.get_ray(x, y, rng);
            color += self.ray_color(&ray, self.max_ray_depth, world, rng);
        }
        color / self.samples_per_pixel as f64
    }

    /// Scanline-parallel render. Each row samples from its own generator
    /// seeded from `seed`, so a render is deterministic for a given seed and
    /// thread-count independent.
    pub fn render(&self, world: &World, seed: u64) -> FrameBuffer {
        let rows: Vec<Vec<Color>> = (0..self.image_height)
            .into_par_iter()
            .map(|y| {
                let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(y as u64));
                (0..self.image_width)
                    .map(|x| self.pixel_color(x, y, world, &mut rng))
                    .collect()
            })
            .collect();

        let mut frame_buffer = FrameBuffer::new(self.image_width, self.image_height);
        for (y, row) in rows.into_iter().enumerate() {
            for (x, color) in row.into_iter().enumerate() {
                frame_buffer.set_pixel(x, y, color);
            }
        }
        frame_buffer
    }
}

/// Background gradient, white at the horizon blending into blue upward.
fn sky_color(ray: &Ray) -> Color {
    let unit_direction = ray.direction.normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    (1.0 - a) * Color::new(1.0, 1.0, 1.0) + a * Color::new(0.5, 0.7, 1.0)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{material::Material, sphere::Sphere};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn single_sphere_world() -> World {
        let material = Arc::new(Material::Lambertian {
            albedo: Color::new(0.5, 0.5, 0.5),
        });
        let sphere = Sphere::new(Point::new(0.0, 0.0, -1.0), 0.5, material).unwrap();
        [Arc::new(sphere) as Arc<dyn Hit>].into_iter().collect()
    }

    #[test]
    fn default_config_derives_a_450_row_image() {
        let camera = Camera::new(CameraConfig::default()).unwrap();
        assert_eq!(camera.image_width(), 800);
        assert_eq!(camera.image_height(), 450);
    }

    #[test]
    fn degenerate_configs_are_rejected() {
        for config in [
            CameraConfig {
                image_width: 0,
                ..CameraConfig::default()
            },
            CameraConfig {
                aspect_ratio: 0.0,
                ..CameraConfig::default()
            },
            CameraConfig {
                focal_length: -1.0,
                ..CameraConfig::default()
            },
            CameraConfig {
                samples_per_pixel: 0,
                ..CameraConfig::default()
            },
            CameraConfig {
                max_ray_depth: 0,
                ..CameraConfig::default()
            },
        ] {
            assert!(Camera::new(config).is_err());
        }
    }

    #[test]
    fn extreme_aspect_ratio_floors_height_at_one() {
        let camera = Camera::new(CameraConfig {
            image_width: 2,
            aspect_ratio: 100.0,
            ..CameraConfig::default()
        })
        .unwrap();
        assert_eq!(camera.image_height(), 1);
    }

    #[test]
    fn depth_zero_is_black() {
        let camera = Camera::new(CameraConfig::default()).unwrap();
        let world = single_sphere_world();
        let mut rng = SmallRng::seed_from_u64(7);
        let ray = camera.get_ray(400, 225, &mut rng);
        assert_eq!(
            camera.ray_color(&ray, 0, &world, &mut rng),
            Color::new(0.0, 0.0, 0.0)
        );
    }

    #[test]
    fn center_pixel_sees_the_sphere() {
        let camera = Camera::new(CameraConfig::default()).unwrap();
        let world = single_sphere_world();
        let mut rng = SmallRng::seed_from_u64(8);
        let color = camera.pixel_color(400, 225, &world, &mut rng);
        assert!(color.norm() > 0.0);
        // A gray diffuse sphere under a bright sky cannot reach full white.
        assert!(color.x < 1.0 && color.y < 1.0 && color.z < 1.0);
    }

    #[test]
    fn sky_pixel_matches_the_background_gradient() {
        let camera = Camera::new(CameraConfig::default()).unwrap();
        let world = single_sphere_world();
        let mut rng = SmallRng::seed_from_u64(9);
        // Top row looks well above the sphere.
        let ray = camera.get_ray(400, 0, &mut rng);
        let color = camera.ray_color(&ray, 50, &world, &mut rng);
        assert_eq!(color, sky_color(&ray));
        // Blue channel dominates upward.
        assert!(color.z > color.x);
    }
}
