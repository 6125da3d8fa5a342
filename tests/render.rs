use std::sync::Arc;

use pathtracer::{Camera, CameraConfig, Color, Hit, Material, Point, Rgba32, Sphere, World};

fn single_sphere_world() -> World {
    let material = Arc::new(Material::Lambertian {
        albedo: Color::new(0.5, 0.5, 0.5),
    });
    let sphere = Sphere::new(Point::new(0.0, 0.0, -1.0), 0.5, material).unwrap();
    [Arc::new(sphere) as Arc<dyn Hit>].into_iter().collect()
}

fn small_camera() -> Camera {
    Camera::new(CameraConfig {
        image_width: 64,
        samples_per_pixel: 4,
        max_ray_depth: 10,
        ..CameraConfig::default()
    })
    .unwrap()
}

#[test]
fn rendered_frame_shows_sphere_and_sky() {
    let camera = small_camera();
    let frame = camera.render(&single_sphere_world(), 42);
    assert_eq!(frame.width(), 64);
    assert_eq!(frame.height(), 36);
    assert_eq!(frame.pixel_data().len(), 64 * 36 * 4);

    // Image center looks straight at the gray sphere: lit, but darker than sky.
    let center: Color = frame.get_pixel(32, 18);
    assert!(center.norm() > 0.0);

    // Top corner is pure background gradient, blue-dominant.
    let (r, _, b, _) = frame.get_pixel::<Color>(0, 0).to_rgba32();
    assert!(b > r);
    assert!(center.norm() < frame.get_pixel::<Color>(0, 0).norm());
}

#[test]
fn renders_are_deterministic_for_a_seed() {
    let camera = small_camera();
    let world = single_sphere_world();
    let first = camera.render(&world, 7);
    let second = camera.render(&world, 7);
    assert_eq!(first.pixel_data(), second.pixel_data());
}

#[test]
fn empty_world_renders_the_gradient_top_to_bottom() {
    let camera = small_camera();
    let frame = camera.render(&World::new(), 1);
    let top: Color = frame.get_pixel(32, 0);
    let bottom: Color = frame.get_pixel(32, 35);
    // Sky is bluer up high and whiter near the bottom of the frame.
    assert!(top.z > top.x);
    assert!(bottom.x > top.x);
}
