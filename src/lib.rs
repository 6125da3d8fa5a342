pub mod camera;
pub mod frame;
pub mod hit;
pub mod interval;
pub mod material;
pub mod ray;
pub mod sphere;
pub mod vec;
pub mod world;

pub use camera::{Camera, CameraConfig};
pub use frame::{FrameBuffer, Rgba32};
pub use hit::{Hit, Record};
pub use interval::Interval;
pub use material::{Material, Scatter};
pub use ray::Ray;
pub use sphere::Sphere;
pub use vec::{Color, Point, Vec3};
pub use world::World;

/// Construction-time validation failures. Tracing itself never errors;
/// degenerate cases resolve to "no hit" or black.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid sphere: {0}")]
    Sphere(&'static str),
    #[error("invalid camera: {0}")]
    Camera(&'static str),
}
