use std::sync::Arc;

use crate::{
    interval::Interval,
    material::Material,
    ray::Ray,
    vec::{Point, Vec3},
};

/// Intersection contract. A `None` means the ray misses within `ray_t`.
pub trait Hit: Send + Sync {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Record>;
}

/// Output of a successful intersection test.
#[derive(Clone, Debug)]
pub struct Record {
    pub point: Point,
    /// Unit length, always facing against the incoming ray.
    pub normal: Vec3,
    pub t: f64,
    pub front_face: bool,
    pub material: Arc<Material>,
}

impl Record {
    /// `outward_normal` must be unit length.
    pub fn with_face_normal(
        ray: &Ray,
        t: f64,
        point: Point,
        outward_normal: Vec3,
        material: Arc<Material>,
    ) -> Self {
        let front_face = ray.direction.dot(&outward_normal) < 0.0;
        Self {
            point,
            normal: if front_face {
                outward_normal
            } else {
                -outward_normal
            },
            t,
            front_face,
            material,
        }
    }
}
