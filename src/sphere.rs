use std::sync::Arc;

use crate::{
    hit::{Hit, Record},
    interval::Interval,
    material::Material,
    ray::Ray,
    vec::Point,
    Error,
};

#[derive(Clone, Debug)]
pub struct Sphere {
    pub center: Point,
    pub radius: f64,
    pub material: Arc<Material>,
}

impl Sphere {
    pub fn new(center: Point, radius: f64, material: Arc<Material>) -> Result<Self, Error> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::Sphere("radius must be finite and positive"));
        }
        Ok(Self {
            center,
            radius,
            material,
        })
    }
}

impl Hit for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Record> {
        let oc = self.center - ray.origin;
        let a = ray.direction.norm_squared();
        let h = ray.direction.dot(&oc);
        let c = oc.norm_squared() - self.radius * self.radius;
        let discriminant = h * h - a * c;

        if discriminant < 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();

        // Prefer the nearer root, strictly inside the valid interval.
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let point = ray.at(root);
        let outward_normal = (point - self.center) / self.radius;
        Some(Record::with_face_normal(
            ray,
            root,
            point,
            outward_normal,
            Arc::clone(&self.material),
        ))
    }
}
