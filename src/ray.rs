use crate::vec::{Point, Vec3};

/// Direction is not required to be unit length; `t` is a parameter along the
/// ray, not a distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point,
    pub direction: Vec3,
}

impl Ray {
    pub fn at(&self, t: f64) -> Point {
        self.origin + t * self.direction
    }
}
