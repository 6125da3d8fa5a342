use std::sync::Arc;

use crate::{
    hit::{Hit, Record},
    interval::Interval,
    ray::Ray,
};

/// The scene: a flat collection of hittables scanned linearly for the
/// closest intersection.
#[derive(Clone, Default)]
pub struct World {
    objects: Vec<Arc<dyn Hit>>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, object: Arc<dyn Hit>) {
        self.objects.push(object);
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl FromIterator<Arc<dyn Hit>> for World {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Hit>>>(iter: I) -> Self {
        Self {
            objects: iter.into_iter().collect(),
        }
    }
}

impl Hit for World {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Record> {
        let mut closest = None;
        let mut closest_so_far = ray_t.max;
        for object in &self.objects {
            if let Some(record) = object.hit(ray, Interval::new(ray_t.min, closest_so_far)) {
                closest_so_far = record.t;
                closest = Some(record);
            }
        }
        closest
    }
}
