use rand::Rng;

use crate::{
    hit::Record,
    ray::Ray,
    vec::{self, Color},
};

/// Surface scattering behavior. Instances are shared across surfaces through
/// `Arc` and are read-only after construction.
#[derive(Clone, Debug, PartialEq)]
pub enum Material {
    Lambertian { albedo: Color },
    Metal { albedo: Color, fuzz: f64 },
    Dielectric { refraction_index: f64 },
}

/// A scattered ray and the color factor applied to its contribution.
#[derive(Clone, Copy, Debug)]
pub struct Scatter {
    pub attenuation: Color,
    pub scattered: Ray,
}

impl Material {
    /// `None` means the ray was absorbed and the path terminates.
    pub fn scatter(&self, ray: &Ray, record: &Record, rng: &mut impl Rng) -> Option<Scatter> {
        match *self {
            Material::Lambertian { albedo } => {
                let mut direction = record.normal + vec::random_unit_vector(rng);
                if vec::near_zero(&direction) {
                    direction = record.normal;
                }
                Some(Scatter {
                    attenuation: albedo,
                    scattered: Ray {
                        origin: record.point,
                        direction,
                    },
                })
            }
            Material::Metal { albedo, fuzz } => {
                let reflected = vec::reflect(&ray.direction.normalize(), &record.normal);
                let direction = reflected + fuzz * vec::random_unit_vector(rng);
                // A fuzzed reflection that dips below the surface is absorbed.
                if direction.dot(&record.normal) <= 0.0 {
                    return None;
                }
                Some(Scatter {
                    attenuation: albedo,
                    scattered: Ray {
                        origin: record.point,
                        direction,
                    },
                })
            }
            Material::Dielectric { refraction_index } => {
                let ratio = if record.front_face {
                    1.0 / refraction_index
                } else {
                    refraction_index
                };
                let unit_direction = ray.direction.normalize();
                let cos_theta = (-unit_direction).dot(&record.normal).min(1.0);
                let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

                let cannot_refract = ratio * sin_theta > 1.0;
                let direction = if cannot_refract
                    || reflectance(cos_theta, ratio) > rng.gen::<f64>()
                {
                    vec::reflect(&unit_direction, &record.normal)
                } else {
                    vec::refract(&unit_direction, &record.normal, ratio)
                };
                Some(Scatter {
                    attenuation: Color::new(1.0, 1.0, 1.0),
                    scattered: Ray {
                        origin: record.point,
                        direction,
                    },
                })
            }
        }
    }
}

/// Schlick's approximation of the Fresnel reflectance.
fn reflectance(cosine: f64, refraction_index: f64) -> f64 {
    let r0 = (1.0 - refraction_index) / (1.0 + refraction_index);
    let r0 = r0 * r0;
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}
