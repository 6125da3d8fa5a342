use nalgebra::Vector3;
use rand::Rng;

pub type Vec3 = Vector3<f64>;
pub type Point = Vector3<f64>;
pub type Color = Vector3<f64>;

pub fn near_zero(v: &Vec3) -> bool {
    v.x.abs() < 1e-8 && v.y.abs() < 1e-8 && v.z.abs() < 1e-8
}

pub fn random(rng: &mut impl Rng) -> Vec3 {
    Vec3::new(rng.gen(), rng.gen(), rng.gen())
}

pub fn random_range(rng: &mut impl Rng, min: f64, max: f64) -> Vec3 {
    Vec3::new(
        rng.gen_range(min..max),
        rng.gen_range(min..max),
        rng.gen_range(min..max),
    )
}

pub fn random_in_unit_sphere(rng: &mut impl Rng) -> Vec3 {
    loop {
        let v = random_range(rng, -1.0, 1.0);
        if v.norm_squared() < 1.0 {
            return v;
        }
    }
}

pub fn random_unit_vector(rng: &mut impl Rng) -> Vec3 {
    random_in_unit_sphere(rng).normalize()
}

pub fn random_on_hemisphere(rng: &mut impl Rng, normal: &Vec3) -> Vec3 {
    let v = random_unit_vector(rng);
    if v.dot(normal) > 0.0 {
        v
    } else {
        -v
    }
}

pub fn reflect(v: &Vec3, n: &Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// `n` and `v` are expected to be unit length; `eta_ratio` is the ratio of
/// refractive indices across the boundary.
pub fn refract(v: &Vec3, n: &Vec3, eta_ratio: f64) -> Vec3 {
    let cos_theta = (-v).dot(n).min(1.0);
    let r_out_perp = eta_ratio * (v + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.norm_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}
