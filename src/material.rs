use crate::*;
use rand::prelude::*;

pub mod materials;
use materials::MaterialImpl;

/// A continuing ray and the per-channel factor applied to whatever light
/// it brings back.
#[derive(Clone, Debug)]
pub struct Scatter {
    pub attenuation: RGB,
    pub ray: Ray,
}

#[derive(Clone, Debug)]
pub enum Material {
    Lambert(materials::Lambert),
    Metal(materials::Metal),
    Dielectric(materials::Dielectric),
    Absorber(materials::Absorber),
}

impl_wrap_from_many! {Material, materials, [Lambert, Metal, Dielectric, Absorber]}

use Material::*;
impl Material {
    pub fn new_lambert(albedo: RGB) -> Self {
        Lambert(materials::Lambert(albedo))
    }

    pub fn new_metal(albedo: RGB, fuzz: f64) -> Self {
        Metal(materials::Metal::new(albedo, fuzz))
    }

    pub fn new_dielectric(index: f64) -> Self {
        Dielectric(materials::Dielectric {
            color: RGB::all(1.0),
            index,
        })
    }

    /// `None` means the ray was absorbed.
    pub fn scatter<R: ?Sized>(
        &self,
        ray: &Ray,
        hit: &shape::Hit,
        rng: &mut R,
    ) -> Option<Scatter>
    where
        R: Rng,
    {
        match self {
            Lambert(m) => m.scatter(ray, hit, rng),
            Metal(m) => m.scatter(ray, hit, rng),
            Dielectric(m) => m.scatter(ray, hit, rng),
            Absorber(m) => m.scatter(ray, hit, rng),
        }
    }
}
