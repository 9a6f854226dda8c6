use crate::material::Scatter;
use crate::*;
use rand::prelude::*;

pub trait MaterialImpl {
    fn scatter<R: ?Sized>(&self, ray: &Ray, hit: &shape::Hit, rng: &mut R) -> Option<Scatter>
    where
        R: Rng;
}

mod absorber;
pub use absorber::*;

mod dielectric;
pub use dielectric::*;

mod lambert;
pub use lambert::*;

mod metal;
pub use metal::*;
