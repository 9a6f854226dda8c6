use crate::*;
use camera::Camera;
use material::Material;
use object::{ObjectList, SimpleObject};
use rand::distributions::Uniform;
use rand::prelude::*;
use std::sync::Arc;

/// Diffuse, glass and metal spheres side by side on a large ground sphere,
/// seen by the default camera.
pub fn three_spheres(aspect_ratio: f64) -> (Camera, ObjectList) {
    let ground = Arc::new(Material::new_lambert(RGB::new(0.8, 0.8, 0.0)));
    let center = Arc::new(Material::new_lambert(RGB::new(0.1, 0.2, 0.5)));
    let left = Arc::new(Material::new_dielectric(1.5));
    let right = Arc::new(Material::new_metal(RGB::new(0.8, 0.6, 0.2), 0.0));

    let mut objects = ObjectList::new();
    objects.push(SimpleObject::sphere(P3::new(0.0, -100.5, -1.0), 100.0, ground));
    objects.push(SimpleObject::sphere(P3::new(0.0, 0.0, -1.0), 0.5, center));
    // a glass shell: the inner sphere shares the material with a flipped normal
    objects.push(SimpleObject::sphere(P3::new(-1.0, 0.0, -1.0), 0.5, left.clone()));
    objects.push(SimpleObject::sphere(P3::new(-1.0, 0.0, -1.0), -0.45, left));
    objects.push(SimpleObject::sphere(P3::new(1.0, 0.0, -1.0), 0.5, right));

    (Camera::new(aspect_ratio, 2.0, 1.0), objects)
}

/// A field of small random spheres around three large ones.
pub fn random_spheres<R: ?Sized>(aspect_ratio: f64, rng: &mut R) -> (Camera, ObjectList)
where
    R: Rng,
{
    let u01 = Uniform::new(0.0, 1.0);
    let mut objects = ObjectList::new();

    let ground = Arc::new(Material::new_lambert(RGB::all(0.5)));
    objects.push(SimpleObject::sphere(P3::new(0.0, -1000.0, 0.0), 1000.0, ground));

    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = u01.sample(rng);
            let center = P3::new(
                a as f64 + 0.9 * u01.sample(rng),
                0.2,
                b as f64 + 0.9 * u01.sample(rng),
            );
            if (center - P3::new(4.0, 0.2, 0.0)).norm() <= 0.9 {
                continue;
            }

            let material = if choose_mat < 0.8 {
                let albedo = random_rgb(rng, 0.0, 1.0) * random_rgb(rng, 0.0, 1.0);
                Material::new_lambert(albedo)
            } else if choose_mat < 0.95 {
                let albedo = random_rgb(rng, 0.5, 1.0);
                let fuzz = Uniform::new(0.0, 0.5).sample(rng);
                Material::new_metal(albedo, fuzz)
            } else {
                Material::new_dielectric(1.5)
            };
            objects.push(SimpleObject::sphere(center, 0.2, Arc::new(material)));
        }
    }

    let glass = Arc::new(Material::new_dielectric(1.5));
    let matte = Arc::new(Material::new_lambert(RGB::new(0.4, 0.2, 0.1)));
    let metal = Arc::new(Material::new_metal(RGB::new(0.7, 0.6, 0.5), 0.0));
    objects.push(SimpleObject::sphere(P3::new(0.0, 1.0, 0.0), 1.0, glass));
    objects.push(SimpleObject::sphere(P3::new(-4.0, 1.0, 0.0), 1.0, matte));
    objects.push(SimpleObject::sphere(P3::new(4.0, 1.0, 0.0), 1.0, metal));

    let camera = {
        let origin = P3::new(13.0, 2.0, 3.0);
        let view_at = P3::new(0.0, 0.0, 0.0);
        let view_up = V3::new(0.0, 1.0, 0.0);
        let fov_degree = 20.0;
        Camera::look_at(origin, view_at, view_up, fov_degree, aspect_ratio)
    };

    (camera, objects)
}

fn random_rgb<R: ?Sized>(rng: &mut R, min: f64, max: f64) -> RGB
where
    R: Rng,
{
    let v = math::random_vec_range(rng, min, max);
    RGB::new(v[0], v[1], v[2])
}
