use crate::camera::Camera;
use crate::image::*;
use crate::object::Hittable;
use crate::*;

use log::*;
use rand::distributions::Uniform;
use rand::prelude::*;
use std::time::Instant;

/// Lower bound on hit distance, keeps scattered rays off their own surface.
pub const T_MIN_EPSILON: f64 = 1e-3;

/// Sky gradient, white at the horizon to blue overhead.
pub fn background(ray: &Ray) -> RGB {
    let dir = math::unit_vector(&ray.dir);
    let t = 0.5 * (dir[1] + 1.0);
    RGB::all(1.0).lerp(&RGB::new(0.5, 0.7, 1.0), t)
}

/// Light arriving along `ray`, following at most `depth` bounces.
pub fn ray_color<H: ?Sized, R: ?Sized>(ray: &Ray, world: &H, depth: i32, rng: &mut R) -> RGB
where
    H: Hittable,
    R: Rng,
{
    if depth <= 0 {
        return RGB::black();
    }

    if let Some(hit) = world.hit(ray, T_MIN_EPSILON, std::f64::INFINITY) {
        match hit.material.scatter(ray, &hit.geom, rng) {
            Some(scatter) => {
                scatter.attenuation * ray_color(&scatter.ray, world, depth - 1, rng)
            }
            None => RGB::black(),
        }
    } else {
        background(ray)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub samples_per_pixel: u32,
    pub max_depth: i32,
}

pub struct Renderer;

impl Renderer {
    pub fn render<H: ?Sized, R: ?Sized>(
        &self,
        world: &H,
        camera: &Camera,
        config: RenderConfig,
        rng: &mut R,
    ) -> Image
    where
        H: Hittable,
        R: Rng,
    {
        let start = Instant::now();
        info!(
            "rendering {}x{}, {} samples per pixel, depth {}",
            config.width, config.height, config.samples_per_pixel, config.max_depth
        );

        let mut film = Film::new(config.width, config.height);
        let u_span = config.width.saturating_sub(1).max(1) as f64;
        let v_span = config.height.saturating_sub(1).max(1) as f64;
        let jitter = Uniform::new(0.0, 1.0);
        let mut dropped = 0usize;

        for yi in 0..film.h() {
            debug!("scanlines remaining: {}", film.h() - yi);
            // film rows run top to bottom, v runs bottom to top
            let row = (film.h() - 1 - yi) as f64;
            for xi in 0..film.w() {
                for _i in 0..config.samples_per_pixel {
                    let u = (xi as f64 + jitter.sample(rng)) / u_span;
                    let v = (row + jitter.sample(rng)) / v_span;
                    let ray = camera.get_ray(u, v);
                    let radiance = ray_color(&ray, world, config.max_depth, rng);
                    if radiance.is_finite() {
                        let pixel = film.at_mut(xi, yi);
                        pixel.accum += radiance;
                        pixel.samples += 1;
                    } else {
                        warn!("radiance is not finite at ({}, {}): {:?}", xi, yi, radiance);
                        dropped += 1;
                    }
                }
            }
        }

        if dropped > 0 {
            warn!("dropped {} non-finite samples", dropped);
        }
        info!("done in {:.2?}", start.elapsed());
        film.to_image()
    }
}
