//! Recursive ray tracing over a list of spheres.
//!
//! A [`renderer::Renderer`] walks the pixels of a [`camera::Camera`] and asks
//! [`renderer::ray_color`] for the light arriving along each ray. The
//! intersection side lives in [`object`] and [`shape`], scattering in
//! [`material`].

#[macro_use]
pub mod util;

pub mod camera;
pub mod config;
pub mod example_scenes;
pub mod image;
pub mod material;
pub mod math;
pub mod object;
pub mod ray;
pub mod renderer;
pub mod rgb;
pub mod shape;

pub use math::{P3, V3};
pub use ray::Ray;
pub use rgb::RGB;
