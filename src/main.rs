use anyhow::Result;
use log::*;
use rand::prelude::*;
use rand::rngs::SmallRng;
use spheretrace::config::{self, Command, SceneKind};
use spheretrace::renderer::Renderer;
use spheretrace::*;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match config::parse_args(&args[..])? {
        Command::Help(usage) => {
            print!("{}", usage);
            return Ok(());
        }
        Command::Render(config) => config,
    };

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .init();

    let mut rng = match config.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let (camera, world) = match config.scene {
        SceneKind::ThreeSpheres => example_scenes::three_spheres(config.aspect_ratio),
        SceneKind::RandomSpheres => example_scenes::random_spheres(config.aspect_ratio, &mut rng),
    };
    info!("{:?} scene with {} spheres", config.scene, world.len());

    let image = Renderer.render(&world, &camera, config.render_config(), &mut rng);
    image.save(&config.output)?;
    info!("wrote {}", config.output.display());
    Ok(())
}
