use crate::renderer::RenderConfig;
use anyhow::{anyhow, bail, Context, Result};
use getopts::Options;
use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneKind {
    ThreeSpheres,
    RandomSpheres,
}

impl FromStr for SceneKind {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "three" => Ok(SceneKind::ThreeSpheres),
            "random" => Ok(SceneKind::RandomSpheres),
            _ => Err(anyhow!("unknown scene '{}', expected 'three' or 'random'", s)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub output: PathBuf,
    pub width: u32,
    pub aspect_ratio: f64,
    pub samples_per_pixel: u32,
    pub max_depth: i32,
    pub scene: SceneKind,
    pub seed: Option<u64>,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output: PathBuf::from("output.ppm"),
            width: 400,
            aspect_ratio: 16.0 / 9.0,
            samples_per_pixel: 100,
            max_depth: 50,
            scene: SceneKind::ThreeSpheres,
            seed: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    pub fn height(&self) -> u32 {
        ((self.width as f64 / self.aspect_ratio) as u32).max(1)
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            width: self.width,
            height: self.height(),
            samples_per_pixel: self.samples_per_pixel,
            max_depth: self.max_depth,
        }
    }
}

pub enum Command {
    Render(Config),
    Help(String),
}

pub fn options() -> Options {
    let mut opts = Options::new();
    opts.optopt("o", "output", "output image, .ppm or .png", "FILE");
    opts.optopt("w", "width", "image width in pixels", "PX");
    opts.optopt("", "aspect", "aspect ratio as W:H or a number", "RATIO");
    opts.optopt("s", "samples", "samples per pixel", "N");
    opts.optopt("d", "depth", "maximum bounces per path", "N");
    opts.optopt("", "scene", "scene to render: three or random", "NAME");
    opts.optopt("", "seed", "seed for a reproducible render", "SEED");
    opts.optflagmulti("v", "verbose", "more logging, repeat for trace");
    opts.optflag("q", "quiet", "only log errors");
    opts.optflag("h", "help", "print this help");
    opts
}

fn parse_aspect(s: &str) -> Result<f64> {
    let ratio = match s.find(|c| c == ':' || c == '/') {
        Some(i) => {
            let w: f64 = s[..i].trim().parse()?;
            let h: f64 = s[i + 1..].trim().parse()?;
            w / h
        }
        None => s.trim().parse()?,
    };
    if !(ratio.is_finite() && ratio > 0.0) {
        bail!("aspect ratio must be positive");
    }
    Ok(ratio)
}

fn opt_parse<T>(matches: &getopts::Matches, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match matches.opt_str(name) {
        Some(s) => s
            .parse()
            .map(Some)
            .with_context(|| format!("invalid value for --{}: '{}'", name, s)),
        None => Ok(None),
    }
}

/// Parses everything after the program name.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Command> {
    let opts = options();
    let args: Vec<&str> = args.iter().map(|s| s.as_ref()).collect();
    let matches = opts.parse(&args)?;

    if matches.opt_present("h") {
        let brief = "Usage: spheretrace [options]";
        return Ok(Command::Help(opts.usage(brief)));
    }
    if !matches.free.is_empty() {
        bail!("unexpected argument '{}'", matches.free[0]);
    }

    let mut config = Config::default();
    if let Some(output) = matches.opt_str("output") {
        config.output = PathBuf::from(output);
    }
    if let Some(width) = opt_parse(&matches, "width")? {
        config.width = width;
    }
    if let Some(aspect) = matches.opt_str("aspect") {
        config.aspect_ratio = parse_aspect(&aspect)
            .with_context(|| format!("invalid value for --aspect: '{}'", aspect))?;
    }
    if let Some(samples) = opt_parse(&matches, "samples")? {
        config.samples_per_pixel = samples;
    }
    if let Some(depth) = opt_parse(&matches, "depth")? {
        config.max_depth = depth;
    }
    if let Some(scene) = matches.opt_str("scene") {
        config.scene = scene.parse()?;
    }
    config.seed = opt_parse(&matches, "seed")?;

    if config.width == 0 {
        bail!("width must be at least 1");
    }
    if config.samples_per_pixel == 0 {
        bail!("samples per pixel must be at least 1");
    }
    if config.width.checked_mul(config.height()).is_none() {
        bail!(
            "image of {}x{} pixels is too large",
            config.width,
            config.height()
        );
    }

    config.log_level = if matches.opt_present("q") {
        LevelFilter::Error
    } else {
        match matches.opt_count("v") {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Ok(Command::Render(config))
}
