//! Offline baker for the pre-integrated skin scattering lookup texture.
//!
//! RGB of each texel holds the skin diffusion profile integrated around a
//! curved ring (x = N·L, y = curvature); alpha holds a compressed Beckmann
//! specular lobe (x = N·H, y = roughness).

pub mod config;
pub mod dds;
pub mod error;
pub mod gamma;
pub mod integrate;
pub mod lut;
pub mod scatter;
pub mod specular;
pub mod texture;
pub mod types;

use config::Config;
use error::Error;
use std::time::Instant;

/// Bake, optionally flip, and write the LUT described by `cfg`.
pub fn run(cfg: &Config) -> Result<(), Error> {
    let opts = cfg.lut_options();
    let started = Instant::now();

    let texture = if cfg.parallel {
        lut::generate(&opts)?
    } else {
        lut::generate_serial(&opts)?
    };
    log::info!(
        "baked {}x{} texels in {:.1} ms",
        texture.width(),
        texture.height(),
        started.elapsed().as_secs_f64() * 1000.0
    );

    let texture = if cfg.flip { texture.flipped() } else { texture };
    texture.save(&cfg.out, cfg.format)?;
    log::info!("saved {}", cfg.out.display());
    Ok(())
}
