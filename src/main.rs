// What you GET:
// • Running with no arguments writes PreIntegratedSkinLUT.dds (128x128 RGBA8)
//   into the current directory.
// • RGB: skin diffuse falloff, N·L across, curvature down.
// • A: Beckmann specular, N·H across, roughness down.
// • `--help` lists the optional flags; RUST_LOG=debug shows encoder details.

use clap::Parser;
use log::{error, info};
use skin_lut::config::{Cli, Config};
use skin_lut::error::Error;

fn main() -> Result<(), Error> {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    // clap prints help/usage errors itself and exits (2 on bad arguments).
    let cfg = Config::from(Cli::parse());

    info!(
        "resolution {}, flip {}, gamma {}, {} -> {}",
        cfg.resolution,
        cfg.flip,
        cfg.gamma,
        if cfg.parallel { "parallel" } else { "serial" },
        cfg.out.display()
    );

    /* Any failure past this point is fatal: nothing is retried and no
       partial file is left behind. */
    skin_lut::run(&cfg).inspect_err(|e| error!("{e}"))
}
