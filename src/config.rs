// Command-line configuration.
// With no arguments the tool bakes the classic 128x128 LUT to
// PreIntegratedSkinLUT.dds in the current directory.

use crate::lut::{DEFAULT_RESOLUTION, LutOptions, MAX_RESOLUTION};
use crate::texture::ContainerFormat;
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT: &str = "PreIntegratedSkinLUT.dds";

#[derive(Parser, Debug)]
#[command(
    name = "skin-lut",
    about = "Bakes the pre-integrated skin scattering LUT (RGB diffuse, A specular)."
)]
pub struct Cli {
    /// Square texture size
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_RESOLUTION,
        value_parser = clap::value_parser!(u32).range(1..=MAX_RESOLUTION as i64)
    )]
    pub resolution: u32,

    /// Output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub out: PathBuf,

    /// Container (default: from the --out extension, else dds)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<ContainerFormat>,

    /// Keep row 0 at the top
    #[arg(long)]
    pub no_flip: bool,

    /// Gamma-encode the diffuse colour (1/2.2)
    #[arg(long)]
    pub gamma: bool,

    /// Generate on one thread
    #[arg(long)]
    pub serial: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub resolution: u32,
    pub out: PathBuf,
    pub format: ContainerFormat,
    pub flip: bool,
    pub gamma: bool,
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            out: PathBuf::from(DEFAULT_OUTPUT),
            format: ContainerFormat::Dds,
            flip: true,
            gamma: false,
            parallel: true,
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let format = cli.format.unwrap_or_else(|| ContainerFormat::from_path(&cli.out));
        Self {
            resolution: cli.resolution,
            out: cli.out,
            format,
            flip: !cli.no_flip,
            gamma: cli.gamma,
            parallel: !cli.serial,
        }
    }
}

impl Config {
    /// Parse a full argument list (program name first).
    pub fn try_from_args<I, T>(args: I) -> Result<Config, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Cli::try_parse_from(args).map(Config::from)
    }

    pub fn lut_options(&self) -> LutOptions {
        LutOptions { resolution: self.resolution, gamma: self.gamma }
    }
}
