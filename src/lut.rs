// Bakes the pre-integrated skin LUT.
// Layout of the finished texture:
//   x (u) -> N·L from -1 to 1 for RGB, raw N·H in [0,1) for alpha
//   y (v) -> surface curvature for RGB, roughness for alpha
// RGB holds the ring-integrated diffuse colour, A the compressed Beckmann lobe.

use crate::error::Error;
use crate::gamma::linear_to_gamma;
use crate::integrate::integrate_diffuse_ring;
use crate::specular::beckmann;
use crate::texture::Texture;
use crate::types::{Rgb, clamp_i32};
use rayon::prelude::*;

pub const DEFAULT_RESOLUTION: u32 = 128;
/// Largest square the generator accepts (the usual GPU 2-D texture limit).
pub const MAX_RESOLUTION: u32 = 16384;

/// Exponent that compresses the specular lobe into 8 bits.
pub const SPEC_EXPONENT: f32 = 0.1;
/// Scale applied after the exponent so the lobe peaks near mid-range.
pub const SPEC_SCALE: f32 = 0.5;

/// Knobs the generator honours; `Default` reproduces the classic 128² bake.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LutOptions {
    pub resolution: u32,
    pub gamma: bool,
}

impl Default for LutOptions {
    fn default() -> Self {
        Self { resolution: DEFAULT_RESOLUTION, gamma: false }
    }
}

/// Physical inputs of the diffuse term for one texel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiffuseParams {
    pub cos_incidence: f32,
    pub inverse_radius: f32,
}

/// Physical inputs of the specular term for one texel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpecularParams {
    pub cos_theta: f32,
    pub roughness: f32,
}

/// x -> N·L (lerp -1..1), y -> 2 / ((y+1)/res).
pub fn diffuse_params(x: u32, y: u32, resolution: u32) -> DiffuseParams {
    let res = resolution as f32;
    let t = x as f32 / res;
    DiffuseParams {
        cos_incidence: -1.0 + (1.0 - -1.0) * t,
        inverse_radius: 2.0 / ((y as f32 + 1.0) / res),
    }
}

/// x -> x/res (starts at exactly 0), y -> 1 - y/res.
/// Not the diffuse mapping: column 0 feeds cos_theta = 0 to the lobe.
pub fn specular_params(x: u32, y: u32, resolution: u32) -> SpecularParams {
    let res = resolution as f32;
    SpecularParams {
        cos_theta: x as f32 / res,
        roughness: 1.0 - y as f32 / res,
    }
}

/// Map [0,1] to a byte: round half up, clamp. NaN -> 0, +inf -> 255.
#[inline]
pub fn quantize(value: f32) -> u8 {
    // `as` saturates and sends NaN to 0; the clamp then bounds the range.
    clamp_i32((value * 255.0 + 0.5) as i32, 0, 255) as u8
}

/// Compressed specular response stored in alpha.
pub fn specular_response(p: SpecularParams) -> f32 {
    SPEC_SCALE * beckmann(p.cos_theta, p.roughness).powf(SPEC_EXPONENT)
}

/// Diffuse colour for one texel, optionally gamma encoded.
pub fn diffuse_color(p: DiffuseParams, gamma: bool) -> Rgb {
    let c = integrate_diffuse_ring(p.cos_incidence, p.inverse_radius);
    if gamma { linear_to_gamma(c) } else { c }
}

/// One finished RGBA8 texel. Pure: depends only on (x, y, options).
pub fn texel(x: u32, y: u32, opts: &LutOptions) -> [u8; 4] {
    let spec = specular_response(specular_params(x, y, opts.resolution));
    let diffuse = diffuse_color(diffuse_params(x, y, opts.resolution), opts.gamma);

    [quantize(diffuse.r), quantize(diffuse.g), quantize(diffuse.b), quantize(spec)]
}

fn check_resolution(opts: &LutOptions) -> Result<(), Error> {
    if opts.resolution == 0 || opts.resolution > MAX_RESOLUTION {
        return Err(Error::Args(format!(
            "resolution {} outside 1..={MAX_RESOLUTION}",
            opts.resolution
        )));
    }
    Ok(())
}

/// Bytes in a `res` x `res` RGBA8 grid, or `Error::Buffer` if that overflows.
pub fn buffer_len(res: u32) -> Result<usize, Error> {
    (res as usize)
        .checked_mul(res as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or_else(|| Error::Buffer(format!("{res}x{res} RGBA8 does not fit in memory")))
}

/// Fill the whole grid across the rayon pool. Each task owns one 4-byte
/// pixel slot.
pub fn generate(opts: &LutOptions) -> Result<Texture, Error> {
    check_resolution(opts)?;
    let res = opts.resolution;
    let mut rgba = vec![0u8; buffer_len(res)?];

    rgba.par_chunks_exact_mut(4).enumerate().for_each(|(i, px)| {
        let x = (i % res as usize) as u32;
        let y = (i / res as usize) as u32;
        px.copy_from_slice(&texel(x, y, opts));
    });

    Texture::from_rgba8(res, res, rgba)
}

/// Same grid, one texel at a time through `Texture::store`.
pub fn generate_serial(opts: &LutOptions) -> Result<Texture, Error> {
    check_resolution(opts)?;
    let res = opts.resolution;
    let mut texture = Texture::new(res, res);

    for y in 0..res {
        for x in 0..res {
            texture.store(x, y, texel(x, y, opts));
        }
        if y % 32 == 0 {
            log::debug!("lut: row {}/{}", y, res);
        }
    }
    Ok(texture)
}
