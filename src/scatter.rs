// Skin diffusion profile: a sum of six Gaussians per colour channel.
// Visual expectation: red light travels far under the skin, blue barely moves,
// so a blurred lighting edge bleeds red.

use crate::types::Rgb;
use std::f32::consts::PI;

/// Every variance in the table is widened by this factor before evaluation.
pub const VARIANCE_SCALE: f32 = 1.414;

/// (variance, colour weight) pairs from the GPU Gems 3 skin model,
/// fitted to measured skin samples.
pub static SKIN_PROFILE: [(f32, Rgb); 6] = [
    (0.0064, Rgb::new(0.233, 0.455, 0.649)),
    (0.0484, Rgb::new(0.100, 0.336, 0.344)),
    (0.1870, Rgb::new(0.118, 0.198, 0.000)),
    (0.5670, Rgb::new(0.113, 0.007, 0.007)),
    (1.9900, Rgb::new(0.358, 0.004, 0.000)),
    (7.4100, Rgb::new(0.078, 0.000, 0.000)),
];

/// Normal distribution with variance `v` evaluated at distance `r`.
/// `v` must be > 0; `r` may be anything (including 0).
#[inline]
pub fn gaussian(v: f32, r: f32) -> f32 {
    1.0 / (2.0 * PI * v).sqrt() * (-(r * r) / (2.0 * v)).exp()
}

/// How much light arriving `r` units away reaches the shaded point.
pub fn scatter(r: f32) -> Rgb {
    let mut weight = Rgb::ZERO;
    for &(variance, color) in SKIN_PROFILE.iter() {
        weight += gaussian(variance * VARIANCE_SCALE, r) * color;
    }
    weight
}
