// Diffuse scattering integrated around a ring of the curved surface.
// Visual expectation: on a tightly curved surface the N·L terminator goes soft
// and reddish; on a flat surface it stays a plain cosine falloff.

use crate::scatter::scatter;
use crate::types::{clamp_f32, Rgb};
use std::f32::consts::PI;

/// Angular step around the ring, in radians (63 samples over [-π/2, π/2]).
pub const RING_STEP: f32 = 0.05;

/// Convolve the clamped cosine lobe with the skin profile around a ring.
///
/// `cos_incidence` is N·L for the centre point and must lie in [-1,1].
/// `skin_radius` scales the chord length between ring samples; the LUT passes
/// the inverse surface radius here. Result channels are a weighted average of
/// values in [0,1].
pub fn integrate_diffuse_ring(cos_incidence: f32, skin_radius: f32) -> Rgb {
    let theta = cos_incidence.acos();

    let mut total_light = Rgb::ZERO;
    let mut total_weight = Rgb::ZERO;

    // The step is accumulated, not multiplied, so the sample positions stay
    // exactly where the baked LUT put them.
    let mut a = -PI / 2.0;
    while a <= PI / 2.0 {
        let light = clamp_f32((theta + a).cos(), 0.0, 1.0);
        let distance = (2.0 * skin_radius * (a * 0.5).sin()).abs();
        let weight = scatter(distance);

        total_light += light * weight;
        total_weight += weight;
        a += RING_STEP;
    }

    total_light / total_weight
}
