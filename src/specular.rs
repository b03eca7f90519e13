// Beckmann microfacet distribution for the specular lobe stored in alpha.

/// Beckmann NDF for N·H = `cos_theta` and roughness `m`.
///
/// Not guarded: `cos_theta == 0` or `m == 0` yields inf/NaN, which the LUT
/// quantizer clamps to a finite byte.
#[inline]
pub fn beckmann(cos_theta: f32, m: f32) -> f32 {
    let theta = cos_theta.acos();
    let ta = theta.tan();
    1.0 / (m * m * cos_theta.powf(4.0)) * (-(ta * ta) / (m * m)).exp()
}
