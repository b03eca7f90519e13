// Optional linear -> display gamma remap for the diffuse channels.
// Visual: midtones lift; use it when the shader samples the LUT without an
// sRGB view and expects gamma-encoded values.

use crate::types::Rgb;

/// Display gamma the remap targets.
pub const DISPLAY_GAMMA: f32 = 2.2;

/// Raise each channel to 1/2.2.
#[inline]
pub fn linear_to_gamma(linear: Rgb) -> Rgb {
    linear.map(|c| c.powf(1.0 / DISPLAY_GAMMA))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_stay_put_and_midtones_lift() {
        let out = linear_to_gamma(Rgb::new(0.0, 0.5, 1.0));
        assert_eq!(out.r, 0.0);
        assert!((out.b - 1.0).abs() < 1e-6);
        assert!((out.g - 0.72974).abs() < 1e-4, "got {}", out.g);
    }
}
