//! Brand palette and color blending used by the icon renderer.

use image::{Rgb, Rgba};

pub type Color = Rgb<u8>;

/// Outer edge of the background disc (#121412)
pub const DARK_BG: Color = Rgb([18, 20, 18]);
/// Center of the background disc (#282A28)
pub const DARK_BG_LIGHT: Color = Rgb([40, 42, 40]);
/// Bottom of each bar (#1DB954)
pub const BRAND_GREEN: Color = Rgb([29, 185, 84]);
/// Top of each bar and the rounded caps (#1ED760)
pub const BRAND_GREEN_LIGHT: Color = Rgb([30, 215, 96]);

/// Linear blend of two channel values, truncated toward zero.
/// `t` is clamped to `0.0..=1.0`.
pub fn lerp(a: u8, b: u8, t: f32) -> u8 {
    let t = t.clamp(0.0, 1.0);
    (a as f32 + (b as f32 - a as f32) * t) as u8
}

/// Per-channel `lerp` between two colors.
pub fn mix(a: Color, b: Color, t: f32) -> Color {
    Rgb([
        lerp(a[0], b[0], t),
        lerp(a[1], b[1], t),
        lerp(a[2], b[2], t),
    ])
}

pub fn opaque(color: Color) -> Rgba<u8> {
    Rgba([color[0], color[1], color[2], 255])
}
