use glam::DVec3;

/// Linear RGB. Components are nominally in [0, 1] but are never clamped
/// while shading; only [`to_rgb8`] clamps.
pub type Color = DVec3;

pub const BLACK: Color = Color::ZERO;

pub const COLOR_MAX: f64 = 255.0;

/// Scale into 0..=255, clamp, and truncate each channel.
pub fn to_rgb8(color: Color) -> [u8; 3] {
    let c = (color * COLOR_MAX).clamp(Color::ZERO, Color::splat(COLOR_MAX));
    return [c.x as u8, c.y as u8, c.z as u8];
}
