use std::f32::consts::{FRAC_PI_3, PI};

use glam::Vec3;

/// Period divisor of the light color oscillation, in milliseconds
pub const OSCILLATION_PERIOD_MS: f32 = 3000.0;

/// Phase offset of each channel relative to red
pub const CHANNEL_PHASES: [f32; 3] = [0.0, FRAC_PI_3, 2.0 * FRAC_PI_3];

pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [f32; 3] {
    let c = v * s;
    let h_prime = (h * 6.0) % 6.0;
    let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h_prime as i32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [r + m, g + m, b + m]
}

/// Diffuse color of light `index` out of `count` after `elapsed_ms`
///
/// Lights are spread evenly over half a period so neighbours never share a
/// color. Channels peak at `2 / 1.8`, slightly above 1.
pub fn oscillating_color(elapsed_ms: f32, index: usize, count: usize) -> Vec3 {
    let spread = if count == 0 {
        0.0
    } else {
        index as f32 / count as f32 * PI
    };
    let base = elapsed_ms / OSCILLATION_PERIOD_MS + spread;
    let channel = |phase: f32| ((base + phase).sin() + 1.0) / 1.8;

    Vec3::new(
        channel(CHANNEL_PHASES[0]),
        channel(CHANNEL_PHASES[1]),
        channel(CHANNEL_PHASES[2]),
    )
}
