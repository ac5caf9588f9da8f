mod color;

pub use color::{hsv_to_rgb, oscillating_color, CHANNEL_PHASES, OSCILLATION_PERIOD_MS};
