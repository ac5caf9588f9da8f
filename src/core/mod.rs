pub mod controller;
pub mod input_adapter;

pub use controller::LightController;
pub use input_adapter::{keycode_to_key, translate_key, translate_window_event};
