pub mod controller;
pub mod host;

pub use controller::*;
pub use host::*;
