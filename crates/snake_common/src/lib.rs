pub mod app;
pub mod color;
pub mod key;

pub use color::Color;
