pub mod app;
pub mod config;
mod font;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod render;
pub mod snake;
pub mod timer;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use app::SnakeApp;
pub use config::GameConfig;
pub use game::{Game, Scene, StepOutcome};
pub use grid::{Cell, Direction};

use snake_common::Color;

/// Cells per side of the square play field.
pub const GRID_SIZE: u32 = 20;
/// Pixels per grid cell.
pub const CELL_SIZE: u32 = 32;
/// Logical framebuffer width in pixels.
pub const SCREEN_WIDTH: u32 = 800;
/// Logical framebuffer height in pixels.
pub const SCREEN_HEIGHT: u32 = 800;
/// Default integer scaling factor for the SDL2 frontend.
pub const SCREEN_SCALE: u32 = 1;

/// Seconds per grid step at the start of a round.
pub const DEFAULT_MOVE_RATE: f32 = 0.125;
/// Amount the move rate shrinks by for every food eaten.
pub const SPEED_UP_STEP: f32 = 0.005;
/// The move rate never drops below this.
pub const MIN_MOVE_RATE: f32 = 0.05;
/// Upper bound on trailing body segments.
pub const MAX_BODY_LEN: usize = 100;

pub const BACKGROUND_COLOR: Color = Color::new_rgb(71, 49, 68);
pub const FIELD_COLOR: Color = Color::new_rgb(52, 36, 50);
pub const GRID_LINE_COLOR: Color = Color::new_rgb(88, 64, 85);
pub const HEAD_COLOR: Color = Color::WHITE;
pub const BODY_COLOR: Color = Color::LIGHT_GRAY;
pub const FOOD_COLOR: Color = Color::RED;
pub const TEXT_COLOR: Color = Color::LIGHT_GRAY;
