use crate::grid::{Cell, Direction};
use crate::{
    CELL_SIZE, DEFAULT_MOVE_RATE, GRID_SIZE, MAX_BODY_LEN, MIN_MOVE_RATE, SCREEN_HEIGHT,
    SCREEN_SCALE, SCREEN_WIDTH, SPEED_UP_STEP,
};
use anyhow::{ensure, Result};
use typed_builder::TypedBuilder;

/// Immutable settings for one game.
///
/// Every field defaults to the crate level constants, so
/// `GameConfig::default()` is the stock game and tests only override what
/// they care about.
#[derive(Debug, Clone, PartialEq, TypedBuilder)]
pub struct GameConfig {
    #[builder(default = GRID_SIZE)]
    pub grid_size: u32,
    #[builder(default = CELL_SIZE)]
    pub cell_size: u32,
    #[builder(default = SCREEN_WIDTH)]
    pub screen_width: u32,
    #[builder(default = SCREEN_HEIGHT)]
    pub screen_height: u32,
    #[builder(default = SCREEN_SCALE)]
    pub scale: u32,
    /// Head cell at the start of a round; the field centre when unset.
    #[builder(default, setter(strip_option))]
    pub start: Option<Cell>,
    #[builder(default = Direction::Right)]
    pub start_direction: Direction,
    #[builder(default = DEFAULT_MOVE_RATE)]
    pub move_rate: f32,
    #[builder(default = SPEED_UP_STEP)]
    pub speed_up: f32,
    #[builder(default = MIN_MOVE_RATE)]
    pub min_move_rate: f32,
    #[builder(default = MAX_BODY_LEN)]
    pub max_body_len: usize,
    #[builder(default = "Snake".to_string())]
    pub title: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig::builder().build()
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.grid_size >= 3,
            "grid size must be at least 3, got {}",
            self.grid_size
        );
        ensure!(self.cell_size > 0, "cell size must be positive");
        ensure!(self.scale > 0, "scale must be positive");
        let field = self.field_pixels();
        ensure!(
            field <= self.screen_width && field <= self.screen_height,
            "a {0}x{0} field of {1}px cells does not fit in {2}x{3}",
            self.grid_size,
            self.cell_size,
            self.screen_width,
            self.screen_height
        );
        ensure!(
            self.start_cell().in_bounds(self.grid_size),
            "start cell {:?} is outside the field",
            self.start_cell()
        );
        ensure!(
            self.min_move_rate > 0.0 && self.min_move_rate <= self.move_rate,
            "move rate {} must not be below the floor {} (which must be positive)",
            self.move_rate,
            self.min_move_rate
        );
        ensure!(self.speed_up >= 0.0, "speed up step must not be negative");
        Ok(())
    }

    pub fn start_cell(&self) -> Cell {
        self.start.unwrap_or_else(|| {
            let mid = (self.grid_size / 2) as i32;
            Cell::new(mid, mid)
        })
    }

    /// Side length of the play field in pixels.
    pub fn field_pixels(&self) -> u32 {
        self.grid_size * self.cell_size
    }

    /// Top-left pixel of the play field, centred in the framebuffer.
    pub fn field_origin(&self) -> (u32, u32) {
        let field = self.field_pixels();
        (
            self.screen_width.saturating_sub(field) / 2,
            self.screen_height.saturating_sub(field) / 2,
        )
    }

    /// Number of body segments the snake may reach.
    ///
    /// Leaves room for the head and one free cell for food.
    pub fn body_capacity(&self) -> usize {
        let cells = (self.grid_size as usize).pow(2);
        self.max_body_len.min(cells.saturating_sub(2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        config.validate().unwrap();
        assert_eq!(config.start_cell(), Cell::new(10, 10));
        assert_eq!(config.field_origin(), (80, 80));
        assert_eq!(config.body_capacity(), MAX_BODY_LEN);
    }

    #[test]
    fn capacity_is_clamped_by_field_area() {
        let config = GameConfig::builder().grid_size(4).build();
        assert_eq!(config.body_capacity(), 14);
    }

    #[test]
    fn rejects_field_larger_than_screen() {
        let config = GameConfig::builder().grid_size(40).build();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_rate_below_floor() {
        let config = GameConfig::builder()
            .move_rate(0.01)
            .min_move_rate(0.05)
            .build();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_start_outside_field() {
        let config = GameConfig::builder().start(Cell::new(20, 0)).build();
        assert!(config.validate().is_err());
    }
}
