use crate::config::GameConfig;

/// Fixed-timestep accumulator that turns frame time into grid steps.
///
/// The renderer runs at whatever rate the frontend drives it; the snake only
/// moves once `move_rate` seconds have piled up.
#[derive(Debug, Clone, PartialEq)]
pub struct StepTimer {
    accumulator: f32,
    move_rate: f32,
    default_rate: f32,
    speed_up: f32,
    min_rate: f32,
}

impl StepTimer {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            accumulator: 0.0,
            move_rate: config.move_rate,
            default_rate: config.move_rate,
            speed_up: config.speed_up,
            min_rate: config.min_move_rate,
        }
    }

    /// Adds `dt` seconds and reports whether a grid step is due.
    ///
    /// At most one step is reported per call; the accumulator is emptied when
    /// it fires.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.accumulator += dt.max(0.0);
        if self.accumulator >= self.move_rate {
            self.accumulator = 0.0;
            true
        } else {
            false
        }
    }

    /// Shortens the step interval, never past the floor.
    pub fn speed_up(&mut self) {
        self.move_rate = (self.move_rate - self.speed_up).max(self.min_rate);
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.move_rate = self.default_rate;
    }

    pub fn move_rate(&self) -> f32 {
        self.move_rate
    }

    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }
}
