use crate::config::GameConfig;
use crate::game::Game;
use crate::input::{InputState, Keyboard};
use crate::render::render;
use anyhow::Result;
use snake_common::app::App;
use snake_common::key::Key;
use std::time::Duration;

/// Frames per second, recomputed once every second of wall time.
#[derive(Debug, Default)]
pub struct FpsCounter {
    frames: u32,
    elapsed: Duration,
    fps: u32,
}

impl FpsCounter {
    pub fn tick(&mut self, delta: Duration) -> u32 {
        self.frames += 1;
        self.elapsed += delta;
        if self.elapsed >= Duration::from_secs(1) {
            self.fps = (self.frames as f64 / self.elapsed.as_secs_f64()).round() as u32;
            self.frames = 0;
            self.elapsed = Duration::ZERO;
        }
        self.fps
    }
}

/// Frontend-facing wrapper around [`Game`].
///
/// Implements the shared `App` trait so any frontend can host the game.
pub struct SnakeApp {
    should_exit: bool,
    keyboard: Keyboard,
    input: InputState,
    fps: FpsCounter,
    pub game: Game,
}

impl SnakeApp {
    pub fn new(config: GameConfig) -> Result<Self> {
        Ok(Self::with_game(Game::new(config)?))
    }

    pub fn with_game(game: Game) -> Self {
        Self {
            should_exit: false,
            keyboard: Keyboard::default(),
            input: InputState::default(),
            fps: FpsCounter::default(),
            game,
        }
    }
}

impl App for SnakeApp {
    fn init(&mut self) {
        let config = self.game.config();
        log::info!(
            "Snake init: {0}x{0} grid, {1}px cells, move rate {2}s",
            config.grid_size,
            config.cell_size,
            config.move_rate
        );
    }

    fn update(&mut self, delta: Duration, screen_state: &mut [u8]) {
        self.input.reset();
        self.input.poll(&self.keyboard);

        self.game.update(delta.as_secs_f32(), &self.input);

        let fps = self.fps.tick(delta);
        render(&self.game, Some(fps), screen_state);

        self.keyboard.end_frame();
    }

    fn handle_key_event(&mut self, key: Key, is_down: bool) {
        if key == Key::Escape && is_down {
            self.should_exit = true;
            return;
        }
        self.keyboard.set_key(key, is_down);
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn exit(&mut self) {
        log::info!("Snake exit, final score {}", self.game.score());
        self.keyboard.release_all();
    }

    fn width(&self) -> u32 {
        self.game.config().screen_width
    }

    fn height(&self) -> u32 {
        self.game.config().screen_height
    }

    fn scale(&self) -> u32 {
        self.game.config().scale
    }

    fn title(&self) -> String {
        self.game.config().title.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Scene;
    use crate::grid::Direction;

    const FRAME: Duration = Duration::from_micros(16_667);

    fn app() -> (SnakeApp, Vec<u8>) {
        let app = SnakeApp::with_game(Game::with_seed(GameConfig::default(), 5).unwrap());
        let screen = vec![0u8; (app.width() * app.height() * 3) as usize];
        (app, screen)
    }

    #[test]
    fn plays_from_the_first_frame_and_steers() {
        let (mut app, mut screen) = app();
        app.init();
        assert_eq!(app.game.scene(), Scene::Play);

        app.update(FRAME, &mut screen);
        assert!(app.game.food().alive);

        app.handle_key_event(Key::W, true);
        app.update(FRAME, &mut screen);
        assert_eq!(app.game.player().direction, Direction::Up);
    }

    #[test]
    fn p_toggles_pause_once_per_press() {
        let (mut app, mut screen) = app();

        app.handle_key_event(Key::P, true);
        app.update(FRAME, &mut screen);
        assert_eq!(app.game.scene(), Scene::Pause);
        // Still held: no toggle back.
        app.update(FRAME, &mut screen);
        assert_eq!(app.game.scene(), Scene::Pause);

        app.handle_key_event(Key::P, false);
        app.handle_key_event(Key::P, true);
        app.update(FRAME, &mut screen);
        assert_eq!(app.game.scene(), Scene::Play);
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = GameConfig::builder().grid_size(0).build();
        assert!(SnakeApp::new(config).is_err());
        assert!(SnakeApp::new(GameConfig::default()).is_ok());
    }

    #[test]
    fn escape_requests_exit() {
        let (mut app, _) = app();
        assert!(!app.should_exit());
        app.handle_key_event(Key::Escape, true);
        assert!(app.should_exit());
    }

    #[test]
    fn reports_configured_window() {
        let (app, _) = app();
        assert_eq!((app.width(), app.height(), app.scale()), (800, 800, 1));
        assert_eq!(app.title(), "Snake");
    }

    #[test]
    fn fps_counter_averages_over_a_second() {
        let mut counter = FpsCounter::default();
        let mut fps = 0;
        for _ in 0..59 {
            fps = counter.tick(FRAME);
        }
        assert_eq!(fps, 0);
        fps = counter.tick(FRAME);
        assert_eq!(fps, 60);
    }
}
