use crate::grid::Direction;
use snake_common::key::Key;

/// Keys currently held, plus keys that went down since the last frame.
///
/// Fed from the frontend's key events. Levels are read through
/// [`Keyboard::is_down`]; edges through [`Keyboard::was_pressed`].
#[derive(Debug, Clone, Default)]
pub struct Keyboard {
    held: [bool; Key::COUNT],
    pressed: [bool; Key::COUNT],
}

impl Keyboard {
    pub fn set_key(&mut self, key: Key, is_down: bool) {
        if key == Key::None {
            return;
        }
        let idx = key.index();
        if is_down && !self.held[idx] {
            self.pressed[idx] = true;
        }
        self.held[idx] = is_down;
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.held[key.index()]
    }

    pub fn was_pressed(&self, key: Key) -> bool {
        self.pressed[key.index()]
    }

    /// Forgets this frame's edges. Held keys stay held.
    pub fn end_frame(&mut self) {
        self.pressed = [false; Key::COUNT];
    }

    pub fn release_all(&mut self) {
        self.held = [false; Key::COUNT];
        self.pressed = [false; Key::COUNT];
    }
}

/// Per-frame player intents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub confirm: bool,
    pub pause: bool,
}

impl InputState {
    pub fn reset(&mut self) {
        *self = InputState::default();
    }

    /// Reads the intents from the keyboard. Each direction has an arrow and a
    /// WASD binding.
    pub fn poll(&mut self, keyboard: &Keyboard) {
        self.left = keyboard.is_down(Key::Left) || keyboard.is_down(Key::A);
        self.right = keyboard.is_down(Key::Right) || keyboard.is_down(Key::D);
        self.up = keyboard.is_down(Key::Up) || keyboard.is_down(Key::W);
        self.down = keyboard.is_down(Key::Down) || keyboard.is_down(Key::S);
        self.confirm = keyboard.is_down(Key::Enter);
        self.pause = keyboard.was_pressed(Key::P);
    }

    /// Requested headings in priority order: left, right, up, down.
    pub fn requested_directions(&self) -> impl Iterator<Item = Direction> {
        [
            (self.left, Direction::Left),
            (self.right, Direction::Right),
            (self.up, Direction::Up),
            (self.down, Direction::Down),
        ]
        .into_iter()
        .filter_map(|(wanted, dir)| wanted.then_some(dir))
    }

    /// Next heading given the heading of the last step taken and the one
    /// currently queued.
    ///
    /// The first requested heading that does not reverse `heading` wins;
    /// with no acceptable request `queued` is kept.
    pub fn steer(&self, heading: Direction, queued: Direction) -> Direction {
        self.requested_directions()
            .find(|&wanted| heading.turn(wanted) == wanted)
            .unwrap_or(queued)
    }
}
