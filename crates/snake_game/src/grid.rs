/// A discrete position on the play field.
///
/// `x` grows to the right and `y` grows downwards, matching screen space.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step towards `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Whether the cell lies on an `n` by `n` field.
    pub fn in_bounds(self, n: u32) -> bool {
        let n = n as i32;
        (0..n).contains(&self.x) && (0..n).contains(&self.y)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    /// Heading after asking to face `wanted`.
    ///
    /// Reversing straight into the neck is refused, the current heading is
    /// kept instead.
    pub fn turn(self, wanted: Direction) -> Direction {
        if wanted == self.opposite() {
            self
        } else {
            wanted
        }
    }
}
