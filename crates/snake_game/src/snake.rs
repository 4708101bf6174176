use crate::grid::{Cell, Direction};

/// The snake's head.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub position: Cell,
    /// Where the head was before the latest step; the first segment moves here.
    pub last_position: Cell,
    /// Heading for the next step.
    pub direction: Direction,
    /// Heading of the step actually taken last. Turns are judged against this
    /// so that two quick turns between steps cannot fold the head back onto
    /// the neck.
    pub heading: Direction,
}

impl Player {
    pub fn new(start: Cell, direction: Direction) -> Self {
        Self {
            position: start,
            last_position: start,
            direction,
            heading: direction,
        }
    }

    /// Moves one cell forward, remembering the vacated cell.
    pub fn advance(&mut self) {
        self.last_position = self.position;
        self.position = self.position.step(self.direction);
        self.heading = self.direction;
    }

    pub fn reset(&mut self, start: Cell, direction: Direction) {
        *self = Player::new(start, direction);
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub position: Cell,
    pub last_position: Cell,
}

/// Trailing segments, ordered from the neck to the tail.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    segments: Vec<Segment>,
    capacity: usize,
}

impl Body {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            segments: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Shifts every segment into the cell vacated by the one ahead of it.
    ///
    /// `leader` is the cell the head just left.
    pub fn follow(&mut self, leader: Cell) {
        let mut vacated = leader;
        for segment in &mut self.segments {
            segment.last_position = segment.position;
            segment.position = vacated;
            vacated = segment.last_position;
        }
    }

    /// Appends a segment on top of the tail. Returns `false` when full.
    ///
    /// With no segments yet the new one sits on `leader`, the cell the head
    /// just left.
    pub fn grow(&mut self, leader: Cell) -> bool {
        if self.is_full() {
            return false;
        }
        let segment = match self.segments.last() {
            Some(tail) => *tail,
            None => Segment {
                position: leader,
                last_position: leader,
            },
        };
        self.segments.push(segment);
        true
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.segments.iter().any(|s| s.position == cell)
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.segments.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_records_last_position() {
        let mut player = Player::new(Cell::new(5, 5), Direction::Up);
        player.advance();
        assert_eq!(player.position, Cell::new(5, 4));
        assert_eq!(player.last_position, Cell::new(5, 5));
    }

    #[test]
    fn segments_trail_with_index_lag() {
        let mut player = Player::new(Cell::new(0, 0), Direction::Right);
        let mut body = Body::with_capacity(8);
        let mut head_trail = vec![player.position];

        for _ in 0..3 {
            player.advance();
            body.follow(player.last_position);
            assert!(body.grow(player.last_position));
            head_trail.push(player.position);
        }
        for _ in 0..6 {
            player.advance();
            body.follow(player.last_position);
            head_trail.push(player.position);
        }

        let n = head_trail.len();
        for (i, segment) in body.segments().iter().enumerate() {
            assert_eq!(segment.position, head_trail[n - 2 - i], "segment {i}");
        }
    }

    #[test]
    fn grow_stacks_on_tail() {
        let mut body = Body::with_capacity(4);
        assert!(body.grow(Cell::new(2, 2)));
        assert!(body.grow(Cell::new(9, 9)));
        assert_eq!(body.segments()[1].position, Cell::new(2, 2));
        body.follow(Cell::new(3, 2));
        assert_eq!(body.segments()[0].position, Cell::new(3, 2));
        assert_eq!(body.segments()[1].position, Cell::new(2, 2));
    }

    #[test]
    fn grow_refuses_past_capacity() {
        let mut body = Body::with_capacity(2);
        assert!(body.grow(Cell::new(0, 0)));
        assert!(body.grow(Cell::new(0, 0)));
        assert!(body.is_full());
        assert!(!body.grow(Cell::new(0, 0)));
        assert_eq!(body.len(), 2);
    }

    #[test]
    fn reset_restores_start() {
        let mut player = Player::new(Cell::new(1, 1), Direction::Down);
        player.advance();
        player.direction = Direction::Left;
        player.reset(Cell::new(1, 1), Direction::Down);
        assert_eq!(player, Player::new(Cell::new(1, 1), Direction::Down));
    }
}
