/// Frontend-independent key identifiers.
///
/// Frontends translate their native keycodes into this enum before handing
/// them to an [`App`](crate::app::App).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Key {
    W,
    A,
    S,
    D,
    P,
    Left,
    Right,
    Up,
    Down,
    Enter,
    Escape,
    None,
}

impl Key {
    pub const COUNT: usize = 12;

    /// Dense index, used for fixed-size key tables.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::Key;

    #[test]
    fn indices_are_dense() {
        assert_eq!(Key::W.index(), 0);
        assert_eq!(Key::None.index(), Key::COUNT - 1);
    }
}
