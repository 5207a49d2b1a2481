pub(crate) mod auto;
pub(crate) mod board;
pub(crate) mod grid;
pub(crate) mod history;

/// Direction represents one of the four moves that can be applied to a board.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) enum Direction {
    #[default]
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions in the order the auto-player evaluates them.
    pub(crate) const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Number of clockwise quarter turns applied before (and after) the canonical left-move.
    /// The two values always sum to a full turn.
    #[inline(always)]
    pub(crate) fn rotations(&self) -> (usize, usize) {
        match self {
            Self::Left => (0, 0),
            Self::Right => (2, 2),
            Self::Up => (3, 1),
            Self::Down => (1, 3),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        };
        write!(f, "{}", s)
    }
}
