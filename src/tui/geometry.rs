use super::error::{InnerError, Result};

/// Idx encapsulates the x and y coordinates of a Tuxel on the canvas.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Idx(pub usize, pub usize);

impl Idx {
    #[inline(always)]
    pub(crate) fn x(&self) -> usize {
        self.0
    }

    #[inline(always)]
    pub(crate) fn y(&self) -> usize {
        self.1
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Bounds2D(pub usize, pub usize);

impl Bounds2D {
    #[inline(always)]
    pub(crate) fn width(&self) -> usize {
        self.0
    }

    #[inline(always)]
    pub(crate) fn height(&self) -> usize {
        self.1
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Rectangle(pub Idx, pub Bounds2D);

impl Rectangle {
    #[inline(always)]
    pub(crate) fn width(&self) -> usize {
        self.1.width()
    }

    #[inline(always)]
    pub(crate) fn height(&self) -> usize {
        self.1.height()
    }

    #[inline(always)]
    pub(crate) fn x(&self) -> usize {
        self.0 .0
    }

    #[inline(always)]
    pub(crate) fn y(&self) -> usize {
        self.0 .1
    }

    #[inline(always)]
    pub(crate) fn relative_idx(&self, pos: &Position) -> Idx {
        let (x, y) = match pos {
            Position::TopLeft => (0, 0),
            Position::TopRight => (self.width() - 1, 0),
            Position::BottomLeft => (0, self.height() - 1),
            Position::BottomRight => (self.width() - 1, self.height() - 1),
            Position::Idx(x, y) => (*x, *y),
        };
        Idx(self.x() + x, self.y() + y)
    }

    /// The first x and y coordinates past the rectangle.
    #[inline(always)]
    pub(crate) fn extents(&self) -> (usize, usize) {
        (self.0 .0 + self.1 .0, self.0 .1 + self.1 .1)
    }

    /// Shrink the rectangle by `margin` on every side.
    pub(crate) fn inset(&self, margin: usize) -> Rectangle {
        Rectangle(
            Idx(self.x() + margin, self.y() + margin),
            Bounds2D(
                self.width().saturating_sub(2 * margin),
                self.height().saturating_sub(2 * margin),
            ),
        )
    }

    #[inline(always)]
    pub(crate) fn contains_or_err(&self, idx: &Idx) -> Result<()> {
        if idx.x() < self.x() || idx.x() >= self.x() + self.width() {
            return Err(InnerError::OutOfBoundsX(idx.x()).into());
        }
        if idx.y() < self.y() || idx.y() >= self.y() + self.height() {
            return Err(InnerError::OutOfBoundsY(idx.y()).into());
        }
        Ok(())
    }

    /// Whether `other` lies entirely within this rectangle.
    pub(crate) fn encloses(&self, other: &Rectangle) -> bool {
        let (x_extent, y_extent) = other.extents();
        let (max_x, max_y) = self.extents();
        other.x() >= self.x() && other.y() >= self.y() && x_extent <= max_x && y_extent <= max_y
    }
}

pub(crate) enum Position {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Idx(usize, usize),
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::*;

    fn rectangle(x: usize, y: usize, width: usize, height: usize) -> Rectangle {
        Rectangle(Idx(x, y), Bounds2D(width, height))
    }

    #[rstest]
    #[case::top_left(Position::TopLeft, Idx(2, 3))]
    #[case::top_right(Position::TopRight, Idx(6, 3))]
    #[case::bottom_left(Position::BottomLeft, Idx(2, 5))]
    #[case::bottom_right(Position::BottomRight, Idx(6, 5))]
    #[case::relative(Position::Idx(1, 1), Idx(3, 4))]
    fn relative_idx(#[case] pos: Position, #[case] expected: Idx) {
        assert_eq!(rectangle(2, 3, 5, 3).relative_idx(&pos), expected);
    }

    #[rstest]
    #[case::one(rectangle(0, 0, 10, 5), 1, rectangle(1, 1, 8, 3))]
    #[case::too_small(rectangle(4, 4, 1, 1), 1, rectangle(5, 5, 0, 0))]
    fn inset(#[case] initial: Rectangle, #[case] margin: usize, #[case] expected: Rectangle) {
        assert_eq!(initial.inset(margin), expected);
    }

    #[rstest]
    #[case::inside(Idx(3, 3), true)]
    #[case::left_edge(Idx(2, 3), true)]
    #[case::past_right_edge(Idx(7, 3), false)]
    #[case::above(Idx(3, 2), false)]
    #[case::past_bottom_edge(Idx(3, 6), false)]
    fn contains(#[case] idx: Idx, #[case] expected: bool) {
        assert_eq!(rectangle(2, 3, 5, 3).contains_or_err(&idx).is_ok(), expected);
    }

    #[rstest]
    #[case::same(rectangle(0, 0, 10, 10), true)]
    #[case::inner(rectangle(2, 2, 3, 3), true)]
    #[case::overhanging(rectangle(8, 0, 3, 3), false)]
    fn encloses(#[case] other: Rectangle, #[case] expected: bool) {
        assert_eq!(rectangle(0, 0, 10, 10).encloses(&other), expected);
    }
}
