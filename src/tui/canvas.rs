use textwrap::wrap;

use super::colors::Rgb;
use super::error::Result;
use super::geometry::{Bounds2D, Idx, Position, Rectangle};
use super::tuxel::Tuxel;

/// A 2d grid of `Tuxel`s that is drawn to and then handed to a `Renderer` as one frame.
pub(crate) struct Canvas {
    rows: Vec<Vec<Tuxel>>,
    rectangle: Rectangle,
}

impl Canvas {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        let rectangle = Rectangle(Idx(0, 0), Bounds2D(width, height));
        let rows = (0..height)
            .map(|y| (0..width).map(|x| Tuxel::new(Idx(x, y))).collect())
            .collect();
        Self { rows, rectangle }
    }

    pub(crate) fn rectangle(&self) -> Rectangle {
        self.rectangle.clone()
    }

    pub(crate) fn rows(&self) -> impl Iterator<Item = &[Tuxel]> {
        self.rows.iter().map(|row| row.as_slice())
    }

    #[cfg(test)]
    pub(crate) fn get(&self, idx: &Idx) -> Result<&Tuxel> {
        self.rectangle.contains_or_err(idx)?;
        Ok(&self.rows[idx.y()][idx.x()])
    }

    fn get_mut(&mut self, idx: &Idx) -> Result<&mut Tuxel> {
        self.rectangle.contains_or_err(idx)?;
        Ok(&mut self.rows[idx.y()][idx.x()])
    }

    fn check(&self, r: &Rectangle) -> Result<()> {
        if r.width() == 0 || r.height() == 0 {
            return Ok(());
        }
        self.rectangle.contains_or_err(&r.0)?;
        self.rectangle
            .contains_or_err(&r.relative_idx(&Position::BottomRight))
    }

    fn tuxels_mut<'a>(&'a mut self, r: &Rectangle) -> impl Iterator<Item = &'a mut Tuxel> {
        let (x, width) = (r.x(), r.width());
        self.rows
            .iter_mut()
            .skip(r.y())
            .take(r.height())
            .flat_map(move |row| row.iter_mut().skip(x).take(width))
    }

    pub(crate) fn fill(&mut self, r: &Rectangle, c: char) -> Result<()> {
        self.check(r)?;
        for tuxel in self.tuxels_mut(r) {
            tuxel.set_content(c);
        }
        Ok(())
    }

    pub(crate) fn colorize(
        &mut self,
        r: &Rectangle,
        fgcolor: Option<Rgb>,
        bgcolor: Option<Rgb>,
    ) -> Result<()> {
        self.check(r)?;
        for tuxel in self.tuxels_mut(r) {
            tuxel.set_colors(fgcolor.clone(), bgcolor.clone());
        }
        Ok(())
    }

    pub(crate) fn draw_border(&mut self, r: &Rectangle) -> Result<()> {
        let box_corner = boxy::Char::upper_left(boxy::Weight::Doubled);
        let box_horizontal = boxy::Char::horizontal(boxy::Weight::Doubled);
        let box_vertical = boxy::Char::vertical(boxy::Weight::Doubled);
        if r.width() < 2 || r.height() < 2 {
            // can only draw a border around at least a 2x2 rectangle
            return Ok(());
        }
        self.check(r)?;

        for x in 1..r.width() - 1 {
            self.get_mut(&r.relative_idx(&Position::Idx(x, 0)))?
                .set_content(box_horizontal.clone().into());
            self.get_mut(&r.relative_idx(&Position::Idx(x, r.height() - 1)))?
                .set_content(box_horizontal.clone().into());
        }
        for y in 1..r.height() - 1 {
            self.get_mut(&r.relative_idx(&Position::Idx(0, y)))?
                .set_content(box_vertical.clone().into());
            self.get_mut(&r.relative_idx(&Position::Idx(r.width() - 1, y)))?
                .set_content(box_vertical.clone().into());
        }

        self.get_mut(&r.relative_idx(&Position::TopLeft))?
            .set_content(box_corner.clone().into());
        self.get_mut(&r.relative_idx(&Position::TopRight))?
            .set_content(box_corner.clone().rotate_cw(1).into());
        self.get_mut(&r.relative_idx(&Position::BottomRight))?
            .set_content(box_corner.clone().rotate_cw(2).into());
        self.get_mut(&r.relative_idx(&Position::BottomLeft))?
            .set_content(box_corner.rotate_ccw(1).into());
        Ok(())
    }

    /// Write text horizontally centered on the middle row of the rectangle, truncated to its
    /// width.
    pub(crate) fn write_center(&mut self, r: &Rectangle, text: &str) -> Result<()> {
        if r.width() == 0 || r.height() == 0 {
            return Ok(());
        }
        self.check(r)?;
        let chars: Vec<char> = text.chars().take(r.width()).collect();
        let x_offset = (r.width() - chars.len()) / 2;
        let y_offset = (r.height() - 1) / 2;
        for (i, c) in chars.into_iter().enumerate() {
            self.get_mut(&r.relative_idx(&Position::Idx(x_offset + i, y_offset)))?
                .set_content(c);
        }
        Ok(())
    }

    /// Word-wrap text to the width of the rectangle and write it top to bottom; lines that don't
    /// fit are dropped.
    pub(crate) fn write_wrapped(&mut self, r: &Rectangle, text: &str) -> Result<()> {
        if r.width() == 0 || r.height() == 0 {
            return Ok(());
        }
        self.check(r)?;
        for (y, line) in wrap(text, r.width()).iter().take(r.height()).enumerate() {
            for (x, c) in line.chars().take(r.width()).enumerate() {
                self.get_mut(&r.relative_idx(&Position::Idx(x, y)))?
                    .set_content(c);
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.rows {
            for tuxel in row {
                write!(f, "{}", tuxel)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn rectangle(x: usize, y: usize, width: usize, height: usize) -> Rectangle {
        Rectangle(Idx(x, y), Bounds2D(width, height))
    }

    fn content(canvas: &Canvas, x: usize, y: usize) -> char {
        canvas.get(&Idx(x, y)).map(|t| t.content()).unwrap_or('!')
    }

    #[test]
    fn new_canvas_is_blank() {
        let canvas = Canvas::new(3, 2);
        assert_eq!(format!("{}", canvas), "   \n   \n");
        assert_eq!(canvas.get(&Idx(2, 1)).map(|t| t.coordinates()).ok(), Some((2, 1)));
    }

    #[test]
    fn border_corners_and_edges() -> Result<()> {
        let mut canvas = Canvas::new(6, 4);
        canvas.draw_border(&rectangle(1, 1, 4, 3))?;
        let corner = boxy::Char::upper_left(boxy::Weight::Doubled);
        let top_left: char = corner.clone().into();
        let top_right: char = corner.clone().rotate_cw(1).into();
        let bottom_right: char = corner.clone().rotate_cw(2).into();
        let bottom_left: char = corner.rotate_ccw(1).into();
        let horizontal: char = boxy::Char::horizontal(boxy::Weight::Doubled).into();
        let vertical: char = boxy::Char::vertical(boxy::Weight::Doubled).into();
        assert_eq!(content(&canvas, 1, 1), top_left);
        assert_eq!(content(&canvas, 4, 1), top_right);
        assert_eq!(content(&canvas, 4, 3), bottom_right);
        assert_eq!(content(&canvas, 1, 3), bottom_left);
        assert_eq!(content(&canvas, 2, 1), horizontal);
        assert_eq!(content(&canvas, 3, 3), horizontal);
        assert_eq!(content(&canvas, 1, 2), vertical);
        assert_eq!(content(&canvas, 2, 2), ' ');
        assert_eq!(content(&canvas, 0, 0), ' ');
        Ok(())
    }

    #[test]
    fn out_of_bounds_rectangle_is_rejected() {
        let mut canvas = Canvas::new(4, 4);
        assert!(canvas.fill(&rectangle(2, 2, 3, 1), 'x').is_err());
        assert!(canvas.draw_border(&rectangle(0, 3, 2, 2)).is_err());
        assert!(canvas.fill(&rectangle(0, 0, 4, 4), 'x').is_ok());
    }

    #[test]
    fn write_center_truncates() -> Result<()> {
        let mut canvas = Canvas::new(7, 3);
        let r = canvas.rectangle();
        canvas.write_center(&r, "2048")?;
        assert_eq!(format!("{}", canvas), "       \n 2048  \n       \n");
        canvas.write_center(&rectangle(0, 0, 3, 1), "131072")?;
        assert_eq!(format!("{}", canvas).lines().next(), Some("131    "));
        Ok(())
    }

    #[test]
    fn write_wrapped_breaks_on_words() -> Result<()> {
        let mut canvas = Canvas::new(10, 2);
        let r = canvas.rectangle();
        canvas.write_wrapped(&r, "terminal too small to play")?;
        assert_eq!(format!("{}", canvas), "terminal  \ntoo small \n");
        Ok(())
    }

    #[test]
    fn colorize_keeps_unset_colors() -> Result<()> {
        let mut canvas = Canvas::new(2, 1);
        let r = canvas.rectangle();
        canvas.colorize(&r, None, Some(Rgb::new(1, 2, 3)))?;
        canvas.colorize(&r, Some(Rgb::new(4, 5, 6)), None)?;
        let (fg, bg) = canvas.get(&Idx(1, 0))?.colors();
        assert_eq!(fg, Some(Rgb::new(4, 5, 6)));
        assert_eq!(bg, Some(Rgb::new(1, 2, 3)));
        Ok(())
    }
}
