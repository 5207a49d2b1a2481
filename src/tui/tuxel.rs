use super::colors::Rgb;
use super::geometry::Idx;

/// A single character cell of the canvas along with its colors.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Tuxel {
    content: char,
    idx: Idx,
    fgcolor: Option<Rgb>,
    bgcolor: Option<Rgb>,
}

impl Tuxel {
    pub(crate) fn new(idx: Idx) -> Self {
        Tuxel {
            content: ' ',
            fgcolor: None,
            bgcolor: None,
            idx,
        }
    }

    pub(crate) fn set_content(&mut self, c: char) {
        self.content = c;
    }

    pub(crate) fn coordinates(&self) -> (usize, usize) {
        (self.idx.0, self.idx.1)
    }

    pub(crate) fn content(&self) -> char {
        self.content
    }

    pub(crate) fn set_colors(&mut self, fgcolor: Option<Rgb>, bgcolor: Option<Rgb>) {
        if fgcolor.is_some() {
            self.fgcolor = fgcolor;
        }
        if bgcolor.is_some() {
            self.bgcolor = bgcolor;
        }
    }

    pub(crate) fn colors(&self) -> (Option<Rgb>, Option<Rgb>) {
        (self.fgcolor.clone(), self.bgcolor.clone())
    }
}

impl std::fmt::Display for Tuxel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content())
    }
}
