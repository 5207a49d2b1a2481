use palette::rgb::Rgb as PaletteRgb;
use palette::stimulus::FromStimulus;
use palette::{Clamp, FromColor, Lch, Lighten, Srgb};

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Rgb {
    color: PaletteRgb,
}

impl Rgb {
    pub(crate) fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            color: PaletteRgb::new(
                f32::from_stimulus(r),
                f32::from_stimulus(g),
                f32::from_stimulus(b),
            ),
        }
    }

    #[inline(always)]
    pub(crate) fn r(&self) -> u8 {
        u8::from_stimulus(self.color.red)
    }

    #[inline(always)]
    pub(crate) fn g(&self) -> u8 {
        u8::from_stimulus(self.color.green)
    }

    #[inline(always)]
    pub(crate) fn b(&self) -> u8 {
        u8::from_stimulus(self.color.blue)
    }

    /// Lighten the color by the given factor, capped at 1.0.
    pub(crate) fn lighten(&self, factor: f32) -> Rgb {
        let factor = if factor > 1.0 { 1.0 } else { factor };

        let lch: Lch = Lch::from_color(self.color);
        let lighter: Srgb = Srgb::from_color(lch.lighten(factor));
        Self {
            color: lighter.clamp(),
        }
    }
}

impl From<Srgb<u8>> for Rgb {
    fn from(c: Srgb<u8>) -> Rgb {
        Rgb::new(c.red, c.green, c.blue)
    }
}

impl From<Rgb> for crossterm::style::Color {
    fn from(f: Rgb) -> crossterm::style::Color {
        crossterm::style::Color::Rgb {
            r: f.r(),
            g: f.g(),
            b: f.b(),
        }
    }
}
