//! Stroke opacity for colour-only surfaces.
//!
//! Terminal cells have no alpha channel, so a partly transparent stroke is
//! drawn in a colour blended toward the background in Oklch space, where the
//! fade stays perceptually even.

use std::f64::consts::PI;

use ratatui::style::Color;

/// Perceptual lightness, chroma and hue (radians).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Oklch {
    pub fn from_srgb(r: u8, g: u8, b: u8) -> Self {
        let [r, g, b] = [r, g, b].map(|v| srgb_to_linear(f64::from(v) / 255.0));

        let l = (0.4122214708 * r + 0.5363325363 * g + 0.0514459929 * b).cbrt();
        let m = (0.2119034982 * r + 0.6806995451 * g + 0.1073969566 * b).cbrt();
        let s = (0.0883024619 * r + 0.2817188376 * g + 0.6299787005 * b).cbrt();

        let lab_l = 0.2104542553 * l + 0.7936177850 * m - 0.0040720468 * s;
        let lab_a = 1.9779984951 * l - 2.4285922050 * m + 0.4505937099 * s;
        let lab_b = 0.0259040371 * l + 0.7827717662 * m - 0.8086757660 * s;

        let c = lab_a.hypot(lab_b);
        let h = if c < 1e-8 { 0.0 } else { lab_b.atan2(lab_a) };

        Self { l: lab_l, c, h }
    }

    pub fn to_srgb(self) -> (u8, u8, u8) {
        let a = self.c * self.h.cos();
        let b = self.c * self.h.sin();

        let l = (self.l + 0.3963377774 * a + 0.2158037573 * b).powi(3);
        let m = (self.l - 0.1055613458 * a - 0.0638541728 * b).powi(3);
        let s = (self.l - 0.0894841775 * a - 1.2914855480 * b).powi(3);

        let r = 4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s;
        let g = -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s;
        let b = -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s;

        let to_u8 = |v: f64| (linear_to_srgb(v.clamp(0.0, 1.0)) * 255.0 + 0.5) as u8;

        (to_u8(r), to_u8(g), to_u8(b))
    }

    /// Hue takes the shortest arc.
    pub fn mix(self, other: Self, t: f64) -> Self {
        let mut dh = other.h - self.h;

        if dh > PI {
            dh -= 2.0 * PI;
        } else if dh < -PI {
            dh += 2.0 * PI;
        }

        Self {
            l: self.l + (other.l - self.l) * t,
            c: self.c + (other.c - self.c) * t,
            h: self.h + dh * t,
        }
    }

    /// `None` for colours without a fixed RGB value (`Reset`, `Indexed`).
    pub fn from_color(color: Color) -> Option<Self> {
        let (r, g, b) = match color {
            Color::Rgb(r, g, b) => (r, g, b),
            Color::Black => (0, 0, 0),
            Color::Red => (128, 0, 0),
            Color::Green => (0, 128, 0),
            Color::Yellow => (128, 128, 0),
            Color::Blue => (0, 0, 128),
            Color::Magenta => (128, 0, 128),
            Color::Cyan => (0, 128, 128),
            Color::Gray => (192, 192, 192),
            Color::DarkGray => (128, 128, 128),
            Color::LightRed => (255, 0, 0),
            Color::LightGreen => (0, 255, 0),
            Color::LightYellow => (255, 255, 0),
            Color::LightBlue => (0, 0, 255),
            Color::LightMagenta => (255, 0, 255),
            Color::LightCyan => (0, 255, 255),
            Color::White => (255, 255, 255),
            Color::Reset | Color::Indexed(_) => return None,
        };

        Some(Self::from_srgb(r, g, b))
    }

    pub fn to_color(self) -> Color {
        let (r, g, b) = self.to_srgb();
        Color::Rgb(r, g, b)
    }
}

fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// Colour of `color` drawn at `alpha` over `background`.
///
/// Opaque strokes keep their exact colour. Without a concrete background the
/// stroke darkens toward black; colours that cannot be converted snap
/// between visible and hidden at half opacity.
pub fn with_alpha(color: Color, alpha: u8, background: Color) -> Option<Color> {
    if alpha == 255 {
        return Some(color);
    }

    if alpha == 0 {
        return None;
    }

    let t = f64::from(alpha) / 255.0;

    match (Oklch::from_color(color), Oklch::from_color(background)) {
        (Some(fg), Some(bg)) => Some(bg.mix(fg, t).to_color()),
        (Some(fg), None) => Some(Oklch { l: fg.l * t, ..fg }.to_color()),
        (None, _) if t >= 0.5 => Some(color),
        (None, _) => None,
    }
}
