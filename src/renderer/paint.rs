//! Colours and fill styles

use glam::Vec2;

/// 8-bit RGB colour with float alpha, matching CSS `rgba()`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::hex(0xffffff);
    pub const BLACK: Rgba = Rgba::hex(0x000000);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque colour from `0xRRGGBB`
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
            a: 1.0,
        }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS colour string (`#rrggbb` when opaque)
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a.max(0.0))
        }
    }
}

/// Linear gradient between two points
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    /// (offset in 0..=1, colour)
    pub stops: Vec<(f32, Rgba)>,
}

impl LinearGradient {
    pub fn two_stop(start: Vec2, end: Vec2, from: Rgba, to: Rgba) -> Self {
        Self {
            start,
            end,
            stops: vec![(0.0, from), (1.0, to)],
        }
    }
}

/// Fill style for subsequent shapes
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Linear(LinearGradient),
}

impl From<Rgba> for Paint {
    fn from(color: Rgba) -> Self {
        Paint::Solid(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        let c = Rgba::hex(0x6ec6ff);
        assert_eq!((c.r, c.g, c.b), (0x6e, 0xc6, 0xff));
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_css_strings() {
        assert_eq!(Rgba::hex(0x8d6e63).to_css(), "#8d6e63");
        assert_eq!(Rgba::BLACK.with_alpha(0.5).to_css(), "rgba(0,0,0,0.5)");
        assert_eq!(Rgba::new(255, 230, 0, -0.02).to_css(), "rgba(255,230,0,0)");
    }
}
