/// Straight-alpha RGBA color with channels in [0, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn parse_hex(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize, w: usize| -> Option<f64> {
            let raw = u8::from_str_radix(&hex[i * w..i * w + w], 16).ok()?;
            // #rgb shorthand: "f" means "ff"
            let v = if w == 1 { raw * 17 } else { raw };
            Some(v as f64 / 255.0)
        };
        match hex.len() {
            3 => Some(Self::new(channel(0, 1)?, channel(1, 1)?, channel(2, 1)?, 1.0)),
            6 => Some(Self::new(channel(0, 2)?, channel(1, 2)?, channel(2, 2)?, 1.0)),
            8 => Some(Self::new(
                channel(0, 2)?,
                channel(1, 2)?,
                channel(2, 2)?,
                channel(3, 2)?,
            )),
            _ => None,
        }
    }

    /// Like [`Rgba::parse_hex`] but malformed input becomes transparent.
    pub fn from_hex_or_transparent(s: &str) -> Self {
        Self::parse_hex(s).unwrap_or(Self::TRANSPARENT)
    }

    pub fn lerp(self, other: Rgba, t: f64) -> Rgba {
        Rgba {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    pub fn to_css(self) -> String {
        let to_u8 = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "rgba({}, {}, {}, {:.3})",
            to_u8(self.r),
            to_u8(self.g),
            to_u8(self.b),
            self.a.clamp(0.0, 1.0)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_hex_forms() {
        assert_eq!(Rgba::parse_hex("#fff"), Some(Rgba::new(1.0, 1.0, 1.0, 1.0)));
        let c = Rgba::parse_hex("#ec4899").unwrap();
        assert_eq!(c.to_css(), "rgba(236, 72, 153, 1.000)");
        let c = Rgba::parse_hex("#ffffff1a").unwrap();
        assert!((c.a - 26.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn malformed_hex_is_transparent() {
        assert_eq!(Rgba::from_hex_or_transparent("ec4899"), Rgba::TRANSPARENT);
        assert_eq!(Rgba::from_hex_or_transparent("#ec48"), Rgba::TRANSPARENT);
        assert_eq!(Rgba::from_hex_or_transparent("#zzzzzz"), Rgba::TRANSPARENT);
    }
}
