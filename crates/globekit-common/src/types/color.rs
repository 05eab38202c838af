use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const RED: Self = Self::from_rgba(255, 0, 0, 255);
    pub const YELLOW: Self = Self::from_rgba(255, 255, 0, 255);
    pub const WHITE: Self = Self::from_rgba(255, 255, 255, 255);

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with alpha replaced; `alpha` is clamped to `[0, 1]`.
    pub fn with_alpha(self, alpha: f64) -> Self {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { a, ..self }
    }

    /// Normalized `[r, g, b, a]` as the host's material uniforms expect.
    pub fn to_unit_rgba(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            6 => Some(Self::from_rgba(channel(0)?, channel(2)?, channel(4)?, 255)),
            8 => Some(Self::from_rgba(
                channel(0)?,
                channel(2)?,
                channel(4)?,
                channel(6)?,
            )),
            _ => None,
        }
    }

    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_from_hex_6() {
        let c = Color::from_hex("#ff8800").unwrap();
        assert_eq!(c, Color::from_rgba(255, 136, 0, 255));
    }

    #[test]
    fn color_from_hex_8() {
        let c = Color::from_hex("#ff000080").unwrap();
        assert_eq!(c, Color::from_rgba(255, 0, 0, 128));
    }

    #[test]
    fn color_from_hex_invalid() {
        assert!(Color::from_hex("zzzzzz").is_none());
        assert!(Color::from_hex("#abc").is_none());
        assert!(Color::from_hex("").is_none());
        assert!(Color::from_hex("ééé").is_none());
    }

    #[test]
    fn red_with_half_alpha() {
        let c = Color::RED.with_alpha(0.5);
        assert_eq!(c, Color::from_rgba(255, 0, 0, 128));
        assert_eq!(c.to_hex(), "#ff000080");
    }

    #[test]
    fn with_alpha_clamps() {
        assert_eq!(Color::RED.with_alpha(2.0).a, 255);
        assert_eq!(Color::RED.with_alpha(-1.0).a, 0);
    }

    #[test]
    fn unit_rgba() {
        let [r, g, b, a] = Color::YELLOW.to_unit_rgba();
        assert_eq!((r, g, b, a), (1.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn color_roundtrip_hex() {
        let original = Color::from_rgba(171, 205, 239, 255);
        let parsed = Color::from_hex(&original.to_hex()).unwrap();
        assert_eq!(original, parsed);
    }
}
