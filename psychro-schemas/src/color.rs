use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const BROWN: Rgb = Rgb(165, 42, 42);
    pub const GRAY: Rgb = Rgb(128, 128, 128);
    pub const LIGHT_GRAY: Rgb = Rgb(211, 211, 211);
    pub const GREEN: Rgb = Rgb(0, 128, 0);

    /// Parses `#RRGGBB` (the leading `#` is optional).
    pub fn from_hex(value: &str) -> Option<Self> {
        let hex = value.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_picker_colors() {
        assert_eq!(Rgb::from_hex("#FF0000"), Some(Rgb(255, 0, 0)));
        assert_eq!(Rgb::from_hex("1e90ff"), Some(Rgb(30, 144, 255)));
        assert_eq!(Rgb(30, 144, 255).to_hex(), "#1E90FF");
    }

    #[test]
    fn rejects_malformed_colors() {
        assert_eq!(Rgb::from_hex("#FFF"), None);
        assert_eq!(Rgb::from_hex("#GG0000"), None);
        assert_eq!(Rgb::from_hex(""), None);
        assert_eq!(Rgb::from_hex("#ÿÿÿ"), None);
    }
}
