//! Hex <-> RGB conversion and random color generation

use rand::Rng;
use serde::Serialize;
use std::fmt;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid color format: {0:?}")]
    InvalidColorFormat(String),
}

/// A color kept in both of its representations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Color {
    hex: String,
    rgb: [u8; 3],
}

impl Color {
    /// Parse `#RRGGBB` or `#RGB` (the `#` is optional, digits are case-insensitive).
    pub fn from_hex(value: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidColorFormat(value.to_string());

        let digits = value.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if !digits.is_ascii() {
            return Err(invalid());
        }

        let full = match digits.len() {
            6 => digits.to_string(),
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            _ => return Err(invalid()),
        };

        let bytes = hex::decode(&full).map_err(|_| invalid())?;
        let rgb: [u8; 3] = bytes.try_into().map_err(|_| invalid())?;
        Ok(Self::from_rgb(rgb))
    }

    pub fn from_rgb(rgb: [u8; 3]) -> Self {
        Self {
            hex: format!("#{}", hex::encode_upper(rgb)),
            rgb,
        }
    }

    /// Round fractional channels half-up and clamp into `[0, 255]`.
    pub fn from_channels(channels: [f64; 3]) -> Self {
        Self::from_rgb(channels.map(|c| c.round().clamp(0.0, 255.0) as u8))
    }

    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn rgb(&self) -> [u8; 3] {
        self.rgb
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

/// Six uniform picks from `0-9A-F`, prefixed with `#`.
///
/// Only the string is produced; callers convert with [`Color::from_hex`]
/// when they need channels.
pub fn random_hex<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut out = String::with_capacity(7);
    out.push('#');
    for _ in 0..6 {
        out.push(HEX_DIGITS[rng.random_range(0..HEX_DIGITS.len())] as char);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_parse_full_hex() {
        let c = Color::from_hex("#1a2B3c").unwrap();
        assert_eq!(c.rgb(), [0x1a, 0x2b, 0x3c]);
        assert_eq!(c.hex(), "#1A2B3C");
    }

    #[test]
    fn test_parse_short_and_bare_hex() {
        assert_eq!(Color::from_hex("#fa0").unwrap().rgb(), [255, 170, 0]);
        assert_eq!(Color::from_hex("00FF00").unwrap().hex(), "#00FF00");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "#", "#12345", "#GGGGGG", "#1234567", "red", "#ééé"] {
            assert_eq!(
                Color::from_hex(bad),
                Err(ColorError::InvalidColorFormat(bad.to_string())),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn test_from_channels_rounds_half_up() {
        let c = Color::from_channels([63.75, 127.5, 191.25]);
        assert_eq!(c.rgb(), [64, 128, 191]);
        assert_eq!(c.hex(), "#4080BF");
    }

    #[test]
    fn test_random_hex_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let hex = random_hex(&mut rng);
            assert_eq!(hex.len(), 7);
            assert!(hex.starts_with('#'));
            assert!(hex[1..].bytes().all(|b| HEX_DIGITS.contains(&b)));
            assert!(Color::from_hex(&hex).is_ok());
        }
    }
}
