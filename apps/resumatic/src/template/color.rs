use serde::{Deserialize, Serialize};

/// An opaque RGB color. Template accents and panel fills only — the preview
/// has no alpha compositing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self { r: 0, g: 0, b: 0 }
    }
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(value: u8) -> Self {
        Self {
            r: value,
            g: value,
            b: value,
        }
    }

    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Parses a hex color string (#RGB or #RRGGBB).
    pub fn from_hex(s: &str) -> Result<Color, String> {
        let s = s.trim();
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| format!("Color must start with #, got: {s}"))?;

        let component = |part: &str| -> Result<u8, String> {
            let expanded = if part.len() == 1 {
                part.repeat(2)
            } else {
                part.to_string()
            };
            u8::from_str_radix(&expanded, 16).map_err(|e| format!("Invalid component: {e}"))
        };

        match hex.len() {
            3 => Ok(Color {
                r: component(&hex[0..1])?,
                g: component(&hex[1..2])?,
                b: component(&hex[2..3])?,
            }),
            6 => Ok(Color {
                r: component(&hex[0..2])?,
                g: component(&hex[2..4])?,
                b: component(&hex[4..6])?,
            }),
            n => Err(format!("Invalid hex color length: expected 3 or 6, got {n}")),
        }
    }

    /// `#RRGGBB` — the form SVG attributes take.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digit_hex() {
        let c = Color::from_hex("#0EA5E9").unwrap();
        assert_eq!(c, Color::rgb(0x0E, 0xA5, 0xE9));
    }

    #[test]
    fn test_parse_three_digit_hex_expands() {
        assert_eq!(Color::from_hex("#fff").unwrap(), Color::WHITE);
    }

    #[test]
    fn test_parse_rejects_missing_hash_and_bad_length() {
        assert!(Color::from_hex("0EA5E9").is_err());
        assert!(Color::from_hex("#0EA5").is_err());
    }

    #[test]
    fn test_hex_round_trip() {
        let c = Color::rgb(30, 58, 138);
        assert_eq!(Color::from_hex(&c.to_hex()).unwrap(), c);
    }
}
