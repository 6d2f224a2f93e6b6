use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;

/// Textual color encodings, shared by input parsing and output formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Hex,
    Rgb,
    Hsb,
    RgbFloat,
    HsbFloat,
}

impl Encoding {
    pub const ALL: [Encoding; 5] = [
        Encoding::Hex,
        Encoding::Rgb,
        Encoding::Hsb,
        Encoding::RgbFloat,
        Encoding::HsbFloat,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Encoding::Hex => "hex",
            Encoding::Rgb => "rgb",
            Encoding::Hsb => "hsb",
            Encoding::RgbFloat => "rgb_float",
            Encoding::HsbFloat => "hsb_float",
        }
    }

    /// Float encodings carry channels on the normalized [0,1] scale.
    pub fn is_float(&self) -> bool {
        matches!(self, Encoding::RgbFloat | Encoding::HsbFloat)
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Encoding::ALL
            .into_iter()
            .find(|e| e.name() == lower)
            .ok_or_else(|| ColorError::UnknownEncoding(s.to_string()))
    }
}
