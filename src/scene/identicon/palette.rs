use crate::foundation::core::Color;
use crate::foundation::hash::crc32;

/// Six harmonics of one seed-derived hue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdenticonPalette {
    pub hue: u32,
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub complement: Color,
    pub light: Color,
    pub dark: Color,
}

impl IdenticonPalette {
    pub fn from_seed(seed: &str) -> Self {
        Self::from_hue(crc32(seed.as_bytes()) % 360)
    }

    pub fn from_hue(hue: u32) -> Self {
        let h = f64::from(hue);
        Self {
            hue,
            primary: Color::from_hsl(h, 0.65, 0.55),
            secondary: Color::from_hsl(h + 30.0, 0.60, 0.50),
            accent: Color::from_hsl(h + 120.0, 0.70, 0.60),
            complement: Color::from_hsl(h + 180.0, 0.60, 0.50),
            light: Color::from_hsl(h, 0.50, 0.92),
            dark: Color::from_hsl(h, 0.50, 0.25),
        }
    }

    /// All six colors, for seed-indexed picks.
    pub fn colors(&self) -> [&Color; 6] {
        [
            &self.primary,
            &self.secondary,
            &self.accent,
            &self.complement,
            &self.light,
            &self.dark,
        ]
    }
}
