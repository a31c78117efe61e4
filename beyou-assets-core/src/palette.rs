//! Brand Palette

use serde::{Deserialize, Serialize};

/// The five semantic color roles every template draws from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

impl ColorPalette {
    /// BeYou pride theme
    pub fn beyou() -> Self {
        Self {
            primary: "#732982".to_string(),   // pride purple
            secondary: "#ff69b4".to_string(), // pride pink
            accent: "#0078d4".to_string(),    // pride blue
            background: "#ffffff".to_string(),
            text: "#0a0a0a".to_string(),
        }
    }

    /// Gradient stops in draw order: (offset percent, color)
    pub fn gradient_stops(&self) -> [(u8, &str); 3] {
        [
            (0, self.primary.as_str()),
            (50, self.secondary.as_str()),
            (100, self.accent.as_str()),
        ]
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::beyou()
    }
}
