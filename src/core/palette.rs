use crate::core::color::Color;
use rust_i18n::t;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub name: String,
    pub colors: Vec<Color>,
}

impl Palette {
    pub fn new(name: impl Into<String>, colors: Vec<Color>) -> Self {
        Self { name: name.into(), colors }
    }

    pub fn default_pico8() -> Self {
        let colors = [
            "#000000", "#1d2b53", "#7e2553", "#008751",
            "#ab5236", "#5f574f", "#c2c3c7", "#fff1e8",
            "#ff004d", "#ffa300", "#ffec27", "#00e436",
            "#29adff", "#83769c", "#ff77a8", "#ffccaa",
        ];
        Self {
            name: t!("palette.default_name").to_string(),
            colors: colors.iter().map(|c| Color::new(c)).collect(),
        }
    }

    /// Palette colors followed by the implicit transparent swatch.
    pub fn swatches(&self) -> Vec<Color> {
        let mut swatches = self.colors.clone();
        swatches.push(Color::transparent());
        swatches
    }

    pub fn add_color(&mut self, color: Color) {
        if !color.is_transparent() && !self.colors.contains(&color) {
            self.colors.push(color);
        }
    }

    pub fn remove_color(&mut self, index: usize) {
        if index < self.colors.len() {
            self.colors.remove(index);
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::default_pico8()
    }
}
