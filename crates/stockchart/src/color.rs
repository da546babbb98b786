use std::{collections::HashMap, fmt};

use serde::{Deserialize, Serialize};

use crate::data::Symbol;

/// Opaque display token handed to the renderer, e.g. `rgba(61, 161, 61, 0.7)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self(format!("rgba({}, {}, {}, {})", r, g, b, a))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `None` means no color is assigned to the symbol; the renderer picks its own.
#[cfg_attr(test, mockall::automock)]
pub trait ColorLookup {
    fn color(&self, sym: &str) -> Option<Color>;
}

impl<F> ColorLookup for F
where
    F: Fn(&str) -> Option<Color>,
{
    fn color(&self, sym: &str) -> Option<Color> {
        self(sym)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: HashMap<Symbol, Color>,
}

impl Palette {
    pub fn empty() -> Self {
        Self {
            colors: HashMap::new(),
        }
    }

    pub fn with(mut self, sym: impl Into<Symbol>, color: Color) -> Self {
        self.colors.insert(sym.into(), color);
        self
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::empty()
            .with("GME", Color::rgba(61, 161, 61, 0.7)) // green
            .with("MSFT", Color::rgba(209, 4, 25, 0.7)) // red
            .with("DIS", Color::rgba(18, 4, 209, 0.7)) // blue
            .with("BNTX", Color::rgba(166, 43, 158, 0.7)) // purple
    }
}

impl ColorLookup for Palette {
    fn color(&self, sym: &str) -> Option<Color> {
        self.colors.get(sym).cloned()
    }
}
