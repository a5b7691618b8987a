//! The fixed three-color palette and candidate sets over it.
use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "r")]
    Red,
    #[serde(rename = "g")]
    Green,
    #[serde(rename = "b")]
    Blue,
}

/// Tie-break order used whenever candidates are tried: red, blue, green.
pub const PALETTE: [Color; 3] = [Color::Red, Color::Blue, Color::Green];

impl Color {
    /// Short code used by the persisted format.
    pub const fn code(self) -> &'static str {
        match self {
            Color::Red => "r",
            Color::Green => "g",
            Color::Blue => "b",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "r" => Some(Color::Red),
            "g" => Some(Color::Green),
            "b" => Some(Color::Blue),
            _ => None,
        }
    }

    /// Graphviz / terminal friendly color name.
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }

    const fn flag(self) -> ColorSet {
        match self {
            Color::Red => ColorSet::RED,
            Color::Green => ColorSet::GREEN,
            Color::Blue => ColorSet::BLUE,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color code {0:?}")]
pub struct UnknownColor(pub String);

impl FromStr for Color {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_code(s).ok_or_else(|| UnknownColor(s.to_owned()))
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ColorSet: u8 {
        const RED = 0b001;
        const GREEN = 0b010;
        const BLUE = 0b100;
    }
}

impl ColorSet {
    pub fn palette() -> Self {
        Self::all()
    }

    pub fn contains_color(self, color: Color) -> bool {
        self.contains(color.flag())
    }

    pub fn remove_color(&mut self, color: Color) {
        self.remove(color.flag());
    }

    pub fn without(self, color: Color) -> Self {
        self.difference(color.flag())
    }

    /// Members in palette tie-break order.
    pub fn colors(self) -> impl Iterator<Item = Color> {
        PALETTE.into_iter().filter(move |c| self.contains_color(*c))
    }
}
