// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::style::Color;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Foreground color of the autocomplete overlay. Picked per render from the render
/// surface's brightness, so it stays readable on both dark and light backgrounds.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OverlayColor {
    Yellow,
    Green,
    Cyan,
    Magenta,
    Blue,
    Red,
    Grey,
}

impl From<OverlayColor> for Color {
    fn from(value: OverlayColor) -> Self {
        match value {
            OverlayColor::Yellow => Color::Yellow,
            OverlayColor::Green => Color::Green,
            OverlayColor::Cyan => Color::Cyan,
            OverlayColor::Magenta => Color::Magenta,
            OverlayColor::Blue => Color::Blue,
            OverlayColor::Red => Color::Red,
            OverlayColor::Grey => Color::Grey,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_names() {
        assert_eq!(OverlayColor::Yellow.to_string(), "yellow");
        assert_eq!(OverlayColor::from_str("green").ok(), Some(OverlayColor::Green));
        assert_eq!(
            serde_json::to_string(&OverlayColor::Cyan).ok(),
            Some("\"cyan\"".to_string())
        );
    }
}
