//! Dataset and series style types
//!
//! A dataset is one Palace postpro directory plus how its curve is drawn.

use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Series color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesColor {
    Blue,
    Red,
    Green,
    Black,
    Magenta,
    Cyan,
}

impl SeriesColor {
    /// Matplotlib base colors ("b", "r", ...) as RGB
    pub fn rgb(&self) -> RGBColor {
        match self {
            SeriesColor::Blue => RGBColor(0, 0, 255),
            SeriesColor::Red => RGBColor(255, 0, 0),
            SeriesColor::Green => RGBColor(0, 128, 0),
            SeriesColor::Black => RGBColor(0, 0, 0),
            SeriesColor::Magenta => RGBColor(191, 0, 191),
            SeriesColor::Cyan => RGBColor(0, 191, 191),
        }
    }
}

/// Point marker shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    Circle,
    Square,
    Triangle,
    Cross,
}

/// Line-with-markers style for one series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesStyle {
    pub color: SeriesColor,
    pub marker: Marker,
}

impl SeriesStyle {
    pub fn new(color: SeriesColor, marker: Marker) -> Self {
        Self { color, marker }
    }
}

/// A labeled postpro directory
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub directory: PathBuf,
    pub style: SeriesStyle,
}

impl Dataset {
    pub fn new(label: impl Into<String>, directory: impl Into<PathBuf>, style: SeriesStyle) -> Self {
        Self {
            label: label.into(),
            directory: directory.into(),
            style,
        }
    }

    /// AMR-only run: blue line, circle markers
    pub fn amr_only(directory: impl Into<PathBuf>) -> Self {
        Self::new(
            "AMR only",
            directory,
            SeriesStyle::new(SeriesColor::Blue, Marker::Circle),
        )
    }

    /// AMR + TMOP run: red line, square markers
    pub fn amr_tmop(directory: impl Into<PathBuf>) -> Self {
        Self::new(
            "AMR + TMOP",
            directory,
            SeriesStyle::new(SeriesColor::Red, Marker::Square),
        )
    }
}
