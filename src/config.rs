//! User configuration and the settings resolved from it.
//!
//! `Config` mirrors the options object accepted from JavaScript: every field
//! is optional and the original option names (`size`, `coordinates`) are
//! accepted alongside `initialSize` / `initialPosition`. `Config::resolve`
//! applies defaults and clamps everything into the container once, at
//! construction; the resulting [`Settings`] never change afterwards.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_HEIGHT_RATIO, DEFAULT_MIN_HEIGHT, DEFAULT_MIN_WIDTH, DEFAULT_WIDTH_RATIO};
use crate::geometry::{Point, Rect, Size, clamp};

/// Widget options. Absent fields fall back to defaults in [`Config::resolve`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Minimum selection width. Defaults to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<f64>,
    /// Minimum selection height. Defaults to 70.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<f64>,
    /// Initial selection size. Defaults to 50% × 25% of the container.
    #[serde(alias = "size", skip_serializing_if = "Option::is_none")]
    pub initial_size: Option<Size>,
    /// Initial top-left corner. Defaults to the container origin.
    #[serde(alias = "coordinates", skip_serializing_if = "Option::is_none")]
    pub initial_position: Option<Point>,
}

/// Resolved, clamped settings a controller is built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Floor applied to every resize.
    pub min: Size,
    /// Selection rectangle at construction.
    pub initial: Rect,
}

impl Config {
    /// Parse a JSON options object.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error if `json` is not a valid
    /// options object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn with_min_size(mut self, min_width: f64, min_height: f64) -> Self {
        self.min_width = Some(min_width);
        self.min_height = Some(min_height);
        self
    }

    #[must_use]
    pub fn with_initial_size(mut self, w: f64, h: f64) -> Self {
        self.initial_size = Some(Size::new(w, h));
        self
    }

    #[must_use]
    pub fn with_initial_position(mut self, x: f64, y: f64) -> Self {
        self.initial_position = Some(Point::new(x, y));
        self
    }

    /// Apply defaults and clamp the initial rectangle into `container`.
    ///
    /// Zero, negative or non-finite minimums are treated as unset. The initial
    /// size is clamped to `[min, container]` first, then the position to
    /// `[0, container - size]`.
    #[must_use]
    pub fn resolve(&self, container: Size) -> Settings {
        let min = Size::new(
            positive_or(self.min_width, DEFAULT_MIN_WIDTH),
            positive_or(self.min_height, DEFAULT_MIN_HEIGHT),
        );
        let size = self
            .initial_size
            .unwrap_or_else(|| Size::new(container.w * DEFAULT_WIDTH_RATIO, container.h * DEFAULT_HEIGHT_RATIO));
        let position = self.initial_position.unwrap_or_default();

        let w = clamp(size.w, min.w, container.w);
        let h = clamp(size.h, min.h, container.h);
        let x = clamp(position.x, 0.0, container.w - w);
        let y = clamp(position.y, 0.0, container.h - h);

        Settings { min, initial: Rect::new(x, y, w, h) }
    }
}

fn positive_or(value: Option<f64>, default: f64) -> f64 {
    value.filter(|v| v.is_finite() && *v > 0.0).unwrap_or(default)
}
