//! Scene builder configuration
//!
//! Options can be serialized and loaded from configuration files. Every
//! field falls back to its default, so a partial file is valid.

use serde::{Deserialize, Serialize};

/// RGBA color, components in `0.0..=1.0`
pub type Color = [f32; 4];

/// Sketch projection options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SketchRenderOptions {
    /// Offset of the sketch plane along +Z
    pub z: f32,
    /// Color of regular entities
    pub entity_color: Color,
    /// Color of construction entities
    pub construction_color: Color,
    /// Color of point entities
    pub point_color: Color,
    /// Stroke width of lines, curves and conics
    pub line_thickness: f32,
    /// Point marker size
    pub point_size: f32,
    /// Distance between grid lines
    pub grid_spacing: f32,
    /// Grid lines per side
    pub grid_line_count: u32,
}

impl Default for SketchRenderOptions {
    fn default() -> Self {
        Self {
            z: 0.0,
            entity_color: [0.1, 0.2, 0.9, 1.0],
            construction_color: [0.3, 0.3, 0.6, 0.6],
            point_color: [0.9, 0.9, 0.9, 1.0],
            line_thickness: 2.0,
            point_size: 6.0,
            grid_spacing: 10.0,
            grid_line_count: 40,
        }
    }
}

impl SketchRenderOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Same options on a plane offset by `z`
    pub fn with_z(mut self, z: f32) -> Self {
        self.z = z;
        self
    }

    /// Stroke color for an entity
    pub fn stroke_color(&self, construction: bool) -> Color {
        if construction {
            self.construction_color
        } else {
            self.entity_color
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_color() {
        let opts = SketchRenderOptions::default();
        assert_eq!(opts.stroke_color(false), opts.entity_color);
        assert_eq!(opts.stroke_color(true), opts.construction_color);
    }

    #[test]
    fn test_with_z() {
        let opts = SketchRenderOptions::new().with_z(-2.5);
        assert_eq!(opts.z, -2.5);
        assert_eq!(opts.point_size, 6.0);
    }
}
