//! Renderer-agnostic scene primitives
//!
//! Positions are world-space `Vec3`. Conics are kept as analytic primitives;
//! tessellation is up to the renderer.

use glam::Vec3;
use pistachio_core::EntityId;

use crate::config::Color;

/// Identifier used by renderers for picking; equals the source entity id
pub type RenderId = EntityId;

#[derive(Debug, Clone, PartialEq)]
pub struct Point3D {
    pub id: RenderId,
    pub p: Vec3,
    pub color: Color,
    pub size: f32,
    pub selectable: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Line3D {
    pub id: RenderId,
    pub a: Vec3,
    pub b: Vec3,
    pub color: Color,
    pub thickness: f32,
    pub selectable: bool,
}

/// Open or closed polyline; a closed one repeats its first point at the end
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline3D {
    pub id: RenderId,
    pub points: Vec<Vec3>,
    pub color: Color,
    pub thickness: f32,
    pub selectable: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle3D {
    pub id: RenderId,
    pub center: Vec3,
    /// Plane normal
    pub normal: Vec3,
    pub radius: f32,
    pub color: Color,
    pub thickness: f32,
    pub selectable: bool,
    pub construction: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Arc3D {
    pub id: RenderId,
    pub center: Vec3,
    pub normal: Vec3,
    pub radius: f32,
    /// Start point in world space
    pub start: Vec3,
    /// End point in world space
    pub end: Vec3,
    pub ccw: bool,
    pub color: Color,
    pub thickness: f32,
    pub selectable: bool,
    pub construction: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse3D {
    pub id: RenderId,
    pub center: Vec3,
    pub normal: Vec3,
    pub rx: f32,
    pub ry: f32,
    /// Rotation of the major axis about the normal, radians from +X
    pub rotation_rad: f32,
    pub color: Color,
    pub thickness: f32,
    pub selectable: bool,
    pub construction: bool,
}

/// Workplane grid descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct GridPlane {
    pub origin: Vec3,
    pub u_axis: Vec3,
    pub v_axis: Vec3,
    pub spacing: f32,
    /// Lines per side
    pub line_count: u32,
    pub major_color: Color,
    pub minor_color: Color,
}

impl Default for GridPlane {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            u_axis: Vec3::X,
            v_axis: Vec3::Y,
            spacing: 10.0,
            line_count: 20,
            major_color: [0.4, 0.4, 0.4, 1.0],
            minor_color: [0.2, 0.2, 0.2, 1.0],
        }
    }
}

/// Flat list of primitives for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct RenderScene {
    pub points: Vec<Point3D>,
    pub lines: Vec<Line3D>,
    pub polylines: Vec<Polyline3D>,
    pub circles: Vec<Circle3D>,
    pub arcs: Vec<Arc3D>,
    pub ellipses: Vec<Ellipse3D>,

    pub grid: GridPlane,
    pub show_grid: bool,
}

impl Default for RenderScene {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            lines: Vec::new(),
            polylines: Vec::new(),
            circles: Vec::new(),
            arcs: Vec::new(),
            ellipses: Vec::new(),
            grid: GridPlane::default(),
            show_grid: true,
        }
    }
}

impl RenderScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all primitives, keeping the grid settings
    pub fn clear(&mut self) {
        self.points.clear();
        self.lines.clear();
        self.polylines.clear();
        self.circles.clear();
        self.arcs.clear();
        self.ellipses.clear();
    }

    /// Total number of primitives
    pub fn primitive_count(&self) -> usize {
        self.points.len()
            + self.lines.len()
            + self.polylines.len()
            + self.circles.len()
            + self.arcs.len()
            + self.ellipses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitive_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_keeps_grid() {
        let mut scene = RenderScene::new();
        scene.grid.spacing = 5.0;
        scene.points.push(Point3D {
            id: EntityId(1),
            p: Vec3::ZERO,
            color: [1.0; 4],
            size: 4.0,
            selectable: true,
        });
        assert_eq!(scene.primitive_count(), 1);

        scene.clear();
        assert!(scene.is_empty());
        assert_eq!(scene.grid.spacing, 5.0);
        assert!(scene.show_grid);
    }
}
