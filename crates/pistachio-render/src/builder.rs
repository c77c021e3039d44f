//! Sketch to scene projection
//!
//! Pure function of its inputs. Invisible entities are dropped; everything
//! else lands on the plane `z = options.z` in insertion order per kind.

use glam::Vec3;
use pistachio_core::{DVec2, Sketch};

use crate::config::SketchRenderOptions;
use crate::scene::{
    Arc3D, Circle3D, Ellipse3D, GridPlane, Line3D, Point3D, Polyline3D, RenderScene,
};

/// Build the render scene for one sketch
pub fn build_render_scene(sketch: &Sketch, opts: &SketchRenderOptions) -> RenderScene {
    let store = &sketch.entities;
    let z = opts.z;
    let mut scene = RenderScene {
        grid: GridPlane {
            origin: Vec3::new(0.0, 0.0, z),
            u_axis: Vec3::X,
            v_axis: Vec3::Y,
            spacing: opts.grid_spacing,
            line_count: opts.grid_line_count,
            ..GridPlane::default()
        },
        show_grid: true,
        ..RenderScene::default()
    };

    // ============== Points ==============
    for pt in store.points().iter().filter(|e| e.h.visible) {
        scene.points.push(Point3D {
            id: pt.h.id,
            p: to_world(pt.p, z),
            color: opts.point_color,
            size: opts.point_size,
            selectable: pt.h.selectable,
        });
    }

    // ============== Lines ==============
    for ln in store.lines().iter().filter(|e| e.h.visible) {
        scene.lines.push(Line3D {
            id: ln.h.id,
            a: to_world(ln.a, z),
            b: to_world(ln.b, z),
            color: opts.stroke_color(ln.h.construction),
            thickness: opts.line_thickness,
            selectable: ln.h.selectable,
        });
    }

    // ============== Conics ==============
    for c in store.circles().iter().filter(|e| e.h.visible) {
        scene.circles.push(Circle3D {
            id: c.h.id,
            center: to_world(c.center, z),
            normal: Vec3::Z,
            radius: c.radius as f32,
            color: opts.stroke_color(c.h.construction),
            thickness: opts.line_thickness,
            selectable: c.h.selectable,
            construction: c.h.construction,
        });
    }

    for a in store.arcs().iter().filter(|e| e.h.visible) {
        scene.arcs.push(Arc3D {
            id: a.h.id,
            center: to_world(a.center, z),
            normal: Vec3::Z,
            radius: a.radius as f32,
            start: to_world(a.start, z),
            end: to_world(a.end, z),
            ccw: a.ccw,
            color: opts.stroke_color(a.h.construction),
            thickness: opts.line_thickness,
            selectable: a.h.selectable,
            construction: a.h.construction,
        });
    }

    for e in store.ellipses().iter().filter(|e| e.h.visible) {
        scene.ellipses.push(Ellipse3D {
            id: e.h.id,
            center: to_world(e.center, z),
            normal: Vec3::Z,
            rx: e.rx as f32,
            ry: e.ry as f32,
            rotation_rad: e.rotation as f32,
            color: opts.stroke_color(e.h.construction),
            thickness: opts.line_thickness,
            selectable: e.h.selectable,
            construction: e.h.construction,
        });
    }

    // ============== Curves ==============
    // Drawn as the control polygon until a real evaluator exists.
    for cv in store.curves().iter().filter(|e| e.h.visible) {
        if cv.control_points.len() < 2 {
            continue;
        }

        let mut points = Vec::with_capacity(cv.control_points.len() + usize::from(cv.closed));
        points.extend(cv.control_points.iter().map(|p| to_world(*p, z)));
        if cv.closed {
            points.push(points[0]);
        }

        scene.polylines.push(Polyline3D {
            id: cv.h.id,
            points,
            color: opts.stroke_color(cv.h.construction),
            thickness: opts.line_thickness,
            selectable: cv.h.selectable,
        });
    }

    scene
}

fn to_world(p: DVec2, z: f32) -> Vec3 {
    Vec3::new(p.x as f32, p.y as f32, z)
}
