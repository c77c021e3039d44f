//! Pistachio Render Scene
//!
//! Projects a [`Sketch`](pistachio_core::Sketch) onto a 3D plane as a flat
//! list of typed primitives. No draw calls are made here; a
//! [`SceneRenderer`] implementation consumes the result.

pub mod builder;
pub mod config;
pub mod renderer;
pub mod scene;

// Re-exports for convenience
pub use builder::build_render_scene;
pub use config::{Color, SketchRenderOptions};
pub use renderer::SceneRenderer;
pub use scene::{
    Arc3D, Circle3D, Ellipse3D, GridPlane, Line3D, Point3D, Polyline3D, RenderId, RenderScene,
};
