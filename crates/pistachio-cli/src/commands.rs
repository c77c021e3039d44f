//! Subcommand implementations

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result, bail};
use pistachio_core::{ConstraintKind, Document, EntityKind, Sketch, SketchId};
use pistachio_io::{DocumentPersistence, JsonDocumentAdapter};
use pistachio_render::{RenderScene, SceneRenderer, SketchRenderOptions, build_render_scene};

/// Load `path`, refusing file names the adapter does not recognize
pub fn load(adapter: &JsonDocumentAdapter, path: &Path) -> Result<Document> {
    if !adapter.can_handle(path) {
        bail!(
            "{} is not a sketch file (expected {})",
            path.display(),
            adapter.supported_extensions()
        );
    }
    adapter
        .load_document(path)
        .with_context(|| format!("Failed to load {}", path.display()))
}

/// Per-sketch entity and constraint counts
pub fn inspect(document: &Document) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(
        out,
        "Document {} \"{}\": {} sketches, {} entities",
        document.id,
        document.name,
        document.sketches.len(),
        document.entity_count()
    )?;

    for sketch in &document.sketches {
        writeln!(
            out,
            "  Sketch {} \"{}\"{}",
            sketch.id,
            sketch.name,
            if sketch.visible { "" } else { " (hidden)" }
        )?;

        let counts: Vec<String> = EntityKind::ALL
            .iter()
            .map(|kind| format!("{}={}", kind, sketch.entities.count(*kind)))
            .collect();
        writeln!(out, "    entities: {}", counts.join(" "))?;

        let geometric = count_constraints(sketch, ConstraintKind::Geometric);
        let dimensional = count_constraints(sketch, ConstraintKind::Dimensional);
        writeln!(
            out,
            "    constraints: Geometric={} Dimensional={}",
            geometric, dimensional
        )?;
    }

    Ok(out)
}

fn count_constraints(sketch: &Sketch, kind: ConstraintKind) -> usize {
    sketch
        .constraints
        .iter()
        .filter(|c| c.kind() == kind)
        .count()
}

/// Re-save `input` as `output`
pub fn convert(adapter: &JsonDocumentAdapter, input: &Path, output: &Path) -> Result<()> {
    let document = load(adapter, input)?;
    adapter
        .save_document(&document, output)
        .with_context(|| format!("Failed to save {}", output.display()))
}

/// Build scenes for one sketch, or every sketch, and hand them to `renderer`
pub fn scene(
    document: &Document,
    sketch: Option<SketchId>,
    opts: &SketchRenderOptions,
    renderer: &mut dyn SceneRenderer,
) -> Result<usize> {
    let selected: Vec<&Sketch> = match sketch {
        Some(id) => match document.sketch(id) {
            Some(s) => vec![s],
            None => bail!("Document has no sketch with id {}", id),
        },
        None => document.sketches.iter().collect(),
    };

    for s in &selected {
        tracing::debug!("Building scene for sketch {}", s.id);
        renderer.set_scene(&build_render_scene(s, opts));
    }
    Ok(selected.len())
}

/// Renderer that writes a primitive summary per scene
#[derive(Debug, Default)]
pub struct SummaryRenderer {
    pub output: String,
}

impl SceneRenderer for SummaryRenderer {
    fn set_scene(&mut self, scene: &RenderScene) {
        self.output.push_str(&format!(
            "points={} lines={} polylines={} circles={} arcs={} ellipses={} grid={}x{}\n",
            scene.points.len(),
            scene.lines.len(),
            scene.polylines.len(),
            scene.circles.len(),
            scene.arcs.len(),
            scene.ellipses.len(),
            scene.grid.line_count,
            scene.grid.spacing
        ));
    }
}
