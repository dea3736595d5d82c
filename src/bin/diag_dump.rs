//! Diagnostic: print a summary of one or more DXF files.
//!
//! Usage: diag_dump [--ch1903] <file.dxf>...

use anyhow::{bail, Context};
use ggdxf::geo::{project_entity, Ch1903};
use ggdxf::{DxfDocument, DxfReader};
use std::path::Path;

fn dump(path: &Path, doc: &DxfDocument, project: bool) {
    println!("== {}", path.display());
    println!(
        "  version={} codepage={} header_vars={}",
        doc.header.version().unwrap_or("-"),
        doc.header.code_page().unwrap_or("-"),
        doc.header.len()
    );

    for table in &doc.tables {
        println!(
            "  TABLE {:<10} entries={}/{}",
            table.name,
            table.len(),
            table.max_entries
        );
    }

    let mut layers: Vec<_> = doc.layer_index().into_iter().collect();
    layers.sort_by(|a, b| a.0.cmp(b.0));
    for (layer, indices) in layers {
        println!("  LAYER {:<20} entities={}", layer, indices.len());
    }

    println!(
        "  points={} polylines={}",
        doc.points().count(),
        doc.polylines().count()
    );
    if let Some(bb) = doc.extents() {
        println!("  extents {} .. {}", bb.min, bb.max);
    }

    if project {
        for (i, entity) in doc.entities().enumerate() {
            let projected = project_entity(entity, &Ch1903);
            if let Some(first) = projected.first() {
                println!(
                    "  #{:<5} {:<8} {} ({} coords)",
                    i,
                    entity.as_entity().entity_type(),
                    first,
                    projected.len()
                );
            }
        }
    }

    for notification in &doc.notifications {
        println!("  {}", notification);
    }
}

fn main() -> anyhow::Result<()> {
    let mut project = false;
    let mut paths = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--ch1903" => project = true,
            _ => paths.push(arg),
        }
    }
    if paths.is_empty() {
        bail!("usage: diag_dump [--ch1903] <file.dxf>...");
    }

    for path in &paths {
        let path = Path::new(path);
        let doc = DxfReader::from_file(path)
            .and_then(DxfReader::read)
            .with_context(|| format!("failed to read {}", path.display()))?;
        dump(path, &doc, project);
    }
    Ok(())
}
