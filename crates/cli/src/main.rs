use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

use sketch2d::prelude::*;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Geometry file inspector")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Shape counts, centroid, and bounding box as one JSON object
    Stats {
        #[arg(long)]
        input: String,
    },
    /// Centroid of the ingested collection
    Centroid {
        #[arg(long)]
        input: String,
    },
    /// Bounding box accumulated over the ingested collection
    Bbox {
        #[arg(long)]
        input: String,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let value = match cmd.action {
        Action::Stats { input } => stats(&input)?,
        Action::Centroid { input } => centroid_of(&input)?,
        Action::Bbox { input } => bbox_of(&input)?,
    };
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn ingest(input: &str) -> Result<Vec<Shape>> {
    let shapes = read_shapes_path(&DefaultFactory, Path::new(input))
        .with_context(|| format!("reading geometry from {input}"))?;
    tracing::info!(input, shapes = shapes.len(), "ingested");
    Ok(shapes)
}

fn point_json(p: Point) -> serde_json::Value {
    serde_json::json!({ "x": p.x, "y": p.y })
}

fn stats(input: &str) -> Result<serde_json::Value> {
    let shapes = ingest(input)?;
    let count_of = |k: ShapeKind| shapes.iter().filter(|s| s.kind() == k).count();
    let centroid = centroid(&shapes).ok().map(point_json);
    let mut bbox = BoundingBox::default();
    for s in &shapes {
        bbox.add_shape(s);
    }
    Ok(serde_json::json!({
        "counts": {
            "points": count_of(ShapeKind::Point),
            "lines": count_of(ShapeKind::Line),
            "arcs": count_of(ShapeKind::Arc),
        },
        "centroid": centroid,
        "bbox": { "p1": point_json(bbox.p1), "p2": point_json(bbox.p2) },
    }))
}

fn centroid_of(input: &str) -> Result<serde_json::Value> {
    let shapes = ingest(input)?;
    let c = centroid(&shapes).context("computing centroid")?;
    Ok(point_json(c))
}

fn bbox_of(input: &str) -> Result<serde_json::Value> {
    let shapes = ingest(input)?;
    let mut bbox = BoundingBox::default();
    for s in &shapes {
        bbox.add_shape(s);
    }
    Ok(serde_json::json!({ "p1": point_json(bbox.p1), "p2": point_json(bbox.p2) }))
}
