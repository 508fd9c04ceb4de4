use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use polyring::api::{BoundaryCrossing, Containment, GeomCfg, Orientation, Ring2};
use polyring::Vec2;
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "polyring-cli")]
#[command(about = "Query, transform and merge polygon rings stored as JSON or CSV")]
struct Cmd {
    /// Tolerance for vertex coincidence, on-segment and parallel tests
    #[arg(long, global = true, default_value_t = 1e-9)]
    eps: f64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Signed area (positive for counter-clockwise rings)
    Area { input: PathBuf },
    /// Axis-aligned bounding box
    Bounds { input: PathBuf },
    /// Convexity, winding and rectangle shape
    Classify {
        input: PathBuf,
        #[arg(long, default_value_t = 1e-9)]
        tolerance: f64,
    },
    /// Classify a point against the ring
    Contains {
        input: PathBuf,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },
    /// Check whether two ring boundaries cross
    Intersect {
        input: PathBuf,
        #[arg(long)]
        other: PathBuf,
    },
    /// Merge two touching rings and write the result
    Union {
        input: PathBuf,
        #[arg(long)]
        other: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Rotate about the origin (degrees), then translate, and write the result
    Transform {
        input: PathBuf,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        rotate: f64,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        dx: f64,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        dy: f64,
        /// Normalize to counter-clockwise order before writing
        #[arg(long)]
        ccw: bool,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Serialize)]
struct Classification {
    points: usize,
    convex: bool,
    orientation: &'static str,
    rectangle: bool,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    if !(cmd.eps.is_finite() && cmd.eps >= 0.0) {
        bail!("--eps must be a finite, non-negative number (got {})", cmd.eps);
    }
    let cfg = GeomCfg::uniform(cmd.eps);
    match cmd.action {
        Action::Area { input } => area(input, cfg),
        Action::Bounds { input } => bounds(input, cfg),
        Action::Classify { input, tolerance } => classify(input, tolerance, cfg),
        Action::Contains { input, x, y } => contains(input, x, y, cfg),
        Action::Intersect { input, other } => intersect(input, other, cfg),
        Action::Union { input, other, out } => union(input, other, out, cfg),
        Action::Transform {
            input,
            rotate,
            dx,
            dy,
            ccw,
            out,
        } => transform(input, rotate, dx, dy, ccw, out, cfg),
        Action::Report => report(),
    }
}

fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn area(input: PathBuf, cfg: GeomCfg) -> Result<()> {
    let ring = io::load_ring(&input, cfg)?;
    tracing::info!(input = %input.display(), points = ring.len(), "area");
    print_json(&json!({ "area": ring.area() }))
}

fn bounds(input: PathBuf, cfg: GeomCfg) -> Result<()> {
    let ring = io::load_ring(&input, cfg)?;
    tracing::info!(input = %input.display(), points = ring.len(), "bounds");
    let Some(b) = ring.bounds() else {
        bail!("{}: ring has {} points, bounds need ≥3", input.display(), ring.len());
    };
    print_json(&json!({
        "x": b.x(),
        "y": b.y(),
        "width": b.width(),
        "height": b.height()
    }))
}

fn orientation_name(o: Orientation) -> &'static str {
    match o {
        Orientation::CounterClockwise => "counter_clockwise",
        Orientation::Clockwise => "clockwise",
        Orientation::Collinear => "collinear",
    }
}

fn classify(input: PathBuf, tolerance: f64, cfg: GeomCfg) -> Result<()> {
    let ring = io::load_ring(&input, cfg)?;
    tracing::info!(input = %input.display(), points = ring.len(), tolerance, "classify");
    print_json(&Classification {
        points: ring.len(),
        convex: ring.is_convex(),
        orientation: orientation_name(ring.orientation()),
        rectangle: ring.is_rectangle(tolerance),
    })
}

fn contains(input: PathBuf, x: f64, y: f64, cfg: GeomCfg) -> Result<()> {
    let ring = io::load_ring(&input, cfg)?;
    let verdict = match ring.contains_point(Vec2::new(x, y)) {
        Containment::Inside => "inside",
        Containment::Outside => "outside",
        Containment::Indeterminate => "indeterminate",
    };
    tracing::info!(input = %input.display(), x, y, verdict, "contains");
    print_json(&json!({ "x": x, "y": y, "containment": verdict }))
}

fn intersect(input: PathBuf, other: PathBuf, cfg: GeomCfg) -> Result<()> {
    let a = io::load_ring(&input, cfg)?;
    let b = io::load_ring(&other, cfg)?;
    let verdict = match a.crossing(&b) {
        BoundaryCrossing::Crossing => "crossing",
        BoundaryCrossing::NoCrossing => "no_crossing",
        BoundaryCrossing::Ambiguous => "ambiguous",
        BoundaryCrossing::Degenerate => "degenerate",
    };
    tracing::info!(input = %input.display(), other = %other.display(), verdict, "intersect");
    print_json(&json!({ "crossing": verdict }))
}

fn union(input: PathBuf, other: PathBuf, out: PathBuf, cfg: GeomCfg) -> Result<()> {
    let a = io::load_ring(&input, cfg)?;
    let b = io::load_ring(&other, cfg)?;
    tracing::info!(input = %input.display(), other = %other.display(), out = %out.display(), "union");
    let merged: Ring2 = a.try_union(&b)?;
    io::save_ring(&out, &merged)?;
    let payload = Payload::new("union", json!({ "eps": cfg.eps_fuzzy }))
        .with_input(&input)
        .with_input(&other);
    provenance::write_sidecar(&out, payload)?;
    print_json(&json!({ "points": merged.len(), "area": merged.area() }))
}

fn transform(
    input: PathBuf,
    rotate: f64,
    dx: f64,
    dy: f64,
    ccw: bool,
    out: PathBuf,
    cfg: GeomCfg,
) -> Result<()> {
    let mut ring = io::load_ring(&input, cfg)?;
    tracing::info!(input = %input.display(), rotate, dx, dy, ccw, out = %out.display(), "transform");
    ring.rotate(rotate);
    ring.translate(dx, dy);
    if ccw {
        ring.set_anticlockwise();
    }
    io::save_ring(&out, &ring)?;
    let payload = Payload::new(
        "transform",
        json!({ "rotate": rotate, "dx": dx, "dy": dy, "ccw": ccw }),
    )
    .with_input(&input);
    provenance::write_sidecar(&out, payload)?;
    print_json(&io::RingDoc::from_ring(&ring))
}

fn report() -> Result<()> {
    print_json(&json!({
        "code_rev": provenance::code_rev(),
        "kernel_version": polyring::VERSION,
    }))
}
