use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use overlay_kit::{Envelope, OpCode, Point};
use tracing_subscriber::fmt::SubscriberBuilder;

mod batch;
mod decide;

use decide::{decide, precision_from_scale};

#[derive(Parser)]
#[command(name = "overlay-cli")]
#[command(about = "Pre-overlay decisions for operand boxes (emptiness, clipping, rounding)")]
struct Cmd {
    /// Log level (error, warn, info, debug, trace); logs go to stderr
    #[arg(long, default_value = "info")]
    log_level: tracing::Level,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Decide one operand pair and print the decision as JSON
    Check {
        #[arg(long)]
        op: OpCode,
        /// Operand A envelope: minx,miny,maxx,maxy or `empty`
        #[arg(long, allow_hyphen_values = true)]
        a: Envelope,
        /// Operand B envelope: minx,miny,maxx,maxy or `empty`
        #[arg(long, allow_hyphen_values = true)]
        b: Envelope,
        /// Fixed precision scale (grid spacing 1/scale); floating if absent
        #[arg(long)]
        scale: Option<f64>,
    },
    /// Decide every row of a CSV file and write a JSON array
    Batch {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long)]
        scale: Option<f64>,
    },
    /// Round a point to the precision grid
    Round {
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
        #[arg(long)]
        scale: Option<f64>,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(cmd.log_level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Check { op, a, b, scale } => check(op, a, b, scale),
        Action::Batch { input, out, scale } => run_batch(input, out, scale),
        Action::Round { x, y, scale } => round(x, y, scale),
    }
}

fn check(op: OpCode, a: Envelope, b: Envelope, scale: Option<f64>) -> Result<()> {
    let pm = precision_from_scale(scale)?;
    tracing::info!(%op, ?a, ?b, ?pm, "check");
    let decision = decide(op, &a, &b, &pm);
    println!("{}", serde_json::to_string_pretty(&decision)?);
    Ok(())
}

fn run_batch(input: PathBuf, out: PathBuf, scale: Option<f64>) -> Result<()> {
    let pm = precision_from_scale(scale)?;
    tracing::info!(input = %input.display(), out = %out.display(), ?pm, "batch");
    let n = batch::run_batch(&input, &out, &pm)?;
    tracing::info!(rows = n, "batch_done");
    Ok(())
}

fn round(x: f64, y: f64, scale: Option<f64>) -> Result<()> {
    let pm = precision_from_scale(scale)?;
    let pt = Point::new(overlay_kit::Coord::new(x, y));
    let rounded = overlay_kit::util::round(&pt, &pm);
    tracing::info!(x, y, ?pm, ?rounded, "round");
    let obj = match rounded {
        Some(c) => serde_json::json!({ "x": c.x, "y": c.y }),
        None => serde_json::Value::Null,
    };
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
