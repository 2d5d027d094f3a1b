use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use triangle::rand::{draw_many, KindChoice, SampleCfg};
use triangle::{Kind, Side, Sides};

mod batch;
mod provenance;
mod util;

use provenance::{write_sidecar, Payload};
use util::create_parent_dir;

#[derive(Parser)]
#[command(name = "triangle-cli")]
#[command(about = "Classify triangles from the command line or CSV files")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Classify a single triangle and print JSON (integers stay exact)
    Classify {
        #[arg(allow_negative_numbers = true)]
        a: String,
        #[arg(allow_negative_numbers = true)]
        b: String,
        #[arg(allow_negative_numbers = true)]
        c: String,
    },
    /// Classify every row of a CSV with columns a,b,c and write JSON results
    Run {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Write a CSV of random valid triangles
    Sample {
        #[arg(long, default_value_t = 100)]
        count: u64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// equilateral, isosceles or scalene (default: any)
        #[arg(long)]
        kind: Option<Kind>,
        #[arg(long, default_value_t = SampleCfg::default().min_side)]
        min_side: f64,
        #[arg(long, default_value_t = SampleCfg::default().max_side)]
        max_side: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Classify { a, b, c } => {
            let obj = classify(&a, &b, &c)?;
            println!("{}", serde_json::to_string_pretty(&obj)?);
        }
        Action::Run { input, out } => {
            run(&input, &out, cmd.tag)?;
        }
        Action::Sample {
            count,
            seed,
            kind,
            min_side,
            max_side,
            out,
        } => {
            let cfg = SampleCfg {
                kind: kind.map_or(KindChoice::Any, KindChoice::Exactly),
                min_side,
                max_side,
            };
            sample(cfg, seed, count, &out, cmd.tag)?;
        }
        Action::Report => println!("{}", serde_json::to_string_pretty(&report(cmd.tag))?),
    }
    Ok(())
}

/// Classify one triple given as text. All-integer input is classified as
/// `i64`; anything else as `f64`.
fn classify(a: &str, b: &str, c: &str) -> Result<Value> {
    let ints = (a.trim().parse::<i64>(), b.trim().parse::<i64>(), c.trim().parse::<i64>());
    if let (Ok(a), Ok(b), Ok(c)) = ints {
        return classify_json(a, b, c);
    }
    let parse = |s: &str| {
        s.trim()
            .parse::<f64>()
            .with_context(|| format!("side {s:?} is not a number"))
    };
    classify_json(parse(a)?, parse(b)?, parse(c)?)
}

fn classify_json<T>(a: T, b: T, c: T) -> Result<Value>
where
    T: Side + std::fmt::Display + serde::Serialize,
{
    let kind = Sides::new(a, b, c)
        .classify()
        .with_context(|| format!("classifying ({a}, {b}, {c})"))?;
    Ok(serde_json::json!({
        "sides": [a, b, c],
        "kind": kind.label(),
    }))
}

fn run(input: &Path, out: &Path, tag: Option<String>) -> Result<batch::Summary> {
    tracing::info!(input = %input.display(), out = %out.display(), tag = ?tag, "run");
    let df = batch::read_sides_csv(input)?;
    let results = batch::classify_frame(&df)?;
    let summary = batch::Summary::from_results(&results);
    tracing::info!(
        rows = summary.rows,
        equilateral = summary.equilateral,
        isosceles = summary.isosceles,
        scalene = summary.scalene,
        invalid = summary.invalid,
        "classified"
    );

    create_parent_dir(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(&results)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let params = serde_json::json!({
        "input": input.to_string_lossy(),
        "summary": &summary,
    });
    write_sidecar(out, Payload::new("run", params).with_tag(tag))?;
    Ok(summary)
}

fn sample(
    cfg: SampleCfg,
    seed: u64,
    count: u64,
    out: &Path,
    tag: Option<String>,
) -> Result<Vec<Sides<f64>>> {
    tracing::info!(count, seed, kind = ?cfg.kind, out = %out.display(), tag = ?tag, "sample");
    let sides = draw_many(cfg, seed, count)?;
    batch::write_sides_csv(out, &sides)?;

    let kind = match cfg.kind {
        KindChoice::Any => "any",
        KindChoice::Exactly(k) => k.label(),
    };
    let params = serde_json::json!({
        "count": count,
        "seed": seed,
        "kind": kind,
        "min_side": cfg.min_side,
        "max_side": cfg.max_side,
    });
    write_sidecar(out, Payload::new("sample", params).with_tag(tag))?;
    Ok(sides)
}

fn report(tag: Option<String>) -> Value {
    Payload::new("report", serde_json::json!({}))
        .with_tag(tag)
        .to_json(&[])
}
