use std::{fs, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "propstack", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Split an extent among proportional requests and print one extent per line.
    Allocate(AllocateArgs),
    /// Evaluate a layout document and print its placements as JSON.
    Place(PlaceArgs),
}

#[derive(Parser, Debug)]
struct AllocateArgs {
    /// Extent to split. Negative or non-finite totals allocate nothing.
    #[arg(long, allow_negative_numbers = true)]
    total: f64,

    /// Offer the budget by descending priority instead of in order.
    #[arg(long)]
    priority_order: bool,

    /// Fail instead of silently dropping requests that do not fit.
    #[arg(long)]
    strict: bool,

    /// Requests as `PROPORTION[:PRIORITY]`; a proportion of `0` means unspecified.
    #[arg(required = false, allow_hyphen_values = true)]
    requests: Vec<String>,
}

#[derive(Parser, Debug)]
struct PlaceArgs {
    /// Input layout document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Pretty-print the output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Allocate(args) => cmd_allocate(args),
        Command::Place(args) => cmd_place(args),
    }
}

fn parse_request(raw: &str) -> anyhow::Result<propstack::ChildRequest> {
    let (proportion, priority) = match raw.split_once(':') {
        Some((p, prio)) => (p, Some(prio)),
        None => (raw, None),
    };
    let proportion: f64 = proportion
        .trim()
        .parse()
        .with_context(|| format!("parse proportion in '{raw}'"))?;
    let mut request = propstack::ChildRequest::from_fraction(proportion);
    if let Some(prio) = priority {
        let prio: i32 = prio
            .trim()
            .parse()
            .with_context(|| format!("parse priority in '{raw}'"))?;
        request = request.with_priority(prio);
    }
    Ok(request)
}

fn cmd_allocate(args: AllocateArgs) -> anyhow::Result<()> {
    let requests = args
        .requests
        .iter()
        .map(|r| parse_request(r))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let order = if args.priority_order {
        propstack::AllocationOrder::Priority
    } else {
        propstack::AllocationOrder::Sequence
    };

    let extents = if args.strict {
        propstack::allocate_strict(&requests, args.total, order)?
    } else {
        propstack::allocate_with(&requests, args.total, order)
    };
    for extent in extents {
        println!("{extent}");
    }
    Ok(())
}

fn cmd_place(args: PlaceArgs) -> anyhow::Result<()> {
    let json = fs::read_to_string(&args.in_path)
        .with_context(|| format!("open layout document '{}'", args.in_path.display()))?;
    let doc = propstack::LayoutDocument::from_json(&json)
        .with_context(|| format!("parse layout document '{}'", args.in_path.display()))?;
    let layout = doc.evaluate()?;

    let out = if args.pretty {
        serde_json::to_string_pretty(&layout)
    } else {
        serde_json::to_string(&layout)
    }
    .context("serialize placements")?;
    println!("{out}");
    Ok(())
}
