use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use edgemap::viz::{self, SnapshotOptions};
use edgemap::{data, geo, stats, storage};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "edgemap",
    version,
    about = "Render & export the dotted world-traffic map"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a map snapshot to an SVG file.
    Render(RenderArgs),
    /// Export the built-in dataset (countries, markers).
    Export(ExportArgs),
    /// Print dataset statistics to stdout.
    Stats,
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Output path (.svg).
    #[arg(short, long)]
    out: PathBuf,
    /// GeoJSON file with country boundaries (features carrying ISO_A2).
    /// Without it, only the markers render.
    #[arg(short, long)]
    geography: Option<PathBuf>,
    /// Width of the canvas (default 1000).
    #[arg(long, default_value_t = 1000)]
    width: u32,
    /// Height of the canvas (default 560).
    #[arg(long, default_value_t = 560)]
    height: u32,
    /// Seconds into the entrance animation (default: settled).
    #[arg(long, default_value_t = 3.0)]
    time: f64,
    /// Marker id to render as hovered, with its tooltip (e.g. LHR).
    #[arg(long)]
    hover: Option<String>,
    /// Draw the top-countries legend.
    #[arg(long, default_value_t = false)]
    legend: bool,
    /// Locale for legend number formatting (e.g. en, de).
    #[arg(long, default_value = "en")]
    locale: String,
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Save country rows to this file (format from --format or extension).
    #[arg(long)]
    out: PathBuf,
    /// Output format (csv or json). If omitted, inferred from the extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
    /// Also save the marker list as JSON to this path.
    #[arg(long)]
    markers: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Export(args) => cmd_export(args),
        Command::Stats => cmd_stats(),
    }
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let shapes = match args.geography.as_ref() {
        Some(path) => geo::load_geojson(path)?,
        None => Vec::new(),
    };
    let opts = SnapshotOptions {
        width: args.width,
        height: args.height,
        elapsed: args.time,
        hover: args.hover,
        legend: args.legend,
        locale: args.locale,
        ..SnapshotOptions::default()
    };
    viz::render_snapshot(&shapes, &data::region_markers(), &args.out, &opts)?;
    eprintln!("Wrote map to {}", args.out.display());
    Ok(())
}

fn cmd_export(args: ExportArgs) -> Result<()> {
    let rows = data::country_stats();
    let fmt = match args.format {
        Some(OutFormat::Csv) => "csv",
        Some(OutFormat::Json) => "json",
        None => args
            .out
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("csv"),
    }
    .to_ascii_lowercase();
    match fmt.as_str() {
        "csv" => storage::save_csv(&rows, &args.out)?,
        "json" => storage::save_json(&rows, &args.out)?,
        other => anyhow::bail!("unsupported format: {}", other),
    }
    eprintln!("Saved {} rows to {}", rows.len(), args.out.display());

    if let Some(path) = args.markers.as_ref() {
        let markers = data::region_markers();
        storage::save_markers_json(&markers, path)?;
        eprintln!("Saved {} markers to {}", markers.len(), path.display());
    }
    Ok(())
}

fn cmd_stats() -> Result<()> {
    let rows = data::country_stats();
    let summary = stats::dataset_summary(&rows);
    let totals = data::network_totals();
    println!(
        "countries={} total_requests={} ({})",
        summary.countries,
        summary.total_requests,
        data::format_compact(summary.total_requests)
    );
    println!(
        "network: requests={} deployments={} cache_hits={}",
        data::format_compact(totals.total_requests),
        data::format_compact(totals.total_deployments),
        data::format_compact(totals.cache_hits)
    );
    for share in stats::country_shares(&rows) {
        println!(
            "{} {:<14} {:>10}  {:>5.2}%",
            share.code,
            share.name,
            data::format_compact(share.request_count),
            share.share_pct
        );
    }
    Ok(())
}
