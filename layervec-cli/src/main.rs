use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "layervec", version)]
struct Cli {
    /// Log debug output (overridden by `RUST_LOG`).
    #[arg(long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a layer (JSON document or clipboard SVG) into a drawable.
    Convert(ConvertArgs),
    /// Print the decomposition of a transform list.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input layer: `.json` document or `.svg` clipboard export.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output XML path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// JSON file with conversion options.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit a `<shape>` drawable instead of a `<vector>`.
    #[arg(long, default_value_t = false)]
    shape: bool,

    /// Last node id already used; generated names continue after it.
    #[arg(long, default_value_t = 0)]
    start_id: u64,

    /// Emit XML comments describing fills and shadows.
    #[arg(long, default_value_t = false)]
    comments: bool,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Transform list, e.g. `translate(10 20) rotate(30) scale(4 2)`.
    #[arg(long)]
    transform: String,

    /// Shape width, enables the aspect-normalized sweep angle.
    #[arg(long, requires = "height")]
    width: Option<f64>,

    /// Shape height.
    #[arg(long, requires = "width")]
    height: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Convert(args) => cmd_convert(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_opts(path: Option<&Path>) -> anyhow::Result<layervec::ConvertOpts> {
    let Some(path) = path else {
        return Ok(layervec::ConvertOpts::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse config '{}'", path.display()))
}

fn cmd_convert(args: ConvertArgs) -> anyhow::Result<()> {
    let mut opts = load_opts(args.config.as_deref())?;
    if args.shape {
        opts.target.shape_drawable = true;
    }
    if args.comments {
        opts.emit_comments = true;
    }

    let text = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read input '{}'", args.in_path.display()))?;
    let is_svg = args
        .in_path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
    let ids = layervec::IdCounter::new(args.start_id);

    let out = if is_svg {
        layervec::convert_svg(&text, &opts, ids)
    } else {
        layervec::convert_json(&text, &opts, ids)
    }
    .with_context(|| format!("convert '{}'", args.in_path.display()))?;
    tracing::debug!(next_id = out.ids.value(), "conversion finished");

    match args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&path, &out.xml)
                .with_context(|| format!("write xml '{}'", path.display()))?;
            eprintln!("wrote {} (last id {})", path.display(), out.ids.value());
        }
        None => print!("{}", out.xml),
    }
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let m = layervec::parse_transform_list(&args.transform)
        .with_context(|| format!("parse transform '{}'", args.transform))?;
    let decomposed = layervec::transform::affine::decompose(m);

    let mut report = serde_json::json!({
        "matrix": m.as_coeffs(),
        "decomposed": decomposed,
    });
    if let (Some(w), Some(h)) = (args.width, args.height) {
        report["sweep_rotation_deg"] =
            serde_json::json!(layervec::transform::affine::normalized_axis_angle_deg(m, w, h));
    }
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
