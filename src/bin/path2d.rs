use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use path2d::RenderContext2d as _;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "path2d", version)]
struct Cli {
    /// Log at debug level unless `RUST_LOG` says otherwise.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Measure the raster bounding box of a path string.
    Bbox(BboxArgs),
    /// Print a path string as absolute commands (JSON).
    Translate(TranslateArgs),
    /// Replay a JSON path log onto a blank canvas and write a PNG.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct BboxArgs {
    /// Path data.
    #[arg(long, allow_hyphen_values = true)]
    d: String,

    /// Line cap used while rendering.
    #[arg(long, default_value = "butt")]
    line_cap: path2d::LineCap,

    /// Line join used while rendering.
    #[arg(long, default_value = "miter")]
    line_join: path2d::LineJoin,

    /// Stroke color (CSS syntax).
    #[arg(long, default_value = "black")]
    stroke_color: path2d::Color,

    /// Fill color (CSS syntax).
    #[arg(long, default_value = "transparent")]
    fill_color: path2d::Color,

    /// Offscreen surface width (defaults to `PATH2D_SCAN_WIDTH` or 2048).
    #[arg(long)]
    scan_width: Option<u32>,

    /// Offscreen surface height (defaults to `PATH2D_SCAN_HEIGHT` or 2048).
    #[arg(long)]
    scan_height: Option<u32>,

    /// Print the box as JSON instead of `x y width height`.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Path data.
    #[arg(long, allow_hyphen_values = true)]
    d: String,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input log JSON: a full `PathLog` or a bare array of commands.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 512)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 512)]
    height: u32,

    /// Paint mode.
    #[arg(long, value_enum, default_value_t = ModeChoice::Stroke)]
    mode: ModeChoice,

    /// Line width.
    #[arg(long, default_value_t = 1.0)]
    line_width: f64,

    /// Line cap.
    #[arg(long, default_value = "butt")]
    line_cap: path2d::LineCap,

    /// Line join.
    #[arg(long, default_value = "miter")]
    line_join: path2d::LineJoin,

    /// Stroke color (CSS syntax).
    #[arg(long, default_value = "black")]
    stroke_color: path2d::Color,

    /// Fill color (CSS syntax).
    #[arg(long, default_value = "black")]
    fill_color: path2d::Color,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeChoice {
    Stroke,
    Fill,
}

impl From<ModeChoice> for path2d::PaintMode {
    fn from(m: ModeChoice) -> Self {
        match m {
            ModeChoice::Stroke => path2d::PaintMode::Stroke,
            ModeChoice::Fill => path2d::PaintMode::Fill,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Bbox(args) => cmd_bbox(args),
        Command::Translate(args) => cmd_translate(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn cmd_bbox(args: BboxArgs) -> anyhow::Result<()> {
    let defaults = path2d::ScanSettings::from_env();
    let settings = path2d::ScanSettings {
        width: args.scan_width.unwrap_or(defaults.width),
        height: args.scan_height.unwrap_or(defaults.height),
    };
    let opts = path2d::BoundingBoxOptions {
        d: args.d,
        line_cap: args.line_cap,
        line_join: args.line_join,
        stroke_color: args.stroke_color,
        fill_color: args.fill_color,
    };

    let bbox = path2d::BoundingBoxScanner::with_settings(settings)
        .compute(&opts)
        .context("compute bounding box")?;

    if args.json {
        println!("{}", serde_json::to_string(&bbox)?);
    } else {
        println!("{} {} {} {}", bbox.x, bbox.y, bbox.width, bbox.height);
    }
    Ok(())
}

fn cmd_translate(args: TranslateArgs) -> anyhow::Result<()> {
    let segments = path2d::translate(&args.d)?;
    let commands: Vec<path2d::AbsCommand> = segments.into_iter().map(|s| s.command).collect();
    println!("{}", serde_json::to_string_pretty(&commands)?);
    Ok(())
}

fn read_log_json(path: &Path) -> anyhow::Result<path2d::PathLog> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("read path log '{}'", path.display()))?;
    let log = path2d::PathLog::from_json(&json).with_context(|| "parse path log JSON")?;
    Ok(log)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let log = read_log_json(&args.in_path)?;

    let mut canvas = path2d::CpuCanvas::new(args.width, args.height)?;
    canvas.set_paint_style(&path2d::PaintStyle {
        line_width: args.line_width,
        line_cap: args.line_cap,
        line_join: args.line_join,
        stroke: args.stroke_color,
        fill: args.fill_color,
    });
    path2d::draw(&log, &mut canvas, args.mode.into())?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let pixels = canvas.get_image_data(0, 0, args.width, args.height)?;
    image::save_buffer_with_format(
        &args.out,
        &pixels.data,
        pixels.width,
        pixels.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
