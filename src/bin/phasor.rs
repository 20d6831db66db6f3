use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "phasor", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write frame records and scene geometry as JSON lines.
    Frames(FramesArgs),
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render a PNG sequence into a directory.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Input scene config JSON (defaults apply when omitted).
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Number of frames (defaults to the config's max_frames).
    #[arg(long)]
    count: Option<u64>,

    /// Output file; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input scene config JSON (defaults apply when omitted).
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input scene config JSON (defaults apply when omitted).
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Number of frames (defaults to the config's max_frames).
    #[arg(long)]
    count: Option<u64>,

    /// Output directory for frame_NNNNN.png files.
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frames(args) => cmd_frames(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<phasor::SceneConfig> {
    let cfg = match path {
        Some(p) => phasor::SceneConfig::from_path(p)
            .with_context(|| format!("load scene config '{}'", p.display()))?,
        None => phasor::SceneConfig::default(),
    };
    cfg.validate().context("validate scene config")?;
    Ok(cfg)
}

fn frame_count(cfg: &phasor::SceneConfig, count: Option<u64>) -> anyhow::Result<u64> {
    let count = count.unwrap_or(cfg.max_frames);
    anyhow::ensure!(
        count <= cfg.max_frames,
        "--count {count} exceeds max_frames {}",
        cfg.max_frames
    );
    Ok(count)
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.in_path.as_deref())?;
    let count = frame_count(&cfg, args.count)?;
    let mut player = phasor::Player::new(cfg)?;

    let out: Box<dyn Write> = match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            Box::new(BufWriter::new(f))
        }
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    };
    let mut sink = phasor::JsonLinesSink::new(out);
    let stats = player.run(count, &mut sink)?;

    tracing::info!(frames = stats.frames, changes = stats.changes, "wrote frames");
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.in_path.as_deref())?;
    anyhow::ensure!(
        args.frame < cfg.max_frames,
        "--frame {} is past max_frames {}",
        args.frame,
        cfg.max_frames
    );
    let canvas = cfg.canvas;
    let mut player = phasor::Player::new(cfg)?;
    player.seek(phasor::FrameIndex(args.frame))?;
    let (_, scene) = player.step()?;

    let mut rasterizer = phasor::CpuRasterizer::new(canvas)?;
    let rgba = rasterizer.render(&scene)?;
    phasor::write_png(&args.out, &rgba)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.in_path.as_deref())?;
    let count = frame_count(&cfg, args.count)?;
    let mut player = phasor::Player::new(cfg)?;

    let mut sink = phasor::PngSequenceSink::new(&args.out_dir);
    let stats = player.run(count, &mut sink)?;

    eprintln!(
        "wrote {} frames to {}",
        stats.frames,
        args.out_dir.display()
    );
    Ok(())
}
